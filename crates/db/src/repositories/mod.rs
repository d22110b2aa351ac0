//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods that
//! accept a connection as the first argument. Callers own the transaction
//! the connection belongs to and decide when to commit.

pub mod dummy_repo;

pub use dummy_repo::DummyRepo;
