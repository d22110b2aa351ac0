//! Shared primitives for the basic template service.
//!
//! Kept free of any database or HTTP dependency so both the repository layer
//! and the API layer can depend on it.

pub mod error;
pub mod pagination;
pub mod types;
