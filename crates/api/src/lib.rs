//! Basic template API server library.
//!
//! Exposes the building blocks (config, state, error handling, routes,
//! runtime selection) so integration tests and the binary entrypoint can
//! both access them.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod routes;
pub mod runtime;
pub mod state;
