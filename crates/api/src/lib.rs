//! Catalog API server library.
//!
//! Exposes the building blocks (config, state, router, routes) so the
//! integration tests and the binary entrypoint can both access them.

pub mod config;
pub mod router;
pub mod routes;
pub mod state;
