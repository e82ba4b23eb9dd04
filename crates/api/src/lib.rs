//! Citizen cybercrime-reporting portal API server library.
//!
//! Exposes the building blocks (config, state, error handling, routes,
//! session stores, identity providers) so integration tests and the binary
//! entrypoint can both access them.

pub mod config;
pub mod error;
pub mod handlers;
pub mod identity;
pub mod notify;
pub mod response;
pub mod routes;
pub mod sessions;
pub mod state;
