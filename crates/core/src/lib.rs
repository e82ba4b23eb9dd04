//! Domain logic for the citizen cybercrime-reporting portal.
//!
//! This crate is pure: no HTTP, no storage, no I/O. The api crate owns
//! session storage and the wire surface; everything here operates on
//! in-memory flow state and returns [`error::CoreError`] on violation.

pub mod auth;
pub mod awareness;
pub mod captcha;
pub mod error;
pub mod identity;
pub mod notify;
pub mod report;
pub mod types;
pub mod wizard;
