pub mod auth;
pub mod awareness;
pub mod reports;
