//! Request-scoped models: configuration and the authenticated user.

pub mod auth;
pub mod config;
