//! Clients for external services.

pub mod explain;
