//! Shared models used across features
//!
//! The operation model lives here because it is produced by the front end and
//! consumed by every analysis feature.

pub mod models;
