//! Common types and utilities shared across btreecheck.
//!
//! - Configuration ([`ValidatorConfig`])
//! - Error types ([`Error`], [`Result`])

pub mod config;
pub mod error;

pub use config::ValidatorConfig;
pub use error::{Error, Result};
