//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of vocabulary shared between the
//! membership module and the host integrations that implement its store and
//! session traits:
//! - Common error type ([`error::app_error::AppError`]) and result alias
//! - Error classification ([`error::kind::ErrorKind`]) with HTTP mapping for
//!   hosts that surface failures over HTTP
//!
//! **Design Principle**: only include things that are "hard to change" and
//! have consistent meaning on both sides of the host boundary.

pub mod error {
    pub mod app_error;
    pub mod kind;
}

// Re-exports for convenience
pub use error::app_error::{AppError, AppResult, OptionExt, ResultExt};
pub use error::kind::ErrorKind;
