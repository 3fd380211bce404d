//! Core error types for contacts-core.
//!
//! The registry has exactly one failure mode. Deleting an unknown id is a
//! no-op, not an error.

use thiserror::Error;

/// Errors produced by [`ContactRegistry`](crate::ContactRegistry) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A live contact already uses this email address.
    #[error("email already in use: '{email}'")]
    DuplicateEmail { email: String },
}
