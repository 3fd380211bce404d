//! In-memory contact registry with serialized concurrent access.
//!
//! [`ContactRegistry`] is the single source of truth for contact state. It
//! owns the ordered contact collection and the [`IdSequence`] that numbers
//! it, both behind one lock.

pub mod contact;
pub mod error;
pub mod id;
pub mod registry;

// Re-export commonly used types
pub use contact::Contact;
pub use error::RegistryError;
pub use id::{ContactId, IdSequence};
pub use registry::{ContactRegistry, PendingDelete};
