//! Request and view-model types.
//!
//! Form bodies use serde derives for urlencoded deserialization.

pub mod contacts;
