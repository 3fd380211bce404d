//! HTTP handler modules.
//!
//! Handlers parse the request, call the shared
//! [`ContactRegistry`](contacts_core::ContactRegistry), and render HTML.
//! Invariants live in the registry, not here.

pub mod contacts;
pub mod pages;
