//! HTTP front end for the contact registry.
//!
//! Serves an htmx page listing contacts, accepts create and delete requests,
//! and answers with HTML fragments. All state lives in a single
//! [`ContactRegistry`](contacts_core::ContactRegistry) shared through
//! [`state::AppState`].

pub mod config;
pub mod error;
pub mod handlers;
pub mod render;
pub mod router;
pub mod schema;
pub mod state;
