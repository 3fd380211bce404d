//! Application state shared by every handler.
//!
//! [`AppState`] holds the one [`ContactRegistry`] for the process behind an
//! `Arc`. The registry does its own locking, so the state itself is plain
//! `Clone` data and handlers never hold a lock across an `.await` of their
//! own.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use contacts_core::ContactRegistry;

use crate::config::ServerConfig;

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// The process-wide contact registry.
    pub registry: Arc<ContactRegistry>,
    /// Wait inserted between deciding a delete and committing it.
    pub delete_delay: Duration,
    /// Root of the `css/` and `images/` directories.
    pub assets_dir: PathBuf,
}

impl AppState {
    /// Creates the startup state: the seeded registry plus settings from
    /// `config`.
    pub fn new(config: &ServerConfig) -> Self {
        AppState {
            registry: Arc::new(ContactRegistry::seeded()),
            delete_delay: config.delete_delay,
            assets_dir: config.assets_dir.clone(),
        }
    }

    /// Creates state around an existing registry (for testing).
    pub fn with_registry(registry: Arc<ContactRegistry>, delete_delay: Duration) -> Self {
        AppState {
            registry,
            delete_delay,
            assets_dir: ServerConfig::default().assets_dir,
        }
    }
}
