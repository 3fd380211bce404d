//! Server configuration from environment variables.
//!
//! - `CONTACTS_HOST`: listen host (default: "localhost")
//! - `CONTACTS_PORT`: listen port (default: "3000")
//! - `CONTACTS_DELETE_DELAY_MS`: artificial delete delay (default: "3000")
//! - `CONTACTS_ASSETS_DIR`: directory holding `css/` and `images/` (default: "static")

use std::path::PathBuf;
use std::time::Duration;

pub const HOST_VAR: &str = "CONTACTS_HOST";
pub const PORT_VAR: &str = "CONTACTS_PORT";
pub const DELETE_DELAY_VAR: &str = "CONTACTS_DELETE_DELAY_MS";
pub const ASSETS_DIR_VAR: &str = "CONTACTS_ASSETS_DIR";

/// Errors from reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set but could not be parsed.
    #[error("invalid value for {var}: '{value}'")]
    Invalid { var: &'static str, value: String },
}

/// Runtime settings for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// How long a delete waits between choosing its target and removing it.
    pub delete_delay: Duration,
    pub assets_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: "localhost".to_string(),
            port: 3000,
            delete_delay: Duration::from_secs(3),
            assets_dir: PathBuf::from("static"),
        }
    }
}

impl ServerConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Reads configuration through `lookup`, falling back to defaults for
    /// unset variables.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ServerConfig::default();

        let host = lookup(HOST_VAR).unwrap_or(defaults.host);
        let port = match lookup(PORT_VAR) {
            Some(value) => parse_var(PORT_VAR, value)?,
            None => defaults.port,
        };
        let delete_delay = match lookup(DELETE_DELAY_VAR) {
            Some(value) => Duration::from_millis(parse_var(DELETE_DELAY_VAR, value)?),
            None => defaults.delete_delay,
        };
        let assets_dir = lookup(ASSETS_DIR_VAR)
            .map(PathBuf::from)
            .unwrap_or(defaults.assets_dir);

        Ok(ServerConfig {
            host,
            port,
            delete_delay,
            assets_dir,
        })
    }

    /// The `host:port` string to bind.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T: std::str::FromStr>(var: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { var, value })
}
