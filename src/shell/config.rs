// Service configuration, read from environment variables.
//
// WORK_TIMER_BIND_ADDR  address to listen on (default 0.0.0.0:8080)
// WORK_TIMER_ENTRY_LOG  path of the flat-file entry log (default db.txt)

use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

pub const BIND_ADDR_VAR: &str = "WORK_TIMER_BIND_ADDR";
pub const ENTRY_LOG_VAR: &str = "WORK_TIMER_ENTRY_LOG";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_ENTRY_LOG: &str = "db.txt";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} is not a valid socket address: {value}")]
    InvalidBindAddr { name: &'static str, value: String },

    #[error("{name} must not be empty")]
    EmptyEntryLog { name: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub entry_log_path: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr {
                name: BIND_ADDR_VAR,
                value: bind_addr.clone(),
            })?;

        let entry_log_path = lookup(ENTRY_LOG_VAR).unwrap_or_else(|| DEFAULT_ENTRY_LOG.to_string());
        if entry_log_path.trim().is_empty() {
            return Err(ConfigError::EmptyEntryLog {
                name: ENTRY_LOG_VAR,
            });
        }

        Ok(Self {
            bind_addr,
            entry_log_path: PathBuf::from(entry_log_path),
        })
    }
}
