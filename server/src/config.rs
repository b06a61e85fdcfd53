//! Server configuration parsed from environment variables.
//!
//! Values come from the process environment after `dotenvy` has loaded an
//! optional `.env` file. Leptos' own options (output name, site address)
//! still come from `leptos::get_configuration`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT `{0}`; expected 1-65535")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Overrides the Leptos site root (the directory holding `pkg/`).
    pub site_root: Option<PathBuf>,
}

impl ServerConfig {
    /// Optional:
    /// - `PORT`: default 3000
    /// - `FLEET_SITE_ROOT`: default from the Leptos configuration
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but not a valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(std::env::var("PORT").ok().as_deref(), std::env::var("FLEET_SITE_ROOT").ok().as_deref())
    }

    /// # Errors
    ///
    /// Returns an error if `port` is present but not a valid port number.
    pub fn from_values(port: Option<&str>, site_root: Option<&str>) -> Result<Self, ConfigError> {
        Ok(Self { port: parse_port(port)?, site_root: parse_site_root(site_root) })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(DEFAULT_PORT);
    };
    match raw.parse::<u16>() {
        Ok(0) | Err(_) => Err(ConfigError::InvalidPort(raw.to_owned())),
        Ok(port) => Ok(port),
    }
}

fn parse_site_root(raw: Option<&str>) -> Option<PathBuf> {
    raw.map(str::trim).filter(|v| !v.is_empty()).map(PathBuf::from)
}
