//! Server configuration.
//!
//! Loaded from `~/.config/unistyle/config.yaml` (or a path passed with
//! `--config`). Every field is optional in the file and falls back to the
//! functions in [`defaults`].
//!
//! # Sub-modules
//!
//! - [`defaults`]: value functions referenced by serde attributes
//! - [`error`]: [`ConfigError`]
//! - `persistence`: load, save and path resolution

pub mod defaults;
pub mod error;
mod persistence;

pub use error::ConfigError;

use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use crate::cli::RuntimeOptions;

/// Log verbosity, shared by the config file and the `--log-level` flag.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// No logging
    Off,
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Startup, shutdown and listen address
    #[default]
    Info,
    /// Every request
    Debug,
    /// Most verbose
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Runtime settings for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Interface to listen on.
    #[serde(default = "defaults::bind_address")]
    pub bind_address: String,

    #[serde(default = "defaults::port")]
    pub port: u16,

    /// Serve the client page from this directory instead of the built-in copy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub static_dir: Option<PathBuf>,

    /// Value of `Access-Control-Allow-Origin`. `*` allows any origin.
    #[serde(default = "defaults::cors_allow_origin")]
    pub cors_allow_origin: String,

    /// Largest accepted request body.
    #[serde(default = "defaults::max_body_bytes")]
    pub max_body_bytes: usize,

    #[serde(default)]
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: defaults::bind_address(),
            port: defaults::port(),
            static_dir: None,
            cors_allow_origin: defaults::cors_allow_origin(),
            max_body_bytes: defaults::max_body_bytes(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply command-line overrides on top of file values.
    pub fn apply_overrides(&mut self, options: &RuntimeOptions) {
        if let Some(bind) = &options.bind {
            self.bind_address = bind.clone();
        }
        if let Some(port) = options.port {
            self.port = port;
        }
        if let Some(dir) = &options.static_dir {
            self.static_dir = Some(dir.clone());
        }
        if let Some(level) = options.log_level {
            self.log_level = level;
        }
    }

    /// Address the server binds to.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self.bind_address.trim().parse().map_err(|_| {
            ConfigError::Validation(format!(
                "bind_address '{}' is not an IP address",
                self.bind_address
            ))
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Check field values that serde cannot check on its own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.socket_addr()?;

        if self.max_body_bytes == 0 {
            return Err(ConfigError::Validation(
                "max_body_bytes must be greater than zero".to_string(),
            ));
        }

        if self.cors_allow_origin.trim().is_empty() {
            return Err(ConfigError::Validation(
                "cors_allow_origin must not be empty (use \"*\" to allow any origin)".to_string(),
            ));
        }

        if let Some(dir) = &self.static_dir {
            if !dir.is_dir() {
                return Err(ConfigError::Validation(format!(
                    "static_dir '{}' is not a directory",
                    dir.display()
                )));
            }
        }

        Ok(())
    }
}
