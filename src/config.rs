//! Server configuration.
//!
//! Values come from built-in defaults, an optional YAML file named by the
//! `TINYWEB_CONFIG` environment variable, and finally the optional port
//! given on the command line.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use crate::http::mime::MimeTable;

/// Environment variable holding the path of the YAML config file.
pub const CONFIG_ENV: &str = "TINYWEB_CONFIG";

pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub static_files: StaticFilesConfig,
    pub mime_types: MimeTable,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind to.
    pub bind: String,
    pub port: u16,
    /// Host accepted in the `Host:` line of HTTP/1.1 requests.
    pub trusted_host: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            trusted_host: "127.0.0.1".to_string(),
        }
    }
}

impl ServerConfig {
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StaticFilesConfig {
    /// Directory requested resources are resolved against.
    pub root: PathBuf,
    pub bad_request_page: String,
    pub not_found_page: String,
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            bad_request_page: "error400.html".to_string(),
            not_found_page: "error404.html".to_string(),
        }
    }
}

impl Config {
    /// Loads the config file named by `TINYWEB_CONFIG` (if set) and applies
    /// the command line port argument on top of it.
    pub fn load(port_arg: Option<&str>) -> anyhow::Result<Self> {
        let path = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        Self::load_from(path.as_deref(), port_arg)
    }

    pub fn load_from(path: Option<&Path>, port_arg: Option<&str>) -> anyhow::Result<Self> {
        let mut cfg = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(arg) = port_arg {
            cfg.server.port = parse_port(arg, cfg.server.port);
        }

        Ok(cfg)
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_yaml_str(&text)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn from_yaml_str(text: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }
}

/// Parses a port argument, falling back to `default` when it is not a
/// valid port number.
pub fn parse_port(arg: &str, default: u16) -> u16 {
    match arg.trim().parse::<u16>() {
        Ok(port) => port,
        Err(_) => {
            tracing::warn!(
                argument = arg,
                "Non integer value for port number, using {} instead",
                default
            );
            default
        }
    }
}
