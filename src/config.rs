use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// Environment variable naming a YAML configuration file.
pub const CONFIG_ENV: &str = "STATICD_CONFIG";

/// Environment variable overriding `server.listen_addr`.
pub const LISTEN_ENV: &str = "LISTEN";

/// Process-wide server configuration.
///
/// Built once at startup and shared read-only with every connection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub static_files: StaticFilesConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the listener binds to (e.g. "127.0.0.1:8080")
    pub listen_addr: String,
    /// Emit per-connection notices (opened, served, closed)
    pub verbose: bool,
    /// Value of the `Server` response header
    pub server_name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StaticFilesConfig {
    /// Document root every request path is resolved under
    pub root: PathBuf,
    /// File served for paths ending in `/`
    pub home: String,
    /// Page sent with 404 responses, relative to `root`
    pub not_found_page: String,
    /// Page sent with 501 responses, relative to `root`
    pub not_supported_page: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8080".to_string(),
            verbose: true,
            server_name: concat!("staticd/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            home: "index.html".to_string(),
            not_found_page: "fileNotFound.html".to_string(),
            not_supported_page: "methodNoSupport.html".to_string(),
        }
    }
}

impl Config {
    /// Loads the configuration for this process.
    ///
    /// Reads the YAML file named by `STATICD_CONFIG` when set, otherwise
    /// starts from the defaults. `LISTEN` overrides the listen address.
    pub fn load() -> anyhow::Result<Self> {
        let mut cfg = match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };

        if let Ok(listen_addr) = std::env::var(LISTEN_ENV) {
            cfg.server.listen_addr = listen_addr;
        }

        Ok(cfg)
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::from_yaml(&raw).with_context(|| format!("parsing config file {}", path.display()))
    }

    pub fn from_yaml(raw: &str) -> anyhow::Result<Self> {
        // An empty document deserializes to unit, not to an empty mapping.
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(raw)?)
    }
}
