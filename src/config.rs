use std::net::IpAddr;
use std::path::PathBuf;

use tracing::trace;

use crate::simulator::DEFAULT_CHANGE_PROBABILITY;
use crate::storage::{DocumentBackend, file::JsonFileBackend, memory::MemoryBackend};

/// Storage backend configuration
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(tag = "backend", rename_all = "lowercase")]
pub enum StorageConfig {
    /// In-memory storage (no persistence)
    #[serde(rename = "none")]
    None,

    /// JSON document on disk (default)
    File {
        /// Path to the document
        #[serde(default = "crate::util::get_db_path")]
        path: PathBuf,
    },
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig::File {
            path: crate::util::get_db_path(),
        }
    }
}

impl StorageConfig {
    /// Instantiate the configured backend
    pub fn into_backend(self) -> Box<dyn DocumentBackend> {
        match self {
            StorageConfig::None => Box::new(MemoryBackend::new()),
            StorageConfig::File { path } => Box::new(JsonFileBackend::new(path)),
        }
    }
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct SimulationConfig {
    /// Per-service probability of a random status change on refresh
    #[serde(default = "default_change_probability")]
    pub change_probability: f64,

    /// Refresh automatically every N seconds (off if unset)
    pub refresh_interval_secs: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            change_probability: default_change_probability(),
            refresh_interval_secs: None,
        }
    }
}

fn default_change_probability() -> f64 {
    DEFAULT_CHANGE_PROBABILITY
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct ApiSettings {
    #[serde(default = "default_enable_cors")]
    pub enable_cors: bool,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            enable_cors: default_enable_cors(),
        }
    }
}

fn default_enable_cors() -> bool {
    true
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct Config {
    /// Address to bind the API server to (falls back to `BIND_ADDR`)
    pub bind: Option<IpAddr>,

    /// Port to bind the API server to (falls back to `PORT`)
    pub port: Option<u16>,

    /// Storage configuration (optional - defaults to the JSON file)
    pub storage: Option<StorageConfig>,

    pub simulation: Option<SimulationConfig>,

    pub api: Option<ApiSettings>,
}

impl Config {
    pub fn bind_addr(&self) -> IpAddr {
        self.bind.unwrap_or_else(crate::util::get_addr)
    }

    pub fn port(&self) -> u16 {
        self.port.unwrap_or_else(crate::util::get_port)
    }

    pub fn storage(&self) -> StorageConfig {
        self.storage.clone().unwrap_or_default()
    }

    pub fn simulation(&self) -> SimulationConfig {
        self.simulation.clone().unwrap_or_default()
    }

    pub fn api(&self) -> ApiSettings {
        self.api.clone().unwrap_or_default()
    }
}

pub fn read_config_file(path: &str) -> anyhow::Result<Config> {
    let file_content = std::fs::read_to_string(path)?;
    parse_config(&file_content)
}

pub fn parse_config(raw: &str) -> anyhow::Result<Config> {
    serde_json::from_str(raw)
        .map_err(|e| anyhow::anyhow!("Invalid configuration file provided! ({e})"))
        .inspect(|config| trace!("loaded config: {config:?}"))
}
