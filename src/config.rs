//! Application configuration: channel list, peer binary wiring, and timeouts.
//!
//! Configuration is an explicit struct handed to the CLI app and the channel
//! service at construction time, loaded once at startup from the JSON file
//! named by the `FABRIC_SNAPSHOT_CONFIG` environment variable. A missing file
//! is not an error; every field has a usable default.

use crate::error::{AppError, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Environment variable naming the configuration file.
pub const CONFIG_ENV: &str = "FABRIC_SNAPSHOT_CONFIG";

const DEFAULT_PEER_BIN: &str = "peer";
const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Static configuration for one CLI run.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Channel names this network knows about. Constrains `--channel-name`
    /// and seeds interactive suggestions. Empty means unconstrained.
    pub channels: Vec<String>,

    /// Path to the Fabric `peer` binary.
    pub peer_bin: String,

    /// Upper bound on a single peer invocation, in seconds.
    pub service_timeout_secs: u64,

    /// `CORE_PEER_ADDRESS` exported to the peer process when set.
    pub core_peer_address: Option<String>,

    /// `CORE_PEER_LOCALMSPID` exported to the peer process when set.
    pub msp_id: Option<String>,

    /// `CORE_PEER_MSPCONFIGPATH` exported to the peer process when set.
    pub msp_config_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            channels: Vec::new(),
            peer_bin: DEFAULT_PEER_BIN.to_string(),
            service_timeout_secs: DEFAULT_TIMEOUT_SECS,
            core_peer_address: None,
            msp_id: None,
            msp_config_path: None,
        }
    }
}

impl Config {
    /// Loads configuration from the file named by [`CONFIG_ENV`], falling back
    /// to defaults when the variable is unset.
    pub fn load() -> Result<Self> {
        match env::var(CONFIG_ENV) {
            Ok(path) => Self::from_file(Path::new(&path)),
            Err(_) => {
                debug!("{} not set, using default configuration", CONFIG_ENV);
                Ok(Self::default())
            },
        }
    }

    /// Loads configuration from an explicit JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        let config: Config = serde_json::from_str(&raw)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {}", path.display(), e)))?;
        info!(
            "Loaded configuration from {} ({} channels)",
            path.display(),
            config.channels.len()
        );
        Ok(config)
    }

    /// Whether `name` is acceptable as a channel name under this configuration.
    pub fn allows_channel(&self, name: &str) -> bool {
        self.channels.is_empty() || self.channels.iter().any(|c| c == name)
    }
}
