//! Runtime configuration read from the environment
//!
//! - `BASKETBALL_BIND_ADDR`: listen address, default `0.0.0.0:8000`
//! - `BASKETBALL_DATA_DIR`: directory for `events.jsonl` and `league.jsonl`,
//!   default `data`; relative paths resolve against the working directory
//! - `RUST_LOG`: log filter, read by the binary's subscriber

use std::env;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::error::{StatsError, StatsResult};
use crate::event_store::EventStoreConfig;

pub const BIND_ADDR_VAR: &str = "BASKETBALL_BIND_ADDR";
pub const DATA_DIR_VAR: &str = "BASKETBALL_DATA_DIR";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_DATA_DIR: &str = "data";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub data_dir: PathBuf,
}

impl AppConfig {
    /// Read the process environment
    pub fn from_env() -> StatsResult<Self> {
        let current_dir = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::from_lookup(|key| env::var(key).ok(), &current_dir)
    }

    /// Build from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F, current_dir: &Path) -> StatsResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind.parse::<SocketAddr>().map_err(|e| {
            StatsError::invalid_argument(format!("{} '{}': {}", BIND_ADDR_VAR, bind, e))
        })?;

        let data_dir = match lookup(DATA_DIR_VAR) {
            Some(dir) if Path::new(&dir).is_absolute() => PathBuf::from(dir),
            Some(dir) => current_dir.join(dir),
            None => current_dir.join(DEFAULT_DATA_DIR),
        };

        Ok(Self {
            bind_addr,
            data_dir,
        })
    }

    pub fn event_store_config(&self) -> EventStoreConfig {
        EventStoreConfig::new(&self.data_dir)
    }
}
