//! Server process configuration.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use armorset_runtime::DEFAULT_REFRESH_DELAY;

/// Configuration required to start the set service.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub data_dir: PathBuf,
    pub refresh_delay: Duration,
    pub log_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            refresh_delay: DEFAULT_REFRESH_DELAY,
            log_dir: None,
        }
    }
}

impl ServerConfig {
    /// Directory holding the set definition files.
    pub fn sets_dir(&self) -> PathBuf {
        self.data_dir.join("sets")
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ARMORSET_DATA_DIR` - Plugin data directory (default: `./data`)
    /// - `ARMORSET_REFRESH_DELAY_MS` - Deferred refresh delay (default: 50)
    /// - `ARMORSET_LOG_DIR` - Also log to a file in this directory (optional)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = lookup("ARMORSET_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }

        if let Some(millis) = read_env::<u64>(&lookup, "ARMORSET_REFRESH_DELAY_MS") {
            config.refresh_delay = Duration::from_millis(millis);
        }

        config.log_dir = lookup("ARMORSET_LOG_DIR").map(PathBuf::from);

        config
    }
}

fn read_env<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}
