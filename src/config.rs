use crate::storage::resolve_data_path;
use std::{env, path::PathBuf, time::Duration};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_SWEEP_SECS: u64 = 60;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub data_path: PathBuf,
    pub sweep_interval: Duration,
}

impl Config {
    /// Reads `PORT`, `APP_DATA_PATH` and `SWEEP_INTERVAL_SECS`; unset or
    /// unparseable values fall back to defaults.
    pub fn from_env() -> Self {
        let port = env_number("PORT").unwrap_or(DEFAULT_PORT);
        let sweep_secs = env_number::<u64>("SWEEP_INTERVAL_SECS")
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_SWEEP_SECS);

        Self {
            port,
            data_path: resolve_data_path(),
            sweep_interval: Duration::from_secs(sweep_secs),
        }
    }
}

fn env_number<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|value| value.trim().parse::<T>().ok())
}
