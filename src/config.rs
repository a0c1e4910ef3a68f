use anyhow::{Context, Result};
use std::{env, fmt::Display, path::PathBuf, str::FromStr};
use tracing::{info, warn};

pub const DEFAULT_API_URL: &str = "http://localhost:5000";
const DEFAULT_TIMEOUT_SECS: &str = "30";

/// Runtime settings, read from the environment
#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub storage_path: PathBuf,
    pub timeout_secs: u64,
}

impl Config {
    pub fn load() -> Result<Self> {
        Ok(Self {
            api_url: try_load("HOMEFINDER_API_URL", DEFAULT_API_URL)?,
            storage_path: storage_path()?,
            timeout_secs: try_load("HOMEFINDER_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?,
        })
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn try_load<T: FromStr>(key: &str, default: &str) -> Result<T>
where
    T::Err: Display,
{
    let raw = var(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    raw.parse().map_err(|e| {
        warn!("Invalid {key} value: {e}");
        anyhow::anyhow!("Environment misconfigured: {key}={raw}: {e}")
    })
}

/// Location of the local-storage file holding the session
fn storage_path() -> Result<PathBuf> {
    if let Some(path) = var("HOMEFINDER_STORAGE") {
        return Ok(PathBuf::from(path));
    }

    let base = dirs::data_local_dir()
        .or_else(dirs::home_dir)
        .context("Could not determine a data directory for local storage")?;
    Ok(base.join("homefinder").join("local_storage.json"))
}
