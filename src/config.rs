use std::{env, path::{Path, PathBuf}};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

pub const ENV_FILE_KEY: &str = "PINBRIDGE_ENV_FILE";
pub const LOG_LEVEL_KEY: &str = "PINBRIDGE_LOG_LEVEL";
pub const LOG_DIR_KEY: &str = "PINBRIDGE_LOG_DIR";

pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Runtime settings, read from the process environment and an optional `.env`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BridgeConfig {
    /// `EnvFilter` directive, e.g. `info` or `chat_model=debug`.
    pub log_level: String,
    /// When set, logs are also written to a daily rolling file in this directory.
    pub log_dir: Option<PathBuf>,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_dir: None,
        }
    }
}

impl BridgeConfig {
    /// Load `.env` (explicit path, `PINBRIDGE_ENV_FILE`, or `./.env`) into the
    /// process environment, then read the `PINBRIDGE_*` keys.
    ///
    /// An explicitly named file that does not exist is an error; a missing
    /// default `./.env` is not.
    pub fn load(env_file: Option<&Path>) -> Result<Self> {
        let explicit = env_file
            .map(Path::to_path_buf)
            .or_else(|| env::var(ENV_FILE_KEY).ok().map(PathBuf::from));

        match explicit {
            Some(path) => {
                if !path.exists() {
                    bail!("env file `{}` does not exist", path.display());
                }
                dotenvy::from_path(&path)
                    .with_context(|| format!("could not load env file `{}`", path.display()))?;
                info!("Loaded .env from {}", path.display());
            }
            None => match dotenvy::dotenv() {
                Ok(path) => info!("Loaded .env from {}", path.display()),
                Err(err) => debug!("no .env loaded: {err}"),
            },
        }

        Ok(Self::from_pairs(env::vars()))
    }

    /// Build a config from key/value pairs; unknown keys are ignored and empty
    /// values count as unset.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut config = Self::default();
        for (key, value) in pairs {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            match key.as_str() {
                LOG_LEVEL_KEY => config.log_level = value.to_string(),
                LOG_DIR_KEY => config.log_dir = Some(PathBuf::from(value)),
                _ => {}
            }
        }
        config
    }

    /// Apply command line overrides on top of the environment.
    pub fn with_overrides(mut self, log_level: Option<String>, log_dir: Option<PathBuf>) -> Self {
        if let Some(level) = log_level {
            self.log_level = level;
        }
        if let Some(dir) = log_dir {
            self.log_dir = Some(dir);
        }
        self
    }
}
