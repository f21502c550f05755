use std::io;

use anyhow::{Context, Result};
use tracing::info;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

use crate::config::BridgeConfig;

pub const LOG_FILE_NAME: &str = "pinbridge.log";

/// Install the global subscriber.
///
/// Human readable logs always go to stderr so stdout stays clean for the
/// JSON the CLI prints. With `log_dir` set, the same events are also appended
/// to a daily rolling file.
pub fn init_tracing(config: &BridgeConfig) -> Result<()> {
    let env_filter = build_filter(&config.log_level)?;

    let stderr_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false);

    let file_layer = match &config.log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("could not create log dir `{}`", dir.display()))?;
            let appender = RollingFileAppender::new(Rotation::DAILY, dir, LOG_FILE_NAME);
            Some(
                fmt::Layer::default()
                    .with_writer(appender)
                    .with_ansi(false),
            )
        }
        None => None,
    };

    Registry::default()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("tracing subscriber already installed")?;

    info!(level = %config.log_level, "logging initialised");
    Ok(())
}

/// Parse an `EnvFilter` directive, e.g. `info` or `chat_model=trace,warn`.
pub fn build_filter(log_level: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(log_level).with_context(|| format!("invalid log level `{log_level}`"))
}
