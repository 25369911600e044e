//! Tracing subscriber setup.
//!
//! Logs go to stderr so stdout carries only the menu conversation.

use std::{env, io};

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::{Config, DEFAULT_LOG_LEVEL, LOG_ENV_VAR};

/// Resolve the filter directive: explicit flag, then environment, then default
pub fn filter_directive(config: &Config) -> String {
    resolve_directive(config.log_level.as_deref(), env::var(LOG_ENV_VAR).ok().as_deref())
}

/// First non-blank of `flag` and `from_env`, falling back to [`DEFAULT_LOG_LEVEL`]
fn resolve_directive(flag: Option<&str>, from_env: Option<&str>) -> String {
    [flag, from_env]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|directive| !directive.is_empty())
        .unwrap_or(DEFAULT_LOG_LEVEL)
        .to_string()
}

/// Install the global subscriber
pub fn init(config: &Config) -> Result<()> {
    let directive = filter_directive(config);
    let filter = EnvFilter::try_new(&directive).with_context(|| format!("Invalid log filter: {}", directive))?;

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}
