//! Runtime configuration for the menu

use crate::cli::Cli;

/// Default tracing filter when neither `--log-level` nor `CONFERENCE_LOG` is set
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Environment variable holding a tracing filter directive
pub const LOG_ENV_VAR: &str = "CONFERENCE_LOG";

/// Configuration structure for the conference CLI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Render the detail section with labeled lines instead of summaries
    pub verbose_details: bool,
    /// First id handed out by the event factory
    pub first_id:        u32,
    /// Explicit tracing filter directive, if any
    pub log_level:       Option<String>
}

impl Default for Config {
    fn default() -> Self {
        Self { verbose_details: true, first_id: 1, log_level: None }
    }
}

impl From<&Cli> for Config {
    fn from(cli: &Cli) -> Self {
        Self { verbose_details: !cli.compact, first_id: cli.first_id, log_level: cli.log_level.clone() }
    }
}
