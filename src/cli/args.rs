//! CLI argument parsing

use clap::Parser;

/// Register and list conference workshops and seminars for this session
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Tracing filter directive for stderr logs (e.g. 'debug', 'conference=info')
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Render the detailed view as one summary line per event
    #[arg(long)]
    pub compact: bool,

    /// First id assigned to a registered event
    #[arg(long, value_name = "N", default_value_t = 1)]
    pub first_id: u32
}
