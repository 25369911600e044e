//! # Conference Center CLI
//!
//! Registers workshops and seminars through a numbered menu and lists them in
//! summary or detailed form. Nothing is persisted between runs.
//!
//! ## Usage
//!
//! ```bash
//! # Start the menu
//! conference
//!
//! # Print debug logs to stderr and render details as summary lines
//! conference --log-level debug --compact
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use conference::{Cli, Config, Menu, TerminalConsole, logging};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from(&cli);

    logging::init(&config)?;

    let mut menu = Menu::new(TerminalConsole::stdio(), &config);
    menu.run().context("Console session ended unexpectedly")?;

    Ok(())
}
