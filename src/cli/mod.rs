//! Command-line surface: arguments and the interactive menu

pub mod args;
pub mod menu;

pub use args::Cli;
pub use menu::{Menu, MenuState};
