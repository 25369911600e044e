//! Adapters - concrete implementations of the ports

pub mod ui;

pub use ui::terminal::TerminalConsole;
