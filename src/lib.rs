//! # Conference Events
//!
//! An interactive console tool for registering conference workshops and
//! seminars in memory and listing them for the duration of a single run.
//!
//! This crate provides:
//! - The event model with capacity validation and id assignment
//! - An append-only in-memory registry
//! - Line-based console prompts with integer re-entry
//! - The menu loop tying them together

pub mod adapters;
pub mod cli;
pub mod config;
pub mod domain;
pub mod logging;
pub mod ports;

// Re-export commonly used types
pub use adapters::TerminalConsole;
pub use cli::{Cli, Menu, MenuState};
pub use config::Config;
pub use domain::{AppError, CapacityError, Event, EventError, EventDetails, EventFactory, EventKind, EventRegistry};
pub use ports::Console;
