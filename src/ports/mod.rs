//! Ports - interfaces the menu loop talks to

pub mod ui;

pub use ui::Console;
