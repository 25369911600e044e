//! Core domain types for conference events

pub mod constant;
pub mod error;
pub mod event;
pub mod registry;

pub use error::{AppError, CapacityError, EventError};
pub use event::{Event, EventDetails, EventFactory, EventKind};
pub use registry::EventRegistry;
