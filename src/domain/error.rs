use std::{io, num::ParseIntError};

use thiserror::Error;

/// Raised when an event is constructed with a capacity below zero
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityError {
    #[error("Capacity cannot be negative.")]
    Negative
}

/// Reasons an event cannot be created
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventError {
    #[error(transparent)]
    Capacity(#[from] CapacityError),

    /// Every id of the sequence has been handed out
    #[error("Event id sequence exhausted.")]
    IdsExhausted
}

/// Common error types for the event management system
#[derive(Error, Debug)]
pub enum AppError {
    /// Event validation errors, reported uniformly by the menu loop
    #[error(transparent)]
    Capacity(#[from] CapacityError),

    /// Integer parsing errors
    #[error("{0}")]
    InputFormat(#[from] ParseIntError),

    /// End of input on the console
    #[error("Input stream closed.")]
    InputClosed,

    /// Console read/write errors
    #[error("{0}")]
    Io(#[from] io::Error),

    /// Generic errors with context
    #[error("{0}")]
    Generic(String)
}

/// Capacity errors keep their own variant; an exhausted id sequence is a plain failure
impl From<EventError> for AppError {
    fn from(err: EventError) -> Self {
        match err {
            EventError::Capacity(e) => AppError::Capacity(e),
            other => AppError::Generic(other.to_string())
        }
    }
}

impl AppError {
    /// Whether the menu loop must stop after reporting this error
    pub fn is_fatal(&self) -> bool {
        matches!(self, AppError::InputClosed | AppError::Io(_))
    }
}
