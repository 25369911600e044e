//! UI ports - interfaces for line-based user interaction

use tracing::{Level, event};

use crate::domain::{constant::menu, constant::text, error::AppError};

/// Port for reading answers from and writing text to the user.
///
/// Implementors only provide raw line I/O; integer and string prompts are
/// built on top of it.
pub trait Console {
    /// Write `prompt` (no newline) and read one line without its terminator.
    ///
    /// Returns [`AppError::InputClosed`] once the input is exhausted.
    fn read_line(&mut self, prompt: &str) -> Result<String, AppError>;

    /// Write `text` followed by a newline
    fn write_line(&mut self, text: &str) -> Result<(), AppError>;

    /// Prompt until the user enters a valid integer.
    ///
    /// Unparseable input is not an error: it prints a hint and asks again.
    fn read_int(&mut self, prompt: &str) -> Result<i32, AppError> {
        loop {
            let line = self.read_line(prompt)?;
            match line.trim().parse::<i32>() {
                Ok(value) => return Ok(value),
                Err(e) => {
                    event!(Level::DEBUG, event = menu::INTEGER_REJECTED, input = %line.trim(), error = %e);
                    self.write_line(text::INVALID_INTEGER)?;
                }
            }
        }
    }

    /// Prompt once and return the trimmed answer. An empty answer is valid.
    fn read_string(&mut self, prompt: &str) -> Result<String, AppError> {
        Ok(self.read_line(prompt)?.trim().to_string())
    }
}
