//! Terminal-based implementation of the console port

use std::io::{self, BufRead, StdinLock, StdoutLock, Write};

use crate::{domain::error::AppError, ports::ui::Console};

/// Console over any line reader and writer.
///
/// Standard streams in the binary, in-memory buffers in tests.
pub struct TerminalConsole<R, W> {
    input:  R,
    output: W
}

impl TerminalConsole<StdinLock<'static>, StdoutLock<'static>> {
    /// Console bound to the locked standard input and output of the process
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout().lock())
    }
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<String, AppError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        // Raw bytes: a line that is not UTF-8 is bad input, not a broken stream
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(AppError::InputClosed);
        }

        let line = String::from_utf8_lossy(&buf);
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    fn write_line(&mut self, text: &str) -> Result<(), AppError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }
}
