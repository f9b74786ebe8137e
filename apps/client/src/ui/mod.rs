//! Line-oriented terminal front-end. Each view has one page driver that renders
//! its component's state and turns typed commands into component operations.

use std::io::{self, BufRead, Write};

use crate::errors::ClientError;

pub mod app;
pub mod interview_page;
pub mod result_page;
pub mod setup_page;

#[cfg(test)]
pub mod scripted;

pub trait Terminal {
    fn print_line(&mut self, line: &str);

    /// `Ok(None)` at end of input.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ClientError>;

    /// Blocking yes/no question. Anything but y/yes (including EOF) is a no.
    fn confirm(&mut self, prompt: &str) -> bool {
        match self.read_line(&format!("{prompt} [y/N]")) {
            Ok(Some(answer)) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
            _ => false,
        }
    }

    fn alert(&mut self, message: &str) {
        self.print_line(&format!("! {message}"));
    }
}

/// stdin/stdout terminal. Logs go to stderr so they never mix with this output.
pub struct StdTerminal {
    stdin: io::Stdin,
    stdout: io::Stdout,
}

impl StdTerminal {
    pub fn new() -> Self {
        Self {
            stdin: io::stdin(),
            stdout: io::stdout(),
        }
    }
}

impl Default for StdTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Terminal for StdTerminal {
    fn print_line(&mut self, line: &str) {
        let mut out = self.stdout.lock();
        // A closed stdout leaves nothing to report to.
        let _ = writeln!(out, "{line}");
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ClientError> {
        {
            let mut out = self.stdout.lock();
            write!(out, "{prompt} > ")?;
            out.flush()?;
        }

        let mut buf = String::new();
        let read = self.stdin.lock().read_line(&mut buf)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }
}
