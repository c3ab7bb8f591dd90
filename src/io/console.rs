use std::io::{self, Write};

use colored::Colorize;

use crate::common::error::AppError;

/// Output roles, mapped to terminal colors by `Terminal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Unstyled text.
    Plain,
    /// Greetings and the banner.
    Info,
    /// Balance summary rows.
    Detail,
    /// Completed operations.
    Success,
    /// Pending notifications and divergence warnings.
    Notice,
    /// Section headings.
    Heading,
    /// Rejected operations.
    Error,
}

/// The seam between the engine and the terminal.
///
/// Handlers prompt and print only through this trait, so the whole engine
/// runs headless under tests with a scripted console.
pub trait Console {
    /// Prints `message` without a newline and reads one input line.
    /// Returns `None` when the input stream is closed.
    fn read_line(&mut self, message: &str) -> Result<Option<String>, AppError>;

    /// Prints one full line in the given tone.
    fn line(&mut self, tone: Tone, text: &str);

    /// Like `read_line`, but a closed stream aborts the operation.
    fn prompt(&mut self, message: &str) -> Result<String, AppError> {
        self.read_line(message)?.ok_or(AppError::InputClosed)
    }
}

/// Interactive console over stdin/stdout.
#[derive(Debug, Default)]
pub struct Terminal;

impl Terminal {
    pub fn new() -> Self {
        Self
    }
}

impl Console for Terminal {
    fn read_line(&mut self, message: &str) -> Result<Option<String>, AppError> {
        print!("{message}");
        io::stdout().flush()?;

        let mut buf = String::new();
        if io::stdin().read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn line(&mut self, tone: Tone, text: &str) {
        let styled = match tone {
            Tone::Plain => text.normal(),
            Tone::Info => text.cyan(),
            Tone::Detail => text.blue(),
            Tone::Success => text.green(),
            Tone::Notice => text.yellow(),
            Tone::Heading => text.magenta(),
            Tone::Error => text.red(),
        };
        println!("{styled}");
    }
}

/// Console fed from a fixed input script, recording everything printed.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: std::collections::VecDeque<String>,
    pub prompts: Vec<String>,
    pub lines: Vec<(Tone, String)>,
}

#[cfg(test)]
impl ScriptedConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_inputs(inputs: &[&str]) -> Self {
        Self {
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            prompts: Vec::new(),
            lines: Vec::new(),
        }
    }

    pub fn printed(&self, needle: &str) -> bool {
        self.lines.iter().any(|(_, text)| text.contains(needle))
    }
}

#[cfg(test)]
impl Console for ScriptedConsole {
    fn read_line(&mut self, message: &str) -> Result<Option<String>, AppError> {
        self.prompts.push(message.to_string());
        Ok(self.inputs.pop_front())
    }

    fn line(&mut self, tone: Tone, text: &str) {
        self.lines.push((tone, text.to_string()));
    }
}
