//! Test terminal: replays queued input lines and records everything printed.

use std::collections::VecDeque;

use crate::errors::ClientError;
use crate::ui::Terminal;

#[derive(Debug, Default)]
pub struct ScriptedTerminal {
    input: VecDeque<String>,
    pub output: Vec<String>,
    pub alerts: Vec<String>,
    pub prompts: Vec<String>,
}

impl ScriptedTerminal {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn printed(&self, needle: &str) -> bool {
        self.output.iter().any(|line| line.contains(needle))
    }

    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }
}

impl Terminal for ScriptedTerminal {
    fn print_line(&mut self, line: &str) {
        self.output.push(line.to_string());
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ClientError> {
        self.prompts.push(prompt.to_string());
        Ok(self.input.pop_front())
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
        self.output.push(format!("! {message}"));
    }
}
