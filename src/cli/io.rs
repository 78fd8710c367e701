//! Prompt sources for the menu loop: terminal prompts or scripted stdin lines.

use std::io::{BufRead, Lines};

use dialoguer::{theme::ColorfulTheme, Input, Select};

use crate::cli::output;
use crate::cli::shell::CliError;

/// Supplies answers to the questions asked by the menu loop.
///
/// `None` means the input source is exhausted and the loop should stop.
pub trait Prompter {
    fn text(&mut self, prompt: &str) -> Result<Option<String>, CliError>;
    fn select(&mut self, prompt: &str, items: &[&str]) -> Result<Option<usize>, CliError>;
}

/// Terminal prompts rendered with `dialoguer`.
pub struct InteractivePrompter {
    theme: ColorfulTheme,
}

impl InteractivePrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for InteractivePrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for InteractivePrompter {
    fn text(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        let value = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .interact_text()?;
        Ok(Some(value.trim().to_string()))
    }

    fn select(&mut self, prompt: &str, items: &[&str]) -> Result<Option<usize>, CliError> {
        Ok(Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact_opt()?)
    }
}

/// Reads one answer per line; menu choices are given by index.
pub struct ScriptPrompter<R> {
    lines: Lines<R>,
}

impl<R: BufRead> ScriptPrompter<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
        }
    }

    fn next_line(&mut self) -> Result<Option<String>, CliError> {
        match self.lines.next() {
            Some(line) => Ok(Some(line?.trim().to_string())),
            None => Ok(None),
        }
    }
}

impl<R: BufRead> Prompter for ScriptPrompter<R> {
    fn text(&mut self, _prompt: &str) -> Result<Option<String>, CliError> {
        self.next_line()
    }

    fn select(&mut self, _prompt: &str, items: &[&str]) -> Result<Option<usize>, CliError> {
        while let Some(line) = self.next_line()? {
            match line.parse::<usize>() {
                Ok(index) if index < items.len() => return Ok(Some(index)),
                _ => output::warning("Invalid option, please select again."),
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn script_select_skips_invalid_lines() {
        let mut prompter = ScriptPrompter::new(Cursor::new("9\nabc\n1\n"));
        let choice = prompter.select("menu", &["a", "b"]).unwrap();
        assert_eq!(choice, Some(1));
        assert_eq!(prompter.select("menu", &["a", "b"]).unwrap(), None);
    }

    #[test]
    fn script_text_trims_and_ends_on_eof() {
        let mut prompter = ScriptPrompter::new(Cursor::new("  123  \n"));
        assert_eq!(prompter.text("tax id").unwrap().as_deref(), Some("123"));
        assert_eq!(prompter.text("tax id").unwrap(), None);
    }
}
