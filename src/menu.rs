//! Numbered-menu prompts.
//!
//! [`Prompter`] owns the wizard's input and output streams. Reads block
//! until a full line arrives; there is no timeout.

use crate::WizardError;
use std::io::{BufRead, Write};

/// Message shown when a single selection is not a valid menu number.
pub const INVALID_SELECTION: &str = "Invalid selection. Please try again.";

/// Parse one menu token into a zero-based index into `len` items.
///
/// ```rust
/// use appium_setup::parse_choice;
///
/// assert_eq!(parse_choice(" 2 ", 3), Some(1));
/// assert_eq!(parse_choice("0", 3), None);
/// assert_eq!(parse_choice("4", 3), None);
/// assert_eq!(parse_choice("two", 3), None);
/// ```
pub fn parse_choice(token: &str, len: usize) -> Option<usize> {
    match token.trim().parse::<usize>() {
        Ok(n) if (1..=len).contains(&n) => Some(n - 1),
        _ => None,
    }
}

/// Parse a comma-separated selection, keeping valid tokens in typed order.
///
/// Duplicates are kept. Invalid and out-of-range tokens are dropped.
pub fn parse_choices(line: &str, len: usize) -> Vec<usize> {
    line.split(',')
        .filter_map(|token| parse_choice(token, len))
        .collect()
}

/// Line-oriented prompt engine over any reader and writer.
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Wrap an input and output stream.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write one line of output.
    pub fn println(&mut self, line: impl AsRef<str>) -> Result<(), WizardError> {
        writeln!(self.output, "{}", line.as_ref())?;
        Ok(())
    }

    /// Write several lines of output.
    pub fn print_lines<I, S>(&mut self, lines: I) -> Result<(), WizardError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.println(line)?;
        }
        Ok(())
    }

    /// Print `question` without a newline and read one line of input.
    ///
    /// The returned line has its trailing newline removed. Bytes that are
    /// not valid UTF-8 are replaced, so such a line is just an invalid answer.
    pub fn ask(&mut self, question: &str) -> Result<String, WizardError> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(WizardError::InputClosed);
        }
        let mut line = String::from_utf8_lossy(&buf).into_owned();
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    fn print_menu<S: AsRef<str>>(&mut self, items: &[S], prompt: &str) -> Result<(), WizardError> {
        self.println(format!("\n{}", prompt))?;
        for (i, item) in items.iter().enumerate() {
            self.println(format!("{}. {}", i + 1, item.as_ref()))?;
        }
        Ok(())
    }

    /// Show a numbered menu and return the index of the chosen item.
    ///
    /// Re-prompts until the answer is a number in range.
    pub fn select_index<S: AsRef<str>>(
        &mut self,
        items: &[S],
        prompt: &str,
    ) -> Result<usize, WizardError> {
        self.print_menu(items, prompt)?;
        loop {
            let answer = self.ask("\nMake your selection (number): ")?;
            match parse_choice(&answer, items.len()) {
                Some(index) => return Ok(index),
                None => {
                    tracing::debug!(answer = %answer, "rejected selection");
                    self.println(INVALID_SELECTION)?;
                }
            }
        }
    }

    /// Show a numbered menu and return a clone of the chosen item.
    pub fn select_one<T: AsRef<str> + Clone>(
        &mut self,
        items: &[T],
        prompt: &str,
    ) -> Result<T, WizardError> {
        let index = self.select_index(items, prompt)?;
        Ok(items[index].clone())
    }

    /// Show a numbered menu and read one comma-separated answer.
    ///
    /// Never re-prompts; an answer with no valid tokens selects nothing.
    pub fn select_many<T: AsRef<str> + Clone>(
        &mut self,
        items: &[T],
        prompt: &str,
    ) -> Result<Vec<T>, WizardError> {
        self.print_menu(items, prompt)?;
        let answer = self.ask("\nMake your selections (comma-separated, e.g. 1,3,5): ")?;
        Ok(parse_choices(&answer, items.len())
            .into_iter()
            .map(|i| items[i].clone())
            .collect())
    }

    /// Ask a yes/no question. Only `y` or `Y` counts as yes.
    pub fn confirm(&mut self, question: &str) -> Result<bool, WizardError> {
        let answer = self.ask(question)?;
        Ok(answer.trim().eq_ignore_ascii_case("y"))
    }

    /// Wait for the user to press Enter.
    pub fn pause(&mut self) -> Result<(), WizardError> {
        self.ask("\nPress Enter to continue...")?;
        Ok(())
    }

    /// Borrow the output stream.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Give back the input and output streams.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}
