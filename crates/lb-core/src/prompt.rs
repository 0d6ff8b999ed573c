//! Blocking interactive input.
//!
//! Implementors only supply raw line reads; the retry rules shared by every
//! front end (blank input, menu parsing) live in the provided methods.

use crate::Result as CoreResult;

const MENU_HEADER: &str = "Please select one of the following:";
const BLANK_INPUT_MESSAGE: &str = "Blank values are not allowed.";

pub trait Prompter {
    /// Shows `prompt` and reads one line of visible input, without the line terminator.
    fn read_line(&mut self, prompt: &str) -> CoreResult<String>;

    /// Shows `prompt` and reads one line without echoing it.
    fn read_masked(&mut self, prompt: &str) -> CoreResult<String>;

    /// Shows an informational message.
    fn notify(&mut self, message: &str);

    /// Free-text input. Surrounding whitespace is trimmed; blank answers are re-prompted.
    fn input_str(&mut self, prompt: &str) -> CoreResult<String> {
        loop {
            let line = self.read_line(prompt)?;
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                return Ok(trimmed.to_string());
            }
            self.notify(BLANK_INPUT_MESSAGE);
        }
    }

    /// Masked input. The value is returned verbatim; blank answers are re-prompted.
    fn input_password(&mut self, prompt: &str) -> CoreResult<String> {
        loop {
            let line = self.read_masked(prompt)?;
            if !line.trim().is_empty() {
                return Ok(line);
            }
            self.notify(BLANK_INPUT_MESSAGE);
        }
    }

    /// Numbered menu. Returns the zero-based index of the chosen option.
    fn input_menu(&mut self, options: &[&str]) -> CoreResult<usize> {
        let listing = render_menu(options);
        loop {
            let line = self.read_line(&listing)?;
            if let Some(index) = parse_menu_choice(&line, options) {
                return Ok(index);
            }
            self.notify(&format!("'{}' is not a valid choice.", line.trim()));
        }
    }
}

/// Renders `options` as a one-based numbered list.
pub fn render_menu(options: &[&str]) -> String {
    let mut listing = String::from(MENU_HEADER);
    for (i, option) in options.iter().enumerate() {
        listing.push_str(&format!("\n{}. {}", i + 1, option));
    }
    listing
}

/// Accepts either the one-based option number or the option text (case-insensitive).
pub fn parse_menu_choice(input: &str, options: &[&str]) -> Option<usize> {
    let input = input.trim();

    if let Ok(number) = input.parse::<usize>() {
        return (1..=options.len()).contains(&number).then(|| number - 1);
    }

    options
        .iter()
        .position(|option| option.eq_ignore_ascii_case(input))
}
