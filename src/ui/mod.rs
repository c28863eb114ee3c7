//! User interface module - interaction (prompts) and formatting.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Interactive prompts and user input handling
//!
//! End-of-input on stdin is reported as cancellation, never as failure.

use std::io::{self, Write};

use console::style;

use crate::error::{CommitPilotError, Result};

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_decision, display_error, display_report, display_status, display_success,
    display_warning,
};

/// Read one trimmed line from stdin; EOF means the user cancelled
fn read_trimmed_line() -> Result<String> {
    let mut input = String::new();
    let bytes = io::stdin().read_line(&mut input)?;
    if bytes == 0 {
        return Err(CommitPilotError::Cancelled);
    }
    Ok(input.trim().to_string())
}

/// Prompts user to select one option from a numbered list.
///
/// If only one option is available, returns it directly without prompting.
/// Default selection is the first option if the user presses Enter; invalid
/// input re-prompts.
///
/// # Arguments
/// * `title` - Heading shown above the list
/// * `options` - The options to choose from
///
/// # Returns
/// * `Ok(String)` - The selected option
/// * `Err` - On cancellation or input error
pub fn select_from_list(title: &str, options: &[String]) -> Result<String> {
    if options.len() == 1 {
        return Ok(options[0].clone());
    }

    println!("\n{}", style(title).bold());
    for (i, option) in options.iter().enumerate() {
        println!("  {}. {}", i + 1, option);
    }

    loop {
        print!("\nSelect (1-{}) [default: 1]: ", options.len());
        io::stdout().flush()?;

        let selection = read_trimmed_line()?;
        let index = if selection.is_empty() {
            1
        } else {
            selection.parse::<usize>().unwrap_or(0)
        };

        if index > 0 && index <= options.len() {
            return Ok(options[index - 1].clone());
        }
        display_status("Invalid selection");
    }
}

/// Prompts for a required line of input; empty input re-prompts.
///
/// # Arguments
/// * `prompt` - The prompt message (without the ": " suffix)
pub fn input_required(prompt: &str) -> Result<String> {
    loop {
        print!("{}: ", prompt);
        io::stdout().flush()?;

        let input = read_trimmed_line()?;
        if !input.is_empty() {
            return Ok(input);
        }
        display_status("A value is required");
    }
}

/// Prompts for an optional line of input; Enter skips.
///
/// # Returns
/// * `Ok(Some(String))` - The entered value
/// * `Ok(None)` - If the user pressed Enter
pub fn input_optional(prompt: &str) -> Result<Option<String>> {
    print!("{} (Enter to skip): ", prompt);
    io::stdout().flush()?;

    let input = read_trimmed_line()?;
    if input.is_empty() {
        Ok(None)
    } else {
        Ok(Some(input))
    }
}

/// Prompts user to confirm an action with a yes/no prompt.
///
/// Accepts "y" or "yes" (case-insensitive) as confirmation. Default is "no"
/// if the user presses Enter.
///
/// # Arguments
/// * `prompt` - The prompt message to display (without the "(y/N): " suffix)
pub fn confirm_action(prompt: &str) -> Result<bool> {
    print!("\n{} (y/N): ", prompt);
    io::stdout().flush()?;

    let response = read_trimmed_line()?.to_lowercase();
    Ok(response == "y" || response == "yes")
}
