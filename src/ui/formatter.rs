//! Pure formatting functions for UI output.
//!
//! This module contains all display/formatting logic separated from user
//! interaction. Styling goes through the `console` crate so it degrades
//! gracefully on non-tty output.

use console::style;

use crate::lint::LintReport;
use crate::release::ReleaseDecision;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Format and print a non-fatal warning.
pub fn display_warning(message: &str) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), message);
}

/// Display the validation outcome for one commit message.
///
/// Shows a check or cross for the labelled message, followed by one line
/// per failed rule: the rule name and its message.
///
/// # Arguments
/// * `label` - What was validated (e.g. short hash plus header)
/// * `report` - The validation outcome
pub fn display_report(label: &str, report: &LintReport) {
    if report.is_valid() {
        println!("{} {}", style("✓").green(), label);
        return;
    }

    println!("{} {}", style("✗").red(), label);
    for violation in &report.violations {
        println!(
            "    {}  {}",
            style(violation.rule.name()).yellow(),
            violation.message
        );
    }
}

/// Display a release decision, including the tag it would produce.
///
/// # Arguments
/// * `decision` - The computed decision
/// * `tag` - Rendered tag name, when a release would happen
pub fn display_decision(decision: &ReleaseDecision, tag: Option<&str>) {
    if !decision.should_release {
        display_status(&format!(
            "No release required (level: {})",
            decision.level
        ));
        return;
    }

    println!("\n{}", style("Release plan:").bold());
    println!("  Level:   {}", decision.level);
    if let Some(channel) = &decision.channel {
        println!("  Channel: {}", channel);
    }
    if let Some(version) = &decision.next_version {
        println!("  Version: {}", style(version).green());
    }
    if let Some(tag) = tag {
        println!("  Tag:     {}", style(tag).green());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LintConfig;
    use crate::lint::Linter;

    #[test]
    fn test_display_error() {
        // Visual verification test - output is printed to stderr
        display_error("test error");
    }

    #[test]
    fn test_display_success() {
        // Visual verification test - output is printed to stdout
        display_success("test success");
    }

    #[test]
    fn test_display_report_valid_and_invalid() {
        let linter = Linter::new(LintConfig::default());
        display_report("abc1234 feat(core): ok", &linter.check("feat(core): ok"));
        display_report("abc1235 broken", &linter.check("broken"));
    }
}
