use regex::Regex;

use crate::config::LintConfig;
use crate::domain::CommitMessage;

/// Identifier of a grammar rule, named after the rule it enforces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleId {
    TypeEmpty,
    TypeCase,
    TypeEnum,
    ScopeEmpty,
    ScopeCase,
    SubjectEmpty,
    SubjectCase,
    SubjectFullStop,
    SubjectExclamationMark,
    HeaderMaxLength,
    BodyLeadingBlank,
    BodyMaxLineLength,
    FooterLeadingBlank,
    FooterMaxLineLength,
}

impl RuleId {
    /// Get the rule name as a string
    pub fn name(&self) -> &'static str {
        match self {
            RuleId::TypeEmpty => "type-empty",
            RuleId::TypeCase => "type-case",
            RuleId::TypeEnum => "type-enum",
            RuleId::ScopeEmpty => "scope-empty",
            RuleId::ScopeCase => "scope-case",
            RuleId::SubjectEmpty => "subject-empty",
            RuleId::SubjectCase => "subject-case",
            RuleId::SubjectFullStop => "subject-full-stop",
            RuleId::SubjectExclamationMark => "subject-exclamation-mark",
            RuleId::HeaderMaxLength => "header-max-length",
            RuleId::BodyLeadingBlank => "body-leading-blank",
            RuleId::BodyMaxLineLength => "body-max-line-length",
            RuleId::FooterLeadingBlank => "footer-leading-blank",
            RuleId::FooterMaxLineLength => "footer-max-line-length",
        }
    }
}

/// A single failed rule with its human-readable message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub rule: RuleId,
    pub message: String,
}

impl Violation {
    fn new(rule: RuleId, message: impl Into<String>) -> Self {
        Violation {
            rule,
            message: message.into(),
        }
    }
}

fn kebab_case_regex() -> Regex {
    Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap_or_else(|_| unreachable!())
}

/// True if any whitespace-separated word opens with a capitalized letter.
///
/// The first alphabetic character of each word is the one judged, so
/// punctuation-wrapped words like "(token)" are still covered.
fn has_capitalized_word(subject: &str) -> bool {
    subject.split_whitespace().any(|word| {
        word.chars()
            .find(|c| c.is_alphabetic())
            .map(|c| c.is_uppercase())
            .unwrap_or(false)
    })
}

/// Evaluate every rule against the message, in a fixed order.
///
/// All violations are collected; no rule suppresses another.
pub(crate) fn check_all(msg: &CommitMessage, config: &LintConfig) -> Vec<Violation> {
    let mut violations = Vec::new();

    check_type(msg, config, &mut violations);
    check_scope(msg, &mut violations);
    check_subject(msg, &mut violations);
    check_header(msg, config, &mut violations);
    check_body(msg, config, &mut violations);
    check_footers(msg, config, &mut violations);

    violations
}

fn check_type(msg: &CommitMessage, config: &LintConfig, violations: &mut Vec<Violation>) {
    if msg.r#type.trim().is_empty() {
        violations.push(Violation::new(RuleId::TypeEmpty, "type must not be empty"));
        return;
    }

    if msg.r#type != msg.r#type.to_lowercase() {
        violations.push(Violation::new(
            RuleId::TypeCase,
            format!("type '{}' must be lower-case", msg.r#type),
        ));
    }

    if !config.types.iter().any(|t| t == &msg.r#type.to_lowercase()) {
        violations.push(Violation::new(
            RuleId::TypeEnum,
            format!(
                "type '{}' must be one of: {}",
                msg.r#type,
                config.types.join(", ")
            ),
        ));
    }
}

fn check_scope(msg: &CommitMessage, violations: &mut Vec<Violation>) {
    match msg.scope.as_deref() {
        None | Some("") => {
            violations.push(Violation::new(
                RuleId::ScopeEmpty,
                "scope is required and must not be empty",
            ));
        }
        Some(scope) => {
            if !kebab_case_regex().is_match(scope) {
                violations.push(Violation::new(
                    RuleId::ScopeCase,
                    format!(
                        "scope '{}' must be kebab-case (lower-case alphanumerics and hyphens)",
                        scope
                    ),
                ));
            }
        }
    }
}

fn check_subject(msg: &CommitMessage, violations: &mut Vec<Violation>) {
    let subject = msg.subject.trim();

    if subject.is_empty() {
        violations.push(Violation::new(
            RuleId::SubjectEmpty,
            "subject must not be empty",
        ));
        return;
    }

    if has_capitalized_word(subject) {
        violations.push(Violation::new(
            RuleId::SubjectCase,
            "subject must not start words with capital letters",
        ));
    }

    if subject.ends_with('.') {
        violations.push(Violation::new(
            RuleId::SubjectFullStop,
            "subject must not end with a full stop",
        ));
    }

    if subject.ends_with('!') || msg.breaking_marker {
        violations.push(Violation::new(
            RuleId::SubjectExclamationMark,
            "breaking changes must be declared in a BREAKING-CHANGE footer, not with '!'",
        ));
    }
}

fn check_header(msg: &CommitMessage, config: &LintConfig, violations: &mut Vec<Violation>) {
    let length = msg.header.chars().count();
    if length > config.header_max_length {
        violations.push(Violation::new(
            RuleId::HeaderMaxLength,
            format!(
                "header is {} characters, maximum is {}",
                length, config.header_max_length
            ),
        ));
    }
}

fn check_body(msg: &CommitMessage, config: &LintConfig, violations: &mut Vec<Violation>) {
    if msg.body.is_none() {
        return;
    }

    if msg.body_blank_lines != 1 {
        violations.push(Violation::new(
            RuleId::BodyLeadingBlank,
            format!(
                "body must be preceded by exactly one blank line, found {}",
                msg.body_blank_lines
            ),
        ));
    }

    for line in msg.body_lines() {
        let length = line.chars().count();
        if length > config.body_max_line_length {
            violations.push(Violation::new(
                RuleId::BodyMaxLineLength,
                format!(
                    "body line is {} characters, maximum is {}",
                    length, config.body_max_line_length
                ),
            ));
        }
    }
}

fn check_footers(msg: &CommitMessage, config: &LintConfig, violations: &mut Vec<Violation>) {
    if msg.footers.is_empty() {
        return;
    }

    if msg.footer_blank_lines != 1 {
        violations.push(Violation::new(
            RuleId::FooterLeadingBlank,
            format!(
                "footers must be preceded by exactly one blank line, found {}",
                msg.footer_blank_lines
            ),
        ));
    }

    for line in &msg.footer_lines {
        let length = line.chars().count();
        if length > config.footer_max_line_length {
            violations.push(Violation::new(
                RuleId::FooterMaxLineLength,
                format!(
                    "footer line is {} characters, maximum is {}",
                    length, config.footer_max_line_length
                ),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_names() {
        assert_eq!(RuleId::TypeEmpty.name(), "type-empty");
        assert_eq!(RuleId::SubjectFullStop.name(), "subject-full-stop");
        assert_eq!(RuleId::FooterMaxLineLength.name(), "footer-max-line-length");
    }

    #[test]
    fn test_kebab_case() {
        let re = kebab_case_regex();
        assert!(re.is_match("api"));
        assert!(re.is_match("api-client"));
        assert!(re.is_match("v2-api"));
        assert!(!re.is_match("Api"));
        assert!(!re.is_match("api_client"));
        assert!(!re.is_match("-api"));
        assert!(!re.is_match("api-"));
    }

    #[test]
    fn test_capitalized_word_detection() {
        assert!(has_capitalized_word("Add support"));
        assert!(has_capitalized_word("add OAuth support"));
        assert!(has_capitalized_word("add (Wrapped) word"));
        assert!(!has_capitalized_word("add plain support"));
        assert!(!has_capitalized_word("bump to 2.0"));
    }
}
