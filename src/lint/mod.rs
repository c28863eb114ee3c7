//! Commit message grammar validation
//!
//! The linter is a pure predicate over the message text: it parses leniently,
//! evaluates every rule independently, and reports the full ordered list of
//! violations rather than stopping at the first.

pub mod rules;

pub use rules::{RuleId, Violation};

use crate::config::LintConfig;
use crate::domain::CommitMessage;

/// Validates commit messages against the configured grammar
pub struct Linter {
    config: LintConfig,
}

impl Linter {
    /// Create a new linter
    pub fn new(config: LintConfig) -> Self {
        Linter { config }
    }

    /// Validate raw message text
    pub fn check(&self, text: &str) -> LintReport {
        self.check_message(&CommitMessage::parse(text))
    }

    /// Validate an already-parsed message
    pub fn check_message(&self, msg: &CommitMessage) -> LintReport {
        LintReport {
            violations: rules::check_all(msg, &self.config),
        }
    }
}

/// Outcome of validating one commit message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintReport {
    /// Failed rules, in rule-evaluation order
    pub violations: Vec<Violation>,
}

impl LintReport {
    /// True if no rule failed
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// The failed rule ids, in order
    pub fn failed_rules(&self) -> Vec<RuleId> {
        self.violations.iter().map(|v| v.rule).collect()
    }
}
