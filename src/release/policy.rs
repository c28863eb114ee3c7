use crate::config::{ReleaseConfig, ReleaseRuleConfig};
use crate::domain::{CommitMessage, ReleaseLevel};
use crate::error::{CommitPilotError, Result};

/// The slice of a commit that matters for the bump decision
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzedCommit {
    pub commit_type: String,
    pub has_breaking_footer: bool,
}

impl From<&CommitMessage> for AnalyzedCommit {
    fn from(msg: &CommitMessage) -> Self {
        AnalyzedCommit {
            commit_type: msg.r#type.clone(),
            has_breaking_footer: msg.has_breaking_footer(),
        }
    }
}

/// Maps commit types to release levels.
///
/// Explicit rules form an ordered override list over the named preset;
/// the last rule for a type wins. A breaking footer forces major before
/// any table lookup.
pub struct ReleasePolicy {
    rules: Vec<ReleaseRuleConfig>,
}

impl ReleasePolicy {
    /// Build a policy from configuration
    ///
    /// # Returns
    /// * `Ok(ReleasePolicy)` - When the preset name is known
    /// * `Err` - For an unknown preset
    pub fn from_config(config: &ReleaseConfig) -> Result<Self> {
        if config.preset != "conventional" {
            return Err(CommitPilotError::config(format!(
                "Unknown release preset '{}', only 'conventional' is supported",
                config.preset
            )));
        }

        Ok(ReleasePolicy {
            rules: config.rules.clone(),
        })
    }

    /// The `conventional` preset mapping
    fn preset_level(commit_type: &str) -> ReleaseLevel {
        match commit_type {
            "feat" => ReleaseLevel::Minor,
            "fix" | "perf" | "revert" => ReleaseLevel::Patch,
            _ => ReleaseLevel::None,
        }
    }

    /// Release level for a single commit
    pub fn level_for(&self, commit: &AnalyzedCommit) -> ReleaseLevel {
        if commit.has_breaking_footer {
            return ReleaseLevel::Major;
        }

        self.rules
            .iter()
            .rev()
            .find(|rule| rule.r#type == commit.commit_type)
            .map(|rule| rule.level)
            .unwrap_or_else(|| Self::preset_level(&commit.commit_type))
    }

    /// Aggregate level for a batch: the maximum severity across commits
    pub fn aggregate(&self, commits: &[AnalyzedCommit]) -> ReleaseLevel {
        commits
            .iter()
            .map(|c| self.level_for(c))
            .max()
            .unwrap_or(ReleaseLevel::None)
    }
}
