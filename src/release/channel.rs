use regex::Regex;

use crate::config::BranchRule;
use crate::error::{CommitPilotError, Result};

/// A compiled entry of the branch/channel list
#[derive(Debug, Clone)]
pub struct ChannelRule {
    pub pattern: String,
    matcher: Regex,
    /// Channel name: explicit, or the pre-release label, or "stable"
    pub channel: String,
    pub prerelease: Option<String>,
}

impl ChannelRule {
    fn compile(rule: &BranchRule) -> Result<Self> {
        let channel = rule
            .channel
            .clone()
            .or_else(|| rule.prerelease.clone())
            .unwrap_or_else(|| "stable".to_string());

        Ok(ChannelRule {
            pattern: rule.pattern.clone(),
            matcher: glob_to_regex(&rule.pattern)?,
            channel,
            prerelease: rule.prerelease.clone(),
        })
    }

    /// True if this rule releases on a pre-release channel
    pub fn is_prerelease(&self) -> bool {
        self.prerelease.is_some()
    }
}

/// The ordered branch/channel list; first matching pattern wins
pub struct BranchChannels {
    rules: Vec<ChannelRule>,
}

impl BranchChannels {
    /// Compile the configured branch list
    pub fn from_config(branches: &[BranchRule]) -> Result<Self> {
        let rules = branches
            .iter()
            .map(ChannelRule::compile)
            .collect::<Result<Vec<_>>>()?;

        Ok(BranchChannels { rules })
    }

    /// Resolve a branch name to its channel rule
    ///
    /// Returns the first rule whose pattern matches, or None when the branch
    /// is not configured for releasing.
    pub fn resolve(&self, branch: &str) -> Option<&ChannelRule> {
        self.rules.iter().find(|rule| rule.matcher.is_match(branch))
    }
}

/// Translate a branch glob into an anchored regex.
///
/// Everything is matched literally except `*`, which matches any run of
/// characters, so "1.2.x" is covered by the maintenance pattern "*.x".
fn glob_to_regex(pattern: &str) -> Result<Regex> {
    let escaped = regex::escape(pattern);
    let translated = escaped.replace(r"\*", ".*");

    Regex::new(&format!("^{}$", translated)).map_err(|e| {
        CommitPilotError::config(format!("Invalid branch pattern '{}': {}", pattern, e))
    })
}
