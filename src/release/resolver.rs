use semver::Version;

use crate::config::Config;
use crate::domain::{bump, PreRelease, ReleaseLevel};
use crate::error::Result;
use crate::release::channel::{BranchChannels, ChannelRule};
use crate::release::policy::{AnalyzedCommit, ReleasePolicy};
use crate::release::tag::TagTemplate;

/// Outcome of a release computation for one batch of commits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseDecision {
    pub should_release: bool,
    pub level: ReleaseLevel,
    pub next_version: Option<Version>,
    pub channel: Option<String>,
}

impl ReleaseDecision {
    fn no_release(level: ReleaseLevel, channel: Option<String>) -> Self {
        ReleaseDecision {
            should_release: false,
            level,
            next_version: None,
            channel,
        }
    }
}

/// Computes whether a release should happen, at what level, and on what
/// channel, from the bump policy and the branch/channel list
pub struct ReleaseResolver {
    policy: ReleasePolicy,
    channels: BranchChannels,
}

impl ReleaseResolver {
    /// Build a resolver from configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(ReleaseResolver {
            policy: ReleasePolicy::from_config(&config.release)?,
            channels: BranchChannels::from_config(&config.branches)?,
        })
    }

    /// The channel rule the branch releases on, if any
    pub fn channel_for(&self, branch: &str) -> Option<&ChannelRule> {
        self.channels.resolve(branch)
    }

    /// Compute the release decision for a batch of commits.
    ///
    /// An empty batch, a batch aggregating to `none`, or a branch matching
    /// no channel pattern all yield `should_release = false` without error.
    ///
    /// # Arguments
    /// * `commits` - Parsed commits since the last release
    /// * `branch` - Current branch name
    /// * `last_stable` - Latest stable release version, if any
    /// * `last_on_channel` - Latest pre-release on the branch's channel, if any
    pub fn resolve(
        &self,
        commits: &[AnalyzedCommit],
        branch: &str,
        last_stable: Option<&Version>,
        last_on_channel: Option<&Version>,
    ) -> Result<ReleaseDecision> {
        let level = self.policy.aggregate(commits);
        let channel = self.channels.resolve(branch).map(|r| r.channel.clone());

        let rule = match self.channels.resolve(branch) {
            Some(rule) => rule,
            None => return Ok(ReleaseDecision::no_release(level, channel)),
        };

        if commits.is_empty() || !level.triggers_release() {
            return Ok(ReleaseDecision::no_release(level, channel));
        }

        let base_candidate = match last_stable {
            Some(prev) => bump(prev, level),
            None => Version::new(1, 0, 0),
        };

        let next_version = match &rule.prerelease {
            None => base_candidate,
            Some(label) => {
                let (mut base, pre) = match last_on_channel {
                    Some(prev) => {
                        let prev_base = Version::new(prev.major, prev.minor, prev.patch);
                        if prev_base >= base_candidate {
                            // The channel is already ahead of (or at) the bumped
                            // base; continue its counter
                            let pre = match PreRelease::parse(prev.pre.as_str()) {
                                Ok(p) if p.label == *label => p.increment_iteration(),
                                _ => PreRelease::first(label.as_str())?,
                            };
                            (prev_base, pre)
                        } else {
                            (base_candidate, PreRelease::first(label.as_str())?)
                        }
                    }
                    None => (base_candidate, PreRelease::first(label.as_str())?),
                };
                base.pre = pre.to_semver()?;
                base
            }
        };

        Ok(ReleaseDecision {
            should_release: true,
            level,
            next_version: Some(next_version),
            channel,
        })
    }
}

/// Latest stable release among the given tags, per the tag template
pub fn latest_stable(tags: &[String], template: &TagTemplate) -> Option<Version> {
    tags.iter()
        .filter_map(|tag| template.extract(tag))
        .filter(|version| version.pre.is_empty())
        .max()
}

/// Latest pre-release with the given label among the given tags
pub fn latest_on_channel(tags: &[String], template: &TagTemplate, label: &str) -> Option<Version> {
    tags.iter()
        .filter_map(|tag| template.extract(tag))
        .filter(|version| {
            PreRelease::parse(version.pre.as_str())
                .map(|p| p.label == label)
                .unwrap_or(false)
        })
        .max()
}
