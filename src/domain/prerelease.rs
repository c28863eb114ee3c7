//! Pre-release version handling for semantic versioning
//!
//! Supports channel labels with optional iteration numbers, producing
//! pre-release segments like "beta.1". According to semver.org:
//! https://semver.org/#spec-item-9

use crate::error::{CommitPilotError, Result};
use std::fmt;

/// Pre-release segment with a channel label and optional iteration number
///
/// # Examples
/// - "beta" -> PreRelease { label: "beta", iteration: None }
/// - "beta.1" -> PreRelease { label: "beta", iteration: Some(1) }
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreRelease {
    /// The channel label (e.g. "beta", "next")
    pub label: String,
    /// Optional iteration number (incremented per release on the channel)
    pub iteration: Option<u32>,
}

impl PreRelease {
    /// Create a new pre-release segment
    ///
    /// # Arguments
    /// * `label` - Channel label; lower-case alphanumerics and hyphens only
    /// * `iteration` - Optional iteration number
    ///
    /// # Returns
    /// * `Ok(PreRelease)` - When the label is valid
    /// * `Err` - If the label contains invalid characters or is empty
    pub fn new(label: impl Into<String>, iteration: Option<u32>) -> Result<Self> {
        let label = label.into();
        if label.is_empty() {
            return Err(CommitPilotError::version("Empty pre-release label"));
        }
        if !label
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(CommitPilotError::version(format!(
                "Invalid pre-release label: '{}'",
                label
            )));
        }

        Ok(PreRelease { label, iteration })
    }

    /// The first pre-release on a channel: "label.1"
    pub fn first(label: impl Into<String>) -> Result<Self> {
        Self::new(label, Some(1))
    }

    /// Parse a pre-release segment from a string
    ///
    /// Accepts formats like "beta", "beta.1", or "custom-id.5".
    pub fn parse(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(CommitPilotError::version("Empty pre-release segment"));
        }

        let parts: Vec<&str> = s.split('.').collect();

        let iteration = if parts.len() > 1 {
            Some(parts[1].parse::<u32>().map_err(|_| {
                CommitPilotError::version(format!("Invalid iteration number: '{}'", parts[1]))
            })?)
        } else {
            None
        };

        Self::new(parts[0], iteration)
    }

    /// Increment the iteration number
    ///
    /// If iteration is None, returns Some(1). Otherwise increments by 1.
    pub fn increment_iteration(&self) -> Self {
        let new_iteration = match self.iteration {
            Some(n) => Some(n + 1),
            None => Some(1),
        };

        PreRelease {
            label: self.label.clone(),
            iteration: new_iteration,
        }
    }

    /// Render as a `semver::Prerelease` segment
    pub fn to_semver(&self) -> Result<semver::Prerelease> {
        semver::Prerelease::new(&self.to_string())
            .map_err(|e| CommitPilotError::version(format!("Invalid pre-release segment: {}", e)))
    }
}

impl fmt::Display for PreRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)?;
        if let Some(iter) = self.iteration {
            write!(f, ".{}", iter)?;
        }
        Ok(())
    }
}
