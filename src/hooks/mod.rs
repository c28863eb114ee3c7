//! Git hooks that wire the commit grammar into the repository
//!
//! Two hook points are supported:
//! - commit-msg: validates the message of the commit being created
//! - pre-push: lints the latest commit before it leaves the machine

pub mod installer;

pub use installer::HookInstaller;

use crate::error::{CommitPilotError, Result};

/// Git hooks commit-pilot knows how to install
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookType {
    CommitMsg,
    PrePush,
}

impl HookType {
    /// Get the git hook name as a string
    pub fn name(&self) -> &'static str {
        match self {
            HookType::CommitMsg => "commit-msg",
            HookType::PrePush => "pre-push",
        }
    }

    /// Parse a hook name; unknown names are a configuration error
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "commit-msg" => Ok(HookType::CommitMsg),
            "pre-push" => Ok(HookType::PrePush),
            other => Err(CommitPilotError::config(format!(
                "Unknown hook '{}', supported hooks: commit-msg, pre-push",
                other
            ))),
        }
    }

    /// The hooks installed when no explicit set is given
    pub fn default_set() -> Vec<HookType> {
        vec![HookType::CommitMsg]
    }

    /// The shell script body for this hook
    pub fn script(&self) -> String {
        let command = match self {
            HookType::CommitMsg => "exec commit-pilot check \"$1\"",
            HookType::PrePush => "exec commit-pilot lint",
        };

        format!("#!/bin/sh\n{}\n{}\n", installer::MARKER, command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hook_names() {
        assert_eq!(HookType::CommitMsg.name(), "commit-msg");
        assert_eq!(HookType::PrePush.name(), "pre-push");
    }

    #[test]
    fn test_from_name_roundtrip() {
        assert_eq!(
            HookType::from_name("commit-msg").unwrap(),
            HookType::CommitMsg
        );
        assert_eq!(HookType::from_name("pre-push").unwrap(), HookType::PrePush);
    }

    #[test]
    fn test_from_name_unknown() {
        let err = HookType::from_name("post-merge").unwrap_err();
        assert!(err.to_string().contains("post-merge"));
        assert!(err.to_string().contains("supported hooks"));
    }

    #[test]
    fn test_script_carries_marker() {
        for hook in [HookType::CommitMsg, HookType::PrePush] {
            let script = hook.script();
            assert!(script.starts_with("#!/bin/sh\n"));
            assert!(script.contains(installer::MARKER));
            assert!(script.contains("commit-pilot"));
        }
    }

    #[test]
    fn test_default_set() {
        assert_eq!(HookType::default_set(), vec![HookType::CommitMsg]);
    }
}
