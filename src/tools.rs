//! External tool invocation
//!
//! The only genuinely external capability is git itself: it is located on
//! PATH (missing git is fatal with a remediation hint) and invoked as a
//! subprocess so that installed hooks run. Exit code 130 is the user-cancel
//! signal and is kept distinct from failures.

use crate::error::{CommitPilotError, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

/// Exit code a tool returns when the user interrupted it
pub const USER_CANCELLED_EXIT: i32 = 130;

/// Locate the git binary on PATH
///
/// # Returns
/// * `Ok(PathBuf)` - Path to the git executable
/// * `Err` - Missing-capability error with a remediation hint
pub fn require_git() -> Result<PathBuf> {
    find_in_path("git").ok_or_else(|| {
        CommitPilotError::missing_tool(
            "git",
            "Install git (https://git-scm.com) and make sure it is on PATH",
        )
    })
}

fn find_in_path(binary: &str) -> Option<PathBuf> {
    let path_var = env::var_os("PATH")?;
    env::split_paths(&path_var)
        .map(|dir| dir.join(binary))
        .find(|candidate| candidate.is_file())
}

/// Create a commit with the given message via the git CLI.
///
/// Goes through the git binary rather than libgit2 so that commit-msg and
/// other installed hooks run.
pub fn run_git_commit(message: &str) -> Result<()> {
    let git = require_git()?;

    let status = Command::new(git)
        .args(["commit", "-m", message])
        .status()?;

    interpret_exit_code(status.code(), "git commit")
}

/// Map a process exit code to the crate's error taxonomy.
///
/// 0 is success, 130 is user cancellation, anything else (including death by
/// signal) is a tool failure.
pub fn interpret_exit_code(code: Option<i32>, context: &str) -> Result<()> {
    match code {
        Some(0) => Ok(()),
        Some(USER_CANCELLED_EXIT) => Err(CommitPilotError::Cancelled),
        Some(code) => Err(CommitPilotError::tool(format!(
            "{} exited with code {}",
            context, code
        ))),
        None => Err(CommitPilotError::tool(format!(
            "{} was terminated by a signal",
            context
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_interpret_success() {
        assert!(interpret_exit_code(Some(0), "tool").is_ok());
    }

    #[test]
    fn test_interpret_cancelled() {
        let err = interpret_exit_code(Some(130), "tool").unwrap_err();
        assert!(err.is_cancelled());
    }

    #[test]
    fn test_interpret_failure() {
        let err = interpret_exit_code(Some(1), "git commit").unwrap_err();
        assert!(!err.is_cancelled());
        assert!(err.to_string().contains("git commit"));
        assert!(err.to_string().contains("code 1"));
    }

    #[test]
    fn test_interpret_signal() {
        let err = interpret_exit_code(None, "tool").unwrap_err();
        assert!(err.to_string().contains("signal"));
    }

    #[test]
    #[serial]
    fn test_find_in_path() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join("some-tool"), "#!/bin/sh\n").unwrap();

        let original_path = env::var_os("PATH");
        env::set_var("PATH", dir.path());

        let found = find_in_path("some-tool");
        let missing = find_in_path("no-such-tool");

        match original_path {
            Some(p) => env::set_var("PATH", p),
            None => env::remove_var("PATH"),
        }

        assert_eq!(found, Some(dir.path().join("some-tool")));
        assert_eq!(missing, None);
    }

    #[test]
    #[serial]
    fn test_require_git_missing_has_hint() {
        let dir = tempfile::TempDir::new().unwrap();
        let original_path = env::var_os("PATH");
        env::set_var("PATH", dir.path());

        let result = require_git();

        match original_path {
            Some(p) => env::set_var("PATH", p),
            None => env::remove_var("PATH"),
        }

        let err = result.unwrap_err();
        assert!(err.to_string().contains("Install git"));
    }
}
