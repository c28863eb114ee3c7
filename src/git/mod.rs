//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over the git operations
//! commit-pilot needs, allowing for a real implementation backed by the
//! `git2` crate and a mock implementation for testing.
//!
//! Most code should depend on the [Repository] trait rather than concrete
//! implementations.

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;
use std::path::PathBuf;

/// Commit information for analysis
#[derive(Debug, Clone, PartialEq)]
pub struct CommitInfo {
    /// The commit hash (shortened)
    pub hash: String,
    /// The full commit message
    pub message: String,
    /// The commit author
    pub author: String,
}

/// Common git operation trait for abstraction
///
/// All implementors must be `Send` to allow transfer across threads.
/// Implementations map underlying errors (like `git2::Error`) to
/// [crate::error::CommitPilotError] variants.
pub trait Repository: Send {
    /// Name of the currently checked-out branch
    ///
    /// # Returns
    /// * `Ok(String)` - Branch name (e.g. "main", "develop")
    /// * `Err` - If HEAD cannot be resolved
    fn current_branch(&self) -> Result<String>;

    /// Commits reachable from `to` but not from `from`, oldest first
    ///
    /// `from` is exclusive; `None` means "from the beginning of history".
    /// Both revisions accept anything `git rev-parse` would (branch names,
    /// tags, `HEAD~1`, hashes).
    ///
    /// # Arguments
    /// * `from` - Lower bound revision (exclusive), or None
    /// * `to` - Upper bound revision (inclusive)
    fn commits_in_range(&self, from: Option<&str>, to: &str) -> Result<Vec<CommitInfo>>;

    /// All tag names in the repository
    fn list_tags(&self) -> Result<Vec<String>>;

    /// Path of the repository's hooks directory
    fn hooks_dir(&self) -> Result<PathBuf>;
}
