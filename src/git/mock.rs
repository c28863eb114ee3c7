use crate::error::Result;
use crate::git::{CommitInfo, Repository};
use std::path::PathBuf;

/// Mock repository for testing without actual git operations
pub struct MockRepository {
    branch: String,
    commits: Vec<CommitInfo>,
    tags: Vec<String>,
    hooks_dir: PathBuf,
}

impl MockRepository {
    /// Create a new empty mock repository on branch "main"
    pub fn new() -> Self {
        MockRepository {
            branch: "main".to_string(),
            commits: Vec::new(),
            tags: Vec::new(),
            hooks_dir: PathBuf::from(".git/hooks"),
        }
    }

    /// Set the checked-out branch name
    pub fn set_branch(&mut self, branch: impl Into<String>) {
        self.branch = branch.into();
    }

    /// Add a commit; commits are returned in insertion order (oldest first)
    pub fn add_commit(&mut self, message: impl Into<String>) {
        let index = self.commits.len();
        self.commits.push(CommitInfo {
            hash: format!("{:07x}", index + 1),
            message: message.into(),
            author: "mock".to_string(),
        });
    }

    /// Add a tag name
    pub fn add_tag(&mut self, name: impl Into<String>) {
        self.tags.push(name.into());
    }

    /// Point the hooks directory somewhere (e.g. a temp dir in tests)
    pub fn set_hooks_dir(&mut self, dir: impl Into<PathBuf>) {
        self.hooks_dir = dir.into();
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn current_branch(&self) -> Result<String> {
        Ok(self.branch.clone())
    }

    fn commits_in_range(&self, _from: Option<&str>, _to: &str) -> Result<Vec<CommitInfo>> {
        // Simplified: the range always covers every canned commit
        Ok(self.commits.clone())
    }

    fn list_tags(&self) -> Result<Vec<String>> {
        Ok(self.tags.clone())
    }

    fn hooks_dir(&self) -> Result<PathBuf> {
        Ok(self.hooks_dir.clone())
    }
}
