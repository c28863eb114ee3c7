use crate::error::{CommitPilotError, Result};
use crate::git::CommitInfo;
use git2::Repository as Git2Repo;
use std::path::{Path, PathBuf};

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl std::fmt::Debug for Git2Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Git2Repository")
            .field("path", &self.repo.path())
            .finish()
    }
}

impl Git2Repository {
    /// Open or discover a git repository starting from `path`
    ///
    /// Walks up parent directories the way git itself does. Failing to find
    /// a repository is a missing-capability error with a remediation hint.
    pub fn discover<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path).map_err(|_| {
            CommitPilotError::missing_tool(
                "git repository",
                "Run this command inside a git repository (or `git init` one first)",
            )
        })?;

        Ok(Git2Repository { repo })
    }

    /// Create from an existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    fn resolve_commit_id(&self, rev: &str) -> Result<git2::Oid> {
        let object = self.repo.revparse_single(rev)?;
        let commit = object.peel_to_commit()?;
        Ok(commit.id())
    }
}

impl super::Repository for Git2Repository {
    fn current_branch(&self) -> Result<String> {
        let head = self.repo.head()?;
        let name = head.shorthand().unwrap_or("HEAD").to_string();
        Ok(name)
    }

    fn commits_in_range(&self, from: Option<&str>, to: &str) -> Result<Vec<CommitInfo>> {
        let to_oid = self.resolve_commit_id(to)?;

        let mut revwalk = self.repo.revwalk()?;
        revwalk.push(to_oid)?;
        if let Some(from_rev) = from {
            let from_oid = self.resolve_commit_id(from_rev)?;
            revwalk.hide(from_oid)?;
        }

        let mut commits = Vec::new();
        for oid_result in revwalk {
            let oid = oid_result?;
            let commit = self.repo.find_commit(oid)?;

            let message = commit.message().unwrap_or("(empty message)").to_string();
            let author = commit.author().name().unwrap_or("unknown").to_string();
            let hash = oid.to_string().chars().take(7).collect();

            commits.push(CommitInfo {
                hash,
                message,
                author,
            });
        }

        commits.reverse();
        Ok(commits)
    }

    fn list_tags(&self) -> Result<Vec<String>> {
        let tags = self.repo.tag_names(None)?;

        Ok(tags.iter().flatten().map(|s| s.to_string()).collect())
    }

    fn hooks_dir(&self) -> Result<PathBuf> {
        Ok(self.repo.path().join("hooks"))
    }
}
