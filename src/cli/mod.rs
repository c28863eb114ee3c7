//! Operator-facing workflow orchestration
//!
//! Each operation the binary exposes lives here as a function over the
//! loaded configuration, keeping clap argument parsing (main.rs) separate
//! from the workflows themselves. Workflows that only need read access to
//! the repository take the [Repository] trait so they can run against the
//! mock in tests.

use std::fs;

use crate::config::Config;
use crate::domain::CommitMessage;
use crate::error::{CommitPilotError, Result};
use crate::git::{Git2Repository, Repository};
use crate::hooks::{HookInstaller, HookType};
use crate::lint::Linter;
use crate::release::resolver::{latest_on_channel, latest_stable};
use crate::release::{AnalyzedCommit, ReleaseDecision, ReleaseResolver, TagTemplate};
use crate::tools;
use crate::ui;

/// Assemble a conventional commit message from wizard answers
fn compose_message(
    commit_type: &str,
    scope: &str,
    subject: &str,
    body: Option<&str>,
    breaking: Option<&str>,
) -> String {
    let mut message = format!("{}({}): {}", commit_type, scope, subject);

    if let Some(body) = body {
        message.push_str("\n\n");
        message.push_str(body);
    }

    if let Some(breaking) = breaking {
        message.push_str("\n\n");
        message.push_str("BREAKING-CHANGE: ");
        message.push_str(breaking);
    }

    message
}

/// Interactive commit wizard.
///
/// Prompts for the message parts, validates the assembled message against
/// the grammar, and creates the commit through the git CLI so hooks run.
/// A non-cancel commit failure reinstalls the default hooks and retries
/// once before surfacing the error.
pub fn run_commit_wizard(config: &Config) -> Result<()> {
    tools::require_git()?;
    let repo = Git2Repository::discover(".")?;

    let commit_type = ui::select_from_list("Commit type", &config.lint.types)?;
    let scope = ui::input_required("Scope (kebab-case)")?;
    let subject = ui::input_required("Short description")?;
    let body = ui::input_optional("Longer description")?;
    let breaking = ui::input_optional("Breaking change description")?;

    let message = compose_message(
        &commit_type,
        &scope,
        &subject,
        body.as_deref(),
        breaking.as_deref(),
    );

    let linter = Linter::new(config.lint.clone());
    let report = linter.check(&message);
    if !report.is_valid() {
        ui::display_report("commit message", &report);
        return Err(CommitPilotError::Validation(report.violations.len()));
    }

    println!("\n{}\n", message);
    if !ui::confirm_action("Create commit with this message?")? {
        return Err(CommitPilotError::Cancelled);
    }

    match tools::run_git_commit(&message) {
        Ok(()) => {
            ui::display_success("Commit created");
            Ok(())
        }
        Err(CommitPilotError::Cancelled) => Err(CommitPilotError::Cancelled),
        Err(first_failure) => {
            ui::display_warning(&format!(
                "Commit failed: {}; reinstalling hooks and retrying once",
                first_failure
            ));

            let installer = HookInstaller::new(repo.hooks_dir()?);
            if let Err(hook_err) = installer.install(&HookType::default_set()) {
                ui::display_warning(&format!("Hook reinstall failed: {}", hook_err));
            }

            tools::run_git_commit(&message)?;
            ui::display_success("Commit created on retry");
            Ok(())
        }
    }
}

/// Install the named git hooks (default set when none are given)
pub fn run_install_hooks(hook_names: &[String]) -> Result<()> {
    let hooks = if hook_names.is_empty() {
        HookType::default_set()
    } else {
        hook_names
            .iter()
            .map(|name| HookType::from_name(name))
            .collect::<Result<Vec<_>>>()?
    };

    let repo = Git2Repository::discover(".")?;
    let installer = HookInstaller::new(repo.hooks_dir()?);
    let written = installer.install(&hooks)?;

    for path in &written {
        ui::display_success(&format!("Installed {}", path.display()));
    }
    Ok(())
}

/// Lint the configured revision range of the repository in the working
/// directory. Returns the number of commits with violations.
pub fn run_lint_range(config: &Config, from: Option<&str>, to: Option<&str>) -> Result<usize> {
    let repo = Git2Repository::discover(".")?;
    lint_commits(config, &repo, from, to)
}

/// Lint every commit in the range, reporting violations per commit.
///
/// The default range covers the immediately preceding commit through the
/// current one; in a repository whose HEAD has no parent yet, the whole
/// (single-commit) history is linted instead.
///
/// # Returns
/// * `Ok(usize)` - Number of commits that failed validation
pub fn lint_commits<R: Repository>(
    config: &Config,
    repo: &R,
    from: Option<&str>,
    to: Option<&str>,
) -> Result<usize> {
    let from_rev = from.unwrap_or("HEAD~1");
    let to_rev = to.unwrap_or("HEAD");

    let commits = match repo.commits_in_range(Some(from_rev), to_rev) {
        Ok(commits) => commits,
        // HEAD~1 does not resolve on a root commit; lint from the beginning
        Err(_) if from.is_none() => repo.commits_in_range(None, to_rev)?,
        Err(e) => return Err(e),
    };

    if commits.is_empty() {
        ui::display_status("No commits in range");
        return Ok(0);
    }

    let linter = Linter::new(config.lint.clone());
    let mut failed = 0;

    for commit in &commits {
        let header = commit.message.lines().next().unwrap_or("");
        let label = format!("{} {}", commit.hash, header);
        let report = linter.check(&commit.message);
        ui::display_report(&label, &report);
        if !report.is_valid() {
            failed += 1;
        }
    }

    if failed > 0 {
        ui::display_error(&format!(
            "{} of {} commit(s) failed validation",
            failed,
            commits.len()
        ));
    }

    Ok(failed)
}

/// Validate a single message from a file or a literal argument.
///
/// This is the entry point the installed commit-msg hook uses; comment
/// lines git adds to the message file are ignored.
///
/// # Returns
/// * `Ok(true)` - Message is valid
/// * `Ok(false)` - Violations were reported
pub fn run_check(config: &Config, file: Option<&str>, message: Option<&str>) -> Result<bool> {
    let text = match (file, message) {
        (_, Some(message)) => message.to_string(),
        (Some(path), None) => strip_comment_lines(&fs::read_to_string(path)?),
        (None, None) => {
            return Err(CommitPilotError::config(
                "Provide a message file or --message",
            ))
        }
    };

    let linter = Linter::new(config.lint.clone());
    let report = linter.check(&text);

    let header = text.lines().next().unwrap_or("");
    ui::display_report(header, &report);

    Ok(report.is_valid())
}

fn strip_comment_lines(text: &str) -> String {
    text.lines()
        .filter(|line| !line.starts_with('#'))
        .collect::<Vec<_>>()
        .join("\n")
        .trim_end()
        .to_string()
}

/// Compute and display the release decision for the current branch
pub fn run_next_version(config: &Config) -> Result<()> {
    let repo = Git2Repository::discover(".")?;
    let (decision, tag) = plan_release(config, &repo)?;
    ui::display_decision(&decision, tag.as_deref());
    Ok(())
}

/// Compute the release decision for the repository's current branch.
///
/// Reads the latest release tags, collects the commits since the most
/// recent release relevant to the branch's channel, and resolves the batch
/// against the bump policy and branch/channel list.
///
/// # Returns
/// The decision plus the rendered tag name when a release would happen.
pub fn plan_release<R: Repository>(
    config: &Config,
    repo: &R,
) -> Result<(ReleaseDecision, Option<String>)> {
    let resolver = ReleaseResolver::from_config(config)?;
    let template = TagTemplate::new(&config.tag_format)?;

    let branch = repo.current_branch()?;
    let tags = repo.list_tags()?;

    let last_stable = latest_stable(&tags, &template);
    let label = resolver
        .channel_for(&branch)
        .and_then(|rule| rule.prerelease.clone());
    let last_on_channel = label
        .as_deref()
        .and_then(|label| latest_on_channel(&tags, &template, label));

    // The batch starts after the most recent release visible to this branch
    let since_tag = [last_stable.as_ref(), last_on_channel.as_ref()]
        .into_iter()
        .flatten()
        .max()
        .map(|version| template.format(version));

    let commits = repo.commits_in_range(since_tag.as_deref(), "HEAD")?;
    let analyzed: Vec<AnalyzedCommit> = commits
        .iter()
        .map(|commit| AnalyzedCommit::from(&CommitMessage::parse(&commit.message)))
        .collect();

    let decision = resolver.resolve(
        &analyzed,
        &branch,
        last_stable.as_ref(),
        last_on_channel.as_ref(),
    )?;

    let tag = decision
        .next_version
        .as_ref()
        .map(|version| template.format(version));

    Ok((decision, tag))
}
