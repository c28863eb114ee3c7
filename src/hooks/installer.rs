use crate::error::{CommitPilotError, Result};
use crate::hooks::HookType;
use std::fs;
use std::path::{Path, PathBuf};

/// Marker line identifying hooks written by commit-pilot.
///
/// A hook file carrying this line may be overwritten on reinstall; any other
/// existing hook is left alone and reported instead.
pub const MARKER: &str = "# installed by commit-pilot";

/// Writes hook scripts into a repository's hooks directory
pub struct HookInstaller {
    hooks_dir: PathBuf,
}

impl HookInstaller {
    /// Create an installer targeting the given hooks directory
    pub fn new(hooks_dir: impl Into<PathBuf>) -> Self {
        HookInstaller {
            hooks_dir: hooks_dir.into(),
        }
    }

    /// Install the given hooks
    ///
    /// # Returns
    /// * `Ok(Vec<PathBuf>)` - Paths of the hook files written
    /// * `Err` - If a foreign hook occupies one of the slots, or on I/O error
    pub fn install(&self, hooks: &[HookType]) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(&self.hooks_dir)?;

        let mut written = Vec::with_capacity(hooks.len());
        for hook in hooks {
            written.push(self.write_hook(*hook)?);
        }
        Ok(written)
    }

    fn write_hook(&self, hook: HookType) -> Result<PathBuf> {
        let path = self.hooks_dir.join(hook.name());

        if path.exists() && !is_own_hook(&path) {
            return Err(CommitPilotError::hook(format!(
                "An existing {} hook at {} was not installed by commit-pilot; move it aside first",
                hook.name(),
                path.display()
            )));
        }

        fs::write(&path, hook.script())?;
        make_executable(&path)?;

        Ok(path)
    }
}

/// True if the file at `path` carries the commit-pilot marker
pub fn is_own_hook(path: &Path) -> bool {
    fs::read_to_string(path)
        .map(|content| content.contains(MARKER))
        .unwrap_or(false)
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut permissions = fs::metadata(path)?.permissions();
    permissions.set_mode(0o755);
    fs::set_permissions(path, permissions)?;
    Ok(())
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_install_writes_scripts() {
        let dir = TempDir::new().unwrap();
        let installer = HookInstaller::new(dir.path());

        let written = installer
            .install(&[HookType::CommitMsg, HookType::PrePush])
            .unwrap();
        assert_eq!(written.len(), 2);

        for path in &written {
            assert!(path.exists());
            assert!(is_own_hook(path));
        }
        assert!(dir.path().join("commit-msg").exists());
        assert!(dir.path().join("pre-push").exists());
    }

    #[test]
    fn test_install_creates_missing_hooks_dir() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("deeper").join("hooks");
        let installer = HookInstaller::new(&nested);

        installer.install(&HookType::default_set()).unwrap();
        assert!(nested.join("commit-msg").exists());
    }

    #[test]
    fn test_reinstall_overwrites_own_hook() {
        let dir = TempDir::new().unwrap();
        let installer = HookInstaller::new(dir.path());

        installer.install(&[HookType::CommitMsg]).unwrap();
        // Second install over our own file succeeds
        installer.install(&[HookType::CommitMsg]).unwrap();
    }

    #[test]
    fn test_foreign_hook_is_preserved() {
        let dir = TempDir::new().unwrap();
        let foreign = dir.path().join("commit-msg");
        fs::write(&foreign, "#!/bin/sh\necho custom hook\n").unwrap();

        let installer = HookInstaller::new(dir.path());
        let result = installer.install(&[HookType::CommitMsg]);

        assert!(result.is_err());
        let content = fs::read_to_string(&foreign).unwrap();
        assert!(content.contains("custom hook"));
    }

    #[cfg(unix)]
    #[test]
    fn test_installed_hook_is_executable() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let installer = HookInstaller::new(dir.path());
        let written = installer.install(&[HookType::CommitMsg]).unwrap();

        let mode = fs::metadata(&written[0]).unwrap().permissions().mode();
        assert_eq!(mode & 0o111, 0o111);
    }
}
