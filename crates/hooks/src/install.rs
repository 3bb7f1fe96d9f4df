//! Hook installation - wires the audit into git's pre-commit hook
//!
//! Writes a small shell stub to `.git/hooks/pre-commit` that execs
//! `stageguard audit`. Existing hooks are never clobbered unless the caller
//! passes `force`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::debug;

use stageguard_core::git::GitIndex;
use stageguard_core::Error;

/// Shell stub written to `.git/hooks/pre-commit`
const HOOK_SCRIPT: &str = "#!/bin/sh\n\
# Installed by stageguard. Runs the staged-content security audit.\n\
exec stageguard audit\n";

/// Result of a hook installation
#[derive(Debug)]
pub enum InstallOutcome {
    /// A fresh hook was written
    Installed(PathBuf),
    /// An existing hook was replaced because `force` was given
    Overwritten(PathBuf),
}

impl InstallOutcome {
    /// Path of the installed hook
    pub fn path(&self) -> &Path {
        match self {
            Self::Installed(path) | Self::Overwritten(path) => path,
        }
    }
}

/// Install the pre-commit hook for the repository behind `index`
pub fn install(index: &GitIndex, force: bool) -> anyhow::Result<InstallOutcome> {
    let hooks_dir = index.hooks_dir()?;
    fs::create_dir_all(&hooks_dir)
        .with_context(|| format!("creating {}", hooks_dir.display()))?;

    let hook_path = hooks_dir.join("pre-commit");
    let existed = hook_path.exists();
    if existed && !force {
        return Err(Error::hook_already_installed(&hook_path).into());
    }

    fs::write(&hook_path, HOOK_SCRIPT)
        .with_context(|| format!("writing {}", hook_path.display()))?;
    make_executable(&hook_path)?;

    debug!(path = %hook_path.display(), overwritten = existed, "hook installed");
    if existed {
        Ok(InstallOutcome::Overwritten(hook_path))
    } else {
        Ok(InstallOutcome::Installed(hook_path))
    }
}

#[cfg(unix)]
fn make_executable(path: &Path) -> anyhow::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms)
        .with_context(|| format!("marking {} executable", path.display()))?;
    Ok(())
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> anyhow::Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use stageguard_core::process::run_command_in_dir;
    use tempfile::TempDir;

    fn init_repo() -> (TempDir, GitIndex) {
        let dir = TempDir::new().unwrap();
        run_command_in_dir("git", &["init", "--quiet"], dir.path()).unwrap();
        let index = GitIndex::open(dir.path()).unwrap();
        (dir, index)
    }

    #[test]
    fn test_install_writes_executable_hook() {
        let (_dir, index) = init_repo();

        let outcome = install(&index, false).unwrap();
        assert!(matches!(outcome, InstallOutcome::Installed(_)));

        let script = fs::read_to_string(outcome.path()).unwrap();
        assert!(script.starts_with("#!/bin/sh"));
        assert!(script.contains("stageguard audit"));

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(outcome.path()).unwrap().permissions().mode();
            assert_eq!(mode & 0o111, 0o111);
        }
    }

    #[test]
    fn test_install_refuses_existing_hook() {
        let (_dir, index) = init_repo();
        install(&index, false).unwrap();

        let err = install(&index, false).unwrap_err();
        assert!(err.to_string().contains("already"));
    }

    #[test]
    fn test_force_overwrites_existing_hook() {
        let (_dir, index) = init_repo();
        let hook_path = index.hooks_dir().unwrap().join("pre-commit");
        fs::create_dir_all(hook_path.parent().unwrap()).unwrap();
        fs::write(&hook_path, "#!/bin/sh\nexit 0\n").unwrap();

        let outcome = install(&index, true).unwrap();
        assert!(matches!(outcome, InstallOutcome::Overwritten(_)));

        let script = fs::read_to_string(&hook_path).unwrap();
        assert!(script.contains("stageguard audit"));
    }
}
