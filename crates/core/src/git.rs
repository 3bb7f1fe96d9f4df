//! Git index access using command-line git
//!
//! Provides the two read operations the audit consumes: listing staged paths
//! and fetching the staged (index) content of a path. Uses command-line git
//! to avoid dependency issues with git2/libgit2.

use crate::error::{Error, Result, ResultExt};
use crate::process::{run_command_in_dir, run_command_raw_in_dir};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Read-only view of a version-control staging area.
///
/// This is the seam between the audit and the repository: the audit core
/// never talks to git directly, so tests can drive it with fabricated
/// staging areas instead of a real repository.
pub trait StagedSource {
    /// List the paths currently staged for commit, in the order the
    /// underlying tool reports them. Empty if nothing is staged.
    fn staged_paths(&self) -> Result<Vec<String>>;

    /// Fetch the content of `path` as recorded in the index, decoded as
    /// UTF-8 text. Fails for binary or otherwise unreadable content; the
    /// caller decides whether that aborts anything (the audit skips the
    /// file and moves on).
    fn staged_content(&self, path: &str) -> Result<String>;
}

/// Git index wrapper
#[derive(Debug)]
pub struct GitIndex {
    workdir: PathBuf,
}

impl GitIndex {
    /// Open the git repository containing the given path
    pub fn open(path: &Path) -> Result<Self> {
        let result = run_command_in_dir("git", &["rev-parse", "--git-dir"], path)?;
        if !result.success {
            return Err(Error::not_a_git_repo());
        }

        // All later git calls run from the toplevel so staged paths resolve
        // the same way `git show :path` expects them.
        let result = run_command_in_dir("git", &["rev-parse", "--show-toplevel"], path)?;
        let workdir = PathBuf::from(result.stdout.trim());

        Ok(Self { workdir })
    }

    /// Open the repository containing the current directory
    pub fn open_current() -> Result<Self> {
        let current_dir = std::env::current_dir()?;
        Self::open(&current_dir)
    }

    /// Get the repository working directory
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Resolve the directory git consults for hook scripts
    pub fn hooks_dir(&self) -> Result<PathBuf> {
        let result = run_command_in_dir(
            "git",
            &["rev-parse", "--git-path", "hooks"],
            &self.workdir,
        )
        .context("resolving the hooks directory")?;

        if !result.success {
            return Err(Error::git_command("rev-parse --git-path hooks", &result.stderr));
        }

        let path = PathBuf::from(result.stdout.trim());
        if path.is_absolute() {
            Ok(path)
        } else {
            Ok(self.workdir.join(path))
        }
    }
}

impl StagedSource for GitIndex {
    fn staged_paths(&self) -> Result<Vec<String>> {
        let result = run_command_in_dir(
            "git",
            &["diff", "--cached", "--name-only"],
            &self.workdir,
        )
        .context("listing staged files")?;

        // A non-zero exit degrades to an empty listing rather than an
        // error; only a failure to run git at all propagates.
        if !result.success {
            debug!(
                stderr = %result.stderr.trim(),
                "git diff --cached exited non-zero; treating index as empty"
            );
            return Ok(Vec::new());
        }

        let paths: Vec<String> = result
            .stdout
            .lines()
            .filter(|l| !l.is_empty())
            .map(String::from)
            .collect();

        debug!(count = paths.len(), "listed staged paths");
        Ok(paths)
    }

    fn staged_content(&self, path: &str) -> Result<String> {
        let spec = format!(":{}", path);
        let output = run_command_raw_in_dir("git", &["show", &spec], &self.workdir)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::git_command(&format!("show {}", spec), &stderr));
        }

        String::from_utf8(output.stdout).map_err(|_| Error::unreadable_content(path))
    }
}
