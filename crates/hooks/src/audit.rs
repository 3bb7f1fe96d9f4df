//! Staged-content audit - the pre-commit gate
//!
//! Pulls every staged file's content from the index and applies the secret
//! rules in order. The first match blocks the commit. Files whose staged
//! content cannot be read are skipped, so binary blobs and racing deletions
//! never block a commit on their own.

use owo_colors::OwoColorize;
use tracing::debug;

use stageguard_core::error::exit_codes;
use stageguard_core::git::StagedSource;
use stageguard_core::{Error, Result};

use crate::rules::{self, SecretRule};

/// A rule hit in a staged file
#[derive(Debug)]
pub struct Finding {
    /// Path of the offending file, as listed by the index
    pub file: String,
    /// Rule that fired
    pub rule: &'static SecretRule,
}

/// Outcome of a completed audit
#[derive(Debug)]
pub enum Verdict {
    /// No staged file matched any rule
    Passed,
    /// A rule matched and the commit must not proceed
    Blocked(Finding),
}

/// Audit every staged file against the secret rules.
///
/// Findings are reported in listing order and the audit stops at the first
/// one. Listing failures bubble up to the caller, which decides the
/// fail-open behavior; per-file read failures only skip that file.
pub fn audit<S: StagedSource>(source: &S) -> Result<Verdict> {
    let paths = source.staged_paths()?;
    debug!(count = paths.len(), "auditing staged files");

    for path in paths {
        let content = match source.staged_content(&path) {
            Ok(content) => content,
            Err(err) => {
                debug!(file = %path, error = %err, "skipping unreadable staged file");
                continue;
            }
        };

        if let Some(rule) = rules::first_match(&content) {
            debug!(file = %path, rule = rule.name, "rule matched");
            return Ok(Verdict::Blocked(Finding { file: path, rule }));
        }
    }

    Ok(Verdict::Passed)
}

/// Print the verdict and return the process exit code
pub fn print_verdict(verdict: &Verdict) -> i32 {
    match verdict {
        Verdict::Passed => {
            println!("{} Security audit passed", "✓".green());
            exit_codes::SUCCESS
        }
        Verdict::Blocked(finding) => {
            println!("{} {} {}", "✗".red(), finding.rule.reason, finding.file);
            exit_codes::FAILURE
        }
    }
}

/// Print a degraded-mode warning and return the fail-open exit code.
///
/// An audit that cannot run must not hold up the commit, so this always
/// reports success to the caller.
pub fn print_degraded(err: &Error) -> i32 {
    println!("{} Security audit error: {}", "⚠".yellow(), err);
    exit_codes::SUCCESS
}
