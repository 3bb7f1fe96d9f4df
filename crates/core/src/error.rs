//! Structured error handling with context and recovery suggestions
//!
//! This module provides the error types shared across the workspace:
//! - Numeric error codes for programmatic handling
//! - Optional context and recovery suggestions
//! - Process exit codes for the audit verdict

use std::fmt;
use thiserror::Error;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // General errors (1xxx)
    Unknown = 1000,
    Internal = 1001,

    // IO errors (2xxx)
    IoError = 2000,
    FileNotFound = 2001,
    PermissionDenied = 2002,

    // Git errors (3xxx)
    GitError = 3000,
    NotAGitRepo = 3001,
    GitCommandFailed = 3002,
    UnreadableContent = 3003,

    // Process errors (4xxx)
    ProcessError = 4000,
    CommandNotFound = 4001,

    // Hook errors (5xxx)
    HookError = 5000,
    HookAlreadyInstalled = 5001,
}

impl ErrorCode {
    /// Get the numeric code
    pub fn code(&self) -> u32 {
        *self as u32
    }

    /// Get a human-readable category
    pub fn category(&self) -> &'static str {
        match self.code() / 1000 {
            1 => "General",
            2 => "IO",
            3 => "Git",
            4 => "Process",
            5 => "Hook",
            _ => "Unknown",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

/// Main error type with rich context
#[derive(Error, Debug)]
pub struct Error {
    /// Error code for programmatic handling
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Additional context
    pub context: Option<String>,
    /// Recovery suggestion
    pub suggestion: Option<String>,
    /// Source error
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ctx) = &self.context {
            write!(f, "\n  Context: {}", ctx)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n  Suggestion: {}", suggestion)?;
        }
        Ok(())
    }
}

impl Error {
    /// Create a new error
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: None,
            suggestion: None,
            source: None,
        }
    }

    /// Add context to the error
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Add a recovery suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add a source error
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    // Convenience constructors

    /// Generic git failure
    pub fn git(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::GitError, message)
    }

    /// The current directory is not inside a git repository
    pub fn not_a_git_repo() -> Self {
        Self::new(ErrorCode::NotAGitRepo, "Not a git repository")
            .with_suggestion("Run this command from within a git repository")
    }

    /// A git subcommand exited non-zero
    pub fn git_command(args: &str, stderr: &str) -> Self {
        let detail = stderr.trim();
        let message = if detail.is_empty() {
            format!("git {} failed", args)
        } else {
            format!("git {} failed: {}", args, detail)
        };
        Self::new(ErrorCode::GitCommandFailed, message)
    }

    /// Index content for a path could not be decoded as text
    pub fn unreadable_content(path: &str) -> Self {
        Self::new(
            ErrorCode::UnreadableContent,
            format!("Staged content of {} is not valid text", path),
        )
    }

    /// A subprocess could not be spawned or waited on
    pub fn process(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ProcessError, message)
    }

    /// Hook installation failure
    pub fn hook(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::HookError, message)
    }

    /// A pre-commit hook is already present
    pub fn hook_already_installed(path: impl AsRef<std::path::Path>) -> Self {
        Self::new(
            ErrorCode::HookAlreadyInstalled,
            format!(
                "A pre-commit hook already exists at {}",
                path.as_ref().display()
            ),
        )
        .with_suggestion("Re-run with --force to overwrite it")
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Exit codes for the audit
///
/// The audit knows exactly two outcomes: pass (which includes the fail-open
/// degraded path) and block.
pub mod exit_codes {
    /// Nothing suspicious staged, or the audit degraded fail-open
    pub const SUCCESS: i32 = 0;
    /// A secret rule matched staged content
    pub const FAILURE: i32 = 1;
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        let code = match err.kind() {
            std::io::ErrorKind::NotFound => ErrorCode::FileNotFound,
            std::io::ErrorKind::PermissionDenied => ErrorCode::PermissionDenied,
            _ => ErrorCode::IoError,
        };
        Error::new(code, err.to_string()).with_source(err)
    }
}

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Attach context describing what was being attempted
    fn context(self, context: impl Into<String>) -> Result<T>;
    /// Attach a recovery suggestion
    fn with_suggestion(self, suggestion: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }

    fn with_suggestion(self, suggestion: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_suggestion(suggestion))
    }
}
