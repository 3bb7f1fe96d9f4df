//! Core plumbing for the stageguard pre-commit audit
//!
//! This crate provides the infrastructure the audit is built on:
//!
//! - **Error handling**: structured errors with codes, context, and recovery suggestions
//! - **Git index access**: staged paths and staged content using command-line git
//! - **Process execution**: safe command execution with output capture
//!
//! # Example
//!
//! ```rust,no_run
//! use stageguard_core::git::{GitIndex, StagedSource};
//!
//! let index = GitIndex::open_current().expect("Not a git repo");
//! for path in index.staged_paths().expect("Failed to list staged files") {
//!     println!("staged: {}", path);
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod git;
pub mod process;

pub use error::{Error, ErrorCode, Result, ResultExt};
