//! Pre-commit machinery for stageguard
//!
//! This crate holds the hook-facing pieces:
//! - The staged-content security audit
//! - The secret rule table
//! - The pre-commit hook installer

pub mod audit;
pub mod install;
pub mod rules;

pub use stageguard_core::error::{exit_codes, Result};
