//! Process execution utilities
//!
//! Provides a unified interface for running external commands with:
//! - Output capture
//! - Directory context
//! - Raw (undecoded) stdout for byte-exact content

use crate::error::{Error, Result};
use std::path::Path;
use std::process::{Command, Output, Stdio};

/// Result of a command execution
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Whether the command succeeded (exit code 0)
    pub success: bool,
    /// Exit code of the command
    pub exit_code: i32,
    /// Standard output
    pub stdout: String,
    /// Standard error
    pub stderr: String,
}

impl CommandResult {
    /// Create from std::process::Output
    pub fn from_output(output: Output) -> Self {
        Self {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

/// Run a command in a specific directory and capture decoded output
pub fn run_command_in_dir(program: &str, args: &[&str], dir: &Path) -> Result<CommandResult> {
    let output = spawn(program, args, dir)?;
    Ok(CommandResult::from_output(output))
}

/// Run a command in a specific directory and capture raw output
///
/// Stdout is left as bytes so callers can decode strictly. Lossy decoding
/// would hide the binary-content signal the audit skips files on.
pub fn run_command_raw_in_dir(program: &str, args: &[&str], dir: &Path) -> Result<Output> {
    spawn(program, args, dir)
}

fn spawn(program: &str, args: &[&str], dir: &Path) -> Result<Output> {
    Command::new(program)
        .args(args)
        .current_dir(dir)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|e| Error::process(format!("Failed to execute {}: {}", program, e)).with_source(e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_run_command_echo() {
        let cwd = env::current_dir().unwrap();
        let result = run_command_in_dir("echo", &["hello"], &cwd).unwrap();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
        assert!(result.stdout.contains("hello"));
    }

    #[test]
    fn test_run_command_nonexistent() {
        let cwd = env::current_dir().unwrap();
        let result = run_command_in_dir("nonexistent_command_12345", &[], &cwd);
        assert!(result.is_err());
    }

    #[test]
    fn test_run_command_raw_preserves_bytes() {
        let cwd = env::current_dir().unwrap();
        let output = run_command_raw_in_dir("printf", &["ab\\303\\251"], &cwd).unwrap();
        assert!(output.status.success());
        assert_eq!(output.stdout, vec![b'a', b'b', 0xc3, 0xa9]);
    }
}
