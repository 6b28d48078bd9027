//! Subprocess invocation with captured output and tool preflight.
//!
//! A nonzero exit from a tool is not an error here: the captured output is
//! returned either way and the caller decides success/failure. Only a
//! failure to launch the process at all surfaces as `Err`.

use anyhow::{Context, Result};
use std::process::Command;

#[derive(Debug, Clone)]
/// Captured result of one blocking tool invocation.
pub struct ToolOutput {
    /// Exit code; `None` when the process was terminated by a signal.
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ToolOutput {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }

    /// Exit code for display, with signal termination spelled out.
    pub fn status_display(&self) -> String {
        match self.status {
            Some(code) => code.to_string(),
            None => "signal".to_string(),
        }
    }
}

/// Run `program` with `args`, blocking until completion and capturing both
/// output streams. When `echo` is set, the command line is printed first.
pub fn run_command(program: &str, args: &[String], echo: bool) -> Result<ToolOutput> {
    if echo {
        eprintln!(
            "{} Running: {} {}",
            crate::output::info_prefix(),
            program,
            args.join(" ")
        );
    }
    let out = Command::new(program)
        .args(args)
        .output()
        .with_context(|| format!("failed to run '{program}'"))?;
    Ok(ToolOutput {
        status: out.status.code(),
        stdout: String::from_utf8_lossy(&out.stdout).to_string(),
        stderr: String::from_utf8_lossy(&out.stderr).to_string(),
    })
}

/// Preflight PATH lookup for the required external tools. Returns the names
/// of the tools that could not be found.
pub fn missing_tools() -> Vec<&'static str> {
    crate::REQUIRED_TOOLS
        .iter()
        .copied()
        .filter(|tool| which::which(tool).is_err())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captures_stdout_and_zero_status() {
        let out = run_command("sh", &["-c".into(), "echo hello".into()], false).unwrap();
        assert!(out.success());
        assert_eq!(out.stdout.trim(), "hello");
        assert!(out.stderr.is_empty());
    }

    #[test]
    fn test_nonzero_exit_is_not_an_error() {
        let out = run_command(
            "sh",
            &["-c".into(), "echo oops >&2; exit 3".into()],
            false,
        )
        .unwrap();
        assert!(!out.success());
        assert_eq!(out.status, Some(3));
        assert_eq!(out.stderr.trim(), "oops");
        assert_eq!(out.status_display(), "3");
    }

    #[test]
    fn test_launch_failure_is_an_error() {
        let res = run_command("walint-no-such-binary-xyz", &[], false);
        assert!(res.is_err());
    }
}
