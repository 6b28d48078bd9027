//! Walint core library.
//!
//! Walint is a thin wrapper around two external linters for CI workflow
//! files: `yamllint` (generic YAML style/syntax) and `actionlint`
//! (workflow schema/semantics). It discovers workflow files, runs both
//! tools on each file as blocking subprocesses, passes their output
//! through, and reports an aggregate pass/fail exit status.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Built-in defaults plus optional override file resolution.
//! - `discover`: Workflow file enumeration under `.github/workflows`.
//! - `exec`: Subprocess invocation with captured output and tool preflight.
//! - `lint`: Per-file tool runs and output classification.
//! - `output`: Colored severity prefixes and result printing.
pub mod cli;
pub mod config;
pub mod discover;
pub mod exec;
pub mod lint;
pub mod output;

/// Conventional directory searched when no explicit file is given.
pub const WORKFLOWS_DIR: &str = ".github/workflows";

/// External tools required on PATH before any linting is attempted.
pub const REQUIRED_TOOLS: [&str; 2] = ["yamllint", "actionlint"];
