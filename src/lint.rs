//! Per-file tool runs and output classification.
//!
//! For each file, yamllint runs first, then actionlint; each failing
//! classification ORs into one aggregate error flag. Classification rules:
//! - yamllint: case-insensitive `error` substring in the combined output.
//! - actionlint, JSON mode: valid non-empty JSON fails, invalid JSON fails,
//!   valid empty (`[]`, `{}`, `null`) passes.
//! - actionlint, text mode: any non-blank output fails.
//!
//! A nonzero tool exit is tolerated: the combined stdout+stderr text is
//! still shown and classified by content, not by exit code.

use crate::config::{yamllint_inline_config, LintConfig};
use crate::exec;
use crate::output;
use serde_json::Value as Json;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, Default)]
/// Run-level switches carried from the CLI.
pub struct Options {
    pub verbose: bool,
    pub debug: bool,
    pub json: bool,
}

impl Options {
    /// Whether tool command lines are echoed before running.
    pub fn echo(&self) -> bool {
        self.verbose || self.debug
    }
}

/// Argument vector for the yamllint invocation on `file`.
pub fn yamllint_args(file: &Path, config: &LintConfig) -> Vec<String> {
    vec![
        "-d".to_string(),
        yamllint_inline_config(&config.yamllint),
        file.to_string_lossy().to_string(),
    ]
}

/// Argument vector for the actionlint invocation on `file`.
pub fn actionlint_args(file: &Path, config: &LintConfig, opts: &Options) -> Vec<String> {
    let mut args: Vec<String> = Vec::new();
    if opts.json {
        args.push("-format=json".to_string());
    } else if opts.echo() {
        args.push("-verbose".to_string());
    }
    args.extend(config.actionlint.flags.iter().cloned());
    args.push(file.to_string_lossy().to_string());
    args
}

/// Run one tool and flatten the outcome into displayable text.
///
/// Success keeps stdout only; a nonzero exit keeps stdout+stderr behind a
/// warning; a launch failure becomes an `Error: ...` line, which the
/// content-based classifiers then treat as a failure.
fn run_tool(program: &str, args: &[String], echo: bool) -> String {
    match exec::run_command(program, args, echo) {
        Ok(out) if out.success() => out.stdout,
        Ok(out) => {
            eprintln!(
                "{} Command failed with exit code {}",
                output::warn_prefix(),
                out.status_display()
            );
            format!("{}{}", out.stdout, out.stderr)
        }
        Err(e) => {
            eprintln!(
                "{} Unexpected error running command: {:#}",
                output::error_prefix(),
                e
            );
            format!("Error: {e:#}")
        }
    }
}

/// yamllint failure heuristic: any letter-casing of `error` in the output.
pub fn yamllint_failed(output: &str) -> bool {
    output.to_lowercase().contains("error")
}

/// actionlint text-mode failure heuristic: any non-blank output.
pub fn actionlint_text_failed(output: &str) -> bool {
    !output.trim().is_empty()
}

/// Truthiness of a parsed JSON value: empty array/object, `null`, `0`,
/// `""`, and `false` count as empty (success); everything else as issues.
pub fn json_is_truthy(value: &Json) -> bool {
    match value {
        Json::Null => false,
        Json::Bool(b) => *b,
        Json::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Json::String(s) => !s.is_empty(),
        Json::Array(items) => !items.is_empty(),
        Json::Object(map) => !map.is_empty(),
    }
}

/// Run both tools over every file sequentially, printing output as it
/// arrives. Returns the aggregate error flag.
pub fn run(files: &[PathBuf], config: &LintConfig, opts: &Options) -> bool {
    let mut had_errors = false;
    for file in files {
        output::print_file_header(file);

        output::print_tool_header("yamllint");
        let yl_out = run_tool("yamllint", &yamllint_args(file, config), opts.echo());
        println!("{yl_out}");
        if yamllint_failed(&yl_out) {
            had_errors = true;
        }

        output::print_tool_header("actionlint");
        let al_out = run_tool("actionlint", &actionlint_args(file, config, opts), opts.echo());
        if opts.json {
            match serde_json::from_str::<Json>(&al_out) {
                Ok(parsed) => {
                    if json_is_truthy(&parsed) {
                        had_errors = true;
                    }
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&parsed)
                            .unwrap_or_else(|_| al_out.clone())
                    );
                }
                Err(_) => {
                    eprintln!(
                        "{} Failed to parse JSON output.",
                        output::warn_prefix()
                    );
                    println!("{al_out}");
                    had_errors = true;
                }
            }
        } else {
            println!("{al_out}");
            if actionlint_text_failed(&al_out) {
                had_errors = true;
            }
        }
    }
    had_errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_yamllint_args_carry_inline_config() {
        let config = LintConfig::builtin();
        let args = yamllint_args(Path::new("wf.yml"), &config);
        assert_eq!(
            args,
            vec![
                "-d".to_string(),
                "{extends: default, rules: {line-length: disable}}".to_string(),
                "wf.yml".to_string(),
            ]
        );
    }

    #[test]
    fn test_actionlint_args_json_mode_wins_over_verbose() {
        let config = LintConfig::builtin();
        let opts = Options {
            json: true,
            verbose: true,
            debug: false,
        };
        let args = actionlint_args(Path::new("wf.yml"), &config, &opts);
        assert_eq!(args, vec!["-format=json", "wf.yml"]);
    }

    #[test]
    fn test_actionlint_args_verbose_text_mode() {
        let config = LintConfig::builtin();
        let opts = Options {
            verbose: true,
            ..Default::default()
        };
        let args = actionlint_args(Path::new("wf.yml"), &config, &opts);
        assert_eq!(args, vec!["-verbose", "wf.yml"]);
    }

    #[test]
    fn test_actionlint_args_debug_alone_enables_verbose() {
        let config = LintConfig::builtin();
        let opts = Options {
            debug: true,
            ..Default::default()
        };
        let args = actionlint_args(Path::new("wf.yml"), &config, &opts);
        assert_eq!(args, vec!["-verbose", "wf.yml"]);
    }

    #[test]
    fn test_actionlint_args_include_config_flags_before_file() {
        let mut config = LintConfig::builtin();
        config.actionlint.flags = vec!["-ignore".into(), "SC2086".into()];
        let args = actionlint_args(Path::new("wf.yml"), &config, &Options::default());
        assert_eq!(args, vec!["-ignore", "SC2086", "wf.yml"]);
    }

    #[test]
    fn test_yamllint_classification_is_case_insensitive() {
        assert!(yamllint_failed("3:1 error trailing-spaces"));
        assert!(yamllint_failed("Syntax Error near line 3"));
        assert!(yamllint_failed("ERROR: bad document"));
        assert!(!yamllint_failed("3:1 warning comments-indentation"));
        assert!(!yamllint_failed(""));
    }

    #[test]
    fn test_actionlint_text_classification() {
        assert!(!actionlint_text_failed(""));
        assert!(!actionlint_text_failed("  \n\t "));
        assert!(actionlint_text_failed("wf.yml:4:9: unexpected key"));
    }

    #[test]
    fn test_json_truthiness_matches_emptiness() {
        assert!(!json_is_truthy(&json!([])));
        assert!(!json_is_truthy(&json!({})));
        assert!(!json_is_truthy(&json!(null)));
        assert!(!json_is_truthy(&json!(0)));
        assert!(!json_is_truthy(&json!("")));
        assert!(!json_is_truthy(&json!(false)));
        assert!(json_is_truthy(&json!([{ "message": "x" }])));
        assert!(json_is_truthy(&json!({ "k": 1 })));
        assert!(json_is_truthy(&json!("text")));
        assert!(json_is_truthy(&json!(2)));
    }
}
