//! Walint CLI binary entry point.
//! Preflights the external tools, resolves configuration, selects files,
//! and drives the sequential lint loop.

use clap::Parser;
use std::path::{Path, PathBuf};
use walint::cli::Cli;
use walint::{config, discover, exec, lint, output, WORKFLOWS_DIR};

fn main() {
    std::process::exit(run(Cli::parse()));
}

fn run(cli: Cli) -> i32 {
    let missing = exec::missing_tools();
    if !missing.is_empty() {
        eprintln!(
            "{} Missing tools: {}. Please install them before running walint.",
            output::error_prefix(),
            missing.join(", ")
        );
        return 1;
    }

    let config = config::resolve(cli.config.as_deref().map(Path::new));
    if cli.debug {
        println!(
            "Configuration: {}",
            serde_json::to_string_pretty(&config).unwrap_or_else(|_| format!("{config:?}"))
        );
    }

    let files: Vec<PathBuf> = if let Some(file) = cli.file.as_deref() {
        let target = PathBuf::from(file);
        if !target.is_file() {
            eprintln!(
                "{} Specified file does not exist: {}",
                output::error_prefix(),
                target.display()
            );
            return 1;
        }
        vec![target]
    } else {
        let dir = Path::new(WORKFLOWS_DIR);
        if !dir.exists() {
            eprintln!(
                "{} {} directory not found.",
                output::warn_prefix(),
                WORKFLOWS_DIR
            );
            return 0;
        }
        discover::find_workflow_files(dir)
    };

    if files.is_empty() {
        eprintln!("{} No workflow files found.", output::warn_prefix());
        return 0;
    }

    let opts = lint::Options {
        verbose: cli.verbose,
        debug: cli.debug,
        json: cli.json,
    };
    let had_errors = lint::run(&files, &config, &opts);
    output::print_final(had_errors);
    if had_errors {
        1
    } else {
        0
    }
}
