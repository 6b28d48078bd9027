//! CLI argument parsing via `clap`.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "walint",
    version,
    about = "Lint CI workflow YAML files with yamllint and actionlint",
    long_about = "Walint — a tiny CLI that runs yamllint and actionlint over workflow files.\n\nWithout --file, all *.yml/*.yaml files under .github/workflows are checked.\nConfiguration precedence: config file section > built-in defaults.",
    after_help = "Examples:\n  walint\n  walint --file .github/workflows/ci.yml\n  walint --json --config walint.yaml\n  walint -v"
)]
/// Top-level CLI options.
pub struct Cli {
    #[arg(short, long, help = "Enable debug output (dumps resolved configuration)")]
    pub debug: bool,
    #[arg(short, long, help = "Enable verbose output (echoes tool command lines)")]
    pub verbose: bool,
    #[arg(short, long, help = "Request JSON output from actionlint")]
    pub json: bool,
    #[arg(short, long, help = "Check a single workflow file instead of discovering")]
    pub file: Option<String>,
    #[arg(short, long, help = "Path to a configuration file (TOML or YAML)")]
    pub config: Option<String>,
}
