//! CLI argument parsing via `clap`.

use crate::config::{FailOn, OutputMode};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "issuekit",
    version,
    about = "Collect and report configuration issues",
    long_about = "issuekit — reads issue documents (JSON/TOML/YAML) written by detection passes and prints a grouped report: important issues (errors) first, minor issues (warnings) after, grouped by location.\n\nConfiguration precedence: CLI > issuekit.toml > defaults.",
    after_help = "Examples:\n  issuekit report 'out/issues/*.json'\n  issuekit report --output html out/network.toml\n  issuekit check --fail-on warn 'out/**/*.yaml'",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[arg(long, short, global = true, action = clap::ArgAction::SetTrue, help = "Enable debug logging on stderr (RUST_LOG overrides)")]
    pub verbose: bool,
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current issuekit version.")]
    Version,
    /// Print the grouped report
    #[command(
        about = "Print the issue report",
        long_about = "Load issue documents matched by the given patterns (or `inputs` from issuekit.toml) and print the grouped report. Exits 1 when the fail policy is met.",
        after_help = "Examples:\n  issuekit report 'out/*.json'\n  issuekit report --output json --fail-on never 'out/*.json'"
    )]
    Report {
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, value_enum, help = "Output mode (default: human)")]
        output: Option<OutputMode>,
        #[arg(long, value_enum, help = "Exit non-zero on: error|warn|never (default: error)")]
        fail_on: Option<FailOn>,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Disable colors in human output")]
        no_color: bool,
        #[arg(help = "Glob patterns of issue documents, relative to the repository root")]
        patterns: Vec<String>,
    },
    /// Print counts only
    #[command(
        about = "Summarize issues",
        long_about = "Load issue documents and print only the summary line. Exit code follows the fail policy, as for `report`."
    )]
    Check {
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, value_enum, help = "Output mode (default: human)")]
        output: Option<OutputMode>,
        #[arg(long, value_enum, help = "Exit non-zero on: error|warn|never (default: error)")]
        fail_on: Option<FailOn>,
        #[arg(help = "Glob patterns of issue documents, relative to the repository root")]
        patterns: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_report_args() {
        let cli = Cli::try_parse_from([
            "issuekit",
            "-v",
            "report",
            "--output",
            "html",
            "--fail-on",
            "warn",
            "a/*.json",
            "b.toml",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.cmd {
            Commands::Report {
                output,
                fail_on,
                no_color,
                patterns,
                ..
            } => {
                assert_eq!(output, Some(OutputMode::Html));
                assert_eq!(fail_on, Some(FailOn::Warn));
                assert!(!no_color);
                assert_eq!(patterns, ["a/*.json", "b.toml"]);
            }
            _ => panic!("expected report"),
        }
    }

    #[test]
    fn test_rejects_unknown_output() {
        assert!(Cli::try_parse_from(["issuekit", "check", "--output", "xml"]).is_err());
    }
}
