//! issuekit CLI binary entry point.
//! Resolves settings, loads issue documents and prints the report.

use clap::Parser;
use issuekit::cli::{Cli, Commands};
use issuekit::config::{self, Effective, FailOn, OutputMode};
use issuekit::utils::{error_prefix, info_prefix, note_prefix};
use issuekit::{load, output, IssueList, Presenter};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn fail(err: impl std::fmt::Display) -> ! {
    eprintln!("{} {}", error_prefix(), err);
    std::process::exit(2);
}

/// Resolve settings and load every input; exits with code 2 on failure.
fn prepare(
    repo_root: Option<&str>,
    output: Option<OutputMode>,
    patterns: &[String],
    fail_on: Option<FailOn>,
    no_color: bool,
) -> (Effective, IssueList) {
    let eff = config::resolve_effective(repo_root, output, patterns, fail_on, no_color)
        .unwrap_or_else(|e| fail(e));
    if !eff.config_found && eff.output != OutputMode::Json {
        eprintln!("{} No issuekit.toml found; using defaults.", note_prefix());
    }
    if eff.inputs.is_empty() {
        fail("No inputs. Pass patterns or set `inputs` in issuekit.toml.");
    }
    let list = load::load_patterns(&eff.repo_root, &eff.inputs).unwrap_or_else(|e| fail(e));
    if list.is_empty() && eff.output != OutputMode::Json {
        eprintln!(
            "{} No issues in inputs: [{}]",
            info_prefix(),
            eff.inputs.join(", ")
        );
    }
    tracing::info!(issues = list.len(), fatal = list.is_fatal(), "issues loaded");
    (eff, list)
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Report {
            repo_root,
            output,
            fail_on,
            no_color,
            patterns,
        } => {
            let (eff, list) = prepare(repo_root.as_deref(), output, &patterns, fail_on, no_color);
            let report = Presenter::new(&list).to_report();
            output::print_report(&report, eff.output, eff.color);
            if eff.fail_on.is_met(&list) {
                std::process::exit(1);
            }
        }
        Commands::Check {
            repo_root,
            output,
            fail_on,
            patterns,
        } => {
            let (eff, list) = prepare(repo_root.as_deref(), output, &patterns, fail_on, false);
            let report = Presenter::new(&list).to_report();
            output::print_summary(&report, eff.output, eff.color);
            if eff.fail_on.is_met(&list) {
                std::process::exit(1);
            }
        }
    }
}
