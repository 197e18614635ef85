//! Output rendering for the report and check commands.
//!
//! Supports `human` (default), `plain`, `html` and `json` outputs. The JSON
//! form carries the grouped report and a top-level summary.

use crate::config::OutputMode;
use crate::presenter::{indent_continuation, Report, Summary, Tier};
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;

fn use_colors(output: OutputMode, color: bool) -> bool {
    output == OutputMode::Human && color && std::env::var_os("NO_COLOR").is_none()
}

/// Plain-text report, highlighted when `color` is set.
///
/// Without colors this is byte-identical to the report's `Display` output.
pub fn render_human(report: &Report, color: bool) -> String {
    if !color {
        return report.to_string();
    }
    if report.is_empty() {
        return format!("{}\n", report.to_string().trim_end().green());
    }
    let mut out = String::new();
    for (i, section) in report.sections.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let intro = match section.tier {
            Tier::Important => section.intro.red().bold().to_string(),
            Tier::Minor => section.intro.yellow().bold().to_string(),
        };
        out.push_str(&intro);
        out.push('\n');
        for group in &section.groups {
            match &group.location {
                Some(loc) => {
                    let heading = indent_continuation(&loc.to_string(), 2);
                    out.push_str(&format!("* {}\n", heading.bold()));
                    for msg in &group.messages {
                        out.push_str(&format!("  * {}\n", indent_continuation(msg, 4)));
                    }
                }
                None => {
                    for msg in &group.messages {
                        out.push_str(&format!("* {}\n", indent_continuation(msg, 2)));
                    }
                }
            }
        }
    }
    out
}

fn summary_line(summary: &Summary) -> String {
    format!(
        "— Summary — errors={} warnings={} locations={}",
        summary.errors, summary.warnings, summary.locations
    )
}

/// Compose report JSON object (pure) for testing/snapshot purposes.
pub fn compose_report_json(report: &Report) -> JsonVal {
    json!({
        "sections": report.sections,
        "summary": report.summary(),
    })
}

/// Print the full report in the requested format.
pub fn print_report(report: &Report, output: OutputMode, color: bool) {
    match output {
        OutputMode::Json => match serde_json::to_string_pretty(&compose_report_json(report)) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("{} {}", crate::utils::error_prefix(), e),
        },
        OutputMode::Html => print!("{}", report.to_html()),
        OutputMode::Plain => print!("{}", report),
        OutputMode::Human => print!("{}", render_human(report, use_colors(output, color))),
    }
}

/// Print only the summary, used by `issuekit check`.
pub fn print_summary(report: &Report, output: OutputMode, color: bool) {
    let summary = report.summary();
    if output == OutputMode::Json {
        println!("{}", json!({ "summary": summary }));
        return;
    }
    let line = summary_line(&summary);
    if use_colors(output, color) {
        println!("{}", line.bold());
    } else {
        println!("{}", line);
    }
}
