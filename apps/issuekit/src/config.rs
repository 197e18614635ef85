//! Configuration discovery and effective settings resolution.
//!
//! issuekit reads `issuekit.toml|yaml|yml` from the repository root (or
//! closest ancestor) and merges it with CLI flags to produce an `Effective`
//! config.
//! Defaults:
//! - `output`: `human`
//! - `inputs`: none
//! - `fail_on`: `error`
//! - `color`: true unless `NO_COLOR` is set
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::error::{Error, Result};
use crate::list::IssueList;
use clap::ValueEnum;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const CONFIG_NAMES: [&str; 3] = ["issuekit.toml", "issuekit.yaml", "issuekit.yml"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
/// How the report is printed.
pub enum OutputMode {
    /// Plain text with colors
    #[default]
    Human,
    /// Plain text, never colored
    Plain,
    /// `<p>`/`<ul>` markup
    Html,
    /// Report structure plus summary as JSON
    Json,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
/// Which issues make the process exit non-zero.
pub enum FailOn {
    /// Any error-severity issue
    #[default]
    Error,
    /// Any issue at all
    Warn,
    /// Never fail
    Never,
}

impl FailOn {
    pub fn is_met(self, list: &IssueList) -> bool {
        match self {
            FailOn::Error => list.is_fatal(),
            FailOn::Warn => !list.is_empty(),
            FailOn::Never => false,
        }
    }
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `issuekit.toml|yaml`.
pub struct IssuekitConfig {
    pub output: Option<OutputMode>,
    #[serde(default)]
    pub inputs: Option<Vec<String>>,
    pub fail_on: Option<FailOn>,
    pub color: Option<bool>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub config_found: bool,
    pub output: OutputMode,
    pub inputs: Vec<String>,
    pub fail_on: FailOn,
    pub color: bool,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when an `issuekit.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if CONFIG_NAMES.iter().any(|n| cur.join(n).exists()) || cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `IssuekitConfig` from the first config file present under `root`.
///
/// A missing file is `Ok(None)`; an unreadable or malformed one is an error.
pub fn load_config(root: &Path) -> Result<Option<IssuekitConfig>> {
    for name in CONFIG_NAMES {
        let p = root.join(name);
        if !p.exists() {
            continue;
        }
        let s = fs::read_to_string(&p).map_err(|source| Error::Io {
            path: p.clone(),
            source,
        })?;
        let cfg = if name.ends_with(".toml") {
            toml::from_str::<IssuekitConfig>(&s).map_err(|e| Error::parse(&p, e))?
        } else {
            serde_yaml::from_str::<IssuekitConfig>(&s).map_err(|e| Error::parse(&p, e))?
        };
        debug!(path = %p.display(), "loaded config");
        return Ok(Some(cfg));
    }
    Ok(None)
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_output: Option<OutputMode>,
    cli_inputs: &[String],
    cli_fail_on: Option<FailOn>,
    cli_no_color: bool,
) -> Result<Effective> {
    let start = PathBuf::from(cli_repo_root.unwrap_or("."));
    let repo_root = detect_repo_root(&start);
    let loaded = load_config(&repo_root)?;
    let config_found = loaded.is_some();
    let cfg = loaded.unwrap_or_default();

    let output = cli_output.or(cfg.output).unwrap_or_default();
    let inputs = if cli_inputs.is_empty() {
        cfg.inputs.unwrap_or_default()
    } else {
        cli_inputs.to_vec()
    };
    let fail_on = cli_fail_on.or(cfg.fail_on).unwrap_or_default();
    let color = !cli_no_color
        && cfg
            .color
            .unwrap_or_else(|| std::env::var_os("NO_COLOR").is_none());

    debug!(root = %repo_root.display(), ?output, ?fail_on, inputs = inputs.len(), "resolved settings");
    Ok(Effective {
        repo_root,
        config_found,
        output,
        inputs,
        fail_on,
        color,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issue::Issue;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_detect_and_load_toml() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let mut f = fs::File::create(root.join("issuekit.toml")).unwrap();
        writeln!(
            f,
            "{}",
            r#"
output = "html"
inputs = ["issues/*.json"]
fail_on = "warn"
color = false
    "#
        )
        .unwrap();

        // Resolve using explicit repo_root to avoid global CWD races
        let eff = resolve_effective(root.to_str(), None, &[], None, false).unwrap();
        assert!(eff.config_found);
        assert_eq!(eff.output, OutputMode::Html);
        assert_eq!(eff.inputs, ["issues/*.json"]);
        assert_eq!(eff.fail_on, FailOn::Warn);
        assert!(!eff.color);
    }

    #[test]
    fn test_load_yaml_and_defaults() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("issuekit.yaml"), "inputs:\n  - out/*.yaml\n").unwrap();

        let eff = resolve_effective(root.to_str(), None, &[], None, false).unwrap();
        assert!(eff.config_found);
        assert_eq!(eff.output, OutputMode::Human);
        assert_eq!(eff.fail_on, FailOn::Error);
        assert_eq!(eff.inputs, ["out/*.yaml"]);
    }

    #[test]
    fn test_cli_takes_precedence() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(
            root.join("issuekit.toml"),
            "output = \"html\"\ninputs = [\"a.json\"]\nfail_on = \"never\"\ncolor = true\n",
        )
        .unwrap();

        let cli_inputs = vec!["b.json".to_string()];
        let eff = resolve_effective(
            root.to_str(),
            Some(OutputMode::Json),
            &cli_inputs,
            Some(FailOn::Error),
            true,
        )
        .unwrap();
        assert_eq!(eff.output, OutputMode::Json);
        assert_eq!(eff.inputs, ["b.json"]);
        assert_eq!(eff.fail_on, FailOn::Error);
        assert!(!eff.color);
    }

    #[test]
    fn test_missing_config_uses_defaults() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        let eff = resolve_effective(dir.path().to_str(), None, &[], None, false).unwrap();
        assert!(!eff.config_found);
        assert_eq!(eff.output, OutputMode::Human);
        assert!(eff.inputs.is_empty());
    }

    #[test]
    fn test_detect_repo_root_walks_up() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("issuekit.toml"), "").unwrap();
        let nested = root.join("a/b");
        fs::create_dir_all(&nested).unwrap();
        assert_eq!(detect_repo_root(&nested), root.to_path_buf());
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("issuekit.toml"), "output = \"fancy\"\n").unwrap();
        let err = load_config(dir.path()).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn test_fail_on_policy() {
        let mut list = IssueList::new();
        assert!(!FailOn::Warn.is_met(&list));
        list.push(Issue::warn("w"));
        assert!(FailOn::Warn.is_met(&list));
        assert!(!FailOn::Error.is_met(&list));
        list.push(Issue::error("e"));
        assert!(FailOn::Error.is_met(&list));
        assert!(!FailOn::Never.is_met(&list));
    }
}
