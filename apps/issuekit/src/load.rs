//! Reading issue documents written by external detectors.
//!
//! A document is either a bare sequence of issues or a mapping with an
//! `issues` key (the only shape TOML allows). Files are parsed in parallel;
//! the resulting list always follows sorted path order.

use crate::error::{Error, Result};
use crate::list::IssueList;
use glob::glob;
use rayon::prelude::*;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize)]
struct Wrapped {
    issues: IssueList,
}

/// Expand `patterns` relative to `root` into a sorted, deduplicated file list.
pub fn expand_patterns(root: &Path, patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut paths: Vec<PathBuf> = Vec::new();
    for pat in patterns {
        let pattern = root.join(pat).to_string_lossy().to_string();
        let entries = glob(&pattern).map_err(|e| Error::Pattern {
            pattern: pat.clone(),
            message: e.msg.to_string(),
        })?;
        let before = paths.len();
        paths.extend(entries.flatten().filter(|p| p.is_file()));
        debug!(pattern = %pat, matched = paths.len() - before, "expanded pattern");
    }
    paths.sort();
    paths.dedup();
    Ok(paths)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
    Yaml,
}

impl Format {
    fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Format::Json),
            "toml" => Some(Format::Toml),
            "yaml" | "yml" => Some(Format::Yaml),
            _ => None,
        }
    }

    /// Pick the document shape from the top-level value, then deserialize
    /// straight from the text so errors keep their line and column.
    fn parse(self, data: &str) -> std::result::Result<IssueList, String> {
        match self {
            Format::Json => {
                let top: serde_json::Value =
                    serde_json::from_str(data).map_err(|e| e.to_string())?;
                if top.is_array() {
                    serde_json::from_str(data).map_err(|e| e.to_string())
                } else {
                    serde_json::from_str::<Wrapped>(data)
                        .map(|w| w.issues)
                        .map_err(|e| e.to_string())
                }
            }
            Format::Toml => toml::from_str::<Wrapped>(data)
                .map(|w| w.issues)
                .map_err(|e| e.to_string()),
            Format::Yaml => {
                let top: serde_yaml::Value =
                    serde_yaml::from_str(data).map_err(|e| e.to_string())?;
                if top.is_sequence() {
                    serde_yaml::from_str(data).map_err(|e| e.to_string())
                } else {
                    serde_yaml::from_str::<Wrapped>(data)
                        .map(|w| w.issues)
                        .map_err(|e| e.to_string())
                }
            }
        }
    }
}

/// Parse one issue document, picking the format from the file extension.
pub fn load_file(path: &Path) -> Result<IssueList> {
    let format =
        Format::from_path(path).ok_or_else(|| Error::UnsupportedFormat(path.to_path_buf()))?;
    let data = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let list = format.parse(&data).map_err(|e| Error::parse(path, e))?;
    debug!(path = %path.display(), ?format, issues = list.len(), "loaded issue document");
    Ok(list)
}

/// Load every document matched by `patterns` into a single list.
pub fn load_patterns(root: &Path, patterns: &[String]) -> Result<IssueList> {
    let paths = expand_patterns(root, patterns)?;
    let loaded: Vec<Result<IssueList>> = paths.par_iter().map(|p| load_file(p)).collect();
    let mut list = IssueList::new();
    for part in loaded {
        list.concat(part?);
    }
    Ok(list)
}
