//! issuekit core library.
//!
//! Records problems found while inspecting or applying system state and
//! renders them as a deterministic, grouped report.
//!
//! High-level modules:
//! - `location`: `scheme:path` references parsed from free-form strings.
//! - `severity`: the closed `warn`/`error` classification.
//! - `issue`: immutable issue records.
//! - `list`: insertion-ordered issue collection with filtering.
//! - `presenter`: grouping by location and HTML/plain-text rendering.
//! - `error`: error type for config and document loading.
//! - `config`: discovery and effective configuration resolution.
//! - `load`: reading issue documents (JSON/TOML/YAML).
//! - `output`: human/plain/HTML/JSON printers.
//! - `cli`: CLI argument parsing (binary uses this).
//! - `utils`: supporting helpers.
pub mod cli;
pub mod config;
pub mod error;
pub mod issue;
pub mod list;
pub mod load;
pub mod location;
pub mod output;
pub mod presenter;
pub mod severity;
pub mod utils;

pub use error::{Error, Result};
pub use issue::{Issue, LocationArg};
pub use list::IssueList;
pub use location::Location;
pub use presenter::{Group, Presenter, Report, Section, Summary, Tier};
pub use severity::Severity;
