//! A single detected problem.

use crate::location::Location;
use crate::severity::Severity;
use serde::{Deserialize, Serialize};

/// Location argument accepted by [`Issue::new`].
///
/// Raw strings are parsed once at construction time; an already parsed
/// [`Location`] is stored as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationArg {
    Raw(String),
    Parsed(Location),
    None,
}

impl LocationArg {
    fn resolve(self) -> Option<Location> {
        match self {
            LocationArg::Raw(raw) => Some(Location::parse(&raw)),
            LocationArg::Parsed(loc) => Some(loc),
            LocationArg::None => None,
        }
    }
}

impl From<&str> for LocationArg {
    fn from(raw: &str) -> Self {
        LocationArg::Raw(raw.to_string())
    }
}

impl From<String> for LocationArg {
    fn from(raw: String) -> Self {
        LocationArg::Raw(raw)
    }
}

impl From<Location> for LocationArg {
    fn from(loc: Location) -> Self {
        LocationArg::Parsed(loc)
    }
}

impl From<Option<Location>> for LocationArg {
    fn from(loc: Option<Location>) -> Self {
        loc.map_or(LocationArg::None, LocationArg::Parsed)
    }
}

impl From<Option<&str>> for LocationArg {
    fn from(raw: Option<&str>) -> Self {
        raw.map_or(LocationArg::None, LocationArg::from)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A problem found while inspecting or applying system state.
///
/// Issues are immutable: fields are only reachable through accessors.
///
/// ```
/// use issuekit::{Issue, Severity};
///
/// let issue = Issue::new(
///     "Could not read the routing table",
///     "file:/etc/sysconfig/ifroute-eth0",
///     Severity::Warn,
/// );
/// assert_eq!(issue.location().unwrap().scheme(), "file");
/// assert!(!issue.is_error());
/// ```
pub struct Issue {
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    location: Option<Location>,
    #[serde(default)]
    severity: Severity,
}

impl Issue {
    pub fn new(
        message: impl Into<String>,
        location: impl Into<LocationArg>,
        severity: Severity,
    ) -> Self {
        Self {
            message: message.into(),
            location: location.into().resolve(),
            severity,
        }
    }

    /// Warning without a location.
    pub fn warn(message: impl Into<String>) -> Self {
        Self::new(message, LocationArg::None, Severity::Warn)
    }

    /// Error without a location.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, LocationArg::None, Severity::Error)
    }

    /// Same issue, reported at `location`.
    pub fn at(self, location: impl Into<LocationArg>) -> Self {
        Self {
            location: location.into().resolve(),
            ..self
        }
    }

    /// A value read from the system could not be used.
    ///
    /// When `fallback` is given the message tells which value is used instead.
    pub fn invalid_value(
        value: &str,
        fallback: Option<&str>,
        location: impl Into<LocationArg>,
        severity: Severity,
    ) -> Self {
        let message = match fallback {
            Some(fb) => format!("Invalid value '{}'. Using '{}' instead.", value, fb),
            None => format!("Invalid value '{}'.", value),
        };
        Self::new(message, location, severity)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn is_error(&self) -> bool {
        self.severity.is_error()
    }

    /// Alias of [`Issue::is_error`] for call sites that think in terms of
    /// aborting rather than severity.
    pub fn is_fatal(&self) -> bool {
        self.is_error()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_location_is_parsed() {
        let is = Issue::new("bad route", "file:/etc/sysconfig/routes", Severity::Warn);
        let loc = is.location().unwrap();
        assert_eq!(loc.scheme(), "file");
        assert_eq!(loc.path(), "/etc/sysconfig/routes");
    }

    #[test]
    fn test_parsed_location_is_kept() {
        let loc = Location::parse("yast:lan");
        let is = Issue::new("m", loc.clone(), Severity::Warn);
        assert_eq!(is.location(), Some(&loc));
        assert_eq!(Issue::new("m", "yast:lan", Severity::Warn).location(), Some(&loc));
    }

    #[test]
    fn test_no_location() {
        let is = Issue::new("m", LocationArg::None, Severity::Error);
        assert!(is.location().is_none());
        let is = Issue::new("m", None::<&str>, Severity::Error);
        assert!(is.location().is_none());
    }

    #[test]
    fn test_severity_predicates() {
        let err = Issue::new("m", LocationArg::None, Severity::Error);
        assert!(err.is_error());
        assert!(err.is_fatal());
        let warn = Issue::new("m", LocationArg::None, Severity::Warn);
        assert!(!warn.is_error());
        assert!(!warn.is_fatal());
    }

    #[test]
    fn test_empty_message_is_accepted() {
        assert_eq!(Issue::warn("").message(), "");
    }

    #[test]
    fn test_at_sets_location() {
        let is = Issue::error("Could not read network configuration").at("yast:lan");
        assert_eq!(is.location().map(|l| l.to_string()).as_deref(), Some("yast:lan"));
        assert!(is.is_error());
    }

    #[test]
    fn test_invalid_value_messages() {
        let is = Issue::invalid_value("eth9", None, "file:/etc/sysconfig/network", Severity::Warn);
        assert_eq!(is.message(), "Invalid value 'eth9'.");
        let is = Issue::invalid_value("maybe", Some("no"), LocationArg::None, Severity::Error);
        assert_eq!(is.message(), "Invalid value 'maybe'. Using 'no' instead.");
        assert!(is.is_error());
    }

    #[test]
    fn test_deserialize_defaults_to_warn() {
        let is: Issue = serde_json::from_str(r#"{"message":"Something is missing"}"#).unwrap();
        assert_eq!(is.severity(), Severity::Warn);
        assert!(is.location().is_none());

        let is: Issue = serde_json::from_str(
            r#"{"message":"x","location":"file:/etc/hosts","severity":"error"}"#,
        )
        .unwrap();
        assert!(is.is_error());
        assert_eq!(is.location().unwrap().path(), "/etc/hosts");
    }

    #[test]
    fn test_serialize_skips_missing_location() {
        let out = serde_json::to_value(Issue::warn("m")).unwrap();
        assert!(out.get("location").is_none());
        assert_eq!(out["severity"], "warn");
    }
}
