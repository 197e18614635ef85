//! Where an issue was found: a `scheme:path` reference.
//!
//! Parsing is permissive. A string without a recognizable scheme prefix is
//! kept whole as the path, so every input yields a location and printing it
//! gives the original text back.

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

fn scheme_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // URI scheme grammar (RFC 3986, section 3.1)
    RE.get_or_init(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*$").unwrap())
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// A structured reference such as `file:/etc/hosts` or `yast:network`.
///
/// Only built by parsing, so `Location::parse(&loc.to_string()) == loc`
/// holds for every value.
pub struct Location {
    scheme: String,
    path: String,
}

impl Location {
    fn new(scheme: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            path: path.into(),
        }
    }

    /// Split `raw` on its first `:` when the prefix is a valid scheme name.
    pub fn parse(raw: &str) -> Self {
        if let Some((prefix, rest)) = raw.split_once(':') {
            if scheme_re().is_match(prefix) {
                return Self::new(prefix, rest);
            }
        }
        Self::new("", raw)
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn has_scheme(&self) -> bool {
        !self.scheme.is_empty()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scheme.is_empty() {
            write!(f, "{}", self.path)
        } else {
            write!(f, "{}:{}", self.scheme, self.path)
        }
    }
}

impl FromStr for Location {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for Location {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<String> for Location {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl Serialize for Location {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Location {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}
