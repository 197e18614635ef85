//! Grouped, deterministic rendering of an [`IssueList`].
//!
//! Errors come first as "important" issues, warnings follow as "minor" ones.
//! Inside each tier issues are grouped by location; groups appear in the
//! order their location is first seen, and issues without a location form
//! one more group placed the same way. Located groups get a sub-heading with
//! the location text, the location-less group is listed without one.

use crate::list::IssueList;
use crate::location::Location;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::fmt::{self, Write as _};

const NO_ISSUES: &str = "No issues were found.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
/// Presentation tier of a report section.
pub enum Tier {
    Important,
    Minor,
}

impl Tier {
    /// Sentence introducing the section.
    pub fn intro(self) -> &'static str {
        match self {
            Tier::Important => "Important issues were detected:",
            Tier::Minor => "Minor issues were detected:",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Messages sharing one location (or sharing the lack of one).
pub struct Group {
    pub location: Option<Location>,
    pub messages: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub tier: Tier,
    pub intro: &'static str,
    pub groups: Vec<Group>,
}

impl Section {
    pub fn issue_count(&self) -> usize {
        self.groups.iter().map(|g| g.messages.len()).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Counts shown next to a report.
pub struct Summary {
    pub errors: usize,
    pub warnings: usize,
    pub locations: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
/// Structured report: zero, one or two sections, important first.
pub struct Report {
    pub sections: Vec<Section>,
}

impl Report {
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn section(&self, tier: Tier) -> Option<&Section> {
        self.sections.iter().find(|s| s.tier == tier)
    }

    pub fn summary(&self) -> Summary {
        let count = |tier| self.section(tier).map_or(0, Section::issue_count);
        let locations: HashSet<&Location> = self
            .sections
            .iter()
            .flat_map(|s| s.groups.iter())
            .filter_map(|g| g.location.as_ref())
            .collect();
        Summary {
            errors: count(Tier::Important),
            warnings: count(Tier::Minor),
            locations: locations.len(),
        }
    }

    /// Markup rendering: `<p>` intro followed by a `<ul>` listing.
    pub fn to_html(&self) -> String {
        if self.is_empty() {
            return format!("<p>{}</p>\n", NO_ISSUES);
        }
        let mut out = String::new();
        for section in &self.sections {
            let _ = writeln!(out, "<p>{}</p>", escape_html(section.intro));
            out.push_str("<ul>\n");
            for group in &section.groups {
                match &group.location {
                    Some(loc) => {
                        let _ = writeln!(out, "<li>{}", escape_html(&loc.to_string()));
                        out.push_str("<ul>\n");
                        for msg in &group.messages {
                            let _ = writeln!(out, "<li>{}</li>", escape_html(msg));
                        }
                        out.push_str("</ul>\n</li>\n");
                    }
                    None => {
                        for msg in &group.messages {
                            let _ = writeln!(out, "<li>{}</li>", escape_html(msg));
                        }
                    }
                }
            }
            out.push_str("</ul>\n");
        }
        out
    }
}

impl fmt::Display for Report {
    /// Plain-text rendering with `*` bullets; grouped items are indented.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "{}", NO_ISSUES);
        }
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{}", section.intro)?;
            for group in &section.groups {
                match &group.location {
                    Some(loc) => {
                        writeln!(f, "* {}", indent_continuation(&loc.to_string(), 2))?;
                        for msg in &group.messages {
                            writeln!(f, "  * {}", indent_continuation(msg, 4))?;
                        }
                    }
                    None => {
                        for msg in &group.messages {
                            writeln!(f, "* {}", indent_continuation(msg, 2))?;
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

/// Read-only view over a list that knows how to report it.
pub struct Presenter<'a> {
    issues: &'a IssueList,
}

impl<'a> Presenter<'a> {
    pub fn new(issues: &'a IssueList) -> Self {
        Self { issues }
    }

    pub fn to_report(&self) -> Report {
        let mut sections = Vec::new();
        for (tier, issues) in [
            (Tier::Important, self.issues.errors()),
            (Tier::Minor, self.issues.warnings()),
        ] {
            if issues.is_empty() {
                continue;
            }
            sections.push(Section {
                tier,
                intro: tier.intro(),
                groups: group_by_location(&issues),
            });
        }
        Report { sections }
    }

    pub fn to_html(&self) -> String {
        self.to_report().to_html()
    }

    pub fn to_plain(&self) -> String {
        self.to_report().to_string()
    }
}

impl fmt::Display for Presenter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_report(), f)
    }
}

/// Group issues by location, in first-occurrence order of each location.
fn group_by_location(issues: &IssueList) -> Vec<Group> {
    let mut groups: Vec<Group> = Vec::new();
    let mut slot: HashMap<Option<&Location>, usize> = HashMap::new();
    for is in issues {
        let key = is.location();
        let idx = *slot.entry(key).or_insert_with(|| {
            groups.push(Group {
                location: key.cloned(),
                messages: Vec::new(),
            });
            groups.len() - 1
        });
        groups[idx].messages.push(is.message().to_string());
    }
    groups
}

/// Indent every line after the first by `width` spaces.
pub(crate) fn indent_continuation(text: &str, width: usize) -> String {
    let sep = format!("\n{}", " ".repeat(width));
    text.lines().collect::<Vec<_>>().join(&sep)
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
