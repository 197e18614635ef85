//! Ordered collection of issues gathered during one detection pass.
//!
//! The list is built by a single producer and then handed, read-only, to a
//! [`Presenter`](crate::presenter::Presenter). Nothing here is synchronized;
//! callers appending from several threads must lock around `push`.

use crate::issue::Issue;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
/// Issues in insertion order. Equal issues may appear more than once.
pub struct IssueList {
    issues: Vec<Issue>,
}

impl IssueList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `issue` at the end.
    pub fn push(&mut self, issue: Issue) {
        self.issues.push(issue);
    }

    /// Append every issue of `other`, keeping its order.
    pub fn concat(&mut self, other: IssueList) {
        self.issues.extend(other.issues);
    }

    /// New list holding the issues matching `pred`, in the same order.
    pub fn filter<P>(&self, mut pred: P) -> IssueList
    where
        P: FnMut(&Issue) -> bool,
    {
        self.issues.iter().filter(|is| pred(is)).cloned().collect()
    }

    pub fn errors(&self) -> IssueList {
        self.filter(Issue::is_error)
    }

    pub fn warnings(&self) -> IssueList {
        self.filter(|is| !is.is_error())
    }

    /// Whether any issue in the list is fatal.
    pub fn is_fatal(&self) -> bool {
        self.issues.iter().any(Issue::is_fatal)
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn first(&self) -> Option<&Issue> {
        self.issues.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Issue> {
        self.issues.iter()
    }
}

impl FromIterator<Issue> for IssueList {
    fn from_iter<I: IntoIterator<Item = Issue>>(iter: I) -> Self {
        Self {
            issues: iter.into_iter().collect(),
        }
    }
}

impl Extend<Issue> for IssueList {
    fn extend<I: IntoIterator<Item = Issue>>(&mut self, iter: I) {
        self.issues.extend(iter);
    }
}

impl IntoIterator for IssueList {
    type Item = Issue;
    type IntoIter = std::vec::IntoIter<Issue>;

    fn into_iter(self) -> Self::IntoIter {
        self.issues.into_iter()
    }
}

impl<'a> IntoIterator for &'a IssueList {
    type Item = &'a Issue;
    type IntoIter = std::slice::Iter<'a, Issue>;

    fn into_iter(self) -> Self::IntoIter {
        self.issues.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issue::LocationArg;
    use crate::severity::Severity;

    fn sample() -> IssueList {
        let mut list = IssueList::new();
        list.push(Issue::warn("w1"));
        list.push(Issue::error("e1").at("file:/etc/hosts"));
        list.push(Issue::warn("w2").at("yast:lan"));
        list.push(Issue::error("e2"));
        list
    }

    fn messages(list: &IssueList) -> Vec<&str> {
        list.iter().map(Issue::message).collect()
    }

    #[test]
    fn test_new_list_is_empty() {
        let list = IssueList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert!(list.first().is_none());
        assert!(!list.is_fatal());
    }

    #[test]
    fn test_iteration_keeps_insertion_order() {
        let list = sample();
        assert_eq!(list.len(), 4);
        assert_eq!(messages(&list), ["w1", "e1", "w2", "e2"]);
        assert_eq!(list.first().map(Issue::message), Some("w1"));
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut list = IssueList::new();
        list.push(Issue::warn("same"));
        list.push(Issue::warn("same"));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_filter_keeps_order_and_source() {
        let list = sample();
        let before = list.clone();
        let errors = list.filter(Issue::is_error);
        assert_eq!(messages(&errors), ["e1", "e2"]);
        assert_eq!(messages(&list.warnings()), ["w1", "w2"]);
        assert_eq!(list.errors(), errors);
        assert_eq!(list, before);
    }

    #[test]
    fn test_is_fatal() {
        let mut list = IssueList::new();
        list.push(Issue::new("m", LocationArg::None, Severity::Warn));
        assert!(!list.is_fatal());
        list.push(Issue::new("m", LocationArg::None, Severity::Error));
        assert!(list.is_fatal());
    }

    #[test]
    fn test_concat_and_collect() {
        let mut a: IssueList = vec![Issue::warn("a")].into_iter().collect();
        let b: IssueList = vec![Issue::warn("b"), Issue::warn("c")].into_iter().collect();
        a.concat(b);
        a.extend([Issue::error("d")]);
        assert_eq!(messages(&a), ["a", "b", "c", "d"]);
    }

    #[test]
    fn test_serde_as_sequence() {
        let list: IssueList = serde_json::from_str(
            r#"[{"message":"a"},{"message":"b","severity":"error","location":"file:/x"}]"#,
        )
        .unwrap();
        assert_eq!(list.len(), 2);
        assert!(list.is_fatal());
        let out = serde_json::to_value(&list).unwrap();
        assert!(out.is_array());
        assert_eq!(out[1]["location"], "file:/x");
    }
}
