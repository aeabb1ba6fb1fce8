//! HTTP verb allow-list

use std::collections::BTreeSet;

/// Allow-list of HTTP verbs to include in an audit
///
/// An empty filter allows every verb. Matching is exact and case-sensitive:
/// `get` does not match a `GET` method.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MethodFilter {
    verbs: BTreeSet<String>,
}

impl MethodFilter {
    /// A filter that allows every verb
    pub fn all() -> Self {
        Self::default()
    }

    /// Build a filter from verb strings; no verbs means every verb.
    pub fn new<I, S>(verbs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            verbs: verbs.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether the filter places no restriction
    pub fn is_unrestricted(&self) -> bool {
        self.verbs.is_empty()
    }

    /// Whether `http_method` passes the filter
    pub fn allows(&self, http_method: &str) -> bool {
        self.verbs.is_empty() || self.verbs.contains(http_method)
    }

    /// Verbs in the allow-list, sorted
    pub fn verbs(&self) -> impl Iterator<Item = &str> {
        self.verbs.iter().map(String::as_str)
    }
}
