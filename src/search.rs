//! Search query construction and selection of the working set
//!
//! Selection is pure: the search result is narrowed by an optional
//! dependency substring, then ordered by title.

use crate::types::{FilterPolicy, PullRequestReference};
use std::collections::HashSet;

/// Criteria for the review-request search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCriteria {
    /// Organization owning the repositories
    pub organization: String,
    /// PR author, e.g. `app/renovate`
    pub author: String,
    /// User whose review was requested
    pub reviewer: String,
}

impl SearchCriteria {
    /// Build the GitHub search query string for these criteria
    pub fn to_query(&self) -> String {
        SearchQueryBuilder::new()
            .org(&self.organization)
            .author(&self.author)
            .state_open()
            .pr_type()
            .review_requested(&self.reviewer)
            .build()
    }
}

/// Accumulates GitHub search qualifiers
#[derive(Debug, Default)]
pub struct SearchQueryBuilder {
    terms: Vec<String>,
}

impl SearchQueryBuilder {
    /// Empty query
    pub fn new() -> Self {
        Self::default()
    }

    /// `org:<name>`
    #[must_use]
    pub fn org(mut self, name: &str) -> Self {
        self.terms.push(format!("org:{name}"));
        self
    }

    /// `author:<login>`
    #[must_use]
    pub fn author(mut self, login: &str) -> Self {
        self.terms.push(format!("author:{login}"));
        self
    }

    /// `is:open`
    #[must_use]
    pub fn state_open(mut self) -> Self {
        self.terms.push("is:open".to_string());
        self
    }

    /// `is:pr`
    #[must_use]
    pub fn pr_type(mut self) -> Self {
        self.terms.push("is:pr".to_string());
        self
    }

    /// `review-requested:<login>`
    #[must_use]
    pub fn review_requested(mut self, login: &str) -> Self {
        self.terms.push(format!("review-requested:{login}"));
        self
    }

    /// Join all qualifiers with spaces
    pub fn build(&self) -> String {
        self.terms.join(" ")
    }
}

/// Keep only references whose title contains the dependency substring.
///
/// Returns the input unchanged when no policy is given. Order is preserved.
pub fn filter_by_dependency(
    references: Vec<PullRequestReference>,
    policy: Option<&FilterPolicy>,
) -> Vec<PullRequestReference> {
    match policy {
        Some(policy) => references
            .into_iter()
            .filter(|r| r.title.contains(policy.dependency.as_str()))
            .collect(),
        None => references,
    }
}

/// Drop repeated `(repository, number)` entries, keeping the first.
///
/// Paginated searches can return a PR twice when results shift between
/// pages; each PR is acted on at most once per run.
pub fn dedup_references(references: &mut Vec<PullRequestReference>) {
    let mut seen = HashSet::new();
    references.retain(|r| seen.insert((r.repository_url.clone(), r.number)));
}

/// Stable lexicographic sort by title
pub fn sort_by_title(references: &mut [PullRequestReference]) {
    references.sort_by(|a, b| a.title.cmp(&b.title));
}
