//! Core types for renovate-merge

/// Default author searched for: the Renovate GitHub app
pub const DEFAULT_AUTHOR: &str = "app/renovate";

/// A pull request as it appears in a search result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestReference {
    /// PR number
    pub number: u64,
    /// PR title at search time
    pub title: String,
    /// API URL of the repository (`.../repos/<org>/<name>`)
    pub repository_url: Option<String>,
    /// Web URL for the PR
    pub html_url: Option<String>,
}

/// Organization and repository name of a PR
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryCoordinate {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
}

impl std::fmt::Display for RepositoryCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// A flag the remote may not have computed yet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriState {
    /// Explicitly true
    True,
    /// Explicitly false
    False,
    /// Not reported
    #[default]
    Unknown,
}

impl TriState {
    /// `true` only for an explicit `True`
    pub const fn is_true(self) -> bool {
        matches!(self, Self::True)
    }

    /// `true` only for an explicit `False`
    pub const fn is_false(self) -> bool {
        matches!(self, Self::False)
    }
}

impl From<Option<bool>> for TriState {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => Self::True,
            Some(false) => Self::False,
            None => Self::Unknown,
        }
    }
}

impl std::fmt::Display for TriState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::True => write!(f, "true"),
            Self::False => write!(f, "false"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Full PR state, fetched fresh for every PR processed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestDetail {
    /// PR number
    pub number: u64,
    /// PR title (may be absent in the API response)
    pub title: Option<String>,
    /// Whether the PR has been merged
    pub merged: TriState,
    /// Whether the PR can be merged without conflicts
    pub mergeable: TriState,
    /// Head commit SHA when fetched
    pub head_sha: Option<String>,
}

/// Narrowing to one dependency, optionally without prompting
///
/// Auto-approval only exists together with a dependency filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterPolicy {
    /// Case-sensitive substring matched against PR titles
    pub dependency: String,
    /// Skip the yes/no confirmation for matching PRs
    pub auto_approve: bool,
}

impl FilterPolicy {
    /// Filter by dependency, still confirming each PR
    pub fn new(dependency: impl Into<String>) -> Self {
        Self {
            dependency: dependency.into(),
            auto_approve: false,
        }
    }

    /// Filter by dependency and approve without confirmation
    pub fn auto_approving(dependency: impl Into<String>) -> Self {
        Self {
            dependency: dependency.into(),
            auto_approve: true,
        }
    }
}

/// Dependency name and target version parsed from a PR title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyUpdate {
    /// Dependency name without ecosystem prefix
    pub name: String,
    /// Target version
    pub version: String,
}

impl std::fmt::Display for DependencyUpdate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.name, self.version)
    }
}

/// Review verdict submitted before merging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewEvent {
    /// Approve the PR
    Approve,
}

impl ReviewEvent {
    /// Value of the `event` field in the reviews API
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Approve => "APPROVE",
        }
    }
}

/// Result of a merge operation
#[derive(Debug, Clone)]
pub struct MergeResult {
    /// Whether the merge was successful
    pub merged: bool,
    /// The SHA of the merge commit (if successful)
    pub sha: Option<String>,
    /// Message from the merge operation (especially on failure)
    pub message: Option<String>,
}
