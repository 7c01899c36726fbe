//! Platform services for GitHub
//!
//! The triage workflow only talks to these traits, so the same logic runs
//! against the real API or a test double.

mod github;
mod resolve;

pub use github::{GitHubPullRequests, GitHubService};
pub use resolve::parse_repository_url;

use crate::error::Result;
use crate::types::{MergeResult, PullRequestDetail, PullRequestReference, RepositoryCoordinate};
use async_trait::async_trait;

/// Organization-wide operations
#[async_trait]
pub trait PlatformService: Send + Sync {
    /// Run an issue search restricted to pull requests.
    ///
    /// `Ok(None)` means the search produced no result container, which is
    /// different from an empty match list.
    async fn search_pull_requests(&self, query: &str)
    -> Result<Option<Vec<PullRequestReference>>>;

    /// Client scoped to one repository's pull requests
    fn pull_requests(&self, coordinate: &RepositoryCoordinate) -> Box<dyn PullRequestService>;
}

/// Operations on the pull requests of a single repository
#[async_trait]
pub trait PullRequestService: Send + Sync {
    /// Repository this client is scoped to
    fn coordinate(&self) -> &RepositoryCoordinate;

    /// Fetch current PR state. `Ok(None)` when the API returned nothing.
    async fn get_pr_details(&self, pr_number: u64) -> Result<Option<PullRequestDetail>>;

    /// Submit an approving review with `body`
    async fn approve_pr(&self, pr_number: u64, body: &str) -> Result<()>;

    /// Rebase-merge the PR, failing if its head is no longer `expected_head_sha`
    async fn merge_pr(&self, pr_number: u64, expected_head_sha: &str) -> Result<MergeResult>;
}
