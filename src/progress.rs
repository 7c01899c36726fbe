//! Progress reporting for the triage run
//!
//! Every state transition of a run is reported here, so the CLI can echo
//! it and tests can record it.

use crate::types::{DependencyUpdate, PullRequestReference};
use async_trait::async_trait;

/// Why a PR was left alone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Merged already, or the merged flag was not reported
    AlreadyMerged,
    /// Conflicts, or mergeability not computed yet
    NotMergeable,
    /// Operator answered no
    Declined,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyMerged => write!(f, "already merged"),
            Self::NotMergeable => write!(f, "not mergeable"),
            Self::Declined => write!(f, "declined"),
        }
    }
}

/// Callback for run progress
#[async_trait]
pub trait ProgressCallback: Send + Sync {
    /// The search is about to run
    async fn on_search_started(&self, _query: &str) {}

    /// The search returned `count` PRs
    async fn on_found(&self, count: usize);

    /// `count` PRs remain after the dependency filter
    async fn on_filtered(&self, dependency: &str, count: usize);

    /// A PR was skipped
    async fn on_skip(&self, pr: &PullRequestReference, reason: SkipReason);

    /// An approving review was submitted
    async fn on_approved(&self, pr: &PullRequestReference, update: &DependencyUpdate);

    /// The PR was merged
    async fn on_merged(
        &self,
        pr: &PullRequestReference,
        update: &DependencyUpdate,
        sha: Option<&str>,
    );

    /// Free-form message
    async fn on_message(&self, message: &str);
}

/// Discards all progress
pub struct NoopProgress;

#[async_trait]
impl ProgressCallback for NoopProgress {
    async fn on_found(&self, _count: usize) {}
    async fn on_filtered(&self, _dependency: &str, _count: usize) {}
    async fn on_skip(&self, _pr: &PullRequestReference, _reason: SkipReason) {}
    async fn on_approved(&self, _pr: &PullRequestReference, _update: &DependencyUpdate) {}
    async fn on_merged(
        &self,
        _pr: &PullRequestReference,
        _update: &DependencyUpdate,
        _sha: Option<&str>,
    ) {
    }
    async fn on_message(&self, _message: &str) {}
}
