//! Mock platform service for testing

#![allow(dead_code)]

use async_trait::async_trait;
use renovate_merge::error::{Error, Result};
use renovate_merge::platform::{PlatformService, PullRequestService};
use renovate_merge::types::{
    MergeResult, PullRequestDetail, PullRequestReference, RepositoryCoordinate,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Call record for `get_pr_details`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetDetailsCall {
    pub repo: String,
    pub pr_number: u64,
}

/// Call record for `approve_pr`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApproveCall {
    pub repo: String,
    pub pr_number: u64,
    pub body: String,
}

/// Call record for `merge_pr`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergePrCall {
    pub repo: String,
    pub pr_number: u64,
    pub expected_head_sha: String,
}

/// State shared between the service and the repository clients it hands out
#[derive(Default)]
struct MockState {
    search_response: Mutex<Option<Option<Vec<PullRequestReference>>>>,
    hang_search: Mutex<bool>,
    hang_details: Mutex<bool>,
    pr_details: Mutex<HashMap<(String, u64), PullRequestDetail>>,
    merge_responses: Mutex<HashMap<(String, u64), MergeResult>>,
    advance_head_on_fetch: Mutex<Option<String>>,
    // Call tracking
    search_calls: Mutex<Vec<String>>,
    scoped_repos: Mutex<Vec<String>>,
    get_details_calls: Mutex<Vec<GetDetailsCall>>,
    approve_calls: Mutex<Vec<ApproveCall>>,
    merge_calls: Mutex<Vec<MergePrCall>>,
    // Error injection
    error_on_approve: Mutex<Option<String>>,
    error_on_merge: Mutex<Option<String>>,
}

/// Simple mock platform service for testing
///
/// Features:
/// - Canned search results, PR details and merge responses
/// - Call tracking for verification
/// - Error injection for failure path testing
pub struct MockPlatformService {
    state: Arc<MockState>,
}

impl Default for MockPlatformService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockPlatformService {
    /// Create a mock whose search returns an empty list
    pub fn new() -> Self {
        let state = MockState::default();
        *state.search_response.lock().unwrap() = Some(Some(Vec::new()));
        Self {
            state: Arc::new(state),
        }
    }

    // === Response configuration ===

    /// Search returns these references
    pub fn set_search_results(&self, references: Vec<PullRequestReference>) {
        *self.state.search_response.lock().unwrap() = Some(Some(references));
    }

    /// Search completes without a result container
    pub fn set_search_absent(&self) {
        *self.state.search_response.lock().unwrap() = Some(None);
    }

    /// Search never completes
    pub fn hang_search(&self) {
        *self.state.hang_search.lock().unwrap() = true;
    }

    /// Detail fetches never complete
    pub fn hang_details(&self) {
        *self.state.hang_details.lock().unwrap() = true;
    }

    /// Detail returned for `repo` ("owner/name") and PR number
    pub fn set_pr_details(&self, repo: &str, detail: PullRequestDetail) {
        let merged = MergeResult {
            merged: true,
            sha: Some(format!("merge-{}", detail.number)),
            message: Some("Pull Request successfully merged".to_string()),
        };
        self.state
            .merge_responses
            .lock()
            .unwrap()
            .entry((repo.to_string(), detail.number))
            .or_insert(merged);
        self.state
            .pr_details
            .lock()
            .unwrap()
            .insert((repo.to_string(), detail.number), detail);
    }

    /// Response for `merge_pr`
    pub fn set_merge_response(&self, repo: &str, pr_number: u64, result: MergeResult) {
        self.state
            .merge_responses
            .lock()
            .unwrap()
            .insert((repo.to_string(), pr_number), result);
    }

    /// After every detail fetch, the stored PR's head moves to `sha`
    pub fn advance_head_on_fetch(&self, sha: &str) {
        *self.state.advance_head_on_fetch.lock().unwrap() = Some(sha.to_string());
    }

    // === Error injection methods ===

    /// Make `approve_pr` return an error
    pub fn fail_approve(&self, msg: &str) {
        *self.state.error_on_approve.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `merge_pr` return an error
    pub fn fail_merge(&self, msg: &str) {
        *self.state.error_on_merge.lock().unwrap() = Some(msg.to_string());
    }

    // === Call tracking accessors ===

    pub fn get_search_calls(&self) -> Vec<String> {
        self.state.search_calls.lock().unwrap().clone()
    }

    pub fn get_scoped_repos(&self) -> Vec<String> {
        self.state.scoped_repos.lock().unwrap().clone()
    }

    pub fn get_details_calls(&self) -> Vec<GetDetailsCall> {
        self.state.get_details_calls.lock().unwrap().clone()
    }

    pub fn get_approve_calls(&self) -> Vec<ApproveCall> {
        self.state.approve_calls.lock().unwrap().clone()
    }

    pub fn get_merge_calls(&self) -> Vec<MergePrCall> {
        self.state.merge_calls.lock().unwrap().clone()
    }

    /// PR numbers fetched, in call order
    pub fn fetched_pr_numbers(&self) -> Vec<u64> {
        self.get_details_calls().iter().map(|c| c.pr_number).collect()
    }

    pub fn assert_no_actions(&self) {
        assert!(
            self.get_approve_calls().is_empty(),
            "expected no approve calls, got {:?}",
            self.get_approve_calls()
        );
        assert!(
            self.get_merge_calls().is_empty(),
            "expected no merge calls, got {:?}",
            self.get_merge_calls()
        );
    }

    pub fn assert_merge_called(&self, pr_number: u64) {
        assert!(
            self.get_merge_calls()
                .iter()
                .any(|c| c.pr_number == pr_number),
            "expected merge_pr to be called for PR #{pr_number}"
        );
    }

    pub fn assert_merge_not_called(&self, pr_number: u64) {
        assert!(
            !self
                .get_merge_calls()
                .iter()
                .any(|c| c.pr_number == pr_number),
            "expected merge_pr NOT to be called for PR #{pr_number}"
        );
    }
}

#[async_trait]
impl PlatformService for MockPlatformService {
    async fn search_pull_requests(
        &self,
        query: &str,
    ) -> Result<Option<Vec<PullRequestReference>>> {
        self.state
            .search_calls
            .lock()
            .unwrap()
            .push(query.to_string());

        let hang = *self.state.hang_search.lock().unwrap();
        if hang {
            std::future::pending::<()>().await;
        }

        let response = self.state.search_response.lock().unwrap().clone();
        Ok(response.flatten())
    }

    fn pull_requests(&self, coordinate: &RepositoryCoordinate) -> Box<dyn PullRequestService> {
        self.state
            .scoped_repos
            .lock()
            .unwrap()
            .push(coordinate.to_string());
        Box::new(MockPullRequests {
            coordinate: coordinate.clone(),
            state: Arc::clone(&self.state),
        })
    }
}

struct MockPullRequests {
    coordinate: RepositoryCoordinate,
    state: Arc<MockState>,
}

impl MockPullRequests {
    fn key(&self, pr_number: u64) -> (String, u64) {
        (self.coordinate.to_string(), pr_number)
    }
}

#[async_trait]
impl PullRequestService for MockPullRequests {
    fn coordinate(&self) -> &RepositoryCoordinate {
        &self.coordinate
    }

    async fn get_pr_details(&self, pr_number: u64) -> Result<Option<PullRequestDetail>> {
        self.state
            .get_details_calls
            .lock()
            .unwrap()
            .push(GetDetailsCall {
                repo: self.coordinate.to_string(),
                pr_number,
            });

        let hang = *self.state.hang_details.lock().unwrap();
        if hang {
            std::future::pending::<()>().await;
        }

        let mut details = self.state.pr_details.lock().unwrap();
        let fetched = details.get(&self.key(pr_number)).cloned();

        if let Some(sha) = self.state.advance_head_on_fetch.lock().unwrap().as_ref()
            && let Some(stored) = details.get_mut(&self.key(pr_number))
        {
            stored.head_sha = Some(sha.clone());
        }

        Ok(fetched)
    }

    async fn approve_pr(&self, pr_number: u64, body: &str) -> Result<()> {
        self.state.approve_calls.lock().unwrap().push(ApproveCall {
            repo: self.coordinate.to_string(),
            pr_number,
            body: body.to_string(),
        });

        if let Some(msg) = self.state.error_on_approve.lock().unwrap().as_ref() {
            return Err(Error::GitHubApi(msg.clone()));
        }
        Ok(())
    }

    async fn merge_pr(&self, pr_number: u64, expected_head_sha: &str) -> Result<MergeResult> {
        self.state.merge_calls.lock().unwrap().push(MergePrCall {
            repo: self.coordinate.to_string(),
            pr_number,
            expected_head_sha: expected_head_sha.to_string(),
        });

        if let Some(msg) = self.state.error_on_merge.lock().unwrap().as_ref() {
            return Err(Error::GitHubApi(msg.clone()));
        }

        let responses = self.state.merge_responses.lock().unwrap();
        responses.get(&self.key(pr_number)).cloned().ok_or_else(|| {
            Error::GitHubApi(format!(
                "merge_pr: no response configured for PR #{pr_number}"
            ))
        })
    }
}
