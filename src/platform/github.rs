//! GitHub platform service implementation

use crate::auth::Secret;
use crate::error::{Error, Result};
use crate::platform::{PlatformService, PullRequestService};
use crate::types::{
    MergeResult, PullRequestDetail, PullRequestReference, RepositoryCoordinate, ReviewEvent,
    TriState,
};
use async_trait::async_trait;
use octocrab::Octocrab;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

const PUBLIC_API_BASE: &str = "https://api.github.com";
const SEARCH_PAGE_SIZE: u8 = 100;

/// GitHub service using octocrab
pub struct GitHubService {
    client: Octocrab,
    /// HTTP client for raw requests (reviews)
    http_client: Client,
    token: Secret,
    /// API base for raw requests, without trailing slash
    api_base: String,
}

impl GitHubService {
    /// Create a service for github.com, or for a GitHub Enterprise `host`
    pub fn new(token: &Secret, host: Option<&str>) -> Result<Self> {
        let api_base = host.map_or_else(
            || PUBLIC_API_BASE.to_string(),
            |h| format!("https://{h}/api/v3"),
        );
        Self::with_api_base(token, &api_base)
    }

    /// Create a service against an explicit API base URL
    pub fn with_api_base(token: &Secret, api_base: &str) -> Result<Self> {
        let api_base = api_base.trim_end_matches('/').to_string();

        let client = Octocrab::builder()
            .personal_token(token.expose().to_string())
            .base_uri(api_base.as_str())
            .map_err(|e| Error::GitHubApi(e.to_string()))?
            .build()
            .map_err(|e| Error::GitHubApi(e.to_string()))?;

        let http_client = Client::builder()
            .user_agent("renovate-merge")
            .build()
            .map_err(|e| Error::GitHubApi(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            http_client,
            token: token.clone(),
            api_base,
        })
    }
}

#[async_trait]
impl PlatformService for GitHubService {
    async fn search_pull_requests(
        &self,
        query: &str,
    ) -> Result<Option<Vec<PullRequestReference>>> {
        debug!(query, "searching pull requests");

        let first_page = self
            .client
            .search()
            .issues_and_pull_requests(query)
            .per_page(SEARCH_PAGE_SIZE)
            .send()
            .await?;
        let issues = self.client.all_pages(first_page).await?;

        let references: Vec<PullRequestReference> = issues
            .into_iter()
            .map(|issue| PullRequestReference {
                number: issue.number,
                title: issue.title,
                repository_url: Some(issue.repository_url.to_string()),
                html_url: Some(issue.html_url.to_string()),
            })
            .collect();

        debug!(count = references.len(), "search complete");
        Ok(Some(references))
    }

    fn pull_requests(&self, coordinate: &RepositoryCoordinate) -> Box<dyn PullRequestService> {
        Box::new(GitHubPullRequests {
            client: self.client.clone(),
            http_client: self.http_client.clone(),
            token: self.token.clone(),
            api_base: self.api_base.clone(),
            coordinate: coordinate.clone(),
        })
    }
}

/// Pull-request client scoped to one repository
pub struct GitHubPullRequests {
    client: Octocrab,
    http_client: Client,
    token: Secret,
    api_base: String,
    coordinate: RepositoryCoordinate,
}

#[derive(Serialize)]
struct CreateReviewRequest<'a> {
    body: &'a str,
    event: &'static str,
}

#[async_trait]
impl PullRequestService for GitHubPullRequests {
    fn coordinate(&self) -> &RepositoryCoordinate {
        &self.coordinate
    }

    async fn get_pr_details(&self, pr_number: u64) -> Result<Option<PullRequestDetail>> {
        debug!(repo = %self.coordinate, pr_number, "getting PR details");

        let pr = match self
            .client
            .pulls(&self.coordinate.owner, &self.coordinate.repo)
            .get(pr_number)
            .await
        {
            Ok(pr) => pr,
            Err(octocrab::Error::GitHub { source, .. }) if source.status_code.as_u16() == 404 => {
                debug!(pr_number, "PR not found");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        // `merged` can be omitted; a merge timestamp still means merged
        let merged = pr.merged.or_else(|| pr.merged_at.map(|_| true));

        let details = PullRequestDetail {
            number: pr.number,
            title: pr.title.clone(),
            merged: TriState::from(merged),
            mergeable: TriState::from(pr.mergeable),
            head_sha: Some(pr.head.sha.clone()).filter(|sha| !sha.is_empty()),
        };

        debug!(
            pr_number,
            merged = %details.merged,
            mergeable = %details.mergeable,
            "got PR details"
        );
        Ok(Some(details))
    }

    async fn approve_pr(&self, pr_number: u64, body: &str) -> Result<()> {
        debug!(repo = %self.coordinate, pr_number, "approving PR");

        let url = format!(
            "{}/repos/{}/{}/pulls/{}/reviews",
            self.api_base, self.coordinate.owner, self.coordinate.repo, pr_number
        );

        let response = self
            .http_client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.token.expose()))
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .json(&CreateReviewRequest {
                body,
                event: ReviewEvent::Approve.as_str(),
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(Error::GitHubApi(format!(
                "review of PR #{pr_number} failed with {status}: {text}"
            )));
        }

        debug!(pr_number, "approved PR");
        Ok(())
    }

    async fn merge_pr(&self, pr_number: u64, expected_head_sha: &str) -> Result<MergeResult> {
        debug!(repo = %self.coordinate, pr_number, sha = expected_head_sha, "merging PR");

        let result = self
            .client
            .pulls(&self.coordinate.owner, &self.coordinate.repo)
            .merge(pr_number)
            .method(octocrab::params::pulls::MergeMethod::Rebase)
            .sha(expected_head_sha)
            .send()
            .await
            .map_err(|e| Error::GitHubApi(format!("Merge failed: {e}")))?;

        let merge_result = MergeResult {
            merged: result.merged,
            sha: result.sha,
            message: result.message,
        };

        debug!(
            pr_number,
            merged = merge_result.merged,
            sha = ?merge_result.sha,
            "merge complete"
        );
        Ok(merge_result)
    }
}
