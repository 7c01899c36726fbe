//! Triage run - select PRs, then approve and merge them one at a time
//!
//! Three phases per run:
//! 1. Select - search, filter by dependency, order by title
//! 2. Resolve - per PR, locate the repository and fetch fresh detail
//! 3. Decide and act - skip, confirm, resolve the comment, approve, merge
//!
//! PRs are processed strictly in sequence. Any error aborts the whole run;
//! skips only move on to the next PR.

use crate::error::{Error, Result};
use crate::merge::{
    Confirmation, PrAssessment, assess_pr, confirmation_mode, execute_approval, plan_approval,
};
use crate::platform::{PlatformService, PullRequestService, parse_repository_url};
use crate::progress::{ProgressCallback, SkipReason};
use crate::prompt::Prompter;
use crate::search::{SearchCriteria, dedup_references, filter_by_dependency, sort_by_title};
use crate::title::parse_title;
use crate::types::{DependencyUpdate, FilterPolicy, PullRequestDetail, PullRequestReference};
use std::future::Future;
use std::time::Duration;
use tracing::{debug, info};

/// Bound on the search and detail-fetch calls
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(5);

const COMMENT_PROMPT: &str = "Approval comment";

/// Inputs of a triage run
#[derive(Debug, Clone)]
pub struct TriageOptions {
    /// Who and what to search for
    pub criteria: SearchCriteria,
    /// Optional dependency narrowing
    pub policy: Option<FilterPolicy>,
    /// Comment offered as the review body
    pub default_comment: Option<String>,
    /// Bound on search and detail fetch
    pub fetch_timeout: Duration,
}

impl TriageOptions {
    /// Options with no filter, no default comment, and the default timeout
    pub const fn new(criteria: SearchCriteria) -> Self {
        Self {
            criteria,
            policy: None,
            default_comment: None,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }
}

/// What happened to a single PR
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrOutcome {
    /// Left alone
    Skipped(SkipReason),
    /// Approved and merged
    Merged {
        /// Merge commit SHA, if returned
        sha: Option<String>,
    },
}

/// Counts for a completed run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriageSummary {
    /// PRs returned by the search
    pub found: usize,
    /// PRs left after filtering
    pub selected: usize,
    /// PRs approved and merged
    pub merged: usize,
    /// PRs skipped as already merged
    pub already_merged: usize,
    /// PRs skipped as not mergeable
    pub not_mergeable: usize,
    /// PRs the operator declined
    pub declined: usize,
}

impl TriageSummary {
    fn record(&mut self, outcome: &PrOutcome) {
        match outcome {
            PrOutcome::Merged { .. } => self.merged += 1,
            PrOutcome::Skipped(SkipReason::AlreadyMerged) => self.already_merged += 1,
            PrOutcome::Skipped(SkipReason::NotMergeable) => self.not_mergeable += 1,
            PrOutcome::Skipped(SkipReason::Declined) => self.declined += 1,
        }
    }
}

/// Run a full triage pass.
pub async fn run_triage(
    platform: &dyn PlatformService,
    prompter: &dyn Prompter,
    progress: &dyn ProgressCallback,
    options: &TriageOptions,
) -> Result<TriageSummary> {
    let (found, selected) = select_pull_requests(platform, progress, options).await?;

    let mut summary = TriageSummary {
        found,
        selected: selected.len(),
        ..TriageSummary::default()
    };

    if selected.is_empty() {
        progress.on_message("No pull requests to process.").await;
    }

    for reference in &selected {
        let (service, detail) =
            resolve_pull_request(platform, reference, options.fetch_timeout).await?;
        let outcome =
            process_pull_request(service.as_ref(), reference, &detail, prompter, progress, options)
                .await?;
        summary.record(&outcome);
    }

    info!(?summary, "triage complete");
    Ok(summary)
}

/// Search, filter and order the working set.
///
/// Returns the number of search hits and the PRs to process.
pub async fn select_pull_requests(
    platform: &dyn PlatformService,
    progress: &dyn ProgressCallback,
    options: &TriageOptions,
) -> Result<(usize, Vec<PullRequestReference>)> {
    let query = options.criteria.to_query();
    progress.on_search_started(&query).await;

    let mut references = bounded(
        options.fetch_timeout,
        "search for pull requests",
        platform.search_pull_requests(&query),
    )
    .await?
    .ok_or(Error::SearchFailed)?;
    dedup_references(&mut references);

    let found = references.len();
    progress.on_found(found).await;

    let mut selected = filter_by_dependency(references, options.policy.as_ref());
    if let Some(policy) = &options.policy {
        progress
            .on_filtered(&policy.dependency, selected.len())
            .await;
    }

    sort_by_title(&mut selected);
    Ok((found, selected))
}

/// Locate a reference's repository and fetch its current detail.
pub async fn resolve_pull_request(
    platform: &dyn PlatformService,
    reference: &PullRequestReference,
    fetch_timeout: Duration,
) -> Result<(Box<dyn PullRequestService>, PullRequestDetail)> {
    let coordinate = parse_repository_url(reference.repository_url.as_deref())?;
    let service = platform.pull_requests(&coordinate);

    let detail = bounded(
        fetch_timeout,
        &format!("fetch of PR #{} in {coordinate}", reference.number),
        service.get_pr_details(reference.number),
    )
    .await?
    .ok_or(Error::PrNotFound(reference.number))?;

    debug!(
        repo = %coordinate,
        pr_number = detail.number,
        merged = %detail.merged,
        mergeable = %detail.mergeable,
        "resolved PR"
    );
    Ok((service, detail))
}

/// Take one fetched PR through skip, parse, confirm, comment, approve and merge.
pub async fn process_pull_request(
    service: &dyn PullRequestService,
    reference: &PullRequestReference,
    detail: &PullRequestDetail,
    prompter: &dyn Prompter,
    progress: &dyn ProgressCallback,
    options: &TriageOptions,
) -> Result<PrOutcome> {
    match assess_pr(detail) {
        PrAssessment::AlreadyMerged => {
            progress.on_skip(reference, SkipReason::AlreadyMerged).await;
            return Ok(PrOutcome::Skipped(SkipReason::AlreadyMerged));
        }
        PrAssessment::NotMergeable => {
            progress.on_skip(reference, SkipReason::NotMergeable).await;
            return Ok(PrOutcome::Skipped(SkipReason::NotMergeable));
        }
        PrAssessment::Actionable => {}
    }

    let title = detail.title.as_deref().unwrap_or(&reference.title);
    let update = parse_title(title)?;
    let plan = plan_approval(detail)?;

    if confirmation_mode(options.policy.as_ref()) == Confirmation::Prompt {
        let question = confirmation_question(&update, reference.number, service);
        let approved = prompter
            .confirm(&question)?
            .ok_or_else(|| Error::InputClosed("confirmation".to_string()))?;
        if !approved {
            progress.on_skip(reference, SkipReason::Declined).await;
            return Ok(PrOutcome::Skipped(SkipReason::Declined));
        }
    }

    let comment = resolve_comment(prompter, options.default_comment.as_deref())?;
    let result = execute_approval(&plan, &comment, service, reference, &update, progress).await?;

    Ok(PrOutcome::Merged { sha: result.sha })
}

/// Pick the review body.
///
/// Without a usable default the operator must type one. With a default the
/// prompt is pre-filled and an empty answer keeps the default verbatim.
pub fn resolve_comment(prompter: &dyn Prompter, default: Option<&str>) -> Result<String> {
    let closed = || Error::InputClosed("approval comment".to_string());

    match default.filter(|d| !d.trim().is_empty()) {
        None => {
            let comment = prompter.input(COMMENT_PROMPT, None)?.ok_or_else(closed)?;
            if comment.trim().is_empty() {
                return Err(closed());
            }
            Ok(comment)
        }
        Some(default) => {
            let comment = prompter
                .input(COMMENT_PROMPT, Some(default))?
                .ok_or_else(closed)?;
            if comment.is_empty() {
                Ok(default.to_string())
            } else {
                Ok(comment)
            }
        }
    }
}

fn confirmation_question(
    update: &DependencyUpdate,
    pr_number: u64,
    service: &dyn PullRequestService,
) -> String {
    format!(
        "Approve and merge {} to {} (PR #{} in {})?",
        update.name,
        update.version,
        pr_number,
        service.coordinate()
    )
}

async fn bounded<T, F>(limit: Duration, operation: &str, future: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    tokio::time::timeout(limit, future)
        .await
        .map_err(|_| Error::Timeout {
            operation: operation.to_string(),
            limit,
        })?
}
