//! Approval execution - effectful operations
//!
//! Takes an `ApprovalPlan` (created by the pure planning functions) and
//! submits the review and the merge via the platform API. Neither call is
//! retried.

use crate::error::{Error, Result};
use crate::merge::plan::ApprovalPlan;
use crate::platform::PullRequestService;
use crate::progress::ProgressCallback;
use crate::types::{DependencyUpdate, MergeResult, PullRequestReference};
use tracing::info;

/// Approve the PR with `comment`, then rebase-merge it pinned to the planned
/// head SHA.
///
/// A merge answered with `merged: false` is an error.
pub async fn execute_approval(
    plan: &ApprovalPlan,
    comment: &str,
    service: &dyn PullRequestService,
    reference: &PullRequestReference,
    update: &DependencyUpdate,
    progress: &dyn ProgressCallback,
) -> Result<MergeResult> {
    service.approve_pr(plan.pr_number, comment).await?;
    info!(repo = %service.coordinate(), pr_number = plan.pr_number, "review submitted");
    progress.on_approved(reference, update).await;

    let result = service.merge_pr(plan.pr_number, &plan.head_sha).await?;

    if !result.merged {
        return Err(Error::MergeRejected {
            pr_number: plan.pr_number,
            message: result
                .message
                .unwrap_or_else(|| "no message returned".to_string()),
        });
    }

    info!(
        repo = %service.coordinate(),
        pr_number = plan.pr_number,
        sha = ?result.sha,
        "merged"
    );
    progress
        .on_merged(reference, update, result.sha.as_deref())
        .await;
    Ok(result)
}
