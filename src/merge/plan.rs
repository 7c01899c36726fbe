//! Merge planning - pure functions deciding what happens to a PR
//!
//! No I/O happens here - the fetched detail is passed in, making every
//! branch of the decision easy to unit test.

use crate::error::{Error, Result};
use crate::types::{FilterPolicy, PullRequestDetail};

/// Outcome of evaluating a freshly fetched PR
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrAssessment {
    /// Merged flag is anything but an explicit `false`
    AlreadyMerged,
    /// Mergeable flag is anything but an explicit `true`
    NotMergeable,
    /// Open and mergeable; continue to confirmation
    Actionable,
}

/// Evaluate the merged and mergeable flags, in that order.
///
/// An unreported merged flag counts as merged, so a PR is only processed
/// when the remote positively says it is still open.
pub const fn assess_pr(detail: &PullRequestDetail) -> PrAssessment {
    if !detail.merged.is_false() {
        PrAssessment::AlreadyMerged
    } else if !detail.mergeable.is_true() {
        PrAssessment::NotMergeable
    } else {
        PrAssessment::Actionable
    }
}

/// How the operator's go-ahead is obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    /// Auto-approve was set with a dependency filter
    Implicit,
    /// Ask a yes/no question
    Prompt,
}

/// Confirmation is implicit only for an auto-approving dependency filter
pub fn confirmation_mode(policy: Option<&FilterPolicy>) -> Confirmation {
    match policy {
        Some(FilterPolicy {
            auto_approve: true,
            ..
        }) => Confirmation::Implicit,
        _ => Confirmation::Prompt,
    }
}

/// Merge target captured at fetch time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApprovalPlan {
    /// PR number
    pub pr_number: u64,
    /// Head commit the rebase merge is pinned to
    pub head_sha: String,
}

/// Build the approval plan for an actionable PR.
///
/// Fails if the detail carries no head SHA. Runs before any prompt, so the
/// operator is never asked about a PR that cannot be merged.
pub fn plan_approval(detail: &PullRequestDetail) -> Result<ApprovalPlan> {
    let head_sha = detail.head_sha.clone().ok_or(Error::MissingField {
        pr_number: detail.number,
        field: "head SHA",
    })?;

    Ok(ApprovalPlan {
        pr_number: detail.number,
        head_sha,
    })
}
