//! Merge engine for dependency-update PRs
//!
//! Two-phase pattern:
//! 1. Plan - assess the fetched PR and build an `ApprovalPlan` (pure, testable)
//! 2. Execute - approve and merge (effectful)

mod execute;
mod plan;

pub use execute::execute_approval;
pub use plan::{
    ApprovalPlan, Confirmation, PrAssessment, assess_pr, confirmation_mode, plan_approval,
};
