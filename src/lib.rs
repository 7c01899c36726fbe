//! renovate-merge: approve and merge Renovate dependency-update PRs
//!
//! Finds open PRs authored by a bot in an organization that are waiting on
//! a given reviewer, optionally narrows them to one dependency, and takes
//! each through an approve-then-merge transaction with interactive
//! confirmation.

pub mod auth;
pub mod config;
pub mod error;
pub mod merge;
pub mod platform;
pub mod progress;
pub mod prompt;
pub mod search;
pub mod session;
pub mod title;
pub mod triage;
pub mod types;
