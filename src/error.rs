//! Error types for renovate-merge

use thiserror::Error;

/// Every condition that aborts a triage run
#[derive(Error, Debug)]
pub enum Error {
    /// The search call completed without a result container
    #[error("search for pull requests returned no result")]
    SearchFailed,

    /// A PR from the search result could not be fetched
    #[error("pull request #{0} not found")]
    PrNotFound(u64),

    /// A repository URL did not resolve to `<org>/<name>`
    #[error("invalid repository URL: {0}")]
    InvalidRepositoryUrl(String),

    /// A PR title did not follow `Update dependency <name> to <version>`
    #[error("malformed dependency update title: '{0}'")]
    MalformedTitle(String),

    /// Interactive input ended while an answer was required
    #[error("input closed while waiting for {0}")]
    InputClosed(String),

    /// A field required to approve or merge was missing
    #[error("pull request #{pr_number} is missing {field}")]
    MissingField {
        /// PR the field was read from
        pr_number: u64,
        /// Name of the missing field
        field: &'static str,
    },

    /// A bounded network call did not finish in time
    #[error("{operation} timed out after {limit:?}")]
    Timeout {
        /// What was being waited on
        operation: String,
        /// Configured bound
        limit: std::time::Duration,
    },

    /// GitHub answered the merge request without merging
    #[error("merge of pull request #{pr_number} was rejected: {message}")]
    MergeRejected {
        /// PR that was not merged
        pr_number: u64,
        /// Message returned by the API
        message: String,
    },

    /// Credential resolution failed
    #[error("authentication error: {0}")]
    Auth(String),

    /// Configuration file or flags were invalid
    #[error("configuration error: {0}")]
    Config(String),

    /// GitHub API error not covered by octocrab's error type
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    /// Error surfaced by octocrab
    #[error("GitHub API error: {0}")]
    Octocrab(#[from] octocrab::Error),

    /// Error surfaced by reqwest
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Anything else
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, Error>;
