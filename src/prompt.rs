//! Interactive input used by the triage workflow
//!
//! `None` from either method means the input stream ended before an answer
//! was given. The workflow treats that as fatal.

use crate::error::Result;

/// Operator prompts
pub trait Prompter: Send + Sync {
    /// Ask a yes/no question
    fn confirm(&self, question: &str) -> Result<Option<bool>>;

    /// Ask for free text, pre-filled with `default` when given
    fn input(&self, prompt: &str, default: Option<&str>) -> Result<Option<String>>;
}
