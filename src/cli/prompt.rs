//! Terminal prompts backed by dialoguer

use dialoguer::{Confirm, Input};
use renovate_merge::error::{Error, Result};
use renovate_merge::prompt::Prompter;
use std::io::ErrorKind;

/// Prompts on the controlling terminal
pub struct DialoguerPrompter;

impl Prompter for DialoguerPrompter {
    fn confirm(&self, question: &str) -> Result<Option<bool>> {
        Confirm::new()
            .with_prompt(question)
            .default(false)
            .interact_opt()
            .or_else(end_of_input)
    }

    fn input(&self, prompt: &str, default: Option<&str>) -> Result<Option<String>> {
        let mut input = Input::<String>::new().with_prompt(prompt);
        if let Some(default) = default {
            input = input.default(default.to_string()).show_default(true);
        }
        input.interact_text().map(Some).or_else(end_of_input)
    }
}

/// End of input becomes `None`; other failures are errors
fn end_of_input<T>(err: dialoguer::Error) -> Result<Option<T>> {
    match err {
        dialoguer::Error::IO(e) if e.kind() == ErrorKind::UnexpectedEof => Ok(None),
        dialoguer::Error::IO(e) => Err(Error::Internal(format!("Failed to read input: {e}"))),
    }
}
