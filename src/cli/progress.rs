//! Progress output for the terminal

use crate::cli::style::{Stylize, check, spinner_style};
use anstream::println;
use async_trait::async_trait;
use indicatif::ProgressBar;
use renovate_merge::progress::{ProgressCallback, SkipReason};
use renovate_merge::types::{DependencyUpdate, PullRequestReference};
use std::sync::Mutex;
use std::time::Duration;
use supports_hyperlinks::Stream;
use terminal_link::Link;

/// Prints one line per state transition
pub struct CliProgress {
    spinner: Mutex<Option<ProgressBar>>,
    hyperlinks: bool,
}

impl CliProgress {
    /// Progress printer for stdout
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
            hyperlinks: supports_hyperlinks::on(Stream::Stdout),
        }
    }

    fn pr_label(&self, pr: &PullRequestReference) -> String {
        let text = format!("PR #{}", pr.number);
        match &pr.html_url {
            Some(url) if self.hyperlinks => Link::new(&text, url).to_string(),
            _ => text,
        }
    }

    fn finish_spinner(&self, message: String) {
        let spinner = self
            .spinner
            .lock()
            .ok()
            .and_then(|mut guard| guard.take());
        match spinner {
            Some(spinner) => spinner.finish_with_message(message),
            None => println!("{message}"),
        }
    }
}

#[async_trait]
impl ProgressCallback for CliProgress {
    async fn on_search_started(&self, query: &str) {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(spinner_style());
        spinner.set_message(format!("Searching {}...", query.muted()));
        spinner.enable_steady_tick(Duration::from_millis(80));
        if let Ok(mut guard) = self.spinner.lock() {
            *guard = Some(spinner);
        }
    }

    async fn on_found(&self, count: usize) {
        self.finish_spinner(format!(
            "{} Found {} pull request(s)",
            check(),
            count.to_string().accent()
        ));
    }

    async fn on_filtered(&self, dependency: &str, count: usize) {
        println!(
            "{}",
            format!("{count} pull request(s) match dependency '{dependency}'").muted()
        );
    }

    async fn on_skip(&self, pr: &PullRequestReference, reason: SkipReason) {
        println!(
            "{} {}: {} ({})",
            "⏭️  Skipping".warn(),
            self.pr_label(pr),
            pr.title,
            reason.to_string().muted()
        );
    }

    async fn on_approved(&self, pr: &PullRequestReference, update: &DependencyUpdate) {
        println!(
            "{} Approved {} ({})",
            check(),
            update.to_string().accent(),
            self.pr_label(pr)
        );
    }

    async fn on_merged(
        &self,
        pr: &PullRequestReference,
        update: &DependencyUpdate,
        sha: Option<&str>,
    ) {
        let sha_display = sha.unwrap_or("(no sha)");
        println!(
            "{} Merged {} ({}) at {}",
            check(),
            update.to_string().accent(),
            self.pr_label(pr),
            sha_display.muted()
        );
    }

    async fn on_message(&self, message: &str) {
        println!("{message}");
    }
}
