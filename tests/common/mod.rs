//! Shared test fixtures

#![allow(dead_code)]

mod mock_platform;

pub use mock_platform::{ApproveCall, GetDetailsCall, MergePrCall, MockPlatformService};

use async_trait::async_trait;
use renovate_merge::error::Result;
use renovate_merge::progress::{ProgressCallback, SkipReason};
use renovate_merge::prompt::Prompter;
use renovate_merge::search::SearchCriteria;
use renovate_merge::triage::TriageOptions;
use renovate_merge::types::{DependencyUpdate, PullRequestDetail, PullRequestReference, TriState};
use std::collections::VecDeque;
use std::sync::Mutex;

pub const REPO: &str = "acme/widgets";

/// Search hit in `acme/widgets`
pub fn make_reference(number: u64, title: &str) -> PullRequestReference {
    make_reference_in(REPO, number, title)
}

/// Search hit in `repo` ("owner/name")
pub fn make_reference_in(repo: &str, number: u64, title: &str) -> PullRequestReference {
    PullRequestReference {
        number,
        title: title.to_string(),
        repository_url: Some(format!("https://api.github.com/repos/{repo}")),
        html_url: Some(format!("https://github.com/{repo}/pull/{number}")),
    }
}

/// Open, mergeable PR detail with head `sha-<number>`
pub fn open_detail(number: u64, title: &str) -> PullRequestDetail {
    PullRequestDetail {
        number,
        title: Some(title.to_string()),
        merged: TriState::False,
        mergeable: TriState::True,
        head_sha: Some(format!("sha-{number}")),
    }
}

/// Register an open, mergeable PR in search results and details
pub fn add_open_pr(
    mock: &MockPlatformService,
    refs: &mut Vec<PullRequestReference>,
    number: u64,
    title: &str,
) {
    refs.push(make_reference(number, title));
    mock.set_pr_details(REPO, open_detail(number, title));
}

pub fn criteria() -> SearchCriteria {
    SearchCriteria {
        organization: "acme".to_string(),
        author: "app/renovate".to_string(),
        reviewer: "octocat".to_string(),
    }
}

pub fn options() -> TriageOptions {
    TriageOptions::new(criteria())
}

/// Prompter answering from scripted queues.
///
/// An exhausted queue behaves like end of input.
#[derive(Default)]
pub struct MockPrompter {
    confirm_answers: Mutex<VecDeque<Option<bool>>>,
    input_answers: Mutex<VecDeque<Option<String>>>,
    confirm_calls: Mutex<Vec<String>>,
    input_calls: Mutex<Vec<(String, Option<String>)>>,
}

impl MockPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_confirms(self, answers: &[bool]) -> Self {
        self.confirm_answers
            .lock()
            .unwrap()
            .extend(answers.iter().copied().map(Some));
        self
    }

    pub fn with_inputs(self, answers: &[&str]) -> Self {
        self.input_answers
            .lock()
            .unwrap()
            .extend(answers.iter().map(|a| Some((*a).to_string())));
        self
    }

    pub fn get_confirm_calls(&self) -> Vec<String> {
        self.confirm_calls.lock().unwrap().clone()
    }

    pub fn get_input_calls(&self) -> Vec<(String, Option<String>)> {
        self.input_calls.lock().unwrap().clone()
    }
}

impl Prompter for MockPrompter {
    fn confirm(&self, question: &str) -> Result<Option<bool>> {
        self.confirm_calls
            .lock()
            .unwrap()
            .push(question.to_string());
        Ok(self.confirm_answers.lock().unwrap().pop_front().flatten())
    }

    fn input(&self, prompt: &str, default: Option<&str>) -> Result<Option<String>> {
        self.input_calls
            .lock()
            .unwrap()
            .push((prompt.to_string(), default.map(ToString::to_string)));
        Ok(self.input_answers.lock().unwrap().pop_front().flatten())
    }
}

/// Progress callback recording one line per event
#[derive(Default)]
pub struct RecordingProgress {
    events: Mutex<Vec<String>>,
}

impl RecordingProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    fn push(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }
}

#[async_trait]
impl ProgressCallback for RecordingProgress {
    async fn on_found(&self, count: usize) {
        self.push(format!("found {count}"));
    }

    async fn on_filtered(&self, dependency: &str, count: usize) {
        self.push(format!("filtered {dependency} {count}"));
    }

    async fn on_skip(&self, pr: &PullRequestReference, reason: SkipReason) {
        self.push(format!("skip #{} {reason}", pr.number));
    }

    async fn on_approved(&self, pr: &PullRequestReference, update: &DependencyUpdate) {
        self.push(format!("approved #{} {update}", pr.number));
    }

    async fn on_merged(
        &self,
        pr: &PullRequestReference,
        update: &DependencyUpdate,
        sha: Option<&str>,
    ) {
        self.push(format!(
            "merged #{} {update} {}",
            pr.number,
            sha.unwrap_or("-")
        ));
    }

    async fn on_message(&self, message: &str) {
        self.push(format!("message {message}"));
    }
}
