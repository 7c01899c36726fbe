//! Command-line interface

mod progress;
mod prompt;
pub mod style;

use crate::cli::progress::CliProgress;
use crate::cli::prompt::DialoguerPrompter;
use crate::cli::style::{Stylize, check};
use anstream::println;
use anyhow::Context;
use clap::{ArgGroup, Parser};
use renovate_merge::auth::{CredentialSource, get_github_auth};
use renovate_merge::config::{Overrides, load_config, resolve_settings};
use renovate_merge::error::{Error, Result};
use renovate_merge::platform::GitHubService;
use renovate_merge::session::{Session, Transport};
use renovate_merge::triage::{TriageOptions, TriageSummary, run_triage};
use renovate_merge::types::FilterPolicy;
use std::path::PathBuf;

/// Approve and merge Renovate dependency-update PRs awaiting your review
#[derive(Parser, Debug)]
#[command(name = "renovate-merge", version, about)]
#[command(group(
    ArgGroup::new("credential")
        .required(true)
        .args(["token", "token_env"])
))]
pub struct Args {
    /// GitHub token
    #[arg(long, value_name = "TOKEN")]
    pub token: Option<String>,

    /// Name of an environment variable holding the GitHub token
    #[arg(long, value_name = "VAR")]
    pub token_env: Option<String>,

    /// Organization to search
    #[arg(short, long, value_name = "ORG")]
    pub org: Option<String>,

    /// User whose review was requested
    #[arg(short, long, value_name = "LOGIN")]
    pub user: Option<String>,

    /// PR author [default: app/renovate]
    #[arg(short, long, value_name = "LOGIN")]
    pub author: Option<String>,

    /// Only process PRs whose title contains this text (case-sensitive)
    #[arg(short, long, value_name = "NAME")]
    pub dependency: Option<String>,

    /// Approve matching PRs without asking (requires --dependency)
    #[arg(short = 'y', long, requires = "dependency")]
    pub auto_approve: bool,

    /// Default review comment
    #[arg(short, long, value_name = "TEXT")]
    pub comment: Option<String>,

    /// Config file [default: <config dir>/renovate-merge/config.toml]
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Token source chosen on the command line
    pub fn credential_source(&self) -> Result<CredentialSource> {
        match (&self.token, &self.token_env) {
            (Some(token), _) => Ok(CredentialSource::Direct(token.clone())),
            (None, Some(var)) => Ok(CredentialSource::FromEnv(var.clone())),
            (None, None) => Err(Error::Auth(
                "one of --token or --token-env is required".to_string(),
            )),
        }
    }

    /// Dependency filter, with auto-approval only alongside it
    pub fn filter_policy(&self) -> Option<FilterPolicy> {
        self.dependency.as_ref().map(|dependency| FilterPolicy {
            dependency: dependency.clone(),
            auto_approve: self.auto_approve,
        })
    }

    fn overrides(&self) -> Overrides {
        Overrides {
            organization: self.org.clone(),
            user: self.user.clone(),
            author: self.author.clone(),
            default_comment: self.comment.clone(),
        }
    }
}

/// Run one triage pass with the given arguments
pub fn run(args: &Args) -> anyhow::Result<()> {
    let token = get_github_auth(&args.credential_source()?)?;
    let file_config = load_config(args.config.as_deref())?;
    let settings = resolve_settings(file_config, args.overrides())?;

    let options = TriageOptions {
        policy: args.filter_policy(),
        default_comment: settings.default_comment,
        ..TriageOptions::new(settings.criteria)
    };

    let transport = Session::acquire(Transport::new().context("starting network transport")?);
    let summary = transport.block_on(async {
        let platform = GitHubService::new(&token, settings.host.as_deref())?;
        let progress = CliProgress::new();
        run_triage(&platform, &DialoguerPrompter, &progress, &options).await
    })?;
    transport.close();

    print_summary(&summary);
    Ok(())
}

fn print_summary(summary: &TriageSummary) {
    println!();
    println!(
        "{} {} merged, {} already merged, {} not mergeable, {} declined",
        check(),
        summary.merged.to_string().emphasis(),
        summary.already_merged,
        summary.not_mergeable,
        summary.declined
    );
}
