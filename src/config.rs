//! Configuration file and settings resolution
//!
//! Settings come from an optional TOML file, overridden by command-line
//! flags. The file never stores the token.

use crate::error::{Error, Result};
use crate::search::SearchCriteria;
use crate::types::DEFAULT_AUTHOR;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory name under the platform config directory
const CONFIG_DIR: &str = "renovate-merge";

/// Config filename
const CONFIG_FILE: &str = "config.toml";

/// Contents of `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Organization to search
    pub organization: Option<String>,
    /// Reviewer whose requests are searched
    pub user: Option<String>,
    /// PR author
    pub author: Option<String>,
    /// Comment offered when approving
    pub default_comment: Option<String>,
    /// GitHub Enterprise host
    pub host: Option<String>,
}

/// Values given on the command line
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// `--org`
    pub organization: Option<String>,
    /// `--user`
    pub user: Option<String>,
    /// `--author`
    pub author: Option<String>,
    /// `--comment`
    pub default_comment: Option<String>,
}

/// Fully resolved settings for a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// What to search for
    pub criteria: SearchCriteria,
    /// Comment offered when approving
    pub default_comment: Option<String>,
    /// GitHub Enterprise host
    pub host: Option<String>,
}

/// Default config path: `<config dir>/renovate-merge/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the config file.
///
/// An explicit path must exist. The default path may be absent, in which
/// case an empty config is returned.
pub fn load_config(explicit: Option<&Path>) -> Result<FileConfig> {
    let (path, required) = match explicit {
        Some(path) => (path.to_path_buf(), true),
        None => match default_config_path() {
            Some(path) => (path, false),
            None => return Ok(FileConfig::default()),
        },
    };

    if !path.exists() {
        if required {
            return Err(Error::Config(format!("{} does not exist", path.display())));
        }
        return Ok(FileConfig::default());
    }

    let content = fs::read_to_string(&path)
        .map_err(|e| Error::Config(format!("failed to read {}: {e}", path.display())))?;
    let config: FileConfig = toml::from_str(&content)
        .map_err(|e| Error::Config(format!("failed to parse {}: {e}", path.display())))?;

    tracing::debug!(path = %path.display(), "loaded config file");
    Ok(config)
}

/// Merge file values with command-line overrides.
pub fn resolve_settings(file: FileConfig, overrides: Overrides) -> Result<Settings> {
    let organization = non_blank(overrides.organization.or(file.organization))
        .ok_or_else(|| Error::Config("organization is required (--org)".to_string()))?;
    let reviewer = non_blank(overrides.user.or(file.user))
        .ok_or_else(|| Error::Config("reviewing user is required (--user)".to_string()))?;
    let author = non_blank(overrides.author.or(file.author))
        .unwrap_or_else(|| DEFAULT_AUTHOR.to_string());

    Ok(Settings {
        criteria: SearchCriteria {
            organization,
            author,
            reviewer,
        },
        default_comment: overrides.default_comment.or(file.default_comment),
        host: non_blank(file.host),
    })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
