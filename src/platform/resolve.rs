//! Repository coordinates from API repository URLs

use crate::error::{Error, Result};
use crate::types::RepositoryCoordinate;
use url::Url;

const REPOS_MARKER: &str = "/repos/";

/// Extract `(owner, repo)` from a URL such as
/// `https://api.github.com/repos/acme/widgets`.
///
/// The path after `/repos/` must hold exactly two non-empty segments.
pub fn parse_repository_url(repository_url: Option<&str>) -> Result<RepositoryCoordinate> {
    let raw = repository_url
        .ok_or_else(|| Error::InvalidRepositoryUrl("repository URL is missing".to_string()))?;

    let url =
        Url::parse(raw).map_err(|e| Error::InvalidRepositoryUrl(format!("{raw}: {e}")))?;
    let path = url.path();

    let start = path
        .find(REPOS_MARKER)
        .ok_or_else(|| Error::InvalidRepositoryUrl(format!("{raw}: no {REPOS_MARKER} segment")))?;
    let remainder = &path[start + REPOS_MARKER.len()..];

    let segments: Vec<&str> = remainder.split('/').collect();
    match segments.as_slice() {
        [owner, repo] if !owner.is_empty() && !repo.is_empty() => Ok(RepositoryCoordinate {
            owner: (*owner).to_string(),
            repo: (*repo).to_string(),
        }),
        _ => Err(Error::InvalidRepositoryUrl(format!(
            "{raw}: expected <owner>/<repo> after {REPOS_MARKER}"
        ))),
    }
}
