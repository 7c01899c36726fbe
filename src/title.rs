//! Dependency name and version extraction from Renovate PR titles

use crate::error::{Error, Result};
use crate::types::DependencyUpdate;

const TITLE_PREFIX: &str = "Update dependency ";
const VERSION_SEPARATOR: &str = " to ";

/// Parse `Update dependency <name> to <version>`.
///
/// Without the `Update dependency ` prefix the whole text before ` to ` is
/// the name. The name keeps only the text after its last `:`, dropping
/// ecosystem or group prefixes such as `npm:`. The version is taken verbatim.
pub fn parse_title(title: &str) -> Result<DependencyUpdate> {
    let malformed = || Error::MalformedTitle(title.to_string());

    let (subject, version) = title.split_once(VERSION_SEPARATOR).ok_or_else(malformed)?;
    if version.contains(VERSION_SEPARATOR) {
        return Err(malformed());
    }

    let qualified = subject.strip_prefix(TITLE_PREFIX).unwrap_or(subject);
    let name = qualified.rsplit(':').next().unwrap_or(qualified);

    if name.is_empty() || version.is_empty() {
        return Err(malformed());
    }

    Ok(DependencyUpdate {
        name: name.to_string(),
        version: version.to_string(),
    })
}
