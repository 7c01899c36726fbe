//! Authentication for GitHub
//!
//! The token is given either directly or as the name of an environment
//! variable holding it. Exactly one source is accepted.

use crate::error::{Error, Result};

/// Where the GitHub token comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialSource {
    /// Token passed literally
    Direct(String),
    /// Name of an environment variable holding the token
    FromEnv(String),
}

/// A resolved token. `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    /// Wrap a token
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token, for building clients only
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Secret(***)")
    }
}

/// Resolve a credential source into a token, once, at startup.
pub fn get_github_auth(source: &CredentialSource) -> Result<Secret> {
    match source {
        CredentialSource::Direct(token) => {
            if token.trim().is_empty() {
                return Err(Error::Auth("--token must not be empty".to_string()));
            }
            Ok(Secret::new(token.trim()))
        }
        CredentialSource::FromEnv(name) => {
            let token = std::env::var(name).map_err(|_| {
                Error::Auth(format!("environment variable {name} is not set"))
            })?;
            let token = token.trim();
            if token.is_empty() {
                return Err(Error::Auth(format!("environment variable {name} is empty")));
            }
            tracing::debug!(var = %name, "read GitHub token from environment");
            Ok(Secret::new(token))
        }
    }
}
