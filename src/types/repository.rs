//! Repository identifier parsing
//!
//! The fetcher receives the target repository from the environment, usually in
//! the `owner/name` form a CI runner exports. Full GitHub URLs are accepted too.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static HTTPS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:https?://)?github\.com/([^/]+)/([^/]+?)(?:\.git)?/?$")
        .expect("Failed to compile HTTPS regex")
});

static SIMPLE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([^/\s]+)/([^/\s]+)$").expect("Failed to compile simple regex"));

/// Owner name wrapper for type safety
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Owner(pub String);

impl Owner {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Owner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Repository name wrapper for type safety
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepositoryName(pub String);

impl RepositoryName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RepositoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A strongly-typed repository identifier for GitHub repositories
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepositoryId {
    pub owner: Owner,
    pub repository_name: RepositoryName,
}

impl RepositoryId {
    pub fn new<T1: Into<String>, T2: Into<String>>(owner: T1, name: T2) -> Self {
        Self {
            owner: Owner(owner.into()),
            repository_name: RepositoryName(name.into()),
        }
    }

    /// Parse repository identifier from various input formats
    /// - "owner/repo" - the form exported by CI runners
    /// - "https://github.com/owner/repo" - GitHub URL
    pub fn parse(input: &str) -> Result<Self, String> {
        let input_str = input.trim();

        let captures = SIMPLE_REGEX
            .captures(input_str)
            .or_else(|| HTTPS_REGEX.captures(input_str))
            .ok_or_else(|| format!("Invalid repository format: {}", input_str))?;

        match (captures.get(1), captures.get(2)) {
            (Some(owner), Some(repo)) => Ok(Self::new(owner.as_str(), repo.as_str())),
            _ => Err(format!("Invalid repository format: {}", input_str)),
        }
    }

    pub fn owner(&self) -> &Owner {
        &self.owner
    }

    pub fn repo_name(&self) -> &RepositoryName {
        &self.repository_name
    }

    /// Returns the full name (owner/repository_name format)
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repository_name)
    }

    /// REST route prefix for this repository
    pub fn api_route(&self) -> String {
        format!("/repos/{}/{}", self.owner, self.repository_name)
    }
}

impl std::fmt::Display for RepositoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.full_name())
    }
}
