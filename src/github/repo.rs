use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Repository the report is built for, parsed from `OWNER/REPO`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSpec {
    pub owner: String,
    pub name: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Repository must be in format OWNER/REPO (got '{0}')")]
pub struct RepoSpecError(pub String);

impl RepoSpec {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }
}

impl FromStr for RepoSpec {
    type Err = RepoSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split('/').collect();
        match parts.as_slice() {
            [owner, name] if !owner.is_empty() && !name.is_empty() => {
                Ok(RepoSpec::new(*owner, *name))
            }
            _ => Err(RepoSpecError(s.to_string())),
        }
    }
}

impl fmt::Display for RepoSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
