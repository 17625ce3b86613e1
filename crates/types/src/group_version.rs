//! API group/version identifiers and the `group/version` grammar

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Identifies one API surface by group and version
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GroupVersion {
    /// API group, empty for the core group
    pub group: String,

    /// API version
    pub version: String,
}

/// Reasons a `group/version` string can be rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseGroupVersionError {
    #[error("group/version cannot be empty")]
    Empty,

    #[error("expected at most one '/' but found {0}")]
    TooManySeparators(usize),

    #[error("version cannot be empty")]
    EmptyVersion,

    #[error("whitespace is not allowed")]
    Whitespace,
}

impl GroupVersion {
    pub fn new(group: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            version: version.into(),
        }
    }

    /// Whether this is the unnamed core group
    pub fn is_core(&self) -> bool {
        self.group.is_empty()
    }

    /// Parse `group/version`, or a bare `version` for the core group.
    ///
    /// The split happens on the first `/`; any further `/` makes the split
    /// ambiguous and is rejected.
    pub fn parse(raw: &str) -> Result<Self, ParseGroupVersionError> {
        if raw.is_empty() {
            return Err(ParseGroupVersionError::Empty);
        }
        if raw.chars().any(char::is_whitespace) {
            return Err(ParseGroupVersionError::Whitespace);
        }

        let separators = raw.matches('/').count();
        if separators > 1 {
            return Err(ParseGroupVersionError::TooManySeparators(separators));
        }

        let (group, version) = raw.split_once('/').unwrap_or(("", raw));
        if version.is_empty() {
            return Err(ParseGroupVersionError::EmptyVersion);
        }

        Ok(Self::new(group, version))
    }
}

impl FromStr for GroupVersion {
    type Err = ParseGroupVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for GroupVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_core() {
            write!(f, "{}", self.version)
        } else {
            write!(f, "{}/{}", self.group, self.version)
        }
    }
}
