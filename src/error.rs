//! Error types for argument resolution

/// Errors raised while turning command-line tokens into a generator configuration
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgsError {
    #[error("malformed --{flag} value {token:?}: {reason}")]
    MalformedToken {
        flag: &'static str,
        token: String,
        reason: String,
    },

    #[error("group {group:?} already has version {existing:?}, cannot add {requested:?}: at most one version per group is allowed")]
    DuplicateVersionForGroup {
        group: String,
        existing: String,
        requested: String,
    },

    #[error("{field} cannot be empty")]
    MissingRequiredField { field: &'static str },

    #[error("no group versions to generate, use --input to select at least one")]
    NoGroupVersions,
}

impl ArgsError {
    pub(crate) fn malformed(flag: &'static str, token: &str, reason: impl ToString) -> Self {
        Self::MalformedToken {
            flag,
            token: token.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Result type for argument resolution
pub type ArgsResult<T> = Result<T, ArgsError>;
