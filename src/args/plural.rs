//! Pluralization exception table

use indexmap::IndexMap;

use crate::error::{ArgsError, ArgsResult};

pub const PLURAL_EXCEPTIONS_FLAG: &str = "plural-exceptions";

/// Applied when `--plural-exceptions` is not given at all
pub const DEFAULT_PLURAL_EXCEPTIONS: &[&str] = &["Endpoints:Endpoints"];

/// Type name to plural form overrides, consumed by the naming system
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluralExceptions(IndexMap<String, String>);

impl Default for PluralExceptions {
    fn default() -> Self {
        Self(
            DEFAULT_PLURAL_EXCEPTIONS
                .iter()
                .filter_map(|entry| entry.split_once(':'))
                .map(|(singular, plural)| (singular.to_string(), plural.to_string()))
                .collect(),
        )
    }
}

impl PluralExceptions {
    /// Parse `Type:PluralType` definitions; each value may itself be a comma
    /// list. Later definitions of a type replace earlier ones.
    pub fn parse<S: AsRef<str>>(values: &[S]) -> ArgsResult<Self> {
        let mut exceptions = IndexMap::new();

        for value in values.iter().map(AsRef::as_ref) {
            if value.is_empty() {
                continue;
            }
            for entry in value.split(',') {
                let (singular, plural) = entry
                    .split_once(':')
                    .filter(|(s, p)| !s.is_empty() && !p.is_empty() && !p.contains(':'))
                    .ok_or_else(|| {
                        ArgsError::malformed(
                            PLURAL_EXCEPTIONS_FLAG,
                            value,
                            format!("{entry:?} is not in Type:PluralType format"),
                        )
                    })?;
                exceptions.insert(singular.to_string(), plural.to_string());
            }
        }

        Ok(Self(exceptions))
    }

    /// Parse the flag values, falling back to the defaults when unset
    pub fn from_flag<S: AsRef<str>>(values: Option<&[S]>) -> ArgsResult<Self> {
        match values {
            Some(values) => Self::parse(values),
            None => Ok(Self::default()),
        }
    }

    pub fn get(&self, type_name: &str) -> Option<&str> {
        self.0.get(type_name).map(String::as_str)
    }

    pub fn as_map(&self) -> &IndexMap<String, String> {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
