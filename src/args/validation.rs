//! Required-field checks run once all tokens are consumed

use super::{CustomArgs, GeneratorArgs, GeneratorKind};
use crate::error::{ArgsError, ArgsResult};

/// What to do when no group versions were requested
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmptyGroupsPolicy {
    /// Accept the configuration; generation has nothing to do
    #[default]
    Allow,

    /// Fail validation
    Reject,
}

/// Checks a resolved configuration before it reaches the generation phase
#[derive(Debug, Clone, Copy)]
pub struct ConfigValidator {
    kind: GeneratorKind,
    empty_groups: EmptyGroupsPolicy,
}

impl ConfigValidator {
    pub fn new(kind: GeneratorKind) -> Self {
        Self {
            kind,
            empty_groups: EmptyGroupsPolicy::default(),
        }
    }

    pub fn with_empty_groups_policy(mut self, policy: EmptyGroupsPolicy) -> Self {
        self.empty_groups = policy;
        self
    }

    /// Stop at the first missing field
    pub fn validate(&self, generic: &GeneratorArgs, custom: &CustomArgs) -> ArgsResult<()> {
        require("output package", generic.output_package_path())?;

        if self.kind.uses_client_packages() {
            require("versioned clientset package", custom.versioned_clientset_package())?;
            require("listers package", custom.listers_package())?;
        }

        if self.empty_groups == EmptyGroupsPolicy::Reject && custom.groups().is_empty() {
            return Err(ArgsError::NoGroupVersions);
        }

        Ok(())
    }
}

fn require(field: &'static str, value: &str) -> ArgsResult<()> {
    if value.is_empty() {
        return Err(ArgsError::MissingRequiredField { field });
    }
    Ok(())
}
