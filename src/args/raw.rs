//! Raw option values collected before anything is resolved

use tracing::debug;

use super::generic::expand_path;
use super::{
    collect_overrides, parse_input_token, CustomArgs, EmptyGroupsPolicy, GeneratorArgs,
    GeneratorKind, GroupVersionsBuilder, InputBaseResolver, PluralExceptions,
};
use crate::error::ArgsResult;

/// Option values exactly as given, in order of appearance.
///
/// Nothing is resolved while collecting: every `--input` token is resolved in
/// [`RawArgs::resolve`] against the final `--input-base`, wherever that flag
/// appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawArgs {
    /// Each `--input` occurrence, possibly a comma list
    pub inputs: Vec<String>,
    pub input_base: Option<String>,
    pub included_types_overrides: Vec<String>,
    /// `None` when the option was never given
    pub plural_exceptions: Option<Vec<String>>,
    pub output_package: Option<String>,
    pub output_base: Option<String>,
    pub go_header_file: Option<String>,
    pub versioned_clientset_package: Option<String>,
    pub internal_clientset_package: Option<String>,
    pub listers_package: Option<String>,
    pub single_directory: Option<bool>,
    pub verify_only: Option<bool>,
    pub require_groups: Option<bool>,
}

impl RawArgs {
    pub fn empty_groups_policy(&self) -> EmptyGroupsPolicy {
        if self.require_groups.unwrap_or(false) {
            EmptyGroupsPolicy::Reject
        } else {
            EmptyGroupsPolicy::Allow
        }
    }

    /// Resolve the collected values for a generator, filling defaults for
    /// anything not given. The first malformed token aborts resolution.
    pub fn resolve(&self, kind: GeneratorKind) -> ArgsResult<(GeneratorArgs, CustomArgs)> {
        let resolver = InputBaseResolver::new(
            self.input_base
                .as_deref()
                .unwrap_or_else(|| kind.default_input_base()),
        );
        debug!("Resolving inputs against base {}", resolver.base());

        let mut builder = GroupVersionsBuilder::new();
        for token in &self.inputs {
            for gv in parse_input_token(token)? {
                builder.add(&gv, &resolver)?;
            }
        }

        let included_types_overrides =
            collect_overrides(self.included_types_overrides.iter().map(String::as_str))?;
        let plural_exceptions = PluralExceptions::from_flag(self.plural_exceptions.as_deref())?;

        let custom = CustomArgs {
            groups: builder.build(),
            included_types_overrides,
            plural_exceptions,
            versioned_clientset_package: self
                .versioned_clientset_package
                .clone()
                .unwrap_or_else(|| kind.default_versioned_clientset_package().to_string()),
            internal_clientset_package: self
                .internal_clientset_package
                .clone()
                .unwrap_or_else(|| kind.default_internal_clientset_package().to_string()),
            listers_package: self
                .listers_package
                .clone()
                .unwrap_or_else(|| kind.default_listers_package().to_string()),
            single_directory: self.single_directory.unwrap_or(false),
        };

        let generic = GeneratorArgs {
            output_package_path: self
                .output_package
                .clone()
                .unwrap_or_else(|| kind.default_output_package().to_string()),
            output_base: self
                .output_base
                .as_deref()
                .map(|raw| expand_path("output-base", raw))
                .transpose()?,
            go_header_file_path: self
                .go_header_file
                .as_deref()
                .map(|raw| expand_path("go-header-file", raw))
                .transpose()?,
            verify_only: self.verify_only.unwrap_or(false),
            input_dirs: custom.package_dirs(),
        };

        Ok((generic, custom))
    }
}
