//! Generator-specific arguments resolved from the command line

use indexmap::IndexMap;
use kube_codegen_types::{GroupVersion, GroupVersions};

use super::{IncludedTypesOverrides, PluralExceptions};

/// Resolved informer/lister arguments.
///
/// Built once by [`RawArgs::resolve`](super::RawArgs::resolve) and read-only
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomArgs {
    pub(crate) groups: Vec<GroupVersions>,
    pub(crate) included_types_overrides: IncludedTypesOverrides,
    pub(crate) plural_exceptions: PluralExceptions,
    pub(crate) versioned_clientset_package: String,
    pub(crate) internal_clientset_package: String,
    pub(crate) listers_package: String,
    pub(crate) single_directory: bool,
}

impl CustomArgs {
    /// Requested groups, in the order they were first seen
    pub fn groups(&self) -> &[GroupVersions] {
        &self.groups
    }

    pub fn included_types_overrides(&self) -> &IncludedTypesOverrides {
        &self.included_types_overrides
    }

    /// Allow-list for a group version, `None` when every annotated type is included
    pub fn included_types(&self, gv: &GroupVersion) -> Option<&[String]> {
        self.included_types_overrides.get(gv).map(Vec::as_slice)
    }

    pub fn plural_exceptions(&self) -> &PluralExceptions {
        &self.plural_exceptions
    }

    pub fn versioned_clientset_package(&self) -> &str {
        &self.versioned_clientset_package
    }

    pub fn internal_clientset_package(&self) -> &str {
        &self.internal_clientset_package
    }

    pub fn listers_package(&self) -> &str {
        &self.listers_package
    }

    /// Omit the intermediate `internalversion` and `externalversions` directories
    pub fn single_directory(&self) -> bool {
        self.single_directory
    }

    /// Map every group version to the package holding its types
    pub fn group_version_packages(&self) -> IndexMap<GroupVersion, String> {
        self.groups
            .iter()
            .flat_map(|group| {
                group
                    .group_versions()
                    .zip(group.versions.iter().map(|v| v.package.clone()))
            })
            .collect()
    }

    /// Every resolved package, in group/version order
    pub fn package_dirs(&self) -> Vec<String> {
        self.groups
            .iter()
            .flat_map(|group| group.versions.iter().map(|v| v.package.clone()))
            .collect()
    }
}
