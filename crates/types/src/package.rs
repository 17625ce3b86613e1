//! Packages holding the type declarations of each group version

use serde::{Deserialize, Serialize};

use crate::GroupVersion;

/// A version of a group together with the package that declares its types
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageVersion {
    /// API version
    pub version: String,

    /// Import path of the package with the types
    pub package: String,
}

impl PackageVersion {
    pub fn new(version: impl Into<String>, package: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            package: package.into(),
        }
    }
}

/// A group with its versions, in the order they were requested
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupVersions {
    /// API group, empty for the core group
    pub group: String,

    /// Versions in insertion order; no two entries share a version
    pub versions: Vec<PackageVersion>,
}

impl GroupVersions {
    pub fn new(group: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            versions: Vec::new(),
        }
    }

    /// Find the entry recorded for a version
    pub fn version(&self, version: &str) -> Option<&PackageVersion> {
        self.versions.iter().find(|v| v.version == version)
    }

    /// Iterate over the group versions of this group
    pub fn group_versions(&self) -> impl Iterator<Item = GroupVersion> + '_ {
        self.versions
            .iter()
            .map(move |v| GroupVersion::new(self.group.clone(), v.version.clone()))
    }
}

/// Join import path segments with `/`.
///
/// Empty segments and `.` are skipped, `..` drops the previous segment and
/// repeated slashes collapse, so `join_package_path(["k8s.io/api/", "", "v1"])`
/// yields `k8s.io/api/v1`.
pub fn join_package_path<'a, I>(segments: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut parts: Vec<&str> = Vec::new();
    for part in segments.into_iter().flat_map(|s| s.split('/')) {
        match part {
            "" | "." => {}
            ".." => {
                parts.pop();
            }
            _ => parts.push(part),
        }
    }
    parts.join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(&["k8s.io/kubernetes/pkg/apis", "apps", "v1"], "k8s.io/kubernetes/pkg/apis/apps/v1")]
    #[case(&["k8s.io/api/", "", "v1"], "k8s.io/api/v1")]
    #[case(&["", "apps", "v1"], "apps/v1")]
    #[case(&["example.com//apis/./x/..", "g", "v"], "example.com/apis/g/v")]
    fn test_join_package_path(#[case] segments: &[&str], #[case] expected: &str) {
        assert_eq!(join_package_path(segments.iter().copied()), expected);
    }

    #[test]
    fn test_group_versions_lookup() {
        let mut group = GroupVersions::new("apps");
        group
            .versions
            .push(PackageVersion::new("v1", "k8s.io/api/apps/v1"));

        assert_eq!(
            group.version("v1").map(|v| v.package.as_str()),
            Some("k8s.io/api/apps/v1")
        );
        assert!(group.version("v2").is_none());
        assert_eq!(
            group.group_versions().collect::<Vec<_>>(),
            vec![GroupVersion::new("apps", "v1")]
        );
    }
}
