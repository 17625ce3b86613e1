//! `--input` grammar and the ordered group/version model it builds

use kube_codegen_types::{GroupVersion, GroupVersions, PackageVersion};
use tracing::debug;

use super::InputBaseResolver;
use crate::error::{ArgsError, ArgsResult};

pub const INPUT_FLAG: &str = "input";

/// Parse one `--input` value into group versions.
///
/// The value may be a comma list (`apps/v1,batch/v1`). An empty value
/// selects nothing; an empty element inside a list is an error.
pub fn parse_input_token(raw: &str) -> ArgsResult<Vec<GroupVersion>> {
    if raw.is_empty() {
        return Ok(Vec::new());
    }

    raw.split(',')
        .map(|part| {
            GroupVersion::parse(part)
                .map_err(|e| ArgsError::malformed(INPUT_FLAG, raw, format!("{part:?}: {e}")))
        })
        .collect()
}

/// Accumulates group versions in first-seen group order
#[derive(Debug, Default)]
pub struct GroupVersionsBuilder {
    groups: Vec<GroupVersions>,
}

impl GroupVersionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a group version, resolving its package against `resolver`.
    ///
    /// A group holds at most one version: repeating the recorded version is a
    /// no-op, a different one fails with `DuplicateVersionForGroup`.
    pub fn add(&mut self, gv: &GroupVersion, resolver: &InputBaseResolver) -> ArgsResult<()> {
        match self.groups.iter_mut().find(|g| g.group == gv.group) {
            Some(entry) => {
                if entry.version(&gv.version).is_some() {
                    debug!("Group version {} already recorded", gv);
                    return Ok(());
                }
                let existing = entry
                    .versions
                    .first()
                    .map(|v| v.version.clone())
                    .unwrap_or_default();
                return Err(ArgsError::DuplicateVersionForGroup {
                    group: gv.group.clone(),
                    existing,
                    requested: gv.version.clone(),
                });
            }
            None => {
                let package = resolver.resolve(gv);
                debug!("Resolved {} to package {}", gv, package);

                let mut entry = GroupVersions::new(gv.group.clone());
                entry
                    .versions
                    .push(PackageVersion::new(gv.version.clone(), package));
                self.groups.push(entry);
            }
        }
        Ok(())
    }

    pub fn build(self) -> Vec<GroupVersions> {
        self.groups
    }
}
