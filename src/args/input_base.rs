//! Base path against which bare group/version tokens resolve

use kube_codegen_types::{join_package_path, GroupVersion};

/// Base path used by both generators when `--input-base` is not given
pub const DEFAULT_INPUT_BASE: &str = "k8s.io/kubernetes/pkg/apis";

/// Resolves group versions to the import path of their types package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputBaseResolver {
    base: String,
}

impl Default for InputBaseResolver {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT_BASE)
    }
}

impl InputBaseResolver {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Package path for a group version: `<base>/<group>/<version>`
    pub fn resolve(&self, gv: &GroupVersion) -> String {
        join_package_path([self.base.as_str(), gv.group.as_str(), gv.version.as_str()])
    }
}
