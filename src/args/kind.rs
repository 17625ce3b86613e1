//! Generator variants and their defaults

use std::fmt;

use super::DEFAULT_INPUT_BASE;

pub const DEFAULT_INFORMERS_PACKAGE: &str = "k8s.io/kubernetes/pkg/client/informers/informers_generated";
pub const DEFAULT_VERSIONED_CLIENTSET_PACKAGE: &str =
    "k8s.io/kubernetes/pkg/client/clientset_generated/clientset";
pub const DEFAULT_INTERNAL_CLIENTSET_PACKAGE: &str =
    "k8s.io/kubernetes/pkg/client/clientset_generated/internalclientset";
pub const DEFAULT_LISTERS_PACKAGE: &str = "k8s.io/kubernetes/pkg/client/listers";

/// Which accessor generator the arguments are resolved for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeneratorKind {
    /// Emits shared informers; needs the clientset and listers packages
    Informer,

    /// Emits listers only
    Lister,
}

impl GeneratorKind {
    pub fn name(&self) -> &'static str {
        match self {
            GeneratorKind::Informer => "informer-gen",
            GeneratorKind::Lister => "lister-gen",
        }
    }

    pub fn default_output_package(&self) -> &'static str {
        match self {
            GeneratorKind::Informer => DEFAULT_INFORMERS_PACKAGE,
            GeneratorKind::Lister => DEFAULT_LISTERS_PACKAGE,
        }
    }

    pub fn default_input_base(&self) -> &'static str {
        DEFAULT_INPUT_BASE
    }

    /// Whether the generator consumes the clientset and listers packages
    pub fn uses_client_packages(&self) -> bool {
        matches!(self, GeneratorKind::Informer)
    }

    pub fn default_versioned_clientset_package(&self) -> &'static str {
        if self.uses_client_packages() {
            DEFAULT_VERSIONED_CLIENTSET_PACKAGE
        } else {
            ""
        }
    }

    pub fn default_internal_clientset_package(&self) -> &'static str {
        if self.uses_client_packages() {
            DEFAULT_INTERNAL_CLIENTSET_PACKAGE
        } else {
            ""
        }
    }

    pub fn default_listers_package(&self) -> &'static str {
        if self.uses_client_packages() {
            DEFAULT_LISTERS_PACKAGE
        } else {
            ""
        }
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
