//! Arguments shared by every generator

use std::path::{Path, PathBuf};

use crate::error::{ArgsError, ArgsResult};

/// Generic generator arguments wrapped around [`CustomArgs`](super::CustomArgs)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorArgs {
    pub(crate) output_package_path: String,
    pub(crate) output_base: Option<PathBuf>,
    pub(crate) go_header_file_path: Option<PathBuf>,
    pub(crate) verify_only: bool,
    pub(crate) input_dirs: Vec<String>,
}

impl GeneratorArgs {
    /// Import path of the package the generated code lands in
    pub fn output_package_path(&self) -> &str {
        &self.output_package_path
    }

    pub fn output_base(&self) -> Option<&Path> {
        self.output_base.as_deref()
    }

    pub fn go_header_file_path(&self) -> Option<&Path> {
        self.go_header_file_path.as_deref()
    }

    /// Only check that existing output is up to date
    pub fn verify_only(&self) -> bool {
        self.verify_only
    }

    /// Packages the generation phase reads type declarations from
    pub fn input_dirs(&self) -> &[String] {
        &self.input_dirs
    }
}

/// Expand `~` and environment variables in a path option
pub(crate) fn expand_path(flag: &'static str, raw: &str) -> ArgsResult<PathBuf> {
    shellexpand::full(raw)
        .map(|expanded| PathBuf::from(expanded.as_ref()))
        .map_err(|e| ArgsError::malformed(flag, raw, e))
}
