//! Hand-off from argument resolution to the generation phase

use anyhow::Result;
use async_trait::async_trait;
use indexmap::IndexMap;
use kube_codegen_types::GroupVersion;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::args::{CustomArgs, GeneratorArgs, GeneratorKind, IncludedTypesOverrides};

/// Everything the generation phase gets to see of the resolved arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationInput {
    pub kind: GeneratorKind,
    pub output_package_path: String,
    pub output_base: Option<PathBuf>,
    pub go_header_file_path: Option<PathBuf>,
    pub verify_only: bool,
    pub input_dirs: Vec<String>,
    pub group_version_packages: IndexMap<GroupVersion, String>,
    pub included_types_overrides: IncludedTypesOverrides,
    pub plural_exceptions: IndexMap<String, String>,
    pub versioned_clientset_package: String,
    pub internal_clientset_package: String,
    pub listers_package: String,
    pub single_directory: bool,
}

impl GenerationInput {
    pub fn new(kind: GeneratorKind, generic: &GeneratorArgs, custom: &CustomArgs) -> Self {
        Self {
            kind,
            output_package_path: generic.output_package_path().to_string(),
            output_base: generic.output_base().map(PathBuf::from),
            go_header_file_path: generic.go_header_file_path().map(PathBuf::from),
            verify_only: generic.verify_only(),
            input_dirs: generic.input_dirs().to_vec(),
            group_version_packages: custom.group_version_packages(),
            included_types_overrides: custom.included_types_overrides().clone(),
            plural_exceptions: custom.plural_exceptions().as_map().clone(),
            versioned_clientset_package: custom.versioned_clientset_package().to_string(),
            internal_clientset_package: custom.internal_clientset_package().to_string(),
            listers_package: custom.listers_package().to_string(),
            single_directory: custom.single_directory(),
        }
    }
}

/// The code generation engine that consumes resolved arguments
#[async_trait]
pub trait GenerationPhase: Send + Sync {
    async fn execute(&self, input: &GenerationInput) -> Result<()>;
}

/// Generation phase that only reports what would be generated
#[derive(Debug, Default)]
pub struct PlanReporter;

#[async_trait]
impl GenerationPhase for PlanReporter {
    async fn execute(&self, input: &GenerationInput) -> Result<()> {
        info!(
            "{}: {} group versions into {}",
            input.kind,
            input.group_version_packages.len(),
            input.output_package_path
        );

        if input.group_version_packages.is_empty() {
            info!("No group versions requested, nothing to generate");
            return Ok(());
        }

        for (gv, package) in &input.group_version_packages {
            match input.included_types_overrides.get(gv) {
                Some(types) => info!("  {} from {} (only {})", gv, package, types.join(", ")),
                None => info!("  {} from {}", gv, package),
            }
        }

        if input.kind.uses_client_packages() {
            debug!("Versioned clientset: {}", input.versioned_clientset_package);
            debug!("Internal clientset: {}", input.internal_clientset_package);
            debug!("Listers: {}", input.listers_package);
            debug!("Single directory: {}", input.single_directory);
        }
        debug!("Plural exceptions: {:?}", input.plural_exceptions);

        if input.verify_only {
            info!("Verify-only mode, existing output is left untouched");
        }

        Ok(())
    }
}
