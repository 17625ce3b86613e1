//! Argument resolution for Kubernetes informer and lister generators
//!
//! Turns `--input`, `--input-base`, `--included-types-overrides` and
//! `--plural-exceptions` values into the ordered group/version model that the
//! code generation phase consumes.

pub mod args;
pub mod cli;
pub mod config;
pub mod error;
pub mod generation;

pub use args::{
    ConfigValidator, CustomArgs, EmptyGroupsPolicy, GeneratorArgs, GeneratorKind,
    IncludedTypesOverrides, PluralExceptions, RawArgs,
};
pub use config::ArgsFile;
pub use error::{ArgsError, ArgsResult};
pub use generation::{GenerationInput, GenerationPhase, PlanReporter};
pub use kube_codegen_types::{GroupVersion, GroupVersions, PackageVersion};
