//! Options and run loop shared by the generator commands

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use tracing::{debug, info};

use crate::args::{ConfigValidator, GeneratorKind, RawArgs};
use crate::cli::utils;
use crate::generation::{GenerationInput, GenerationPhase};

/// Add the options every generator accepts
pub fn with_common_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("input")
                .long("input")
                .value_name("GROUP/VERSION")
                .help("group/versions to generate for, at most one version per group, e.g. \"group1/version1,group2/version2\"")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("input-base")
                .long("input-base")
                .value_name("PATH")
                .help("Base path to look for the API groups"),
        )
        .arg(
            Arg::new("included-types-overrides")
                .long("included-types-overrides")
                .value_name("GROUP/VERSION=TYPES")
                .help("Only generate the listed types for a group version, e.g. \"apps/v1=Deployment,StatefulSet\"")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("plural-exceptions")
                .long("plural-exceptions")
                .value_name("TYPE:PLURAL")
                .help("Comma separated plural exceptions in Type:PluralType format [default: Endpoints:Endpoints]")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("output-package")
                .short('p')
                .long("output-package")
                .value_name("PACKAGE")
                .help("Package the generated code is written to"),
        )
        .arg(
            Arg::new("output-base")
                .short('o')
                .long("output-base")
                .value_name("DIR")
                .help("Output base directory"),
        )
        .arg(
            Arg::new("go-header-file")
                .long("go-header-file")
                .value_name("FILE")
                .help("File containing the boilerplate header for generated files"),
        )
        .arg(switch("verify-only", "Only verify that existing output is up to date"))
        .arg(switch("require-groups", "Fail when no group versions are selected"))
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("YAML file with option defaults"),
        )
}

/// Boolean option taking an optional value, so `--name=false` can override
/// the defaults file
pub fn switch(id: &'static str, help: &'static str) -> Arg {
    Arg::new(id)
        .long(id)
        .value_name("BOOL")
        .help(help)
        .num_args(0..=1)
        .require_equals(true)
        .default_missing_value("true")
        .value_parser(clap::value_parser!(bool))
        .action(ArgAction::Set)
}

/// Collect option values verbatim, in order of appearance
pub fn raw_args(matches: &ArgMatches) -> RawArgs {
    RawArgs {
        inputs: many(matches, "input").unwrap_or_default(),
        input_base: one(matches, "input-base"),
        included_types_overrides: many(matches, "included-types-overrides").unwrap_or_default(),
        plural_exceptions: many(matches, "plural-exceptions"),
        output_package: one(matches, "output-package"),
        output_base: one(matches, "output-base"),
        go_header_file: one(matches, "go-header-file"),
        versioned_clientset_package: one(matches, "versioned-clientset-package"),
        internal_clientset_package: one(matches, "internal-clientset-package"),
        listers_package: one(matches, "listers-package"),
        single_directory: flag(matches, "single-directory"),
        verify_only: flag(matches, "verify-only"),
        require_groups: flag(matches, "require-groups"),
    }
}

/// Resolve, validate and hand the arguments to the generation phase
pub async fn run_generator(
    kind: GeneratorKind,
    matches: &ArgMatches,
    phase: &dyn GenerationPhase,
) -> Result<()> {
    info!("Resolving {} arguments", kind);

    let mut raw = raw_args(matches);
    if let Some(file) = utils::load_args_file(matches)? {
        file.fill(&mut raw);
    }

    let (generic, custom) = raw
        .resolve(kind)
        .context("failed to parse arguments")?;
    ConfigValidator::new(kind)
        .with_empty_groups_policy(raw.empty_groups_policy())
        .validate(&generic, &custom)
        .context("invalid arguments")?;

    let input = GenerationInput::new(kind, &generic, &custom);
    phase.execute(&input).await?;

    debug!("Completed successfully.");
    Ok(())
}

fn one(matches: &ArgMatches, id: &str) -> Option<String> {
    // generator-specific options are only defined on some commands
    matches.try_get_one::<String>(id).ok().flatten().cloned()
}

fn many(matches: &ArgMatches, id: &str) -> Option<Vec<String>> {
    matches
        .try_get_many::<String>(id)
        .ok()
        .flatten()
        .map(|values| values.cloned().collect())
}

fn flag(matches: &ArgMatches, id: &str) -> Option<bool> {
    matches
        .try_get_one::<bool>(id)
        .ok()
        .flatten()
        .copied()
}
