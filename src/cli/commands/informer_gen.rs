//! informer-gen command implementation

use anyhow::Result;
use clap::{ArgMatches, Command};

use super::common;
use crate::args::GeneratorKind;
use crate::generation::PlanReporter;

pub fn command() -> Command {
    common::with_common_args(
        Command::new("informer-gen").about("Resolve arguments for the shared informer generator"),
    )
    .arg(
        clap::Arg::new("internal-clientset-package")
            .long("internal-clientset-package")
            .value_name("PACKAGE")
            .help("Full package name of the internal clientset to use"),
    )
    .arg(
        clap::Arg::new("versioned-clientset-package")
            .long("versioned-clientset-package")
            .value_name("PACKAGE")
            .help("Full package name of the versioned clientset to use"),
    )
    .arg(
        clap::Arg::new("listers-package")
            .long("listers-package")
            .value_name("PACKAGE")
            .help("Full package name of the listers to use"),
    )
    .arg(common::switch(
        "single-directory",
        "Omit the intermediate \"internalversion\" and \"externalversions\" subdirectories",
    ))
}

pub async fn run(matches: &ArgMatches) -> Result<()> {
    common::run_generator(GeneratorKind::Informer, matches, &PlanReporter).await
}
