//! lister-gen command implementation

use anyhow::Result;
use clap::{ArgMatches, Command};

use super::common;
use crate::args::GeneratorKind;
use crate::generation::PlanReporter;

pub fn command() -> Command {
    common::with_common_args(Command::new("lister-gen").about("Resolve arguments for the lister generator"))
}

pub async fn run(matches: &ArgMatches) -> Result<()> {
    common::run_generator(GeneratorKind::Lister, matches, &PlanReporter).await
}
