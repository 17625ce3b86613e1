//! Info command implementation

use anyhow::Result;
use clap::{ArgMatches, Command};

use crate::args::{DEFAULT_INPUT_BASE, DEFAULT_PLURAL_EXCEPTIONS};

pub fn command() -> Command {
    Command::new("info").about("Show tool information").arg(
        clap::Arg::new("detailed")
            .short('d')
            .long("detailed")
            .help("Show detailed information")
            .action(clap::ArgAction::SetTrue),
    )
}

pub async fn run(matches: &ArgMatches) -> Result<()> {
    let detailed = matches.get_flag("detailed");

    println!("kube-codegen - group/version argument resolution for client generators");
    println!("Version: {}", env!("CARGO_PKG_VERSION"));

    if detailed {
        println!("\nDetailed Information:");
        println!("  - Generators: informer-gen, lister-gen");
        println!("  - Default input base: {DEFAULT_INPUT_BASE}");
        println!("  - Default plural exceptions: {}", DEFAULT_PLURAL_EXCEPTIONS.join(","));
        println!("  - Option defaults from .kube-codegen.yaml or --config");
    }

    Ok(())
}
