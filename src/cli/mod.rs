//! CLI command implementations

use anyhow::Result;
use clap::{ArgMatches, Command};

pub mod commands;

/// Main CLI application
pub struct CliApp;

impl CliApp {
    /// Create the CLI application
    pub fn app() -> Command {
        Command::new("kube-codegen")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Resolve group/version arguments for informer and lister generators")
            .arg(
                clap::Arg::new("verbose")
                    .short('v')
                    .long("verbose")
                    .help("Enable debug logging")
                    .global(true)
                    .action(clap::ArgAction::SetTrue),
            )
            .subcommand(commands::informer_gen::command())
            .subcommand(commands::lister_gen::command())
            .subcommand(commands::info::command())
    }

    /// Run the CLI application
    pub async fn run(matches: &ArgMatches) -> Result<()> {
        match matches.subcommand() {
            Some(("informer-gen", sub_matches)) => commands::informer_gen::run(sub_matches).await,
            Some(("lister-gen", sub_matches)) => commands::lister_gen::run(sub_matches).await,
            Some(("info", sub_matches)) => commands::info::run(sub_matches).await,
            _ => {
                // No subcommand provided, show help
                let _ = Self::app().print_help();
                Ok(())
            }
        }
    }
}

/// Common CLI utilities
pub mod utils {
    use anyhow::{anyhow, Result};
    use std::path::PathBuf;
    use tracing::debug;

    use crate::config::ArgsFile;

    /// Get the defaults file path from arguments or the default locations
    pub fn get_config_path(matches: &clap::ArgMatches) -> Result<Option<PathBuf>> {
        if let Some(config_path) = matches.get_one::<String>("config") {
            let path = PathBuf::from(shellexpand::full(config_path)?.as_ref());
            if !path.exists() {
                return Err(anyhow!("Configuration file not found: {}", path.display()));
            }
            return Ok(Some(path));
        }

        let mut default_paths = vec![
            PathBuf::from(".kube-codegen.yaml"),
            PathBuf::from(".kube-codegen.yml"),
            PathBuf::from("kube-codegen.yaml"),
            PathBuf::from("kube-codegen.yml"),
        ];
        if let Some(config_dir) = dirs::config_dir() {
            default_paths.push(config_dir.join("kube-codegen").join("config.yaml"));
        }

        Ok(default_paths.into_iter().find(|path| path.exists()))
    }

    /// Load the defaults file, if there is one
    pub fn load_args_file(matches: &clap::ArgMatches) -> Result<Option<ArgsFile>> {
        match get_config_path(matches)? {
            Some(path) => {
                debug!("Loading option defaults from {}", path.display());
                ArgsFile::from_file(&path).map(Some)
            }
            None => Ok(None),
        }
    }
}
