//! kube-codegen CLI binary

use anyhow::Result;
use tracing::error;

use kube_codegen::cli::CliApp;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let matches = CliApp::app().get_matches();

    // Initialize logging
    let default_filter = if matches.get_flag("verbose") {
        "kube_codegen=debug"
    } else {
        "kube_codegen=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    // Run the CLI application
    if let Err(e) = CliApp::run(&matches).await {
        error!("Error: {e:#}");
        std::process::exit(1);
    }

    Ok(())
}
