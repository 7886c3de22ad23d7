//! solvedocs - regenerate documentation for a solutions repository.
//!
//! # Usage
//!
//! ```bash
//! # Refresh both README tables
//! solvedocs readme
//!
//! # Rebuild the site pages and mkdocs.yml nav
//! solvedocs site
//!
//! # Everything, without touching the network
//! solvedocs all --offline
//!
//! # Inspect the metadata cache
//! solvedocs cache --json
//! ```

use clap::Parser;
use solvedocs::cli::{self, Cli};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!("{error}");
            ExitCode::FAILURE
        }
    }
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: bool) {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = if verbose {
        EnvFilter::new("solvedocs=debug,solvedocs_client=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("solvedocs=info,warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
