//! slime-shapes-cli
//!
//! The cli interface is not (yet) stable and could change at any time.

// Modules
pub(crate) mod cli;
pub(crate) mod generate;
pub(crate) mod render;
pub(crate) mod validators;

use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    smol::block_on(async { cli::run().await })
}
