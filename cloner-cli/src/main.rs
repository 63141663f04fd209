//! che-project-cloner: clone the git projects a Che workspace declares.
//!
//! # Usage
//!
//! ```text
//! CHE_WORKSPACE_ID=<id> CHE_PROJECTS_ROOT=<dir> [CHE_API=<url>] [CHE_MACHINE_TOKEN=<token>] \
//!     che-project-cloner [--lenient] [--git <program>] [--json]
//! ```
//!
//! Every environment variable can also be given as a flag.

mod clone;
mod report;

use anyhow::Result;
use clap::Parser;

use clone::CloneArgs;

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "che-project-cloner",
    version,
    about = "Clone the git projects declared by a Che workspace devfile",
    long_about = None,
)]
struct Cli {
    #[command(flatten)]
    args: CloneArgs,
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    init_tracing();
    Cli::parse().args.run()
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
