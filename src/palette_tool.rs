use clap::Parser;
use palette_curator::cli::{run, Cli};
use palette_curator::PaletteError;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), PaletteError> {
    // stdout carries the palette, diagnostics go to stderr
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    run(cli)
}
