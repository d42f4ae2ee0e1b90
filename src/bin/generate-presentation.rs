//! Build the 16-slide HVE-Core and RPI presentation.
//!
//! The PNG art is rendered into `--assets-dir` first, then embedded in the
//! deck written to `--output-dir`.
use clap::Parser;
use hve_assets::config::{OutputArgs, OutputConfig};
use hve_assets::deck::{self, Deck};
use log::info;

/// Generate the 16-slide HVE-Core and RPI presentation
#[derive(Parser, Debug)]
#[command(name = "generate-presentation", version)]
struct Args {
    #[command(flatten)]
    output: OutputArgs,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = OutputConfig::from(Args::parse().output);
    info!("Generating {:?} presentation...", Deck::Classic);
    let path = deck::generate(Deck::Classic, &config)?;
    info!("Saved presentation: {}", path.display());
    Ok(())
}
