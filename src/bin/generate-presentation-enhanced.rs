//! Build the 20-slide enhanced HVE-Core presentation.
//!
//! The PNG art is rendered into `--assets-dir` first, then embedded in the
//! deck written to `--output-dir`.
use clap::Parser;
use hve_assets::config::{OutputArgs, OutputConfig};
use hve_assets::deck::{self, Deck};
use log::info;

/// Generate the 20-slide enhanced HVE-Core presentation
#[derive(Parser, Debug)]
#[command(name = "generate-presentation-enhanced", version)]
struct Args {
    #[command(flatten)]
    output: OutputArgs,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = OutputConfig::from(Args::parse().output);
    info!("Generating {:?} presentation...", Deck::Enhanced);
    let path = deck::generate(Deck::Enhanced, &config)?;
    info!("Saved presentation: {}", path.display());
    Ok(())
}
