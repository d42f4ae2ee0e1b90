//! Build the enhanced HVE-Core presentation on a light theme.
//!
//! The PNG art is rendered into `--assets-dir` first, then embedded in the
//! deck written to `--output-dir`.
use clap::Parser;
use hve_assets::config::{OutputArgs, OutputConfig};
use hve_assets::deck::{self, Deck};
use log::info;

/// Generate the enhanced HVE-Core presentation on a light theme
#[derive(Parser, Debug)]
#[command(name = "generate-presentation-enhanced-light", version)]
struct Args {
    #[command(flatten)]
    output: OutputArgs,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = OutputConfig::from(Args::parse().output);
    info!("Generating {:?} presentation...", Deck::EnhancedLight);
    let path = deck::generate(Deck::EnhancedLight, &config)?;
    info!("Saved presentation: {}", path.display());
    Ok(())
}
