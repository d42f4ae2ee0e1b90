//! Write the basic HVE-Core SVG diagrams.
//!
//! ```sh
//! cargo run --bin generate-svgs -- --output-dir docs
//! ```
use clap::Parser;
use hve_assets::config::{OutputArgs, OutputConfig};
use hve_assets::diagrams::{self, Variant};
use log::info;

/// Generate the HVE-Core pipeline, quality comparison and role mapping SVGs
#[derive(Parser, Debug)]
#[command(name = "generate-svgs", version)]
struct Args {
    #[command(flatten)]
    output: OutputArgs,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = OutputConfig::from(Args::parse().output);
    info!("Generating HVE-Core SVG diagrams...");
    for diagram in diagrams::generate(Variant::Basic) {
        config.write_output(diagram.file_name, diagram.to_svg().as_bytes())?;
    }
    info!("SVG diagrams saved to: {}", config.output_dir.display());
    Ok(())
}
