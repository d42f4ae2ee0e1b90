//! Write the enhanced HVE-Core SVG diagrams, including the D-RPI pipeline.
use clap::Parser;
use hve_assets::config::{OutputArgs, OutputConfig};
use hve_assets::diagrams::{self, Variant};
use log::info;

/// Generate the enhanced HVE-Core SVG diagrams
#[derive(Parser, Debug)]
#[command(name = "generate-enhanced-svgs", version)]
struct Args {
    #[command(flatten)]
    output: OutputArgs,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = OutputConfig::from(Args::parse().output);
    info!("Generating enhanced HVE-Core SVG diagrams...");
    let diagrams = diagrams::generate(Variant::Enhanced);
    for diagram in &diagrams {
        config.write_output(diagram.file_name, diagram.to_svg().as_bytes())?;
    }
    info!(
        "{} enhanced SVG diagrams saved to: {}",
        diagrams.len(),
        config.output_dir.display()
    );
    Ok(())
}
