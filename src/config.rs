//! Output locations shared by the generator binaries.
//!
//! With no flags every binary writes where the documentation expects its
//! assets: diagrams and decks under `docs/`, intermediate PNG art under
//! `.copilot-tracking/presentation-assets/`.
use crate::common::Result;
use clap::Args;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT_DIR: &str = "docs";
pub const DEFAULT_ASSETS_DIR: &str = ".copilot-tracking/presentation-assets";

/// Output directory flags, flattened into each binary's parser.
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Directory the generated SVG and PPTX files are written to
    #[arg(long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Directory for the PNG art embedded in the decks
    #[arg(long, value_name = "DIR", default_value = DEFAULT_ASSETS_DIR)]
    pub assets_dir: PathBuf,
}

/// Resolved output paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    pub output_dir: PathBuf,
    pub assets_dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
        }
    }
}

impl From<OutputArgs> for OutputConfig {
    fn from(args: OutputArgs) -> Self {
        Self {
            output_dir: args.output_dir,
            assets_dir: args.assets_dir,
        }
    }
}

impl OutputConfig {
    /// Write a file into the output directory.
    pub fn write_output(&self, name: &str, bytes: &[u8]) -> Result<PathBuf> {
        write_output(&self.output_dir, name, bytes)
    }

    /// Write a file into the assets directory.
    pub fn write_asset(&self, name: &str, bytes: &[u8]) -> Result<PathBuf> {
        write_output(&self.assets_dir, name, bytes)
    }
}

/// Write `bytes` to `dir/name`, creating `dir` first.
///
/// An existing file is overwritten.
pub fn write_output(dir: &Path, name: &str, bytes: &[u8]) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(name);
    fs::write(&path, bytes)?;
    info!("wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Cli {
        #[command(flatten)]
        output: OutputArgs,
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["bin"]);
        assert_eq!(OutputConfig::from(cli.output), OutputConfig::default());
    }

    #[test]
    fn test_flags_override() {
        let cli = Cli::parse_from(["bin", "--output-dir", "out", "--assets-dir", "art"]);
        let config = OutputConfig::from(cli.output);
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.assets_dir, PathBuf::from("art"));
    }

    #[test]
    fn test_write_creates_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");

        let path = write_output(&nested, "x.svg", b"first").unwrap();
        assert_eq!(path, nested.join("x.svg"));
        write_output(&nested, "x.svg", b"second").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"second");
    }
}
