//! HVE-Core slide decks.
//!
//! Three decks share one drawing vocabulary:
//!
//! - [`Deck::Classic`]: 16 dark slides built around the RPI pipeline
//! - [`Deck::Enhanced`]: 20 dark slides adding D-RPI, field results and
//!   community slides
//! - [`Deck::EnhancedLight`]: the enhanced slides on a white theme, with
//!   shorter speaker notes
//!
//! Building a deck first renders its raster art (see [`render_assets`]) and
//! then fills one [`SlideCanvas`] per slide from the deck's slide table.
//!
//! # Examples
//!
//! ```rust,no_run
//! use hve_assets::config::OutputConfig;
//! use hve_assets::deck::{self, Deck};
//!
//! let path = deck::generate(Deck::Enhanced, &OutputConfig::default())?;
//! println!("wrote {}", path.display());
//! # Ok::<(), hve_assets::common::Error>(())
//! ```
pub mod canvas;
pub mod classic;
pub mod enhanced;
mod slides;
pub mod theme;

pub use canvas::SlideCanvas;
pub use theme::Theme;

use crate::common::Result;
use crate::config::{OutputConfig, write_output};
use crate::diagrams::Variant;
use crate::diagrams::deck_art::{self, Artwork, DeckArtPalette};
use crate::ooxml::pptx::MutablePresentation;
use log::{debug, info};
use std::path::{Path, PathBuf};

/// Draws one slide. Slides that embed art read its path from the assets.
pub(crate) type SlideFn = fn(&mut SlideCanvas<'_>, &DeckAssets) -> Result<()>;

/// PNG files a deck embeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckAssets {
    pub rpi: PathBuf,
    /// Only rendered for the enhanced decks
    pub drpi: Option<PathBuf>,
    /// Rendered alongside the others but not placed on any slide
    pub quality: PathBuf,
    pub roles: PathBuf,
}

fn render(art: Artwork, assets_dir: &Path) -> Result<PathBuf> {
    let png = art.to_png()?;
    write_output(assets_dir, &art.file_name, &png)
}

/// Render the deck art of `variant` to PNG files under `assets_dir`.
pub fn render_assets(
    variant: Variant,
    palette: &DeckArtPalette,
    assets_dir: &Path,
) -> Result<DeckAssets> {
    debug!("rendering {:?} deck art into {}", variant, assets_dir.display());
    let rpi = render(deck_art::rpi_pipeline(variant, palette), assets_dir)?;
    let drpi = match variant {
        Variant::Enhanced => Some(render(deck_art::drpi_pipeline(palette), assets_dir)?),
        Variant::Basic => None,
    };
    let quality = render(deck_art::quality_comparison(variant, palette), assets_dir)?;
    let roles = render(deck_art::role_mapping(variant, palette), assets_dir)?;
    Ok(DeckAssets {
        rpi,
        drpi,
        quality,
        roles,
    })
}

/// The published decks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Deck {
    Classic,
    Enhanced,
    EnhancedLight,
}

impl Deck {
    pub fn file_name(self) -> &'static str {
        match self {
            Deck::Classic => classic::FILE_NAME,
            Deck::Enhanced => enhanced::FILE_NAME,
            Deck::EnhancedLight => enhanced::LIGHT_FILE_NAME,
        }
    }

    pub fn theme(self) -> Theme {
        match self {
            Deck::Classic | Deck::Enhanced => Theme::dark(),
            Deck::EnhancedLight => Theme::light(),
        }
    }

    /// Generation of the raster art the deck embeds.
    pub fn variant(self) -> Variant {
        match self {
            Deck::Classic => Variant::Basic,
            Deck::Enhanced | Deck::EnhancedLight => Variant::Enhanced,
        }
    }

    fn slides(self) -> &'static [SlideFn] {
        match self {
            Deck::Classic => &classic::SLIDES,
            Deck::Enhanced | Deck::EnhancedLight => &enhanced::SLIDES,
        }
    }

    /// Per-slide notes that replace the ones the slide bodies write.
    fn notes_override(self) -> Option<&'static [Option<&'static str>]> {
        match self {
            Deck::EnhancedLight => Some(&enhanced::LIGHT_NOTES),
            Deck::Classic | Deck::Enhanced => None,
        }
    }

    /// Build the deck in memory from already rendered art.
    pub fn build(self, assets: &DeckAssets) -> Result<MutablePresentation> {
        let theme = self.theme();
        let overrides = self.notes_override();
        let mut prs = MutablePresentation::new();
        prs.set_title(slides::DECK_TITLE);
        for (i, draw) in self.slides().iter().enumerate() {
            let mut canvas = SlideCanvas::new(prs.add_slide(), &theme);
            draw(&mut canvas, assets)?;
            if let Some(notes) = overrides.and_then(|table| table.get(i).copied().flatten()) {
                canvas.notes(notes);
            }
            debug!("{:?} slide {} drawn", self, i + 1);
        }
        Ok(prs)
    }
}

/// Render the art of `deck`, build it and write the `.pptx` file.
pub fn generate(deck: Deck, config: &OutputConfig) -> Result<PathBuf> {
    let theme = deck.theme();
    let assets = render_assets(deck.variant(), &theme.art, &config.assets_dir)?;
    let prs = deck.build(&assets)?;
    let path = config.write_output(deck.file_name(), &prs.to_bytes()?)?;
    info!("{:?} deck: {} slides", deck, prs.slide_count());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};

    fn fake_assets(dir: &Path, drpi: bool) -> DeckAssets {
        let png = tiny_skia::Pixmap::new(1, 1).unwrap().encode_png().unwrap();
        let write = |name: &str| {
            let path = dir.join(name);
            std::fs::write(&path, &png).unwrap();
            path
        };
        DeckAssets {
            rpi: write("rpi.png"),
            drpi: drpi.then(|| write("drpi.png")),
            quality: write("quality.png"),
            roles: write("roles.png"),
        }
    }

    fn members(bytes: &[u8]) -> Vec<String> {
        let archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        archive.file_names().map(str::to_string).collect()
    }

    fn read_member(bytes: &[u8], name: &str) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut body = String::new();
        archive
            .by_name(name)
            .unwrap()
            .read_to_string(&mut body)
            .unwrap();
        body
    }

    fn count(names: &[String], prefix: &str) -> usize {
        names
            .iter()
            .filter(|n| n.starts_with(prefix) && n.ends_with(".xml"))
            .count()
    }

    #[test]
    fn test_deck_metadata() {
        assert_eq!(Deck::Classic.file_name(), "hve-core-rpi-presentation.pptx");
        assert_eq!(
            Deck::EnhancedLight.file_name(),
            "hve-core-rpi-presentation-enhanced-light.pptx"
        );
        assert_eq!(Deck::Classic.variant(), Variant::Basic);
        assert_eq!(Deck::EnhancedLight.variant(), Variant::Enhanced);
        assert_eq!(Deck::EnhancedLight.theme(), Theme::light());
        assert_eq!(Deck::Enhanced.theme(), Theme::dark());
    }

    #[test]
    fn test_classic_deck_slides_and_notes() {
        let dir = tempfile::tempdir().unwrap();
        let assets = fake_assets(dir.path(), false);
        let prs = Deck::Classic.build(&assets).unwrap();
        assert_eq!(prs.slide_count(), 16);
        assert!(prs.slides().iter().all(|s| s.has_notes()));

        let bytes = prs.to_bytes().unwrap();
        let names = members(&bytes);
        assert_eq!(count(&names, "ppt/slides/slide"), 16);
        assert_eq!(count(&names, "ppt/notesSlides/notesSlide"), 16);
        assert!(read_member(&bytes, "ppt/slides/slide1.xml").contains("HVE-Core"));
    }

    #[test]
    fn test_enhanced_deck_slides_and_notes() {
        let dir = tempfile::tempdir().unwrap();
        let assets = fake_assets(dir.path(), true);
        let prs = Deck::Enhanced.build(&assets).unwrap();
        assert_eq!(prs.slide_count(), 20);
        assert!(prs.slides().iter().all(|s| s.has_notes()));
        assert!(prs.slides()[12].text().contains("Real Results with HVE-Core"));
        assert!(prs.slides()[19].text().contains("Questions?"));

        let names = members(&prs.to_bytes().unwrap());
        assert_eq!(count(&names, "ppt/slides/slide"), 20);
        assert!(names.iter().any(|n| n.starts_with("ppt/media/")));
    }

    #[test]
    fn test_every_part_is_well_formed() {
        use quick_xml::Reader;
        use quick_xml::events::Event;

        let dir = tempfile::tempdir().unwrap();
        let assets = fake_assets(dir.path(), true);
        let bytes = Deck::EnhancedLight.build(&assets).unwrap().to_bytes().unwrap();
        for name in members(&bytes) {
            if !(name.ends_with(".xml") || name.ends_with(".rels")) {
                continue;
            }
            let xml = read_member(&bytes, &name);
            let mut reader = Reader::from_str(&xml);
            let mut depth = 0i32;
            loop {
                match reader.read_event() {
                    Ok(Event::Start(_)) => depth += 1,
                    Ok(Event::End(_)) => depth -= 1,
                    Ok(Event::Eof) => break,
                    Ok(_) => {},
                    Err(e) => panic!("{name}: {e}"),
                }
            }
            assert_eq!(depth, 0, "{name}");
        }
    }

    #[test]
    fn test_light_deck_uses_dark_text() {
        let dir = tempfile::tempdir().unwrap();
        let assets = fake_assets(dir.path(), true);
        let prs = Deck::EnhancedLight.build(&assets).unwrap();
        let slide = &prs.slides()[0];
        assert_eq!(slide.background(), Some(Theme::light().background));
        let run = &slide.shapes()[0].paragraphs()[0].runs[0];
        assert_eq!(run.color.map(|c| c.to_hex()).as_deref(), Some("242424"));
    }

    #[test]
    fn test_light_deck_has_short_notes() {
        let dir = tempfile::tempdir().unwrap();
        let assets = fake_assets(dir.path(), true);
        let light = Deck::EnhancedLight.build(&assets).unwrap();
        let dark = Deck::Enhanced.build(&assets).unwrap();

        assert_eq!(
            light.slides()[6].notes(),
            Some(
                "The constraints row is the key architectural element. Each constraint forces \
the AI into its correct mode of operation. Keep each RPI cycle scoped to about 3 files."
            )
        );
        assert!(dark.slides()[6].notes().unwrap().contains("If the plan is larger"));
        // Title and the two insight slides keep the full notes
        for i in [0, 2, 3] {
            assert_eq!(light.slides()[i].notes(), dark.slides()[i].notes());
        }
        for i in [1, 4, 13, 19] {
            assert_ne!(light.slides()[i].notes(), dark.slides()[i].notes());
        }
        assert!(light.slides().iter().all(|s| s.has_notes()));
        assert_eq!(light.slides()[5].text(), dark.slides()[5].text());
    }

    #[test]
    fn test_build_is_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        let assets = fake_assets(dir.path(), true);
        let a = Deck::Enhanced.build(&assets).unwrap().to_bytes().unwrap();
        let b = Deck::Enhanced.build(&assets).unwrap().to_bytes().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_missing_asset_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut assets = fake_assets(dir.path(), false);
        assets.rpi = dir.path().join("missing.png");
        let err = Deck::Classic.build(&assets).unwrap_err();
        assert!(matches!(err, crate::common::Error::Io(_)));
    }

    #[test]
    fn test_enhanced_deck_requires_drpi_art() {
        let dir = tempfile::tempdir().unwrap();
        let assets = fake_assets(dir.path(), false);
        assert!(Deck::Enhanced.build(&assets).is_err());
    }

    #[test]
    fn test_generate_writes_deck_and_art() {
        let dir = tempfile::tempdir().unwrap();
        let config = OutputConfig {
            output_dir: dir.path().join("docs"),
            assets_dir: dir.path().join("assets"),
        };
        let path = generate(Deck::Classic, &config).unwrap();
        assert_eq!(path, config.output_dir.join(Deck::Classic.file_name()));
        assert!(config.assets_dir.join("hve-rpi-pipeline.png").exists());
        assert!(!config.assets_dir.join("hve-drpi-pipeline.png").exists());
        assert_eq!(count(&members(&std::fs::read(path).unwrap()), "ppt/slides/slide"), 16);
    }
}
