//! Diagram generators.
//!
//! Every diagram is a fixed table of items (phases, dimensions, roles) laid out
//! with the arithmetic in [`layout`] and emitted through [`SvgBuilder`].
//!
//! - [`pipeline`], [`comparison`], [`roles`], [`drpi`]: the documentation SVGs
//! - [`deck_art`]: raster art embedded in the slide decks
//!
//! # Example
//!
//! ```rust,no_run
//! use hve_assets::diagrams::{self, Variant};
//!
//! for diagram in diagrams::generate(Variant::Enhanced) {
//!     std::fs::write(diagram.file_name, diagram.to_svg())?;
//! }
//! # Ok::<(), std::io::Error>(())
//! ```
pub mod chrome;
pub mod comparison;
pub mod deck_art;
pub mod drpi;
pub mod layout;
pub mod palette;
pub mod pipeline;
pub mod roles;

use crate::images::svg::SvgBuilder;
use log::debug;

/// Which generation of the artwork to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// The first set of diagrams
    Basic,
    /// Stat callouts, the D-RPI pipeline and revised titles
    Enhanced,
}

/// A generated SVG diagram and the file name it is published under.
#[derive(Debug, Clone)]
pub struct Diagram {
    pub file_name: &'static str,
    pub svg: SvgBuilder,
}

impl Diagram {
    pub fn new(file_name: &'static str, svg: SvgBuilder) -> Self {
        debug!(
            "generated {} ({}x{}, {} elements)",
            file_name,
            svg.width,
            svg.height,
            svg.elements.len()
        );
        Self { file_name, svg }
    }

    /// Serialize the diagram to SVG text.
    #[inline]
    pub fn to_svg(&self) -> String {
        self.svg.build()
    }
}

/// Generate the full diagram set for a variant, in publication order.
///
/// The basic set has the pipeline, the quality comparison and the role
/// mapping. The enhanced set inserts the D-RPI pipeline after the pipeline.
pub fn generate(variant: Variant) -> Vec<Diagram> {
    let mut diagrams = vec![pipeline::rpi_pipeline(variant)];
    if variant == Variant::Enhanced {
        diagrams.push(drpi::drpi_pipeline());
    }
    diagrams.push(comparison::quality_comparison(variant));
    diagrams.push(roles::role_mapping(variant));
    diagrams
}

#[cfg(test)]
mod tests {
    use super::*;
    use quick_xml::Reader;
    use quick_xml::events::Event;

    /// Parse `xml` to the end, returning the root element name and its
    /// `viewBox` attribute.
    fn parse_root(xml: &str) -> (String, Option<String>) {
        let mut reader = Reader::from_str(xml);
        let mut depth = 0usize;
        let mut roots = Vec::new();
        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) => {
                    if depth == 0 {
                        let view_box = e
                            .try_get_attribute("viewBox")
                            .unwrap()
                            .map(|a| String::from_utf8(a.value.into_owned()).unwrap());
                        roots.push((String::from_utf8(e.name().as_ref().to_vec()).unwrap(), view_box));
                    }
                    depth += 1;
                },
                Ok(Event::End(_)) => depth -= 1,
                Ok(Event::Empty(e)) => {
                    assert!(depth > 0, "empty element {:?} at top level", e.name());
                },
                Ok(Event::Eof) => break,
                Ok(_) => {},
                Err(e) => panic!("malformed SVG: {e}"),
            }
        }
        assert_eq!(depth, 0);
        assert_eq!(roots.len(), 1, "expected a single root element");
        roots.remove(0)
    }

    #[test]
    fn test_set_sizes() {
        let basic: Vec<_> = generate(Variant::Basic).iter().map(|d| d.file_name).collect();
        assert_eq!(
            basic,
            vec![
                "hve-core-rpi-pipeline.svg",
                "hve-core-quality-comparison.svg",
                "hve-core-role-mapping.svg",
            ]
        );

        let enhanced: Vec<_> = generate(Variant::Enhanced).iter().map(|d| d.file_name).collect();
        assert_eq!(
            enhanced,
            vec![
                "hve-core-rpi-pipeline-enhanced.svg",
                "hve-core-drpi-pipeline.svg",
                "hve-core-quality-comparison-enhanced.svg",
                "hve-core-role-mapping-enhanced.svg",
            ]
        );
    }

    #[test]
    fn test_well_formed_with_matching_view_box() {
        for variant in [Variant::Basic, Variant::Enhanced] {
            for diagram in generate(variant) {
                let xml = diagram.to_svg();
                let (root, view_box) = parse_root(&xml);
                assert_eq!(root, "svg", "{}", diagram.file_name);
                let expected = format!("0 0 {} {}", diagram.svg.width, diagram.svg.height);
                assert_eq!(view_box.as_deref(), Some(expected.as_str()), "{}", diagram.file_name);
            }
        }
    }

    #[test]
    fn test_generation_is_idempotent() {
        for variant in [Variant::Basic, Variant::Enhanced] {
            let first: Vec<String> = generate(variant).iter().map(Diagram::to_svg).collect();
            let second: Vec<String> = generate(variant).iter().map(Diagram::to_svg).collect();
            assert_eq!(first, second);
        }
    }
}
