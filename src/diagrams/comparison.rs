//! Traditional AI coding versus the RPI framework, five dimensions side by side.
use super::chrome::{header, text_label, title_block, zone_rect};
use super::palette::*;
use super::{Diagram, Variant};
use crate::common::RGBColor;
use crate::images::svg::{SvgBuilder, SvgRect};

const WIDTH: f64 = 1920.0;
const HEIGHT: f64 = 800.0;
const ZONE_W: f64 = 820.0;
const ZONE_GAP: f64 = 60.0;
const ZONE_Y: f64 = 100.0;
const ZONE_H: f64 = 650.0;
const ROW_H: f64 = 105.0;
const ROW_GAP: f64 = 15.0;
const PADDING: f64 = 20.0;
const BADGE_W: f64 = 50.0;

/// One compared quality dimension.
#[derive(Debug, Clone, Copy)]
pub struct Dimension {
    pub name: &'static str,
    pub traditional: &'static str,
    pub traditional_desc: &'static str,
    pub rpi: &'static str,
    pub rpi_desc: &'static str,
}

pub const DIMENSIONS: [Dimension; 5] = [
    Dimension {
        name: "Knowledge Acquisition",
        traditional: "Pattern Matching",
        traditional_desc: "Relies on pre-trained patterns; no active research",
        rpi: "Research-Grounded",
        rpi_desc: "Dedicated research phase gathers domain context",
    },
    Dimension {
        name: "Traceability",
        traditional: "None / Lost",
        traditional_desc: "No artifact chain; decisions untraceable",
        rpi: "Full Traceability",
        rpi_desc: "Research → Plan → Code → Review artifact chain",
    },
    Dimension {
        name: "Knowledge Transfer",
        traditional: "Prompt-Dependent",
        traditional_desc: "Knowledge lives in prompts; lost on context change",
        rpi: "Artifact-Based Knowledge",
        rpi_desc: "Durable markdown artifacts persist across sessions",
    },
    Dimension {
        name: "Rework Rate",
        traditional: "Common",
        traditional_desc: "Frequent rework from misunderstood requirements",
        rpi: "Rare",
        rpi_desc: "Research and planning prevent downstream rework",
    },
    Dimension {
        name: "Validation",
        traditional: "Ad Hoc",
        traditional_desc: "No systematic review; quality varies by prompt",
        rpi: "Systematic Validation",
        rpi_desc: "Dedicated review phase with structured criteria",
    },
];

const TITLE: &str = "Quality Comparison: Traditional vs RPI";

pub fn quality_comparison(variant: Variant) -> Diagram {
    let file_name = match variant {
        Variant::Basic => "hve-core-quality-comparison.svg",
        Variant::Enhanced => "hve-core-quality-comparison-enhanced.svg",
    };

    let mut svg = header(WIDTH, HEIGHT, TITLE, variant);
    title_block(
        &mut svg,
        TITLE,
        "Side-by-side evaluation across five quality dimensions",
    );

    let left_x = ((WIDTH - 2.0 * ZONE_W - ZONE_GAP) / 2.0).floor();
    let right_x = left_x + ZONE_W + ZONE_GAP;
    zone_rect(&mut svg, left_x, ZONE_Y, ZONE_W, ZONE_H, RED_TINT, "Traditional AI Coding", RED);
    zone_rect(&mut svg, right_x, ZONE_Y, ZONE_W, ZONE_H, GREEN_TINT, "RPI Framework", GREEN);

    let row_start = ZONE_Y + 55.0;
    for (i, dim) in DIMENSIONS.iter().enumerate() {
        let ry = row_start + i as f64 * (ROW_H + ROW_GAP);
        svg.add_text(text_label(WIDTH / 2.0, ry + 15.0, dim.name, WHITE, 14.0));
        card(&mut svg, left_x + PADDING, ry, dim.traditional, dim.traditional_desc, RED, "✗");
        card(&mut svg, right_x + PADDING, ry, dim.rpi, dim.rpi_desc, GREEN, "✓");
    }

    Diagram::new(file_name, svg)
}

fn card(
    svg: &mut SvgBuilder,
    card_x: f64,
    ry: f64,
    headline: &str,
    desc: &str,
    color: RGBColor,
    mark: &str,
) {
    let card_w = ZONE_W - 2.0 * PADDING;
    svg.add_rect(
        SvgRect::new(card_x, ry + 25.0, card_w, ROW_H - 30.0)
            .with_rx(8.0)
            .with_fill(DARK_BG)
            .with_stroke(color, 1.5),
    );
    svg.add_text(text_label(card_x + card_w / 2.0, ry + 55.0, headline, color, 16.0));
    svg.add_text(text_label(card_x + card_w / 2.0, ry + 78.0, desc, MED_GRAY, 11.0));

    svg.add_rect(
        SvgRect::new(card_x + card_w - BADGE_W - 10.0, ry + 35.0, BADGE_W, 20.0)
            .with_rx(4.0)
            .with_fill(color),
    );
    svg.add_text(text_label(
        card_x + card_w - BADGE_W / 2.0 - 10.0,
        ry + 49.0,
        mark,
        WHITE,
        11.0,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::images::svg::SvgElement;

    #[test]
    fn test_rows_step_by_120() {
        let diagram = quality_comparison(Variant::Basic);
        let dimension_ys: Vec<f64> = diagram
            .svg
            .elements
            .iter()
            .filter_map(|e| match e {
                SvgElement::Text(t) if DIMENSIONS.iter().any(|d| d.name == t.text) => Some(t.y),
                _ => None,
            })
            .collect();
        assert_eq!(dimension_ys, vec![170.0, 290.0, 410.0, 530.0, 650.0]);
    }

    #[test]
    fn test_badges_and_zones() {
        let out = quality_comparison(Variant::Enhanced).to_svg();
        assert_eq!(out.matches(">✗</text>").count(), 5);
        assert_eq!(out.matches(">✓</text>").count(), 5);
        assert!(out.contains(r##"<rect x="110" y="100" width="820" height="650" rx="12" fill="#2D1A1A" stroke="#D13438" stroke-width="2"/>"##));
        assert!(out.contains(r##"<rect x="990" y="100""##));
    }
}
