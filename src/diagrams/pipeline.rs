//! RPI pipeline: four typed phases separated by `/clear` context resets.
use super::chrome::{arrow, header, text_label, title_block};
use super::layout::RowLayout;
use super::palette::*;
use super::{Diagram, Variant};
use crate::images::svg::{SvgBuilder, SvgCircle, SvgRect};
use log::trace;

pub const WIDTH: f64 = 1920.0;
pub const BOX_W: f64 = 300.0;
pub const BOX_H: f64 = 160.0;
pub const GAP: f64 = 100.0;

/// Phase name with its accent.
pub const PHASES: [(&str, Accent); 4] = [
    ("Research", Accent::Blue),
    ("Plan", Accent::Green),
    ("Implement", Accent::Orange),
    ("Review", Accent::Purple),
];

pub const ARTIFACTS: [&str; 4] = [
    "Research findings",
    "Implementation plan",
    "Code + tests",
    "Validated output",
];

pub const TYPE_TRANSFORMS: [&str; 4] = [
    "Uncertainty → Knowledge",
    "Knowledge → Strategy",
    "Strategy → Working Code",
    "Working Code → Validated Code",
];

const TITLE: &str = "RPI Pipeline: Type Transformation System";

/// Horizontal placement of the phase boxes.
pub fn phase_row() -> RowLayout {
    RowLayout::centered(PHASES.len(), BOX_W, GAP, WIDTH)
}

pub fn rpi_pipeline(variant: Variant) -> Diagram {
    let (height, box_y, file_name) = match variant {
        Variant::Basic => (600.0, 220.0, "hve-core-rpi-pipeline.svg"),
        Variant::Enhanced => (650.0, 200.0, "hve-core-rpi-pipeline-enhanced.svg"),
    };

    let mut svg = header(WIDTH, height, TITLE, variant);
    title_block(
        &mut svg,
        TITLE,
        "Research  →  Plan  →  Implement  →  Review   ·   Each phase transforms typed artifacts",
    );

    let row = phase_row();
    draw_phases(&mut svg, &row, box_y);

    let legend_y = match variant {
        Variant::Basic => box_y + BOX_H + 80.0,
        Variant::Enhanced => {
            let stat_y = box_y + BOX_H + 40.0;
            stat_callout(&mut svg, stat_y);
            stat_y + 60.0
        },
    };
    svg.add_text(text_label(
        WIDTH / 2.0,
        legend_y,
        "/clear — Context reset between phases prevents knowledge leakage",
        MED_GRAY,
        13.0,
    ));

    let summary_y = legend_y
        + match variant {
            Variant::Basic => 35.0,
            Variant::Enhanced => 30.0,
        };
    for (i, label) in TYPE_TRANSFORMS.iter().enumerate() {
        svg.add_text(text_label(row.center(i), summary_y, label, LIGHT_GRAY, 10.0));
    }

    Diagram::new(file_name, svg)
}

fn draw_phases(svg: &mut SvgBuilder, row: &RowLayout, box_y: f64) {
    let last = PHASES.len() - 1;
    for (i, &(name, accent)) in PHASES.iter().enumerate() {
        let bx = row.position(i);
        let cx = row.center(i);
        trace!("phase {} '{}' at x={}", i + 1, name, bx);

        svg.add_rect(
            SvgRect::new(bx, box_y, BOX_W, BOX_H)
                .with_rx(12.0)
                .with_fill(CARD_BG)
                .with_stroke(accent.color(), 3.0),
        );
        svg.add_text(text_label(cx, box_y + 50.0, name, accent.color(), 26.0));
        svg.add_text(text_label(cx, box_y + 80.0, &format!("Phase {}", i + 1), MED_GRAY, 13.0));
        svg.add_text(text_label(cx, box_y + 110.0, ARTIFACTS[i], LIGHT_GRAY, 11.0));

        if i < last {
            svg.add_text(text_label(
                row.gap_center(i),
                box_y - 30.0,
                TYPE_TRANSFORMS[i],
                LIGHT_GRAY,
                11.0,
            ));
        }
        if i == 0 {
            svg.add_text(text_label(cx, box_y - 30.0, "Uncertainty", BLUE, 12.0));
        }
        if i == last {
            svg.add_text(text_label(cx, box_y - 30.0, "Validated Code", PURPLE, 12.0));
        }

        if i < last {
            let ay = box_y + BOX_H / 2.0;
            arrow(svg, row.end(i) + 18.0, ay, row.position(i + 1) - 18.0, ay, accent, false, None);
            clear_marker(svg, row.gap_center(i), ay);
        }
    }
}

/// Red `/clear` badge centered on (`cx`, `cy`).
pub fn clear_marker(svg: &mut SvgBuilder, cx: f64, cy: f64) {
    svg.add_circle(SvgCircle::new(cx, cy, 14.0, RED).with_opacity(0.9));
    svg.add_text(text_label(cx, cy + 4.0, "/clear", WHITE, 8.0));
}

fn stat_callout(svg: &mut SvgBuilder, stat_y: f64) {
    let (stat_w, stat_h) = (420.0, 40.0);
    let stat_x = ((WIDTH - stat_w) / 2.0).floor();
    svg.add_rect(
        SvgRect::new(stat_x, stat_y, stat_w, stat_h)
            .with_rx(8.0)
            .with_fill(GREEN),
    );
    svg.add_text(text_label(
        stat_x + stat_w / 2.0,
        stat_y + 26.0,
        "Up to 88% faster task completion",
        WHITE,
        15.0,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::images::svg::SvgElement;
    use quick_xml::Reader;
    use quick_xml::events::Event;

    fn phase_boxes(svg: &SvgBuilder) -> Vec<&SvgRect> {
        svg.elements
            .iter()
            .filter_map(|e| match e {
                SvgElement::Rect(r) if r.width == BOX_W && r.height == BOX_H => Some(r),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_four_boxes_three_arrows() {
        for variant in [Variant::Basic, Variant::Enhanced] {
            let diagram = rpi_pipeline(variant);
            assert_eq!(phase_boxes(&diagram.svg).len(), 4);
            let arrows = diagram
                .svg
                .elements
                .iter()
                .filter(|e| matches!(e, SvgElement::Path(p) if p.marker_end.is_some()))
                .count();
            assert_eq!(arrows, 3);
        }
    }

    /// `x` of every `<rect>` in the markup sized like a phase box.
    fn phase_box_xs(xml: &str) -> Vec<f64> {
        let mut reader = Reader::from_str(xml);
        let mut xs = Vec::new();
        loop {
            match reader.read_event() {
                Ok(Event::Empty(e)) | Ok(Event::Start(e)) if e.name().as_ref() == b"rect" => {
                    let attr = |name: &str| -> Option<f64> {
                        e.try_get_attribute(name)
                            .unwrap()
                            .map(|a| std::str::from_utf8(&a.value).unwrap().parse().unwrap())
                    };
                    if attr("width") == Some(BOX_W) && attr("height") == Some(BOX_H) {
                        xs.push(attr("x").unwrap());
                    }
                },
                Ok(Event::Eof) => break,
                Ok(_) => {},
                Err(e) => panic!("malformed SVG: {e}"),
            }
        }
        xs
    }

    #[test]
    fn test_box_positions_follow_row_formula() {
        for variant in [Variant::Basic, Variant::Enhanced] {
            let xs = phase_box_xs(&rpi_pipeline(variant).to_svg());
            assert_eq!(xs.len(), PHASES.len());
            let row = phase_row();
            for (i, x) in xs.iter().enumerate() {
                assert_eq!(*x, row.start + i as f64 * (BOX_W + GAP));
            }
            assert!(xs.windows(2).all(|w| w[1] > w[0]));
        }
    }

    #[test]
    fn test_enhanced_has_stat_callout() {
        let enhanced = rpi_pipeline(Variant::Enhanced).to_svg();
        assert!(enhanced.contains(r##"<rect x="750" y="400" width="420" height="40" rx="8" fill="#107C10"/>"##));
        assert!(enhanced.contains("Up to 88% faster task completion"));
        assert!(!rpi_pipeline(Variant::Basic).to_svg().contains("88%"));
    }
}
