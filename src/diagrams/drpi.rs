//! D-RPI: an optional Discovery phase in front of the four RPI phases,
//! with an iteration loop from Review back to Research.
use super::chrome::{arrow, arrow_path, dashed_rect, header, small_label, text_label, title_block};
use super::layout::RowLayout;
use super::palette::*;
use super::pipeline::{PHASES, clear_marker};
use super::{Diagram, Variant};
use crate::images::svg::{SvgBuilder, SvgRect};

const WIDTH: f64 = 1920.0;
const HEIGHT: f64 = 700.0;
pub const BOX_W: f64 = 260.0;
pub const BOX_H: f64 = 140.0;
const GAP: f64 = 70.0;
const RPI_START_X: f64 = 400.0;
const BOX_Y: f64 = 260.0;

const DISC_X: f64 = 80.0;
const DISC_Y: f64 = 260.0;
const DISC_W: f64 = 240.0;
const DISC_H: f64 = 140.0;

/// Artifact type entering each phase, then the final output.
const TYPE_LABELS: [&str; 5] = [
    "Uncertainty",
    "Knowledge",
    "Strategy",
    "Working Code",
    "Validated Code",
];

pub fn phase_row() -> RowLayout {
    RowLayout::new(RPI_START_X, BOX_W, GAP)
}

pub fn drpi_pipeline() -> Diagram {
    let mut svg = header(
        WIDTH,
        HEIGHT,
        "D-RPI Pipeline: Discovery + Research → Plan → Implement → Review",
        Variant::Enhanced,
    );
    title_block(
        &mut svg,
        "D-RPI Pipeline: Discovery + RPI",
        "Optional Discovery phase extends the core RPI pipeline for ambiguous or complex projects",
    );

    discovery_box(&mut svg);

    let row = phase_row();
    let last = PHASES.len() - 1;
    for (i, &(name, accent)) in PHASES.iter().enumerate() {
        let bx = row.position(i);
        let cx = row.center(i);
        svg.add_rect(
            SvgRect::new(bx, BOX_Y, BOX_W, BOX_H)
                .with_rx(12.0)
                .with_fill(CARD_BG)
                .with_stroke(accent.color(), 3.0),
        );
        svg.add_text(text_label(cx, BOX_Y + 55.0, name, accent.color(), 22.0));
        svg.add_text(text_label(cx, BOX_Y + 80.0, &format!("Phase {}", i + 1), MED_GRAY, 12.0));
        svg.add_text(text_label(cx, BOX_Y - 25.0, TYPE_LABELS[i], LIGHT_GRAY, 11.0));

        if i < last {
            let ay = BOX_Y + BOX_H / 2.0;
            arrow(&mut svg, row.end(i) + 18.0, ay, row.position(i + 1) - 18.0, ay, accent, false, None);
            clear_marker(&mut svg, row.gap_center(i), ay);
        }
    }

    // Output type sits above the last box, on top of its input label
    svg.add_text(text_label(row.center(last), BOX_Y - 25.0, TYPE_LABELS[4], PURPLE, 11.0));

    arrow(
        &mut svg,
        DISC_X + DISC_W + 10.0,
        DISC_Y + DISC_H / 2.0,
        RPI_START_X - 10.0,
        BOX_Y + BOX_H / 2.0,
        Accent::MedGray,
        true,
        None,
    );

    let loop_y = iteration_loop(&mut svg, &row);

    let legend_y = loop_y + 50.0;
    svg.add_text(text_label(
        WIDTH / 2.0 - 300.0,
        legend_y,
        "Dashed border = optional Discovery phase",
        MED_GRAY,
        13.0,
    ));
    svg.add_text(text_label(
        WIDTH / 2.0 + 300.0,
        legend_y,
        "Red circles = /clear (context reset)  |  Purple loop = iteration",
        MED_GRAY,
        13.0,
    ));

    Diagram::new("hve-core-drpi-pipeline.svg", svg)
}

fn discovery_box(svg: &mut SvgBuilder) {
    let cx = DISC_X + DISC_W / 2.0;
    dashed_rect(svg, DISC_X, DISC_Y, DISC_W, DISC_H, MED_GRAY, Some(CARD_BG));
    svg.add_text(text_label(cx, DISC_Y + 60.0, "Discovery", MED_GRAY, 22.0));
    svg.add_text(text_label(cx, DISC_Y + 85.0, "(optional)", DARK_GRAY, 12.0));
    svg.add_text(text_label(cx, DISC_Y - 25.0, "Empathize / Define", MED_GRAY, 11.0));
}

/// Purple loop under the phases from Review back to Research. Returns its y.
fn iteration_loop(svg: &mut SvgBuilder, row: &RowLayout) -> f64 {
    let loop_y = BOX_Y + BOX_H + 50.0;
    let bottom = BOX_Y + BOX_H;
    let review_cx = row.center(PHASES.len() - 1);
    let research_cx = row.center(0);

    arrow_path(
        svg,
        &[
            (review_cx, bottom),
            (review_cx, loop_y),
            (research_cx, loop_y),
            (research_cx, bottom),
        ],
        Accent::Purple,
        false,
    );
    svg.add_text(small_label(
        ((review_cx + research_cx) / 2.0).floor(),
        loop_y - 8.0,
        "iteration loops",
        PURPLE,
    ));
    loop_y
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::images::svg::SvgElement;

    #[test]
    fn test_phase_boxes_and_discovery() {
        let diagram = drpi_pipeline();
        let xs: Vec<f64> = diagram
            .svg
            .elements
            .iter()
            .filter_map(|e| match e {
                SvgElement::Rect(r) if r.width == BOX_W && r.height == BOX_H => Some(r.x),
                _ => None,
            })
            .collect();
        assert_eq!(xs, vec![400.0, 730.0, 1060.0, 1390.0]);

        let out = diagram.to_svg();
        assert!(out.contains(r#"stroke-dasharray="10 6""#));
        assert!(out.contains(r#"marker-end="url(#ah-med-gray)""#));
    }

    #[test]
    fn test_iteration_loop_path() {
        let out = drpi_pipeline().to_svg();
        assert!(out.contains(r#"d="M 1520 400 L 1520 450 L 530 450 L 530 400""#));
        assert!(out.contains(r#"<text x="1025" y="442" class="node-small""#));
        assert!(out.contains(r#"y="500""#));
    }
}
