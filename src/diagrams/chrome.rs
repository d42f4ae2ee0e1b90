//! Shared diagram chrome: document header, zones, arrows and labels.
use super::Variant;
use super::palette::*;
use crate::common::RGBColor;
use crate::images::svg::{SvgBuilder, SvgMarker, SvgPath, SvgRect, SvgText, TextAnchor};

pub const FONT_FAMILY: &str = "'Segoe UI', sans-serif";

/// Dash pattern of dashed arrows.
const ARROW_DASH: &str = "8 6";
/// Dash pattern of dashed outlines.
const OUTLINE_DASH: &str = "10 6";

fn stylesheet() -> String {
    format!(
        "text {{ font-family: 'Segoe UI', Arial, sans-serif; }}
.title {{ font-size: 22px; font-weight: bold; fill: {white}; }}
.subtitle {{ font-size: 14px; fill: {light}; }}
.zone-label {{ font-size: 15px; font-weight: bold; }}
.node-title {{ font-size: 12px; font-weight: bold; fill: {white}; }}
.node-detail {{ font-size: 11px; fill: {light}; }}
.node-small {{ font-size: 10px; fill: {med}; }}
.badge-text {{ font-size: 10px; font-weight: bold; fill: {white}; }}
.type-label {{ font-size: 11px; font-style: italic; fill: {light}; }}",
        white = WHITE,
        light = LIGHT_GRAY,
        med = MED_GRAY,
    )
}

/// Start a diagram: title, arrowhead markers, class styles and the
/// rounded full-canvas background.
pub fn header(width: f64, height: f64, title: &str, variant: Variant) -> SvgBuilder {
    let mut svg = SvgBuilder::new(width, height)
        .with_title(title)
        .with_style(stylesheet());

    for accent in Accent::BASE {
        svg.add_marker(SvgMarker::arrowhead(accent.marker_id(), accent.marker_fill()));
    }
    if variant == Variant::Enhanced {
        svg.add_marker(SvgMarker::arrowhead(
            Accent::MedGray.marker_id(),
            Accent::MedGray.marker_fill(),
        ));
    }

    svg.add_rect(
        SvgRect::new(0.0, 0.0, width, height)
            .with_rx(8.0)
            .with_fill(DARK_BG),
    );
    svg
}

/// Centered title and subtitle lines at the top of the canvas.
pub fn title_block(svg: &mut SvgBuilder, title: &str, subtitle: &str) {
    let cx = svg.width / 2.0;
    svg.add_text(text_label(cx, 40.0, title, WHITE, 24.0));
    svg.add_text(text_label(cx, 65.0, subtitle, LIGHT_GRAY, 14.0));
}

/// Text centered on `x`, set in the diagram font.
pub fn text_label(x: f64, y: f64, text: &str, color: RGBColor, size: f64) -> SvgText {
    SvgText::new(x, y, text)
        .with_anchor(TextAnchor::Middle)
        .with_font_size(size)
        .with_fill(color)
        .with_font_family(FONT_FAMILY)
}

/// Tinted, outlined zone with its label in the top-left corner.
#[allow(clippy::too_many_arguments)]
pub fn zone_rect(
    svg: &mut SvgBuilder,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    fill: RGBColor,
    label: &str,
    label_color: RGBColor,
) {
    svg.add_rect(
        SvgRect::new(x, y, w, h)
            .with_rx(12.0)
            .with_fill(fill)
            .with_stroke(label_color, 2.0),
    );
    svg.add_text(
        SvgText::new(x + 12.0, y + 22.0, label)
            .with_class("zone-label")
            .with_fill(label_color),
    );
}

/// Rounded outline with a dashed border.
pub fn dashed_rect(svg: &mut SvgBuilder, x: f64, y: f64, w: f64, h: f64, stroke: RGBColor, fill: Option<RGBColor>) {
    let mut rect = SvgRect::new(x, y, w, h)
        .with_rx(12.0)
        .with_stroke(stroke, 2.0)
        .with_dasharray(OUTLINE_DASH);
    rect.fill = fill;
    svg.add_rect(rect);
}

/// Arrow through `points`, optionally dashed.
pub fn arrow_path(svg: &mut SvgBuilder, points: &[(f64, f64)], accent: Accent, dashed: bool) {
    let mut path = SvgPath::polyline(points)
        .with_stroke(accent.color(), 2.0)
        .with_marker_end(accent.marker_id());
    if dashed {
        path = path.with_dasharray(ARROW_DASH);
    }
    svg.add_path(path);
}

/// Straight arrow with an optional label above its midpoint.
#[allow(clippy::too_many_arguments)]
pub fn arrow(
    svg: &mut SvgBuilder,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    accent: Accent,
    dashed: bool,
    label: Option<&str>,
) {
    arrow_path(svg, &[(x1, y1), (x2, y2)], accent, dashed);
    if let Some(label) = label {
        let mx = ((x1 + x2) / 2.0).floor();
        let my = ((y1 + y2) / 2.0).floor();
        svg.add_text(small_label(mx, my - 6.0, label, accent.color()));
    }
}

/// `node-small` text, used for arrow captions.
pub fn small_label(x: f64, y: f64, text: &str, color: RGBColor) -> SvgText {
    SvgText::new(x, y, text)
        .with_anchor(TextAnchor::Middle)
        .with_class("node-small")
        .with_fill(color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_markers() {
        let basic = header(100.0, 50.0, "t", Variant::Basic).build();
        assert_eq!(basic.matches("<marker").count(), 7);
        assert!(basic.contains(r##"<marker id="ah-white""##));
        assert!(basic.contains(r##"fill="#E0E0E0"/></marker>"##));
        assert!(basic.contains(r##"<rect x="0" y="0" width="100" height="50" rx="8" fill="#1B1B1B"/>"##));

        let enhanced = header(100.0, 50.0, "t", Variant::Enhanced).build();
        assert_eq!(enhanced.matches("<marker").count(), 8);
        assert!(enhanced.contains(r#"id="ah-med-gray""#));
    }

    #[test]
    fn test_labeled_dashed_arrow() {
        let mut svg = SvgBuilder::new(100.0, 100.0);
        arrow(&mut svg, 10.0, 50.0, 90.0, 50.0, Accent::MedGray, true, Some("next"));
        let out = svg.build();
        assert!(out.contains(r##"<path d="M 10 50 L 90 50" stroke="#909090" stroke-width="2" stroke-dasharray="8 6" fill="none" marker-end="url(#ah-med-gray)"/>"##));
        assert!(out.contains(r#"<text x="50" y="44" class="node-small" text-anchor="middle""#));
    }

    #[test]
    fn test_zone_label_position() {
        let mut svg = SvgBuilder::new(100.0, 100.0);
        zone_rect(&mut svg, 110.0, 100.0, 820.0, 650.0, RED_TINT, "Traditional AI Coding", RED);
        let out = svg.build();
        assert!(out.contains(r##"<text x="122" y="122" class="zone-label" fill="#D13438">Traditional AI Coding</text>"##));
    }
}
