//! Raster art embedded in the slide decks.
//!
//! The drawings use pixel coordinates with text placed by its top-left
//! corner. They are assembled as SVG and rendered to PNG with resvg, set in
//! DejaVu Sans.
use super::Variant;
use super::layout::{GridLayout, RowLayout};
use super::palette::{BLUE, GREEN, ORANGE, PURPLE, RED, TEAL, WHITE};
use crate::common::{RGBColor, Result};
use crate::images::raster::{RasterOptions, svg_to_png};
use crate::images::svg::{SvgBuilder, SvgCircle, SvgLine, SvgPath, SvgPolygon, SvgRect, SvgText};
use log::{debug, trace};

const FONT_FAMILY: &str = "DejaVu Sans";
/// Ascender height of DejaVu Sans, as a fraction of the em size.
const ASCENT: f64 = 0.928;
/// Extra leading between lines of multi-line labels.
const LINE_SPACING: f64 = 4.0;

/// Fonts of the deck art: (size in px, bold).
#[derive(Debug, Clone, Copy)]
enum Font {
    Title,
    Zone,
    Comp,
    Small,
    Label,
}

impl Font {
    fn metrics(self) -> (f64, bool) {
        match self {
            Font::Title => (22.0, true),
            Font::Zone => (16.0, true),
            Font::Comp => (13.0, false),
            Font::Small => (11.0, false),
            Font::Label => (12.0, true),
        }
    }
}

/// Colors of one deck theme's artwork.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeckArtPalette {
    pub background: RGBColor,
    pub card: RGBColor,
    pub text: RGBColor,
    pub secondary: RGBColor,
    /// Optional Discovery phase outline and captions
    pub muted: RGBColor,
    pub trad_header: RGBColor,
    pub rpi_header: RGBColor,
    /// Captions on the column header pills
    pub header_text: RGBColor,
    pub trad_card: RGBColor,
    pub trad_text: RGBColor,
    pub rpi_card: RGBColor,
    pub rpi_text: RGBColor,
    /// Prepended to every file name
    pub prefix: &'static str,
}

impl DeckArtPalette {
    pub const fn dark() -> Self {
        Self {
            background: RGBColor::new(27, 27, 27),
            card: RGBColor::new(45, 45, 45),
            text: RGBColor::new(255, 255, 255),
            secondary: RGBColor::new(200, 200, 200),
            muted: RGBColor::new(144, 144, 144),
            trad_header: RGBColor::new(100, 30, 30),
            rpi_header: RGBColor::new(20, 80, 20),
            header_text: RGBColor::new(255, 255, 255),
            trad_card: RGBColor::new(50, 25, 25),
            trad_text: RGBColor::new(255, 150, 150),
            rpi_card: RGBColor::new(20, 50, 20),
            rpi_text: RGBColor::new(150, 255, 150),
            prefix: "",
        }
    }

    pub const fn light() -> Self {
        Self {
            background: RGBColor::new(248, 248, 248),
            card: RGBColor::new(235, 235, 235),
            text: RGBColor::new(36, 36, 36),
            secondary: RGBColor::new(100, 100, 100),
            muted: RGBColor::new(100, 100, 100),
            trad_header: RGBColor::new(255, 230, 230),
            rpi_header: RGBColor::new(230, 255, 230),
            header_text: RGBColor::new(36, 36, 36),
            trad_card: RGBColor::new(255, 240, 240),
            trad_text: RGBColor::new(180, 40, 40),
            rpi_card: RGBColor::new(240, 255, 240),
            rpi_text: RGBColor::new(15, 100, 15),
            prefix: "light-",
        }
    }
}

/// A deck illustration ready to rasterize.
#[derive(Debug, Clone)]
pub struct Artwork {
    pub file_name: String,
    pub svg: SvgBuilder,
}

impl Artwork {
    fn new(palette: &DeckArtPalette, name: &str, svg: SvgBuilder) -> Self {
        let file_name = format!("{}{}", palette.prefix, name);
        debug!("drew {} ({} elements)", file_name, svg.elements.len());
        Self { file_name, svg }
    }

    /// Render to PNG bytes at 1:1 scale.
    pub fn to_png(&self) -> Result<Vec<u8>> {
        Ok(svg_to_png(&self.svg.build(), &RasterOptions::default())?)
    }
}

/// All artwork a deck of the given variant embeds, in drawing order.
pub fn generate(variant: Variant, palette: &DeckArtPalette) -> Vec<Artwork> {
    let mut art = vec![rpi_pipeline(variant, palette)];
    if variant == Variant::Enhanced {
        art.push(drpi_pipeline(palette));
    }
    art.push(quality_comparison(variant, palette));
    art.push(role_mapping(variant, palette));
    art
}

/// Pixel canvas with the drawing primitives of the deck art.
struct Canvas<'a> {
    svg: SvgBuilder,
    palette: &'a DeckArtPalette,
}

impl<'a> Canvas<'a> {
    fn new(width: f64, height: f64, palette: &'a DeckArtPalette) -> Self {
        let mut svg = SvgBuilder::new(width, height);
        svg.add_rect(SvgRect::new(0.0, 0.0, width, height).with_fill(palette.background));
        Self { svg, palette }
    }

    /// Text with its top-left corner at (`x`, `y`). Lines split on `\n`.
    fn text(&mut self, x: f64, y: f64, text: &str, color: RGBColor, font: Font) {
        let (size, bold) = font.metrics();
        for (i, line) in text.lines().enumerate() {
            let top = y + i as f64 * (size + LINE_SPACING);
            self.svg.add_text(
                SvgText::new(x, (top + size * ASCENT).round(), line)
                    .with_font_size(size)
                    .with_bold(bold)
                    .with_fill(color)
                    .with_font_family(FONT_FAMILY),
            );
        }
    }

    fn rounded_box(&mut self, x: f64, y: f64, w: f64, h: f64, outline: RGBColor) {
        let fill = self.palette.card;
        self.svg.add_rect(
            SvgRect::new(x, y, w, h)
                .with_rx(10.0)
                .with_fill(fill)
                .with_stroke(outline, 2.0),
        );
    }

    fn pill(&mut self, x: f64, y: f64, w: f64, h: f64, radius: f64, fill: RGBColor) {
        self.svg.add_rect(SvgRect::new(x, y, w, h).with_rx(radius).with_fill(fill));
    }

    #[allow(clippy::too_many_arguments)]
    fn outlined_pill(&mut self, x: f64, y: f64, w: f64, h: f64, radius: f64, fill: RGBColor, outline: RGBColor) {
        self.svg.add_rect(
            SvgRect::new(x, y, w, h)
                .with_rx(radius)
                .with_fill(fill)
                .with_stroke(outline, 1.0),
        );
    }

    fn dashed_box(&mut self, x: f64, y: f64, w: f64, h: f64, color: RGBColor) {
        let mut rect = SvgRect::new(x, y, w, h)
            .with_stroke(color, 2.0)
            .with_dasharray("10 6");
        rect.fill = None;
        self.svg.add_rect(rect);
    }

    fn line(&mut self, points: &[(f64, f64)], color: RGBColor, width: f64) {
        self.svg.add_path(SvgPath::polyline(points).with_stroke(color, width));
    }

    fn arrow(&mut self, from: (f64, f64), to: (f64, f64), color: RGBColor, dashed: bool) {
        let mut path = SvgPath::polyline(&[from, to]).with_stroke(color, 2.0);
        if dashed {
            path = path.with_dasharray("8 6");
        }
        self.svg.add_path(path);
        self.svg.add_polygon(SvgPolygon::new(arrowhead(from, to), color));
    }

    /// Red `/clear` disc of radius `r`, its caption pulled back by `inset`.
    fn clear_marker(&mut self, cx: f64, cy: f64, r: f64, inset: (f64, f64)) {
        self.svg.add_circle(SvgCircle::new(cx, cy, r, RED));
        self.text(cx - inset.0, cy - inset.1, "/clear", WHITE, Font::Small);
    }

    fn finish(self) -> SvgBuilder {
        self.svg
    }
}

/// Triangle 8px long and 8px wide ending at `to`, corners truncated to
/// whole pixels.
fn arrowhead(from: (f64, f64), to: (f64, f64)) -> Vec<(f64, f64)> {
    let (dx, dy) = (to.0 - from.0, to.1 - from.1);
    let length = (dx * dx + dy * dy).sqrt().max(1.0);
    let (ux, uy) = (dx / length, dy / length);
    let (px, py) = (-uy, ux);
    vec![
        to,
        ((to.0 - 8.0 * ux + 4.0 * px).trunc(), (to.1 - 8.0 * uy + 4.0 * py).trunc()),
        ((to.0 - 8.0 * ux - 4.0 * px).trunc(), (to.1 - 8.0 * uy - 4.0 * py).trunc()),
    ]
}

const PHASES: [(&str, RGBColor); 4] = [
    ("Research", BLUE),
    ("Plan", GREEN),
    ("Implement", ORANGE),
    ("Review", PURPLE),
];

/// Approximate centering used for the phase names.
fn name_x(x: f64, box_w: f64, name: &str) -> f64 {
    x + (box_w / 2.0).floor() - name.chars().count() as f64 * 5.0
}

/// Four phases with typed inputs, joined by arrows and `/clear` markers.
pub fn rpi_pipeline(variant: Variant, palette: &DeckArtPalette) -> Artwork {
    const TYPE_LABELS: [&str; 5] = ["Uncertainty", "Knowledge", "Strategy", "Working Code", "Validated Code"];
    let (w, h) = (1600.0, 600.0);
    let (box_w, box_h, y_top) = (260.0, 100.0, 250.0);
    let row = RowLayout::new(60.0, box_w, 100.0);

    let mut c = Canvas::new(w, h, palette);
    c.text(w / 2.0 - 200.0, 12.0, "The RPI Pipeline", palette.text, Font::Title);

    for (i, &(name, color)) in PHASES.iter().enumerate() {
        let x = row.position(i);
        trace!("deck art phase '{}' at x={}", name, x);
        c.rounded_box(x, y_top, box_w, box_h, color);
        c.text(name_x(x, box_w, name), y_top + 35.0, name, color, Font::Zone);
        c.text(x + 10.0, y_top - 40.0, TYPE_LABELS[i], palette.secondary, Font::Comp);

        if i + 1 < PHASES.len() {
            let ay = y_top + box_h / 2.0;
            c.arrow((row.end(i) + 4.0, ay), (row.position(i + 1) - 4.0, ay), color, false);
            c.clear_marker(row.gap_center(i), ay, 16.0, (12.0, 7.0));
        }
    }
    let last_x = row.position(PHASES.len() - 1);
    c.text(last_x + 100.0, y_top - 40.0, TYPE_LABELS[4], palette.secondary, Font::Comp);

    if variant == Variant::Enhanced {
        let pill_y = y_top + box_h + 40.0;
        c.pill(w / 2.0 - 150.0, pill_y, 300.0, 40.0, 8.0, GREEN);
        c.text(w / 2.0 - 130.0, pill_y + 8.0, "Up to 88% faster task completion", WHITE, Font::Comp);
    }

    c.text(60.0, h - 60.0, "Red circles = /clear (context reset between phases)", RED, Font::Comp);
    c.text(
        60.0,
        h - 35.0,
        "Each phase transforms one type of understanding into the next",
        palette.secondary,
        Font::Small,
    );

    let name = match variant {
        Variant::Basic => "hve-rpi-pipeline.png",
        Variant::Enhanced => "hve-rpi-pipeline-enhanced.png",
    };
    Artwork::new(palette, name, c.finish())
}

/// Optional Discovery ahead of the RPI phases, with the review loop.
pub fn drpi_pipeline(palette: &DeckArtPalette) -> Artwork {
    const TYPE_LABELS: [&str; 5] = ["Uncertainty", "Knowledge", "Strategy", "Working Code", "Validated Code"];
    let (w, h) = (1600.0, 650.0);
    let (disc_x, disc_y, disc_w, disc_h) = (40.0, 260.0, 220.0, 100.0);
    let (box_w, box_h, y_top) = (240.0, 100.0, 260.0);
    let row = RowLayout::new(320.0, box_w, 60.0);
    let muted = palette.muted;

    let mut c = Canvas::new(w, h, palette);
    c.text(w / 2.0 - 250.0, 12.0, "D-RPI: Discovery + RPI Pipeline", palette.text, Font::Title);

    c.dashed_box(disc_x, disc_y, disc_w, disc_h, muted);
    c.text(disc_x + 40.0, disc_y + 35.0, "Discovery", muted, Font::Zone);
    c.text(disc_x + 60.0, disc_y + disc_h + 8.0, "(optional)", muted, Font::Small);

    for (i, &(name, color)) in PHASES.iter().enumerate() {
        let x = row.position(i);
        c.rounded_box(x, y_top, box_w, box_h, color);
        c.text(name_x(x, box_w, name), y_top + 35.0, name, color, Font::Zone);
        c.text(x + 10.0, y_top - 35.0, TYPE_LABELS[i], palette.secondary, Font::Comp);

        if i + 1 < PHASES.len() {
            let ay = y_top + box_h / 2.0;
            c.arrow((row.end(i) + 4.0, ay), (row.position(i + 1) - 4.0, ay), color, false);
            c.clear_marker(row.gap_center(i), ay, 14.0, (10.0, 6.0));
        }
    }

    c.text(disc_x + 10.0, disc_y - 35.0, "Empathize/\nDefine", muted, Font::Comp);
    c.arrow(
        (disc_x + disc_w + 4.0, disc_y + disc_h / 2.0),
        (row.start - 4.0, y_top + box_h / 2.0),
        muted,
        true,
    );

    let last_x = row.position(PHASES.len() - 1);
    c.text(last_x + 80.0, y_top - 35.0, TYPE_LABELS[4], palette.secondary, Font::Comp);

    // Review back to Research, under the boxes
    let bottom = y_top + box_h;
    let loop_y = bottom + 40.0;
    let review_cx = last_x + box_w / 2.0;
    let research_cx = row.start + box_w / 2.0;
    c.line(
        &[(review_cx, bottom), (review_cx, loop_y), (research_cx, loop_y), (research_cx, bottom)],
        PURPLE,
        2.0,
    );
    c.svg.add_polygon(SvgPolygon::new(
        vec![
            (research_cx, bottom),
            (research_cx - 5.0, bottom + 10.0),
            (research_cx + 5.0, bottom + 10.0),
        ],
        PURPLE,
    ));
    c.text(w / 2.0 - 60.0, loop_y - 18.0, "iteration loops", PURPLE, Font::Small);

    c.text(40.0, h - 55.0, "Dashed border = optional Discovery phase", muted, Font::Comp);
    c.text(
        40.0,
        h - 30.0,
        "Red circles = /clear (context reset)  |  Purple loop = Review can route back",
        palette.secondary,
        Font::Small,
    );

    Artwork::new(palette, "hve-drpi-pipeline.png", c.finish())
}

/// One compared dimension: name, traditional outcome, RPI outcome.
pub const QUALITY_ROWS: [(&str, &str, &str); 5] = [
    ("Pattern Matching", "Invents plausible patterns", "Finds actual codebase patterns"),
    ("Traceability", "No audit trail", "Research → Plan → Code chain"),
    ("Knowledge Transfer", "Lost between sessions", "Preserved in research artifacts"),
    ("Rework", "30-50% of AI output discarded", "< 10% rework rate"),
    ("Validation", "Manual review only", "Structured multi-dimension review"),
];

pub fn quality_comparison(variant: Variant, palette: &DeckArtPalette) -> Artwork {
    let (w, h) = (1600.0, 700.0);
    let (col_left, col_right, col_w) = (100.0, 850.0, 650.0);
    // Dimension bars run from the left column past the right edge of the canvas
    let bar_right = col_left + col_w + col_right - col_left + col_w - col_left;

    let mut c = Canvas::new(w, h, palette);
    c.text(w / 2.0 - 200.0, 12.0, "Quality Comparison", palette.text, Font::Title);

    c.pill(col_left, 55.0, col_w, 40.0, 8.0, palette.trad_header);
    c.text(col_left + col_w / 2.0 - 60.0, 65.0, "Traditional AI", palette.header_text, Font::Zone);
    c.pill(col_right, 55.0, col_w, 40.0, 8.0, palette.rpi_header);
    c.text(col_right + col_w / 2.0 - 30.0, 65.0, "RPI", palette.header_text, Font::Zone);

    let rows = RowLayout::new(120.0, 0.0, 110.0);
    for (i, &(dimension, trad, rpi)) in QUALITY_ROWS.iter().enumerate() {
        let ry = rows.position(i);
        c.pill(col_left, ry, bar_right - col_left, 30.0, 4.0, palette.card);
        c.text(
            w / 2.0 - dimension.chars().count() as f64 * 4.0,
            ry + 6.0,
            dimension,
            palette.text,
            Font::Label,
        );

        c.outlined_pill(col_left, ry + 35.0, col_w, 55.0, 8.0, palette.trad_card, RED);
        c.text(col_left + 20.0, ry + 50.0, trad, palette.trad_text, Font::Comp);
        c.outlined_pill(col_right, ry + 35.0, col_w, 55.0, 8.0, palette.rpi_card, GREEN);
        c.text(col_right + 20.0, ry + 50.0, rpi, palette.rpi_text, Font::Comp);
    }

    let name = match variant {
        Variant::Basic => "hve-quality-comparison.png",
        Variant::Enhanced => "hve-quality-comparison-enhanced.png",
    };
    Artwork::new(palette, name, c.finish())
}

/// Role, collection, workflow and card color.
pub const DECK_ROLES: [(&str, &str, &str, RGBColor); 8] = [
    ("Developer", "hve-core", "RPI Pipeline", BLUE),
    ("TPM / Lead", "project-planning", "Reqs → PRD → WIT", GREEN),
    ("Platform Engineer", "coding-standards", "Artifact authoring", ORANGE),
    ("OSS Contributor", "github", "Backlog management", PURPLE),
    ("Security Engineer", "security-planning", "Threat modeling", RED),
    ("Data Scientist", "data-science", "Spec → Notebook → Dashboard", TEAL),
    ("Project Planner", "project-planning", "PRD / BRD / ADR", BLUE),
    ("UX / DT Practitioner", "design-thinking", "9-method coaching", PURPLE),
];

/// Four columns of 340x170 cards spread across the canvas width.
pub fn role_cards() -> GridLayout {
    let (w, cols, card_w, x_start) = (1600.0, 4usize, 340.0, 40.0);
    let gap_x = ((w - 2.0 * x_start - cols as f64 * card_w) / (cols as f64 - 1.0)).floor();
    GridLayout {
        cols,
        cell_w: card_w,
        cell_h: 170.0,
        gap_x,
        gap_y: 40.0,
        start_x: x_start,
        start_y: 60.0,
    }
}

pub fn role_mapping(variant: Variant, palette: &DeckArtPalette) -> Artwork {
    let (w, h) = (1600.0, 900.0);
    let mut c = Canvas::new(w, h, palette);
    let (title_x, title, legend, name) = match variant {
        Variant::Basic => (
            w / 2.0 - 150.0,
            "Who Uses HVE-Core?",
            "Each role maps to a specific collection and workflow pattern — no overlap, no confusion",
            "hve-role-mapping.png",
        ),
        Variant::Enhanced => (
            w / 2.0 - 200.0,
            "Eight Roles, One Framework",
            "Each role maps to a specific collection and workflow pattern",
            "hve-role-mapping-enhanced.png",
        ),
    };
    c.text(title_x, 12.0, title, palette.text, Font::Title);

    let grid = role_cards();
    for (idx, &(role, collection, workflow, color)) in DECK_ROLES.iter().enumerate() {
        let card = grid.cell(idx);
        let (x, y) = (card.x, card.y);
        c.rounded_box(x, y, card.w, card.h, color);
        c.text(x + 15.0, y + 15.0, role, color, Font::Zone);
        c.text(
            x + 15.0,
            y + 50.0,
            &format!("Collection: {collection}"),
            palette.secondary,
            Font::Comp,
        );
        c.outlined_pill(x + 15.0, y + 85.0, card.w - 30.0, 45.0, 6.0, palette.background, color);
        c.text(x + 25.0, y + 95.0, workflow, color, Font::Comp);
        c.svg.add_line(SvgLine::new(x + 15.0, y + 75.0, card.right() - 15.0, y + 75.0, color, 1.0));
    }

    c.text(40.0, h - 40.0, legend, palette.secondary, Font::Small);
    Artwork::new(palette, name, c.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::images::svg::SvgElement;

    fn texts(art: &Artwork) -> Vec<&SvgText> {
        art.svg
            .elements
            .iter()
            .filter_map(|e| match e {
                SvgElement::Text(t) => Some(t),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_file_names_per_palette() {
        let dark: Vec<String> = generate(Variant::Basic, &DeckArtPalette::dark())
            .into_iter()
            .map(|a| a.file_name)
            .collect();
        assert_eq!(
            dark,
            vec!["hve-rpi-pipeline.png", "hve-quality-comparison.png", "hve-role-mapping.png"]
        );

        let light: Vec<String> = generate(Variant::Enhanced, &DeckArtPalette::light())
            .into_iter()
            .map(|a| a.file_name)
            .collect();
        assert_eq!(
            light,
            vec![
                "light-hve-rpi-pipeline-enhanced.png",
                "light-hve-drpi-pipeline.png",
                "light-hve-quality-comparison-enhanced.png",
                "light-hve-role-mapping-enhanced.png",
            ]
        );
    }

    #[test]
    fn test_arrowhead_points_along_line() {
        assert_eq!(
            arrowhead((324.0, 300.0), (416.0, 300.0)),
            vec![(416.0, 300.0), (408.0, 304.0), (408.0, 296.0)]
        );
    }

    #[test]
    fn test_text_is_placed_by_top_left() {
        let art = rpi_pipeline(Variant::Basic, &DeckArtPalette::dark());
        let title = texts(&art)[0];
        assert_eq!(title.text, "The RPI Pipeline");
        assert_eq!(title.x, 600.0);
        assert_eq!(title.y, (12.0 + 22.0 * ASCENT).round());
        assert!(title.bold);
    }

    #[test]
    fn test_stat_pill_only_when_enhanced() {
        let pill = |art: &Artwork| {
            art.svg
                .elements
                .iter()
                .any(|e| matches!(e, SvgElement::Rect(r) if r.x == 650.0 && r.y == 390.0 && r.width == 300.0))
        };
        let palette = DeckArtPalette::dark();
        assert!(pill(&rpi_pipeline(Variant::Enhanced, &palette)));
        assert!(!pill(&rpi_pipeline(Variant::Basic, &palette)));
    }

    #[test]
    fn test_role_cards_grid() {
        let grid = role_cards();
        assert_eq!(grid.gap_x, 53.0);
        let first_row: Vec<f64> = (0..4).map(|i| grid.cell(i).x).collect();
        assert_eq!(first_row, vec![40.0, 433.0, 826.0, 1219.0]);
        assert_eq!(grid.cell(4).y, 270.0);
    }

    #[test]
    fn test_multiline_label() {
        let art = drpi_pipeline(&DeckArtPalette::dark());
        let lines: Vec<&str> = texts(&art)
            .iter()
            .filter(|t| t.x == 50.0 && t.font_size == Some(13.0))
            .map(|t| t.text.as_str())
            .collect();
        assert_eq!(lines, vec!["Empathize/", "Define"]);
    }

    #[test]
    fn test_light_background() {
        let art = quality_comparison(Variant::Enhanced, &DeckArtPalette::light());
        assert!(art.svg.build().contains(r##"fill="#F8F8F8""##));
    }

    #[test]
    fn test_render_png() {
        let png = role_mapping(Variant::Basic, &DeckArtPalette::dark()).to_png().unwrap();
        assert_eq!(&png[1..4], b"PNG");
        assert_eq!(u32::from_be_bytes([png[16], png[17], png[18], png[19]]), 1600);
        assert_eq!(u32::from_be_bytes([png[20], png[21], png[22], png[23]]), 900);
    }
}
