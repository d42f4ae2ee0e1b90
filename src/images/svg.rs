// SVG generation module
//
// Retained document model for the diagram generators: elements are collected
// in draw order and serialized in one pass by `SvgBuilder::build`.

use crate::common::RGBColor;
use crate::images::svg_utils::{
    write_attr, write_color_attr, write_num, write_num_attr, write_xml_escaped,
};

/// SVG path commands
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Move to absolute position
    MoveTo { x: f64, y: f64 },
    /// Line to absolute position
    LineTo { x: f64, y: f64 },
    /// Close path
    ClosePath,
}

impl PathCommand {
    fn write_svg(&self, buf: &mut String) {
        match *self {
            Self::MoveTo { x, y } => {
                buf.push_str("M ");
                write_num(buf, x);
                buf.push(' ');
                write_num(buf, y);
            },
            Self::LineTo { x, y } => {
                buf.push_str("L ");
                write_num(buf, x);
                buf.push(' ');
                write_num(buf, y);
            },
            Self::ClosePath => buf.push('Z'),
        }
    }
}

/// `text-anchor` values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

/// SVG path element
#[derive(Debug, Clone, PartialEq)]
pub struct SvgPath {
    pub commands: Vec<PathCommand>,
    pub stroke: Option<RGBColor>,
    pub stroke_width: f64,
    pub fill: Option<RGBColor>,
    pub stroke_dasharray: Option<String>,
    /// Id of a `<marker>` drawn at the path end
    pub marker_end: Option<String>,
}

impl SvgPath {
    /// Create new path with commands, stroked 1px black and unfilled
    pub fn new(commands: Vec<PathCommand>) -> Self {
        Self {
            commands,
            stroke: Some(RGBColor::new(0, 0, 0)),
            stroke_width: 1.0,
            fill: None,
            stroke_dasharray: None,
            marker_end: None,
        }
    }

    /// Straight segment through the given points
    pub fn polyline(points: &[(f64, f64)]) -> Self {
        let commands = points
            .iter()
            .enumerate()
            .map(|(i, &(x, y))| {
                if i == 0 {
                    PathCommand::MoveTo { x, y }
                } else {
                    PathCommand::LineTo { x, y }
                }
            })
            .collect();
        Self::new(commands)
    }

    pub fn with_stroke(mut self, color: RGBColor, width: f64) -> Self {
        self.stroke = Some(color);
        self.stroke_width = width;
        self
    }

    pub fn with_fill(mut self, color: RGBColor) -> Self {
        self.fill = Some(color);
        self
    }

    pub fn with_dasharray(mut self, dasharray: impl Into<String>) -> Self {
        self.stroke_dasharray = Some(dasharray.into());
        self
    }

    pub fn with_marker_end(mut self, marker_id: impl Into<String>) -> Self {
        self.marker_end = Some(marker_id.into());
        self
    }

    fn write_svg(&self, buf: &mut String) {
        buf.push_str("<path d=\"");
        for (i, cmd) in self.commands.iter().enumerate() {
            if i > 0 {
                buf.push(' ');
            }
            cmd.write_svg(buf);
        }
        buf.push('"');
        write_color_attr(buf, "stroke", self.stroke);
        write_num_attr(buf, "stroke-width", self.stroke_width);
        if let Some(ref dash) = self.stroke_dasharray {
            write_attr(buf, "stroke-dasharray", dash);
        }
        write_color_attr(buf, "fill", self.fill);
        if let Some(ref marker) = self.marker_end {
            buf.push_str(" marker-end=\"url(#");
            write_xml_escaped(buf, marker);
            buf.push_str(")\"");
        }
        buf.push_str("/>");
    }
}

/// SVG rectangle element
#[derive(Debug, Clone, PartialEq)]
pub struct SvgRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Corner radius
    pub rx: Option<f64>,
    pub fill: Option<RGBColor>,
    pub stroke: Option<RGBColor>,
    pub stroke_width: f64,
    pub stroke_dasharray: Option<String>,
    pub opacity: Option<f64>,
}

impl SvgRect {
    /// Unfilled, unstroked rectangle
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            rx: None,
            fill: None,
            stroke: None,
            stroke_width: 0.0,
            stroke_dasharray: None,
            opacity: None,
        }
    }

    pub fn with_rx(mut self, rx: f64) -> Self {
        self.rx = Some(rx);
        self
    }

    pub fn with_fill(mut self, color: RGBColor) -> Self {
        self.fill = Some(color);
        self
    }

    pub fn with_stroke(mut self, color: RGBColor, width: f64) -> Self {
        self.stroke = Some(color);
        self.stroke_width = width;
        self
    }

    pub fn with_dasharray(mut self, dasharray: impl Into<String>) -> Self {
        self.stroke_dasharray = Some(dasharray.into());
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    fn write_svg(&self, buf: &mut String) {
        buf.push_str("<rect");
        write_num_attr(buf, "x", self.x);
        write_num_attr(buf, "y", self.y);
        write_num_attr(buf, "width", self.width);
        write_num_attr(buf, "height", self.height);
        if let Some(rx) = self.rx {
            write_num_attr(buf, "rx", rx);
        }
        write_color_attr(buf, "fill", self.fill);
        if self.stroke.is_some() {
            write_color_attr(buf, "stroke", self.stroke);
            write_num_attr(buf, "stroke-width", self.stroke_width);
        }
        if let Some(ref dash) = self.stroke_dasharray {
            write_attr(buf, "stroke-dasharray", dash);
        }
        if let Some(opacity) = self.opacity {
            write_num_attr(buf, "opacity", opacity);
        }
        buf.push_str("/>");
    }
}

/// SVG circle element
#[derive(Debug, Clone, PartialEq)]
pub struct SvgCircle {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub fill: Option<RGBColor>,
    pub opacity: Option<f64>,
}

impl SvgCircle {
    pub fn new(cx: f64, cy: f64, r: f64, fill: RGBColor) -> Self {
        Self {
            cx,
            cy,
            r,
            fill: Some(fill),
            opacity: None,
        }
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    fn write_svg(&self, buf: &mut String) {
        buf.push_str("<circle");
        write_num_attr(buf, "cx", self.cx);
        write_num_attr(buf, "cy", self.cy);
        write_num_attr(buf, "r", self.r);
        write_color_attr(buf, "fill", self.fill);
        if let Some(opacity) = self.opacity {
            write_num_attr(buf, "opacity", opacity);
        }
        buf.push_str("/>");
    }
}

/// SVG line element
#[derive(Debug, Clone, PartialEq)]
pub struct SvgLine {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke: RGBColor,
    pub stroke_width: f64,
    pub opacity: Option<f64>,
}

impl SvgLine {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke: RGBColor, stroke_width: f64) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke,
            stroke_width,
            opacity: None,
        }
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    fn write_svg(&self, buf: &mut String) {
        buf.push_str("<line");
        write_num_attr(buf, "x1", self.x1);
        write_num_attr(buf, "y1", self.y1);
        write_num_attr(buf, "x2", self.x2);
        write_num_attr(buf, "y2", self.y2);
        write_color_attr(buf, "stroke", Some(self.stroke));
        write_num_attr(buf, "stroke-width", self.stroke_width);
        if let Some(opacity) = self.opacity {
            write_num_attr(buf, "opacity", opacity);
        }
        buf.push_str("/>");
    }
}

/// SVG polygon element
#[derive(Debug, Clone, PartialEq)]
pub struct SvgPolygon {
    pub points: Vec<(f64, f64)>,
    pub fill: Option<RGBColor>,
}

impl SvgPolygon {
    pub fn new(points: Vec<(f64, f64)>, fill: RGBColor) -> Self {
        Self {
            points,
            fill: Some(fill),
        }
    }

    fn write_svg(&self, buf: &mut String) {
        buf.push_str("<polygon points=\"");
        write_points(buf, &self.points);
        buf.push('"');
        write_color_attr(buf, "fill", self.fill);
        buf.push_str("/>");
    }
}

fn write_points(buf: &mut String, points: &[(f64, f64)]) {
    for (i, &(x, y)) in points.iter().enumerate() {
        if i > 0 {
            buf.push(',');
        }
        write_num(buf, x);
        buf.push(' ');
        write_num(buf, y);
    }
}

/// SVG text element
#[derive(Debug, Clone, PartialEq)]
pub struct SvgText {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub font_size: Option<f64>,
    pub font_family: Option<String>,
    pub fill: Option<RGBColor>,
    pub anchor: Option<TextAnchor>,
    pub bold: bool,
    pub italic: bool,
    /// Class from the document `<style>` block
    pub class: Option<String>,
}

impl SvgText {
    /// Create new text element
    pub fn new(x: f64, y: f64, text: impl Into<String>) -> Self {
        Self {
            x,
            y,
            text: text.into(),
            font_size: None,
            font_family: None,
            fill: None,
            anchor: None,
            bold: false,
            italic: false,
            class: None,
        }
    }

    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    pub fn with_fill(mut self, fill: RGBColor) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = Some(anchor);
        self
    }

    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    fn write_svg(&self, buf: &mut String) {
        buf.push_str("<text");
        write_num_attr(buf, "x", self.x);
        write_num_attr(buf, "y", self.y);
        if let Some(ref class) = self.class {
            write_attr(buf, "class", class);
        }
        if let Some(anchor) = self.anchor {
            write_attr(buf, "text-anchor", anchor.as_str());
        }
        if let Some(size) = self.font_size {
            write_num_attr(buf, "font-size", size);
        }
        if self.bold {
            buf.push_str(" font-weight=\"bold\"");
        }
        if self.italic {
            buf.push_str(" font-style=\"italic\"");
        }
        if self.fill.is_some() {
            write_color_attr(buf, "fill", self.fill);
        }
        if let Some(ref family) = self.font_family {
            write_attr(buf, "font-family", family);
        }
        buf.push('>');
        write_xml_escaped(buf, &self.text);
        buf.push_str("</text>");
    }
}

/// Arrowhead marker definition placed in `<defs>`
#[derive(Debug, Clone, PartialEq)]
pub struct SvgMarker {
    pub id: String,
    pub fill: RGBColor,
}

impl SvgMarker {
    pub fn arrowhead(id: impl Into<String>, fill: RGBColor) -> Self {
        Self {
            id: id.into(),
            fill,
        }
    }

    fn write_svg(&self, buf: &mut String) {
        buf.push_str("<marker");
        write_attr(buf, "id", &self.id);
        buf.push_str(
            r#" markerWidth="10" markerHeight="7" refX="9" refY="3.5" orient="auto"><polygon points="0 0,10 3.5,0 7""#,
        );
        write_color_attr(buf, "fill", Some(self.fill));
        buf.push_str("/></marker>");
    }
}

/// SVG element types
#[derive(Debug, Clone, PartialEq)]
pub enum SvgElement {
    Path(SvgPath),
    Rect(SvgRect),
    Circle(SvgCircle),
    Line(SvgLine),
    Polygon(SvgPolygon),
    Text(SvgText),
}

impl SvgElement {
    fn write_svg(&self, buf: &mut String) {
        match self {
            Self::Path(p) => p.write_svg(buf),
            Self::Rect(r) => r.write_svg(buf),
            Self::Circle(c) => c.write_svg(buf),
            Self::Line(l) => l.write_svg(buf),
            Self::Polygon(p) => p.write_svg(buf),
            Self::Text(t) => t.write_svg(buf),
        }
    }
}

/// SVG document builder
///
/// The root always carries `viewBox="0 0 W H"` with matching `width` and
/// `height`, followed by the optional title, `<defs>` (markers and style)
/// and the elements in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgBuilder {
    pub width: f64,
    pub height: f64,
    pub title: Option<String>,
    pub markers: Vec<SvgMarker>,
    /// Raw CSS placed in a `<style>` element inside `<defs>`
    pub style: Option<String>,
    pub elements: Vec<SvgElement>,
}

impl SvgBuilder {
    /// Create new SVG builder
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            title: None,
            markers: Vec::new(),
            style: None,
            elements: Vec::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_style(mut self, css: impl Into<String>) -> Self {
        self.style = Some(css.into());
        self
    }

    pub fn add_marker(&mut self, marker: SvgMarker) {
        self.markers.push(marker);
    }

    pub fn add_element(&mut self, element: SvgElement) {
        self.elements.push(element);
    }

    pub fn add_path(&mut self, path: SvgPath) {
        self.elements.push(SvgElement::Path(path));
    }

    pub fn add_rect(&mut self, rect: SvgRect) {
        self.elements.push(SvgElement::Rect(rect));
    }

    pub fn add_circle(&mut self, circle: SvgCircle) {
        self.elements.push(SvgElement::Circle(circle));
    }

    pub fn add_line(&mut self, line: SvgLine) {
        self.elements.push(SvgElement::Line(line));
    }

    pub fn add_polygon(&mut self, polygon: SvgPolygon) {
        self.elements.push(SvgElement::Polygon(polygon));
    }

    pub fn add_text(&mut self, text: SvgText) {
        self.elements.push(SvgElement::Text(text));
    }

    /// Generate complete SVG document
    pub fn build(&self) -> String {
        let mut svg = String::with_capacity(256 + self.elements.len() * 128);

        svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        svg.push('\n');

        svg.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 "#);
        write_num(&mut svg, self.width);
        svg.push(' ');
        write_num(&mut svg, self.height);
        svg.push('"');
        write_num_attr(&mut svg, "width", self.width);
        write_num_attr(&mut svg, "height", self.height);
        svg.push_str(">\n");

        if let Some(ref title) = self.title {
            svg.push_str("<title>");
            write_xml_escaped(&mut svg, title);
            svg.push_str("</title>\n");
        }

        if !self.markers.is_empty() || self.style.is_some() {
            svg.push_str("<defs>\n");
            for marker in &self.markers {
                svg.push_str("  ");
                marker.write_svg(&mut svg);
                svg.push('\n');
            }
            if let Some(ref css) = self.style {
                svg.push_str("  <style>\n");
                for line in css.lines() {
                    svg.push_str("    ");
                    write_xml_escaped(&mut svg, line.trim());
                    svg.push('\n');
                }
                svg.push_str("  </style>\n");
            }
            svg.push_str("</defs>\n");
        }

        for element in &self.elements {
            element.write_svg(&mut svg);
            svg.push('\n');
        }

        svg.push_str("</svg>\n");
        svg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLUE: RGBColor = RGBColor::new(0x00, 0x78, 0xD4);

    #[test]
    fn test_svg_path() {
        let mut buf = String::new();
        SvgPath::polyline(&[(0.0, 0.0), (100.0, 100.0)])
            .with_stroke(BLUE, 2.0)
            .with_marker_end("ah-blue")
            .write_svg(&mut buf);

        assert_eq!(
            buf,
            r##"<path d="M 0 0 L 100 100" stroke="#0078D4" stroke-width="2" fill="none" marker-end="url(#ah-blue)"/>"##
        );
    }

    #[test]
    fn test_dashed_rect() {
        let mut buf = String::new();
        SvgRect::new(80.0, 260.0, 240.0, 140.0)
            .with_rx(12.0)
            .with_stroke(BLUE, 2.0)
            .with_dasharray("10 6")
            .write_svg(&mut buf);

        assert!(buf.contains(r#"rx="12""#));
        assert!(buf.contains(r#"fill="none""#));
        assert!(buf.contains(r#"stroke-dasharray="10 6""#));
    }

    #[test]
    fn test_text_escaping() {
        let mut buf = String::new();
        SvgText::new(960.0, 40.0, "Quality <Traditional> & RPI")
            .with_anchor(TextAnchor::Middle)
            .with_font_size(24.0)
            .write_svg(&mut buf);

        assert!(buf.contains("Quality &lt;Traditional&gt; &amp; RPI"));
        assert!(buf.contains(r#"text-anchor="middle""#));
    }

    #[test]
    fn test_svg_builder() {
        let mut builder = SvgBuilder::new(1920.0, 600.0).with_title("RPI Pipeline");
        builder.add_marker(SvgMarker::arrowhead("ah-blue", BLUE));
        builder.add_rect(SvgRect::new(0.0, 0.0, 1920.0, 600.0).with_fill(BLUE));

        let svg = builder.build();
        assert!(svg.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(svg.contains(r#"viewBox="0 0 1920 600" width="1920" height="600""#));
        assert!(svg.contains("<title>RPI Pipeline</title>"));
        assert!(svg.contains(r#"<marker id="ah-blue""#));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_empty_builder_has_no_defs() {
        let svg = SvgBuilder::new(10.0, 10.0).build();
        assert!(!svg.contains("<defs>"));
        assert!(!svg.contains("<title>"));
    }
}
