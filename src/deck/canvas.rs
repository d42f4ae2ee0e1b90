//! Slide drawing helpers.
//!
//! Slides are laid out in inches on a 13.333" x 7.5" page. Every helper
//! writes Segoe UI text and resolves unset colors against the deck [`Theme`].
use super::theme::Theme;
use crate::common::{Length, RGBColor, Result};
use crate::ooxml::pptx::{
    AutoShapeType, MutableShape, MutableSlide, TextAlign, TextParagraph, TextRun, VerticalAnchor,
};
use log::trace;
use std::fs;
use std::path::Path;

pub const FONT_FACE: &str = "Segoe UI";

/// Space after each paragraph of a multi-line text box, in points.
const PARAGRAPH_SPACING: f64 = 4.0;

/// A rectangle in inches: left, top, width, height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect(pub f64, pub f64, pub f64, pub f64);

impl Rect {
    fn lengths(self) -> (Length, Length, Length, Length) {
        (
            Length::from_inches(self.0),
            Length::from_inches(self.1),
            Length::from_inches(self.2),
            Length::from_inches(self.3),
        )
    }
}

/// Font settings of a single-paragraph text box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f64,
    pub bold: bool,
    /// `None` uses the theme's primary text color
    pub color: Option<RGBColor>,
    pub align: TextAlign,
}

impl TextStyle {
    pub const fn new(size: f64) -> Self {
        Self {
            size,
            bold: false,
            color: None,
            align: TextAlign::Left,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn color(mut self, color: RGBColor) -> Self {
        self.color = Some(color);
        self
    }

    pub const fn centered(mut self) -> Self {
        self.align = TextAlign::Center;
        self
    }
}

/// One paragraph of a multi-line text box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line<'a> {
    pub text: &'a str,
    pub size: f64,
    pub bold: bool,
    pub color: Option<RGBColor>,
}

impl<'a> Line<'a> {
    pub const fn new(text: &'a str, size: f64, color: RGBColor) -> Self {
        Self {
            text,
            size,
            bold: false,
            color: Some(color),
        }
    }

    pub const fn bold(text: &'a str, size: f64, color: RGBColor) -> Self {
        Self {
            text,
            size,
            bold: true,
            color: Some(color),
        }
    }

    /// Empty paragraph whose font size sets the vertical gap.
    pub const fn gap(size: f64) -> Self {
        Self {
            text: "",
            size,
            bold: false,
            color: None,
        }
    }
}

/// Draws onto one slide with the colors of a theme.
pub struct SlideCanvas<'a> {
    slide: &'a mut MutableSlide,
    theme: &'a Theme,
}

impl<'a> SlideCanvas<'a> {
    /// Wrap `slide`, painting its background with the theme color.
    pub fn new(slide: &'a mut MutableSlide, theme: &'a Theme) -> Self {
        slide.set_background(theme.background);
        Self { slide, theme }
    }

    #[inline]
    pub fn theme(&self) -> &Theme {
        self.theme
    }

    /// A word-wrapped text box holding one paragraph.
    pub fn text(&mut self, at: Rect, text: &str, style: TextStyle) {
        let color = style.color.unwrap_or(self.theme.text);
        let (x, y, w, h) = at.lengths();
        self.slide.add_text_box(x, y, w, h).add_paragraph(
            TextParagraph::new(
                TextRun::new(text)
                    .size(style.size)
                    .bold(style.bold)
                    .color(color)
                    .font(FONT_FACE),
            )
            .align(style.align),
        );
    }

    /// A text box with one paragraph per line.
    pub fn multi_text(&mut self, at: Rect, lines: &[Line<'_>]) {
        let (x, y, w, h) = at.lengths();
        let default_color = self.theme.text;
        let shape = self.slide.add_text_box(x, y, w, h);
        for line in lines {
            shape.add_paragraph(
                TextParagraph::new(
                    TextRun::new(line.text)
                        .size(line.size)
                        .bold(line.bold)
                        .color(line.color.unwrap_or(default_color))
                        .font(FONT_FACE),
                )
                .space_after(PARAGRAPH_SPACING),
            );
        }
    }

    /// A filled preset shape without outline, with bold centered text.
    pub fn shape(
        &mut self,
        kind: AutoShapeType,
        at: Rect,
        text: &str,
        fill: RGBColor,
        size: f64,
        font_color: RGBColor,
    ) -> &mut MutableShape {
        trace!("{} '{}' at {:?}", kind.display_name(), text, at);
        let (x, y, w, h) = at.lengths();
        self.slide
            .add_auto_shape(kind, x, y, w, h)
            .fill(fill)
            .anchor(VerticalAnchor::Middle)
            .add_paragraph(
                TextParagraph::new(
                    TextRun::new(text)
                        .size(size)
                        .bold(true)
                        .color(font_color)
                        .font(FONT_FACE),
                )
                .align(TextAlign::Center),
            )
    }

    /// Rounded rectangle in an accent color with light text.
    pub fn pill(&mut self, at: Rect, text: &str, fill: RGBColor, size: f64) {
        let on_accent = self.theme.on_accent;
        self.shape(AutoShapeType::RoundedRectangle, at, text, fill, size, on_accent);
    }

    /// Numbered or marker circle in an accent color.
    pub fn oval(&mut self, at: Rect, text: &str, fill: RGBColor, size: f64) {
        let on_accent = self.theme.on_accent;
        self.shape(AutoShapeType::Oval, at, text, fill, size, on_accent);
    }

    /// Rounded rectangle in the card color with colored text.
    pub fn card(&mut self, at: Rect, text: &str, size: f64, font_color: RGBColor) {
        let card = self.theme.card;
        self.shape(AutoShapeType::RoundedRectangle, at, text, card, size, font_color);
    }

    /// Straight connector between two points in inches.
    pub fn line(&mut self, from: (f64, f64), to: (f64, f64), color: RGBColor, width_pt: f64) {
        self.slide.add_connector(
            (Length::from_inches(from.0), Length::from_inches(from.1)),
            (Length::from_inches(to.0), Length::from_inches(to.1)),
            color,
            Length::from_pt(width_pt),
        );
    }

    /// Plain filled rectangle.
    pub fn bar(&mut self, x: Length, y: Length, w: Length, h: Length, color: RGBColor) {
        self.slide
            .add_auto_shape(AutoShapeType::Rectangle, x, y, w, h)
            .fill(color);
    }

    /// Short 4pt rule under a heading, at the left margin.
    pub fn accent_bar(&mut self, top: f64, color: RGBColor) {
        self.bar(
            Length::from_inches(0.8),
            Length::from_inches(top),
            Length::from_inches(0.8),
            Length::from_pt(4.0),
            color,
        );
    }

    /// The usual slide heading: a 32pt title at 0.5" with its accent bar at 1.1".
    pub fn heading(&mut self, title: &str, bar: RGBColor) {
        self.text(Rect(0.8, 0.5, 10.0, 0.7), title, TextStyle::new(32.0).bold());
        self.accent_bar(1.1, bar);
    }

    /// Embed an image file. A missing file is an I/O error.
    pub fn picture(&mut self, path: &Path, at: Rect) -> Result<()> {
        let data = fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let (x, y, w, h) = at.lengths();
        self.slide.add_picture(data, &name, x, y, w, h)?;
        Ok(())
    }

    pub fn notes(&mut self, text: &str) {
        self.slide.set_notes(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::pptx::MutablePresentation;

    #[test]
    fn test_text_defaults_to_theme_color() {
        let theme = Theme::light();
        let mut prs = MutablePresentation::new();
        let mut c = SlideCanvas::new(prs.add_slide(), &theme);
        c.text(Rect(0.8, 0.5, 10.0, 0.7), "Title", TextStyle::new(32.0).bold());
        c.text(Rect(0.8, 1.5, 10.0, 0.7), "Aside", TextStyle::new(14.0).color(theme.teal).centered());

        let slide = &prs.slides()[0];
        assert_eq!(slide.background(), Some(theme.background));
        let title = &slide.shapes()[0].paragraphs()[0];
        assert_eq!(title.runs[0].color, Some(theme.text));
        assert_eq!(title.runs[0].font.as_deref(), Some(FONT_FACE));
        assert!(title.runs[0].bold);
        let aside = &slide.shapes()[1].paragraphs()[0];
        assert_eq!(aside.runs[0].color, Some(theme.teal));
        assert_eq!(aside.align, Some(TextAlign::Center));
    }

    #[test]
    fn test_multi_text_paragraphs() {
        let theme = Theme::dark();
        let mut prs = MutablePresentation::new();
        let mut c = SlideCanvas::new(prs.add_slide(), &theme);
        c.multi_text(
            Rect(1.0, 1.5, 7.5, 4.0),
            &[
                Line::bold("Reality:", 20.0, theme.red),
                Line::gap(12.0),
                Line::new("detail", 14.0, theme.secondary),
            ],
        );

        let paragraphs = prs.slides()[0].shapes()[0].paragraphs();
        assert_eq!(paragraphs.len(), 3);
        assert!(paragraphs.iter().all(|p| p.space_after == Some(PARAGRAPH_SPACING)));
        assert_eq!(paragraphs[1].runs[0].size, Some(12.0));
        assert_eq!(paragraphs[1].runs[0].color, Some(theme.text));
        assert_eq!(paragraphs[2].runs[0].color, Some(theme.secondary));
    }

    #[test]
    fn test_heading_and_pill() {
        let theme = Theme::dark();
        let mut prs = MutablePresentation::new();
        let mut c = SlideCanvas::new(prs.add_slide(), &theme);
        c.heading("The Problem", theme.red);
        c.pill(Rect(0.8, 6.0, 3.0, 0.5), "Overview", theme.blue, 12.0);

        let slide = &prs.slides()[0];
        assert_eq!(slide.shape_count(), 3);
        assert_eq!(slide.text(), "The Problem\nOverview");
        let pill = &slide.shapes()[2].paragraphs()[0];
        assert_eq!(pill.align, Some(TextAlign::Center));
        assert_eq!(pill.runs[0].color, Some(theme.on_accent));
    }

    #[test]
    fn test_missing_picture_is_io_error() {
        let theme = Theme::dark();
        let mut prs = MutablePresentation::new();
        let mut c = SlideCanvas::new(prs.add_slide(), &theme);
        let err = c
            .picture(Path::new("/nonexistent/art.png"), Rect(0.3, 1.2, 12.7, 5.8))
            .unwrap_err();
        assert!(matches!(err, crate::common::Error::Io(_)));
    }
}
