//! Format types for PPTX presentations.

use crate::common::RGBColor;

/// Image format types supported by PPTX.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
}

impl ImageFormat {
    /// Get the MIME type for this image format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Gif => "image/gif",
        }
    }

    /// Get the file extension for this image format.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
            Self::Gif => "gif",
        }
    }

    /// Detect image format from bytes (magic number detection).
    pub fn detect_from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < 4 {
            return None;
        }

        // PNG: 89 50 4E 47
        if bytes.starts_with(&[0x89, 0x50, 0x4E, 0x47]) {
            return Some(Self::Png);
        }

        // JPEG: FF D8 FF
        if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
            return Some(Self::Jpeg);
        }

        // GIF: 47 49 46 38 (GIF8)
        if bytes.starts_with(&[0x47, 0x49, 0x46, 0x38]) {
            return Some(Self::Gif);
        }

        None
    }
}

/// Horizontal paragraph alignment (`a:pPr/@algn`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "l",
            Self::Center => "ctr",
            Self::Right => "r",
        }
    }
}

/// Vertical anchoring of a text body (`a:bodyPr/@anchor`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalAnchor {
    #[default]
    Top,
    Middle,
    Bottom,
}

impl VerticalAnchor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "t",
            Self::Middle => "ctr",
            Self::Bottom => "b",
        }
    }
}

/// Preset geometries used for auto shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoShapeType {
    Rectangle,
    RoundedRectangle,
    Oval,
}

impl AutoShapeType {
    /// DrawingML preset geometry name.
    pub fn preset(&self) -> &'static str {
        match self {
            Self::Rectangle => "rect",
            Self::RoundedRectangle => "roundRect",
            Self::Oval => "ellipse",
        }
    }

    /// Name prefix PowerPoint shows in the selection pane.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Rectangle => "Rectangle",
            Self::RoundedRectangle => "Rounded Rectangle",
            Self::Oval => "Oval",
        }
    }
}

/// A run of uniformly formatted text.
///
/// Line feeds inside `text` are written as `<a:br/>` soft breaks.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    /// Font size in points
    pub size: Option<f64>,
    pub bold: bool,
    pub italic: bool,
    pub color: Option<RGBColor>,
    /// Latin typeface
    pub font: Option<String>,
}

impl TextRun {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            size: None,
            bold: false,
            italic: false,
            color: None,
            font: None,
        }
    }

    pub fn size(mut self, pt: f64) -> Self {
        self.size = Some(pt);
        self
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    pub fn color(mut self, color: RGBColor) -> Self {
        self.color = Some(color);
        self
    }

    pub fn font(mut self, font: impl Into<String>) -> Self {
        self.font = Some(font.into());
        self
    }
}

/// A paragraph of one or more runs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextParagraph {
    pub runs: Vec<TextRun>,
    pub align: Option<TextAlign>,
    /// Space after the paragraph in points
    pub space_after: Option<f64>,
}

impl TextParagraph {
    pub fn new(run: TextRun) -> Self {
        Self {
            runs: vec![run],
            align: None,
            space_after: None,
        }
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = Some(align);
        self
    }

    pub fn space_after(mut self, pt: f64) -> Self {
        self.space_after = Some(pt);
        self
    }

    /// Plain text of the paragraph.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_png() {
        let png = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
        assert_eq!(ImageFormat::detect_from_bytes(&png), Some(ImageFormat::Png));
        assert_eq!(ImageFormat::detect_from_bytes(b"<svg"), None);
        assert_eq!(ImageFormat::detect_from_bytes(&[0xFF]), None);
    }

    #[test]
    fn test_paragraph_text() {
        let para = TextParagraph::new(TextRun::new("Research").bold(true))
            .align(TextAlign::Center)
            .space_after(4.0);
        assert_eq!(para.text(), "Research");
        assert_eq!(para.align.map(|a| a.as_str()), Some("ctr"));
    }
}
