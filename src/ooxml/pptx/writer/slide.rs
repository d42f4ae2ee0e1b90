/// Slide types and implementation for PPTX presentations.
use crate::common::xml::escape_xml;
use crate::common::{Length, RGBColor};
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::pptx::writer::relmap::RelationshipMapper;
use std::fmt::Write as FmtWrite;

// Import shared format types
use super::super::format::{AutoShapeType, ImageFormat};
use super::shape::{Frame, MutableShape, ShapeType};

/// A mutable slide in a presentation.
///
/// Every slide uses the blank layout; content is made of free-standing
/// shapes positioned in absolute coordinates.
#[derive(Debug, Clone)]
pub struct MutableSlide {
    /// Slide ID (unique identifier, 256 and up)
    pub(crate) slide_id: u32,
    /// Shapes on the slide
    pub(crate) shapes: Vec<MutableShape>,
    /// Speaker notes for the slide
    pub(crate) notes: Option<String>,
    /// Solid background fill
    pub(crate) background: Option<RGBColor>,
}

impl MutableSlide {
    /// Create a new empty slide.
    pub(crate) fn new(slide_id: u32) -> Self {
        Self {
            slide_id,
            shapes: Vec::new(),
            notes: None,
            background: None,
        }
    }

    /// Get the slide ID.
    pub fn slide_id(&self) -> u32 {
        self.slide_id
    }

    /// Fill the slide background with a solid color.
    pub fn set_background(&mut self, color: RGBColor) {
        self.background = Some(color);
    }

    pub fn background(&self) -> Option<RGBColor> {
        self.background
    }

    /// Set the speaker notes. Line feeds separate notes paragraphs.
    pub fn set_notes(&mut self, notes: &str) {
        self.notes = Some(notes.to_string());
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn has_notes(&self) -> bool {
        self.notes.is_some()
    }

    /// Shape IDs start at 2; ID 1 belongs to the shape tree itself.
    fn next_shape_id(&self) -> u32 {
        self.shapes.len() as u32 + 2
    }

    fn push(&mut self, shape: MutableShape) -> &mut MutableShape {
        self.shapes.push(shape);
        let last = self.shapes.len() - 1;
        &mut self.shapes[last]
    }

    /// Add an empty word-wrapped text box.
    pub fn add_text_box(
        &mut self,
        x: Length,
        y: Length,
        width: Length,
        height: Length,
    ) -> &mut MutableShape {
        let id = self.next_shape_id();
        self.push(MutableShape::new_text_box(
            id,
            Frame {
                x,
                y,
                width,
                height,
            },
        ))
    }

    /// Add a preset auto shape.
    pub fn add_auto_shape(
        &mut self,
        kind: AutoShapeType,
        x: Length,
        y: Length,
        width: Length,
        height: Length,
    ) -> &mut MutableShape {
        let id = self.next_shape_id();
        self.push(MutableShape::new_auto_shape(
            id,
            kind,
            Frame {
                x,
                y,
                width,
                height,
            },
        ))
    }

    /// Add a straight connector from `begin` to `end`.
    pub fn add_connector(
        &mut self,
        begin: (Length, Length),
        end: (Length, Length),
        color: RGBColor,
        width: Length,
    ) -> &mut MutableShape {
        let id = self.next_shape_id();
        self.push(MutableShape::new_connector(id, begin, end, color, width))
    }

    /// Add a picture from encoded image bytes.
    ///
    /// The format is detected from the magic number; unknown data is rejected.
    pub fn add_picture(
        &mut self,
        data: Vec<u8>,
        name: &str,
        x: Length,
        y: Length,
        width: Length,
        height: Length,
    ) -> Result<&mut MutableShape> {
        let format = ImageFormat::detect_from_bytes(&data).ok_or_else(|| {
            OoxmlError::InvalidFormat(format!("unsupported image data for picture '{}'", name))
        })?;
        let id = self.next_shape_id();
        Ok(self.push(MutableShape::new_picture(
            id,
            data,
            format,
            Frame {
                x,
                y,
                width,
                height,
            },
            name.to_string(),
        )))
    }

    /// Get the number of shapes on the slide.
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    pub fn shapes(&self) -> &[MutableShape] {
        &self.shapes
    }

    /// All text on the slide, one line per paragraph.
    pub fn text(&self) -> String {
        self.shapes
            .iter()
            .map(MutableShape::text)
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Images on this slide, in shape order.
    pub(crate) fn collect_images(&self) -> Vec<(&[u8], ImageFormat)> {
        self.shapes
            .iter()
            .filter_map(MutableShape::get_image_data)
            .collect()
    }

    /// Generate slide XML content with relationship IDs from the mapper.
    ///
    /// # Arguments
    /// * `slide_index` - The index of this slide (used to look up relationships)
    /// * `rel_mapper` - The relationship mapper containing actual relationship IDs
    pub(crate) fn to_xml_with_rels(
        &self,
        slide_index: usize,
        rel_mapper: &RelationshipMapper,
    ) -> Result<String> {
        let mut xml = String::with_capacity(4096);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);

        xml.push_str(
            r#"<p:sld xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" "#,
        );
        xml.push_str(r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#);
        xml.push_str(
            r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
        );

        xml.push_str("<p:cSld>");

        // Background must come before spTree
        if let Some(color) = self.background {
            write!(
                xml,
                r#"<p:bg><p:bgPr><a:solidFill><a:srgbClr val="{}"/></a:solidFill><a:effectLst/></p:bgPr></p:bg>"#,
                color.to_hex()
            )
            .map_err(|e| OoxmlError::Xml(e.to_string()))?;
        }

        xml.push_str("<p:spTree>");

        // Write group shape properties (required)
        xml.push_str("<p:nvGrpSpPr>");
        xml.push_str(r#"<p:cNvPr id="1" name=""/>"#);
        xml.push_str("<p:cNvGrpSpPr/>");
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvGrpSpPr>");
        xml.push_str("<p:grpSpPr>");
        xml.push_str("<a:xfrm>");
        xml.push_str(r#"<a:off x="0" y="0"/>"#);
        xml.push_str(r#"<a:ext cx="0" cy="0"/>"#);
        xml.push_str(r#"<a:chOff x="0" y="0"/>"#);
        xml.push_str(r#"<a:chExt cx="0" cy="0"/>"#);
        xml.push_str("</a:xfrm>");
        xml.push_str("</p:grpSpPr>");

        let mut image_counter = 0;
        for shape in &self.shapes {
            let rel_id = match shape.shape_type {
                ShapeType::Picture { .. } => {
                    let rid = rel_mapper.get_image_id(slide_index, image_counter);
                    image_counter += 1;
                    rid
                },
                _ => None,
            };
            shape.to_xml(&mut xml, rel_id)?;
        }

        xml.push_str("</p:spTree>");
        xml.push_str("</p:cSld>");

        xml.push_str(r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#);
        xml.push_str("</p:sld>");

        Ok(xml)
    }

    /// Generate notes slide XML content, if the slide has notes.
    pub(crate) fn generate_notes_xml(&self) -> Option<Result<String>> {
        let notes_text = self.notes.as_ref()?;
        Some(self.write_notes_xml(notes_text))
    }

    fn write_notes_xml(&self, notes_text: &str) -> Result<String> {
        let mut xml = String::with_capacity(2048 + notes_text.len());

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);

        xml.push_str(
            r#"<p:notes xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" "#,
        );
        xml.push_str(r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#);
        xml.push_str(
            r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
        );

        xml.push_str("<p:cSld>");
        xml.push_str("<p:spTree>");

        // Group shape properties
        xml.push_str("<p:nvGrpSpPr>");
        xml.push_str(r#"<p:cNvPr id="1" name=""/>"#);
        xml.push_str("<p:cNvGrpSpPr/>");
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvGrpSpPr>");
        xml.push_str("<p:grpSpPr>");
        xml.push_str("<a:xfrm><a:off x=\"0\" y=\"0\"/><a:ext cx=\"0\" cy=\"0\"/>");
        xml.push_str("<a:chOff x=\"0\" y=\"0\"/><a:chExt cx=\"0\" cy=\"0\"/></a:xfrm>");
        xml.push_str("</p:grpSpPr>");

        // Notes text shape
        xml.push_str("<p:sp>");
        xml.push_str("<p:nvSpPr>");
        xml.push_str(r#"<p:cNvPr id="2" name="Notes Placeholder 1"/>"#);
        xml.push_str("<p:cNvSpPr><a:spLocks noGrp=\"1\"/></p:cNvSpPr>");
        xml.push_str("<p:nvPr><p:ph type=\"body\" idx=\"1\"/></p:nvPr>");
        xml.push_str("</p:nvSpPr>");

        xml.push_str("<p:spPr/>");

        xml.push_str("<p:txBody>");
        xml.push_str("<a:bodyPr/>");
        xml.push_str("<a:lstStyle/>");
        for line in notes_text.split('\n') {
            xml.push_str("<a:p>");
            if !line.is_empty() {
                xml.push_str("<a:r>");
                xml.push_str("<a:rPr lang=\"en-US\" dirty=\"0\"/>");
                write!(xml, "<a:t>{}</a:t>", escape_xml(line))
                    .map_err(|e| OoxmlError::Xml(e.to_string()))?;
                xml.push_str("</a:r>");
            }
            xml.push_str("</a:p>");
        }
        xml.push_str("</p:txBody>");
        xml.push_str("</p:sp>");

        xml.push_str("</p:spTree>");
        xml.push_str("</p:cSld>");
        xml.push_str(r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#);
        xml.push_str("</p:notes>");

        Ok(xml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_shape_ids_start_at_two() {
        let mut slide = MutableSlide::new(256);
        let first = slide
            .add_text_box(
                Length::from_inches(1.0),
                Length::from_inches(1.0),
                Length::from_inches(4.0),
                Length::from_inches(1.0),
            )
            .shape_id();
        let second = slide
            .add_auto_shape(
                AutoShapeType::Rectangle,
                Length::from_inches(1.0),
                Length::from_inches(2.0),
                Length::from_inches(4.0),
                Length::from_inches(1.0),
            )
            .shape_id();
        assert_eq!((first, second), (2, 3));
        assert_eq!(slide.shape_count(), 2);
    }

    #[test]
    fn test_background_precedes_shape_tree() {
        let mut slide = MutableSlide::new(256);
        slide.set_background(RGBColor::new(0x1B, 0x1B, 0x1B));
        let xml = slide
            .to_xml_with_rels(0, &RelationshipMapper::new())
            .unwrap();

        let bg = xml.find(r#"<a:srgbClr val="1B1B1B"/>"#).unwrap();
        let tree = xml.find("<p:spTree>").unwrap();
        assert!(bg < tree);
    }

    #[test]
    fn test_picture_uses_mapped_rel_id() {
        let mut slide = MutableSlide::new(257);
        slide
            .add_picture(
                PNG_MAGIC.to_vec(),
                "hve-rpi-pipeline.png",
                Length::from_inches(0.3),
                Length::from_inches(1.2),
                Length::from_inches(12.7),
                Length::from_inches(5.8),
            )
            .unwrap();
        assert_eq!(slide.collect_images().len(), 1);

        let mut mapper = RelationshipMapper::new();
        mapper.add_image(4, 0, "rId2".to_string());
        let xml = slide.to_xml_with_rels(4, &mapper).unwrap();
        assert!(xml.contains(r#"r:embed="rId2""#));
        assert!(xml.contains(r#"descr="hve-rpi-pipeline.png""#));
    }

    #[test]
    fn test_rejects_unknown_image_data() {
        let mut slide = MutableSlide::new(256);
        let result = slide.add_picture(
            b"<svg/>".to_vec(),
            "diagram.svg",
            Length::from_inches(0.0),
            Length::from_inches(0.0),
            Length::from_inches(1.0),
            Length::from_inches(1.0),
        );
        assert!(result.is_err());
        assert_eq!(slide.shape_count(), 0);
    }

    #[test]
    fn test_notes_lines_become_paragraphs() {
        let mut slide = MutableSlide::new(256);
        assert!(slide.generate_notes_xml().is_none());

        slide.set_notes("First point\n\nThird <point>");
        let xml = slide.generate_notes_xml().unwrap().unwrap();
        assert_eq!(xml.matches("<a:p>").count(), 3);
        assert!(xml.contains("<a:t>Third &lt;point&gt;</a:t>"));
        assert!(xml.contains(r#"<p:ph type="body" idx="1"/>"#));
    }
}
