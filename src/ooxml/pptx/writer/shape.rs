/// Shape types and implementation for PPTX presentations.
use crate::common::xml::escape_xml;
use crate::common::unit::pt_to_centipoints;
use crate::common::{Length, RGBColor};
use crate::ooxml::error::Result;
use std::fmt::Write as FmtWrite;

// Import shared format types
pub use super::super::format::{
    AutoShapeType, ImageFormat, TextAlign, TextParagraph, TextRun, VerticalAnchor,
};

/// A shape on a slide (text box, auto shape, connector or picture).
#[derive(Debug, Clone)]
pub struct MutableShape {
    /// Shape ID
    pub(crate) shape_id: u32,
    /// Shape type
    pub(crate) shape_type: ShapeType,
}

/// Position and size of a shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Frame {
    pub x: Length,
    pub y: Length,
    pub width: Length,
    pub height: Length,
}

#[derive(Debug, Clone)]
pub(crate) enum ShapeType {
    TextBox {
        frame: Frame,
        paragraphs: Vec<TextParagraph>,
    },
    AutoShape {
        kind: AutoShapeType,
        frame: Frame,
        fill: Option<RGBColor>,
        paragraphs: Vec<TextParagraph>,
        anchor: VerticalAnchor,
    },
    Connector {
        begin: (Length, Length),
        end: (Length, Length),
        color: RGBColor,
        width: Length,
    },
    Picture {
        data: Vec<u8>,
        format: ImageFormat,
        frame: Frame,
        description: String,
    },
}

impl MutableShape {
    pub(crate) fn new_text_box(shape_id: u32, frame: Frame) -> Self {
        Self {
            shape_id,
            shape_type: ShapeType::TextBox {
                frame,
                paragraphs: Vec::new(),
            },
        }
    }

    pub(crate) fn new_auto_shape(shape_id: u32, kind: AutoShapeType, frame: Frame) -> Self {
        Self {
            shape_id,
            shape_type: ShapeType::AutoShape {
                kind,
                frame,
                fill: None,
                paragraphs: Vec::new(),
                anchor: VerticalAnchor::Top,
            },
        }
    }

    pub(crate) fn new_connector(
        shape_id: u32,
        begin: (Length, Length),
        end: (Length, Length),
        color: RGBColor,
        width: Length,
    ) -> Self {
        Self {
            shape_id,
            shape_type: ShapeType::Connector {
                begin,
                end,
                color,
                width,
            },
        }
    }

    pub(crate) fn new_picture(
        shape_id: u32,
        data: Vec<u8>,
        format: ImageFormat,
        frame: Frame,
        description: String,
    ) -> Self {
        Self {
            shape_id,
            shape_type: ShapeType::Picture {
                data,
                format,
                frame,
                description,
            },
        }
    }

    /// Get the shape ID.
    pub fn shape_id(&self) -> u32 {
        self.shape_id
    }

    /// Builder method: append a paragraph (text boxes and auto shapes).
    pub fn add_paragraph(&mut self, paragraph: TextParagraph) -> &mut Self {
        match self.shape_type {
            ShapeType::TextBox {
                ref mut paragraphs, ..
            }
            | ShapeType::AutoShape {
                ref mut paragraphs, ..
            } => paragraphs.push(paragraph),
            _ => {},
        }
        self
    }

    /// Builder method: append a single-run paragraph.
    pub fn add_text(&mut self, text: &str, size: f64, bold: bool, color: RGBColor) -> &mut Self {
        self.add_paragraph(TextParagraph::new(
            TextRun::new(text).size(size).bold(bold).color(color),
        ))
    }

    /// Builder method: set solid fill (auto shapes).
    pub fn fill(&mut self, color: RGBColor) -> &mut Self {
        if let ShapeType::AutoShape { ref mut fill, .. } = self.shape_type {
            *fill = Some(color);
        }
        self
    }

    /// Builder method: set vertical text anchor (auto shapes).
    pub fn anchor(&mut self, value: VerticalAnchor) -> &mut Self {
        if let ShapeType::AutoShape { ref mut anchor, .. } = self.shape_type {
            *anchor = value;
        }
        self
    }

    /// Paragraphs of a text-bearing shape.
    pub fn paragraphs(&self) -> &[TextParagraph] {
        match &self.shape_type {
            ShapeType::TextBox { paragraphs, .. } | ShapeType::AutoShape { paragraphs, .. } => {
                paragraphs
            },
            _ => &[],
        }
    }

    /// All text in the shape, one line per paragraph.
    pub fn text(&self) -> String {
        self.paragraphs()
            .iter()
            .map(TextParagraph::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Get image data if this shape is a picture.
    pub(crate) fn get_image_data(&self) -> Option<(&[u8], ImageFormat)> {
        match &self.shape_type {
            ShapeType::Picture { data, format, .. } => Some((data.as_slice(), *format)),
            _ => None,
        }
    }

    /// Generate XML for this shape.
    ///
    /// Pictures need the relationship ID of their media part.
    pub(crate) fn to_xml(&self, xml: &mut String, rel_id: Option<&str>) -> Result<()> {
        match &self.shape_type {
            ShapeType::TextBox { frame, paragraphs } => {
                xml.push_str("<p:sp>");
                xml.push_str("<p:nvSpPr>");
                write!(
                    xml,
                    r#"<p:cNvPr id="{}" name="Text Box {}"/>"#,
                    self.shape_id,
                    self.shape_id - 1
                )?;
                xml.push_str("<p:cNvSpPr txBox=\"1\"/>");
                xml.push_str("<p:nvPr/>");
                xml.push_str("</p:nvSpPr>");

                xml.push_str("<p:spPr>");
                write_xfrm(xml, frame, false, false)?;
                xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
                xml.push_str("<a:noFill/>");
                xml.push_str("</p:spPr>");

                xml.push_str("<p:txBody>");
                xml.push_str(r#"<a:bodyPr wrap="square" rtlCol="0">"#);
                xml.push_str("<a:spAutoFit/>");
                xml.push_str("</a:bodyPr>");
                xml.push_str("<a:lstStyle/>");
                write_paragraphs(xml, paragraphs)?;
                xml.push_str("</p:txBody>");

                xml.push_str("</p:sp>");
            },
            ShapeType::AutoShape {
                kind,
                frame,
                fill,
                paragraphs,
                anchor,
            } => {
                xml.push_str("<p:sp>");
                xml.push_str("<p:nvSpPr>");
                write!(
                    xml,
                    r#"<p:cNvPr id="{}" name="{} {}"/>"#,
                    self.shape_id,
                    kind.display_name(),
                    self.shape_id - 1
                )?;
                xml.push_str("<p:cNvSpPr/>");
                xml.push_str("<p:nvPr/>");
                xml.push_str("</p:nvSpPr>");

                xml.push_str("<p:spPr>");
                write_xfrm(xml, frame, false, false)?;
                write!(
                    xml,
                    r#"<a:prstGeom prst="{}"><a:avLst/></a:prstGeom>"#,
                    kind.preset()
                )?;
                match fill {
                    Some(color) => write_solid_fill(xml, *color)?,
                    None => xml.push_str("<a:noFill/>"),
                }
                xml.push_str("<a:ln><a:noFill/></a:ln>");
                xml.push_str("</p:spPr>");

                xml.push_str("<p:txBody>");
                write!(
                    xml,
                    r#"<a:bodyPr wrap="square" rtlCol="0" anchor="{}"/>"#,
                    anchor.as_str()
                )?;
                xml.push_str("<a:lstStyle/>");
                write_paragraphs(xml, paragraphs)?;
                xml.push_str("</p:txBody>");

                xml.push_str("</p:sp>");
            },
            ShapeType::Connector {
                begin,
                end,
                color,
                width,
            } => {
                // Connectors are stored as a box plus flips, like python-pptx and PowerPoint
                let frame = Frame {
                    x: begin.0.min(end.0),
                    y: begin.1.min(end.1),
                    width: Length::from_emus((end.0.emus() - begin.0.emus()).abs()),
                    height: Length::from_emus((end.1.emus() - begin.1.emus()).abs()),
                };
                let flip_h = begin.0 > end.0;
                let flip_v = begin.1 > end.1;

                xml.push_str("<p:cxnSp>");
                xml.push_str("<p:nvCxnSpPr>");
                write!(
                    xml,
                    r#"<p:cNvPr id="{}" name="Connector {}"/>"#,
                    self.shape_id,
                    self.shape_id - 1
                )?;
                xml.push_str("<p:cNvCxnSpPr/>");
                xml.push_str("<p:nvPr/>");
                xml.push_str("</p:nvCxnSpPr>");

                xml.push_str("<p:spPr>");
                write_xfrm(xml, &frame, flip_h, flip_v)?;
                xml.push_str(r#"<a:prstGeom prst="line"><a:avLst/></a:prstGeom>"#);
                write!(xml, r#"<a:ln w="{}">"#, width.emus())?;
                write_solid_fill(xml, *color)?;
                xml.push_str("</a:ln>");
                xml.push_str("</p:spPr>");
                xml.push_str("</p:cxnSp>");
            },
            ShapeType::Picture {
                frame, description, ..
            } => {
                xml.push_str("<p:pic>");
                xml.push_str("<p:nvPicPr>");
                write!(
                    xml,
                    r#"<p:cNvPr id="{}" name="Picture {}" descr="{}"/>"#,
                    self.shape_id,
                    self.shape_id - 1,
                    escape_xml(description)
                )?;
                xml.push_str(r#"<p:cNvPicPr><a:picLocks noChangeAspect="1"/></p:cNvPicPr>"#);
                xml.push_str("<p:nvPr/>");
                xml.push_str("</p:nvPicPr>");

                xml.push_str("<p:blipFill>");
                let rid = rel_id.ok_or_else(|| {
                    crate::ooxml::OoxmlError::Xml(format!(
                        "picture {} has no image relationship",
                        self.shape_id
                    ))
                })?;
                write!(xml, r#"<a:blip r:embed="{}"/>"#, rid)?;
                xml.push_str("<a:stretch><a:fillRect/></a:stretch>");
                xml.push_str("</p:blipFill>");

                xml.push_str("<p:spPr>");
                write_xfrm(xml, frame, false, false)?;
                xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
                xml.push_str("</p:spPr>");
                xml.push_str("</p:pic>");
            },
        }

        Ok(())
    }
}

fn write_xfrm(xml: &mut String, frame: &Frame, flip_h: bool, flip_v: bool) -> Result<()> {
    xml.push_str("<a:xfrm");
    if flip_h {
        xml.push_str(r#" flipH="1""#);
    }
    if flip_v {
        xml.push_str(r#" flipV="1""#);
    }
    xml.push('>');
    write!(xml, r#"<a:off x="{}" y="{}"/>"#, frame.x.emus(), frame.y.emus())?;
    write!(
        xml,
        r#"<a:ext cx="{}" cy="{}"/>"#,
        frame.width.emus(),
        frame.height.emus()
    )?;
    xml.push_str("</a:xfrm>");
    Ok(())
}

fn write_solid_fill(xml: &mut String, color: RGBColor) -> Result<()> {
    write!(
        xml,
        r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
        color.to_hex()
    )?;
    Ok(())
}

/// Write `a:p` elements. An empty list still yields one empty paragraph,
/// which DrawingML requires inside every text body.
pub(crate) fn write_paragraphs(xml: &mut String, paragraphs: &[TextParagraph]) -> Result<()> {
    if paragraphs.is_empty() {
        xml.push_str(r#"<a:p><a:endParaRPr lang="en-US" dirty="0"/></a:p>"#);
        return Ok(());
    }

    for para in paragraphs {
        xml.push_str("<a:p>");

        if para.align.is_some() || para.space_after.is_some() {
            xml.push_str("<a:pPr");
            if let Some(align) = para.align {
                write!(xml, r#" algn="{}""#, align.as_str())?;
            }
            xml.push('>');
            if let Some(space) = para.space_after {
                write!(
                    xml,
                    r#"<a:spcAft><a:spcPts val="{}"/></a:spcAft>"#,
                    pt_to_centipoints(space)
                )?;
            }
            xml.push_str("</a:pPr>");
        }

        for run in &para.runs {
            for (i, line) in run.text.split('\n').enumerate() {
                if i > 0 {
                    xml.push_str("<a:br>");
                    write_run_properties(xml, run)?;
                    xml.push_str("</a:br>");
                }
                if line.is_empty() {
                    continue;
                }
                xml.push_str("<a:r>");
                write_run_properties(xml, run)?;
                write!(xml, "<a:t>{}</a:t>", escape_xml(line))?;
                xml.push_str("</a:r>");
            }
        }

        xml.push_str("</a:p>");
    }

    Ok(())
}

fn write_run_properties(xml: &mut String, run: &TextRun) -> Result<()> {
    xml.push_str(r#"<a:rPr lang="en-US""#);
    if let Some(size) = run.size {
        write!(xml, r#" sz="{}""#, pt_to_centipoints(size))?;
    }
    if run.bold {
        xml.push_str(r#" b="1""#);
    }
    if run.italic {
        xml.push_str(r#" i="1""#);
    }
    xml.push_str(r#" dirty="0">"#);

    // Child order is fixed by the schema: fill before latin
    if let Some(color) = run.color {
        write_solid_fill(xml, color)?;
    }
    if let Some(ref font) = run.font {
        write!(xml, r#"<a:latin typeface="{}"/>"#, escape_xml(font))?;
    }

    xml.push_str("</a:rPr>");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(x: f64, y: f64, w: f64, h: f64) -> Frame {
        Frame {
            x: Length::from_inches(x),
            y: Length::from_inches(y),
            width: Length::from_inches(w),
            height: Length::from_inches(h),
        }
    }

    #[test]
    fn test_text_box_xml() {
        let mut shape = MutableShape::new_text_box(2, frame(0.8, 0.5, 11.0, 0.8));
        shape.add_paragraph(
            TextParagraph::new(
                TextRun::new("Q&A")
                    .size(32.0)
                    .bold(true)
                    .color(RGBColor::new(255, 255, 255))
                    .font("Segoe UI"),
            )
            .align(TextAlign::Center)
            .space_after(4.0),
        );

        let mut xml = String::new();
        shape.to_xml(&mut xml, None).unwrap();

        assert!(xml.contains(r#"<p:cNvSpPr txBox="1"/>"#));
        assert!(xml.contains(r#"<a:off x="731520" y="457200"/>"#));
        assert!(xml.contains(r#"<a:pPr algn="ctr"><a:spcAft><a:spcPts val="400"/></a:spcAft></a:pPr>"#));
        assert!(xml.contains(r#"sz="3200" b="1""#));
        assert!(xml.contains(r#"<a:srgbClr val="FFFFFF"/></a:solidFill><a:latin typeface="Segoe UI"/>"#));
        assert!(xml.contains("<a:t>Q&amp;A</a:t>"));
    }

    #[test]
    fn test_line_breaks_become_br() {
        let mut shape = MutableShape::new_auto_shape(3, AutoShapeType::RoundedRectangle, frame(1.0, 1.0, 2.0, 1.0));
        shape
            .fill(RGBColor::new(0x00, 0x78, 0xD4))
            .anchor(VerticalAnchor::Middle)
            .add_text("Research\nPhase 1", 11.0, true, RGBColor::new(255, 255, 255));

        let mut xml = String::new();
        shape.to_xml(&mut xml, None).unwrap();

        assert!(xml.contains(r#"<a:prstGeom prst="roundRect">"#));
        assert!(xml.contains(r#"<a:ln><a:noFill/></a:ln>"#));
        assert!(xml.contains(r#"anchor="ctr""#));
        assert!(xml.contains("<a:t>Research</a:t></a:r><a:br>"));
        assert!(xml.contains("<a:t>Phase 1</a:t>"));
        assert_eq!(shape.text(), "Research\nPhase 1");
    }

    #[test]
    fn test_reversed_connector_is_flipped() {
        let shape = MutableShape::new_connector(
            4,
            (Length::from_inches(3.0), Length::from_inches(1.0)),
            (Length::from_inches(1.0), Length::from_inches(1.0)),
            RGBColor::new(0x90, 0x90, 0x90),
            Length::from_pt(2.0),
        );

        let mut xml = String::new();
        shape.to_xml(&mut xml, None).unwrap();

        assert!(xml.starts_with("<p:cxnSp>"));
        assert!(xml.contains(r#"<a:xfrm flipH="1">"#));
        assert!(xml.contains(r#"<a:off x="914400" y="914400"/><a:ext cx="1828800" cy="0"/>"#));
        assert!(xml.contains(r#"<a:ln w="25400">"#));
    }

    #[test]
    fn test_picture_requires_rel_id() {
        let shape = MutableShape::new_picture(
            2,
            vec![0x89, b'P', b'N', b'G'],
            ImageFormat::Png,
            frame(0.3, 1.2, 12.7, 5.8),
            "pipeline".to_string(),
        );

        let mut xml = String::new();
        assert!(shape.to_xml(&mut xml, None).is_err());

        xml.clear();
        shape.to_xml(&mut xml, Some("rId2")).unwrap();
        assert!(xml.contains(r#"<a:blip r:embed="rId2"/>"#));
    }
}
