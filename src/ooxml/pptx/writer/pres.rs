/// Presentation writer for PPTX.
use crate::common::Length;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::PackageWriter;
use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};
use crate::ooxml::opc::rel::Relationships;
use crate::ooxml::pptx::template;
use log::{debug, info};
use std::fmt::Write as FmtWrite;
use std::path::Path;

use super::relmap::RelationshipMapper;
use super::slide::MutableSlide;

/// 16:9 widescreen, 13.333" x 7.5".
const DEFAULT_SLIDE_WIDTH: Length = Length::from_emus(12_191_695);
const DEFAULT_SLIDE_HEIGHT: Length = Length::from_emus(6_858_000);

/// Relationships of presentation.xml that precede the slides (`rId1`..`rId6`).
const FIXED_PRES_RELS: usize = 6;

/// A mutable PowerPoint presentation for writing.
///
/// Provides methods to add slides and to serialize the whole package.
#[derive(Debug)]
pub struct MutablePresentation {
    /// Slides in the presentation
    pub(crate) slides: Vec<MutableSlide>,
    /// Slide width
    slide_width: Length,
    /// Slide height
    slide_height: Length,
    /// Title written to docProps/core.xml
    title: String,
}

impl MutablePresentation {
    /// Create a new empty widescreen presentation.
    pub fn new() -> Self {
        Self {
            slides: Vec::new(),
            slide_width: DEFAULT_SLIDE_WIDTH,
            slide_height: DEFAULT_SLIDE_HEIGHT,
            title: String::new(),
        }
    }

    /// Add a new slide to the presentation.
    pub fn add_slide(&mut self) -> &mut MutableSlide {
        let slide_id = (self.slides.len() + 256) as u32;
        self.slides.push(MutableSlide::new(slide_id));
        let last = self.slides.len() - 1;
        &mut self.slides[last]
    }

    /// Get the number of slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn slides(&self) -> &[MutableSlide] {
        &self.slides
    }

    /// Get a mutable reference to a slide by index (0-based).
    pub fn slide_mut(&mut self, index: usize) -> Option<&mut MutableSlide> {
        self.slides.get_mut(index)
    }

    pub fn slide_width(&self) -> Length {
        self.slide_width
    }

    pub fn slide_height(&self) -> Length {
        self.slide_height
    }

    /// Set the document title stored in the core properties.
    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    /// Generate presentation.xml content with actual relationship IDs.
    ///
    /// # Arguments
    /// * `slide_rel_ids` - Relationship IDs of the slides, in slide order
    pub(crate) fn generate_presentation_xml_with_rels(
        &self,
        slide_rel_ids: &[String],
    ) -> Result<String> {
        if slide_rel_ids.len() != self.slides.len() {
            return Err(OoxmlError::Xml(format!(
                "expected {} slide relationship IDs, got {}",
                self.slides.len(),
                slide_rel_ids.len()
            )));
        }

        let mut xml = String::with_capacity(1024 + self.slides.len() * 48);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<p:presentation xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" saveSubsetFonts="1">"#);

        // Write slide master ID list
        xml.push_str("<p:sldMasterIdLst>");
        xml.push_str(r#"<p:sldMasterId id="2147483648" r:id="rId1"/>"#);
        xml.push_str("</p:sldMasterIdLst>");

        xml.push_str("<p:notesMasterIdLst>");
        xml.push_str(r#"<p:notesMasterId r:id="rId2"/>"#);
        xml.push_str("</p:notesMasterIdLst>");

        // Write slide ID list
        if !self.slides.is_empty() {
            xml.push_str("<p:sldIdLst>");
            for (slide, rel_id) in self.slides.iter().zip(slide_rel_ids) {
                write!(
                    xml,
                    r#"<p:sldId id="{}" r:id="{}"/>"#,
                    slide.slide_id(),
                    rel_id
                )
                .map_err(|e| OoxmlError::Xml(e.to_string()))?;
            }
            xml.push_str("</p:sldIdLst>");
        }

        // Write slide size
        write!(
            xml,
            r#"<p:sldSz cx="{}" cy="{}"/>"#,
            self.slide_width.emus(),
            self.slide_height.emus()
        )
        .map_err(|e| OoxmlError::Xml(e.to_string()))?;

        xml.push_str("<p:notesSz cx=\"6858000\" cy=\"9144000\"/>");
        xml.push_str("<p:defaultTextStyle/>");
        xml.push_str("</p:presentation>");

        Ok(xml)
    }

    /// Assemble every part of the deck into an OPC package.
    pub fn to_package(&self) -> Result<PackageWriter> {
        let mut pkg = PackageWriter::new();

        // presentation.xml relationships: fixed parts first, then slides
        let mut pres_rels = Relationships::new();
        pres_rels.add(rt::SLIDE_MASTER, "slideMasters/slideMaster1.xml");
        pres_rels.add(rt::NOTES_MASTER, "notesMasters/notesMaster1.xml");
        pres_rels.add(rt::THEME, "theme/theme1.xml");
        pres_rels.add(rt::PRES_PROPS, "presProps.xml");
        pres_rels.add(rt::VIEW_PROPS, "viewProps.xml");
        pres_rels.add(rt::TABLE_STYLES, "tableStyles.xml");
        debug_assert_eq!(pres_rels.len(), FIXED_PRES_RELS);

        let slide_rel_ids: Vec<String> = (1..=self.slides.len())
            .map(|n| pres_rels.add(rt::SLIDE, &format!("slides/slide{}.xml", n)))
            .collect();

        let pres_xml = self.generate_presentation_xml_with_rels(&slide_rel_ids)?;
        pkg.add_part_with_rels(
            "/ppt/presentation.xml",
            ct::PML_PRESENTATION_MAIN,
            pres_xml.into_bytes(),
            pres_rels,
        );

        self.add_fixed_parts(&mut pkg);

        // Slides, their media and notes
        let mut mapper = RelationshipMapper::new();
        let mut media_counter = 0usize;
        let mut notes_count = 0usize;

        for (slide_index, slide) in self.slides.iter().enumerate() {
            let slide_no = slide_index + 1;
            let mut slide_rels = Relationships::new();
            slide_rels.add(rt::SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml");

            for (image_index, (data, format)) in slide.collect_images().into_iter().enumerate() {
                media_counter += 1;
                let media_name = format!("image{}.{}", media_counter, format.extension());
                let rid = slide_rels.add(rt::IMAGE, &format!("../media/{}", media_name));
                mapper.add_image(slide_index, image_index, rid);
                pkg.add_part(
                    &format!("/ppt/media/{}", media_name),
                    format.mime_type(),
                    data.to_vec(),
                );
            }

            if let Some(notes_xml) = slide.generate_notes_xml() {
                notes_count += 1;
                let rid = slide_rels.add(
                    rt::NOTES_SLIDE,
                    &format!("../notesSlides/notesSlide{}.xml", slide_no),
                );
                mapper.add_notes(slide_index, rid);

                let mut notes_rels = Relationships::new();
                notes_rels.add(rt::NOTES_MASTER, "../notesMasters/notesMaster1.xml");
                notes_rels.add(rt::SLIDE, &format!("../slides/slide{}.xml", slide_no));
                pkg.add_part_with_rels(
                    &format!("/ppt/notesSlides/notesSlide{}.xml", slide_no),
                    ct::PML_NOTES_SLIDE,
                    notes_xml?.into_bytes(),
                    notes_rels,
                );
            }

            let slide_xml = slide.to_xml_with_rels(slide_index, &mapper)?;
            pkg.add_part_with_rels(
                &format!("/ppt/slides/slide{}.xml", slide_no),
                ct::PML_SLIDE,
                slide_xml.into_bytes(),
                slide_rels,
            );
            debug!(
                "slide {}: {} shapes, notes: {}",
                slide_no,
                slide.shape_count(),
                mapper.get_notes_id(slide_index).unwrap_or("none")
            );
        }

        // Document properties
        pkg.add_part(
            "/docProps/core.xml",
            ct::OPC_CORE_PROPERTIES,
            template::core_properties_xml(&self.title, "hve-assets").into_bytes(),
        );
        pkg.add_part(
            "/docProps/app.xml",
            ct::OFC_EXTENDED_PROPERTIES,
            template::app_properties_xml(self.slides.len(), notes_count).into_bytes(),
        );

        let pkg_rels = pkg.pkg_rels_mut();
        pkg_rels.add(rt::OFFICE_DOCUMENT, "ppt/presentation.xml");
        pkg_rels.add(rt::CORE_PROPERTIES, "docProps/core.xml");
        pkg_rels.add(rt::EXTENDED_PROPERTIES, "docProps/app.xml");

        Ok(pkg)
    }

    fn add_fixed_parts(&self, pkg: &mut PackageWriter) {
        let mut master_rels = Relationships::new();
        master_rels.add(rt::SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml");
        master_rels.add(rt::THEME, "../theme/theme1.xml");
        pkg.add_part_with_rels(
            "/ppt/slideMasters/slideMaster1.xml",
            ct::PML_SLIDE_MASTER,
            template::default_slide_master_xml().into_bytes(),
            master_rels,
        );

        let mut layout_rels = Relationships::new();
        layout_rels.add(rt::SLIDE_MASTER, "../slideMasters/slideMaster1.xml");
        pkg.add_part_with_rels(
            "/ppt/slideLayouts/slideLayout1.xml",
            ct::PML_SLIDE_LAYOUT,
            template::blank_slide_layout_xml().into_bytes(),
            layout_rels,
        );

        let mut notes_master_rels = Relationships::new();
        notes_master_rels.add(rt::THEME, "../theme/theme2.xml");
        pkg.add_part_with_rels(
            "/ppt/notesMasters/notesMaster1.xml",
            ct::PML_NOTES_MASTER,
            template::default_notes_master_xml().into_bytes(),
            notes_master_rels,
        );

        for name in ["theme1", "theme2"] {
            pkg.add_part(
                &format!("/ppt/theme/{}.xml", name),
                ct::OFC_THEME,
                template::default_theme_xml().into_bytes(),
            );
        }

        pkg.add_part(
            "/ppt/presProps.xml",
            ct::PML_PRES_PROPS,
            template::default_pres_props_xml().into_bytes(),
        );
        pkg.add_part(
            "/ppt/viewProps.xml",
            ct::PML_VIEW_PROPS,
            template::default_view_props_xml().into_bytes(),
        );
        pkg.add_part(
            "/ppt/tableStyles.xml",
            ct::PML_TABLE_STYLES,
            template::default_table_styles_xml().into_bytes(),
        );
    }

    /// Serialize the presentation to `.pptx` bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        self.to_package()?.to_bytes()
    }

    /// Save the presentation to a file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.to_bytes()?;
        std::fs::write(path, &bytes)?;
        info!(
            "Saved {} slides to {} ({} bytes)",
            self.slides.len(),
            path.display(),
            bytes.len()
        );
        Ok(())
    }
}

impl Default for MutablePresentation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::RGBColor;
    use std::io::{Cursor, Read};

    fn read_member(bytes: &[u8], name: &str) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut body = String::new();
        archive
            .by_name(name)
            .unwrap()
            .read_to_string(&mut body)
            .unwrap();
        body
    }

    fn sample() -> MutablePresentation {
        let mut pres = MutablePresentation::new();
        pres.set_title("Sample");
        for i in 0..3 {
            let slide = pres.add_slide();
            slide.set_background(RGBColor::new(0x1B, 0x1B, 0x1B));
            slide
                .add_text_box(
                    Length::from_inches(0.8),
                    Length::from_inches(0.5),
                    Length::from_inches(11.0),
                    Length::from_inches(0.8),
                )
                .add_text(&format!("Slide {}", i + 1), 32.0, true, RGBColor::new(255, 255, 255));
            if i != 1 {
                slide.set_notes("Speaker notes");
            }
        }
        pres
    }

    #[test]
    fn test_create_presentation() {
        let pres = MutablePresentation::new();
        assert_eq!(pres.slide_count(), 0);
        assert_eq!(pres.slide_width().emus(), 12_191_695);
        assert_eq!(pres.slide_height().emus(), 6_858_000);
    }

    #[test]
    fn test_slide_ids_and_rel_ids() {
        let pres = sample();
        let bytes = pres.to_bytes().unwrap();
        let xml = read_member(&bytes, "ppt/presentation.xml");

        assert!(xml.contains(r#"<p:sldId id="256" r:id="rId7"/>"#));
        assert!(xml.contains(r#"<p:sldId id="258" r:id="rId9"/>"#));
        assert!(xml.contains(r#"<p:sldSz cx="12191695" cy="6858000"/>"#));

        let rels = read_member(&bytes, "ppt/_rels/presentation.xml.rels");
        assert!(rels.contains(r#"Id="rId9""#));
        assert!(rels.contains(r#"Target="slides/slide3.xml""#));
    }

    #[test]
    fn test_notes_parts_follow_slides() {
        let bytes = sample().to_bytes().unwrap();
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes.as_slice())).unwrap();
        assert!(archive.by_name("ppt/notesSlides/notesSlide1.xml").is_ok());
        assert!(archive.by_name("ppt/notesSlides/notesSlide2.xml").is_err());
        assert!(archive.by_name("ppt/notesSlides/notesSlide3.xml").is_ok());

        let slide_rels = read_member(&bytes, "ppt/slides/_rels/slide3.xml.rels");
        assert!(slide_rels.contains("../notesSlides/notesSlide3.xml"));

        let app = read_member(&bytes, "docProps/app.xml");
        assert!(app.contains("<Slides>3</Slides><Notes>2</Notes>"));
    }

    #[test]
    fn test_media_numbering_is_package_wide() {
        let png = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
        let mut pres = MutablePresentation::new();
        for _ in 0..2 {
            pres.add_slide()
                .add_picture(
                    png.clone(),
                    "diagram",
                    Length::from_inches(0.3),
                    Length::from_inches(1.2),
                    Length::from_inches(12.7),
                    Length::from_inches(5.8),
                )
                .unwrap();
        }

        let bytes = pres.to_bytes().unwrap();
        let rels = read_member(&bytes, "ppt/slides/_rels/slide2.xml.rels");
        assert!(rels.contains(r#"Id="rId2""#));
        assert!(rels.contains("../media/image2.png"));

        let types = read_member(&bytes, "[Content_Types].xml");
        assert!(types.contains(r#"<Default Extension="png" ContentType="image/png"/>"#));
    }

    #[test]
    fn test_bytes_are_deterministic() {
        assert_eq!(sample().to_bytes().unwrap(), sample().to_bytes().unwrap());
    }
}
