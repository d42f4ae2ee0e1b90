//! Package writer for OPC packages.
//!
//! This module serializes a set of parts into a ZIP container, writing the
//! `[Content_Types].xml`, the package relationships and every part with its
//! own relationships.

use crate::ooxml::error::Result;
use crate::ooxml::opc::constants::content_type as ct;
use crate::ooxml::opc::rel::Relationships;
use std::collections::BTreeMap;
use std::io::{Cursor, Write};
use std::path::Path;
use zip::write::{SimpleFileOptions, ZipWriter};

/// One part of the package.
#[derive(Debug, Clone)]
struct PackagePart {
    /// Absolute part name, e.g. `/ppt/slides/slide1.xml`
    partname: String,
    content_type: String,
    blob: Vec<u8>,
    rels: Relationships,
}

/// Package writer that serializes parts to a ZIP file.
///
/// This is the main entry point for saving packages. It handles writing:
/// - [Content_Types].xml
/// - _rels/.rels (package relationships)
/// - All parts and their relationships, in insertion order
///
/// Every ZIP entry carries the DOS epoch (1980-01-01 00:00) as its
/// modification time, so identical parts always produce identical bytes.
///
/// # Example
///
/// ```no_run
/// use hve_assets::ooxml::opc::PackageWriter;
/// use hve_assets::ooxml::opc::constants::{content_type as ct, relationship_type as rt};
///
/// let mut pkg = PackageWriter::new();
/// pkg.add_part("/ppt/presentation.xml", ct::PML_PRESENTATION_MAIN, b"<p:presentation/>".to_vec());
/// pkg.pkg_rels_mut().add(rt::OFFICE_DOCUMENT, "ppt/presentation.xml");
/// pkg.write("output.pptx")?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Default)]
pub struct PackageWriter {
    parts: Vec<PackagePart>,
    pkg_rels: Relationships,
}

impl PackageWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a part to the package.
    ///
    /// # Arguments
    /// * `partname` - Absolute part name starting with `/`
    /// * `content_type` - Content type of the part
    /// * `blob` - Serialized part content
    pub fn add_part(&mut self, partname: &str, content_type: &str, blob: Vec<u8>) {
        self.parts.push(PackagePart {
            partname: partname.to_string(),
            content_type: content_type.to_string(),
            blob,
            rels: Relationships::new(),
        });
    }

    /// Add a part together with its relationships.
    pub fn add_part_with_rels(
        &mut self,
        partname: &str,
        content_type: &str,
        blob: Vec<u8>,
        rels: Relationships,
    ) {
        self.parts.push(PackagePart {
            partname: partname.to_string(),
            content_type: content_type.to_string(),
            blob,
            rels,
        });
    }

    /// Package-level relationships (`/_rels/.rels`).
    pub fn pkg_rels_mut(&mut self) -> &mut Relationships {
        &mut self.pkg_rels
    }

    /// Number of parts added so far.
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// Write the package to a file.
    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let bytes = self.to_bytes()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Serialize the package to bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Deflated)
            .last_modified_time(zip::DateTime::default());

        // Write [Content_Types].xml
        let cti = ContentTypesItem::from_parts(&self.parts);
        zip.start_file("[Content_Types].xml", options)?;
        zip.write_all(cti.to_xml().as_bytes())?;

        // Write package-level relationships (_rels/.rels)
        zip.start_file("_rels/.rels", options)?;
        zip.write_all(self.pkg_rels.to_xml().as_bytes())?;

        // Write all parts and their relationships
        for part in &self.parts {
            zip.start_file(part.partname.trim_start_matches('/'), options)?;
            zip.write_all(&part.blob)?;

            if !part.rels.is_empty() {
                zip.start_file(rels_member_name(&part.partname), options)?;
                zip.write_all(part.rels.to_xml().as_bytes())?;
            }
        }

        let cursor = zip.finish()?;
        Ok(cursor.into_inner())
    }
}

/// ZIP member name of the `.rels` part belonging to `partname`.
///
/// `/ppt/slides/slide1.xml` maps to `ppt/slides/_rels/slide1.xml.rels`.
fn rels_member_name(partname: &str) -> String {
    let trimmed = partname.trim_start_matches('/');
    match trimmed.rfind('/') {
        Some(idx) => format!("{}/_rels/{}.rels", &trimmed[..idx], &trimmed[idx + 1..]),
        None => format!("_rels/{}.rels", trimmed),
    }
}

/// Helper for building [Content_Types].xml content.
///
/// Manages Default and Override elements for content type mapping.
struct ContentTypesItem {
    /// Default content types by extension
    defaults: BTreeMap<String, String>,

    /// Override content types by partname
    overrides: BTreeMap<String, String>,
}

impl ContentTypesItem {
    fn new() -> Self {
        let mut defaults = BTreeMap::new();

        // Add standard defaults
        defaults.insert("rels".to_string(), ct::OPC_RELATIONSHIPS.to_string());
        defaults.insert("xml".to_string(), ct::XML.to_string());

        Self {
            defaults,
            overrides: BTreeMap::new(),
        }
    }

    /// Extensions that always get a `Default` entry, used or not.
    const STANDARD_DEFAULTS: [(&'static str, &'static str); 5] = [
        ("rels", ct::OPC_RELATIONSHIPS),
        ("xml", ct::XML),
        ("png", ct::PNG),
        ("jpeg", ct::JPEG),
        ("gif", ct::GIF),
    ];

    fn from_parts(parts: &[PackagePart]) -> Self {
        let mut cti = Self::new();
        for (ext, content_type) in Self::STANDARD_DEFAULTS {
            cti.defaults.insert(ext.to_string(), content_type.to_string());
        }
        for part in parts {
            cti.add_content_type(&part.partname, &part.content_type);
        }
        cti
    }

    /// Uses a default mapping if the extension matches a well-known type,
    /// otherwise uses an override for the specific partname.
    fn add_content_type(&mut self, partname: &str, content_type: &str) {
        let ext = partname.rsplit_once('.').map(|(_, e)| e).unwrap_or("");

        if Self::is_default_content_type(ext, content_type) {
            self.defaults
                .insert(ext.to_string(), content_type.to_string());
        } else {
            self.overrides
                .insert(partname.to_string(), content_type.to_string());
        }
    }

    fn is_default_content_type(ext: &str, content_type: &str) -> bool {
        matches!(
            (ext, content_type),
            ("rels", ct::OPC_RELATIONSHIPS)
                | ("xml", ct::XML)
                | ("png", ct::PNG)
                | ("jpg", ct::JPEG)
                | ("jpeg", ct::JPEG)
                | ("gif", ct::GIF)
        )
    }

    fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(4096);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(
            r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
        );

        for (ext, content_type) in &self.defaults {
            xml.push_str(&format!(
                r#"<Default Extension="{}" ContentType="{}"/>"#,
                ext, content_type
            ));
        }

        for (partname, content_type) in &self.overrides {
            xml.push_str(&format!(
                r#"<Override PartName="{}" ContentType="{}"/>"#,
                partname, content_type
            ));
        }

        xml.push_str("</Types>");
        xml
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::relationship_type as rt;
    use std::io::Read;

    #[test]
    fn test_content_types_xml() {
        let mut cti = ContentTypesItem::new();
        cti.add_content_type("/ppt/media/image1.png", ct::PNG);
        cti.add_content_type("/ppt/slides/slide1.xml", ct::PML_SLIDE);

        let xml = cti.to_xml();

        assert!(xml.contains(r#"<Default Extension="png" ContentType="image/png"/>"#));
        assert!(xml.contains(r#"<Override PartName="/ppt/slides/slide1.xml""#));
        assert!(!xml.contains(r#"PartName="/ppt/media/image1.png""#));
    }

    #[test]
    fn test_standard_defaults_without_images() {
        let parts = [PackagePart {
            partname: "/ppt/slides/slide1.xml".to_string(),
            content_type: ct::PML_SLIDE.to_string(),
            blob: Vec::new(),
            rels: Relationships::new(),
        }];
        let xml = ContentTypesItem::from_parts(&parts).to_xml();

        let exts: Vec<&str> = xml
            .match_indices(r#"<Default Extension=""#)
            .map(|(i, m)| {
                let rest = &xml[i + m.len()..];
                &rest[..rest.find('"').unwrap()]
            })
            .collect();
        assert_eq!(exts, ["gif", "jpeg", "png", "rels", "xml"]);
        assert!(xml.contains(r#"<Default Extension="jpeg" ContentType="image/jpeg"/>"#));
        assert!(xml.contains(r#"<Default Extension="gif" ContentType="image/gif"/>"#));
        assert!(xml.contains(r#"<Override PartName="/ppt/slides/slide1.xml""#));
    }

    #[test]
    fn test_rels_member_name() {
        assert_eq!(
            rels_member_name("/ppt/slides/slide3.xml"),
            "ppt/slides/_rels/slide3.xml.rels"
        );
        assert_eq!(rels_member_name("/ppt/presentation.xml"), "ppt/_rels/presentation.xml.rels");
    }

    #[test]
    fn test_zip_layout() {
        let mut pkg = PackageWriter::new();
        let mut rels = Relationships::new();
        rels.add(rt::THEME, "theme/theme1.xml");
        pkg.add_part_with_rels(
            "/ppt/presentation.xml",
            ct::PML_PRESENTATION_MAIN,
            b"<p:presentation/>".to_vec(),
            rels,
        );
        pkg.pkg_rels_mut().add(rt::OFFICE_DOCUMENT, "ppt/presentation.xml");

        let bytes = pkg.to_bytes().unwrap();
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let names: Vec<String> = archive.file_names().map(str::to_string).collect();
        assert_eq!(names[0], "[Content_Types].xml");
        assert!(names.contains(&"_rels/.rels".to_string()));
        assert!(names.contains(&"ppt/_rels/presentation.xml.rels".to_string()));

        let mut body = String::new();
        archive
            .by_name("ppt/presentation.xml")
            .unwrap()
            .read_to_string(&mut body)
            .unwrap();
        assert_eq!(body, "<p:presentation/>");
    }

    #[test]
    fn test_output_is_deterministic() {
        let build = || {
            let mut pkg = PackageWriter::new();
            pkg.add_part("/docProps/app.xml", ct::OFC_EXTENDED_PROPERTIES, b"<Properties/>".to_vec());
            pkg.to_bytes().unwrap()
        };
        assert_eq!(build(), build());
    }
}
