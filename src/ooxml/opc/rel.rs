/// Relationship-related objects for OPC packages.
///
/// Relationships are kept in insertion order and numbered `rId1`, `rId2`, ...
/// so the serialized `.rels` part is identical across runs.
use crate::common::xml::escape_xml;

/// A single internal relationship from a source part to a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    /// Relationship ID (e.g., "rId1", "rId2")
    r_id: String,

    /// Relationship type URI
    reltype: String,

    /// Target reference relative to the source part's directory
    target_ref: String,
}

impl Relationship {
    /// Get the relationship ID.
    #[inline]
    pub fn r_id(&self) -> &str {
        &self.r_id
    }

    /// Get the relationship type URI.
    #[inline]
    pub fn reltype(&self) -> &str {
        &self.reltype
    }

    /// Get the target reference.
    #[inline]
    pub fn target_ref(&self) -> &str {
        &self.target_ref
    }
}

/// Ordered collection of relationships belonging to one source part.
#[derive(Debug, Clone, Default)]
pub struct Relationships {
    rels: Vec<Relationship>,
}

impl Relationships {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a relationship and return its freshly assigned rId.
    pub fn add(&mut self, reltype: &str, target_ref: &str) -> String {
        let r_id = format!("rId{}", self.rels.len() + 1);
        self.rels.push(Relationship {
            r_id: r_id.clone(),
            reltype: reltype.to_string(),
            target_ref: target_ref.to_string(),
        });
        r_id
    }

    /// Get a relationship by ID.
    pub fn get(&self, r_id: &str) -> Option<&Relationship> {
        self.rels.iter().find(|rel| rel.r_id == r_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        self.rels.iter()
    }

    pub fn len(&self) -> usize {
        self.rels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rels.is_empty()
    }

    /// Serialize to `.rels` XML.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(256 + self.rels.len() * 160);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(
            r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
        );

        for rel in &self.rels {
            xml.push_str(r#"<Relationship Id=""#);
            xml.push_str(&escape_xml(&rel.r_id));
            xml.push_str(r#"" Type=""#);
            xml.push_str(&escape_xml(&rel.reltype));
            xml.push_str(r#"" Target=""#);
            xml.push_str(&escape_xml(&rel.target_ref));
            xml.push_str(r#""/>"#);
        }

        xml.push_str("</Relationships>");
        xml
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::relationship_type as rt;

    #[test]
    fn test_sequential_ids() {
        let mut rels = Relationships::new();
        assert_eq!(rels.add(rt::SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml"), "rId1");
        assert_eq!(rels.add(rt::IMAGE, "../media/image1.png"), "rId2");
        assert_eq!(rels.len(), 2);
        assert_eq!(rels.get("rId2").map(|r| r.target_ref()), Some("../media/image1.png"));
    }

    #[test]
    fn test_xml_keeps_insertion_order() {
        let mut rels = Relationships::new();
        for i in 1..=11 {
            rels.add(rt::SLIDE, &format!("slides/slide{}.xml", i));
        }
        let xml = rels.to_xml();
        let pos2 = xml.find(r#"Id="rId2""#).unwrap();
        let pos10 = xml.find(r#"Id="rId10""#).unwrap();
        assert!(pos2 < pos10);
        assert!(xml.ends_with("</Relationships>"));
    }
}
