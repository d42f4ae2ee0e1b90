/// Relationship ID mapper for tracking relationships during presentation generation.
///
/// Slide relationships are created before the slide XML is written, so the
/// mapper hands the real IDs to the XML generator instead of placeholders.
use std::collections::HashMap;

/// Maps presentation elements to their relationship IDs.
///
/// The mapper is organized per-slide, as each slide has its own set of relationships.
#[derive(Debug, Default)]
pub struct RelationshipMapper {
    /// Maps (slide_index, image_index_in_slide) to relationship ID
    image_ids: HashMap<(usize, usize), String>,
    /// Maps slide_index to notes slide relationship ID
    notes_ids: HashMap<usize, String>,
}

impl RelationshipMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an image relationship mapping for a specific slide.
    ///
    /// # Arguments
    /// * `slide_index` - The index of the slide (0-based)
    /// * `image_index_in_slide` - The index of the image within that slide (0-based)
    /// * `rel_id` - The relationship ID (e.g., "rId2")
    pub fn add_image(&mut self, slide_index: usize, image_index_in_slide: usize, rel_id: String) {
        self.image_ids
            .insert((slide_index, image_index_in_slide), rel_id);
    }

    pub fn add_notes(&mut self, slide_index: usize, rel_id: String) {
        self.notes_ids.insert(slide_index, rel_id);
    }

    /// Get the relationship ID for an image in a specific slide.
    pub fn get_image_id(&self, slide_index: usize, image_index_in_slide: usize) -> Option<&str> {
        self.image_ids
            .get(&(slide_index, image_index_in_slide))
            .map(|s| s.as_str())
    }

    pub fn get_notes_id(&self, slide_index: usize) -> Option<&str> {
        self.notes_ids.get(&slide_index).map(|s| s.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_scoped_per_slide() {
        let mut mapper = RelationshipMapper::new();
        mapper.add_image(0, 0, "rId2".to_string());
        mapper.add_image(3, 0, "rId2".to_string());
        mapper.add_notes(3, "rId3".to_string());

        assert_eq!(mapper.get_image_id(3, 0), Some("rId2"));
        assert_eq!(mapper.get_image_id(3, 1), None);
        assert_eq!(mapper.get_notes_id(3), Some("rId3"));
        assert_eq!(mapper.get_notes_id(0), None);
    }
}
