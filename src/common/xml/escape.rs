use std::borrow::Cow;

use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;

// Static initialization: automaton is built only once, thread-safe
static XML_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::new(["&", "<", ">", "\"", "'"]).expect("Failed to build XML escaper")
});

const XML_ENTITIES: [&str; 5] = ["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"];

/// Escape XML special characters.
///
/// Borrows the input unchanged when it contains nothing to escape, which is
/// the common case for slide and diagram labels.
///
/// # Examples
///
/// ```
/// use hve_assets::common::xml::escape_xml;
/// assert_eq!(escape_xml("a & b"), "a &amp; b");
/// assert_eq!(escape_xml("Research → Plan"), "Research → Plan");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> Cow<'_, str> {
    if XML_ESCAPER.is_match(s) {
        Cow::Owned(XML_ESCAPER.replace_all(s, &XML_ENTITIES))
    } else {
        Cow::Borrowed(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_all_entities() {
        assert_eq!(
            escape_xml(r#"<tag a="1">'x' & y</tag>"#),
            "&lt;tag a=&quot;1&quot;&gt;&apos;x&apos; &amp; y&lt;/tag&gt;"
        );
    }

    #[test]
    fn test_escape_borrows_clean_text() {
        assert!(matches!(escape_xml("PRD / BRD / ADR"), Cow::Borrowed(_)));
        assert!(matches!(escape_xml("Q&A"), Cow::Owned(_)));
    }
}
