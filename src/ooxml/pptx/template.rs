//! Presentation template module.
//!
//! Provides the fixed parts every generated deck carries: one slide master
//! with a single blank layout, a notes master, two themes and the
//! presentation/view/table-style property parts. The parts are kept as
//! compact XML strings; document properties are built from the deck title.

use crate::common::xml::escape_xml;

const XML_DECL: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

const NS_DECLS: &str = concat!(
    r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#,
    r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" "#,
    r#"xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main""#
);

const EMPTY_GROUP: &str = concat!(
    r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>"#,
    r#"<p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/>"#,
    r#"<a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>"#
);

const CLR_MAP: &str = concat!(
    r#"<p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" "#,
    r#"accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" "#,
    r#"hlink="hlink" folHlink="folHlink"/>"#
);

/// Level-one paragraph properties shared by the master text styles.
fn level_one(size: u32, space_before: bool) -> String {
    let spacing = if space_before {
        r#"<a:spcBef><a:spcPct val="20000"/></a:spcBef>"#
    } else {
        ""
    };
    format!(
        concat!(
            r#"<a:lvl1pPr marL="0" algn="l" defTabSz="914400" rtl="0" eaLnBrk="1" latinLnBrk="0" hangingPunct="1">"#,
            "{}",
            r#"<a:buNone/><a:defRPr sz="{}" kern="1200"><a:solidFill><a:schemeClr val="tx1"/></a:solidFill>"#,
            r#"<a:latin typeface="+mn-lt"/><a:ea typeface="+mn-ea"/><a:cs typeface="+mn-cs"/></a:defRPr></a:lvl1pPr>"#
        ),
        spacing, size
    )
}

/// Slide master with a blank background and one layout (`rId1`).
pub fn default_slide_master_xml() -> String {
    let mut xml = String::with_capacity(2048);
    xml.push_str(XML_DECL);
    xml.push_str("<p:sldMaster ");
    xml.push_str(NS_DECLS);
    xml.push('>');
    xml.push_str(r#"<p:cSld><p:bg><p:bgRef idx="1001"><a:schemeClr val="bg1"/></p:bgRef></p:bg>"#);
    xml.push_str("<p:spTree>");
    xml.push_str(EMPTY_GROUP);
    xml.push_str("</p:spTree></p:cSld>");
    xml.push_str(CLR_MAP);
    xml.push_str(r#"<p:sldLayoutIdLst><p:sldLayoutId id="2147483649" r:id="rId1"/></p:sldLayoutIdLst>"#);
    xml.push_str("<p:txStyles>");
    xml.push_str("<p:titleStyle>");
    xml.push_str(&level_one(4400, false));
    xml.push_str("</p:titleStyle>");
    xml.push_str("<p:bodyStyle>");
    xml.push_str(&level_one(2800, true));
    xml.push_str("</p:bodyStyle>");
    xml.push_str("<p:otherStyle>");
    xml.push_str(&level_one(1800, false));
    xml.push_str("</p:otherStyle>");
    xml.push_str("</p:txStyles>");
    xml.push_str("</p:sldMaster>");
    xml
}

/// The blank layout every slide uses.
pub fn blank_slide_layout_xml() -> String {
    let mut xml = String::with_capacity(768);
    xml.push_str(XML_DECL);
    xml.push_str("<p:sldLayout ");
    xml.push_str(NS_DECLS);
    xml.push_str(r#" type="blank" preserve="1">"#);
    xml.push_str(r#"<p:cSld name="Blank"><p:spTree>"#);
    xml.push_str(EMPTY_GROUP);
    xml.push_str("</p:spTree></p:cSld>");
    xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
    xml.push_str("</p:sldLayout>");
    xml
}

/// Notes master carrying the body placeholder notes slides inherit from.
pub fn default_notes_master_xml() -> String {
    let mut xml = String::with_capacity(2048);
    xml.push_str(XML_DECL);
    xml.push_str("<p:notesMaster ");
    xml.push_str(NS_DECLS);
    xml.push('>');
    xml.push_str(r#"<p:cSld><p:bg><p:bgRef idx="1001"><a:schemeClr val="bg1"/></p:bgRef></p:bg><p:spTree>"#);
    xml.push_str(EMPTY_GROUP);
    xml.push_str(concat!(
        r#"<p:sp><p:nvSpPr><p:cNvPr id="2" name="Notes Placeholder 1"/>"#,
        r#"<p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr><p:nvPr><p:ph type="body" sz="quarter" idx="1"/></p:nvPr></p:nvSpPr>"#,
        r#"<p:spPr><a:xfrm><a:off x="685800" y="4400550"/><a:ext cx="5486400" cy="3600450"/></a:xfrm>"#,
        r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom></p:spPr>"#,
        r#"<p:txBody><a:bodyPr vert="horz" lIns="91440" tIns="45720" rIns="91440" bIns="45720" rtlCol="0"/>"#,
        r#"<a:lstStyle/><a:p><a:pPr lvl="0"/><a:r><a:rPr lang="en-US"/><a:t>Click to edit Master text styles</a:t></a:r></a:p>"#,
        r#"</p:txBody></p:sp>"#
    ));
    xml.push_str("</p:spTree></p:cSld>");
    xml.push_str(CLR_MAP);
    xml.push_str("<p:notesStyle>");
    xml.push_str(&level_one(1200, false));
    xml.push_str("</p:notesStyle>");
    xml.push_str("</p:notesMaster>");
    xml
}

/// Office theme with the Segoe UI font scheme.
pub fn default_theme_xml() -> String {
    let mut xml = String::with_capacity(4096);
    xml.push_str(XML_DECL);
    xml.push_str(
        r#"<a:theme xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" name="Office Theme">"#,
    );
    xml.push_str("<a:themeElements>");

    xml.push_str(r#"<a:clrScheme name="Office">"#);
    xml.push_str(r#"<a:dk1><a:sysClr val="windowText" lastClr="000000"/></a:dk1>"#);
    xml.push_str(r#"<a:lt1><a:sysClr val="window" lastClr="FFFFFF"/></a:lt1>"#);
    for (name, hex) in [
        ("dk2", "44546A"),
        ("lt2", "E7E6E6"),
        ("accent1", "0078D4"),
        ("accent2", "50E6FF"),
        ("accent3", "A5A5A5"),
        ("accent4", "FFB900"),
        ("accent5", "8764B8"),
        ("accent6", "107C10"),
        ("hlink", "0563C1"),
        ("folHlink", "954F72"),
    ] {
        xml.push_str(&format!(r#"<a:{name}><a:srgbClr val="{hex}"/></a:{name}>"#));
    }
    xml.push_str("</a:clrScheme>");

    xml.push_str(r#"<a:fontScheme name="Segoe UI">"#);
    for tag in ["majorFont", "minorFont"] {
        xml.push_str(&format!(
            r#"<a:{tag}><a:latin typeface="Segoe UI"/><a:ea typeface=""/><a:cs typeface=""/></a:{tag}>"#
        ));
    }
    xml.push_str("</a:fontScheme>");

    xml.push_str(r#"<a:fmtScheme name="Office">"#);
    xml.push_str("<a:fillStyleLst>");
    for _ in 0..3 {
        xml.push_str(r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#);
    }
    xml.push_str("</a:fillStyleLst>");
    xml.push_str("<a:lnStyleLst>");
    for width in [6350, 12700, 19050] {
        xml.push_str(&format!(
            r#"<a:ln w="{width}" cap="flat" cmpd="sng" algn="ctr"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:prstDash val="solid"/><a:miter lim="800000"/></a:ln>"#
        ));
    }
    xml.push_str("</a:lnStyleLst>");
    xml.push_str("<a:effectStyleLst>");
    for _ in 0..3 {
        xml.push_str("<a:effectStyle><a:effectLst/></a:effectStyle>");
    }
    xml.push_str("</a:effectStyleLst>");
    xml.push_str("<a:bgFillStyleLst>");
    for _ in 0..3 {
        xml.push_str(r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#);
    }
    xml.push_str("</a:bgFillStyleLst>");
    xml.push_str("</a:fmtScheme>");

    xml.push_str("</a:themeElements>");
    xml.push_str("<a:objectDefaults/><a:extraClrSchemeLst/>");
    xml.push_str("</a:theme>");
    xml
}

/// Presentation properties part.
pub fn default_pres_props_xml() -> String {
    format!("{XML_DECL}<p:presentationPr {NS_DECLS}/>")
}

/// View properties part.
pub fn default_view_props_xml() -> String {
    let mut xml = String::with_capacity(640);
    xml.push_str(XML_DECL);
    xml.push_str("<p:viewPr ");
    xml.push_str(NS_DECLS);
    xml.push('>');
    xml.push_str(r#"<p:normalViewPr><p:restoredLeft sz="15620"/><p:restoredTop sz="94660"/></p:normalViewPr>"#);
    xml.push_str(concat!(
        r#"<p:slideViewPr><p:cSldViewPr><p:cViewPr varScale="1"><p:scale><a:sx n="100" d="100"/>"#,
        r#"<a:sy n="100" d="100"/></p:scale><p:origin x="0" y="0"/></p:cViewPr><p:guideLst/>"#,
        r#"</p:cSldViewPr></p:slideViewPr>"#
    ));
    xml.push_str(r#"<p:gridSpacing cx="76200" cy="76200"/>"#);
    xml.push_str("</p:viewPr>");
    xml
}

/// Table style list naming the default medium style.
pub fn default_table_styles_xml() -> String {
    format!(
        r#"{XML_DECL}<a:tblStyleLst xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" def="{{5C22544A-7EE6-4342-B048-85BDC9FD1C3A}}"/>"#
    )
}

/// Core document properties (`docProps/core.xml`).
///
/// No timestamps are written so repeated runs give identical packages.
pub fn core_properties_xml(title: &str, creator: &str) -> String {
    let mut xml = String::with_capacity(768);
    xml.push_str(XML_DECL);
    xml.push_str(concat!(
        r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" "#,
        r#"xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" "#,
        r#"xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#
    ));
    xml.push_str("<dc:title>");
    xml.push_str(&escape_xml(title));
    xml.push_str("</dc:title>");
    xml.push_str("<dc:creator>");
    xml.push_str(&escape_xml(creator));
    xml.push_str("</dc:creator>");
    xml.push_str("<cp:revision>1</cp:revision>");
    xml.push_str("</cp:coreProperties>");
    xml
}

/// Extended application properties (`docProps/app.xml`).
pub fn app_properties_xml(slides: usize, notes: usize) -> String {
    format!(
        concat!(
            "{}",
            r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" "#,
            r#"xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#,
            "<Application>hve-assets</Application>",
            "<PresentationFormat>Widescreen</PresentationFormat>",
            "<Slides>{}</Slides><Notes>{}</Notes>",
            "</Properties>"
        ),
        XML_DECL, slides, notes
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use quick_xml::Reader;
    use quick_xml::events::Event;

    fn assert_well_formed(xml: &str) {
        let mut reader = Reader::from_str(xml);
        let mut depth = 0i32;
        loop {
            match reader.read_event() {
                Ok(Event::Start(_)) => depth += 1,
                Ok(Event::End(_)) => depth -= 1,
                Ok(Event::Eof) => break,
                Ok(_) => {},
                Err(e) => panic!("malformed xml: {e}"),
            }
        }
        assert_eq!(depth, 0);
    }

    #[test]
    fn test_fixed_parts_are_well_formed() {
        for xml in [
            default_slide_master_xml(),
            blank_slide_layout_xml(),
            default_notes_master_xml(),
            default_theme_xml(),
            default_pres_props_xml(),
            default_view_props_xml(),
            default_table_styles_xml(),
        ] {
            assert_well_formed(&xml);
        }
    }

    #[test]
    fn test_theme_font_scheme() {
        let theme = default_theme_xml();
        assert!(theme.contains(r#"<a:fontScheme name="Segoe UI">"#));
        assert_eq!(theme.matches("<a:effectStyle>").count(), 3);
        assert!(default_table_styles_xml().contains(r#"def="{5C22544A-7EE6-4342-B048-85BDC9FD1C3A}""#));
    }

    #[test]
    fn test_document_properties() {
        let core = core_properties_xml("HVE Core & RPI", "hve-assets");
        assert!(core.contains("<dc:title>HVE Core &amp; RPI</dc:title>"));
        assert!(!core.contains("dcterms:created"));
        assert_well_formed(&core);

        let app = app_properties_xml(16, 15);
        assert!(app.contains("<Slides>16</Slides><Notes>15</Notes>"));
        assert_well_formed(&app);
    }
}
