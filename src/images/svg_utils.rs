//! Shared SVG serialization utilities.
//!
//! All functions write directly to an output buffer instead of returning
//! intermediate `String`s, so a whole diagram is emitted into one allocation.
//!
//! - Floats go through `ryu`, integers through `itoa`
//! - Numbers are rounded to two decimals with trailing zeros removed, which
//!   keeps output stable across runs

use crate::common::RGBColor;
use crate::common::xml::escape_xml;

/// Fast number formatter that writes directly to a string buffer.
/// Uses itoa for integers and ryu for floats to minimize allocations.
///
/// # Examples
///
/// ```
/// use hve_assets::images::svg_utils::write_num;
///
/// let mut buf = String::new();
/// write_num(&mut buf, 10.0);  // writes "10"
/// write_num(&mut buf, 10.5);  // writes "10.5"
/// write_num(&mut buf, 10.123); // writes "10.12"
/// ```
#[inline]
pub fn write_num(buf: &mut String, n: f64) {
    // Fast path: integral values skip float formatting entirely
    if n.fract() == 0.0 && n.abs() < 1e10 {
        let mut buffer = itoa::Buffer::new();
        buf.push_str(buffer.format(n as i64));
        return;
    }

    let rounded = (n * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        let mut buffer = itoa::Buffer::new();
        buf.push_str(buffer.format(rounded as i64));
        return;
    }

    let mut buffer = ryu::Buffer::new();
    let s = buffer.format(rounded);
    buf.push_str(s.trim_end_matches('0').trim_end_matches('.'));
}

/// Format a number with minimal precision (no trailing zeros).
#[inline]
pub fn fmt_num(n: f64) -> String {
    let mut s = String::with_capacity(16);
    write_num(&mut s, n);
    s
}

/// Write ` name="value"` for a numeric attribute.
#[inline]
pub fn write_num_attr(buf: &mut String, name: &str, value: f64) {
    buf.push(' ');
    buf.push_str(name);
    buf.push_str("=\"");
    write_num(buf, value);
    buf.push('"');
}

/// Write ` name="value"` for a text attribute, escaping the value.
#[inline]
pub fn write_attr(buf: &mut String, name: &str, value: &str) {
    buf.push(' ');
    buf.push_str(name);
    buf.push_str("=\"");
    buf.push_str(&escape_xml(value));
    buf.push('"');
}

/// Write ` name="#RRGGBB"`, or ` name="none"` when no color is given.
#[inline]
pub fn write_color_attr(buf: &mut String, name: &str, color: Option<RGBColor>) {
    buf.push(' ');
    buf.push_str(name);
    buf.push_str("=\"");
    match color {
        Some(c) => buf.push_str(&c.to_string()),
        None => buf.push_str("none"),
    }
    buf.push('"');
}

/// Write text content with XML special characters escaped.
#[inline]
pub fn write_xml_escaped(buf: &mut String, text: &str) {
    buf.push_str(&escape_xml(text));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_num() {
        let mut buf = String::new();
        write_num(&mut buf, 10.0);
        assert_eq!(buf, "10");

        buf.clear();
        write_num(&mut buf, 10.5);
        assert_eq!(buf, "10.5");

        buf.clear();
        write_num(&mut buf, 10.123);
        assert_eq!(buf, "10.12");

        buf.clear();
        write_num(&mut buf, 9.999);
        assert_eq!(buf, "10");

        buf.clear();
        write_num(&mut buf, -3.0);
        assert_eq!(buf, "-3");
    }

    #[test]
    fn test_write_attrs() {
        let mut buf = String::new();
        write_num_attr(&mut buf, "rx", 12.0);
        write_color_attr(&mut buf, "fill", Some(RGBColor::new(0x2D, 0x2D, 0x2D)));
        write_color_attr(&mut buf, "stroke", None);
        write_attr(&mut buf, "font-family", "'Segoe UI', sans-serif");
        assert_eq!(
            buf,
            r##" rx="12" fill="#2D2D2D" stroke="none" font-family="&apos;Segoe UI&apos;, sans-serif""##
        );
    }

    #[test]
    fn test_write_xml_escaped() {
        let mut buf = String::new();
        write_xml_escaped(&mut buf, "Reqs → PRD & <WIT>");
        assert_eq!(buf, "Reqs → PRD &amp; &lt;WIT&gt;");
    }
}
