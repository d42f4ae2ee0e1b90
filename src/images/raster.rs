//! SVG to PNG rasterization.
//!
//! The deck art is authored as SVG in pixel coordinates and rendered here with
//! `usvg`/`resvg` onto a `tiny_skia` pixmap.

#[derive(Debug, thiserror::Error)]
pub enum RasterError {
    #[error("failed to parse SVG")]
    SvgParse,
    #[error("failed to allocate pixmap for raster rendering")]
    PixmapAlloc,
    #[error("failed to encode PNG")]
    PngEncode,
}

pub type Result<T> = std::result::Result<T, RasterError>;

#[derive(Debug, Clone)]
pub struct RasterOptions {
    pub scale: f32,
    /// Family used when a `font-family` list has no installed match
    pub font_family: String,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            scale: 1.0,
            font_family: "DejaVu Sans".to_string(),
        }
    }
}

pub fn svg_to_png(svg: &str, options: &RasterOptions) -> Result<Vec<u8>> {
    let pixmap = svg_to_pixmap(svg, options)?;
    pixmap.encode_png().map_err(|_| RasterError::PngEncode)
}

fn svg_to_pixmap(svg: &str, options: &RasterOptions) -> Result<tiny_skia::Pixmap> {
    let mut opt = usvg::Options::default();
    opt.fontdb_mut().load_system_fonts();
    opt.font_family = options.font_family.clone();

    let tree = usvg::Tree::from_str(svg, &opt).map_err(|_| RasterError::SvgParse)?;

    let size = tree.size();
    let width_px = (size.width() * options.scale).ceil().max(1.0) as u32;
    let height_px = (size.height() * options.scale).ceil().max(1.0) as u32;

    let mut pixmap = tiny_skia::Pixmap::new(width_px, height_px).ok_or(RasterError::PixmapAlloc)?;

    log::trace!("rasterizing {}x{} px", width_px, height_px);
    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(options.scale, options.scale),
        &mut pixmap.as_mut(),
    );
    Ok(pixmap)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 40 20" width="40" height="20"><rect width="40" height="20" fill="#1B1B1B"/></svg>"##;

    #[test]
    fn test_svg_to_png_signature_and_size() {
        let png = svg_to_png(SQUARE, &RasterOptions::default()).unwrap();
        assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));
        // IHDR width/height are big-endian u32 at offsets 16 and 20
        assert_eq!(u32::from_be_bytes([png[16], png[17], png[18], png[19]]), 40);
        assert_eq!(u32::from_be_bytes([png[20], png[21], png[22], png[23]]), 20);
    }

    #[test]
    fn test_scale_changes_pixel_size() {
        let options = RasterOptions {
            scale: 2.0,
            ..Default::default()
        };
        let png = svg_to_png(SQUARE, &options).unwrap();
        assert_eq!(u32::from_be_bytes([png[16], png[17], png[18], png[19]]), 80);
    }

    #[test]
    fn test_invalid_svg() {
        let err = svg_to_png("<not-svg", &RasterOptions::default()).unwrap_err();
        assert!(matches!(err, RasterError::SvgParse));
    }
}
