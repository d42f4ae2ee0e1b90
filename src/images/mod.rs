// Image generation module
//
// This module provides the vector and raster output used by the diagram
// generators.
//
// # Architecture
//
// - `svg`: retained SVG document model (`SvgBuilder` and its elements)
// - `svg_utils`: buffer-writing helpers for numbers, colors and attributes
// - `raster`: SVG to PNG rendering through resvg
//
// # Example
//
// ```no_run
// use hve_assets::common::RGBColor;
// use hve_assets::images::svg::{SvgBuilder, SvgRect};
// use hve_assets::images::raster::{RasterOptions, svg_to_png};
//
// let mut svg = SvgBuilder::new(200.0, 100.0);
// svg.add_rect(SvgRect::new(0.0, 0.0, 200.0, 100.0).with_fill(RGBColor::new(27, 27, 27)));
// let png = svg_to_png(&svg.build(), &RasterOptions::default())?;
// std::fs::write("out.png", png)?;
// # Ok::<(), Box<dyn std::error::Error>>(())
// ```
pub mod raster;
pub mod svg;
pub mod svg_utils;

pub use raster::{RasterError, RasterOptions, svg_to_png};
pub use svg::{
    PathCommand, SvgBuilder, SvgCircle, SvgElement, SvgLine, SvgMarker, SvgPath, SvgPolygon,
    SvgRect, SvgText, TextAnchor,
};
