// src/render/raster.rs
//! SVG document → pixels. Pixmaps come out of resvg premultiplied;
//! everything downstream (the `image` canvas) wants straight alpha, so
//! demultiplication happens here at the boundary.

use image::{Rgba, RgbaImage};
use resvg::{tiny_skia, usvg};

use super::style::FONT_FAMILY;
use crate::error::RenderError;

/// Shared parse options: preferred font family plus the system fonts.
/// Build once per run; the font directory scan is slow.
pub fn base_options() -> usvg::Options<'static> {
    let mut options = usvg::Options::default();
    options.font_family = FONT_FAMILY
        .split(',')
        .next()
        .unwrap_or(FONT_FAMILY)
        .trim()
        .to_string();
    options.fontdb_mut().load_system_fonts();
    options
}

/// Rasterize an SVG document into a `width` × `height` pixmap.
pub fn rasterize(
    svg_text: &str,
    width: u32,
    height: u32,
    options: &usvg::Options,
) -> Result<tiny_skia::Pixmap, RenderError> {
    let tree = usvg::Tree::from_str(svg_text, options)?;
    let mut pixmap =
        tiny_skia::Pixmap::new(width, height).ok_or(usvg::Error::InvalidSize)?;
    resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());
    Ok(pixmap)
}

/// Premultiplied pixmap → straight-alpha RGBA image.
pub fn pixmap_to_image(pixmap: &tiny_skia::Pixmap) -> RgbaImage {
    let mut out = RgbaImage::new(pixmap.width(), pixmap.height());
    for (src, dst) in pixmap.pixels().iter().zip(out.pixels_mut()) {
        let c = src.demultiply();
        *dst = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rasterizes_a_filled_rect() {
        let doc = r##"<svg xmlns="http://www.w3.org/2000/svg" width="4" height="4">
            <rect x="0" y="0" width="4" height="4" fill="#ff0000"/>
        </svg>"##;
        let pixmap = rasterize(doc, 4, 4, &usvg::Options::default()).unwrap();
        let img = pixmap_to_image(&pixmap);
        assert_eq!(img.get_pixel(1, 1).0, [255, 0, 0, 255]);
    }

    #[test]
    fn malformed_svg_is_a_raster_error() {
        let err = rasterize("<svg", 4, 4, &usvg::Options::default()).unwrap_err();
        assert!(matches!(err, RenderError::Raster(_)));
    }

    #[test]
    fn transparent_background_stays_transparent() {
        let doc = r#"<svg xmlns="http://www.w3.org/2000/svg" width="4" height="4"></svg>"#;
        let pixmap = rasterize(doc, 4, 4, &usvg::Options::default()).unwrap();
        let img = pixmap_to_image(&pixmap);
        assert_eq!(img.get_pixel(0, 0).0[3], 0);
    }
}
