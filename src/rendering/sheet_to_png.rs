//! Rasterizes contact-sheet SVG to PNG.
//!
//! The sheet SVG is generated at its final pixel size, so rasterization
//! scales only to cover rounding, then the pixmap is flattened against
//! white and encoded as an 8-bit RGB PNG.

use crate::error::RenderError;
use resvg::usvg::{self, Transform};
use std::io::Cursor;
use std::sync::Arc;
use tiny_skia::Pixmap;

/// Renders contact-sheet SVG documents to PNG.
pub struct SheetRenderer {
    /// Font database for title text rendering
    fontdb: Arc<fontdb::Database>,
}

impl SheetRenderer {
    /// Create a renderer backed by the system font catalog.
    pub fn new() -> Self {
        let mut fontdb = fontdb::Database::new();
        fontdb.load_system_fonts();
        tracing::debug!(font_count = fontdb.len(), "Loaded fonts for sheet titles");

        Self {
            fontdb: Arc::new(fontdb),
        }
    }

    /// Rasterize an SVG document into a `width` x `height` RGB PNG.
    pub fn render_png(
        &self,
        svg_data: &str,
        width: u32,
        height: u32,
    ) -> Result<Vec<u8>, RenderError> {
        let pixmap = self.rasterize_svg(svg_data.as_bytes(), width, height)?;
        let rgb = rgba_to_rgb(pixmap.data());
        encode_png(width, height, &rgb)
    }

    /// Parse and rasterize SVG to an RGBA pixmap
    fn rasterize_svg(
        &self,
        svg_data: &[u8],
        width: u32,
        height: u32,
    ) -> Result<Pixmap, RenderError> {
        let options = usvg::Options {
            fontdb: self.fontdb.clone(),
            ..Default::default()
        };
        let tree = usvg::Tree::from_data(svg_data, &options)
            .map_err(|e| RenderError::SvgParse(e.to_string()))?;

        let svg_size = tree.size();
        let scale_x = width as f32 / svg_size.width();
        let scale_y = height as f32 / svg_size.height();
        let scale = scale_x.min(scale_y);

        let mut pixmap = Pixmap::new(width, height).ok_or(RenderError::PixmapAllocation)?;
        pixmap.fill(tiny_skia::Color::WHITE);

        let transform = Transform::from_scale(scale, scale);
        resvg::render(&tree, transform, &mut pixmap.as_mut());

        Ok(pixmap)
    }
}

impl Default for SheetRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert RGBA pixmap data to RGB bytes, alpha-compositing against white.
fn rgba_to_rgb(rgba_data: &[u8]) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(rgba_data.len() / 4 * 3);
    for pixel in rgba_data.chunks_exact(4) {
        let (r, g, b, a) = (pixel[0], pixel[1], pixel[2], pixel[3]);
        if a == 255 {
            rgb.extend_from_slice(&[r, g, b]);
        } else if a == 0 {
            rgb.extend_from_slice(&[255, 255, 255]);
        } else {
            let af = a as u16;
            let cr = ((r as u16 * af + 255 * (255 - af)) / 255) as u8;
            let cg = ((g as u16 * af + 255 * (255 - af)) / 255) as u8;
            let cb = ((b as u16 * af + 255 * (255 - af)) / 255) as u8;
            rgb.extend_from_slice(&[cr, cg, cb]);
        }
    }
    rgb
}

/// Encode RGB bytes as an 8-bit PNG.
fn encode_png(width: u32, height: u32, rgb: &[u8]) -> Result<Vec<u8>, RenderError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(rgb)
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="10">
  <rect x="0" y="0" width="20" height="10" fill="#ffffff"/>
  <rect x="0" y="0" width="10" height="10" fill="#000000"/>
</svg>"##;

    #[test]
    fn test_render_png_produces_decodable_output() {
        let renderer = SheetRenderer::new();
        let bytes = renderer.render_png(MINIMAL_SVG, 20, 10).unwrap();

        let decoded = image::load_from_memory(&bytes).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (20, 10));
        // Left half black, right half white
        assert_eq!(decoded.get_pixel(2, 5).0, [0, 0, 0]);
        assert_eq!(decoded.get_pixel(18, 5).0, [255, 255, 255]);
    }

    #[test]
    fn test_invalid_svg_is_a_parse_error() {
        let renderer = SheetRenderer::new();
        let err = renderer.render_png("not svg at all", 10, 10).unwrap_err();
        assert!(matches!(err, RenderError::SvgParse(_)));
    }

    #[test]
    fn test_rgba_to_rgb_composites_against_white() {
        // Opaque red, transparent, half-covered black
        let rgba = [255, 0, 0, 255, 0, 0, 0, 0, 0, 0, 0, 128];
        let rgb = rgba_to_rgb(&rgba);
        assert_eq!(&rgb[0..3], &[255, 0, 0]);
        assert_eq!(&rgb[3..6], &[255, 255, 255]);
        // ~50% black over white is mid-gray
        assert!(rgb[6] > 120 && rgb[6] < 135);
    }
}
