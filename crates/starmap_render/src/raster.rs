use std::io::Cursor;
use std::sync::Arc;

use tracing::debug;

use crate::error::{RenderError, RenderResult};

/// Largest preview edge we agree to allocate.
const MAX_DIM: u32 = 8_192;

/// Rasterizes star map SVG documents into square PNG previews.
///
/// The font database is loaded once and shared by every call, so a single
/// instance can serve concurrent requests.
#[derive(Clone)]
pub struct Rasterizer {
    fontdb: Arc<usvg::fontdb::Database>,
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Rasterizer {
    /// Build a rasterizer backed by the system fonts.
    pub fn new() -> Self {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        debug!(faces = db.len(), "loaded system fonts");
        Self {
            fontdb: Arc::new(db),
        }
    }

    /// Render `svg` into a `size`×`size` PNG.
    pub fn rasterize_png(&self, svg: &str, size: u32) -> RenderResult<Vec<u8>> {
        if size == 0 || size > MAX_DIM {
            return Err(RenderError::allocate(format!(
                "preview size {size} outside 1..={MAX_DIM}"
            )));
        }

        let opts = usvg::Options {
            fontdb: Arc::clone(&self.fontdb),
            ..Default::default()
        };
        let tree = usvg::Tree::from_str(svg, &opts)?;

        let mut pixmap = resvg::tiny_skia::Pixmap::new(size, size)
            .ok_or_else(|| RenderError::allocate("failed to allocate preview pixmap"))?;
        let sx = size as f32 / tree.size().width();
        let sy = size as f32 / tree.size().height();
        resvg::render(
            &tree,
            resvg::tiny_skia::Transform::from_scale(sx, sy),
            &mut pixmap.as_mut(),
        );

        let mut rgba = Vec::with_capacity((size * size * 4) as usize);
        for pixel in pixmap.pixels() {
            let color = pixel.demultiply();
            rgba.extend_from_slice(&[color.red(), color.green(), color.blue(), color.alpha()]);
        }
        let image = image::RgbaImage::from_raw(size, size, rgba)
            .ok_or_else(|| RenderError::allocate("preview buffer size mismatch"))?;

        let mut png = Vec::new();
        image::DynamicImage::ImageRgba8(image)
            .write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)?;
        Ok(png)
    }
}
