//! Output collaborators for star map scenes: SVG serialization and PNG
//! previews.

pub mod error;
pub mod raster;
pub mod svg;

pub use error::{RenderError, RenderResult};
pub use raster::Rasterizer;
pub use svg::to_svg;

/// Edge length of the default PNG preview.
pub const DEFAULT_PNG_SIZE: u32 = 1080;
