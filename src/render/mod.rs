//! Rasterization.
//!
//! Fills the chart's wedges and panel box into a [`Framebuffer`]. Text is
//! carried by the SVG output only; the raster image shows the rings and the
//! panel background.
//!
//! [`Framebuffer`]: crate::framebuffer::Framebuffer

mod primitives;
mod scene;

pub use primitives::{draw_rect, fill_sector, Drawable};
pub use scene::draw_scene;
