//! Layer compositing - stacking tiles onto a portrait canvas

mod blend;

pub use blend::{blend_over, blit_over};

use image::RgbaImage;

/// Composite `layers` bottom to top onto a fresh transparent `size × size` canvas.
pub fn composite_layers<I>(size: u32, layers: I) -> RgbaImage
where
    I: IntoIterator<Item = RgbaImage>,
{
    let mut canvas = RgbaImage::new(size, size);
    for layer in layers {
        blit_over(&mut canvas, &layer);
    }
    canvas
}
