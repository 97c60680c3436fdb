//! Source-over alpha compositing

use image::{Rgba, RgbaImage};

/// Composite `tile` over `canvas`, both anchored at the top-left corner.
///
/// Pixels of `tile` that fall outside `canvas` are ignored.
pub fn blit_over(canvas: &mut RgbaImage, tile: &RgbaImage) {
    let canvas_width = canvas.width();
    let canvas_height = canvas.height();

    for (x, y, src) in tile.enumerate_pixels() {
        if x >= canvas_width || y >= canvas_height {
            continue;
        }
        // Fully transparent source, skip
        if src[3] == 0 {
            continue;
        }
        let dst = canvas.get_pixel_mut(x, y);
        *dst = blend_over(src, dst);
    }
}

/// Blend one source pixel over one destination pixel (Porter-Duff "source over").
///
/// A transparent source returns `dst` unchanged; an opaque source returns `src`.
pub fn blend_over(src: &Rgba<u8>, dst: &Rgba<u8>) -> Rgba<u8> {
    match src[3] {
        0 => return *dst,
        255 => return *src,
        _ => {}
    }

    let src_alpha = src[3] as f32 / 255.0;
    let dst_alpha = dst[3] as f32 / 255.0;

    // out_alpha = src_alpha + dst_alpha * (1 - src_alpha)
    let out_alpha = src_alpha + dst_alpha * (1.0 - src_alpha);
    if out_alpha == 0.0 {
        return Rgba([0, 0, 0, 0]);
    }

    // out_color = (src_color * src_alpha + dst_color * dst_alpha * (1 - src_alpha)) / out_alpha
    let composite = |s: u8, d: u8| -> u8 {
        let s = s as f32 / 255.0;
        let d = d as f32 / 255.0;
        let result = (s * src_alpha + d * dst_alpha * (1.0 - src_alpha)) / out_alpha;
        (result.clamp(0.0, 1.0) * 255.0).round() as u8
    };

    Rgba([
        composite(src[0], dst[0]),
        composite(src[1], dst[1]),
        composite(src[2], dst[2]),
        (out_alpha * 255.0).round() as u8,
    ])
}
