use image::{imageops, RgbaImage};

use crate::color::HexColor;
use crate::raster::{clip_alpha, rounded_rect_mask};

/// Border ring plus rounded-corner clipping.
///
/// The ring mask is an opaque rounded rectangle over the full canvas with an
/// inner rounded rectangle (inset by the border width) cut back to
/// transparent. A zero border width cuts nothing, so the layer degenerates to
/// a full fill. When the outer radius is positive the whole accumulated
/// canvas is clipped to the outer shape, removing earlier layer content from
/// the corner regions.
pub fn apply(canvas: &mut RgbaImage, border_px: u32, corner_radius: f32, color: HexColor) {
    let (width, height) = canvas.dimensions();
    let outer_radius = 0.5 * width.min(height) as f32 * corner_radius.clamp(0.0, 1.0);
    let outer = rounded_rect_mask(width, height, 0, outer_radius);
    let inner = (border_px > 0).then(|| {
        let inner_radius = (outer_radius - border_px as f32).max(0.0);
        rounded_rect_mask(width, height, border_px, inner_radius)
    });

    let mut layer = RgbaImage::new(width, height);
    for (x, y, pixel) in layer.enumerate_pixels_mut() {
        let in_ring = outer.get_pixel(x, y).0[0] != 0
            && inner
                .as_ref()
                .is_none_or(|mask| mask.get_pixel(x, y).0[0] == 0);
        if in_ring {
            *pixel = color.rgba(255);
        }
    }
    imageops::overlay(canvas, &layer, 0, 0);

    if outer_radius > 0.0 {
        clip_alpha(canvas, &outer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn zero_width_zero_radius_fills_the_canvas() {
        let mut canvas = RgbaImage::new(32, 32);
        apply(&mut canvas, 0, 0.0, HexColor([224, 224, 224]));
        assert!(canvas.pixels().all(|p| p.0 == [224, 224, 224, 255]));
    }

    #[test]
    fn square_ring_leaves_the_interior_clear() {
        let mut canvas = RgbaImage::new(32, 32);
        apply(&mut canvas, 4, 0.0, HexColor([200, 0, 0]));
        assert_eq!(canvas.get_pixel(0, 0).0, [200, 0, 0, 255]);
        assert_eq!(canvas.get_pixel(3, 16).0, [200, 0, 0, 255]);
        assert_eq!(canvas.get_pixel(16, 16).0[3], 0);
        assert_eq!(canvas.get_pixel(4, 16).0[3], 0);
    }

    #[test]
    fn rounded_corners_clip_earlier_content() {
        let mut canvas = RgbaImage::from_pixel(64, 64, Rgba([255, 255, 255, 255]));
        apply(&mut canvas, 4, 1.0, HexColor([10, 10, 10]));
        for (x, y) in [(0, 0), (63, 0), (0, 63), (63, 63)] {
            assert_eq!(canvas.get_pixel(x, y).0[3], 0, "corner ({x},{y})");
        }
        // non-border interior content survives
        assert_eq!(canvas.get_pixel(32, 32).0, [255, 255, 255, 255]);
    }

    #[test]
    fn zero_radius_applies_no_clipping() {
        let mut canvas = RgbaImage::from_pixel(32, 32, Rgba([9, 9, 9, 255]));
        apply(&mut canvas, 2, 0.0, HexColor([50, 60, 70]));
        assert_eq!(canvas.get_pixel(16, 16).0, [9, 9, 9, 255]);
        assert_eq!(canvas.get_pixel(0, 0).0, [50, 60, 70, 255]);
    }
}
