use image::{imageops, RgbaImage};

use crate::color::HexColor;

/// Solid color band at the canvas bottom with an optional linear fade above
/// it. The fade ramps from fully transparent at its top edge to fully opaque
/// where it meets the band.
pub fn apply(canvas: &mut RgbaImage, matte_ratio: f32, fade_ratio: f32, color: HexColor) {
    if matte_ratio <= 0.0 && fade_ratio <= 0.0 {
        return;
    }
    let (width, height) = canvas.dimensions();
    let matte_px = ((height as f32) * matte_ratio).round() as u32;
    let fade_px = ((height as f32) * fade_ratio).round() as u32;
    let matte_top = height.saturating_sub(matte_px);
    let fade_top = matte_top.saturating_sub(fade_px);

    let mut layer = RgbaImage::new(width, height);
    for y in fade_top..height {
        let alpha = if y >= matte_top {
            255
        } else {
            // rows count from the fade top; the bottom fade row meets the
            // band at full opacity
            let step = (y + 1 - fade_top) as f32 / fade_px.max(1) as f32;
            (step * 255.0).round().clamp(0.0, 255.0) as u8
        };
        for x in 0..width {
            layer.put_pixel(x, y, color.rgba(alpha));
        }
    }
    imageops::overlay(canvas, &layer, 0, 0);
}
