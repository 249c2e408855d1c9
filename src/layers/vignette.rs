use anyhow::Result;
use fast_image_resize as fir;
use image::{imageops, RgbaImage};

use crate::color::HexColor;
use crate::raster::resize_rgba;

/// Linear downscale factor for the radial mask. The mask is smooth, so it can
/// be computed small and upscaled with a Catmull-Rom convolution without
/// visible banding.
const MASK_SCALE: u32 = 4;

/// Radial coloring strongest at the canvas edges and corners. The distance
/// field uses per-axis normalized coordinates: 0 at the center, 1 at the edge
/// midpoints, sqrt(2) at the corners, clipped to [0, 1].
pub fn apply(canvas: &mut RgbaImage, strength: f32, color: HexColor) -> Result<()> {
    if strength <= 0.0 {
        return Ok(());
    }
    let (width, height) = canvas.dimensions();
    let low_w = (width / MASK_SCALE).max(1);
    let low_h = (height / MASK_SCALE).max(1);

    let center_x = (low_w as f32 - 1.0) * 0.5;
    let center_y = (low_h as f32 - 1.0) * 0.5;
    let half_w = (low_w as f32) * 0.5;
    let half_h = (low_h as f32) * 0.5;

    let mut layer = RgbaImage::new(low_w, low_h);
    for (x, y, pixel) in layer.enumerate_pixels_mut() {
        let nx = (x as f32 - center_x) / half_w;
        let ny = (y as f32 - center_y) / half_h;
        let dist = (nx * nx + ny * ny).sqrt().clamp(0.0, 1.0);
        let alpha = (dist * strength * 255.0).round() as u8;
        *pixel = color.rgba(alpha);
    }

    let full = resize_rgba(
        &layer,
        width,
        height,
        fir::ResizeAlg::Convolution(fir::FilterType::CatmullRom),
    )?;
    imageops::overlay(canvas, &full, 0, 0);
    Ok(())
}
