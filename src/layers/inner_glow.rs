use anyhow::Result;
use fast_image_resize as fir;
use image::{imageops, RgbaImage};

use crate::color::HexColor;
use crate::raster::resize_rgba;

/// Linear downscale factor for the glow mask. Blurred masks stay smooth
/// through a Catmull-Rom upscale, so the Gaussian pass runs on a fraction of
/// the canvas pixels.
const MASK_SCALE: u32 = 4;

/// Soft glow hugging the canvas edges. The layer is opaque along the border
/// and fades toward a transparent interior rectangle inset by 1.5x the blur
/// radius per side; the blur radius itself scales with the canvas and the
/// configured strength (floor of one pixel).
pub fn apply(canvas: &mut RgbaImage, strength: f32, color: HexColor) -> Result<()> {
    if strength <= 0.0 {
        return Ok(());
    }
    let (width, height) = canvas.dimensions();
    let radius = (0.2 * width.min(height) as f32 * strength).max(1.0);
    let inset = 1.5 * radius;

    let low_w = (width / MASK_SCALE).max(1);
    let low_h = (height / MASK_SCALE).max(1);
    let inset_low = (inset / MASK_SCALE as f32).round() as u32;
    let sigma_low = (radius / MASK_SCALE as f32).max(0.25);

    let mut layer = RgbaImage::from_pixel(low_w, low_h, color.rgba(255));
    if 2 * inset_low < low_w && 2 * inset_low < low_h {
        for y in inset_low..low_h - inset_low {
            for x in inset_low..low_w - inset_low {
                layer.get_pixel_mut(x, y).0[3] = 0;
            }
        }
    }
    let layer = imageops::blur(&layer, sigma_low);

    let full = resize_rgba(
        &layer,
        width,
        height,
        fir::ResizeAlg::Convolution(fir::FilterType::CatmullRom),
    )?;
    imageops::overlay(canvas, &full, 0, 0);
    Ok(())
}
