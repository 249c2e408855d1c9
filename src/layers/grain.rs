use anyhow::Result;
use fast_image_resize as fir;
use image::{imageops, Rgba, RgbaImage};
use rand::Rng;

use crate::raster::resize_rgba;

/// Film-grain noise: uniform random cells generated at reduced resolution and
/// upscaled with nearest-neighbor sampling so the cells keep hard edges. Each
/// cell's alpha is uniform in `[0, 255 * amount)` over a black fill.
pub fn apply(canvas: &mut RgbaImage, amount: f32, size: f32, rng: &mut impl Rng) -> Result<()> {
    if amount <= 0.0 {
        return Ok(());
    }
    let (width, height) = canvas.dimensions();
    let cell = size.max(0.1);
    let noise_w = ((width as f32 / cell).round() as u32).max(1);
    let noise_h = ((height as f32 / cell).round() as u32).max(1);
    let ceiling = 255.0 * amount;

    let mut noise = RgbaImage::new(noise_w, noise_h);
    for pixel in noise.pixels_mut() {
        let alpha = (rng.random::<f32>() * ceiling) as u8;
        *pixel = Rgba([0, 0, 0, alpha]);
    }

    let full = resize_rgba(&noise, width, height, fir::ResizeAlg::Nearest)?;
    imageops::overlay(canvas, &full, 0, 0);
    Ok(())
}
