use anyhow::{Context, Result};
use fast_image_resize as fir;
use image::{GrayImage, RgbaImage};

/// Resize an RGBA buffer with the given algorithm. Callers pick
/// `Convolution(CatmullRom)` for smooth upscales and `Nearest` where hard
/// cell edges must survive (grain).
pub fn resize_rgba(
    source: &RgbaImage,
    target_w: u32,
    target_h: u32,
    alg: fir::ResizeAlg,
) -> Result<RgbaImage> {
    if target_w == 0 || target_h == 0 {
        anyhow::bail!("resize dimensions must be positive");
    }
    if source.width() == target_w && source.height() == target_h {
        return Ok(source.clone());
    }

    let src_view = fir::images::ImageRef::new(
        source.width(),
        source.height(),
        source.as_raw(),
        fir::PixelType::U8x4,
    )
    .context("failed to create source view for layer resize")?;
    let mut dst_image = fir::images::Image::new(target_w, target_h, fir::PixelType::U8x4);
    let options = fir::ResizeOptions::new().resize_alg(alg);
    let mut resizer = fir::Resizer::new();
    resizer
        .resize(&src_view, &mut dst_image, Some(&options))
        .context("layer resize failed")?;
    let buffer = dst_image.into_vec();
    RgbaImage::from_raw(target_w, target_h, buffer)
        .ok_or_else(|| anyhow::anyhow!("failed to construct resized RGBA image"))
}

/// Binary coverage mask for a rounded rectangle inset by `inset` pixels on
/// every side. `radius` is clamped to half the rect's smaller dimension; a
/// radius of zero degenerates to a plain rectangle. Pixels are tested at
/// their centers, so the mask has hard edges.
pub fn rounded_rect_mask(width: u32, height: u32, inset: u32, radius: f32) -> GrayImage {
    let mut mask = GrayImage::new(width, height);
    let x0 = inset as f32;
    let y0 = inset as f32;
    let x1 = width as f32 - inset as f32;
    let y1 = height as f32 - inset as f32;
    if x1 <= x0 || y1 <= y0 {
        return mask;
    }
    let r = radius.max(0.0).min((x1 - x0) * 0.5).min((y1 - y0) * 0.5);
    for (x, y, pixel) in mask.enumerate_pixels_mut() {
        let px = x as f32 + 0.5;
        let py = y as f32 + 0.5;
        if px < x0 || px >= x1 || py < y0 || py >= y1 {
            continue;
        }
        let dx = if px < x0 + r {
            x0 + r - px
        } else if px > x1 - r {
            px - (x1 - r)
        } else {
            0.0
        };
        let dy = if py < y0 + r {
            y0 + r - py
        } else if py > y1 - r {
            py - (y1 - r)
        } else {
            0.0
        };
        if dx * dx + dy * dy <= r * r {
            pixel.0[0] = 255;
        }
    }
    mask
}

/// Multiply the canvas alpha channel by a coverage mask, removing content
/// outside the masked shape. Mask dimensions must match the canvas.
pub fn clip_alpha(canvas: &mut RgbaImage, mask: &GrayImage) {
    debug_assert_eq!(canvas.dimensions(), mask.dimensions());
    for (x, y, pixel) in canvas.enumerate_pixels_mut() {
        let coverage = mask.get_pixel(x, y).0[0] as u32;
        let alpha = pixel.0[3] as u32;
        pixel.0[3] = ((alpha * coverage + 127) / 255) as u8;
    }
}
