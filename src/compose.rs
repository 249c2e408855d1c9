use anyhow::Result;
use image::RgbaImage;
use rand::Rng;
use tracing::debug;

use crate::config::OverlayOptions;
use crate::layers;

/// Compose a poster or background overlay from a declarative options record.
///
/// Stages run in a fixed order and each stage draws over everything before
/// it: vignette, matte/gradient, inner glow, grain, border (which also clips
/// the accumulated canvas to the rounded-corner shape), then the debug guide.
/// Inputs are sanitized, never rejected; the only failures that propagate are
/// resource-level ones from the resize engine.
pub fn compose(options: &OverlayOptions, rng: &mut impl Rng) -> Result<RgbaImage> {
    let opts = options.clone().normalized();
    let (width, height) = opts.overlay_type.canvas_size();
    let mut canvas = RgbaImage::new(width, height);

    if opts.vignette_strength > 0.0 {
        debug!(strength = opts.vignette_strength, "applying vignette");
        layers::vignette::apply(&mut canvas, opts.vignette_strength, opts.vignette_color)?;
    }
    if opts.matte_height_ratio > 0.0 || opts.fade_height_ratio > 0.0 {
        debug!(
            matte = opts.matte_height_ratio,
            fade = opts.fade_height_ratio,
            "applying matte gradient"
        );
        layers::matte::apply(
            &mut canvas,
            opts.matte_height_ratio,
            opts.fade_height_ratio,
            opts.gradient_color,
        );
    }
    if opts.inner_glow_strength > 0.0 {
        debug!(strength = opts.inner_glow_strength, "applying inner glow");
        layers::inner_glow::apply(&mut canvas, opts.inner_glow_strength, opts.inner_glow_color)?;
    }
    if opts.grain_amount > 0.0 {
        debug!(
            amount = opts.grain_amount,
            size = opts.grain_size,
            "applying grain"
        );
        layers::grain::apply(&mut canvas, opts.grain_amount, opts.grain_size, rng)?;
    }
    if opts.border_enabled {
        debug!(
            border_px = opts.border_px,
            corner_radius = opts.corner_radius,
            color = %opts.border_color,
            "applying border"
        );
        layers::border::apply(
            &mut canvas,
            opts.border_px,
            opts.corner_radius,
            opts.border_color,
        );
    }
    if opts.show_text_area {
        debug!(
            w = opts.text_box_w,
            h = opts.text_box_h,
            offset = opts.text_box_offset,
            "drawing text area guide"
        );
        layers::guide::apply(
            &mut canvas,
            opts.text_box_w,
            opts.text_box_h,
            opts.text_box_offset,
        );
    }

    Ok(canvas)
}
