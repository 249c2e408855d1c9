//! Authoring aid marking the text area: semi-transparent red fill, solid red
//! outline, and corner-to-corner crosshairs. Drawn last so it is never
//! occluded; never part of delivered artwork.

use image::{Pixel, Rgba, RgbaImage};

const FILL: Rgba<u8> = Rgba([255, 0, 0, 80]);
const STROKE: Rgba<u8> = Rgba([255, 0, 0, 255]);
const STROKE_PX: i64 = 3;

/// Draw the guide box anchored bottom-center, its bottom edge `offset` pixels
/// above the canvas bottom. Portions falling outside the canvas are skipped.
pub fn apply(canvas: &mut RgbaImage, box_w: u32, box_h: u32, offset: u32) {
    if box_w == 0 || box_h == 0 {
        return;
    }
    let (width, height) = canvas.dimensions();
    let left = (width as i64 - box_w as i64) / 2;
    let bottom = height as i64 - offset as i64;
    let top = bottom - box_h as i64;
    let right = left + box_w as i64;

    for y in top..bottom {
        for x in left..right {
            let on_outline = x < left + STROKE_PX
                || x >= right - STROKE_PX
                || y < top + STROKE_PX
                || y >= bottom - STROKE_PX;
            let pixel = if on_outline { STROKE } else { FILL };
            blend_at(canvas, x, y, pixel);
        }
    }

    draw_line(canvas, (left, top), (right - 1, bottom - 1));
    draw_line(canvas, (right - 1, top), (left, bottom - 1));
}

/// Crosshair segment, stamped as a 3px-wide stroke.
fn draw_line(canvas: &mut RgbaImage, from: (i64, i64), to: (i64, i64)) {
    let dx = to.0 - from.0;
    let dy = to.1 - from.1;
    let steps = dx.abs().max(dy.abs());
    if steps == 0 {
        blend_at(canvas, from.0, from.1, STROKE);
        return;
    }
    for i in 0..=steps {
        let t = i as f64 / steps as f64;
        let x = from.0 + (dx as f64 * t).round() as i64;
        let y = from.1 + (dy as f64 * t).round() as i64;
        for oy in -(STROKE_PX / 2)..=STROKE_PX / 2 {
            for ox in -(STROKE_PX / 2)..=STROKE_PX / 2 {
                blend_at(canvas, x + ox, y + oy, STROKE);
            }
        }
    }
}

fn blend_at(canvas: &mut RgbaImage, x: i64, y: i64, pixel: Rgba<u8>) {
    if x < 0 || y < 0 || x >= canvas.width() as i64 || y >= canvas.height() as i64 {
        return;
    }
    canvas.get_pixel_mut(x as u32, y as u32).blend(&pixel);
}
