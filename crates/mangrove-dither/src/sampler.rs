//! Pixel sampling and luminance weightings.
//!
//! Pure functions over a [`Raster`]: nearest-pixel lookup for fast sampling,
//! cell averaging for the high-quality path, and the two perceptual
//! luminance weightings used by the engines.
//!
//! Dither quantization uses the BT.601 weights; the halftone size maps use
//! the BT.709 weights. The two engines intentionally disagree; changing
//! either set changes that engine's output.

use crate::raster::Raster;

/// Nearest-pixel sample: clamps the coordinate into bounds, truncates to the
/// lower integer pixel and returns its RGB.
pub fn sample_nearest(raster: &Raster, x: f32, y: f32) -> [u8; 3] {
    let px = (x.floor() as i64).clamp(0, raster.width() as i64 - 1) as u32;
    let py = (y.floor() as i64).clamp(0, raster.height() as i64 - 1) as u32;
    raster.rgb_at(px, py)
}

/// Average of all pixels inside `[x, x+w) x [y, y+h)`, clamped to raster
/// bounds. Returns black if the clamped rectangle is empty.
pub fn sample_cell_average(raster: &Raster, x: f32, y: f32, w: f32, h: f32) -> [u8; 3] {
    let x0 = (x.floor() as i64).clamp(0, raster.width() as i64) as u32;
    let y0 = (y.floor() as i64).clamp(0, raster.height() as i64) as u32;
    let x1 = ((x + w).floor() as i64).clamp(0, raster.width() as i64) as u32;
    let y1 = ((y + h).floor() as i64).clamp(0, raster.height() as i64) as u32;

    let mut r = 0u64;
    let mut g = 0u64;
    let mut b = 0u64;
    let mut count = 0u64;
    for py in y0..y1 {
        for px in x0..x1 {
            let rgb = raster.rgb_at(px, py);
            r += rgb[0] as u64;
            g += rgb[1] as u64;
            b += rgb[2] as u64;
            count += 1;
        }
    }
    if count == 0 {
        return [0, 0, 0];
    }
    [
        (r / count) as u8,
        (g / count) as u8,
        (b / count) as u8,
    ]
}

/// BT.601 luminance in 0..=255 space. Used by the dither engine.
#[inline]
pub fn luma_bt601(rgb: [u8; 3]) -> f32 {
    0.299 * rgb[0] as f32 + 0.587 * rgb[1] as f32 + 0.114 * rgb[2] as f32
}

/// BT.709 luminance in 0..=255 space. Used by the halftone size maps.
#[inline]
pub fn luma_bt709(rgb: [u8; 3]) -> f32 {
    0.2126 * rgb[0] as f32 + 0.7152 * rgb[1] as f32 + 0.0722 * rgb[2] as f32
}
