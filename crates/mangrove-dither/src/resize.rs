//! Nearest-neighbor resampling.
//!
//! Used for fallback renders where the unprocessed source must be shown at
//! the requested display size. Quality-sensitive downscaling (the upload
//! path) lives with the decoder, not here.

use crate::raster::Raster;
use crate::sampler::sample_nearest;

/// Resample a raster to new dimensions with nearest-neighbor lookup.
///
/// Each destination pixel reads the source pixel at the proportional
/// coordinate. Degenerate target dimensions are floored at 1x1.
pub fn resize_nearest(raster: &Raster, width: u32, height: u32) -> Raster {
    let width = width.max(1);
    let height = height.max(1);
    let ratio_x = raster.width() as f32 / width as f32;
    let ratio_y = raster.height() as f32 / height as f32;

    let mut data = Vec::with_capacity((width as usize) * (height as usize) * 4);
    for y in 0..height {
        for x in 0..width {
            let rgb = sample_nearest(raster, x as f32 * ratio_x, y as f32 * ratio_y);
            data.extend_from_slice(&[rgb[0], rgb[1], rgb[2], 255]);
        }
    }
    Raster::from_rgba(width, height, data)
}
