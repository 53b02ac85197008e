//! Source image loading.
//!
//! Decodes an uploaded byte buffer and bounds it before it reaches the
//! pipeline: a byte-size ceiling up front, then a proportional downscale so
//! the longest edge never exceeds `max_source_dim`. Decode completion is
//! the single asynchronous boundary of the system; everything downstream is
//! synchronous.

use mangrove_dither::Raster;

use crate::error::RenderError;
use crate::models::config::StudioConfig;

/// Decode an image file into a bounded source raster.
pub fn load_source(bytes: &[u8], config: &StudioConfig) -> Result<Raster, RenderError> {
    if bytes.len() > config.max_upload_bytes {
        return Err(RenderError::ImageTooLarge {
            size: bytes.len(),
            max: config.max_upload_bytes,
        });
    }

    let decoded =
        image::load_from_memory(bytes).map_err(|e| RenderError::Decode(e.to_string()))?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();

    let max = config.max_source_dim.max(1);
    if width <= max && height <= max {
        return Ok(Raster::from_rgba(width, height, rgba.into_raw()));
    }

    let ratio = (max as f32 / width as f32).min(max as f32 / height as f32);
    let new_width = ((width as f32 * ratio).floor() as u32).max(1);
    let new_height = ((height as f32 * ratio).floor() as u32).max(1);
    tracing::info!(
        from = format!("{width}x{height}"),
        to = format!("{new_width}x{new_height}"),
        "Downscaled source image"
    );

    let resized = image::imageops::resize(
        &rgba,
        new_width,
        new_height,
        image::imageops::FilterType::Triangle,
    );
    Ok(Raster::from_rgba(new_width, new_height, resized.into_raw()))
}
