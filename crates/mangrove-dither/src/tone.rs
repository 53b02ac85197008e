//! Non-destructive brightness and contrast adjustment.

use crate::raster::Raster;

/// Apply brightness and contrast to a raster, returning a new buffer.
///
/// Contrast is applied first, centered on mid-gray, then the brightness
/// offset:
///
/// ```text
/// v' = clamp(128 + (v - 128) * ((100 + contrast) / 100) + brightness * 2.55, 0, 255)
/// ```
///
/// The order is an invariant of the pipeline. `brightness` and `contrast`
/// are both in -100..=100; alpha is copied through untouched. When both are
/// zero the result is a value-identical copy, never the input allocation,
/// since callers may hand the result onward for further processing.
pub fn adjust(raster: &Raster, brightness: f32, contrast: f32) -> Raster {
    if brightness == 0.0 && contrast == 0.0 {
        return raster.clone();
    }

    let brightness_offset = brightness * 2.55;
    let contrast_factor = (100.0 + contrast) / 100.0;

    let mut data = Vec::with_capacity(raster.data().len());
    for pixel in raster.data().chunks(4) {
        for &v in &pixel[..3] {
            let adjusted = 128.0 + (v as f32 - 128.0) * contrast_factor + brightness_offset;
            data.push(adjusted.clamp(0.0, 255.0) as u8);
        }
        data.push(pixel[3]);
    }
    Raster::from_rgba(raster.width(), raster.height(), data)
}
