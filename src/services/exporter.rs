//! PNG export.
//!
//! Serializes a rendered raster to PNG and generates download filenames
//! embedding the active mode, algorithm or pattern, key parameters and a
//! timestamp. The timestamp is caller-supplied so filename generation stays
//! a pure function.

use std::io::Cursor;
use std::path::Path;

use chrono::{DateTime, Utc};
use mangrove_dither::Raster;

use crate::error::RenderError;
use crate::models::params::{Mode, ParameterSet};

/// Generate an export filename for the given parameters.
///
/// Dither: `dither_<algorithm>_<intensity>pct_<px>px_<timestamp>.png`
/// Halftone: `halftone_<pattern>_<size>px_<timestamp>.png`
pub fn export_filename(params: &ParameterSet, timestamp: DateTime<Utc>) -> String {
    let ts = timestamp.format("%Y-%m-%dT%H-%M-%S");
    match params.mode {
        Mode::Dither => format!(
            "dither_{}_{}pct_{}px_{}.png",
            params.dither_algorithm.as_str(),
            (params.intensity * 100.0).round() as u32,
            params.dot_size as u32,
            ts,
        ),
        Mode::Halftone => format!(
            "halftone_{}_{}px_{}.png",
            params.halftone_pattern.as_str(),
            params.dot_size as u32,
            ts,
        ),
    }
}

/// Encode a raster as an RGBA PNG.
///
/// Fast compression, no filtering: exports are interactive, so encode speed
/// wins over byte count.
pub fn encode_png(raster: &Raster) -> Result<Vec<u8>, RenderError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, raster.width(), raster.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        encoder.set_filter(png::FilterType::NoFilter);
        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(raster.data())
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

/// Encode a raster and write it to disk.
pub fn export_to_file(raster: &Raster, path: &Path) -> Result<(), RenderError> {
    let bytes = encode_png(raster)?;
    std::fs::write(path, bytes)?;
    Ok(())
}
