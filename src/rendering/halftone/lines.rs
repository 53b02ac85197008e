//! Horizontal line pattern.

use mangrove_dither::Raster;
use tiny_skia::Pixmap;

use crate::error::RenderError;
use crate::models::params::ParameterSet;

use super::{canvas, cell_shade, grid_step};

/// Stroke thickness stays in (0, dot_size/2]; cells below 0.2 px of
/// thickness draw nothing.
pub(super) fn render(
    source: &Raster,
    params: &ParameterSet,
    dw: u32,
    dh: u32,
) -> Result<Pixmap, RenderError> {
    let mut pixmap = canvas::white_pixmap(dw, dh)?;
    let step = grid_step(params);
    let ratio_x = source.width() as f32 / dw as f32;
    let ratio_y = source.height() as f32 / dh as f32;

    let mut y = 0.0;
    while y < dh as f32 {
        let mut x = 0.0;
        while x < dw as f32 {
            let (shade, rgb) = cell_shade(source, params, x, y, step, ratio_x, ratio_y);
            let thickness = shade * params.dot_size * 0.5;
            if thickness > 0.2 {
                canvas::stroke_segment(
                    &mut pixmap,
                    x,
                    y,
                    x + params.dot_size,
                    y,
                    thickness,
                    rgb,
                );
            }
            x += step;
        }
        y += step;
    }

    Ok(pixmap)
}
