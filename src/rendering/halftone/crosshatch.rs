//! Crossed diagonal stroke pattern.

use mangrove_dither::Raster;
use tiny_skia::Pixmap;

use crate::error::RenderError;
use crate::models::params::ParameterSet;

use super::{canvas, cell_shade, grid_step};

/// Two crossed diagonals per cell. The thickness map (dot_size/3) and draw
/// threshold (0.1) both sit below the line pattern's, giving denser
/// coverage at the same brightness.
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
    let d = params.dot_size;

    let mut y = 0.0;
    while y < dh as f32 {
        let mut x = 0.0;
        while x < dw as f32 {
            let (shade, rgb) = cell_shade(source, params, x, y, step, ratio_x, ratio_y);
            let thickness = shade * d / 3.0;
            if thickness > 0.1 {
                let cy = y + thickness / 2.0;
                canvas::stroke_segment(
                    &mut pixmap,
                    x,
                    cy - d / 2.0,
                    x + d,
                    cy + d / 2.0,
                    thickness,
                    rgb,
                );
                canvas::stroke_segment(
                    &mut pixmap,
                    x,
                    cy + d / 2.0,
                    x + d,
                    cy - d / 2.0,
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
