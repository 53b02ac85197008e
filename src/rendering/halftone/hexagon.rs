//! Honeycomb hexagon pattern.

use mangrove_dither::Raster;
use tiny_skia::Pixmap;

use crate::error::RenderError;
use crate::models::params::ParameterSet;

use super::{canvas, cell_shade};

pub(super) fn render(
    source: &Raster,
    params: &ParameterSet,
    dw: u32,
    dh: u32,
) -> Result<Pixmap, RenderError> {
    let mut pixmap = canvas::white_pixmap(dw, dh)?;
    // Hexagons need wider spacing than the shared grid, and rows tighten to
    // 0.87 of the step with alternate rows shifted half a step so the cells
    // tessellate into a honeycomb.
    let step = (params.dot_size * params.density * 1.2).max(1.0);
    let row_step = step * 0.87;
    let ratio_x = source.width() as f32 / dw as f32;
    let ratio_y = source.height() as f32 / dh as f32;

    let mut row = 0u32;
    let mut y = 0.0;
    while y < dh as f32 {
        let offset = if row % 2 == 1 { step * 0.5 } else { 0.0 };
        let mut x = 0.0;
        while x < dw as f32 {
            let cell_x = x + offset;
            if cell_x < dw as f32 {
                let (shade, rgb) = cell_shade(source, params, cell_x, y, step, ratio_x, ratio_y);
                let size = shade * params.dot_size * 0.8;
                if size > 0.5 {
                    canvas::fill_hexagon(
                        &mut pixmap,
                        cell_x + size / 2.0,
                        y + size / 2.0,
                        size,
                        params.angle,
                        rgb,
                    );
                }
            }
            x += step;
        }
        y += row_step;
        row += 1;
    }

    Ok(pixmap)
}
