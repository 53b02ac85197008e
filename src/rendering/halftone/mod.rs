//! Halftone pattern generators.
//!
//! Six interchangeable generators convert a continuous-tone raster into a
//! vector-styled rendering at the requested display size. All six share one
//! cell procedure: step a grid over the display plane, map each cell back
//! into source space, sample a color, and turn its luminance into a shape
//! size. Bright cells shrink below the draw threshold and stay empty; that
//! sparseness is how white areas stay white.
//!
//! Rotation is handled two ways, deliberately: dots, lines and crosshatch
//! rotate the finished canvas around its center as a post-process, while
//! diamond, square and hexagon rotate each shape in place (diamond adds a
//! fixed 45 degree offset).

mod canvas;
mod crosshatch;
mod diamond;
mod dots;
mod hexagon;
mod lines;
mod square;

use mangrove_dither::sampler::{luma_bt709, sample_cell_average, sample_nearest};
use mangrove_dither::Raster;

use crate::error::RenderError;
use crate::models::params::ParameterSet;

/// Halftone pattern selection.
///
/// Resolved once at configuration time; unknown names fall back to the
/// default rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HalftonePattern {
    /// Circular dots (classic newspaper screen, the designated default).
    #[default]
    Dots,
    /// Horizontal strokes of varying thickness.
    Lines,
    /// Crossed diagonal strokes.
    Crosshatch,
    /// Squares rotated 45 degrees.
    Diamond,
    /// Axis-aligned squares.
    Square,
    /// Tessellating honeycomb hexagons.
    Hexagon,
}

impl HalftonePattern {
    /// Resolve a pattern name, defaulting to dots for any unknown tag.
    pub fn from_name(name: &str) -> Self {
        match name {
            "dots" => Self::Dots,
            "lines" => Self::Lines,
            "crosshatch" => Self::Crosshatch,
            "diamond" => Self::Diamond,
            "square" => Self::Square,
            "hexagon" => Self::Hexagon,
            _ => Self::default(),
        }
    }

    /// Stable name used in fingerprints, filenames and serialized presets.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dots => "dots",
            Self::Lines => "lines",
            Self::Crosshatch => "crosshatch",
            Self::Diamond => "diamond",
            Self::Square => "square",
            Self::Hexagon => "hexagon",
        }
    }
}

/// Render the selected halftone pattern at the display size requested in
/// `params`. The engine resamples from source space, so source and display
/// dimensions are independent.
pub fn render(source: &Raster, params: &ParameterSet) -> Result<Raster, RenderError> {
    let (dw, dh) = (params.display_width, params.display_height);
    if dw == 0 || dh == 0 {
        return Err(RenderError::UnsupportedDimensions {
            width: dw,
            height: dh,
        });
    }

    let pixmap = match params.halftone_pattern {
        HalftonePattern::Dots => dots::render(source, params, dw, dh)?,
        HalftonePattern::Lines => lines::render(source, params, dw, dh)?,
        HalftonePattern::Crosshatch => crosshatch::render(source, params, dw, dh)?,
        HalftonePattern::Diamond => diamond::render(source, params, dw, dh)?,
        HalftonePattern::Square => square::render(source, params, dw, dh)?,
        HalftonePattern::Hexagon => hexagon::render(source, params, dw, dh)?,
    };

    // Whole-canvas rotation applies to the patterns that draw unrotated
    // shapes; the others rotated per shape above.
    let pixmap = match params.halftone_pattern {
        HalftonePattern::Dots | HalftonePattern::Lines | HalftonePattern::Crosshatch
            if params.angle != 0.0 =>
        {
            canvas::rotate_about_center(pixmap, params.angle)?
        }
        _ => pixmap,
    };

    Ok(canvas::into_raster(pixmap))
}

/// Grid spacing in display pixels, floored at one pixel so extreme
/// parameter combinations cannot degenerate into sub-pixel cells.
pub(crate) fn grid_step(params: &ParameterSet) -> f32 {
    (params.dot_size * params.density).max(1.0)
}

/// Sample one grid cell and derive its shade and fill color.
///
/// `(x, y)` is the cell origin in display space; `ratio_x`/`ratio_y` map
/// display coordinates back into source space. The returned shade is in
/// 0..=1: the brightness-to-size value after the invert flip and the gamma
/// contrast remap.
pub(crate) fn cell_shade(
    source: &Raster,
    params: &ParameterSet,
    x: f32,
    y: f32,
    step: f32,
    ratio_x: f32,
    ratio_y: f32,
) -> (f32, [u8; 3]) {
    let sx = (x * ratio_x).floor();
    let sy = (y * ratio_y).floor();

    let sample = if params.high_quality {
        let cell_w = (step * ratio_x).floor().max(1.0);
        let cell_h = (step * ratio_y).floor().max(1.0);
        sample_cell_average(source, sx, sy, cell_w, cell_h)
    } else {
        sample_nearest(source, sx + step * ratio_x * 0.5, sy + step * ratio_y * 0.5)
    };

    let luma = (luma_bt709(sample) / 255.0).clamp(0.0, 1.0);
    let mut shade = if params.invert_mode { luma } else { 1.0 - luma };

    if params.contrast != 0.0 {
        let gamma = (params.contrast.abs() / 100.0).max(1e-4);
        shade = shade.powf(1.0 / gamma);
    }

    let rgb = if params.color_mode {
        let offset = params.brightness / 100.0 * 255.0;
        [
            (sample[0] as f32 + offset).clamp(0.0, 255.0) as u8,
            (sample[1] as f32 + offset).clamp(0.0, 255.0) as u8,
            (sample[2] as f32 + offset).clamp(0.0, 255.0) as u8,
        ]
    } else {
        [0, 0, 0]
    };

    (shade, rgb)
}
