//! Dithering algorithms.
//!
//! Three interchangeable algorithms convert a continuous-tone raster into a
//! quantized raster under a shared [`DitherOptions`] parameter set:
//!
//! - **Floyd-Steinberg**: error diffusion, deterministic, binary grayscale
//! - **Random**: independent scalar noise per pixel, binary grayscale
//! - **Random RGB**: independent noise per channel, posterized color
//!
//! All algorithms implement the [`Dither`] trait; [`DitherAlgorithm`] is the
//! tag used for dispatch and configuration.

mod floyd_steinberg;
mod kernel;
mod options;
pub mod random;
pub mod random_rgb;

pub use floyd_steinberg::FloydSteinberg;
pub use kernel::*;
pub use options::DitherOptions;
pub use random::RandomNoise;
pub use random_rgb::RandomRgb;

use crate::raster::Raster;

/// Trait for dithering algorithms.
///
/// Implementors convert a continuous-tone raster into a quantized raster of
/// the same dimensions. The source is never mutated.
pub trait Dither {
    /// Dither a raster, returning a new raster of identical dimensions.
    fn dither(&self, source: &Raster, options: &DitherOptions) -> Raster;
}

/// Dither algorithm selection.
///
/// Resolved once at configuration time; unknown names fall back to the
/// default rather than failing, so a stale or misspelled configuration
/// still renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DitherAlgorithm {
    /// Floyd-Steinberg error diffusion (the designated default).
    #[default]
    FloydSteinberg,
    /// Independent scalar noise per pixel.
    Random,
    /// Independent noise per color channel, posterized output.
    RandomRgb,
}

impl DitherAlgorithm {
    /// Resolve an algorithm name, defaulting to Floyd-Steinberg for any
    /// unknown tag.
    pub fn from_name(name: &str) -> Self {
        match name {
            "floyd-steinberg" => Self::FloydSteinberg,
            "random" => Self::Random,
            "random-rgb" => Self::RandomRgb,
            _ => Self::default(),
        }
    }

    /// Stable name used in fingerprints, filenames and serialized presets.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FloydSteinberg => "floyd-steinberg",
            Self::Random => "random",
            Self::RandomRgb => "random-rgb",
        }
    }

    /// Run the selected algorithm.
    pub fn render(&self, source: &Raster, options: &DitherOptions) -> Raster {
        match self {
            Self::FloydSteinberg => FloydSteinberg.dither(source, options),
            Self::Random => RandomNoise.dither(source, options),
            Self::RandomRgb => RandomRgb.dither(source, options),
        }
    }
}

/// Expand a per-pixel gray buffer into an opaque RGBA raster.
pub(crate) fn grayscale_raster(width: u32, height: u32, gray: &[u8]) -> Raster {
    let mut data = Vec::with_capacity(gray.len() * 4);
    for &v in gray {
        data.extend_from_slice(&[v, v, v, 255]);
    }
    Raster::from_rgba(width, height, data)
}
