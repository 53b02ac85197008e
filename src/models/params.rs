//! The complete configuration governing one transform invocation.

use mangrove_dither::{DitherAlgorithm, DitherOptions};
use serde::{Deserialize, Serialize};

use crate::rendering::halftone::HalftonePattern;

/// Which engine consumes the source raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    #[default]
    Dither,
    Halftone,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dither => "dither",
            Self::Halftone => "halftone",
        }
    }
}

/// Every knob of one transform invocation.
///
/// All fields have fixed valid ranges; [`clamped`](Self::clamped) folds any
/// out-of-range value back into range; parameters are never rejected.
/// Unknown algorithm or pattern names deserialize to the designated defaults
/// (Floyd-Steinberg / dots) for the same reason.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterSet {
    pub mode: Mode,

    /// Dither algorithm, used when `mode` is [`Mode::Dither`].
    #[serde(with = "algorithm_name")]
    pub dither_algorithm: DitherAlgorithm,

    /// Halftone pattern, used when `mode` is [`Mode::Halftone`].
    #[serde(with = "pattern_name")]
    pub halftone_pattern: HalftonePattern,

    /// Error/noise intensity, 0..=1.
    pub intensity: f32,

    /// Halftone dot size, or display pixel size in dither mode. 1..=20.
    pub dot_size: f32,

    /// Halftone grid density multiplier, 0.1..=2.0.
    pub density: f32,

    /// Noise amplitude for the random dither algorithms, 0..=1.
    pub random_threshold: f32,

    /// Brightness adjustment, -100..=100.
    pub brightness: f32,

    /// Contrast adjustment, -100..=100.
    pub contrast: f32,

    /// Rotation angle in degrees, -180..=180.
    pub angle: f32,

    /// Fill halftone shapes with the sampled color instead of black.
    pub color_mode: bool,

    /// Invert the brightness-to-size mapping.
    pub invert_mode: bool,

    /// Sample halftone cells by area average instead of nearest pixel.
    pub high_quality: bool,

    /// Requested output width for halftone renders.
    pub display_width: u32,

    /// Requested output height for halftone renders.
    pub display_height: u32,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            mode: Mode::Dither,
            dither_algorithm: DitherAlgorithm::FloydSteinberg,
            halftone_pattern: HalftonePattern::Dots,
            intensity: 1.0,
            dot_size: 8.0,
            density: 1.0,
            random_threshold: 0.5,
            brightness: 0.0,
            contrast: 0.0,
            angle: 0.0,
            color_mode: false,
            invert_mode: false,
            high_quality: false,
            display_width: 512,
            display_height: 512,
        }
    }
}

impl ParameterSet {
    /// Return a copy with every field folded into its valid range.
    ///
    /// Non-finite floats collapse to the low end of their range before
    /// clamping, so a NaN cannot leak into the engines or the fingerprint.
    pub fn clamped(&self) -> Self {
        Self {
            mode: self.mode,
            dither_algorithm: self.dither_algorithm,
            halftone_pattern: self.halftone_pattern,
            intensity: clamp_finite(self.intensity, 0.0, 1.0),
            dot_size: clamp_finite(self.dot_size, 1.0, 20.0),
            density: clamp_finite(self.density, 0.1, 2.0),
            random_threshold: clamp_finite(self.random_threshold, 0.0, 1.0),
            brightness: clamp_finite(self.brightness, -100.0, 100.0),
            contrast: clamp_finite(self.contrast, -100.0, 100.0),
            angle: clamp_finite(self.angle, -180.0, 180.0),
            color_mode: self.color_mode,
            invert_mode: self.invert_mode,
            high_quality: self.high_quality,
            display_width: self.display_width.max(1),
            display_height: self.display_height.max(1),
        }
    }

    /// The dither options slice of this parameter set.
    pub fn dither_options(&self) -> DitherOptions {
        DitherOptions::new()
            .intensity(self.intensity)
            .random_threshold(self.random_threshold)
    }

    /// Canonical cache key for this parameter set against a source raster.
    ///
    /// Every field plus the source dimensions, in fixed order, joined with
    /// `|`. No field serialization can contain the separator, so equal
    /// fingerprints imply equal configurations.
    pub fn fingerprint(&self, source_width: u32, source_height: u32) -> String {
        format!(
            "{}|{}|{}|{}|{}|{}|{}|{}|{}|{}|{}|{}|{}|{}x{}|{}x{}",
            self.mode.as_str(),
            self.dither_algorithm.as_str(),
            self.halftone_pattern.as_str(),
            self.intensity,
            self.dot_size,
            self.density,
            self.random_threshold,
            self.brightness,
            self.contrast,
            self.angle,
            self.color_mode,
            self.invert_mode,
            self.high_quality,
            source_width,
            source_height,
            self.display_width,
            self.display_height,
        )
    }
}

fn clamp_finite(value: f32, min: f32, max: f32) -> f32 {
    if value.is_finite() {
        value.clamp(min, max)
    } else {
        min
    }
}

/// Serde bridge for [`DitherAlgorithm`] names, applying the
/// reject-and-default policy on unknown tags.
mod algorithm_name {
    use mangrove_dither::DitherAlgorithm;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(algo: &DitherAlgorithm, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(algo.as_str())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DitherAlgorithm, D::Error> {
        let name = String::deserialize(d)?;
        Ok(DitherAlgorithm::from_name(&name))
    }
}

/// Serde bridge for [`HalftonePattern`] names with the same default policy.
mod pattern_name {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::rendering::halftone::HalftonePattern;

    pub fn serialize<S: Serializer>(pattern: &HalftonePattern, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(pattern.as_str())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<HalftonePattern, D::Error> {
        let name = String::deserialize(d)?;
        Ok(HalftonePattern::from_name(&name))
    }
}
