//! Named parameter presets.
//!
//! A preset is a fixed [`ParameterSet`] snapshot applied atomically: the
//! caller swaps its whole parameter set rather than mutating fields one by
//! one, so a preset can never be half-applied.

use mangrove_dither::DitherAlgorithm;

use crate::rendering::halftone::HalftonePattern;

use super::params::{Mode, ParameterSet};

/// All preset names, dither presets first.
pub const PRESET_NAMES: &[&str] = &[
    "photo-standard",
    "photo-contrast",
    "illustration",
    "pixel-art",
    "monochrome",
    "comic-book",
    "newspaper",
    "vintage-print",
    "screen-print",
    "cmyk-simulation",
    "pop-art",
];

/// Look up a preset snapshot by name.
pub fn preset(name: &str) -> Option<ParameterSet> {
    let base = ParameterSet::default();
    let params = match name {
        // Dither presets
        "photo-standard" => ParameterSet {
            mode: Mode::Dither,
            dither_algorithm: DitherAlgorithm::FloydSteinberg,
            intensity: 0.8,
            dot_size: 1.0,
            brightness: 5.0,
            contrast: 10.0,
            random_threshold: 0.5,
            ..base
        },
        "photo-contrast" => ParameterSet {
            mode: Mode::Dither,
            dither_algorithm: DitherAlgorithm::FloydSteinberg,
            intensity: 1.0,
            dot_size: 1.0,
            brightness: 10.0,
            contrast: 25.0,
            random_threshold: 0.5,
            ..base
        },
        "illustration" => ParameterSet {
            mode: Mode::Dither,
            dither_algorithm: DitherAlgorithm::FloydSteinberg,
            intensity: 0.9,
            dot_size: 1.0,
            contrast: 15.0,
            random_threshold: 0.5,
            ..base
        },
        "pixel-art" => ParameterSet {
            mode: Mode::Dither,
            dither_algorithm: DitherAlgorithm::Random,
            intensity: 0.7,
            dot_size: 2.0,
            contrast: 20.0,
            random_threshold: 0.4,
            ..base
        },
        "monochrome" => ParameterSet {
            mode: Mode::Dither,
            dither_algorithm: DitherAlgorithm::FloydSteinberg,
            intensity: 1.0,
            dot_size: 1.0,
            contrast: 30.0,
            random_threshold: 0.5,
            ..base
        },

        // Halftone presets
        "comic-book" => ParameterSet {
            mode: Mode::Halftone,
            halftone_pattern: HalftonePattern::Dots,
            dot_size: 6.0,
            density: 1.2,
            contrast: 20.0,
            brightness: 10.0,
            ..base
        },
        "newspaper" => ParameterSet {
            mode: Mode::Halftone,
            halftone_pattern: HalftonePattern::Dots,
            dot_size: 3.0,
            density: 1.5,
            contrast: 10.0,
            ..base
        },
        "vintage-print" => ParameterSet {
            mode: Mode::Halftone,
            halftone_pattern: HalftonePattern::Diamond,
            dot_size: 10.0,
            density: 0.8,
            contrast: 15.0,
            brightness: 5.0,
            ..base
        },
        "screen-print" => ParameterSet {
            mode: Mode::Halftone,
            halftone_pattern: HalftonePattern::Square,
            dot_size: 12.0,
            density: 0.6,
            contrast: 25.0,
            brightness: -5.0,
            ..base
        },
        "cmyk-simulation" => ParameterSet {
            mode: Mode::Halftone,
            halftone_pattern: HalftonePattern::Dots,
            dot_size: 4.0,
            density: 1.3,
            color_mode: true,
            ..base
        },
        "pop-art" => ParameterSet {
            mode: Mode::Halftone,
            halftone_pattern: HalftonePattern::Dots,
            dot_size: 8.0,
            density: 1.0,
            contrast: 40.0,
            brightness: 20.0,
            color_mode: true,
            ..base
        },

        _ => return None,
    };
    Some(params)
}
