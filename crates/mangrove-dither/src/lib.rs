//! mangrove-dither: the pixel core of the Mangrove studio.
//!
//! This crate holds everything that touches raw pixels without needing a
//! drawing surface: the [`Raster`] buffer type, nearest/cell-average
//! sampling with the two perceptual luminance weightings, non-destructive
//! tone adjustment, and the three dithering algorithms.
//!
//! # Quick Start
//!
//! ```
//! use mangrove_dither::{DitherAlgorithm, DitherOptions, Raster};
//!
//! let source = Raster::filled(4, 4, [128, 128, 128]);
//! let options = DitherOptions::new().intensity(0.8);
//! let result = DitherAlgorithm::FloydSteinberg.render(&source, &options);
//!
//! assert_eq!(result.width(), 4);
//! assert_eq!(result.height(), 4);
//! ```
//!
//! # Discipline
//!
//! Rasters are immutable once created: every transform allocates its output
//! and leaves the input untouched. The higher-level pipeline relies on this
//! to cache results by parameter fingerprint without copy hazards.

pub mod dither;
pub mod raster;
pub mod resize;
pub mod sampler;
pub mod tone;


pub use dither::{Dither, DitherAlgorithm, DitherOptions, FloydSteinberg, RandomNoise, RandomRgb};
pub use raster::Raster;
pub use resize::resize_nearest;
