//! Mangrove - interactive dithering and halftone studio core.
//!
//! The library behind the studio UI: deterministic, parameterized
//! image-to-image transforms (error-diffusion and noise dithering, six
//! halftone pattern generators) with an LRU result cache, a debounced
//! command scheduler, and PNG import/export at the edges. Widget wiring,
//! drag-and-drop and theming live with the embedding application.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;

pub use error::RenderError;
pub use models::{preset, Mode, ParameterSet, StudioConfig, PRESET_NAMES};
pub use rendering::halftone::HalftonePattern;
pub use services::{Command, RenderOutput, RenderScheduler, RenderSession, ResultCache};

pub use mangrove_dither::{DitherAlgorithm, DitherOptions, Raster};
