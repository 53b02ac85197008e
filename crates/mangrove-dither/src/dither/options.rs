//! Dithering options shared by all algorithms.

/// Configuration for one dither invocation.
///
/// Out-of-range values are clamped by the builders, never rejected.
///
/// # Example
///
/// ```
/// use mangrove_dither::DitherOptions;
///
/// let options = DitherOptions::new()
///     .intensity(0.8)
///     .random_threshold(0.4);
/// ```
#[derive(Debug, Clone)]
pub struct DitherOptions {
    /// Error/noise intensity in 0..=1.
    ///
    /// Scales the diffused quantization error (Floyd-Steinberg) or the noise
    /// contribution (random algorithms). At 0 every algorithm degenerates to
    /// a pure threshold of its input.
    pub intensity: f32,

    /// Noise amplitude for the random algorithms, in 0..=1.
    ///
    /// A full-scale draw spans `+-threshold * 255 / 2` around the input
    /// value before the intensity scale is applied. Ignored by
    /// Floyd-Steinberg.
    pub random_threshold: f32,
}

impl Default for DitherOptions {
    fn default() -> Self {
        Self {
            intensity: 1.0,
            random_threshold: 0.5,
        }
    }
}

impl DitherOptions {
    /// Create options with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the error/noise intensity, clamped to 0..=1.
    #[inline]
    pub fn intensity(mut self, intensity: f32) -> Self {
        self.intensity = intensity.clamp(0.0, 1.0);
        self
    }

    /// Set the random noise threshold, clamped to 0..=1.
    #[inline]
    pub fn random_threshold(mut self, threshold: f32) -> Self {
        self.random_threshold = threshold.clamp(0.0, 1.0);
        self
    }
}
