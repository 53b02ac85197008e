//! Per-channel random dithering with posterized color output.

use rand::Rng;

use crate::raster::Raster;

use super::{Dither, DitherOptions};

/// Channel step of the posterization ladder (9 levels: 0, 32, ..., 224, 255).
const LEVEL_STEP: f32 = 32.0;

/// Per-channel noise dithering.
///
/// Unlike [`RandomNoise`](super::RandomNoise) there is no luminance
/// conversion: R, G and B each receive an independent noise draw with the
/// same scaling, then quantize by rounding to the nearest multiple of 32.
/// The top level (256) clamps to 255, so output channels are always one of
/// {0, 32, 64, ..., 224, 255}. The result is posterized color, not
/// grayscale.
pub struct RandomRgb;

impl Dither for RandomRgb {
    fn dither(&self, source: &Raster, options: &DitherOptions) -> Raster {
        dither_with_rng(source, options, &mut rand::thread_rng())
    }
}

/// Deterministic variant driven by a caller-supplied RNG.
pub fn dither_with_rng<R: Rng>(source: &Raster, options: &DitherOptions, rng: &mut R) -> Raster {
    let mut data = Vec::with_capacity(source.data().len());

    for px in source.data().chunks(4) {
        for &channel in &px[..3] {
            let noise = (rng.gen::<f32>() - 0.5) * options.random_threshold * 255.0;
            let noisy = channel as f32 + noise * options.intensity;
            let quantized = (noisy / LEVEL_STEP).round() * LEVEL_STEP;
            data.push(quantized.clamp(0.0, 255.0) as u8);
        }
        data.push(255);
    }

    Raster::from_rgba(source.width(), source.height(), data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn is_valid_level(v: u8) -> bool {
        v == 255 || v % 32 == 0
    }

    #[test]
    fn test_channels_are_posterized_levels() {
        let noisy_source: Vec<u8> = (0..64)
            .flat_map(|i| [(i * 7) as u8, (i * 11) as u8, (i * 13) as u8, 255])
            .collect();
        let source = Raster::from_rgba(8, 8, noisy_source);
        let result = RandomRgb.dither(&source, &DitherOptions::new().random_threshold(1.0));

        for px in result.data().chunks(4) {
            for &v in &px[..3] {
                assert!(is_valid_level(v), "invalid posterization level: {v}");
            }
            assert_eq!(px[3], 255);
        }
    }

    #[test]
    fn test_zero_noise_rounds_to_nearest_level() {
        let source = Raster::from_rgba(
            2,
            1,
            vec![
                47, 48, 100, 255, //
                250, 16, 15, 255,
            ],
        );
        let result = RandomRgb.dither(&source, &DitherOptions::new().intensity(0.0));
        // 47 -> 32, 48 -> 64 (round half up), 100 -> 96
        assert_eq!(result.rgb_at(0, 0), [32, 64, 96]);
        // 250 -> 256 clamped to 255, 16 -> 32, 15 -> 0
        assert_eq!(result.rgb_at(1, 0), [255, 32, 0]);
    }

    #[test]
    fn test_preserves_color_cast() {
        // A strongly red source should stay predominantly red.
        let source = Raster::filled(8, 8, [220, 30, 30]);
        let opts = DitherOptions::new().random_threshold(0.3);
        let result = dither_with_rng(&source, &opts, &mut StdRng::seed_from_u64(3));
        let mut r_sum = 0u32;
        let mut g_sum = 0u32;
        for px in result.data().chunks(4) {
            r_sum += px[0] as u32;
            g_sum += px[1] as u32;
        }
        assert!(r_sum > g_sum * 3, "red cast lost: r={r_sum} g={g_sum}");
    }

    #[test]
    fn test_seeded_rng_reproduces() {
        let source = Raster::filled(4, 4, [128, 64, 192]);
        let opts = DitherOptions::new();
        let a = dither_with_rng(&source, &opts, &mut StdRng::seed_from_u64(11));
        let b = dither_with_rng(&source, &opts, &mut StdRng::seed_from_u64(11));
        assert_eq!(a.data(), b.data());
    }

    #[test]
    fn test_one_by_one_raster() {
        let source = Raster::filled(1, 1, [255, 0, 128]);
        let result = RandomRgb.dither(&source, &DitherOptions::new().intensity(0.0));
        assert_eq!(result.rgb_at(0, 0), [255, 0, 128]);
    }
}
