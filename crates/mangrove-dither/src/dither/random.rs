//! Random (noise threshold) dithering.

use rand::Rng;

use crate::raster::Raster;
use crate::sampler::luma_bt601;

use super::{grayscale_raster, Dither, DitherOptions};

/// Scalar-noise dithering.
///
/// Each pixel is perturbed by an independent uniform noise draw scaled by
/// `random_threshold` and `intensity`, then quantized to {0, 255} at
/// threshold 128:
///
/// ```text
/// noise = (uniform() - 0.5) * random_threshold * 255
/// out   = (luma + noise * intensity) < 128 ? 0 : 255
/// ```
///
/// There is deliberately no spatial correlation and no error diffusion;
/// the grain is the effect. Output is non-deterministic between calls but
/// always binary grayscale.
pub struct RandomNoise;

impl Dither for RandomNoise {
    fn dither(&self, source: &Raster, options: &DitherOptions) -> Raster {
        dither_with_rng(source, options, &mut rand::thread_rng())
    }
}

/// Deterministic variant driven by a caller-supplied RNG.
pub fn dither_with_rng<R: Rng>(source: &Raster, options: &DitherOptions, rng: &mut R) -> Raster {
    let w = source.width() as usize;
    let h = source.height() as usize;
    let mut out = Vec::with_capacity(w * h);

    for px in source.data().chunks(4) {
        let luma = luma_bt601([px[0], px[1], px[2]]);
        let noise = (rng.gen::<f32>() - 0.5) * options.random_threshold * 255.0;
        let noisy = luma + noise * options.intensity;
        out.push(if noisy < 128.0 { 0 } else { 255 });
    }

    grayscale_raster(source.width(), source.height(), &out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_output_is_binary_grayscale() {
        let source = Raster::filled(8, 8, [128, 128, 128]);
        let result = RandomNoise.dither(&source, &DitherOptions::new());
        for px in result.data().chunks(4) {
            assert!(px[0] == 0 || px[0] == 255);
            assert_eq!(px[0], px[1]);
            assert_eq!(px[1], px[2]);
            assert_eq!(px[3], 255);
        }
    }

    #[test]
    fn test_zero_noise_is_pure_threshold() {
        let source = Raster::from_rgba(
            2,
            1,
            vec![
                40, 40, 40, 255, //
                220, 220, 220, 255,
            ],
        );
        // Either zeroed intensity or zeroed threshold removes the noise term.
        for opts in [
            DitherOptions::new().intensity(0.0),
            DitherOptions::new().random_threshold(0.0),
        ] {
            let result = RandomNoise.dither(&source, &opts);
            assert_eq!(result.rgb_at(0, 0), [0, 0, 0]);
            assert_eq!(result.rgb_at(1, 0), [255, 255, 255]);
        }
    }

    #[test]
    fn test_seeded_rng_reproduces() {
        let source = Raster::filled(8, 8, [128, 128, 128]);
        let opts = DitherOptions::new();
        let a = dither_with_rng(&source, &opts, &mut StdRng::seed_from_u64(7));
        let b = dither_with_rng(&source, &opts, &mut StdRng::seed_from_u64(7));
        assert_eq!(a.data(), b.data());
    }

    #[test]
    fn test_mid_gray_produces_grain() {
        let source = Raster::filled(16, 16, [128, 128, 128]);
        let opts = DitherOptions::new().random_threshold(1.0);
        let result = dither_with_rng(&source, &opts, &mut StdRng::seed_from_u64(1));
        let black = result.data().chunks(4).filter(|px| px[0] == 0).count();
        assert!(black > 0 && black < 256, "mid-gray should split both ways");
    }

    #[test]
    fn test_one_by_one_raster() {
        let source = Raster::filled(1, 1, [0, 0, 0]);
        let result = RandomNoise.dither(&source, &DitherOptions::new().random_threshold(0.0));
        assert_eq!(result.rgb_at(0, 0), [0, 0, 0]);
    }
}
