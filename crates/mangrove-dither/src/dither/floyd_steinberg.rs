//! Floyd-Steinberg error diffusion dithering.

use crate::raster::Raster;
use crate::sampler::luma_bt601;

use super::{grayscale_raster, Dither, DitherOptions, FLOYD_STEINBERG};

/// Floyd-Steinberg error diffusion.
///
/// Converts the source to a floating-point BT.601 luminance grid, scans it
/// row-major top-left to bottom-right, quantizes each pixel to {0, 255} at
/// threshold 128 and diffuses `(old - new) * intensity` to the not-yet-
/// visited neighbors:
///
/// ```text
///        X   7
///    3   5   1      (all over 16)
/// ```
///
/// Neighbors outside the raster are skipped; the skipped weight is not
/// redistributed, so error mass is lost at the right and bottom edges.
/// Output is grayscale (R=G=B), fully opaque, and deterministic: two calls
/// with the same input produce byte-identical rasters.
pub struct FloydSteinberg;

impl Dither for FloydSteinberg {
    fn dither(&self, source: &Raster, options: &DitherOptions) -> Raster {
        let w = source.width() as usize;
        let h = source.height() as usize;

        let mut luminance: Vec<f32> = source
            .data()
            .chunks(4)
            .map(|px| luma_bt601([px[0], px[1], px[2]]))
            .collect();

        let mut out = vec![0u8; w * h];
        let divisor = FLOYD_STEINBERG.divisor as f32;

        for y in 0..h {
            for x in 0..w {
                let idx = y * w + x;
                let old = luminance[idx];
                let new = if old < 128.0 { 0.0 } else { 255.0 };
                out[idx] = new as u8;

                let error = (old - new) * options.intensity;
                for &(dx, dy, weight) in FLOYD_STEINBERG.entries {
                    let nx = x as i32 + dx;
                    let ny = y as i32 + dy;
                    if nx >= 0 && (nx as usize) < w && (ny as usize) < h {
                        luminance[ny as usize * w + nx as usize] +=
                            error * weight as f32 / divisor;
                    }
                }
            }
        }

        grayscale_raster(source.width(), source.height(), &out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_is_binary_grayscale() {
        let gradient: Vec<u8> = (0..16)
            .flat_map(|i| {
                let v = (i * 17) as u8;
                [v, v, v, 255]
            })
            .collect();
        let source = Raster::from_rgba(4, 4, gradient);
        let result = FloydSteinberg.dither(&source, &DitherOptions::new());

        for px in result.data().chunks(4) {
            assert!(px[0] == 0 || px[0] == 255, "channel must be binary");
            assert_eq!(px[0], px[1]);
            assert_eq!(px[1], px[2]);
            assert_eq!(px[3], 255);
        }
    }

    #[test]
    fn test_checkerboard_passes_through() {
        // Black/white pixels sit exactly on the quantization targets, so no
        // error is ever produced and the pattern survives unchanged.
        let source = Raster::from_rgba(
            2,
            2,
            vec![
                0, 0, 0, 255, //
                255, 255, 255, 255, //
                0, 0, 0, 255, //
                255, 255, 255, 255,
            ],
        );
        let result = FloydSteinberg.dither(&source, &DitherOptions::new());
        assert_eq!(result.rgb_at(0, 0), [0, 0, 0]);
        assert_eq!(result.rgb_at(1, 0), [255, 255, 255]);
        assert_eq!(result.rgb_at(0, 1), [0, 0, 0]);
        assert_eq!(result.rgb_at(1, 1), [255, 255, 255]);
    }

    #[test]
    fn test_mid_gray_diffusion_trace() {
        // 2x2 of 128, intensity 1, hand-computed:
        //   (0,0): 128 -> 255, error -127; right gets -55.5625,
        //          below -39.6875, below-right -7.9375
        //   (1,0): 72.4375 -> 0, error diffuses to (0,1) and (1,1)
        //   (0,1): 101.89453 -> 0, 7/16 of it lands on (1,1)
        //   (1,1): 187.27808 -> 255
        let source = Raster::filled(2, 2, [128, 128, 128]);
        let result = FloydSteinberg.dither(&source, &DitherOptions::new());
        assert_eq!(result.rgb_at(0, 0), [255, 255, 255]);
        assert_eq!(result.rgb_at(1, 0), [0, 0, 0]);
        assert_eq!(result.rgb_at(0, 1), [0, 0, 0]);
        assert_eq!(result.rgb_at(1, 1), [255, 255, 255]);
    }

    #[test]
    fn test_zero_intensity_is_pure_threshold() {
        let source = Raster::from_rgba(
            2,
            1,
            vec![
                127, 127, 127, 255, //
                128, 128, 128, 255,
            ],
        );
        let result = FloydSteinberg.dither(&source, &DitherOptions::new().intensity(0.0));
        assert_eq!(result.rgb_at(0, 0), [0, 0, 0]);
        assert_eq!(result.rgb_at(1, 0), [255, 255, 255]);
    }

    #[test]
    fn test_deterministic_across_calls() {
        let gradient: Vec<u8> = (0..64)
            .flat_map(|i| {
                let v = (i * 4) as u8;
                [v, v, v, 255]
            })
            .collect();
        let source = Raster::from_rgba(8, 8, gradient);
        let opts = DitherOptions::new().intensity(0.9);
        let a = FloydSteinberg.dither(&source, &opts);
        let b = FloydSteinberg.dither(&source, &opts);
        assert_eq!(a.data(), b.data());
    }

    #[test]
    fn test_one_by_one_raster() {
        let source = Raster::filled(1, 1, [200, 200, 200]);
        let result = FloydSteinberg.dither(&source, &DitherOptions::new());
        assert_eq!(result.rgb_at(0, 0), [255, 255, 255]);
    }

    #[test]
    fn test_preserves_average_brightness() {
        // 100% propagation: the black/white mix tracks the input level.
        let source = Raster::filled(16, 16, [77, 77, 77]); // ~30%
        let result = FloydSteinberg.dither(&source, &DitherOptions::new());
        let white = result
            .data()
            .chunks(4)
            .filter(|px| px[0] == 255)
            .count() as f32;
        let ratio = white / 256.0;
        assert!(
            (ratio - 0.3).abs() < 0.1,
            "expected ~0.3 white ratio, got {ratio}"
        );
    }
}
