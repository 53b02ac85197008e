//! Shared raster builders for integration tests.
#![allow(dead_code)]

use mangrove::Raster;

/// Install a test-writer tracing subscriber once per test binary so engine
/// warnings show up in failing test output. Safe to call repeatedly.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Uniform raster of one gray level.
pub fn uniform_gray(size: u32, level: u8) -> Raster {
    Raster::filled(size, size, [level, level, level])
}

/// Horizontal black-to-white gradient.
pub fn gradient(width: u32, height: u32) -> Raster {
    let mut data = Vec::with_capacity((width * height * 4) as usize);
    for _ in 0..height {
        for x in 0..width {
            let v = (x * 255 / width.max(1)) as u8;
            data.extend_from_slice(&[v, v, v, 255]);
        }
    }
    Raster::from_rgba(width, height, data)
}

/// 2x2 black/white checkerboard column pattern from the spec scenario:
/// row-major [[0], [255], [0], [255]].
pub fn checkerboard_2x2() -> Raster {
    Raster::from_rgba(
        2,
        2,
        vec![
            0, 0, 0, 255, //
            255, 255, 255, 255, //
            0, 0, 0, 255, //
            255, 255, 255, 255,
        ],
    )
}
