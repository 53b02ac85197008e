//! End-to-end pipeline tests: session, scheduler, cache and export working
//! together the way the studio drives them.

mod common;

use std::time::{Duration, Instant};

use mangrove::services::exporter;
use mangrove::{
    preset, Command, DitherAlgorithm, HalftonePattern, Mode, ParameterSet, RenderScheduler,
    RenderSession, StudioConfig,
};
use pretty_assertions::assert_eq;

use common::{checkerboard_2x2, gradient, uniform_gray};

#[test]
fn floyd_steinberg_checkerboard_matches_hand_computation() {
    common::init_tracing();
    // Black and white land exactly on the quantization targets, so the
    // kernel never produces error and the input survives byte-for-byte.
    let mut session = RenderSession::new(StudioConfig::default());
    session.load_source(checkerboard_2x2());

    let params = ParameterSet {
        mode: Mode::Dither,
        dither_algorithm: DitherAlgorithm::FloydSteinberg,
        intensity: 1.0,
        ..Default::default()
    };
    let out = session.render(&params).unwrap();
    assert_eq!(out.raster.data(), checkerboard_2x2().data());
}

#[test]
fn dither_output_is_binary_after_tone_adjustment() {
    let mut session = RenderSession::new(StudioConfig::default());
    session.load_source(gradient(32, 32));

    let params = ParameterSet {
        brightness: 20.0,
        contrast: 35.0,
        intensity: 0.9,
        ..Default::default()
    };
    let out = session.render(&params).unwrap();
    for px in out.raster.data().chunks(4) {
        assert!(px[0] == 0 || px[0] == 255);
        assert_eq!(px[0], px[1]);
        assert_eq!(px[1], px[2]);
    }
}

#[test]
fn random_rgb_respects_posterization_levels() {
    let mut session = RenderSession::new(StudioConfig::default());
    session.load_source(gradient(16, 16));

    let params = ParameterSet {
        dither_algorithm: DitherAlgorithm::RandomRgb,
        random_threshold: 1.0,
        ..Default::default()
    };
    let out = session.render(&params).unwrap();
    for px in out.raster.data().chunks(4) {
        for &v in &px[..3] {
            assert!(v == 255 || v % 32 == 0, "invalid level {v}");
        }
    }
}

#[test]
fn cache_round_trip_and_clear_on_new_source() {
    let mut session = RenderSession::new(StudioConfig {
        cache_capacity: 2,
        ..Default::default()
    });
    session.load_source(uniform_gray(8, 128));

    let a = ParameterSet::default();
    let b = ParameterSet {
        intensity: 0.5,
        ..Default::default()
    };
    let c = ParameterSet {
        intensity: 0.25,
        ..Default::default()
    };

    // put(A), put(B), get(A), put(C): B is the eviction victim.
    session.render(&a).unwrap();
    session.render(&b).unwrap();
    assert!(session.render(&a).unwrap().cache_hit);
    session.render(&c).unwrap();

    assert!(session.render(&a).unwrap().cache_hit);
    assert!(session.render(&c).unwrap().cache_hit);
    // A fresh source invalidates everything, even at equal dimensions.
    session.load_source(uniform_gray(8, 10));
    assert!(!session.render(&a).unwrap().cache_hit);
}

#[test]
fn preset_applies_atomically_and_renders() {
    let mut session = RenderSession::new(StudioConfig::default());
    session.load_source(uniform_gray(16, 128));

    let params = preset("comic-book").unwrap();
    assert_eq!(params.mode, Mode::Halftone);
    assert_eq!(params.halftone_pattern, HalftonePattern::Dots);
    assert_eq!(params.dot_size, 6.0);
    assert_eq!(params.density, 1.2);

    let out = session.render(&params).unwrap();
    assert_eq!(out.raster.width(), params.display_width);
    assert_eq!(out.raster.height(), params.display_height);
}

#[test]
fn scheduler_coalesces_a_drag_and_serves_cache_on_repeat() {
    let t0 = Instant::now();
    let mut scheduler = RenderScheduler::new(StudioConfig::default());
    scheduler.submit(Command::SourceLoaded(uniform_gray(8, 128)), t0);

    // Drag: many requests, the last one wins.
    for i in 0..10u64 {
        let params = ParameterSet {
            contrast: i as f32,
            ..Default::default()
        };
        scheduler.submit(
            Command::RenderRequested(params),
            t0 + Duration::from_millis(20 * i),
        );
    }

    let mut rendered = Vec::new();
    for ms in (0..2000).step_by(25) {
        if let Some(out) = scheduler.tick(t0 + Duration::from_millis(ms)) {
            rendered.push(out.unwrap());
        }
    }
    assert_eq!(rendered.len(), 1);
    assert!(!rendered[0].cache_hit);

    // Re-requesting the final parameters is a cache hit.
    let t1 = t0 + Duration::from_secs(10);
    scheduler.submit(
        Command::RenderRequested(ParameterSet {
            contrast: 9.0,
            ..Default::default()
        }),
        t1,
    );
    let out = scheduler.tick(t1 + Duration::from_millis(500)).unwrap();
    assert!(out.unwrap().cache_hit);
}

#[test]
fn export_names_and_encodes_the_result() {
    use chrono::TimeZone;

    let mut session = RenderSession::new(StudioConfig::default());
    session.load_source(uniform_gray(8, 60));
    let params = ParameterSet::default();
    let out = session.render(&params).unwrap();

    let ts = chrono::Utc.with_ymd_and_hms(2026, 8, 6, 9, 0, 0).unwrap();
    let name = exporter::export_filename(&params, ts);
    assert_eq!(name, "dither_floyd-steinberg_100pct_8px_2026-08-06T09-00-00.png");

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(name);
    exporter::export_to_file(&out.raster, &path).unwrap();
    assert!(path.exists());
}

#[test]
fn unknown_names_fall_back_to_defaults_end_to_end() {
    let yaml = r#"
mode: dither
dither_algorithm: atkinson
halftone_pattern: triangles
"#;
    let params: ParameterSet = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(params.dither_algorithm, DitherAlgorithm::FloydSteinberg);
    assert_eq!(params.halftone_pattern, HalftonePattern::Dots);

    let mut session = RenderSession::new(StudioConfig::default());
    session.load_source(uniform_gray(4, 128));
    assert!(session.render(&params).is_ok());
}
