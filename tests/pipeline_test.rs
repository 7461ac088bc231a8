//! End-to-end pipeline tests: synthetic frames in, spell reports out, with
//! the cooldown timeline driven by injected instants.

use spell_vision::{Frame, PipelineConfig, Report, Spell, SpellPipeline};
use std::time::{Duration, Instant};

/// Builds a frame with a bright wand-tip disc at `(cx, cy)`, mirroring how a
/// saturated IR reflection shows up on the sensor.
fn frame_with_spot(cx: i64, cy: i64) -> Frame {
    let (width, height) = (640u32, 480u32);
    let mut pixels = vec![0u8; (width * height) as usize];
    let radius = 5i64;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            let x = cx + dx;
            let y = cy + dy;
            if x >= 0 && x < width as i64 && y >= 0 && y < height as i64 && dx * dx + dy * dy <= radius * radius {
                pixels[(y * width as i64 + x) as usize] = 255;
            }
        }
    }
    Frame::new(width, height, pixels).unwrap()
}

fn dark_frame() -> Frame {
    Frame::new(640, 480, vec![0u8; 640 * 480]).unwrap()
}

fn test_config() -> PipelineConfig {
    PipelineConfig {
        min_points: 5,
        ..PipelineConfig::default()
    }
}

/// Sweeps the spot horizontally and ends with a dark frame, returning the
/// report of the final (session-ending) frame.
fn run_sweep(pipeline: &mut SpellPipeline, now: Instant) -> Report {
    for i in 0..8 {
        let report = pipeline.process_frame(&frame_with_spot(100 + i * 40, 240), now);
        assert!(matches!(report, Report::NoSpell));
    }
    pipeline.process_frame(&dark_frame(), now)
}

#[test]
fn horizontal_sweep_is_detected_end_to_end() {
    let mut pipeline = SpellPipeline::new(test_config());
    let report = run_sweep(&mut pipeline, Instant::now());

    let Report::SpellDetected(event) = report else {
        panic!("expected a spell, got {report:?}");
    };
    assert_eq!(event.spell, Spell::HorizontalRight);
    assert_eq!(event.features.point_count, 8);
    assert!(event.features.straightness > 0.99);
    assert_eq!(pipeline.spells_detected(), 1);
}

#[test]
fn dark_frames_never_produce_events() {
    let mut pipeline = SpellPipeline::new(test_config());
    for _ in 0..50 {
        assert!(matches!(
            pipeline.process_frame(&dark_frame(), Instant::now()),
            Report::NoSpell
        ));
    }
    assert_eq!(pipeline.frames_processed(), 50);
    assert_eq!(pipeline.spells_detected(), 0);
}

#[test]
fn cooldown_suppresses_the_return_stroke() {
    // Accept at t0, suppress a second complete gesture half a cooldown
    // later, accept the third once the window has passed.
    let mut pipeline = SpellPipeline::new(test_config());
    let t0 = Instant::now();

    assert!(matches!(run_sweep(&mut pipeline, t0), Report::SpellDetected(_)));

    let suppressed = run_sweep(&mut pipeline, t0 + Duration::from_millis(500));
    assert!(matches!(suppressed, Report::NoSpell));
    assert_eq!(pipeline.spells_suppressed(), 1);

    let accepted = run_sweep(&mut pipeline, t0 + Duration::from_millis(1100));
    assert!(matches!(accepted, Report::SpellDetected(_)));
    assert_eq!(pipeline.spells_detected(), 2);
}

#[test]
fn event_at_exact_cooldown_boundary_passes() {
    let mut pipeline = SpellPipeline::new(test_config());
    let t0 = Instant::now();

    assert!(matches!(run_sweep(&mut pipeline, t0), Report::SpellDetected(_)));
    let at_boundary = run_sweep(&mut pipeline, t0 + Duration::from_secs(1));
    assert!(matches!(at_boundary, Report::SpellDetected(_)));
}

#[test]
fn short_flick_yields_no_event() {
    let mut pipeline = SpellPipeline::new(test_config());
    let now = Instant::now();
    // Two positions then gone: below the point-count gate.
    pipeline.process_frame(&frame_with_spot(100, 240), now);
    pipeline.process_frame(&frame_with_spot(140, 240), now);
    let report = pipeline.process_frame(&dark_frame(), now);
    assert!(matches!(report, Report::NoSpell));
}

#[test]
fn independent_pipelines_do_not_interfere() {
    // Two pipelines over the same timeline: the second's cooldown state is
    // its own, so both accept their first gesture.
    let t0 = Instant::now();
    let mut a = SpellPipeline::new(test_config());
    let mut b = SpellPipeline::new(test_config());

    assert!(matches!(run_sweep(&mut a, t0), Report::SpellDetected(_)));
    assert!(matches!(run_sweep(&mut b, t0), Report::SpellDetected(_)));
}

#[test]
fn live_path_is_visible_during_a_session_only() {
    let mut pipeline = SpellPipeline::new(test_config());
    let now = Instant::now();

    assert!(pipeline.current_path().is_empty());
    pipeline.process_frame(&frame_with_spot(100, 240), now);
    pipeline.process_frame(&frame_with_spot(150, 240), now);
    assert_eq!(pipeline.current_path().len(), 2);

    pipeline.process_frame(&dark_frame(), now);
    assert!(pipeline.current_path().is_empty());
}
