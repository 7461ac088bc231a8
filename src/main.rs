// Demo runner for the `spell_vision` engine.
//
// A real deployment feeds the pipeline from an IR camera; the camera driver
// is an external collaborator and not part of this crate. This binary stands
// a synthetic wand in for it — a bright dot swept across a dark frame — so
// the whole stack (frame slot, pipeline, cooldown, logging, shutdown) can be
// exercised end to end without hardware.

use anyhow::{Context, Result};
use log::info;
use spell_vision::frame_slot;
use spell_vision::{Config, Frame, Report, SpellPipeline};
use std::time::{Duration, Instant};

/// Synthesizes one frame with a bright wand-tip disc at `(cx, cy)`.
fn synthetic_frame(width: u32, height: u32, cx: f64, cy: f64) -> Frame {
    let mut pixels = vec![0u8; (width * height) as usize];
    let radius = 4.0;
    for y in 0..height {
        for x in 0..width {
            let dx = x as f64 - cx;
            let dy = y as f64 - cy;
            if (dx * dx + dy * dy).sqrt() <= radius {
                pixels[(y * width + x) as usize] = 255;
            }
        }
    }
    // Geometry is consistent by construction.
    Frame::new(width, height, pixels).expect("synthetic frame geometry")
}

#[tokio::main]
async fn main() -> Result<()> {
    // --- 1. Logging & Configuration ---
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config_path = std::env::args().nth(1).unwrap_or_else(|| "config.json".to_string());
    let config = Config::load(&config_path)
        .with_context(|| format!("loading configuration from {config_path}"))?;
    info!(
        "spell_vision starting: {}x{} @ {}fps, threshold {}",
        config.camera.width,
        config.camera.height,
        config.camera.framerate,
        config.tracking.brightness_threshold
    );

    // --- 2. Capture Task ---
    // Sweeps the synthetic wand left-to-right across the middle of the frame,
    // then lifts it for a beat, then repeats. Each sweep is one cast.
    let (publisher, mut receiver) = frame_slot::channel();
    let width = config.camera.width;
    let height = config.camera.height;
    let frame_interval = Duration::from_secs_f64(1.0 / config.camera.framerate as f64);

    let capture = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(frame_interval);
        let sweep_frames = 40u32;
        let rest_frames = 15u32;
        let mut tick = 0u32;
        loop {
            ticker.tick().await;
            let phase = tick % (sweep_frames + rest_frames);
            let published = if phase < sweep_frames {
                let progress = phase as f64 / sweep_frames as f64;
                let cx = 40.0 + progress * (width as f64 - 80.0);
                let frame = synthetic_frame(width, height, cx, height as f64 / 2.0)
                    .with_timestamp(Instant::now());
                publisher.publish(frame)
            } else {
                // Wand lifted: a dark frame is the normal "no blob" signal.
                publisher.publish(synthetic_frame(width, height, -100.0, -100.0))
            };
            if !published {
                break;
            }
            tick += 1;
        }
    });

    // --- 3. Processing Loop ---
    let mut pipeline = SpellPipeline::new(config.pipeline_config());
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("shutdown signal received");
                break;
            }
            maybe_frame = receiver.recv() => {
                let Some(frame) = maybe_frame else {
                    break;
                };
                if let Report::SpellDetected(event) = pipeline.process_frame(&frame, Instant::now()) {
                    info!(
                        "SPELL DETECTED: {} | points: {} | straightness: {:.2} | distance: {:.1}px",
                        event.spell,
                        event.features.point_count,
                        event.features.straightness,
                        event.features.net_distance
                    );
                }
            }
        }
    }

    // --- 4. Shutdown ---
    // An in-progress path is abandoned, never emitted as a partial spell.
    pipeline.reset();
    capture.abort();
    info!(
        "stopped: {} frames processed, {} spells detected, {} suppressed",
        pipeline.frames_processed(),
        pipeline.spells_detected(),
        pipeline.spells_suppressed()
    );
    Ok(())
}
