// THEORY:
// The `pipeline` module is the final, top-level API for the spell recognition
// engine. It encapsulates the full stack — blob location, path tracking,
// classification, cooldown gating — into a single, easy-to-use interface: one
// frame in, one `Report` out.
//
// The pipeline is an explicit, constructed object. All cross-frame state
// (tracker session, cooldown deadline, counters) lives inside the instance,
// so multiple independent pipelines can run side by side without
// interference, which is also what makes the engine testable in-process.
//
// The host loop owns the clock: `process_frame` takes the current monotonic
// instant so that the per-frame path never reads the system clock itself and
// tests can replay exact timelines.

use crate::core_modules::blob_locator::blob_locator;
use crate::core_modules::classifier::{SpellClassifier, SpellTemplate};
use crate::core_modules::cooldown::CooldownGate;
use crate::core_modules::frame::Frame;
use crate::core_modules::tracker::WandTracker;
use log::{debug, info};
use std::time::{Duration, Instant, SystemTime};

// Re-export key data structures for the public API.
pub use crate::core_modules::classifier::{Spell, SpellMatch};
pub use crate::core_modules::path::{Axis, PathFeatures, Point};
pub use crate::core_modules::tracker::TrackerState;

/// How often the pipeline logs a cumulative status line, in frames.
/// 900 frames is 30 seconds at the nominal 30 fps capture rate.
const STATUS_LOG_INTERVAL: u64 = 900;

/// Configuration for the SpellPipeline, allowing for tunable behavior.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Minimum brightness (0-255) for a pixel to count as wand reflection.
    pub brightness_threshold: u8,
    /// Minimum movement in pixels for a new point to be recorded.
    pub min_movement: f64,
    /// Maximum number of points retained in the path's sliding window.
    pub max_path_points: usize,
    /// Minimum recorded points for a path to be classified.
    pub min_points: usize,
    /// Minimum straightness ratio (0-1) for a stroke to match.
    pub min_straightness: f64,
    /// Minimum net displacement in pixels for a stroke to match.
    pub min_distance: f64,
    /// Interval during which further spells are suppressed after one is
    /// accepted.
    pub cooldown: Duration,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            brightness_threshold: 200,
            min_movement: 5.0,
            max_path_points: 30,
            min_points: 8,
            min_straightness: 0.6,
            min_distance: 30.0,
            cooldown: Duration::from_secs(1),
        }
    }
}

/// A classified, gate-approved spell cast.
#[derive(Debug, Clone)]
pub struct SpellEvent {
    pub spell: Spell,
    /// The geometric summary of the path that produced this spell.
    pub features: PathFeatures,
    /// Wall-clock detection time, for logs and downstream collaborators.
    pub detected_at: SystemTime,
}

/// The primary output of the pipeline for a single frame.
#[derive(Debug, Clone)]
pub enum Report {
    NoSpell,
    SpellDetected(SpellEvent),
}

/// The main, top-level struct for the spell recognition engine.
pub struct SpellPipeline {
    config: PipelineConfig,
    tracker: WandTracker,
    classifier: SpellClassifier,
    gate: CooldownGate,
    frames_processed: u64,
    spells_detected: u64,
}

impl SpellPipeline {
    pub fn new(config: PipelineConfig) -> Self {
        let tracker = WandTracker::new(config.min_movement, config.max_path_points);
        let templates = SpellTemplate::cardinal_catalogue(
            config.min_straightness,
            config.min_distance,
            config.min_points,
        );
        let classifier = SpellClassifier::new(config.min_points, config.min_distance, templates);
        let gate = CooldownGate::new(config.cooldown);
        Self {
            config,
            tracker,
            classifier,
            gate,
            frames_processed: 0,
            spells_detected: 0,
        }
    }

    /// Processes one frame and reports whether a spell completed on it.
    ///
    /// `now` is the host loop's monotonic clock reading for this frame; it
    /// only feeds the cooldown comparison.
    pub fn process_frame(&mut self, frame: &Frame, now: Instant) -> Report {
        self.frames_processed += 1;
        if self.frames_processed % STATUS_LOG_INTERVAL == 0 {
            info!(
                "status: {} frames processed, {} spells detected, {} suppressed",
                self.frames_processed,
                self.spells_detected,
                self.gate.suppressed_count()
            );
        }

        // Stage 1: Detection.
        let observation = blob_locator::locate(frame, self.config.brightness_threshold);

        // Stage 2: Session tracking.
        let Some(path) = self.tracker.advance(observation) else {
            return Report::NoSpell;
        };
        debug!(
            "session completed: {} points over {:.2}s",
            path.len(),
            self.tracker.cast_duration().as_secs_f64()
        );

        // Stage 3: Classification.
        let Some(matched) = self.classifier.classify(&path) else {
            return Report::NoSpell;
        };

        // Stage 4: Cooldown gating.
        if !self.gate.admit(now) {
            return Report::NoSpell;
        }

        self.spells_detected += 1;
        Report::SpellDetected(SpellEvent {
            spell: matched.spell,
            features: matched.features,
            detected_at: SystemTime::now(),
        })
    }

    /// The path accumulated so far in the active session, for live-view
    /// overlay collaborators. Empty while no session is active.
    pub fn current_path(&self) -> Vec<Point> {
        self.tracker.current_path()
    }

    pub fn tracker_state(&self) -> TrackerState {
        self.tracker.state()
    }

    pub fn frames_processed(&self) -> u64 {
        self.frames_processed
    }

    pub fn spells_detected(&self) -> u64 {
        self.spells_detected
    }

    pub fn spells_suppressed(&self) -> u64 {
        self.gate.suppressed_count()
    }

    /// Abandons any in-progress session without emitting an event. Called on
    /// shutdown so a half-drawn gesture never becomes a partial spell.
    pub fn reset(&mut self) {
        self.tracker.reset();
    }
}
