// THEORY:
// The `tracker` module is the heart of the session layer. Its purpose is to
// add the concept of "memory" to the otherwise stateless per-frame blob
// observations: it decides when a spell cast starts, which observed positions
// belong to it, and when it ends.
//
// This module owns the one piece of cross-frame state in the whole pipeline.
//
// Key architectural principles:
// 1.  **Explicit State Machine**: The tracker is either `Idle` (no active
//     path) or `Tracking` (a path is accumulating). A path exists if and
//     only if the state is `Tracking`; the two can never disagree because
//     both live behind the same `advance` method.
// 2.  **Noise Filtering**: Sub-pixel jitter from the sensor would otherwise
//     inflate the traveled path length and wreck the straightness ratio
//     downstream. Movement below `min_movement` from the last *recorded*
//     point is discarded, not recorded.
// 3.  **Bounded Memory**: The path is a sliding window of at most
//     `max_path_points` entries. When full, the oldest point is evicted and
//     the session continues; the session is never reset by its own length.
// 4.  **Single-Miss Track Loss**: One frame without a blob ends the session.
//     Track loss is the user pulling the wand away, which is exactly the
//     gesture delimiter — a grace period would smear two casts into one.
// 5.  **Emit Exactly Once**: A completed path is handed out by value on the
//     Tracking -> Idle transition and the tracker's own copy is cleared, so
//     no path can ever be classified twice.

use crate::core_modules::blob_locator::Observation;
use crate::core_modules::path::Point;
use log::debug;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// The two phases of the gesture session state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerState {
    /// No active path; waiting for a blob to appear.
    Idle,
    /// A path is being accumulated from successive observations.
    Tracking,
}

/// Accumulates per-frame wand observations into discrete gesture sessions.
pub struct WandTracker {
    /// Minimum Euclidean movement (pixels) from the last recorded point for
    /// a new observation to be appended.
    min_movement: f64,
    /// Maximum number of points retained in the sliding path window.
    max_path_points: usize,
    path: VecDeque<Point>,
    state: TrackerState,
    session_started_at: Option<Instant>,
    last_session_duration: Duration,
}

impl WandTracker {
    pub fn new(min_movement: f64, max_path_points: usize) -> Self {
        Self {
            min_movement,
            max_path_points,
            path: VecDeque::with_capacity(max_path_points),
            state: TrackerState::Idle,
            session_started_at: None,
            last_session_duration: Duration::ZERO,
        }
    }

    /// Feeds one observation into the state machine.
    ///
    /// Returns a completed path exactly once, on the Tracking -> Idle
    /// transition with a non-empty path. All other cases return `None`.
    pub fn advance(&mut self, observation: Observation) -> Option<Vec<Point>> {
        match (self.state, observation) {
            (TrackerState::Idle, Some(point)) => {
                debug!("wand detected at ({:.1}, {:.1}) - session started", point.x, point.y);
                self.state = TrackerState::Tracking;
                self.session_started_at = Some(Instant::now());
                self.path.clear();
                self.path.push_back(point);
                None
            }
            (TrackerState::Tracking, Some(point)) => {
                // Jitter below min_movement is discarded, not recorded.
                let last = self.path.back().copied();
                if let Some(last) = last {
                    if last.distance_to(&point) < self.min_movement {
                        return None;
                    }
                }
                if self.path.len() >= self.max_path_points {
                    self.path.pop_front();
                }
                self.path.push_back(point);
                None
            }
            (TrackerState::Tracking, None) => {
                self.state = TrackerState::Idle;
                self.last_session_duration = self
                    .session_started_at
                    .take()
                    .map_or(Duration::ZERO, |started| started.elapsed());
                if self.path.is_empty() {
                    return None;
                }
                let completed: Vec<Point> = self.path.drain(..).collect();
                debug!("wand lost - session ended with {} points", completed.len());
                Some(completed)
            }
            (TrackerState::Idle, None) => None,
        }
    }

    pub fn state(&self) -> TrackerState {
        self.state
    }

    /// The path accumulated so far in the active session. Empty while idle.
    /// Collaborators (e.g. a live-view overlay) read this between frames.
    pub fn current_path(&self) -> Vec<Point> {
        self.path.iter().copied().collect()
    }

    /// How long the active session has been running, or, while idle, how
    /// long the most recently completed session ran.
    pub fn cast_duration(&self) -> Duration {
        self.session_started_at
            .map_or(self.last_session_duration, |started| started.elapsed())
    }

    /// Discards any in-progress session without emitting a path. Used on
    /// shutdown so a half-finished gesture never produces a partial event.
    pub fn reset(&mut self) {
        self.path.clear();
        self.state = TrackerState::Idle;
        self.session_started_at = None;
        self.last_session_duration = Duration::ZERO;
    }
}
