//! Session state-machine tests for the wand tracker.

use spell_vision::core_modules::path::Point;
use spell_vision::core_modules::tracker::{TrackerState, WandTracker};

fn point(x: f64, y: f64) -> Option<Point> {
    Some(Point::new(x, y))
}

#[test]
fn detection_while_idle_starts_a_session() {
    let mut tracker = WandTracker::new(5.0, 30);
    assert_eq!(tracker.state(), TrackerState::Idle);
    assert!(tracker.current_path().is_empty());

    assert!(tracker.advance(point(100.0, 100.0)).is_none());
    assert_eq!(tracker.state(), TrackerState::Tracking);
    assert_eq!(tracker.current_path().len(), 1);
}

#[test]
fn movement_above_threshold_is_recorded() {
    let mut tracker = WandTracker::new(5.0, 30);
    tracker.advance(point(100.0, 100.0));
    tracker.advance(point(110.0, 100.0));
    assert_eq!(tracker.current_path().len(), 2);
}

#[test]
fn jitter_below_threshold_is_discarded() {
    let mut tracker = WandTracker::new(5.0, 30);
    tracker.advance(point(100.0, 100.0));
    // 2px of sensor jitter: not recorded, and the comparison baseline stays
    // at the last *recorded* point.
    tracker.advance(point(102.0, 100.0));
    assert_eq!(tracker.current_path().len(), 1);

    // 4px from the recorded point, even though it moved again since the
    // discarded observation.
    tracker.advance(point(104.0, 100.0));
    assert_eq!(tracker.current_path().len(), 1);

    // 6px from the recorded point crosses the threshold.
    tracker.advance(point(106.0, 100.0));
    assert_eq!(tracker.current_path().len(), 2);
}

#[test]
fn track_loss_ends_the_session_and_emits_once() {
    let mut tracker = WandTracker::new(5.0, 30);
    tracker.advance(point(100.0, 100.0));
    tracker.advance(point(120.0, 100.0));
    tracker.advance(point(140.0, 100.0));

    let completed = tracker.advance(None).expect("session should complete");
    assert_eq!(completed.len(), 3);
    assert_eq!(tracker.state(), TrackerState::Idle);
    // The path is cleared the instant it is emitted.
    assert!(tracker.current_path().is_empty());

    // Further missed frames while idle are a no-op, never a re-emission.
    assert!(tracker.advance(None).is_none());
    assert!(tracker.advance(None).is_none());
}

#[test]
fn single_missed_frame_is_enough_to_end_a_session() {
    let mut tracker = WandTracker::new(5.0, 30);
    tracker.advance(point(100.0, 100.0));
    tracker.advance(point(150.0, 100.0));
    assert!(tracker.advance(None).is_some());

    // A blob on the very next frame starts a fresh session.
    tracker.advance(point(200.0, 100.0));
    assert_eq!(tracker.state(), TrackerState::Tracking);
    assert_eq!(tracker.current_path().len(), 1);
}

#[test]
fn path_window_evicts_oldest_point() {
    let mut tracker = WandTracker::new(5.0, 4);
    for i in 0..6 {
        tracker.advance(point(100.0 + i as f64 * 10.0, 100.0));
    }
    let path = tracker.current_path();
    // The session survives; only the oldest points fell out of the window.
    assert_eq!(path.len(), 4);
    assert_eq!(path[0].x, 120.0);
    assert_eq!(path[3].x, 150.0);
    assert_eq!(tracker.state(), TrackerState::Tracking);
}

#[test]
fn reset_discards_without_emitting() {
    let mut tracker = WandTracker::new(5.0, 30);
    tracker.advance(point(100.0, 100.0));
    tracker.advance(point(150.0, 100.0));

    tracker.reset();
    assert_eq!(tracker.state(), TrackerState::Idle);
    assert!(tracker.current_path().is_empty());
    // The abandoned session never surfaces, even on the next track loss.
    assert!(tracker.advance(None).is_none());
}

#[test]
fn state_and_path_presence_agree_across_a_session() {
    let mut tracker = WandTracker::new(5.0, 30);
    let observations = [
        None,
        point(10.0, 10.0),
        point(30.0, 10.0),
        None,
        None,
        point(50.0, 50.0),
        None,
    ];

    let mut emitted = 0;
    for obs in observations {
        if tracker.advance(obs).is_some() {
            emitted += 1;
        }
        // Invariant: a path exists iff the tracker is Tracking.
        match tracker.state() {
            TrackerState::Tracking => assert!(!tracker.current_path().is_empty()),
            TrackerState::Idle => assert!(tracker.current_path().is_empty()),
        }
    }
    // One completion per Tracking -> Idle transition: two sessions above.
    assert_eq!(emitted, 2);
}
