// THEORY:
// The `path` module holds the geometric vocabulary of the gesture layer:
// sub-pixel points, and the derived summary of a completed wand path.
//
// Key architectural principles:
// 1.  **Dumb Data Containers**: `Point` and `PathFeatures` carry data and
//     perform summary calculations on their own data. They hold no state
//     between frames and know nothing about tracking or templates.
// 2.  **Compute Once**: `PathFeatures` is derived exactly once from a
//     completed path and never mutated. The classifier, the logger, and any
//     downstream collaborator all read the same immutable summary.
// 3.  **Scale Invariance**: The straightness ratio (net displacement over
//     total traveled length) is the load-bearing feature. It is invariant to
//     stroke speed and stroke size, which is what lets one threshold serve
//     both a lazy flick and a full-arm swipe.

/// A 2D coordinate in frame pixel space. Floating point so that blob
/// centroids keep their sub-pixel precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// The axis along which a path's net displacement is largest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Read-only geometric summary of a completed wand path.
#[derive(Debug, Clone, PartialEq)]
pub struct PathFeatures {
    /// First recorded point of the gesture session.
    pub start: Point,
    /// Last recorded point of the gesture session.
    pub end: Point,
    /// Net displacement vector, `end - start`.
    pub displacement: (f64, f64),
    /// Straight-line magnitude of the net displacement.
    pub net_distance: f64,
    /// Sum of consecutive segment lengths along the whole path.
    pub total_length: f64,
    /// `net_distance / total_length`, in `[0, 1]`. 1.0 is a perfectly
    /// straight monotonic stroke; a path that loops back on itself trends
    /// toward 0.
    pub straightness: f64,
    /// Whichever of |dx|, |dy| is larger. |dx| wins ties, matching image
    /// coordinates where a pure diagonal reads as horizontal.
    pub dominant_axis: Axis,
    /// Sign of the dominant component: +1 for right/down (y grows downward
    /// in image coordinates), -1 for left/up.
    pub direction: f64,
    /// Number of recorded points in the path.
    pub point_count: usize,
}

impl PathFeatures {
    /// Derives the feature summary of a path, or `None` for degenerate paths
    /// (fewer than two points, or zero traveled length).
    pub fn from_path(path: &[Point]) -> Option<Self> {
        if path.len() < 2 {
            return None;
        }

        let start = path[0];
        let end = path[path.len() - 1];
        let dx = end.x - start.x;
        let dy = end.y - start.y;
        let net_distance = (dx * dx + dy * dy).sqrt();

        let total_length: f64 = path.windows(2).map(|w| w[0].distance_to(&w[1])).sum();
        if total_length == 0.0 {
            return None;
        }

        let (dominant_axis, direction) = if dx.abs() >= dy.abs() {
            (Axis::Horizontal, dx.signum())
        } else {
            (Axis::Vertical, dy.signum())
        };

        Some(Self {
            start,
            end,
            displacement: (dx, dy),
            net_distance,
            total_length,
            straightness: net_distance / total_length,
            dominant_axis,
            direction,
            point_count: path.len(),
        })
    }
}
