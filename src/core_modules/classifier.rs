// THEORY:
// The `classifier` module is the decision layer of the pipeline. It takes one
// completed wand path and answers a single question: which spell, if any, was
// just cast?
//
// Key architectural principles:
// 1.  **Closed Catalogue**: The recognizable spells form a small, closed set
//     of cardinal straight-line strokes. They are modeled as a plain enum
//     plus a fixed, ordered list of `SpellTemplate`s — adding a spell is a
//     data addition, not new code, as long as matching stays
//     axis/sign/straightness based.
// 2.  **Cheap Rejection First**: Paths that are too short (point count) or
//     barely moved (net displacement) are rejected before any feature work.
//     These pre-conditions also guarantee the straightness ratio's division
//     is well-defined.
// 3.  **First Match Wins**: Templates are tried in declaration order, so any
//     overlap between templates resolves deterministically. The cardinal
//     catalogue is mutually exclusive (axis + sign), but the contract holds
//     for stricter future templates too: declare the strictest first.
// 4.  **Pure Function**: Classification depends only on the path and the
//     catalogue. Classifying the same path twice gives the same answer,
//     which is what makes the layer trivially testable.

use crate::core_modules::path::{Axis, PathFeatures, Point};
use log::{debug, info};
use std::fmt;

/// The closed set of recognizable spells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Spell {
    HorizontalRight,
    HorizontalLeft,
    VerticalUp,
    VerticalDown,
}

impl Spell {
    /// Canonical human-facing spell name, as logged and dispatched to
    /// automation collaborators.
    pub fn name(&self) -> &'static str {
        match self {
            Spell::HorizontalRight => "Horizontal Line Right",
            Spell::HorizontalLeft => "Horizontal Line Left",
            Spell::VerticalUp => "Vertical Line Up",
            Spell::VerticalDown => "Vertical Line Down",
        }
    }
}

impl fmt::Display for Spell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One entry of the spell catalogue: a spell identity plus the geometric
/// requirements a path must meet to match it.
#[derive(Debug, Clone)]
pub struct SpellTemplate {
    pub spell: Spell,
    /// Required dominant axis of the path.
    pub axis: Axis,
    /// Required sign of the dominant displacement component. Image
    /// coordinates: +1 is right/down, -1 is left/up.
    pub direction: f64,
    /// Minimum straightness ratio for this template.
    pub min_straightness: f64,
    /// Minimum net displacement (pixels) for this template.
    pub min_distance: f64,
    /// Minimum recorded point count for this template.
    pub min_points: usize,
}

impl SpellTemplate {
    /// Builds the standard four-spell cardinal catalogue, all sharing the
    /// configured thresholds. Declaration order is the match order.
    pub fn cardinal_catalogue(
        min_straightness: f64,
        min_distance: f64,
        min_points: usize,
    ) -> Vec<SpellTemplate> {
        let entry = |spell, axis, direction| SpellTemplate {
            spell,
            axis,
            direction,
            min_straightness,
            min_distance,
            min_points,
        };
        vec![
            entry(Spell::HorizontalRight, Axis::Horizontal, 1.0),
            entry(Spell::HorizontalLeft, Axis::Horizontal, -1.0),
            entry(Spell::VerticalDown, Axis::Vertical, 1.0),
            entry(Spell::VerticalUp, Axis::Vertical, -1.0),
        ]
    }

    fn matches(&self, features: &PathFeatures) -> bool {
        features.dominant_axis == self.axis
            && features.direction == self.direction
            && features.straightness >= self.min_straightness
            && features.net_distance >= self.min_distance
            && features.point_count >= self.min_points
    }
}

/// A successful classification: the matched spell plus the features that
/// produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct SpellMatch {
    pub spell: Spell,
    pub features: PathFeatures,
}

/// Matches completed paths against the spell catalogue.
pub struct SpellClassifier {
    /// Gate thresholds applied before any template matching.
    min_points: usize,
    min_distance: f64,
    /// Ordered catalogue; first matching template wins.
    templates: Vec<SpellTemplate>,
}

impl SpellClassifier {
    pub fn new(min_points: usize, min_distance: f64, templates: Vec<SpellTemplate>) -> Self {
        Self {
            min_points,
            min_distance,
            templates,
        }
    }

    /// Classifies one completed path.
    ///
    /// Pure function of the path: rejection pre-conditions, then feature
    /// computation, then first-match template iteration. Every "no" outcome
    /// is an ordinary `None`, never an error.
    pub fn classify(&self, path: &[Point]) -> Option<SpellMatch> {
        if path.len() < self.min_points {
            debug!("path rejected: only {} points (need {})", path.len(), self.min_points);
            return None;
        }

        // A path past the min_points gate always has >= 2 points, but a path
        // of coincident points still has no features.
        let features = PathFeatures::from_path(path)?;

        if features.net_distance < self.min_distance {
            debug!(
                "path rejected: net movement {:.1}px below minimum {:.1}px",
                features.net_distance, self.min_distance
            );
            return None;
        }

        for template in &self.templates {
            if template.matches(&features) {
                info!(
                    "spell recognized: {} (straightness={:.2}, distance={:.1}px, points={})",
                    template.spell, features.straightness, features.net_distance, features.point_count
                );
                return Some(SpellMatch {
                    spell: template.spell,
                    features,
                });
            }
        }

        debug!(
            "path rejected: no template match (straightness={:.2}, axis={:?})",
            features.straightness, features.dominant_axis
        );
        None
    }

    pub fn templates(&self) -> &[SpellTemplate] {
        &self.templates
    }
}
