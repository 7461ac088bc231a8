//! Configuration loading for the spell vision engine.
//!
//! Settings come from a JSON file, with every field defaulting to the values
//! the system ships with, and can be overridden per-field through
//! `SPELL_VISION_*` environment variables. Loading never fails on a missing
//! file (defaults apply); it does fail on unparseable JSON or out-of-range
//! values, because silently running with a half-applied config is worse than
//! refusing to start.

use crate::error::{Error, Result};
use crate::pipeline::PipelineConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Frame source geometry and rate.
    pub camera: CameraConfig,

    /// Wand tracking parameters.
    pub tracking: TrackingConfig,

    /// Spell recognition parameters.
    pub recognition: RecognitionConfig,
}

/// Frame source parameters. The camera itself is an external collaborator;
/// the engine only needs to know the geometry and cadence it will be fed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub width: u32,
    pub height: u32,
    pub framerate: u32,
}

/// Blob detection and path accumulation parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackingConfig {
    /// Minimum brightness (0-255) to consider a pixel part of the wand tip.
    pub brightness_threshold: u8,
    /// Minimum pixel movement from the last recorded point to record another.
    pub min_movement: f64,
    /// Maximum number of points kept in the path's sliding window.
    pub path_length: usize,
}

/// Path classification and cooldown parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecognitionConfig {
    /// Minimum points required to classify a path.
    pub min_points: usize,
    /// Minimum straightness ratio (0-1) for a stroke to match.
    pub straightness_threshold: f64,
    /// Minimum net displacement in pixels for a stroke to match.
    pub min_distance: f64,
    /// Seconds during which further spells are suppressed after one is
    /// accepted.
    pub spell_cooldown: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            camera: CameraConfig::default(),
            tracking: TrackingConfig::default(),
            recognition: RecognitionConfig::default(),
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            framerate: 30,
        }
    }
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            brightness_threshold: 200,
            min_movement: 5.0,
            path_length: 30,
        }
    }
}

impl Default for RecognitionConfig {
    fn default() -> Self {
        Self {
            min_points: 8,
            straightness_threshold: 0.6,
            min_distance: 30.0,
            spell_cooldown: 1.0,
        }
    }
}

impl Config {
    /// Loads configuration from a JSON file, then applies environment
    /// overrides and validates. A missing file yields the defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut config = if path.as_ref().exists() {
            let contents = std::fs::read_to_string(path)?;
            serde_json::from_str(&contents)?
        } else {
            Self::default()
        };
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Applies `SPELL_VISION_*` environment variable overrides. Unparseable
    /// values are ignored in favor of the configured ones.
    fn apply_env_overrides(&mut self) {
        fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
            std::env::var(name).ok()?.parse().ok()
        }

        if let Some(v) = env_parse("SPELL_VISION_BRIGHTNESS_THRESHOLD") {
            self.tracking.brightness_threshold = v;
        }
        if let Some(v) = env_parse("SPELL_VISION_MIN_MOVEMENT") {
            self.tracking.min_movement = v;
        }
        if let Some(v) = env_parse("SPELL_VISION_PATH_LENGTH") {
            self.tracking.path_length = v;
        }
        if let Some(v) = env_parse("SPELL_VISION_MIN_POINTS") {
            self.recognition.min_points = v;
        }
        if let Some(v) = env_parse("SPELL_VISION_STRAIGHTNESS_THRESHOLD") {
            self.recognition.straightness_threshold = v;
        }
        if let Some(v) = env_parse("SPELL_VISION_MIN_DISTANCE") {
            self.recognition.min_distance = v;
        }
        if let Some(v) = env_parse("SPELL_VISION_SPELL_COOLDOWN") {
            self.recognition.spell_cooldown = v;
        }
    }

    /// Rejects values the pipeline cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.camera.width == 0 || self.camera.height == 0 {
            return Err(Error::InvalidConfig(format!(
                "camera dimensions must be nonzero, got {}x{}",
                self.camera.width, self.camera.height
            )));
        }
        if self.tracking.path_length < 2 {
            return Err(Error::InvalidConfig(format!(
                "tracking.path_length must be at least 2, got {}",
                self.tracking.path_length
            )));
        }
        if !self.tracking.min_movement.is_finite() || self.tracking.min_movement < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "tracking.min_movement must be finite and non-negative, got {}",
                self.tracking.min_movement
            )));
        }
        if !(0.0..=1.0).contains(&self.recognition.straightness_threshold) {
            return Err(Error::InvalidConfig(format!(
                "recognition.straightness_threshold must be in [0, 1], got {}",
                self.recognition.straightness_threshold
            )));
        }
        if !self.recognition.min_distance.is_finite() || self.recognition.min_distance <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "recognition.min_distance must be finite and positive, got {}",
                self.recognition.min_distance
            )));
        }
        if !self.recognition.spell_cooldown.is_finite() || self.recognition.spell_cooldown < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "recognition.spell_cooldown must be finite and non-negative, got {}",
                self.recognition.spell_cooldown
            )));
        }
        Ok(())
    }

    /// Projects the configuration down to the pipeline's own settings.
    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            brightness_threshold: self.tracking.brightness_threshold,
            min_movement: self.tracking.min_movement,
            max_path_points: self.tracking.path_length,
            min_points: self.recognition.min_points,
            min_straightness: self.recognition.straightness_threshold,
            min_distance: self.recognition.min_distance,
            cooldown: Duration::from_secs_f64(self.recognition.spell_cooldown),
        }
    }
}
