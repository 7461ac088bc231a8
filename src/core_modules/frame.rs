// THEORY:
// The `Frame` module is the boundary between the outside world (camera
// drivers, video decoders, test fixtures) and the vision core. Everything
// upstream of the pipeline speaks in whatever buffer format its source
// produces; everything downstream of this module speaks in a single,
// validated representation: a flat grid of 8-bit brightness samples.
//
// Key architectural principles:
// 1.  **Parse, Don't Validate**: A `Frame` can only be constructed through
//     `Frame::new`, which rejects any buffer whose length disagrees with the
//     declared dimensions. Once a `Frame` exists, every consumer may index it
//     without re-checking geometry. This is the single place where the
//     "malformed input" failure category of the system lives.
// 2.  **Single Channel By Design**: The tracked wand tip is an IR reflection;
//     the sensor is effectively monochrome. Collapsing to one brightness
//     channel before the core keeps the hot per-frame loop cheap.
// 3.  **Dumb Data Container**: Like the rest of the data model, `Frame` holds
//     data and answers simple questions about it. It performs no analysis.

use crate::error::{Error, Result};
use image::GrayImage;
use std::time::Instant;

/// An immutable single-channel brightness frame.
#[derive(Debug, Clone)]
pub struct Frame {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    /// Monotonic capture time, when the source provides one.
    pub captured_at: Option<Instant>,
}

impl Frame {
    /// Creates a frame from a flat row-major brightness buffer.
    ///
    /// Fails if `pixels.len() != width * height` — the one malformed-input
    /// condition the pipeline surfaces as an error rather than a "no result".
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(Error::FrameGeometry {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
            captured_at: None,
        })
    }

    /// Attaches a monotonic capture timestamp.
    pub fn with_timestamp(mut self, captured_at: Instant) -> Self {
        self.captured_at = Some(captured_at);
        self
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The raw row-major brightness buffer. Length is guaranteed to equal
    /// `width * height`.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Brightness at `(x, y)`. Callers are expected to stay in bounds; the
    /// blob locator only ever iterates within the frame's own dimensions.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.pixels[(y * self.width + x) as usize]
    }
}

impl From<&GrayImage> for Frame {
    fn from(img: &GrayImage) -> Self {
        // A GrayImage's buffer length is width * height by construction,
        // so this cannot hit the geometry check.
        Self {
            width: img.width(),
            height: img.height(),
            pixels: img.as_raw().clone(),
            captured_at: None,
        }
    }
}
