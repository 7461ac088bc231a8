// THEORY:
// This file is the main entry point for the `spell_vision` library crate.
// It follows the standard Rust convention of using `lib.rs` to define the
// public API that will be exposed to external consumers (the host capture
// loop, overlay viewers, automation dispatchers).
//
// The primary goal is to export the `SpellPipeline` and its associated data
// structures (`PipelineConfig`, `Report`, `SpellEvent`) as the clean,
// high-level interface for the whole engine: one brightness frame in, one
// report out. The internal modules (`core_modules`) stay reachable for
// consumers that want to drive the individual stages — the blob locator,
// tracker, classifier, and cooldown gate are each usable on their own.

pub mod config;
pub mod core_modules;
pub mod error;
pub mod frame_slot;
pub mod pipeline;

pub use config::Config;
pub use core_modules::frame::Frame;
pub use error::{Error, Result};
pub use pipeline::{PipelineConfig, Report, Spell, SpellEvent, SpellPipeline};
