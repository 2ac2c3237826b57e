//! Batch orchestration: language fan-out, output resolution, completion
//! signaling.

/// Per-language task fan-out and file dispatch.
pub mod orchestrator;

/// Output parameter derivation and defaulting.
pub mod params;

/// Output directory and file path resolution.
pub mod resolver;

pub use orchestrator::{Orchestrator, TranslatedText, split_languages};
pub use params::{OutputOverrides, OutputParameters};
