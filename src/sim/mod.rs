//! Deterministic elimination module
//!
//! All sequence logic lives here. This module must be pure and deterministic:
//! - Output depends only on (N, M)
//! - Recorded history is never mutated
//! - Playback time comes from the caller, never a system clock

pub mod generate;
pub mod playback;
pub mod state;

pub use generate::generate;
pub use playback::{Playback, PlaybackInput, PlaybackPhase, tick};
pub use state::{EliminationEvent, EliminationSequence, Participant};
