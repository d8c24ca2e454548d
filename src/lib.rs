//! Josephus Ring - elimination order for the Josephus problem
//!
//! Core modules:
//! - `sim`: Deterministic sequence generation and step-by-step playback
//! - `layout`: Seat placement on the circle for display
//! - `settings`: Participant/pass configuration with JSON load/save
//! - `error`: Crate error type

pub mod error;
pub mod layout;
pub mod settings;
pub mod sim;

pub use error::{JosephusError, Result};
pub use settings::Settings;
pub use sim::{EliminationEvent, EliminationSequence, Participant, generate};

use glam::Vec2;

/// Configuration constants
pub mod consts {
    /// Default participant count (N)
    pub const DEFAULT_PARTICIPANTS: i64 = 5;
    /// Default pass count (M)
    pub const DEFAULT_PASSES: i64 = 1;

    /// Interactive range for participants
    pub const MIN_PARTICIPANTS: i64 = 3;
    pub const MAX_PARTICIPANTS: i64 = 50;

    /// Interactive range for passes
    pub const MIN_PASSES: i64 = 0;
    pub const MAX_PASSES: i64 = 10;

    /// Auto-play cadence (one elimination every 800 ms)
    pub const DEFAULT_STEP_INTERVAL_MS: u64 = 800;
    /// Maximum steps taken in a single playback tick
    pub const MAX_STEPS_PER_TICK: u32 = 8;

    /// Seat circle radius in layout units
    pub const SEAT_RING_RADIUS: f32 = 140.0;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
