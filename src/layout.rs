//! Seat placement on the circle
//!
//! Seat 0 sits at the top and positions proceed clockwise in screen space
//! (y grows downward).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::polar_to_cartesian;
use crate::sim::{Participant, Playback};

/// How a seat should be drawn at the current step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeatStatus {
    Alive,
    Eliminated,
    /// Last one standing, shown once playback is complete
    Survivor,
}

impl SeatStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeatStatus::Alive => "alive",
            SeatStatus::Eliminated => "eliminated",
            SeatStatus::Survivor => "survivor",
        }
    }
}

/// A participant placed on the circle
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Seat {
    pub participant: Participant,
    pub pos: Vec2,
    pub status: SeatStatus,
}

/// Center of seat `position` on a circle of `total` seats
pub fn seat_position(position: usize, total: usize, radius: f32) -> Vec2 {
    let total = total.max(1) as f32;
    let degrees = position as f32 * 360.0 / total - 90.0;
    polar_to_cartesian(radius, degrees.to_radians())
}

/// Classify one participant given whether playback has finished
pub fn seat_status(participant: &Participant, complete: bool) -> SeatStatus {
    match (participant.alive, complete) {
        (false, _) => SeatStatus::Eliminated,
        (true, true) => SeatStatus::Survivor,
        (true, false) => SeatStatus::Alive,
    }
}

/// All seats at the playback's current step
pub fn seats(playback: &Playback, radius: f32) -> Vec<Seat> {
    let people = playback.participants();
    let total = people.len();
    let complete = playback.is_complete();
    people
        .iter()
        .map(|p| Seat {
            participant: *p,
            pos: seat_position(p.position, total, radius),
            status: seat_status(p, complete),
        })
        .collect()
}
