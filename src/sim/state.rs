//! Circle state and recorded elimination history
//!
//! Everything here is a value type: snapshots are copies, so a recorded
//! sequence never changes after generation.

use serde::{Deserialize, Serialize};

/// A seat in the circle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// 1-based id in seating order
    pub id: u32,
    /// Seat index, fixed for the participant's lifetime
    pub position: usize,
    pub alive: bool,
}

impl Participant {
    /// Callers keep `position` below `u32::MAX`; `generate` rejects larger circles
    pub(crate) fn new(position: usize) -> Self {
        Self {
            id: position as u32 + 1,
            position,
            alive: true,
        }
    }
}

/// Seat `count` participants at positions 0..count, all alive
pub(crate) fn seat_circle(count: usize) -> Vec<Participant> {
    (0..count).map(Participant::new).collect()
}

/// One recorded elimination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EliminationEvent {
    pub eliminated_id: u32,
    pub eliminated_position: usize,
    /// Every participant's state right after this elimination
    pub snapshot: Vec<Participant>,
}

impl EliminationEvent {
    pub fn alive_count(&self) -> usize {
        self.snapshot.iter().filter(|p| p.alive).count()
    }
}

/// Full result of one generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EliminationSequence {
    /// Participant count (N)
    pub participants: usize,
    /// Pass count (M)
    pub passes: u64,
    /// Seating before any elimination
    pub initial: Vec<Participant>,
    /// Events in elimination order (length N - 1)
    pub events: Vec<EliminationEvent>,
}

impl EliminationSequence {
    /// Number of eliminations
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Circle state after `step` eliminations.
    ///
    /// Step 0 is the initial seating; steps past the end clamp to the final
    /// snapshot.
    pub fn state_at(&self, step: usize) -> &[Participant] {
        match step.checked_sub(1) {
            None => self.initial.as_slice(),
            Some(i) => self
                .events
                .get(i)
                .or(self.events.last())
                .map_or(self.initial.as_slice(), |e| e.snapshot.as_slice()),
        }
    }

    /// Eliminated ids in order
    pub fn elimination_order(&self) -> Vec<u32> {
        self.events.iter().map(|e| e.eliminated_id).collect()
    }

    /// The one participant never eliminated
    pub fn survivor(&self) -> Option<&Participant> {
        let final_state = self.state_at(self.events.len());
        let mut alive = final_state.iter().filter(|p| p.alive);
        match (alive.next(), alive.next()) {
            (Some(p), None) => Some(p),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_seat_sequence() -> EliminationSequence {
        let initial = seat_circle(2);
        let mut after = initial.clone();
        after[0].alive = false;
        EliminationSequence {
            participants: 2,
            passes: 0,
            initial,
            events: vec![EliminationEvent {
                eliminated_id: 1,
                eliminated_position: 0,
                snapshot: after,
            }],
        }
    }

    #[test]
    fn test_seat_circle_ids_follow_positions() {
        let seats = seat_circle(4);
        assert_eq!(seats.len(), 4);
        for (i, p) in seats.iter().enumerate() {
            assert_eq!(p.position, i);
            assert_eq!(p.id as usize, i + 1);
            assert!(p.alive);
        }
    }

    #[test]
    fn test_state_at_lookup() {
        let seq = two_seat_sequence();
        assert!(seq.state_at(0).iter().all(|p| p.alive));
        assert!(!seq.state_at(1)[0].alive);
        // Past the end clamps to the final snapshot
        assert_eq!(seq.state_at(7), seq.state_at(1));
    }

    #[test]
    fn test_survivor_requires_single_alive() {
        let seq = two_seat_sequence();
        assert_eq!(seq.survivor().map(|p| p.id), Some(2));

        let unfinished = EliminationSequence {
            events: Vec::new(),
            ..seq
        };
        assert!(unfinished.survivor().is_none());
    }
}
