//! Elimination sequence generation
//!
//! Walks a token around a fixed-size circle, skipping eliminated seats,
//! and records a snapshot after every elimination.

use super::state::{EliminationEvent, EliminationSequence, Participant, seat_circle};
use crate::error::{JosephusError, Result};

/// Generate the full elimination order for `n` participants and `m` passes.
///
/// Arguments are signed so out-of-range values can be rejected here rather
/// than at every caller: `n` must be at least 1 and `m` non-negative.
pub fn generate(n: i64, m: i64) -> Result<EliminationSequence> {
    if n < 1 {
        return Err(JosephusError::InvalidArgument {
            name: "n",
            value: n,
            reason: "participant count must be at least 1",
        });
    }
    if m < 0 {
        return Err(JosephusError::InvalidArgument {
            name: "m",
            value: m,
            reason: "pass count must be non-negative",
        });
    }
    let count = usize::try_from(n).map_err(|_| JosephusError::InvalidArgument {
        name: "n",
        value: n,
        reason: "participant count does not fit in memory",
    })?;
    if u32::try_from(n).is_err() {
        return Err(JosephusError::InvalidArgument {
            name: "n",
            value: n,
            reason: "participant count exceeds the id range",
        });
    }
    let passes = m as u64;

    log::debug!("Generating elimination sequence: n={}, m={}", count, passes);

    let initial = seat_circle(count);
    let mut people = initial.clone();
    let mut events = Vec::with_capacity(count - 1);
    let mut current = 0usize;
    let mut alive_count = count;

    while alive_count > 1 {
        // A full lap of alive seats returns the token to its holder
        let steps = passes % alive_count as u64;
        for _ in 0..steps {
            current = next_alive(&people, current);
        }

        let holder = &mut people[current];
        holder.alive = false;
        let (eliminated_id, eliminated_position) = (holder.id, holder.position);
        alive_count -= 1;

        events.push(EliminationEvent {
            eliminated_id,
            eliminated_position,
            snapshot: people.clone(),
        });

        // Next alive participant picks up the token
        if alive_count > 0 {
            current = next_alive(&people, current);
        }
    }

    Ok(EliminationSequence {
        participants: count,
        passes,
        initial,
        events,
    })
}

/// Next alive seat strictly after `from`, wrapping over the full circle.
///
/// Falls back to `from` when no other seat is alive.
fn next_alive(people: &[Participant], from: usize) -> usize {
    let n = people.len();
    let mut index = from;
    for _ in 0..n {
        index = (index + 1) % n;
        if people[index].alive {
            return index;
        }
    }
    from
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_classic_five_skip_one() {
        let seq = generate(5, 1).unwrap();
        assert_eq!(seq.elimination_order(), vec![2, 4, 1, 5]);
        assert_eq!(seq.survivor().map(|p| p.id), Some(3));
    }

    #[test]
    fn test_seven_skip_two() {
        let seq = generate(7, 2).unwrap();
        assert_eq!(seq.elimination_order(), vec![3, 6, 2, 7, 5, 1]);
        assert_eq!(seq.survivor().map(|p| p.id), Some(4));
    }

    #[test]
    fn test_single_participant() {
        for m in [0, 1, 9] {
            let seq = generate(1, m).unwrap();
            assert!(seq.is_empty());
            assert_eq!(seq.survivor().map(|p| p.id), Some(1));
        }
    }

    #[test]
    fn test_zero_passes_eliminates_holder() {
        // Holder goes out, token hops to the next alive seat
        let seq = generate(6, 0).unwrap();
        assert_eq!(seq.elimination_order(), vec![1, 2, 3, 4, 5]);
        assert_eq!(seq.survivor().map(|p| p.id), Some(6));
        assert_eq!(seq.events[0].eliminated_position, 0);
    }

    #[test]
    fn test_passes_larger_than_circle() {
        // 3 passes on 2 seats wraps: 0 -> 1 -> 0 -> 1
        let seq = generate(2, 3).unwrap();
        assert_eq!(seq.elimination_order(), vec![2]);
        assert_eq!(seq.survivor().map(|p| p.id), Some(1));

        // Whole laps change nothing
        assert_eq!(
            generate(7, 2).unwrap().elimination_order(),
            generate(7, 2 + 7 * 6 * 5 * 4 * 3 * 2).unwrap().elimination_order()
        );
    }

    #[test]
    fn test_huge_pass_count_completes() {
        let seq = generate(10, i64::MAX).unwrap();
        assert_eq!(seq.len(), 9);
    }

    #[test]
    fn test_invalid_arguments() {
        let err = generate(0, 0).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(matches!(err, JosephusError::InvalidArgument { name: "n", .. }));

        let err = generate(5, -1).unwrap_err();
        assert!(matches!(err, JosephusError::InvalidArgument { name: "m", .. }));

        assert!(generate(-3, 2).is_err());
    }

    #[test]
    fn test_rejects_circle_beyond_id_range() {
        // Rejected before any seat is allocated
        let err = generate(i64::from(u32::MAX) + 1, 0).unwrap_err();
        assert!(matches!(err, JosephusError::InvalidArgument { name: "n", .. }));
    }

    #[test]
    fn test_snapshots_are_independent_copies() {
        let seq = generate(4, 1).unwrap();
        // First snapshot only has the first victim marked
        let first = &seq.events[0].snapshot;
        assert_eq!(first.iter().filter(|p| !p.alive).count(), 1);
        assert!(seq.initial.iter().all(|p| p.alive));
    }

    #[test]
    fn test_next_alive_skips_eliminated() {
        let mut people = seat_circle(4);
        people[1].alive = false;
        people[2].alive = false;
        assert_eq!(next_alive(&people, 0), 3);
        assert_eq!(next_alive(&people, 3), 0);

        people[3].alive = false;
        assert_eq!(next_alive(&people, 0), 0);
    }

    proptest! {
        #[test]
        fn prop_event_count_is_n_minus_one(n in 1i64..60, m in 0i64..15) {
            let seq = generate(n, m).unwrap();
            prop_assert_eq!(seq.len() as i64, n - 1);
        }

        #[test]
        fn prop_ids_distinct_and_in_range(n in 1i64..60, m in 0i64..15) {
            let seq = generate(n, m).unwrap();
            let mut ids = seq.elimination_order();
            prop_assert!(ids.iter().all(|&id| id >= 1 && i64::from(id) <= n));
            ids.sort_unstable();
            ids.dedup();
            prop_assert_eq!(ids.len() as i64, n - 1);
        }

        #[test]
        fn prop_alive_count_drops_by_one(n in 1i64..60, m in 0i64..15) {
            let seq = generate(n, m).unwrap();
            let mut expected = n as usize;
            for event in &seq.events {
                expected -= 1;
                prop_assert_eq!(event.alive_count(), expected);
                let victim = &event.snapshot[event.eliminated_position];
                prop_assert!(!victim.alive);
                prop_assert_eq!(victim.id, event.eliminated_id);
            }
        }

        #[test]
        fn prop_positions_fixed(n in 1i64..60, m in 0i64..15) {
            let seq = generate(n, m).unwrap();
            for event in &seq.events {
                for (i, p) in event.snapshot.iter().enumerate() {
                    prop_assert_eq!(p.position, i);
                    prop_assert_eq!(p.id as usize, i + 1);
                }
            }
        }

        #[test]
        fn prop_deterministic(n in 1i64..60, m in 0i64..15) {
            let a = generate(n, m).unwrap();
            let b = generate(n, m).unwrap();
            prop_assert_eq!(a.survivor().map(|p| p.id), b.survivor().map(|p| p.id));
            prop_assert_eq!(a, b);
        }
    }
}
