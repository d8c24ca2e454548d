//! Step-by-step replay of a generated sequence
//!
//! The caller owns the clock: it feeds elapsed seconds into [`tick`] along
//! with one-shot control inputs, the same way a frame loop would.

use serde::{Deserialize, Serialize};

use super::state::{EliminationEvent, EliminationSequence, Participant};
use crate::consts::{DEFAULT_STEP_INTERVAL_MS, MAX_STEPS_PER_TICK};

/// Current phase of playback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackPhase {
    /// At step 0, nothing played yet
    Ready,
    /// Auto-advancing on the step interval
    Playing,
    /// Stopped mid-sequence, manual stepping allowed
    Paused,
    /// Every elimination shown, survivor known
    Complete,
}

/// Control inputs for a single tick (one-shot)
#[derive(Debug, Clone, Default)]
pub struct PlaybackInput {
    /// Play/pause toggle
    pub toggle_play: bool,
    /// Show the next elimination (only while not playing)
    pub next: bool,
    /// Rewind to the initial seating
    pub reset: bool,
}

/// Replay cursor over an immutable sequence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playback {
    sequence: EliminationSequence,
    /// Eliminations shown so far (0..=len)
    current_step: usize,
    pub phase: PlaybackPhase,
    /// Seconds between automatic steps
    pub step_interval: f32,
    #[serde(skip)]
    accumulator: f32,
}

impl Playback {
    pub fn new(sequence: EliminationSequence) -> Self {
        let phase = if sequence.is_empty() {
            PlaybackPhase::Complete
        } else {
            PlaybackPhase::Ready
        };
        Self {
            sequence,
            current_step: 0,
            phase,
            step_interval: DEFAULT_STEP_INTERVAL_MS as f32 / 1000.0,
            accumulator: 0.0,
        }
    }

    /// Builder-style interval override (milliseconds)
    pub fn with_interval_ms(mut self, interval_ms: u64) -> Self {
        self.step_interval = interval_ms.max(1) as f32 / 1000.0;
        self
    }

    pub fn sequence(&self) -> &EliminationSequence {
        &self.sequence
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn total_steps(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_complete(&self) -> bool {
        self.phase == PlaybackPhase::Complete
    }

    pub fn is_playing(&self) -> bool {
        self.phase == PlaybackPhase::Playing
    }

    /// Circle state at the current step
    pub fn participants(&self) -> &[Participant] {
        self.sequence.state_at(self.current_step)
    }

    pub fn alive_count(&self) -> usize {
        self.participants().iter().filter(|p| p.alive).count()
    }

    /// The elimination that produced the current state
    pub fn last_eliminated(&self) -> Option<&EliminationEvent> {
        self.current_step
            .checked_sub(1)
            .and_then(|i| self.sequence.events.get(i))
    }

    /// Survivor, revealed only once playback is complete
    pub fn survivor(&self) -> Option<&Participant> {
        if self.is_complete() {
            self.sequence.survivor()
        } else {
            None
        }
    }

    /// Fraction of eliminations shown (1.0 when there are none)
    pub fn progress(&self) -> f32 {
        match self.total_steps() {
            0 => 1.0,
            total => self.current_step as f32 / total as f32,
        }
    }

    /// Advance one step; marks completion on the last one
    fn step_forward(&mut self) {
        if self.current_step < self.total_steps() {
            self.current_step += 1;
        }
        if self.current_step >= self.total_steps() && !self.is_complete() {
            self.phase = PlaybackPhase::Complete;
            self.accumulator = 0.0;
            log::debug!("Playback complete after {} eliminations", self.current_step);
        }
    }

    fn rewind(&mut self) {
        self.current_step = 0;
        self.accumulator = 0.0;
        self.phase = if self.sequence.is_empty() {
            PlaybackPhase::Complete
        } else {
            PlaybackPhase::Ready
        };
    }
}

/// Advance playback by `dt` seconds of wall time
pub fn tick(playback: &mut Playback, input: &PlaybackInput, dt: f32) {
    if input.reset {
        playback.rewind();
        log::debug!("Playback reset");
        return;
    }

    // Handle play/pause toggle
    if input.toggle_play {
        match playback.phase {
            PlaybackPhase::Ready | PlaybackPhase::Paused => {
                playback.phase = PlaybackPhase::Playing;
            }
            PlaybackPhase::Playing => {
                playback.phase = PlaybackPhase::Paused;
                playback.accumulator = 0.0;
            }
            PlaybackPhase::Complete => {}
        }
    }

    match playback.phase {
        PlaybackPhase::Complete => {}
        PlaybackPhase::Ready | PlaybackPhase::Paused => {
            if input.next {
                playback.step_forward();
                if !playback.is_complete() {
                    playback.phase = PlaybackPhase::Paused;
                }
            }
        }
        PlaybackPhase::Playing => {
            // Cap catch-up so a stalled clock cannot queue a backlog
            let max_dt = playback.step_interval * (MAX_STEPS_PER_TICK + 1) as f32;
            playback.accumulator += dt.clamp(0.0, max_dt);

            let mut substeps = 0;
            while playback.accumulator >= playback.step_interval
                && substeps < MAX_STEPS_PER_TICK
                && !playback.is_complete()
            {
                playback.accumulator -= playback.step_interval;
                playback.step_forward();
                substeps += 1;
            }
            if substeps == MAX_STEPS_PER_TICK {
                playback.accumulator = 0.0;
            }
        }
    }
}
