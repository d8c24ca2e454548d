//! Run settings
//!
//! Participant and pass counts plus playback cadence, persisted as JSON.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{JosephusError, Result};

/// Run settings/preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Participant count (N)
    pub participants: i64,
    /// Pass count (M)
    pub passes: i64,
    /// Auto-play delay between eliminations
    pub step_interval_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            participants: DEFAULT_PARTICIPANTS,
            passes: DEFAULT_PASSES,
            step_interval_ms: DEFAULT_STEP_INTERVAL_MS,
        }
    }
}

impl Settings {
    /// Check values against the interactive ranges.
    ///
    /// Stricter than `generate`, which accepts any N >= 1 and M >= 0.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_PARTICIPANTS..=MAX_PARTICIPANTS).contains(&self.participants) {
            return Err(JosephusError::InvalidArgument {
                name: "participants",
                value: self.participants,
                reason: "outside the interactive participant range",
            });
        }
        if !(MIN_PASSES..=MAX_PASSES).contains(&self.passes) {
            return Err(JosephusError::InvalidArgument {
                name: "passes",
                value: self.passes,
                reason: "outside the interactive pass range",
            });
        }
        if self.step_interval_ms == 0 {
            return Err(JosephusError::InvalidArgument {
                name: "step_interval_ms",
                value: 0,
                reason: "must be positive",
            });
        }
        Ok(())
    }

    /// Copy with every value pulled into its interactive range
    pub fn clamped(&self) -> Self {
        Self {
            participants: self.participants.clamp(MIN_PARTICIPANTS, MAX_PARTICIPANTS),
            passes: self.passes.clamp(MIN_PASSES, MAX_PASSES),
            step_interval_ms: self.step_interval_ms.max(1),
        }
    }

    /// Load settings from a JSON file; a missing file yields defaults
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(json) => {
                let settings = serde_json::from_str(&json)?;
                log::info!("Loaded settings from {}", path.display());
                Ok(settings)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Save settings as pretty-printed JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
