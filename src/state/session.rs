/// Interactive calculator session
///
/// Holds the one value the user controls. Every reader (result panel,
/// preset highlight, preview) derives from it synchronously, so there is
/// nothing to cache and nothing to invalidate.

use serde::Serialize;

use super::stop::StopDifference;
use crate::error::Result;
use crate::ratio::{compute_lighting_ratio, preset_for_stop, LightingResult, NamedRatio};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Session {
    stop: StopDifference,
}

/// Snapshot of a session for the command-line report
#[derive(Serialize, Debug, Clone)]
pub struct Report {
    pub badge: String,
    pub result: LightingResult,
    pub preset: Option<NamedRatio>,
}

impl Report {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Session {
    pub fn new(stop: StopDifference) -> Self {
        Self { stop }
    }

    pub fn stop(&self) -> StopDifference {
        self.stop
    }

    /// Set from a raw slider/input value (clamped and snapped)
    pub fn set_stop(&mut self, raw: f64) {
        self.stop = StopDifference::new(raw);
    }

    /// Jump straight to a preset's stop value
    pub fn select_preset(&mut self, preset: &NamedRatio) {
        self.set_stop(preset.stop_value);
    }

    /// Back to flash and ambient balanced
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Recompute the ratio for the current stop
    pub fn result(&self) -> LightingResult {
        compute_lighting_ratio(self.stop.value())
    }

    /// Preset matching the current stop exactly, if any
    pub fn selected_preset(&self) -> Option<&'static NamedRatio> {
        preset_for_stop(self.stop.value())
    }

    pub fn is_selected(&self, preset: &NamedRatio) -> bool {
        self.stop.value() == preset.stop_value
    }

    pub fn report(&self) -> Report {
        Report {
            badge: self.stop.badge_text(),
            result: self.result(),
            preset: self.selected_preset().copied(),
        }
    }
}
