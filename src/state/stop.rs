/// The stop difference the user is dialling in
///
/// The slider covers -3 (ambient three stops stronger) to +4 (flash four
/// stops stronger) in half-stop steps. Anything coming from elsewhere (the
/// command line, a preset) goes through the same clamp and snap.

use crate::error::{RatioError, Result};

/// Stop difference between flash and ambient, clamped to the slider range
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct StopDifference(f64);

/// Which light source is stronger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Ambient,
    Balanced,
    Flash,
}

impl StopDifference {
    /// Ambient three stops above the flash
    pub const MIN: f64 = -3.0;
    /// Flash four stops above the ambient
    pub const MAX: f64 = 4.0;
    /// Slider granularity
    pub const STEP: f64 = 0.5;

    /// Clamp to [MIN, MAX] and snap to the nearest half stop.
    ///
    /// Out-of-range input is corrected silently. NaN becomes 0.
    pub fn new(raw: f64) -> Self {
        if raw.is_nan() {
            return Self::default();
        }

        let clamped = raw.clamp(Self::MIN, Self::MAX);
        let snapped = (clamped / Self::STEP).round() * Self::STEP;

        // Normalize -0.0 so it prints as "0"
        if snapped == 0.0 {
            Self(0.0)
        } else {
            Self(snapped)
        }
    }

    /// Parse user text such as "-1", "+1.5", "2 stops" or "0.5EV".
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let lower = trimmed.to_ascii_lowercase();

        let number = ["stops", "stop", "ev"]
            .iter()
            .find_map(|unit| lower.strip_suffix(*unit))
            .unwrap_or(lower.as_str())
            .trim();

        let value: f64 = number
            .parse()
            .map_err(|_| RatioError::InvalidStop(trimmed.to_string()))?;

        if !value.is_finite() {
            return Err(RatioError::NonFinite(trimmed.to_string()));
        }

        Ok(Self::new(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn tone(self) -> Tone {
        if self.0 > 0.0 {
            Tone::Flash
        } else if self.0 < 0.0 {
            Tone::Ambient
        } else {
            Tone::Balanced
        }
    }

    /// Signed badge text: "+1.5 stops", "0 stop", "-1 stop"
    pub fn badge_text(self) -> String {
        let number = if self.0.fract() == 0.0 {
            format!("{}", self.0 as i64)
        } else {
            format!("{:.1}", self.0)
        };
        let sign = if self.0 > 0.0 { "+" } else { "" };
        let plural = if self.0.abs() > 1.0 { "s" } else { "" };

        format!("{sign}{number} stop{plural}")
    }
}

impl Default for StopDifference {
    /// Flash and ambient balanced
    fn default() -> Self {
        Self(0.0)
    }
}

impl std::str::FromStr for StopDifference {
    type Err = RatioError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
