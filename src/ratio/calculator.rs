/// Flash-to-ambient ratio transform
///
/// A stop difference is log2 of the flash power relative to the ambient
/// light. Ambient power is fixed at 1, so +1 stop means the flash delivers
/// twice the ambient light ("2:1") and -1 stop means half ("1:2").

use serde::Serialize;

/// Qualitative effect of a given flash/ambient balance
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    #[serde(rename = "Very light fill")]
    VeryLightFill,
    #[serde(rename = "Natural fill")]
    NaturalFill,
    #[serde(rename = "Perfect balance")]
    PerfectBalance,
    #[serde(rename = "Slightly dominant flash")]
    SlightlyDominantFlash,
    #[serde(rename = "Dominant flash")]
    DominantFlash,
    #[serde(rename = "Very dominant flash")]
    VeryDominantFlash,
}

impl Effect {
    /// Classify a stop difference.
    ///
    /// Each label covers the half-open interval that ends at its anchor stop:
    /// - (-inf, -2] Very light fill
    /// - (-2, -1]   Natural fill
    /// - (-1, 0]    Perfect balance
    /// - (0, 1]     Slightly dominant flash
    /// - (1, 2]     Dominant flash
    /// - (2, inf)   Very dominant flash
    ///
    /// NaN has no position on the scale and reads as a balanced setup.
    pub fn for_stop(stop_diff: f64) -> Self {
        if stop_diff.is_nan() {
            return Effect::PerfectBalance;
        }

        if stop_diff <= -2.0 {
            Effect::VeryLightFill
        } else if stop_diff <= -1.0 {
            Effect::NaturalFill
        } else if stop_diff <= 0.0 {
            Effect::PerfectBalance
        } else if stop_diff <= 1.0 {
            Effect::SlightlyDominantFlash
        } else if stop_diff <= 2.0 {
            Effect::DominantFlash
        } else {
            Effect::VeryDominantFlash
        }
    }

    /// Short label shown next to the ratio
    pub fn label(self) -> &'static str {
        match self {
            Effect::VeryLightFill => "Very light fill",
            Effect::NaturalFill => "Natural fill",
            Effect::PerfectBalance => "Perfect balance",
            Effect::SlightlyDominantFlash => "Slightly dominant flash",
            Effect::DominantFlash => "Dominant flash",
            Effect::VeryDominantFlash => "Very dominant flash",
        }
    }

    /// Explanatory sentence paired with the label
    pub fn description(self) -> &'static str {
        match self {
            Effect::VeryLightFill => {
                "The flash barely lifts the shadows. The ambient light fully dominates."
            }
            Effect::NaturalFill => {
                "The flash fills the shadows without being noticed. Ideal for outdoor portraits."
            }
            Effect::PerfectBalance => {
                "Flash and ambient contribute equally. Natural look with well defined shadows."
            }
            Effect::SlightlyDominantFlash => {
                "The subject separates slightly from the background. Professional portrait look."
            }
            Effect::DominantFlash => {
                "Dramatic effect, the subject clearly stands out. Darkened background."
            }
            Effect::VeryDominantFlash => {
                "The flash controls nearly all of the exposure. Very dark or black background."
            }
        }
    }
}

/// Everything derived from one stop difference
///
/// Immutable and recomputed from the input on every change; it has no
/// identity of its own.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct LightingResult {
    /// The stop difference this result was computed from
    pub stop_diff: f64,
    /// Flash power relative to ambient (ambient = 1)
    pub flash_power: f64,
    /// Share of the total light coming from the flash (0-100)
    pub flash_percent: f64,
    /// Share of the total light coming from the ambient (0-100)
    pub ambient_percent: f64,
    /// Canonical ratio text, e.g. "2:1", "1:4", "1.4:1"
    pub ratio_text: String,
    pub effect: Effect,
    pub description: &'static str,
}

impl LightingResult {
    /// Flash share rounded half-up to a whole percent, as shown on the bar
    pub fn flash_percent_rounded(&self) -> i64 {
        round_half_up(self.flash_percent)
    }

    /// Ambient share rounded half-up to a whole percent, as shown on the bar
    pub fn ambient_percent_rounded(&self) -> i64 {
        round_half_up(self.ambient_percent)
    }

    /// Effect label as displayed
    pub fn effect_label(&self) -> &'static str {
        self.effect.label()
    }
}

/// Compute the lighting ratio for a stop difference.
///
/// Callers normally clamp to [-3, 4] in half stops first (see
/// `StopDifference`), but the formulas hold for any real number and this
/// never panics.
pub fn compute_lighting_ratio(stop_diff: f64) -> LightingResult {
    let flash_power = 2f64.powf(stop_diff);
    let ambient_power = 1.0;
    let total_power = flash_power + ambient_power;

    let flash_percent = flash_power / total_power * 100.0;
    let ambient_percent = ambient_power / total_power * 100.0;

    let effect = Effect::for_stop(stop_diff);

    LightingResult {
        stop_diff,
        flash_power,
        flash_percent,
        ambient_percent,
        ratio_text: ratio_text(stop_diff),
        effect,
        description: effect.description(),
    }
}

/// "R:1" when the flash is stronger, "1:R" when the ambient is
fn ratio_text(stop_diff: f64) -> String {
    if stop_diff == 0.0 {
        "1:1".to_string()
    } else if stop_diff > 0.0 {
        format!("{}:1", format_ratio_value(2f64.powf(stop_diff)))
    } else if stop_diff < 0.0 {
        format!("1:{}", format_ratio_value(2f64.powf(-stop_diff)))
    } else {
        // NaN compares false to everything
        format!("{}:1", format_ratio_value(stop_diff))
    }
}

/// Render a ratio term: whole numbers as integers, anything else rounded
/// to one decimal place (a value that rounds to a whole number drops the
/// trailing ".0").
pub fn format_ratio_value(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let rounded = if value.fract() == 0.0 {
        value
    } else {
        (value * 10.0).round() / 10.0
    };

    if rounded.fract() == 0.0 {
        format!("{:.0}", rounded)
    } else {
        format!("{:.1}", rounded)
    }
}

fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    /// Every slider position: -3.0, -2.5, ..., 4.0
    fn slider_positions() -> impl Iterator<Item = f64> {
        (-6..=8).map(|half_stops| half_stops as f64 * 0.5)
    }

    #[test]
    fn test_balanced() {
        let result = compute_lighting_ratio(0.0);

        assert_eq!(result.ratio_text, "1:1");
        assert_eq!(result.effect, Effect::PerfectBalance);
        assert_eq!(result.effect_label(), "Perfect balance");
        assert!((result.flash_percent - 50.0).abs() < EPSILON);
        assert!((result.ambient_percent - 50.0).abs() < EPSILON);
        assert_eq!(result.flash_power, 1.0);
    }

    #[test]
    fn test_one_stop_each_way() {
        let flash = compute_lighting_ratio(1.0);
        assert_eq!(flash.ratio_text, "2:1");
        assert!((flash.flash_percent - 200.0 / 3.0).abs() < EPSILON);
        assert!((flash.ambient_percent - 100.0 / 3.0).abs() < EPSILON);
        assert_eq!(flash.effect, Effect::SlightlyDominantFlash);

        let fill = compute_lighting_ratio(-1.0);
        assert_eq!(fill.ratio_text, "1:2");
        assert!((fill.ambient_percent - 200.0 / 3.0).abs() < EPSILON);
        assert_eq!(fill.effect, Effect::NaturalFill);
    }

    #[test]
    fn test_two_and_three_stops() {
        let dominant = compute_lighting_ratio(2.0);
        assert_eq!(dominant.ratio_text, "4:1");
        assert_eq!(dominant.effect_label(), "Dominant flash");

        let light_fill = compute_lighting_ratio(-2.0);
        assert_eq!(light_fill.ratio_text, "1:4");
        assert_eq!(light_fill.effect_label(), "Very light fill");

        let very_dominant = compute_lighting_ratio(3.0);
        assert_eq!(very_dominant.ratio_text, "8:1");
        assert_eq!(very_dominant.effect_label(), "Very dominant flash");

        assert_eq!(compute_lighting_ratio(-3.0).ratio_text, "1:8");
        assert_eq!(compute_lighting_ratio(4.0).ratio_text, "16:1");
    }

    #[test]
    fn test_half_stop_ratio_text() {
        assert_eq!(compute_lighting_ratio(0.5).ratio_text, "1.4:1");
        assert_eq!(compute_lighting_ratio(-0.5).ratio_text, "1:1.4");
        assert_eq!(compute_lighting_ratio(1.5).ratio_text, "2.8:1");
        assert_eq!(compute_lighting_ratio(2.5).ratio_text, "5.7:1");
        assert_eq!(compute_lighting_ratio(3.5).ratio_text, "11.3:1");
        assert_eq!(compute_lighting_ratio(-2.5).ratio_text, "1:5.7");
    }

    #[test]
    fn test_format_ratio_value() {
        assert_eq!(format_ratio_value(2.0), "2");
        assert_eq!(format_ratio_value(16.0), "16");
        assert_eq!(format_ratio_value(1.41421356), "1.4");
        assert_eq!(format_ratio_value(2.25), "2.3");
        // Rounds to a whole number: no trailing ".0"
        assert_eq!(format_ratio_value(3.96), "4");
    }

    #[test]
    fn test_effect_half_stops_use_interval_ending_at_anchor() {
        assert_eq!(Effect::for_stop(-2.5), Effect::VeryLightFill);
        assert_eq!(Effect::for_stop(-1.5), Effect::NaturalFill);
        assert_eq!(Effect::for_stop(-0.5), Effect::PerfectBalance);
        assert_eq!(Effect::for_stop(0.5), Effect::SlightlyDominantFlash);
        assert_eq!(Effect::for_stop(1.5), Effect::DominantFlash);
        assert_eq!(Effect::for_stop(2.5), Effect::VeryDominantFlash);
    }

    #[test]
    fn test_description_matches_effect() {
        for stop in slider_positions() {
            let result = compute_lighting_ratio(stop);
            assert_eq!(result.description, result.effect.description());
        }
    }

    #[test]
    fn test_percentages_sum_to_hundred() {
        for stop in slider_positions() {
            let result = compute_lighting_ratio(stop);
            let sum = result.flash_percent + result.ambient_percent;
            assert!((sum - 100.0).abs() < EPSILON, "stop {stop}: sum was {sum}");
        }
    }

    #[test]
    fn test_flash_percent_strictly_increasing() {
        let percents: Vec<f64> = slider_positions()
            .map(|stop| compute_lighting_ratio(stop).flash_percent)
            .collect();

        for pair in percents.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn test_deterministic() {
        for stop in slider_positions() {
            let first = compute_lighting_ratio(stop);
            let second = compute_lighting_ratio(stop);
            assert_eq!(first.flash_percent.to_bits(), second.flash_percent.to_bits());
            assert_eq!(first.ambient_percent.to_bits(), second.ambient_percent.to_bits());
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_rounded_percentages() {
        let result = compute_lighting_ratio(1.0);
        assert_eq!(result.flash_percent_rounded(), 67);
        assert_eq!(result.ambient_percent_rounded(), 33);

        let balanced = compute_lighting_ratio(0.0);
        assert_eq!(balanced.flash_percent_rounded(), 50);
    }

    #[test]
    fn test_out_of_domain_does_not_panic() {
        let far = compute_lighting_ratio(20.0);
        assert_eq!(far.ratio_text, "1048576:1");
        assert_eq!(far.effect, Effect::VeryDominantFlash);

        let nan = compute_lighting_ratio(f64::NAN);
        assert_eq!(nan.effect, Effect::PerfectBalance);
        assert_eq!(nan.ratio_text, "NaN:1");

        let huge = compute_lighting_ratio(f64::INFINITY);
        assert_eq!(huge.ratio_text, "inf:1");
    }

    #[test]
    fn test_effect_serializes_as_label() {
        let value = serde_json::to_value(compute_lighting_ratio(1.0)).unwrap();
        assert_eq!(value["ratio_text"], "2:1");
        assert_eq!(value["effect"], "Slightly dominant flash");

        let value = serde_json::to_value(compute_lighting_ratio(-3.0)).unwrap();
        assert_eq!(value["effect"], "Very light fill");
    }

    #[test]
    fn test_huge_ratio_is_not_truncated() {
        assert_eq!(
            compute_lighting_ratio(200.0).ratio_text,
            "1606938044258990275541962092341162602522202993782792835301376:1"
        );
        assert_eq!(compute_lighting_ratio(-130.0).ratio_text, format!("1:{:.0}", 2f64.powi(130)));
    }
}
