/// Common flash/ambient ratios
///
/// Static reference table shown as a grid of presets. Clicking one jumps
/// the calculator to its stop value; the entry matching the current stop
/// exactly is highlighted.

use serde::Serialize;

/// A well-known ratio with a hint on when to use it
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct NamedRatio {
    /// Ratio as written by photographers, e.g. "2:1"
    pub ratio_label: &'static str,
    /// Stop difference that produces this ratio
    pub stop_value: f64,
    pub short_description: &'static str,
    pub usage_hint: &'static str,
}

pub const COMMON_RATIOS: [NamedRatio; 6] = [
    NamedRatio {
        ratio_label: "1:4",
        stop_value: -2.0,
        short_description: "Light fill",
        usage_hint: "Open up the shadows",
    },
    NamedRatio {
        ratio_label: "1:2",
        stop_value: -1.0,
        short_description: "Natural fill",
        usage_hint: "Natural portrait, reportage",
    },
    NamedRatio {
        ratio_label: "1:1",
        stop_value: 0.0,
        short_description: "Balanced",
        usage_hint: "Perfect fill flash",
    },
    NamedRatio {
        ratio_label: "2:1",
        stop_value: 1.0,
        short_description: "Dominant flash",
        usage_hint: "Studio portrait, subject separated",
    },
    NamedRatio {
        ratio_label: "4:1",
        stop_value: 2.0,
        short_description: "Strong flash",
        usage_hint: "Dramatic effect, sports",
    },
    NamedRatio {
        ratio_label: "8:1",
        stop_value: 3.0,
        short_description: "Very strong flash",
        usage_hint: "High-speed sync, dark background",
    },
];

/// Find the preset whose stop value is exactly `stop`.
///
/// No tolerance: half-stop positions between presets select nothing.
pub fn preset_for_stop(stop: f64) -> Option<&'static NamedRatio> {
    COMMON_RATIOS.iter().find(|preset| preset.stop_value == stop)
}

/// Find a preset by its ratio label ("1:2", "4:1", ...)
pub fn preset_by_label(label: &str) -> Option<&'static NamedRatio> {
    let label = label.trim();
    COMMON_RATIOS.iter().find(|preset| preset.ratio_label == label)
}

/// Comma-separated list of the labels, for error messages
pub fn known_labels() -> String {
    COMMON_RATIOS
        .iter()
        .map(|preset| preset.ratio_label)
        .collect::<Vec<_>>()
        .join(", ")
}
