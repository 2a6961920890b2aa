/// Lighting ratio module
///
/// This module handles the numeric side of the calculator:
/// - The stop-difference to ratio transform (calculator.rs)
/// - The table of common named ratios (presets.rs)

pub mod calculator;
pub mod presets;

pub use calculator::{compute_lighting_ratio, format_ratio_value, Effect, LightingResult};
pub use presets::{preset_by_label, preset_for_stop, NamedRatio, COMMON_RATIOS};
