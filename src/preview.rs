/// Scene preview derived from a lighting result
///
/// A simplified portrait: a background lit only by the ambient light and a
/// subject lit by the flash. The brighter each source, the lighter its
/// part of the scene. Drawing lives in `ui::preview`; this module only
/// computes colours and sizes so it can be tested without a renderer.

use crate::color::{lerp, Hsl, Rgb};
use crate::ratio::LightingResult;

/// Cool blue of the ambient-lit background
pub const AMBIENT_HUE: f32 = 220.0;
/// Warm orange of the flash
pub const FLASH_HUE: f32 = 35.0;

/// Horizontal gradient positions: background, flash hot spot, background
const GRADIENT_OFFSETS: [f32; 5] = [0.0, 0.4, 0.5, 0.6, 1.0];

/// Colours and sizes of the preview scene
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scene {
    /// Background, lit by the ambient light
    pub background: Hsl,
    /// Centre of the background gradient, where the flash spills
    pub hot_spot: Hsl,
    /// The subject silhouette, lit by the flash
    pub subject: Hsl,
    /// Blur radius of the glow around the subject, in pixels
    pub glow_radius: f32,
}

impl Scene {
    pub fn from_result(result: &LightingResult) -> Self {
        let ambient = result.ambient_percent as f32;
        let flash = result.flash_percent as f32;

        Self {
            background: Hsl::new(AMBIENT_HUE, 50.0, 30.0 + ambient * 0.3),
            hot_spot: Hsl::new(FLASH_HUE, 90.0, 40.0 + flash * 0.4),
            subject: Hsl::new(FLASH_HUE, 60.0, 45.0 + flash * 0.35),
            glow_radius: (20.0 + result.stop_diff as f32 * 5.0).max(0.0),
        }
    }

    /// Gradient stops (offset, colour) across the width of the scene
    pub fn gradient(&self) -> [(f32, Rgb); 5] {
        let background = self.background.to_rgb();
        let hot_spot = self.hot_spot.to_rgb();
        let [left, shoulder, centre, shoulder_right, right] = GRADIENT_OFFSETS;

        [
            (left, background),
            (shoulder, background),
            (centre, hot_spot),
            (shoulder_right, background),
            (right, background),
        ]
    }

    /// Colour of the gradient at horizontal position `x` (0.0..=1.0)
    pub fn color_at(&self, x: f32) -> Rgb {
        let stops = self.gradient();
        let x = x.clamp(0.0, 1.0);

        for pair in stops.windows(2) {
            let (start, from) = pair[0];
            let (end, to) = pair[1];
            if x <= end {
                let t = if end > start { (x - start) / (end - start) } else { 0.0 };
                return lerp(from, to, t);
            }
        }

        stops[stops.len() - 1].1
    }
}
