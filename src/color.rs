/// Colour helpers for the scene preview
///
/// The preview is described in HSL (hue in degrees, saturation and
/// lightness in percent) because lightness is what the flash/ambient
/// balance drives. Drawing code needs RGB, so this converts.

/// RGB colour with channels in 0.0..=1.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

/// HSL colour: hue in degrees, saturation and lightness in percent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
}

impl Hsl {
    pub const fn new(hue: f32, saturation: f32, lightness: f32) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    pub fn to_rgb(self) -> Rgb {
        hsl_to_rgb(self.hue, self.saturation, self.lightness)
    }
}

/// Convert HSL to RGB.
///
/// Saturation and lightness above 100% are clamped, the way CSS treats
/// them. Hue wraps around.
pub fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> Rgb {
    let hue = hue.rem_euclid(360.0);
    let sat = (saturation / 100.0).clamp(0.0, 1.0);
    let light = (lightness / 100.0).clamp(0.0, 1.0);

    let a = sat * light.min(1.0 - light);
    let f = |n: f32| -> f32 {
        let k = (n + hue / 30.0) % 12.0;
        light - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0)
    };

    Rgb {
        r: f(0.0),
        g: f(8.0),
        b: f(4.0),
    }
}

/// Linear interpolation between two colours (t in 0.0..=1.0)
pub fn lerp(from: Rgb, to: Rgb, t: f32) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    Rgb {
        r: from.r * (1.0 - t) + to.r * t,
        g: from.g * (1.0 - t) + to.g * t,
        b: from.b * (1.0 - t) + to.b * t,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.001;

    fn assert_rgb(actual: Rgb, r: f32, g: f32, b: f32) {
        assert!(
            (actual.r - r).abs() < EPSILON
                && (actual.g - g).abs() < EPSILON
                && (actual.b - b).abs() < EPSILON,
            "expected ({r}, {g}, {b}), got {actual:?}"
        );
    }

    #[test]
    fn test_primary_colors() {
        assert_rgb(hsl_to_rgb(0.0, 100.0, 50.0), 1.0, 0.0, 0.0);
        assert_rgb(hsl_to_rgb(120.0, 100.0, 50.0), 0.0, 1.0, 0.0);
        assert_rgb(hsl_to_rgb(240.0, 100.0, 50.0), 0.0, 0.0, 1.0);
    }

    #[test]
    fn test_grey_and_extremes() {
        assert_rgb(hsl_to_rgb(220.0, 0.0, 50.0), 0.5, 0.5, 0.5);
        assert_rgb(hsl_to_rgb(35.0, 90.0, 100.0), 1.0, 1.0, 1.0);
        assert_rgb(hsl_to_rgb(35.0, 90.0, 0.0), 0.0, 0.0, 0.0);
        // Lightness over 100% is clamped
        assert_rgb(hsl_to_rgb(35.0, 90.0, 120.0), 1.0, 1.0, 1.0);
    }

    #[test]
    fn test_hue_wraps() {
        assert_eq!(hsl_to_rgb(-120.0, 100.0, 50.0), hsl_to_rgb(240.0, 100.0, 50.0));
        assert_eq!(hsl_to_rgb(360.0, 100.0, 50.0), hsl_to_rgb(0.0, 100.0, 50.0));
    }

    #[test]
    fn test_lerp() {
        let black = Rgb { r: 0.0, g: 0.0, b: 0.0 };
        let white = Rgb { r: 1.0, g: 1.0, b: 1.0 };

        assert_rgb(lerp(black, white, 0.25), 0.25, 0.25, 0.25);
        assert_eq!(lerp(black, white, 2.0), white);
    }
}
