/// Calculator widgets
///
/// - distribution.rs - ambient/flash share bar
/// - preview.rs - illustrative scene canvas

pub mod distribution;
pub mod preview;

use iced::Color;

use flash_ratio::color::Rgb;
use flash_ratio::state::Tone;

/// Flash orange (#FB9936)
pub const FLASH_COLOR: Color = Color::from_rgb(0xFB as f32 / 255.0, 0x99 as f32 / 255.0, 0x36 as f32 / 255.0);
/// Ambient blue (#3182CE)
pub const AMBIENT_COLOR: Color = Color::from_rgb(0x31 as f32 / 255.0, 0x82 as f32 / 255.0, 0xCE as f32 / 255.0);
/// Balanced green (#38A169)
pub const BALANCED_COLOR: Color = Color::from_rgb(0x38 as f32 / 255.0, 0xA1 as f32 / 255.0, 0x69 as f32 / 255.0);

/// Colour of the stop badge for whichever source is stronger
pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Flash => FLASH_COLOR,
        Tone::Ambient => AMBIENT_COLOR,
        Tone::Balanced => BALANCED_COLOR,
    }
}

pub fn to_color(rgb: Rgb) -> Color {
    Color::from_rgb(rgb.r, rgb.g, rgb.b)
}
