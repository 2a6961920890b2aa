/// Light distribution bar
/// Ambient share on the left, flash share on the right
use iced::alignment;
use iced::widget::canvas::{self, Text};
use iced::{Color, Pixels, Point, Rectangle, Size};

use flash_ratio::LightingResult;

use super::{AMBIENT_COLOR, FLASH_COLOR};
use crate::Message;

/// Each side stays wide enough for its label
const MIN_SEGMENT_WIDTH: f32 = 60.0;

/// Distribution bar data
#[derive(Debug, Clone)]
pub struct Distribution {
    pub ambient_percent: f64,
    pub ambient_label: i64,
    pub flash_label: i64,
}

impl Distribution {
    pub fn new(result: &LightingResult) -> Self {
        Self {
            ambient_percent: result.ambient_percent,
            ambient_label: result.ambient_percent_rounded(),
            flash_label: result.flash_percent_rounded(),
        }
    }
}

/// Split `width` into (ambient, flash) segment widths.
///
/// Proportional to the ambient share, except that neither side shrinks
/// below `min` when there is room for both.
pub fn split_widths(width: f32, ambient_percent: f32, min: f32) -> (f32, f32) {
    let ambient = (width * ambient_percent / 100.0).clamp(0.0, width);

    if width < min * 2.0 {
        return (ambient, width - ambient);
    }

    let ambient = ambient.clamp(min, width - min);
    (ambient, width - ambient)
}

impl canvas::Program<Message> for Distribution {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        let height = bounds.height;
        let (ambient_width, flash_width) =
            split_widths(bounds.width, self.ambient_percent as f32, MIN_SEGMENT_WIDTH);

        frame.fill_rectangle(Point::ORIGIN, Size::new(ambient_width, height), AMBIENT_COLOR);
        frame.fill_rectangle(
            Point::new(ambient_width, 0.0),
            Size::new(flash_width, height),
            FLASH_COLOR,
        );

        let segments = [
            (ambient_width / 2.0, self.ambient_label, "Ambient"),
            (ambient_width + flash_width / 2.0, self.flash_label, "Flash"),
        ];

        for (center_x, percent, name) in segments {
            frame.fill_text(Text {
                content: format!("{}%", percent),
                position: Point::new(center_x, height / 2.0 - 10.0),
                color: Color::WHITE,
                size: Pixels(18.0),
                horizontal_alignment: alignment::Horizontal::Center,
                vertical_alignment: alignment::Vertical::Center,
                ..Text::default()
            });
            frame.fill_text(Text {
                content: name.to_string(),
                position: Point::new(center_x, height / 2.0 + 12.0),
                color: Color::WHITE,
                size: Pixels(12.0),
                horizontal_alignment: alignment::Horizontal::Center,
                vertical_alignment: alignment::Vertical::Center,
                ..Text::default()
            });
        }

        vec![frame.into_geometry()]
    }
}
