use iced::mouse::Cursor;
use iced::widget::canvas::{self, Path, Program};
use iced::{Point, Rectangle, Renderer, Size, Theme};

use flash_ratio::color::Rgb;
use flash_ratio::preview::Scene;

use super::to_color;
use crate::Message;

/// Number of vertical strips used to approximate the background gradient
const GRADIENT_STRIPS: usize = 120;

/// Subject silhouette size (a capsule)
const SUBJECT_WIDTH: f32 = 60.0;
const SUBJECT_HEIGHT: f32 = 80.0;

/// Concentric rings used to fake the glow blur
const GLOW_RINGS: usize = 8;

/// Canvas that paints the preview scene: ambient-lit background with the
/// flash hot spot in the middle, and the flash-lit subject on top
pub struct ScenePreview {
    pub scene: Scene,
}

impl Program<Message> for ScenePreview {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        // Background gradient, drawn as thin strips
        let strip_width = bounds.width / GRADIENT_STRIPS as f32;
        for i in 0..GRADIENT_STRIPS {
            let x = i as f32 * strip_width;
            let position = (i as f32 + 0.5) / GRADIENT_STRIPS as f32;
            frame.fill_rectangle(
                Point::new(x, 0.0),
                // Overlap by a pixel so no seams show between strips
                Size::new(strip_width + 1.0, bounds.height),
                to_color(self.scene.color_at(position)),
            );
        }

        let center = frame.center();
        let glow = self.scene.glow_radius;
        let glow_color = self.scene.hot_spot.to_rgb();

        // Glow: fading rings from the silhouette outwards
        if glow > 0.0 {
            for ring in (1..=GLOW_RINGS).rev() {
                let spread = glow * ring as f32 / GLOW_RINGS as f32;
                let alpha = 0.25 * (1.0 - ring as f32 / (GLOW_RINGS as f32 + 1.0));
                let path = capsule(center, SUBJECT_WIDTH + spread * 2.0, SUBJECT_HEIGHT + spread * 2.0);
                frame.fill(&path, with_alpha(glow_color, alpha));
            }
        }

        let subject = capsule(center, SUBJECT_WIDTH, SUBJECT_HEIGHT);
        frame.fill(&subject, to_color(self.scene.subject.to_rgb()));

        vec![frame.into_geometry()]
    }
}

/// Vertical capsule (stadium) centred on `center`
fn capsule(center: Point, width: f32, height: f32) -> Path {
    let radius = width / 2.0;
    let straight = (height - width).max(0.0);

    Path::new(|builder| {
        builder.circle(Point::new(center.x, center.y - straight / 2.0), radius);
        builder.circle(Point::new(center.x, center.y + straight / 2.0), radius);
        if straight > 0.0 {
            builder.rectangle(
                Point::new(center.x - radius, center.y - straight / 2.0),
                Size::new(width, straight),
            );
        }
    })
}

fn with_alpha(rgb: Rgb, alpha: f32) -> iced::Color {
    iced::Color::from_rgba(rgb.r, rgb.g, rgb.b, alpha)
}
