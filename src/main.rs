use clap::Parser;
use iced::widget::{
    button, canvas, column, container, row, scrollable, slider, text, Column, Row,
};
use iced::{Alignment, Element, Length, Task, Theme};

use flash_ratio::error::Result;
use flash_ratio::preview::Scene;
use flash_ratio::ratio::{preset_by_label, COMMON_RATIOS};
use flash_ratio::{RatioError, Session, StopDifference};

mod ui;

/// Flash/ambient lighting ratio calculator
#[derive(Parser, Debug)]
#[command(name = "flash-ratio")]
#[command(version, about = "Balance your flash with the ambient light", long_about = None)]
struct Cli {
    /// Starting stop difference, flash minus ambient (-3 to +4, half stops)
    #[arg(short, long, value_name = "STOPS", allow_negative_numbers = true)]
    stops: Option<StopDifference>,

    /// Start from a common ratio instead (e.g. 1:2, 4:1)
    #[arg(short, long, value_name = "RATIO", conflicts_with = "stops")]
    ratio: Option<String>,

    /// Print the result and exit instead of opening the window
    #[arg(long)]
    report: bool,

    /// Print the report as JSON (implies --report)
    #[arg(long)]
    json: bool,

    /// Print the table of common ratios and exit
    #[arg(long)]
    presets: bool,
}

impl Cli {
    /// Resolve the starting stop from --stops / --ratio
    fn initial_stop(&self) -> Result<StopDifference> {
        if let Some(label) = &self.ratio {
            let preset =
                preset_by_label(label).ok_or_else(|| RatioError::UnknownRatio(label.clone()))?;
            return Ok(StopDifference::new(preset.stop_value));
        }

        Ok(self.stops.unwrap_or_default())
    }
}

/// Main application state
struct FlashRatio {
    /// The current stop difference and everything derived from it
    session: Session,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// The slider moved
    StopChanged(f64),
    /// User clicked one of the common ratios (index into COMMON_RATIOS)
    PresetSelected(usize),
    /// Back to 1:1
    Reset,
}

impl FlashRatio {
    fn new(initial: StopDifference) -> (Self, Task<Message>) {
        let session = Session::new(initial);
        let result = session.result();

        println!(
            "📸 Flash ratio calculator started at {} ({})",
            initial.badge_text(),
            result.ratio_text
        );

        (FlashRatio { session }, Task::none())
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::StopChanged(value) => {
                self.session.set_stop(value);
            }
            Message::PresetSelected(index) => {
                if let Some(preset) = COMMON_RATIOS.get(index) {
                    self.session.select_preset(preset);
                    println!(
                        "🎯 Preset {} selected ({})",
                        preset.ratio_label,
                        self.session.stop().badge_text()
                    );
                }
            }
            Message::Reset => {
                self.session.reset();
            }
        }

        Task::none()
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let stop = self.session.stop();
        let result = self.session.result();
        let tone = ui::tone_color(stop.tone());

        let header = column![
            text("Flash/Ambient Ratio Calculator").size(28),
            text("Balance your flash with the ambient light").size(14),
        ]
        .spacing(4)
        .align_x(Alignment::Center);

        let slider_row = column![
            row![
                text("Flash power vs ambient").size(14).width(Length::Fill),
                text(stop.badge_text()).size(18).color(tone),
                button("Reset").on_press(Message::Reset).padding([4, 10]),
            ]
            .spacing(12)
            .align_y(Alignment::Center),
            slider(
                StopDifference::MIN..=StopDifference::MAX,
                stop.value(),
                Message::StopChanged,
            )
            .step(StopDifference::STEP),
            row![
                text("Ambient +3").size(12).width(Length::Fill),
                text("Balanced").size(12),
                container(text("Flash +4").size(12))
                    .width(Length::Fill)
                    .align_x(Alignment::End),
            ],
        ]
        .spacing(8);

        let summary = container(
            column![
                row![
                    column![text("Ratio").size(14), text(result.ratio_text.clone()).size(36)]
                        .align_x(Alignment::Center),
                    column![
                        text("Effect").size(14),
                        text(result.effect_label()).size(22).color(ui::FLASH_COLOR),
                    ]
                    .align_x(Alignment::Center),
                ]
                .spacing(32)
                .align_y(Alignment::Center),
                text(result.description).size(14),
            ]
            .spacing(12)
            .align_x(Alignment::Center),
        )
        .padding(16)
        .width(Length::Fill)
        .style(container::rounded_box);

        let distribution = column![
            text("Light distribution").size(14),
            canvas(ui::distribution::Distribution::new(&result))
                .width(Length::Fill)
                .height(Length::Fixed(80.0)),
        ]
        .spacing(8);

        let preview = column![
            text("Effect preview").size(14),
            canvas(ui::preview::ScenePreview {
                scene: Scene::from_result(&result),
            })
            .width(Length::Fill)
            .height(Length::Fixed(120.0)),
            row![
                text("Background (ambient)").size(12).width(Length::Fill),
                text("Subject (flash)").size(12),
                container(text("Background (ambient)").size(12))
                    .width(Length::Fill)
                    .align_x(Alignment::End),
            ],
        ]
        .spacing(8);

        let content: Column<Message> = column![
            header,
            slider_row,
            summary,
            distribution,
            preview,
            column![text("Common ratios").size(14), self.presets_grid()].spacing(8),
        ]
        .spacing(24)
        .padding(24)
        .max_width(900.0);

        scrollable(container(content).width(Length::Fill).center_x(Length::Fill)).into()
    }

    /// Grid of common ratios; the one matching the current stop is highlighted
    fn presets_grid(&self) -> Element<Message> {
        let cards = COMMON_RATIOS.iter().enumerate().map(|(index, preset)| {
            let style: fn(&Theme, button::Status) -> button::Style =
                if self.session.is_selected(preset) {
                    button::primary
                } else {
                    button::secondary
                };

            Element::from(button(
                column![
                    text(preset.ratio_label).size(20),
                    text(preset.short_description).size(14),
                    text(preset.usage_hint).size(12),
                ]
                .spacing(2),
            )
            .on_press(Message::PresetSelected(index))
            .padding(12)
            .width(Length::Fixed(260.0))
            .style(style))
        });

        Row::with_children(cards).spacing(8).wrap().into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Print the result for `stop` to stdout
fn print_report(stop: StopDifference, as_json: bool) -> Result<()> {
    let report = Session::new(stop).report();

    if as_json {
        println!("{}", report.to_json()?);
        return Ok(());
    }

    let result = &report.result;
    println!("Stops:    {}", report.badge);
    println!("Ratio:    {}", result.ratio_text);
    println!(
        "Light:    {}% flash / {}% ambient",
        result.flash_percent_rounded(),
        result.ambient_percent_rounded()
    );
    println!("Effect:   {}", result.effect_label());
    println!("          {}", result.description);
    if let Some(preset) = report.preset {
        println!("Preset:   {} - {} ({})", preset.ratio_label, preset.short_description, preset.usage_hint);
    }

    Ok(())
}

fn print_presets(as_json: bool) -> Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(&COMMON_RATIOS)?);
        return Ok(());
    }

    for preset in COMMON_RATIOS.iter() {
        println!(
            "{:>4}  {:>8}  {:<18} {}",
            preset.ratio_label,
            StopDifference::new(preset.stop_value).badge_text(),
            preset.short_description,
            preset.usage_hint
        );
    }

    Ok(())
}

fn run(cli: Cli) -> Result<bool> {
    if cli.presets {
        print_presets(cli.json)?;
        return Ok(true);
    }

    let initial = cli.initial_stop()?;

    if cli.report || cli.json {
        print_report(initial, cli.json)?;
        return Ok(true);
    }

    let launched = iced::application("Flash Ratio", FlashRatio::update, FlashRatio::view)
        .theme(FlashRatio::theme)
        .centered()
        .run_with(move || FlashRatio::new(initial));

    if let Err(e) = launched {
        eprintln!("⚠️  Window error: {}", e);
        return Ok(false);
    }

    Ok(true)
}

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_stops_flag() {
        let cli = Cli::try_parse_from(["flash-ratio", "--stops", "-1.5", "--report"]).unwrap();
        assert_eq!(cli.initial_stop().unwrap().value(), -1.5);
        assert!(cli.report);
    }

    #[test]
    fn test_ratio_flag() {
        let cli = Cli::try_parse_from(["flash-ratio", "--ratio", "4:1"]).unwrap();
        assert_eq!(cli.initial_stop().unwrap().value(), 2.0);

        let unknown = Cli::try_parse_from(["flash-ratio", "--ratio", "3:1"]).unwrap();
        assert!(matches!(unknown.initial_stop(), Err(RatioError::UnknownRatio(_))));
    }

    #[test]
    fn test_stops_and_ratio_conflict() {
        assert!(Cli::try_parse_from(["flash-ratio", "-s", "1", "-r", "2:1"]).is_err());
    }

    #[test]
    fn test_invalid_stops_rejected() {
        assert!(Cli::try_parse_from(["flash-ratio", "--stops", "lots"]).is_err());
    }

    #[test]
    fn test_default_starts_balanced() {
        let cli = Cli::try_parse_from(["flash-ratio"]).unwrap();
        assert_eq!(cli.initial_stop().unwrap(), StopDifference::default());
    }

    #[test]
    fn test_preset_message_moves_slider() {
        let (mut app, _) = FlashRatio::new(StopDifference::default());
        let _ = app.update(Message::PresetSelected(5));
        assert_eq!(app.session.result().ratio_text, "8:1");

        // Out-of-range index is ignored
        let _ = app.update(Message::PresetSelected(42));
        assert_eq!(app.session.stop().value(), 3.0);

        let _ = app.update(Message::StopChanged(0.5));
        assert!(app.session.selected_preset().is_none());

        let _ = app.update(Message::Reset);
        assert_eq!(app.session.result().ratio_text, "1:1");
    }
}
