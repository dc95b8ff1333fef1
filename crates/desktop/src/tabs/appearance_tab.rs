use iced::widget::{checkbox, column, pick_list, row, slider, text, Space};
use iced::Element;

use crate::app::{scaled, Message};
use crate::settings::{Appearance, Settings};

pub fn view<'a>(settings: &Settings) -> Element<'a, Message> {
    let fs = settings.font_scale;

    let theme_control: Element<'a, Message> = pick_list(
        Appearance::ALL,
        Some(settings.appearance),
        Message::AppearanceChanged,
    )
    .text_size(scaled(13.0, fs))
    .into();

    let contrast_control: Element<'a, Message> = checkbox(settings.high_contrast)
        .label("Boost contrast for readability")
        .on_toggle(Message::HighContrastChanged)
        .text_size(scaled(13.0, fs))
        .into();

    // Narrow slider so the row fits the default window width.
    let font_control: Element<'a, Message> = row![
        slider(0.8..=1.4, settings.font_scale, Message::FontScaleChanged)
            .step(0.1)
            .width(180),
        text(format!("{:.0}%", settings.font_scale * 100.0)).size(scaled(13.0, fs)),
    ]
    .spacing(10)
    .align_y(iced::Alignment::Center)
    .into();

    column![
        text("Presentation").size(scaled(16.0, fs)),
        Space::new().height(12),
        setting_row(fs, "Theme", theme_control),
        Space::new().height(10),
        setting_row(fs, "Contrast", contrast_control),
        Space::new().height(10),
        setting_row(fs, "Font size", font_control),
    ]
    .spacing(0)
    .into()
}

fn setting_row<'a>(fs: f32, label: &'a str, control: Element<'a, Message>) -> Element<'a, Message> {
    row![text(label).size(scaled(13.0, fs)).width(90), control]
        .spacing(12)
        .align_y(iced::Alignment::Center)
        .into()
}
