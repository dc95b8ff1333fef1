use iced::widget::{column, container, text, Space};
use iced::{Element, Length, Theme};

use spoofcheck_core::api::outcome::Verdict;

use crate::app::{scaled, Message};
use crate::theme::tertiary_color;

/// Success card: winning class with confidence, model metadata and the full
/// classification breakdown.
pub fn view(fs: f32, verdict: &Verdict, theme: &Theme) -> Element<'static, Message> {
    let success = theme.extended_palette().success.base.color;
    let tertiary = tertiary_color(theme);

    let mut col = column![
        text(verdict.headline())
            .size(scaled(17.0, fs))
            .color(success)
            .font(iced::Font {
                weight: iced::font::Weight::Bold,
                ..iced::Font::DEFAULT
            }),
        Space::new().height(12),
        text("Model Details").size(scaled(14.0, fs)).font(iced::Font {
            weight: iced::font::Weight::Bold,
            ..iced::Font::DEFAULT
        }),
        Space::new().height(4),
        text(format!("Mode: {}", verdict.mode)).size(scaled(13.0, fs)),
        text(format!("Model: {}", verdict.model)).size(scaled(13.0, fs)),
        Space::new().height(12),
        text("Classification Details")
            .size(scaled(14.0, fs))
            .font(iced::Font {
                weight: iced::font::Weight::Bold,
                ..iced::Font::DEFAULT
            }),
        Space::new().height(4),
    ];

    for (label, pct) in verdict.breakdown() {
        col = col.push(
            text(format!("{label}: {pct}"))
                .size(scaled(13.0, fs))
                .color(tertiary),
        );
    }

    container(col)
        .padding([18, 20])
        .width(Length::Fill)
        .style(container::rounded_box)
        .into()
}
