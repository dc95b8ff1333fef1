use iced::widget::{button, checkbox, column, container, pick_list, row, text, Space};
use iced::{Element, Length, Theme};

use spoofcheck_core::api::outcome::{ApiFailure, ApiOutcome, Verdict};
use spoofcheck_core::request::options::ModelVariant;

use crate::app::{scaled, App, CheckState, Message};
use crate::theme::tertiary_color;
use crate::widgets::{drop_zone, verdict_card};

pub fn view<'a>(app: &'a App, theme: &Theme) -> Element<'a, Message> {
    let fs = app.settings.font_scale;

    match &app.check {
        CheckState::Resolved(ApiOutcome::Verdict(verdict)) => verdict_pane(fs, verdict, theme),
        CheckState::Resolved(ApiOutcome::Failure(failure)) => failure_pane(fs, failure, theme),
        CheckState::Uploading { .. } => uploading_pane(fs, theme),
        CheckState::Idle => workflow_view(app, fs, theme),
    }
}

fn workflow_view<'a>(app: &'a App, fs: f32, theme: &Theme) -> Element<'a, Message> {
    let tertiary = tertiary_color(theme);

    let header = column![
        text("Upload a Photo").size(scaled(22.0, fs)).font(iced::Font {
            weight: iced::font::Weight::Bold,
            ..iced::Font::DEFAULT
        }),
        Space::new().height(4),
        text("Upload a photo and let the hosted model verify face spoofing.")
            .size(scaled(13.0, fs))
            .color(tertiary),
    ];

    let options = row![
        text("Model").size(scaled(13.0, fs)),
        pick_list(ModelVariant::ALL, Some(app.options.model), Message::ModelChanged)
            .text_size(scaled(13.0, fs)),
        Space::new().width(16),
        checkbox(app.options.binary)
            .label("Binary mode")
            .on_toggle(Message::BinaryToggled)
            .text_size(scaled(13.0, fs)),
    ]
    .spacing(12)
    .align_y(iced::Alignment::Center);

    let mut col = column![
        header,
        Space::new().height(16),
        options,
        Space::new().height(16),
        drop_zone::view(fs, app.drag_over, app.selected.as_ref(), theme),
    ];

    if let Some(notice) = app.intake_notice.as_deref() {
        let danger = theme.extended_palette().danger.base.color;
        col = col
            .push(Space::new().height(8))
            .push(text(notice.to_owned()).size(scaled(13.0, fs)).color(danger));
    }

    col = col.push(Space::new().height(16)).push(
        button(text("Run Anti-Spoof Check").size(scaled(15.0, fs)))
            .on_press_maybe(app.can_submit().then_some(Message::RunCheck))
            .padding([14, 24])
            .width(Length::Fill),
    );

    col.into()
}

fn uploading_pane<'a>(fs: f32, theme: &Theme) -> Element<'a, Message> {
    let tertiary = tertiary_color(theme);

    centered(
        column![
            text("Verifying Authenticity\u{2026}").size(scaled(18.0, fs)),
            Space::new().height(8),
            text("Your photo is being checked by the remote model.")
                .size(scaled(13.0, fs))
                .color(tertiary),
            Space::new().height(24),
            button(text("Cancel").size(scaled(13.0, fs)))
                .on_press(Message::CancelCheck)
                .padding([8, 20])
                .style(button::secondary),
        ]
        .align_x(iced::Alignment::Center)
        .width(320)
        .into(),
    )
}

fn verdict_pane<'a>(fs: f32, verdict: &Verdict, theme: &Theme) -> Element<'a, Message> {
    centered(
        column![
            verdict_card::view(fs, verdict, theme),
            Space::new().height(16),
            button(text("Close").size(scaled(14.0, fs)))
                .on_press(Message::DismissResult)
                .padding([14, 24])
                .width(Length::Fill),
            Space::new().height(10),
            button(text("Check Another Photo").size(scaled(14.0, fs)))
                .on_press(Message::SelectPhoto)
                .padding([14, 20])
                .width(Length::Fill)
                .style(button::secondary),
        ]
        .align_x(iced::Alignment::Center)
        .width(360)
        .into(),
    )
}

fn failure_pane<'a>(fs: f32, failure: &ApiFailure, theme: &Theme) -> Element<'a, Message> {
    let danger = theme.extended_palette().danger.base.color;
    let tertiary = tertiary_color(theme);

    centered(
        column![
            text("Check Failed").size(scaled(18.0, fs)).color(danger),
            Space::new().height(8),
            text(failure.error.clone())
                .size(scaled(14.0, fs))
                .color(tertiary),
            Space::new().height(24),
            button(text("Try Again").size(scaled(14.0, fs)))
                .on_press(Message::RunCheck)
                .padding([14, 24])
                .width(Length::Fill),
            Space::new().height(10),
            button(text("Close").size(scaled(14.0, fs)))
                .on_press(Message::DismissResult)
                .padding([14, 20])
                .width(Length::Fill)
                .style(button::secondary),
        ]
        .align_x(iced::Alignment::Center)
        .width(320)
        .into(),
    )
}

fn centered(content: Element<'_, Message>) -> Element<'_, Message> {
    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
