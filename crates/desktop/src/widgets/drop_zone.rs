use iced::border::Border;
use iced::widget::{button, column, container, svg, text, Space};
use iced::{Color, Element, Length, Theme};

use crate::app::{scaled, Message, SelectedPhoto};
use crate::theme::{surface_color, tertiary_color};

const PREVIEW_SIDE: f32 = 250.0;

/// Drop target for the photo. Shows a preview of the staged photo once one
/// is accepted; highlights while a file is dragged over the window.
pub fn view(
    fs: f32,
    drag_over: bool,
    selected: Option<&SelectedPhoto>,
    theme: &Theme,
) -> Element<'static, Message> {
    let palette = theme.extended_palette();
    let accent = palette.primary.base.color;
    let tertiary = tertiary_color(theme);

    let inner: Element<'static, Message> = match selected {
        Some(photo) => preview(fs, photo, tertiary),
        None => prompt(fs, drag_over, accent, tertiary),
    };

    let base_border = Color {
        a: 0.20,
        ..palette.background.base.text
    };
    let base_background = surface_color(theme);

    container(container(inner).width(Length::Fill).center_x(Length::Fill))
        .padding([40, 40])
        .width(Length::Fill)
        .style(move |_theme: &Theme| {
            let (border_color, background) = if drag_over {
                (Color { a: 0.50, ..accent }, Color { a: 0.06, ..accent })
            } else {
                (base_border, base_background)
            };
            container::Style {
                background: Some(iced::Background::Color(background)),
                border: Border {
                    color: border_color,
                    width: 2.0,
                    radius: 16.0.into(),
                },
                ..container::Style::default()
            }
        })
        .into()
}

fn preview(fs: f32, photo: &SelectedPhoto, tertiary: Color) -> Element<'static, Message> {
    column![
        iced::widget::image(photo.preview.clone())
            .width(PREVIEW_SIDE)
            .height(PREVIEW_SIDE),
        Space::new().height(10),
        text(photo.file_name.clone()).size(scaled(13.0, fs)),
        Space::new().height(4),
        text("Drop another photo to replace it")
            .size(scaled(12.0, fs))
            .color(tertiary),
    ]
    .align_x(iced::Alignment::Center)
    .into()
}

fn prompt(fs: f32, drag_over: bool, accent: Color, tertiary: Color) -> Element<'static, Message> {
    let upload_icon = svg(svg::Handle::from_memory(
        include_bytes!("../../assets/upload.svg").as_slice(),
    ))
    .width(24)
    .height(24)
    .style(move |_theme: &Theme, _status| svg::Style {
        color: Some(accent),
    });

    let icon_circle = container(upload_icon)
        .width(scaled(56.0, fs))
        .height(scaled(56.0, fs))
        .center_x(scaled(56.0, fs))
        .center_y(scaled(56.0, fs))
        .style(move |_theme: &Theme| container::Style {
            background: Some(iced::Background::Color(Color { a: 0.12, ..accent })),
            border: Border {
                radius: 100.0.into(),
                ..Border::default()
            },
            ..container::Style::default()
        });

    let headline = if drag_over {
        "Drop the photo to stage it"
    } else {
        "Drop a photo here to get started"
    };

    column![
        icon_circle,
        Space::new().height(16),
        text(headline).size(scaled(17.0, fs)).font(iced::Font {
            weight: iced::font::Weight::Bold,
            ..iced::Font::DEFAULT
        }),
        Space::new().height(6),
        text("or click to browse your computer")
            .size(scaled(14.0, fs))
            .color(tertiary),
        Space::new().height(20),
        button(text("Browse Files").size(scaled(14.0, fs)))
            .on_press(Message::SelectPhoto)
            .padding([10, 24]),
        Space::new().height(16),
        text("PNG, JPG, JPEG")
            .size(scaled(12.0, fs))
            .color(tertiary),
    ]
    .align_x(iced::Alignment::Center)
    .into()
}
