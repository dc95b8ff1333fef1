use iced::widget::{button, column, text, Space};
use iced::Element;

use crate::app::{scaled, Message};

pub fn view(fs: f32) -> Element<'static, Message> {
    let version = env!("CARGO_PKG_VERSION");

    column![
        text("SpoofCheck").size(scaled(22.0, fs)),
        Space::new().height(4),
        text(format!("Version {version}")).size(scaled(13.0, fs)),
        Space::new().height(12),
        text(
            "Checks whether a photo shows a live face or a spoofed \
             presentation (a printed photo or a screen). Classification runs \
             on a hosted model; photos are sent to that service and nothing \
             is stored locally."
        )
        .size(scaled(13.0, fs)),
        Space::new().height(16),
        button(text("Open the service page").size(scaled(13.0, fs)))
            .on_press(Message::OpenWebsite)
            .padding([8, 16]),
    ]
    .spacing(0)
    .into()
}
