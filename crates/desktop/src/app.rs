use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::Receiver;
use iced::widget::{button, column, container, row, scrollable, text};
use iced::{Element, Length, Subscription, Task, Theme};

use spoofcheck_core::api::outcome::ApiOutcome;
use spoofcheck_core::intake::image_file::ImageFile;
use spoofcheck_core::request::options::{CheckOptions, ModelVariant};

use crate::settings::{Appearance, Settings};
use crate::tabs;
use crate::theme;
use crate::workers::check_worker::{self, CheckParams, WorkerMessage};

const WEBSITE_URL: &str = "https://abdullahsajid-antispoofing-test.hf.space/";

const WORKER_POLL_INTERVAL: Duration = Duration::from_millis(100);

// ---------------------------------------------------------------------------
// Tab enum
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Check,
    Appearance,
    About,
}

impl Tab {
    const ALL: &[Tab] = &[Tab::Check, Tab::Appearance, Tab::About];

    fn label(self) -> &'static str {
        match self {
            Tab::Check => "Check",
            Tab::Appearance => "Appearance",
            Tab::About => "About",
        }
    }
}

// ---------------------------------------------------------------------------
// Message
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub enum Message {
    TabSelected(Tab),
    OpenWebsite,
    SelectPhoto,
    PhotoSelected(Option<PathBuf>),
    FileDropped(PathBuf),
    DragOver(bool),
    ModelChanged(ModelVariant),
    BinaryToggled(bool),
    RunCheck,
    CancelCheck,
    PollWorker,
    DismissResult,
    AppearanceChanged(Appearance),
    HighContrastChanged(bool),
    FontScaleChanged(f32),
    PollSystemTheme,
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

/// The photo currently staged for a check.
#[derive(Debug, Clone)]
pub struct SelectedPhoto {
    pub path: PathBuf,
    pub file_name: String,
    pub preview: iced::widget::image::Handle,
}

/// Submission lifecycle: Idle -> Uploading -> Resolved -> Idle (on dismiss
/// or when a new photo replaces the old one).
pub enum CheckState {
    Idle,
    Uploading {
        rx: Receiver<WorkerMessage>,
        cancel: Arc<AtomicBool>,
    },
    Resolved(ApiOutcome),
}

pub struct App {
    active_tab: Tab,
    pub settings: Settings,
    pub selected: Option<SelectedPhoto>,
    pub options: CheckOptions,
    pub drag_over: bool,
    pub intake_notice: Option<String>,
    pub check: CheckState,
}

impl App {
    pub fn new() -> (Self, Task<Message>) {
        (
            Self {
                active_tab: Tab::Check,
                settings: Settings::load(),
                selected: None,
                options: CheckOptions::default(),
                drag_over: false,
                intake_notice: None,
                check: CheckState::Idle,
            },
            Task::none(),
        )
    }

    pub fn can_submit(&self) -> bool {
        self.selected.is_some() && matches!(self.check, CheckState::Idle)
    }

    pub fn is_uploading(&self) -> bool {
        matches!(self.check, CheckState::Uploading { .. })
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::TabSelected(tab) => {
                self.active_tab = tab;
            }
            Message::OpenWebsite => {
                let _ = open::that(WEBSITE_URL);
            }
            Message::SelectPhoto => {
                return Task::perform(
                    async {
                        rfd::AsyncFileDialog::new()
                            .set_title("Select a photo")
                            .add_filter("Images", &["png", "jpg", "jpeg"])
                            .pick_file()
                            .await
                            .map(|h| h.path().to_path_buf())
                    },
                    Message::PhotoSelected,
                );
            }
            Message::PhotoSelected(Some(path)) => {
                self.accept_photo(path);
            }
            Message::PhotoSelected(None) => {}
            Message::FileDropped(path) => {
                self.drag_over = false;
                self.accept_photo(path);
            }
            Message::DragOver(hovering) => {
                self.drag_over = hovering;
            }
            Message::ModelChanged(model) => {
                self.options.model = model;
            }
            Message::BinaryToggled(binary) => {
                self.options.binary = binary;
            }
            Message::RunCheck => {
                // One outstanding request at a time.
                if self.is_uploading() {
                    return Task::none();
                }
                let Some(photo) = &self.selected else {
                    return Task::none();
                };
                let (rx, cancel) = check_worker::spawn(CheckParams {
                    path: photo.path.clone(),
                    options: self.options,
                });
                self.check = CheckState::Uploading { rx, cancel };
            }
            Message::CancelCheck => {
                if let CheckState::Uploading { cancel, .. } = &self.check {
                    cancel.store(true, Ordering::Relaxed);
                    self.check = CheckState::Idle;
                }
            }
            Message::PollWorker => {
                self.drain_worker();
            }
            Message::DismissResult => {
                if let CheckState::Resolved(_) = self.check {
                    self.check = CheckState::Idle;
                }
            }
            Message::AppearanceChanged(appearance) => {
                self.settings.appearance = appearance;
                self.settings.save();
            }
            Message::HighContrastChanged(enabled) => {
                self.settings.high_contrast = enabled;
                self.settings.save();
            }
            Message::FontScaleChanged(scale) => {
                self.settings.font_scale = scale;
                self.settings.save();
            }
            Message::PollSystemTheme => {
                // Theme is resolved fresh in theme() on every render,
                // so just requesting a redraw is enough.
            }
        }
        Task::none()
    }

    /// Validate and stage a picked or dropped file. A rejection keeps the
    /// previous selection and surfaces the reason instead of logging only.
    fn accept_photo(&mut self, path: PathBuf) {
        match ImageFile::open(&path) {
            Ok(image) => {
                self.intake_notice = None;
                self.selected = Some(SelectedPhoto {
                    preview: iced::widget::image::Handle::from_path(&path),
                    file_name: image.file_name(),
                    path,
                });
                // A new photo discards a lingering result pane.
                if let CheckState::Resolved(_) = self.check {
                    self.check = CheckState::Idle;
                }
            }
            Err(e) => {
                log::warn!("rejected {}: {e}", path.display());
                self.intake_notice = Some(e.to_string());
            }
        }
    }

    fn drain_worker(&mut self) {
        let CheckState::Uploading { rx, .. } = &self.check else {
            return;
        };
        let mut resolved = None;
        while let Ok(msg) = rx.try_recv() {
            match msg {
                WorkerMessage::Resolved(outcome) => resolved = Some(CheckState::Resolved(outcome)),
                WorkerMessage::Error(e) => {
                    // Local failures (unreadable file, client build) travel
                    // the same presentation channel as server errors.
                    resolved = Some(CheckState::Resolved(ApiOutcome::Failure(
                        spoofcheck_core::api::outcome::ApiFailure { error: e },
                    )));
                }
                WorkerMessage::Cancelled => resolved = Some(CheckState::Idle),
            }
        }
        if let Some(state) = resolved {
            self.check = state;
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let fs = self.settings.font_scale;
        let theme = self.theme();

        // Tab bar
        let tab_bar = row(Tab::ALL
            .iter()
            .map(|&tab| {
                let label = text(tab.label()).size(scaled(13.0, fs));
                let btn = button(label)
                    .on_press(Message::TabSelected(tab))
                    .padding([6, 14]);
                if tab == self.active_tab {
                    btn.style(button::primary).into()
                } else {
                    btn.style(button::text).into()
                }
            })
            .collect::<Vec<_>>())
        .spacing(2);

        // Tab content
        let content: Element<'_, Message> = match self.active_tab {
            Tab::Check => tabs::check_tab::view(self, &theme),
            Tab::Appearance => tabs::appearance_tab::view(&self.settings),
            Tab::About => tabs::about_tab::view(fs),
        };

        let tab_content = container(scrollable(content).height(Length::Fill))
            .padding(16)
            .height(Length::Fill);

        // Footer
        let footer = container(
            button(text("Powered by a hosted anti-spoofing model").size(scaled(11.0, fs)))
                .on_press(Message::OpenWebsite)
                .style(button::text),
        )
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding([4, 0]);

        column![tab_bar, tab_content, footer]
            .spacing(0)
            .height(Length::Fill)
            .into()
    }

    pub fn theme(&self) -> Theme {
        theme::resolve_theme(self.settings.appearance, self.settings.high_contrast)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions = vec![iced::event::listen_with(handle_event)];

        if self.is_uploading() {
            subscriptions.push(iced::time::every(WORKER_POLL_INTERVAL).map(|_| Message::PollWorker));
        }
        if self.settings.appearance == Appearance::System {
            subscriptions
                .push(iced::time::every(Duration::from_secs(2)).map(|_| Message::PollSystemTheme));
        }

        Subscription::batch(subscriptions)
    }
}

fn handle_event(
    event: iced::Event,
    _status: iced::event::Status,
    _window: iced::window::Id,
) -> Option<Message> {
    match event {
        iced::Event::Window(iced::window::Event::FileDropped(path)) => {
            Some(Message::FileDropped(path))
        }
        iced::Event::Window(iced::window::Event::FileHovered(path)) => {
            // Only light up the drop zone for files the drop would accept.
            Some(Message::DragOver(
                spoofcheck_core::intake::image_file::has_allowed_extension(&path),
            ))
        }
        iced::Event::Window(iced::window::Event::FilesHoveredLeft) => Some(Message::DragOver(false)),
        _ => None,
    }
}

/// Scale a base font size by the user's font_scale setting.
pub fn scaled(base: f32, font_scale: f32) -> f32 {
    (base * font_scale).round()
}
