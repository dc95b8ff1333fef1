use iced::color;
use iced::theme::Palette;
use iced::{Color, Theme};

use crate::settings::Appearance;

/// Resolve the iced Theme from appearance + high_contrast settings.
pub fn resolve_theme(appearance: Appearance, high_contrast: bool) -> Theme {
    let is_dark = match appearance {
        Appearance::Dark => true,
        Appearance::Light => false,
        Appearance::System => detect_system_dark_mode(),
    };

    let palette = match (is_dark, high_contrast) {
        (true, false) => dark_palette(),
        (false, false) => light_palette(),
        (true, true) => high_contrast_dark_palette(),
        (false, true) => high_contrast_light_palette(),
    };

    Theme::custom("SpoofCheck", palette)
}

/// Secondary text color derived from the active palette.
pub fn tertiary_color(theme: &Theme) -> Color {
    let base = theme.extended_palette().background.base.text;
    Color { a: 0.55, ..base }
}

/// Card/panel background slightly offset from the window background.
pub fn surface_color(theme: &Theme) -> Color {
    let palette = theme.extended_palette();
    if palette.is_dark {
        Color {
            a: 0.05,
            ..Color::WHITE
        }
    } else {
        Color {
            a: 0.04,
            ..Color::BLACK
        }
    }
}

fn dark_palette() -> Palette {
    Palette {
        background: color!(0x1b, 0x1b, 0x1f),
        text: color!(0xd0, 0xd0, 0xd4),
        primary: color!(0x4d, 0x9a, 0xf0),
        success: color!(0x2e, 0xc9, 0x5c),
        warning: color!(0xff, 0xc5, 0x07),
        danger: color!(0xf5, 0x47, 0x3d),
    }
}

fn light_palette() -> Palette {
    Palette {
        background: color!(0xf6, 0xf6, 0xf8),
        text: color!(0x1e, 0x1e, 0x21),
        primary: color!(0x2f, 0x74, 0xe8),
        success: color!(0x16, 0xa3, 0x4a),
        warning: color!(0xf5, 0x9e, 0x0b),
        danger: color!(0xe1, 0x35, 0x2c),
    }
}

fn high_contrast_dark_palette() -> Palette {
    Palette {
        background: color!(0x00, 0x00, 0x00),
        text: color!(0xff, 0xff, 0xff),
        primary: color!(0x70, 0xb5, 0xff),
        success: color!(0x2e, 0xc9, 0x5c),
        warning: color!(0xff, 0xd4, 0x0a),
        danger: color!(0xff, 0x4d, 0x42),
    }
}

fn high_contrast_light_palette() -> Palette {
    Palette {
        background: color!(0xff, 0xff, 0xff),
        text: color!(0x00, 0x00, 0x00),
        primary: color!(0x00, 0x4e, 0xc9),
        success: color!(0x1e, 0x7e, 0x38),
        warning: color!(0xa8, 0x5a, 0x00),
        danger: color!(0xc9, 0x00, 0x12),
    }
}

fn detect_system_dark_mode() -> bool {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
            .map(|o| {
                String::from_utf8_lossy(&o.stdout)
                    .trim()
                    .eq_ignore_ascii_case("dark")
            })
            .unwrap_or(true)
    }
    #[cfg(not(target_os = "macos"))]
    {
        true
    }
}
