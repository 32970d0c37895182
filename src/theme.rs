//! Theme preference, system color-scheme resolution and palettes

use ratatui::style::Color;

use crate::models::{ResolvedTheme, ThemePreference};

/// Platform-level "prefers dark" signal, read on demand
pub trait ColorSchemeSignal: Send {
    fn prefers_dark(&self) -> bool;
}

/// Reads the terminal background hint from `COLORFGBG` ("fg;bg")
///
/// Background indices 7 and 9-15 are light; everything else, including a
/// missing or unparsable value, counts as dark.
#[derive(Clone, Copy, Debug, Default)]
pub struct TerminalColorScheme;

impl TerminalColorScheme {
    pub fn parse(colorfgbg: &str) -> bool {
        let background = colorfgbg
            .rsplit(';')
            .next()
            .and_then(|bg| bg.trim().parse::<u8>().ok());

        match background {
            Some(7) | Some(9..=15) => false,
            _ => true,
        }
    }
}

impl ColorSchemeSignal for TerminalColorScheme {
    fn prefers_dark(&self) -> bool {
        match std::env::var("COLORFGBG") {
            Ok(value) => Self::parse(&value),
            Err(_) => true,
        }
    }
}

/// Signal with a fixed answer
#[derive(Clone, Copy, Debug)]
pub struct FixedColorScheme(pub bool);

impl ColorSchemeSignal for FixedColorScheme {
    fn prefers_dark(&self) -> bool {
        self.0
    }
}

/// Owner of the theme preference
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    preference: ThemePreference,
}

impl ThemeState {
    pub fn new(preference: ThemePreference) -> Self {
        ThemeState { preference }
    }

    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    /// Light and dark swap; `System` jumps to the opposite of what is shown now
    pub fn toggle_theme(&mut self, signal: &dyn ColorSchemeSignal) {
        let next = match self.preference {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
            ThemePreference::System => self.resolve(signal).opposite().into(),
        };
        tracing::info!(from = self.preference.as_str(), to = next.as_str(), "Theme toggled");
        self.preference = next;
    }

    pub fn resolve(&self, signal: &dyn ColorSchemeSignal) -> ResolvedTheme {
        match self.preference {
            ThemePreference::Light => ResolvedTheme::Light,
            ThemePreference::Dark => ResolvedTheme::Dark,
            ThemePreference::System => {
                if signal.prefers_dark() {
                    ResolvedTheme::Dark
                } else {
                    ResolvedTheme::Light
                }
            }
        }
    }
}

/// Colors used by the presentation layer
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub on_accent: Color,
}

impl Palette {
    pub fn for_theme(theme: ResolvedTheme) -> Self {
        match theme {
            ResolvedTheme::Light => Palette {
                background: Color::Rgb(235, 242, 252),
                surface: Color::Rgb(252, 253, 255),
                text: Color::Rgb(9, 21, 64),
                muted: Color::Rgb(84, 89, 98),
                accent: Color::Rgb(199, 35, 26),
                on_accent: Color::White,
            },
            ResolvedTheme::Dark => Palette {
                background: Color::Rgb(4, 8, 24),
                surface: Color::Rgb(33, 38, 55),
                text: Color::Rgb(251, 253, 254),
                muted: Color::Rgb(197, 198, 201),
                accent: Color::Rgb(242, 82, 73),
                on_accent: Color::Rgb(9, 21, 64),
            },
        }
    }
}

/// Icon for the theme toggle button: a moon offers dark, a sun offers light
pub fn toggle_icon(theme: ResolvedTheme) -> &'static str {
    match theme {
        ResolvedTheme::Light => "☾",
        ResolvedTheme::Dark => "☀",
    }
}
