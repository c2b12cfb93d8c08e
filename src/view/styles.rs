//! Pane styling configuration.
//!
//! Provides the palette for borders, the active card, the results cursor
//! and error text, with a monochrome fallback.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== Palette =====

/// Styles shared by all panes.
///
/// Without colors, emphasis falls back to modifiers so the active card
/// and the invalid search bar stay distinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Border of an unfocused pane.
    pub border: Style,
    /// Border of the focused pane.
    pub focused_border: Style,
    /// Border of the search bar while its text is invalid.
    pub invalid_border: Style,
    /// Background of the active (selected) card.
    pub active_card: Style,
    /// Secondary text such as thumbnail lines and hints.
    pub muted: Style,
    /// Static error messages.
    pub error: Style,
    /// Artist name heading in the detail pane.
    pub heading: Style,
    /// Cursor cell in the search bar.
    pub input_cursor: Style,
}

impl Palette {
    /// Build the palette for `config`.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                border: Style::default().fg(Color::DarkGray),
                focused_border: Style::default().fg(Color::Cyan),
                invalid_border: Style::default().fg(Color::Red),
                active_card: Style::default()
                    .bg(Color::Blue)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
                muted: Style::default().fg(Color::DarkGray),
                error: Style::default().fg(Color::Red),
                heading: Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                input_cursor: Style::default()
                    .bg(Color::White)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            }
        } else {
            Self {
                border: Style::default(),
                focused_border: Style::default().add_modifier(Modifier::BOLD),
                invalid_border: Style::default().add_modifier(Modifier::SLOW_BLINK),
                active_card: Style::default().add_modifier(Modifier::REVERSED),
                muted: Style::default().add_modifier(Modifier::DIM),
                error: Style::default().add_modifier(Modifier::BOLD),
                heading: Style::default().add_modifier(Modifier::BOLD),
                input_cursor: Style::default().add_modifier(Modifier::REVERSED),
            }
        }
    }

    /// Border style for a pane.
    pub fn pane_border(&self, focused: bool) -> Style {
        if focused {
            self.focused_border
        } else {
            self.border
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }
}

// ===== Tests =====
