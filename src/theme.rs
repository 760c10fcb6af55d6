use std::path::PathBuf;
use std::sync::OnceLock;

use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

static THEME: OnceLock<Theme> = OnceLock::new();

/// Get the active theme (loaded once on first call).
pub fn current() -> &'static Theme {
    THEME.get_or_init(|| Theme::load().unwrap_or_default())
}

// Const fallback for places that need a compile-time style
pub const DIM_STYLE: Style = Style::new().fg(Color::DarkGray);

#[derive(Debug, Clone)]
pub struct Theme {
    #[allow(dead_code)]
    pub name: String,
    /// Panel and section headings (the site's sky-blue accents).
    pub title: Style,
    /// External links.
    pub link: Style,
    /// Secondary text: hints, timestamps, separators.
    pub dim: Style,
    pub border: Style,
    pub status: Style,
    /// Day number of the agenda date badge.
    pub badge: Style,
    /// Primary body emphasis (event times, member names).
    pub strong: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            title: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            link: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::UNDERLINED),
            dim: Style::default().fg(Color::DarkGray),
            border: Style::default().fg(Color::Gray),
            status: Style::default().fg(Color::White).bg(Color::DarkGray),
            badge: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            strong: Style::default().add_modifier(Modifier::BOLD),
        }
    }
}

impl Theme {
    pub fn load() -> Option<Self> {
        let path = theme_path()?;
        if !path.exists() {
            return None;
        }
        let content = std::fs::read_to_string(&path).ok()?;
        let config: ThemeConfig = toml::from_str(&content).ok()?;
        Some(config.into_theme())
    }

    /// Get a built-in preset by name.
    pub fn preset(name: &str) -> Self {
        match name {
            "campus" => Self::campus(),
            "mono" => Self::mono(),
            _ => Self::default(),
        }
    }

    /// Closer to the site's slate-and-sky palette.
    fn campus() -> Self {
        Self {
            name: "campus".to_string(),
            title: Style::default()
                .fg(Color::Rgb(3, 105, 161)) // sky-700
                .add_modifier(Modifier::BOLD),
            link: Style::default()
                .fg(Color::Rgb(29, 78, 216)) // blue-700
                .add_modifier(Modifier::UNDERLINED),
            dim: Style::default().fg(Color::Rgb(100, 116, 139)), // slate-500
            border: Style::default().fg(Color::Rgb(148, 163, 184)), // slate-400
            status: Style::default()
                .fg(Color::Rgb(241, 245, 249))
                .bg(Color::Rgb(51, 65, 85)),
            badge: Style::default()
                .fg(Color::Rgb(226, 232, 240)) // slate-200
                .add_modifier(Modifier::BOLD),
            strong: Style::default()
                .fg(Color::Rgb(226, 232, 240))
                .add_modifier(Modifier::BOLD),
        }
    }

    fn mono() -> Self {
        Self {
            name: "mono".to_string(),
            title: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            link: Style::default().add_modifier(Modifier::UNDERLINED),
            dim: Style::default().fg(Color::DarkGray),
            border: Style::default().fg(Color::DarkGray),
            status: Style::default().fg(Color::Black).bg(Color::Gray),
            badge: Style::default().add_modifier(Modifier::BOLD),
            strong: Style::default().add_modifier(Modifier::BOLD),
        }
    }
}

fn theme_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("theme.toml"))
}

/// Per-user configuration directory, shared with `config.toml` and the
/// optional ASCII logo.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("course-hub"))
}

// ── TOML config types ──

#[derive(Debug, Deserialize, Default)]
struct ThemeConfig {
    preset: Option<String>,
    title_fg: Option<String>,
    link_fg: Option<String>,
    dim_fg: Option<String>,
    border_fg: Option<String>,
    status_fg: Option<String>,
    status_bg: Option<String>,
    badge_fg: Option<String>,
    strong_fg: Option<String>,
}

impl ThemeConfig {
    fn into_theme(self) -> Theme {
        // Start from preset or default
        let mut theme = self
            .preset
            .as_deref()
            .map(Theme::preset)
            .unwrap_or_default();

        // Override individual colors
        if let Some(c) = self.title_fg.as_deref().and_then(parse_color) {
            theme.title = theme.title.fg(c);
        }
        if let Some(c) = self.link_fg.as_deref().and_then(parse_color) {
            theme.link = theme.link.fg(c);
        }
        if let Some(c) = self.dim_fg.as_deref().and_then(parse_color) {
            theme.dim = theme.dim.fg(c);
        }
        if let Some(c) = self.border_fg.as_deref().and_then(parse_color) {
            theme.border = theme.border.fg(c);
        }
        if let Some(c) = self.status_fg.as_deref().and_then(parse_color) {
            theme.status = theme.status.fg(c);
        }
        if let Some(c) = self.status_bg.as_deref().and_then(parse_color) {
            theme.status = theme.status.bg(c);
        }
        if let Some(c) = self.badge_fg.as_deref().and_then(parse_color) {
            theme.badge = theme.badge.fg(c);
        }
        if let Some(c) = self.strong_fg.as_deref().and_then(parse_color) {
            theme.strong = theme.strong.fg(c);
        }

        theme
    }
}

/// Parse a color string: hex "#rrggbb", or named colors.
fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();
    if s.starts_with('#') && s.len() == 7 {
        let r = u8::from_str_radix(&s[1..3], 16).ok()?;
        let g = u8::from_str_radix(&s[3..5], 16).ok()?;
        let b = u8::from_str_radix(&s[5..7], 16).ok()?;
        return Some(Color::Rgb(r, g, b));
    }
    match s.to_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "white" => Some(Color::White),
        "gray" | "grey" => Some(Color::Gray),
        "darkgray" | "darkgrey" => Some(Color::DarkGray),
        "lightblue" => Some(Color::LightBlue),
        "lightcyan" => Some(Color::LightCyan),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_and_named_colors() {
        assert_eq!(parse_color("#0369a1"), Some(Color::Rgb(3, 105, 161)));
        assert_eq!(parse_color("cyan"), Some(Color::Cyan));
        assert_eq!(parse_color(" White "), Some(Color::White));
        assert_eq!(parse_color("#zzzzzz"), None);
        assert_eq!(parse_color("chartreuse"), None);
    }

    #[test]
    fn overrides_apply_on_top_of_preset() {
        let config: ThemeConfig =
            toml::from_str("preset = \"mono\"\ntitle_fg = \"#ff0000\"\n").unwrap();
        let theme = config.into_theme();
        assert_eq!(theme.name, "mono");
        assert_eq!(
            theme.title.fg,
            Some(Color::Rgb(255, 0, 0))
        );
    }
}
