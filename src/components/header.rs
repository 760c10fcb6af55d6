use std::sync::OnceLock;

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::Page;
use crate::{content, theme};

static LOGO: OnceLock<String> = OnceLock::new();

/// The site logo, read once from `logo.txt` in the config directory.
/// Falls back to the bracketed text label when the file is missing or
/// unreadable, matching the site's broken-image fallback.
fn logo() -> &'static str {
    LOGO.get_or_init(|| {
        theme::config_dir()
            .map(|d| d.join("logo.txt"))
            .and_then(|p| std::fs::read_to_string(p).ok())
            .and_then(|s| s.lines().find(|l| !l.trim().is_empty()).map(str::to_string))
            .unwrap_or_else(|| content::LOGO_LABEL.to_string())
    })
}

pub struct Header;

impl Header {
    pub fn render(frame: &mut Frame, area: Rect, page: Page) {
        let theme = theme::current();
        let w = area.width as usize;

        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(theme.border);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let nav = match page {
            Page::Home => "About us [2]",
            Page::About => "Course Home [1]",
        };

        let left = format!("{} {}", logo(), content::UNIVERSITY.to_uppercase());
        let top = Line::from(vec![
            Span::styled(left.clone(), theme.dim),
            Span::raw(" ".repeat(w.saturating_sub(left.len() + nav.len()))),
            Span::styled(nav, theme.link),
        ]);

        let bottom = Line::from(Span::styled(
            format!("{} \u{2022} {}", content::COURSE_CODE, content::TEAM_NAME),
            theme.strong,
        ));

        frame.render_widget(Paragraph::new(vec![top, bottom]), inner);
    }
}
