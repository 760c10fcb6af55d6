use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Page};
use crate::theme;

pub struct StatusBar;

impl StatusBar {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = theme::current();
        let w = area.width as usize;

        let page_str = match app.page {
            Page::Home => "[1]Home",
            Page::About => "[2]About",
        };

        // Show status message if present, otherwise width-adaptive hints
        let right_text = if let Some(ref msg) = app.status_message {
            format!(" {} ", msg)
        } else {
            match app.page {
                Page::Home if w >= 90 => {
                    " c:Calendar u:Upcoming r:Reset a:Annc j/k:Scroll J/K:Sidebar Tab:Page ?:Help q:Quit"
                        .to_string()
                }
                Page::Home if w >= 50 => " c/u/r:Calendar j/k:Scroll q:Quit".to_string(),
                Page::About if w >= 50 => " j/k:Scroll Tab:Page ?:Help q:Quit".to_string(),
                _ => " ?:Help q:Quit".to_string(),
            }
        };

        let left = format!(" {} ", page_str);
        let padding = " ".repeat(w.saturating_sub(left.len() + right_text.len()));

        let line = Line::from(vec![
            Span::styled(left, theme.status),
            Span::styled(padding, theme.status),
            Span::styled(right_text, theme.status),
        ]);

        let bar = Paragraph::new(line).style(theme.status);
        frame.render_widget(bar, area);
    }
}
