use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::{content, theme};

pub struct Roster;

impl Roster {
    pub fn render(frame: &mut Frame, area: Rect, scroll: u16) {
        let theme = theme::current();

        let block = Block::default()
            .title(" About Us ")
            .title_style(theme.title)
            .borders(Borders::ALL)
            .border_style(theme.border);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let inner_w = inner.width as usize;
        let mut lines: Vec<Line> = Vec::new();

        lines.push(Line::from(Span::styled(
            format!(
                "Meet the {} team and presentation roles.",
                content::TEAM_NAME
            ),
            theme.dim,
        )));

        for member in content::TEAM {
            lines.push(Line::from(Span::styled(
                "\u{2500}".repeat(inner_w),
                theme.dim,
            )));
            lines.push(Line::from(Span::styled(
                member.first_name.to_uppercase(),
                theme.dim,
            )));
            // Some members list a single name; keep the card shape anyway.
            let last = if member.last_name.is_empty() {
                " "
            } else {
                member.last_name
            };
            lines.push(Line::from(Span::styled(last, theme.strong)));
            lines.push(Line::from(Span::styled(member.role, theme.dim)));
        }

        let para = Paragraph::new(lines).scroll((scroll, 0));
        frame.render_widget(para, inner);
    }
}
