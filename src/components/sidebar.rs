use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::{content, theme};

pub struct Sidebar;

impl Sidebar {
    pub fn render(frame: &mut Frame, area: Rect, scroll: u16) {
        let theme = theme::current();

        let block = Block::default()
            .title(" Course info ")
            .title_style(theme.title)
            .borders(Borders::ALL)
            .border_style(theme.border);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines: Vec<Line> = Vec::new();

        lines.push(Line::from(Span::styled("Office Hours", theme.title)));
        for row in content::OFFICE_HOURS {
            lines.push(Line::from(*row));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Quick Links", theme.title)));
        for link in content::QUICK_LINKS {
            lines.push(Line::from(Span::styled(link.label, theme.link)));
            lines.push(Line::from(Span::styled(format!("  {}", link.url), theme.dim)));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Categories", theme.title)));
        for row in content::CATEGORIES {
            lines.push(Line::from(*row));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Recent Updates", theme.title)));
        for row in content::RECENT_UPDATES {
            lines.push(Line::from(*row));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Archives", theme.title)));
        for row in content::ARCHIVES {
            lines.push(Line::from(*row));
        }

        let para = Paragraph::new(lines).scroll((scroll, 0));
        frame.render_widget(para, inner);
    }
}
