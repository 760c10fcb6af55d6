use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::{content, theme};

/// Main column of the Home page: banner heading, announcements,
/// assignment links, embedded resources, footer.
pub struct Bulletin;

impl Bulletin {
    pub fn render(frame: &mut Frame, area: Rect, announcements_collapsed: bool, scroll: u16) {
        let theme = theme::current();

        let block = Block::default()
            .title(" Course Home ")
            .title_style(theme.title)
            .borders(Borders::ALL)
            .border_style(theme.border);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines: Vec<Line> = Vec::new();

        lines.push(Line::from(Span::styled(
            content::PROJECT_TITLE,
            theme.title,
        )));

        lines.push(Line::from(""));
        let ann_indicator = if announcements_collapsed {
            "\u{25b8}"
        } else {
            "\u{25be}"
        };
        lines.push(Line::from(Span::styled(
            format!("Announcements {}  (a toggles)", ann_indicator),
            theme.title,
        )));
        if !announcements_collapsed {
            for ann in content::ANNOUNCEMENTS {
                lines.push(Line::from(Span::styled(ann.heading, theme.strong)));
                lines.push(Line::from(ann.body));
                lines.push(Line::from(Span::styled(ann.posted, theme.dim)));
            }
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Assignments & Deliverables",
            theme.title,
        )));
        for assignment in content::ASSIGNMENTS {
            lines.push(Line::from(Span::styled(assignment.title, theme.strong)));
            let mut spans: Vec<Span> = vec![Span::raw("  ")];
            for (i, link) in assignment.links.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw("  "));
                }
                spans.push(Span::styled(link.label, theme.link));
            }
            lines.push(Line::from(spans));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Embedded Resources", theme.title)));
        lines.push(Line::from(content::RESOURCES_BLURB));
        for link in content::RESOURCES {
            lines.push(Line::from(vec![
                Span::styled(link.label, theme.link),
                Span::styled(format!("  {}", link.url), theme.dim),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(content::FOOTER, theme.dim)));

        let para = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0));
        frame.render_widget(para, inner);
    }
}
