use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::agenda::AgendaWidget;
use crate::theme;

const BADGE_W: usize = 5;

pub struct AgendaPanel;

impl AgendaPanel {
    /// Rows the panel wants, including its borders. The surrounding layout
    /// may hand it less; rendering clips from the bottom.
    pub fn desired_height(widget: &AgendaWidget) -> u16 {
        if widget.state.collapsed {
            return 2;
        }
        // date selector + sub-header
        let mut inner = 2usize;
        if !widget.state.list_collapsed {
            let rows = widget.visible_events().len();
            if rows > 0 {
                // two lines per row plus a separator before all but the first
                inner += rows * 2 + (rows - 1);
            }
        }
        (inner + 2) as u16
    }

    pub fn render(frame: &mut Frame, area: Rect, widget: &AgendaWidget) {
        let theme = theme::current();
        let state = widget.state;

        let indicator = if state.collapsed { "\u{25b8}" } else { "\u{25be}" };
        let block = Block::default()
            .title(format!(" Calendar {} ", indicator))
            .title_style(theme.title)
            .borders(Borders::ALL)
            .border_style(theme.border);

        let inner = block.inner(area);
        frame.render_widget(block, area);

        // Collapsed hides everything below the header, whatever the
        // list toggle says.
        if state.collapsed || inner.height == 0 {
            return;
        }

        let inner_w = inner.width as usize;
        let mut lines: Vec<Line> = Vec::new();

        // Date selector
        let hint = if widget.filter_enabled() {
            "  (r resets)"
        } else {
            "  (filter off)"
        };
        lines.push(Line::from(vec![
            Span::styled(
                state.selected_date.format("%A, %B %-d, %Y").to_string(),
                theme.strong,
            ),
            Span::styled(hint, theme.dim),
        ]));

        // Sub-header for the inner list
        let list_indicator = if state.list_collapsed {
            "\u{25b8}"
        } else {
            "\u{25be}"
        };
        lines.push(Line::from(Span::styled(
            format!("Upcoming events {}", list_indicator),
            theme.title,
        )));

        if !state.list_collapsed {
            for (i, ev) in widget.visible_events().iter().enumerate() {
                if i > 0 {
                    lines.push(Line::from(Span::styled(
                        "\u{2500}".repeat(inner_w),
                        theme.dim,
                    )));
                }
                lines.push(Line::from(vec![
                    Span::styled(format!("{:^w$}", ev.badge_month(), w = BADGE_W), theme.dim),
                    Span::styled(ev.time_display(), theme.strong),
                ]));
                lines.push(Line::from(vec![
                    Span::styled(format!("{:^w$}", ev.badge_day(), w = BADGE_W), theme.badge),
                    Span::raw(truncate(&ev.title, inner_w.saturating_sub(BADGE_W))),
                ]));
            }
        }

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max > 3 {
        let cut: String = s.chars().take(max - 3).collect();
        format!("{}...", cut)
    } else {
        s.chars().take(max).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agenda::{AgendaConfig, CalendarEvent};
    use chrono::NaiveDate;
    use ratatui::{backend::TestBackend, Terminal};

    fn widget() -> AgendaWidget {
        let due = NaiveDate::from_ymd_opt(2026, 1, 27)
            .unwrap()
            .and_hms_opt(12, 59, 0)
            .unwrap();
        let selected = NaiveDate::from_ymd_opt(2026, 1, 21)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let config = AgendaConfig {
            selected_date: Some(selected),
            ..AgendaConfig::new()
        };
        AgendaWidget::new(
            vec![CalendarEvent::new("a0", "Website deliverable", due)],
            config,
            selected,
        )
    }

    fn rendered(widget: &AgendaWidget) -> String {
        let backend = TestBackend::new(40, 14);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| AgendaPanel::render(frame, frame.area(), widget))
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content.iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn expanded_panel_shows_selector_subheader_and_rows() {
        let widget = widget();
        let screen = rendered(&widget);
        assert!(screen.contains("Wednesday, January 21, 2026"));
        assert!(screen.contains("Upcoming events"));
        assert!(screen.contains("JAN"));
        assert!(screen.contains("Website deliverable"));
    }

    #[test]
    fn collapsed_panel_hides_everything_below_the_header() {
        let mut widget = widget();
        widget.toggle_collapsed();
        // list_collapsed stays false; collapse must still win
        assert!(!widget.state.list_collapsed);

        let screen = rendered(&widget);
        assert!(screen.contains("Calendar"));
        assert!(!screen.contains("Upcoming events"));
        assert!(!screen.contains("January 21"));
        assert!(!screen.contains("Website deliverable"));
    }

    #[test]
    fn list_collapse_keeps_selector_and_subheader() {
        let mut widget = widget();
        widget.toggle_list_collapsed();

        let screen = rendered(&widget);
        assert!(screen.contains("Wednesday, January 21, 2026"));
        assert!(screen.contains("Upcoming events"));
        assert!(!screen.contains("Website deliverable"));
    }

    #[test]
    fn desired_height_tracks_collapse_state() {
        let mut widget = widget();
        assert_eq!(AgendaPanel::desired_height(&widget), 2 + 2 + 2);
        widget.toggle_list_collapsed();
        assert_eq!(AgendaPanel::desired_height(&widget), 2 + 2);
        widget.toggle_collapsed();
        assert_eq!(AgendaPanel::desired_height(&widget), 2);
    }
}

