mod agenda;
mod app;
mod components;
mod config;
mod content;
mod event;
mod theme;
mod tui;

use std::time::Duration;

use app::{App, Page};
use chrono::Local;
use color_eyre::Result;
use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::layout::{Constraint, Layout, Rect};

use components::{AgendaPanel, Bulletin, Header, Roster, Sidebar, StatusBar};

const SIDEBAR_W: u16 = 36;

fn main() -> Result<()> {
    color_eyre::install()?;

    let mut app = App::new(Local::now().naive_local());

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = tui::restore();
        original_hook(panic_info);
    }));

    let mut terminal = tui::init()?;
    let result = run(&mut terminal, &mut app);
    tui::restore()?;
    result
}

fn run(terminal: &mut tui::Tui, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|frame| {
            let area = frame.area();

            // Main layout: header + content + status bar
            let layout = Layout::vertical([
                Constraint::Length(3),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(area);

            Header::render(frame, layout[0], app.page);

            match app.page {
                Page::Home => render_home(frame, layout[1], app),
                Page::About => Roster::render(frame, layout[1], app.about_scroll),
            }

            if app.show_help {
                render_help(frame, area);
            }

            StatusBar::render(frame, layout[2], app);
        })?;

        if let Some(key) = event::next_key_event(Duration::from_millis(100))? {
            // Clear status message on any key
            app.status_message = None;

            // Help overlay takes priority
            if app.show_help {
                if key.code == KeyCode::Esc || key.code == KeyCode::Char('?') {
                    app.show_help = false;
                }
                continue;
            }

            handle_input(app, key.code, key.modifiers);
        }
    }

    Ok(())
}

fn handle_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    match (code, modifiers) {
        (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            app.running = false;
        }
        (KeyCode::Char('1'), _) => app.page = Page::Home,
        (KeyCode::Char('2'), _) => app.page = Page::About,
        (KeyCode::Tab, _) => app.next_page(),
        (KeyCode::Char('c'), _) => app.toggle_calendar(),
        (KeyCode::Char('u'), _) => app.toggle_upcoming(),
        (KeyCode::Char('r'), _) => app.reset_selected_date(),
        (KeyCode::Char('a'), _) => app.toggle_announcements(),
        (KeyCode::Char('J'), _) => app.scroll_sidebar_down(),
        (KeyCode::Char('K'), _) => app.scroll_sidebar_up(),
        (KeyCode::Down, _) | (KeyCode::Char('j'), _) => app.scroll_down(),
        (KeyCode::Up, _) | (KeyCode::Char('k'), _) => app.scroll_up(),
        (KeyCode::Char('?'), _) => app.show_help = true,
        _ => {}
    }
}

fn render_home(frame: &mut ratatui::Frame, area: Rect, app: &App) {
    let sidebar_w = SIDEBAR_W.min(area.width / 2);
    let columns = Layout::horizontal([
        Constraint::Length(sidebar_w),
        Constraint::Min(20),
    ])
    .split(area);

    let agenda_h = AgendaPanel::desired_height(&app.agenda).min(columns[0].height);
    let sidebar_rows = Layout::vertical([
        Constraint::Length(agenda_h),
        Constraint::Min(0),
    ])
    .split(columns[0]);

    AgendaPanel::render(frame, sidebar_rows[0], &app.agenda);
    if sidebar_rows[1].height > 0 {
        Sidebar::render(frame, sidebar_rows[1], app.sidebar_scroll);
    }

    Bulletin::render(frame, columns[1], app.announcements_collapsed, app.main_scroll);
}

fn render_help(frame: &mut ratatui::Frame, area: Rect) {
    use ratatui::style::{Color, Modifier, Style};
    use ratatui::text::{Line, Span};
    use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

    let popup_w = area.width.min(48).max(30);
    let popup_h = area.height.min(18).max(10);
    let x = area.x + (area.width.saturating_sub(popup_w)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_h)) / 2;
    let popup_area = Rect::new(x, y, popup_w, popup_h);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Keybindings ")
        .title_style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let key_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let desc_style = Style::default();
    let section_style = Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED);

    let lines = vec![
        Line::from(Span::styled("Pages", section_style)),
        Line::from(vec![
            Span::styled("  1/2       ", key_style),
            Span::styled("Course Home / About us", desc_style),
        ]),
        Line::from(vec![
            Span::styled("  Tab       ", key_style),
            Span::styled("Next page", desc_style),
        ]),
        Line::from(""),
        Line::from(Span::styled("Calendar", section_style)),
        Line::from(vec![
            Span::styled("  c         ", key_style),
            Span::styled("Collapse/expand the panel", desc_style),
        ]),
        Line::from(vec![
            Span::styled("  u         ", key_style),
            Span::styled("Show/hide upcoming events", desc_style),
        ]),
        Line::from(vec![
            Span::styled("  r         ", key_style),
            Span::styled("Reset the selected date", desc_style),
        ]),
        Line::from(""),
        Line::from(Span::styled("Reading", section_style)),
        Line::from(vec![
            Span::styled("  a         ", key_style),
            Span::styled("Collapse/expand announcements", desc_style),
        ]),
        Line::from(vec![
            Span::styled("  j/k       ", key_style),
            Span::styled("Scroll the page", desc_style),
        ]),
        Line::from(vec![
            Span::styled("  J/K       ", key_style),
            Span::styled("Scroll the sidebar", desc_style),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  q", key_style),
            Span::styled(" / ", theme::DIM_STYLE),
            Span::styled("Esc     ", key_style),
            Span::styled("Quit / close popup", desc_style),
        ]),
    ];

    let para = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(para, inner);
}
