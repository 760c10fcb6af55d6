use chrono::{Local, NaiveDateTime};

use crate::agenda::{AgendaConfig, AgendaWidget};
use crate::{config, content};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Page {
    Home,
    About,
}

pub struct App {
    pub running: bool,
    pub page: Page,
    pub agenda: AgendaWidget,
    pub announcements_collapsed: bool,
    pub main_scroll: u16,
    pub sidebar_scroll: u16,
    pub about_scroll: u16,
    pub show_help: bool,
    pub status_message: Option<String>,
}

impl App {
    pub fn new(now: NaiveDateTime) -> Self {
        let defaults = AgendaConfig {
            selected_date: Some(content::default_selected_date()),
            ..AgendaConfig::new()
        };
        let agenda_config = config::load(defaults);
        let agenda = AgendaWidget::new(content::deliverables(), agenda_config, now);

        Self {
            running: true,
            page: Page::Home,
            agenda,
            announcements_collapsed: false,
            main_scroll: 0,
            sidebar_scroll: 0,
            about_scroll: 0,
            show_help: false,
            status_message: None,
        }
    }

    pub fn next_page(&mut self) {
        self.page = match self.page {
            Page::Home => Page::About,
            Page::About => Page::Home,
        };
    }

    pub fn toggle_calendar(&mut self) {
        self.agenda.toggle_collapsed();
        self.status_message = Some(
            if self.agenda.state.collapsed {
                "Calendar collapsed"
            } else {
                "Calendar expanded"
            }
            .to_string(),
        );
    }

    pub fn toggle_upcoming(&mut self) {
        self.agenda.toggle_list_collapsed();
        self.status_message = Some(
            if self.agenda.state.list_collapsed {
                "Upcoming events hidden"
            } else {
                "Upcoming events shown"
            }
            .to_string(),
        );
    }

    pub fn reset_selected_date(&mut self) {
        self.agenda.reset_selected_date(Local::now().naive_local());
        self.status_message = Some(format!(
            "Selected date: {}",
            self.agenda.state.selected_date.format("%B %-d, %Y")
        ));
    }

    pub fn toggle_announcements(&mut self) {
        self.announcements_collapsed = !self.announcements_collapsed;
    }

    pub fn scroll_down(&mut self) {
        match self.page {
            Page::Home => self.main_scroll = self.main_scroll.saturating_add(1),
            Page::About => self.about_scroll = self.about_scroll.saturating_add(1),
        }
    }

    pub fn scroll_up(&mut self) {
        match self.page {
            Page::Home => self.main_scroll = self.main_scroll.saturating_sub(1),
            Page::About => self.about_scroll = self.about_scroll.saturating_sub(1),
        }
    }

    pub fn scroll_sidebar_down(&mut self) {
        self.sidebar_scroll = self.sidebar_scroll.saturating_add(1);
    }

    pub fn scroll_sidebar_up(&mut self) {
        self.sidebar_scroll = self.sidebar_scroll.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(content::default_selected_date())
    }

    #[test]
    fn pages_cycle() {
        let mut app = app();
        assert_eq!(app.page, Page::Home);
        app.next_page();
        assert_eq!(app.page, Page::About);
        app.next_page();
        assert_eq!(app.page, Page::Home);
    }

    #[test]
    fn calendar_toggle_sets_status_message() {
        let mut app = app();
        app.toggle_calendar();
        assert!(app.agenda.state.collapsed);
        assert_eq!(app.status_message.as_deref(), Some("Calendar collapsed"));
        app.toggle_calendar();
        assert!(!app.agenda.state.collapsed);
    }

    #[test]
    fn scrolling_saturates_at_zero() {
        let mut app = app();
        app.scroll_up();
        assert_eq!(app.main_scroll, 0);
        app.scroll_down();
        app.scroll_down();
        app.scroll_up();
        assert_eq!(app.main_scroll, 1);
    }
}
