use chrono::NaiveDateTime;

use super::event::CalendarEvent;
use super::state::AgendaState;

/// What `reset_selected_date` restores. The two observed behaviors of the
/// original widget (fixed initial date vs. re-reading the clock) are kept
/// as an explicit choice instead of picking one silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResetTarget {
    #[default]
    Fixed,
    Now,
}

#[derive(Debug, Clone)]
pub struct AgendaConfig {
    /// Initial filter threshold; falls back to the injected `now` when absent.
    pub selected_date: Option<NaiveDateTime>,
    pub filter_enabled: bool,
    pub reset_target: ResetTarget,
}

impl AgendaConfig {
    pub fn new() -> Self {
        Self {
            selected_date: None,
            filter_enabled: true,
            reset_target: ResetTarget::Fixed,
        }
    }
}

impl Default for AgendaConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// The agenda model: a fixed event list plus the interaction snapshot.
/// The clock is always passed in by the caller, so behavior is a pure
/// function of inputs.
pub struct AgendaWidget {
    events: Vec<CalendarEvent>,
    filter_enabled: bool,
    reset_target: ResetTarget,
    initial_date: NaiveDateTime,
    pub state: AgendaState,
}

impl AgendaWidget {
    pub fn new(events: Vec<CalendarEvent>, config: AgendaConfig, now: NaiveDateTime) -> Self {
        let initial_date = config.selected_date.unwrap_or(now);
        Self {
            events,
            filter_enabled: config.filter_enabled,
            reset_target: config.reset_target,
            initial_date,
            state: AgendaState::new(initial_date),
        }
    }

    pub fn filter_enabled(&self) -> bool {
        self.filter_enabled
    }

    /// Sorted, optionally date-filtered view of the event list.
    ///
    /// The sort is stable and ascending by due time; events tied on the
    /// same instant keep their input order. With filtering on, an event
    /// due at any time on the selected day is retained, anything strictly
    /// before that day is dropped.
    pub fn visible_events(&self) -> Vec<&CalendarEvent> {
        let mut sorted: Vec<&CalendarEvent> = self.events.iter().collect();
        sorted.sort_by_key(|ev| ev.due_at);

        if !self.filter_enabled {
            return sorted;
        }

        let day_start = day_start(self.state.selected_date);
        sorted.retain(|ev| ev.due_at >= day_start);
        sorted
    }

    pub fn toggle_collapsed(&mut self) {
        self.state = self.state.toggle_collapsed();
    }

    pub fn toggle_list_collapsed(&mut self) {
        self.state = self.state.toggle_list_collapsed();
    }

    /// Restore the filter threshold according to the configured target.
    /// Never touches `filter_enabled` or the collapse flags.
    pub fn reset_selected_date(&mut self, now: NaiveDateTime) {
        let target = match self.reset_target {
            ResetTarget::Fixed => self.initial_date,
            ResetTarget::Now => now,
        };
        self.state = self.state.with_selected_date(target);
    }
}

/// Truncate a date-time to 00:00:00 of its calendar day.
fn day_start(at: NaiveDateTime) -> NaiveDateTime {
    at.date().and_hms_opt(0, 0, 0).expect("midnight is valid")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn ev(id: &str, due: NaiveDateTime) -> CalendarEvent {
        CalendarEvent::new(id, id, due)
    }

    fn ids(view: &[&CalendarEvent]) -> Vec<String> {
        view.iter().map(|e| e.id.clone()).collect()
    }

    fn config(selected: NaiveDateTime, filter: bool) -> AgendaConfig {
        AgendaConfig {
            selected_date: Some(selected),
            filter_enabled: filter,
            reset_target: ResetTarget::Fixed,
        }
    }

    const NOW: fn() -> NaiveDateTime = || at(2026, 1, 1, 9, 0);

    #[test]
    fn view_is_sorted_ascending_regardless_of_input_order() {
        let events = vec![
            ev("x", at(2026, 2, 14, 12, 59)),
            ev("y", at(2026, 1, 27, 12, 59)),
        ];
        let widget = AgendaWidget::new(events, config(at(2026, 1, 21, 12, 0), true), NOW());
        assert_eq!(ids(&widget.visible_events()), ["y", "x"]);

        let reversed = vec![
            ev("y", at(2026, 1, 27, 12, 59)),
            ev("x", at(2026, 2, 14, 12, 59)),
        ];
        let widget = AgendaWidget::new(reversed, config(at(2026, 1, 21, 12, 0), true), NOW());
        assert_eq!(ids(&widget.visible_events()), ["y", "x"]);
    }

    #[test]
    fn ties_keep_input_order() {
        let due = at(2026, 4, 7, 11, 59);
        let events = vec![ev("report", due), ev("slides", due), ev("video", due)];
        let widget = AgendaWidget::new(events, config(at(2026, 1, 1, 0, 0), true), NOW());
        assert_eq!(ids(&widget.visible_events()), ["report", "slides", "video"]);
    }

    #[test]
    fn filter_retains_events_on_or_after_day_start() {
        let events = vec![
            ev("before", at(2026, 1, 31, 23, 59)),
            ev("early", at(2026, 2, 1, 0, 0)),
            ev("late", at(2026, 2, 1, 23, 0)),
        ];
        // Threshold mid-afternoon; the whole selected day still counts.
        let widget = AgendaWidget::new(events, config(at(2026, 2, 1, 15, 30), true), NOW());
        assert_eq!(ids(&widget.visible_events()), ["early", "late"]);
    }

    #[test]
    fn filter_disabled_returns_full_sorted_list() {
        let events = vec![
            ev("x", at(2026, 2, 14, 12, 59)),
            ev("y", at(2026, 1, 27, 12, 59)),
        ];
        // Threshold past every event; must not matter.
        let widget = AgendaWidget::new(events, config(at(2030, 1, 1, 0, 0), false), NOW());
        assert_eq!(ids(&widget.visible_events()), ["y", "x"]);
    }

    #[test]
    fn later_threshold_drops_earlier_events() {
        let events = vec![
            ev("x", at(2026, 2, 14, 12, 59)),
            ev("y", at(2026, 1, 27, 12, 59)),
        ];
        let widget = AgendaWidget::new(events, config(at(2026, 2, 1, 0, 0), true), NOW());
        assert_eq!(ids(&widget.visible_events()), ["x"]);
    }

    #[test]
    fn empty_input_yields_empty_view() {
        let widget = AgendaWidget::new(Vec::new(), config(at(2026, 1, 21, 12, 0), true), NOW());
        assert!(widget.visible_events().is_empty());
    }

    #[test]
    fn missing_selected_date_falls_back_to_injected_now() {
        let events = vec![
            ev("past", at(2025, 12, 31, 23, 0)),
            ev("today", at(2026, 1, 1, 23, 0)),
        ];
        let cfg = AgendaConfig {
            selected_date: None,
            filter_enabled: true,
            reset_target: ResetTarget::Fixed,
        };
        let widget = AgendaWidget::new(events, cfg, NOW());
        assert_eq!(ids(&widget.visible_events()), ["today"]);
    }

    #[test]
    fn reset_fixed_restores_the_configured_date() {
        let mut widget =
            AgendaWidget::new(Vec::new(), config(at(2026, 1, 21, 12, 0), true), NOW());
        widget.state = widget.state.with_selected_date(at(2026, 3, 1, 0, 0));
        widget.reset_selected_date(at(2026, 5, 5, 5, 5));
        assert_eq!(widget.state.selected_date, at(2026, 1, 21, 12, 0));
    }

    #[test]
    fn reset_now_adopts_the_supplied_clock() {
        let cfg = AgendaConfig {
            selected_date: Some(at(2026, 1, 21, 12, 0)),
            filter_enabled: true,
            reset_target: ResetTarget::Now,
        };
        let mut widget = AgendaWidget::new(Vec::new(), cfg, NOW());
        widget.reset_selected_date(at(2026, 5, 5, 5, 5));
        assert_eq!(widget.state.selected_date, at(2026, 5, 5, 5, 5));
    }

    #[test]
    fn reset_does_not_touch_collapse_flags() {
        let mut widget =
            AgendaWidget::new(Vec::new(), config(at(2026, 1, 21, 12, 0), true), NOW());
        widget.toggle_collapsed();
        widget.toggle_list_collapsed();
        widget.reset_selected_date(NOW());
        assert!(widget.state.collapsed);
        assert!(widget.state.list_collapsed);
    }

    #[test]
    fn threshold_before_both_events_keeps_both() {
        let events = vec![
            ev("x", at(2026, 2, 14, 12, 59)),
            ev("y", at(2026, 1, 27, 12, 59)),
        ];
        let widget = AgendaWidget::new(events, config(at(2026, 1, 21, 0, 0), true), NOW());
        assert_eq!(ids(&widget.visible_events()), ["y", "x"]);
    }
}
