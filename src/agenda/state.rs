use chrono::NaiveDateTime;

/// Interaction state of the agenda panel. A plain snapshot replaced on
/// each interaction; the transition functions are pure so the widget
/// never mutates in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgendaState {
    /// Outer panel body hidden.
    pub collapsed: bool,
    /// Inner "Upcoming events" list hidden.
    pub list_collapsed: bool,
    /// Filter threshold; events before the start of this date are hidden.
    pub selected_date: NaiveDateTime,
}

impl AgendaState {
    pub fn new(selected_date: NaiveDateTime) -> Self {
        Self {
            collapsed: false,
            list_collapsed: false,
            selected_date,
        }
    }

    #[must_use]
    pub fn toggle_collapsed(self) -> Self {
        Self {
            collapsed: !self.collapsed,
            ..self
        }
    }

    #[must_use]
    pub fn toggle_list_collapsed(self) -> Self {
        Self {
            list_collapsed: !self.list_collapsed,
            ..self
        }
    }

    #[must_use]
    pub fn with_selected_date(self, selected_date: NaiveDateTime) -> Self {
        Self {
            selected_date,
            ..self
        }
    }
}
