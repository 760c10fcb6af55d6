use chrono::NaiveDateTime;

/// A single course deliverable shown in the agenda. Events are
/// caller-constructed and never mutated by the widget; ids are assumed
/// unique within one input list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub due_at: NaiveDateTime,
}

impl CalendarEvent {
    pub fn new(id: &str, title: &str, due_at: NaiveDateTime) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            due_at,
        }
    }

    /// Top line of the date badge: abbreviated month, uppercase.
    pub fn badge_month(&self) -> String {
        self.due_at.format("%b").to_string().to_uppercase()
    }

    /// Bottom line of the date badge: day of month, no padding.
    pub fn badge_day(&self) -> String {
        self.due_at.format("%-d").to_string()
    }

    /// Due time on a 12-hour clock with AM/PM.
    pub fn time_display(&self) -> String {
        self.due_at.format("%-I:%M %p").to_string()
    }
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

    #[test]
    fn badge_is_uppercase_month_and_bare_day() {
        let ev = CalendarEvent::new("a0", "Website", at(2026, 1, 27, 12, 59));
        assert_eq!(ev.badge_month(), "JAN");
        assert_eq!(ev.badge_day(), "27");
    }

    #[test]
    fn time_uses_twelve_hour_clock() {
        let noon_ish = CalendarEvent::new("a", "x", at(2026, 2, 14, 12, 59));
        assert_eq!(noon_ish.time_display(), "12:59 PM");

        let morning = CalendarEvent::new("b", "y", at(2026, 3, 14, 11, 59));
        assert_eq!(morning.time_display(), "11:59 AM");

        let midnight = CalendarEvent::new("c", "z", at(2026, 3, 14, 0, 5));
        assert_eq!(midnight.time_display(), "12:05 AM");
    }
}
