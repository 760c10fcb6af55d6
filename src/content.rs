//! Hardcoded site content. Everything here is compiled in, so dates are
//! constructed with `expect` — a bad literal is a programmer error, not a
//! runtime condition.

use chrono::{NaiveDate, NaiveDateTime};

use crate::agenda::CalendarEvent;

pub const UNIVERSITY: &str = "Queen's University";
pub const COURSE_CODE: &str = "CISC 322";
pub const TEAM_NAME: &str = "404 - Brain.exe Not Found";
pub const PROJECT_TITLE: &str = "OMMKPN-Not-Found--404- group project";
pub const LOGO_LABEL: &str = "[Q]";
pub const FOOTER: &str = "© 2022 Group 12 • Powered by Hexo & Icarus • Galaxy, Orion, Sol 3";

/// Default agenda filter threshold, matching the site's fixed default.
pub fn default_selected_date() -> NaiveDateTime {
    due(2026, 1, 21, 12, 0)
}

fn due(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .expect("valid date")
        .and_hms_opt(h, min, 0)
        .expect("valid time")
}

/// Course deliverables shown in the agenda widget.
pub fn deliverables() -> Vec<CalendarEvent> {
    vec![
        CalendarEvent::new("a0", "Group 3: A0. Website", due(2026, 1, 27, 12, 59)),
        CalendarEvent::new(
            "a1-report",
            "Group 3: A1. Conceptual Architecture report",
            due(2026, 2, 14, 12, 59),
        ),
        CalendarEvent::new(
            "a1-slides",
            "Group 3: A1. Conceptual Architecture slides & video presentation",
            due(2026, 2, 14, 12, 59),
        ),
        CalendarEvent::new(
            "a2-report",
            "Group 3: A2. Concrete Architecture report",
            due(2026, 3, 14, 11, 59),
        ),
        CalendarEvent::new(
            "a2-slides",
            "Group 3: A2. Concrete Architecture slides & video presentation",
            due(2026, 3, 14, 11, 59),
        ),
        CalendarEvent::new(
            "a3-report",
            "Group 3: A3. Proposal for Enhancement report",
            due(2026, 4, 7, 11, 59),
        ),
        CalendarEvent::new(
            "a3-slides",
            "Group 3: A3. Proposal for Enhancement slides & video presentation",
            due(2026, 4, 7, 11, 59),
        ),
    ]
}

pub struct Announcement {
    pub heading: &'static str,
    pub body: &'static str,
    pub posted: &'static str,
}

pub const ANNOUNCEMENTS: &[Announcement] = &[Announcement {
    heading: "IMPORTANT: The Department of Totally Useless Research",
    body: "Today's update confirms the campus squirrels have formed a tiny focus \
group to review our Wi-Fi vibes. Their preliminary findings: more acorns, fewer \
emails. Please refrain from notifying the clouds; they are currently busy \
practicing geometry. This announcement has no impact on coursework, grading, or \
schedules.",
    posted: "Posted Feb 1, 2022 • Updated Apr 15, 2022",
}];

pub const OFFICE_HOURS: &[&str] = &[
    "Tue & Thu • 2:00–3:30 PM",
    "Mitchell Hall, Room 218",
    "Coordinator: Prof. A. Matos",
];

pub struct LinkItem {
    pub label: &'static str,
    pub url: &'static str,
}

pub const QUICK_LINKS: &[LinkItem] = &[
    LinkItem {
        label: "Apollo system structure",
        url: "https://blog.csdn.net/",
    },
    LinkItem {
        label: "Concurrency in operating system",
        url: "https://www.geeksforgeeks.org/",
    },
    LinkItem {
        label: "Gflags",
        url: "https://github.com/",
    },
    LinkItem {
        label: "Apollo Perception",
        url: "https://aicurious.io/",
    },
];

pub const CATEGORIES: &[&str] = &["welcome (1)"];
pub const RECENT_UPDATES: &[&str] = &["2022-02-01 — Welcome to the Group 3 Project"];
pub const ARCHIVES: &[&str] = &["February 2022"];

pub struct Assignment {
    pub title: &'static str,
    pub links: &'static [LinkItem],
}

pub const ASSIGNMENTS: &[Assignment] = &[
    Assignment {
        title: "Assignment 1 — Conceptual Architecture",
        links: &[
            LinkItem {
                label: "Report",
                url: "https://drive.google.com/file/d/1WJ-M-hBluGuTlkuKcbYqM0XkYV5r9T_S/view",
            },
            LinkItem {
                label: "Presentation",
                url: "https://docs.google.com/presentation/d/1vX66s_2jKwLYytALKSSfMDlTB9DSlz6Q/edit",
            },
            LinkItem {
                label: "Video",
                url: "https://youtu.be/L6nwc1g3N8k",
            },
        ],
    },
    Assignment {
        title: "Assignment 2 — Concrete Architecture",
        links: &[
            LinkItem {
                label: "Report",
                url: "https://drive.google.com/file/d/1IraVNZ_A1ao1N0PjG6J6bOZAlZ6QLadM/view",
            },
            LinkItem {
                label: "Presentation",
                url: "https://docs.google.com/presentation/d/1B89FomDMDfUp5n1UxvbURF2UxOqJH6DA/edit",
            },
        ],
    },
    Assignment {
        title: "Assignment 3 — Proposed Enhancement",
        links: &[
            LinkItem {
                label: "Report",
                url: "https://drive.google.com/file/d/1OYY9NTWatYdyWBtlLzdNf74UU2yexsun/view",
            },
            LinkItem {
                label: "Presentation",
                url: "https://docs.google.com/presentation/d/1EaNMbc66dkeQt5RUyWe4QzxC6qgBReEy/edit",
            },
        ],
    },
];

pub const RESOURCES_BLURB: &str = "Apollo is an open, reliable, and comprehensive \
software platform for autonomous vehicle development shared with partners around \
the world.";

pub const RESOURCES: &[LinkItem] = &[
    LinkItem {
        label: "Apollo Open Platform",
        url: "https://apollo.auto/",
    },
    LinkItem {
        label: "Client Architecture Basics",
        url: "https://www.apollographql.com/",
    },
];

pub struct TeamMember {
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub role: &'static str,
}

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        first_name: "Ming",
        last_name: "Yuan",
        role: "Team Lead",
    },
    TeamMember {
        first_name: "Michael",
        last_name: "Liu",
        role: "Presenter 1",
    },
    TeamMember {
        first_name: "Enrong",
        last_name: "Pan",
        role: "Presenter 2",
    },
    TeamMember {
        first_name: "Omar",
        last_name: "",
        role: "Member",
    },
    TeamMember {
        first_name: "Kosi",
        last_name: "Amobi-Oleka",
        role: "Member",
    },
    TeamMember {
        first_name: "Nandan",
        last_name: "",
        role: "Member",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn deliverable_ids_are_unique() {
        let events = deliverables();
        let ids: HashSet<&str> = events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids.len(), events.len());
    }

    #[test]
    fn default_threshold_precedes_first_deliverable() {
        let first = deliverables()
            .iter()
            .map(|e| e.due_at)
            .min()
            .expect("non-empty");
        assert!(default_selected_date() < first);
    }
}
