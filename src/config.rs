use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;

use crate::agenda::{AgendaConfig, ResetTarget};
use crate::theme;

/// Load agenda options from `config.toml`, layered over the given
/// defaults. A missing or malformed file leaves the defaults untouched.
pub fn load(defaults: AgendaConfig) -> AgendaConfig {
    match config_path().and_then(|p| std::fs::read_to_string(p).ok()) {
        Some(content) => match toml::from_str::<FileConfig>(&content) {
            Ok(file) => file.into_agenda_config(defaults),
            Err(_) => defaults,
        },
        None => defaults,
    }
}

fn config_path() -> Option<PathBuf> {
    theme::config_dir().map(|d| d.join("config.toml"))
}

#[derive(Debug, Deserialize, Default)]
struct FileConfig {
    agenda: Option<AgendaSection>,
}

#[derive(Debug, Deserialize, Default)]
struct AgendaSection {
    /// "2026-01-21T12:00", "2026-01-21T12:00:00", or a bare "2026-01-21"
    /// (taken as the start of that day).
    selected_date: Option<String>,
    filter_enabled: Option<bool>,
    /// "fixed" or "now".
    reset_target: Option<String>,
}

impl FileConfig {
    fn into_agenda_config(self, defaults: AgendaConfig) -> AgendaConfig {
        let Some(agenda) = self.agenda else {
            return defaults;
        };

        let mut config = defaults;
        if let Some(date) = agenda.selected_date.as_deref().and_then(parse_date) {
            config.selected_date = Some(date);
        }
        if let Some(enabled) = agenda.filter_enabled {
            config.filter_enabled = enabled;
        }
        match agenda.reset_target.as_deref() {
            Some("fixed") => config.reset_target = ResetTarget::Fixed,
            Some("now") => config.reset_target = ResetTarget::Now,
            _ => {}
        }
        config
    }
}

fn parse_date(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M"))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> AgendaConfig {
        AgendaConfig {
            selected_date: None,
            filter_enabled: true,
            reset_target: ResetTarget::Fixed,
        }
    }

    #[test]
    fn parses_all_date_forms() {
        let full = parse_date("2026-01-21T12:00:00").unwrap();
        assert_eq!(full, parse_date("2026-01-21T12:00").unwrap());

        let bare = parse_date("2026-01-21").unwrap();
        assert_eq!(bare.format("%H:%M:%S").to_string(), "00:00:00");
        assert!(parse_date("next tuesday").is_none());
    }

    #[test]
    fn section_overrides_defaults() {
        let file: FileConfig = toml::from_str(
            "[agenda]\nselected_date = \"2026-02-01\"\nfilter_enabled = false\nreset_target = \"now\"\n",
        )
        .unwrap();
        let config = file.into_agenda_config(defaults());
        assert_eq!(
            config.selected_date.unwrap().format("%Y-%m-%d").to_string(),
            "2026-02-01"
        );
        assert!(!config.filter_enabled);
        assert_eq!(config.reset_target, ResetTarget::Now);
    }

    #[test]
    fn missing_section_and_bad_values_keep_defaults() {
        let file: FileConfig = toml::from_str("").unwrap();
        let config = file.into_agenda_config(defaults());
        assert!(config.filter_enabled);

        let file: FileConfig =
            toml::from_str("[agenda]\nreset_target = \"sometimes\"\n").unwrap();
        let config = file.into_agenda_config(defaults());
        assert_eq!(config.reset_target, ResetTarget::Fixed);
    }
}
