pub mod agenda_panel;
pub mod bulletin;
pub mod header;
pub mod roster;
pub mod sidebar;
pub mod status_bar;

pub use agenda_panel::AgendaPanel;
pub use bulletin::Bulletin;
pub use header::Header;
pub use roster::Roster;
pub use sidebar::Sidebar;
pub use status_bar::StatusBar;
