pub mod event;
pub mod state;
pub mod widget;

pub use event::CalendarEvent;
pub use widget::{AgendaConfig, AgendaWidget, ResetTarget};
