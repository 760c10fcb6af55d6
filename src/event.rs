use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

/// Block up to `timeout` for the next key press. Repeats and non-key
/// events (resize, release) are skipped.
pub fn next_key_event(timeout: Duration) -> color_eyre::Result<Option<KeyEvent>> {
    loop {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => return Ok(Some(key)),
            _ => continue,
        }
    }
}
