use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    // Core actions (passed to core::update)
    Quit,
    ForceQuit,
    Submit,
    Reset,

    // TUI-local events (handled directly in TUI)
    InputChar(char),
    Paste(String),
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    FocusNext,
    FocusPrev,
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> std::io::Result<Option<TuiEvent>> {
    poll_event_timeout(Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: Duration) -> std::io::Result<Option<TuiEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    Ok(translate(event::read()?))
}

fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => {
            // Windows reports releases too
            if key_event.kind != KeyEventKind::Press {
                return None;
            }
            log::trace!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            match (key_event.modifiers, key_event.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                (KeyModifiers::CONTROL, KeyCode::Char('r')) => Some(TuiEvent::Reset),
                (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
                (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
                (_, KeyCode::Delete) => Some(TuiEvent::Delete),
                (_, KeyCode::Enter) => Some(TuiEvent::Submit),
                (_, KeyCode::Esc) => Some(TuiEvent::Quit),
                (_, KeyCode::Left) => Some(TuiEvent::CursorLeft),
                (_, KeyCode::Right) => Some(TuiEvent::CursorRight),
                (_, KeyCode::Home) => Some(TuiEvent::CursorHome),
                (_, KeyCode::End) => Some(TuiEvent::CursorEnd),
                (_, KeyCode::Tab) | (_, KeyCode::Down) => Some(TuiEvent::FocusNext),
                (_, KeyCode::BackTab) | (_, KeyCode::Up) => Some(TuiEvent::FocusPrev),
                _ => None,
            }
        }
        Event::Paste(data) => Some(TuiEvent::Paste(data)),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}
