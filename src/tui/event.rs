use std::io;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};

/// Terminal input, already reduced to what the page cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    Quit,
    Tab,
    BackTab,
    Escape,
    /// Enter or Space: click the focused element.
    Activate,
    ScrollUp,
    ScrollDown,
    /// Left button pressed at (column, row). Doubles as touch-start.
    PointerDown(u16, u16),
    /// Left button released at (column, row). Doubles as touch-end.
    PointerUp(u16, u16),
    /// New terminal size (columns, rows).
    Resize(u16, u16),
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> io::Result<Option<TuiEvent>> {
    poll_event_timeout(Duration::ZERO)
}

pub fn poll_event_timeout(timeout: Duration) -> io::Result<Option<TuiEvent>> {
    if event::poll(timeout)? {
        Ok(translate(event::read()?))
    } else {
        Ok(None)
    }
}

fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => {
            if key_event.kind != KeyEventKind::Press {
                return None;
            }
            log::debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
            match (key_event.modifiers, key_event.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
                (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
                // Some terminals report Shift+Tab as Tab with SHIFT held
                (m, KeyCode::Tab) if m.contains(KeyModifiers::SHIFT) => Some(TuiEvent::BackTab),
                (_, KeyCode::Tab) => Some(TuiEvent::Tab),
                (_, KeyCode::BackTab) => Some(TuiEvent::BackTab),
                (_, KeyCode::Esc) => Some(TuiEvent::Escape),
                (_, KeyCode::Enter | KeyCode::Char(' ')) => Some(TuiEvent::Activate),
                (_, KeyCode::Up | KeyCode::PageUp) => Some(TuiEvent::ScrollUp),
                (_, KeyCode::Down | KeyCode::PageDown) => Some(TuiEvent::ScrollDown),
                _ => None,
            }
        }
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                Some(TuiEvent::PointerDown(mouse_event.column, mouse_event.row))
            }
            MouseEventKind::Up(MouseButton::Left) => {
                Some(TuiEvent::PointerUp(mouse_event.column, mouse_event.row))
            }
            MouseEventKind::ScrollUp => Some(TuiEvent::ScrollUp),
            MouseEventKind::ScrollDown => Some(TuiEvent::ScrollDown),
            _ => None,
        },
        Event::Resize(columns, rows) => Some(TuiEvent::Resize(columns, rows)),
        _ => None,
    }
}
