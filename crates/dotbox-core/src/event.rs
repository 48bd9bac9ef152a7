use crossterm::event::{Event, KeyEvent, KeyEventKind, MouseEventKind};

/// Host-wide input events, as seen by the [`Document`](crate::Document).
///
/// The runtime converts raw crossterm events with
/// [`HostEvent::from_crossterm`] and dispatches the result to every listener
/// registered for the matching [`ListenerKind`](crate::ListenerKind).
/// Mouse motion, drags, scrolling and key releases have no counterpart here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// A key was pressed (or auto-repeated).
    Key(KeyEvent),
    /// A mouse button went down at the given cell.
    PointerDown {
        /// Zero-based column of the pressed cell.
        column: u16,
        /// Zero-based row of the pressed cell.
        row: u16,
    },
    /// Terminal resized to (columns, rows).
    Resize(u16, u16),
    /// Terminal window gained focus.
    FocusGained,
    /// Terminal window lost focus.
    FocusLost,
    /// Bracketed paste content.
    Paste(String),
}

impl HostEvent {
    /// Convert a crossterm event, dropping the kinds the host does not route.
    pub fn from_crossterm(event: Event) -> Option<Self> {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => Some(HostEvent::Key(key)),
            Event::Key(_) => None,
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(_) => Some(HostEvent::PointerDown {
                    column: mouse.column,
                    row: mouse.row,
                }),
                _ => None,
            },
            Event::Resize(w, h) => Some(HostEvent::Resize(w, h)),
            Event::FocusGained => Some(HostEvent::FocusGained),
            Event::FocusLost => Some(HostEvent::FocusLost),
            Event::Paste(s) => Some(HostEvent::Paste(s)),
        }
    }

    /// The key, if this is a key event.
    pub fn as_key(&self) -> Option<&KeyEvent> {
        match self {
            HostEvent::Key(key) => Some(key),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEvent};

    fn mouse(kind: MouseEventKind) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column: 4,
            row: 2,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn mouse_down_becomes_pointer_down() {
        let ev = HostEvent::from_crossterm(mouse(MouseEventKind::Down(MouseButton::Left)));
        assert_eq!(ev, Some(HostEvent::PointerDown { column: 4, row: 2 }));
    }

    #[test]
    fn mouse_motion_is_dropped() {
        assert_eq!(HostEvent::from_crossterm(mouse(MouseEventKind::Moved)), None);
        assert_eq!(
            HostEvent::from_crossterm(mouse(MouseEventKind::Up(MouseButton::Left))),
            None
        );
    }

    #[test]
    fn key_release_is_dropped() {
        let mut key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(HostEvent::from_crossterm(Event::Key(key)), None);
    }

    #[test]
    fn key_press_passes_through() {
        let key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        let ev = HostEvent::from_crossterm(Event::Key(key)).unwrap();
        assert_eq!(ev.as_key(), Some(&key));
    }
}
