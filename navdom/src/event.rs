use crossterm::event::{Event as CrosstermEvent, KeyEventKind, MouseEventKind};

use crate::element::Element;
use crate::hit::{hit_test, hit_test_scrollable};
use crate::layout::LayoutResult;

/// High-level events with element targeting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Key press event
    Key { key: Key, modifiers: Modifiers },
    /// Mouse click event
    Click {
        target: Option<String>,
        x: u16,
        y: u16,
        button: MouseButton,
    },
    /// Mouse scroll event
    Scroll {
        target: Option<String>,
        x: u16,
        y: u16,
        delta_x: i16,
        delta_y: i16,
    },
    /// Terminal resized
    Resize { width: u16, height: u16 },
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    BackTab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Insert,
    F(u8),
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Convert raw crossterm events into high-level targeted events.
pub fn convert_events(
    raw: &[CrosstermEvent],
    root: &Element,
    layout: &LayoutResult,
) -> Vec<Event> {
    let mut events = Vec::new();

    for raw_event in raw {
        match raw_event {
            CrosstermEvent::Key(key_event) => {
                // Only process key press events (not release/repeat on some terminals)
                if key_event.kind != KeyEventKind::Press {
                    continue;
                }

                events.push(Event::Key {
                    key: key_event.code.into(),
                    modifiers: key_event.modifiers.into(),
                });
            }

            CrosstermEvent::Mouse(mouse_event) => {
                let x = mouse_event.column;
                let y = mouse_event.row;

                match mouse_event.kind {
                    MouseEventKind::Down(button) => {
                        let target = hit_test(layout, root, x, y);
                        events.push(Event::Click {
                            target,
                            x,
                            y,
                            button: button.into(),
                        });
                    }

                    MouseEventKind::ScrollUp => {
                        events.push(scroll_event(layout, root, x, y, 0, -1));
                    }
                    MouseEventKind::ScrollDown => {
                        events.push(scroll_event(layout, root, x, y, 0, 1));
                    }
                    MouseEventKind::ScrollLeft => {
                        events.push(scroll_event(layout, root, x, y, -1, 0));
                    }
                    MouseEventKind::ScrollRight => {
                        events.push(scroll_event(layout, root, x, y, 1, 0));
                    }

                    _ => {}
                }
            }

            CrosstermEvent::Resize(width, height) => {
                events.push(Event::Resize {
                    width: *width,
                    height: *height,
                });
            }

            _ => {}
        }
    }

    events
}

fn scroll_event(
    layout: &LayoutResult,
    root: &Element,
    x: u16,
    y: u16,
    delta_x: i16,
    delta_y: i16,
) -> Event {
    Event::Scroll {
        target: hit_test_scrollable(layout, root, x, y),
        x,
        y,
        delta_x,
        delta_y,
    }
}

// Conversion from crossterm types
impl From<crossterm::event::KeyCode> for Key {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Esc => Key::Escape,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            KeyCode::Insert => Key::Insert,
            KeyCode::F(n) => Key::F(n),
            _ => Key::Char('\0'), // Placeholder for unsupported keys
        }
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}
