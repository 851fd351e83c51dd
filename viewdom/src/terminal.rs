//! Translation from crossterm terminal events to targeted [`Event`]s.
//!
//! A terminal reports raw keys and cell coordinates. Keys go to whatever
//! holds focus; mouse presses go to the element hit-tested under the cell.

use crossterm::event::{
    Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton as TermButton,
    MouseEventKind,
};

use crate::element::Element;
use crate::event::{Event, Key, Modifiers, MouseButton};
use crate::focus::FocusState;
use crate::hit::hit_test;
use crate::layout::LayoutResult;

/// Turn one terminal event into a widget event.
///
/// Returns `None` for input that has no widget-level meaning: key releases,
/// keys with no [`Key`] equivalent, mouse motion, scrolling and pastes.
pub fn translate_terminal_event(
    event: &TermEvent,
    root: &Element,
    layout: &LayoutResult,
    focus: &FocusState,
) -> Option<Event> {
    match event {
        TermEvent::Key(key_event) => translate_key(key_event, focus),
        TermEvent::Mouse(mouse) => {
            let (x, y) = (i32::from(mouse.column), i32::from(mouse.row));
            let target = hit_test(layout, root, x, y);
            match mouse.kind {
                MouseEventKind::Down(button) => Some(Event::PointerDown {
                    target,
                    x,
                    y,
                    button: mouse_button(button),
                }),
                MouseEventKind::Up(button) => Some(Event::PointerUp {
                    target,
                    x,
                    y,
                    button: mouse_button(button),
                }),
                _ => None,
            }
        }
        TermEvent::FocusLost => Some(Event::WindowBlur),
        TermEvent::Resize(width, height) => Some(Event::Resize {
            width: i32::from(*width),
            height: i32::from(*height),
        }),
        _ => None,
    }
}

fn translate_key(key_event: &KeyEvent, focus: &FocusState) -> Option<Event> {
    if key_event.kind == KeyEventKind::Release {
        return None;
    }
    let Some(key) = key_from_code(key_event.code) else {
        log::trace!("[terminal] dropping unmapped key {:?}", key_event.code);
        return None;
    };
    Some(Event::Key {
        target: focus.focused().map(str::to_string),
        key,
        modifiers: modifiers(key_event.modifiers),
    })
}

fn key_from_code(code: KeyCode) -> Option<Key> {
    let key = match code {
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
        KeyCode::F(n) => Key::F(n),
        _ => return None,
    };
    Some(key)
}

fn modifiers(mods: KeyModifiers) -> Modifiers {
    Modifiers {
        shift: mods.contains(KeyModifiers::SHIFT),
        ctrl: mods.contains(KeyModifiers::CONTROL),
        alt: mods.contains(KeyModifiers::ALT),
    }
}

fn mouse_button(button: TermButton) -> MouseButton {
    match button {
        TermButton::Left => MouseButton::Left,
        TermButton::Right => MouseButton::Right,
        TermButton::Middle => MouseButton::Middle,
    }
}
