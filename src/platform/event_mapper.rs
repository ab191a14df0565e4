//=========================================================================
// Platform Event Mapper
//
// Converts crossterm terminal events into engine `InputEvent`s.
//
// Responsibilities:
// - Translate key presses (releases are dropped)
// - Translate button presses and held-button drags into pointer events
// - Report terminal resizes
// - Fall back to `Unidentified` for everything else
//
//=========================================================================

use crossterm::event::{
    Event, KeyCode as CtKeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton as CtMouseButton,
    MouseEvent, MouseEventKind,
};

use crate::core::input::{InputEvent, KeyCode, Modifiers, MouseButton};

//=== Key Conversion ======================================================

impl From<CtKeyCode> for KeyCode {
    fn from(code: CtKeyCode) -> Self {
        match code {
            CtKeyCode::Char(c) => KeyCode::Char(c),
            CtKeyCode::Esc => KeyCode::Escape,
            CtKeyCode::Enter => KeyCode::Enter,
            _ => KeyCode::Unidentified,
        }
    }
}

impl From<KeyModifiers> for Modifiers {
    fn from(mods: KeyModifiers) -> Self {
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

//=== Mouse Conversion ====================================================

impl From<CtMouseButton> for MouseButton {
    fn from(button: CtMouseButton) -> Self {
        match button {
            CtMouseButton::Left => MouseButton::Left,
            CtMouseButton::Right => MouseButton::Right,
            CtMouseButton::Middle => MouseButton::Middle,
        }
    }
}

//=== Full Event Conversion ===============================================
//
// Drags count as presses: holding a button while moving paints (or
// erases) every cell the pointer crosses.
//

pub(crate) fn map_event(event: Event) -> InputEvent {
    match event {
        //--- Keyboard -----------------------------------------------------
        Event::Key(KeyEvent { code, modifiers, kind, .. }) => match kind {
            KeyEventKind::Press | KeyEventKind::Repeat => InputEvent::Key {
                key: KeyCode::from(code),
                modifiers: Modifiers::from(modifiers),
            },
            KeyEventKind::Release => InputEvent::Unidentified,
        },

        //--- Pointer ------------------------------------------------------
        Event::Mouse(MouseEvent { kind, column, row, .. }) => match kind {
            MouseEventKind::Down(button) | MouseEventKind::Drag(button) => InputEvent::Pointer {
                column,
                row,
                button: MouseButton::from(button),
            },
            _ => InputEvent::Unidentified,
        },

        //--- Display ------------------------------------------------------
        Event::Resize(columns, rows) => InputEvent::Resize { columns, rows },

        //--- Unhandled ----------------------------------------------------
        _ => InputEvent::Unidentified,
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: CtKeyCode, modifiers: KeyModifiers, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind,
            state: KeyEventState::NONE,
        })
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn key_press_maps_code_and_modifiers() {
        let event = key(CtKeyCode::Char('c'), KeyModifiers::CONTROL, KeyEventKind::Press);
        assert_eq!(
            map_event(event),
            InputEvent::Key {
                key: KeyCode::Char('c'),
                modifiers: Modifiers::CTRL
            }
        );
    }

    #[test]
    fn escape_maps_to_escape() {
        let event = key(CtKeyCode::Esc, KeyModifiers::NONE, KeyEventKind::Press);
        assert_eq!(map_event(event), InputEvent::key(KeyCode::Escape));
    }

    #[test]
    fn key_release_is_dropped() {
        let event = key(CtKeyCode::Char('q'), KeyModifiers::NONE, KeyEventKind::Release);
        assert_eq!(map_event(event), InputEvent::Unidentified);
    }

    #[test]
    fn unnamed_keys_are_unidentified() {
        let event = key(CtKeyCode::F(5), KeyModifiers::NONE, KeyEventKind::Press);
        assert_eq!(map_event(event), InputEvent::key(KeyCode::Unidentified));
    }

    #[test]
    fn modifier_flags_convert() {
        let shift = Modifiers::from(KeyModifiers::SHIFT);
        assert!(shift.shift && !shift.ctrl && !shift.alt);

        let alt = Modifiers::from(KeyModifiers::ALT);
        assert!(alt.alt && !alt.shift && !alt.ctrl);

        assert_eq!(Modifiers::from(KeyModifiers::CONTROL), Modifiers::CTRL);
        assert_eq!(Modifiers::from(KeyModifiers::NONE), Modifiers::NONE);
    }

    #[test]
    fn button_press_maps_to_pointer() {
        let event = mouse(MouseEventKind::Down(CtMouseButton::Left), 7, 9);
        assert_eq!(map_event(event), InputEvent::pointer(7, 9, MouseButton::Left));

        let event = mouse(MouseEventKind::Down(CtMouseButton::Right), 1, 2);
        assert_eq!(map_event(event), InputEvent::pointer(1, 2, MouseButton::Right));
    }

    #[test]
    fn drag_maps_to_pointer() {
        let event = mouse(MouseEventKind::Drag(CtMouseButton::Right), 4, 4);
        assert_eq!(map_event(event), InputEvent::pointer(4, 4, MouseButton::Right));
    }

    #[test]
    fn release_and_motion_are_unidentified() {
        assert_eq!(
            map_event(mouse(MouseEventKind::Up(CtMouseButton::Left), 0, 0)),
            InputEvent::Unidentified
        );
        assert_eq!(map_event(mouse(MouseEventKind::Moved, 0, 0)), InputEvent::Unidentified);
        assert_eq!(map_event(mouse(MouseEventKind::ScrollDown, 0, 0)), InputEvent::Unidentified);
    }

    #[test]
    fn resize_is_reported() {
        assert_eq!(
            map_event(Event::Resize(120, 40)),
            InputEvent::Resize { columns: 120, rows: 40 }
        );
    }

    #[test]
    fn focus_events_are_unidentified() {
        assert_eq!(map_event(Event::FocusGained), InputEvent::Unidentified);
    }
}
