//=========================================================================
// Input Event Types
//
// Backend-neutral representation of the terminal input the simulation
// reacts to.
//
// This module abstracts away the display backend (crossterm, or a test
// double) into a small, portable set of events consumed by the
// InputHandler.
//
// Event Flow:
// ```text
// Renderer (crossterm)
//         ↓
//    InputEvent (this module)
//         ↓
//    InputHandler (edits the Simulation)
//         ↓
//    InputOutcome (quit / redraw / ignore)
// ```
//
//=========================================================================

//=== MouseButton =========================================================

/// Pointer button identifier.
///
/// `Left` is the primary button (revives cells) and `Right` the
/// secondary button (kills cells).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button.
    Left,

    /// Secondary button.
    Right,

    /// Middle button (wheel click).
    Middle,

    /// Any other button.
    Other,
}

//=== KeyCode =============================================================

/// Logical key identifier.
///
/// Terminals report the character a key produced rather than its
/// physical location, so printable keys are carried as `Char`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A printable character.
    Char(char),

    /// Escape key
    Escape,

    /// Return/Enter key
    Enter,

    /// Fallback for keys the backend reports but the engine has no name for.
    Unidentified,
}

//=== Modifiers ===========================================================

/// Modifier key state (Shift, Ctrl, Alt).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    /// No modifiers held.
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
    };

    /// Ctrl only.
    pub const CTRL: Self = Self {
        shift: false,
        ctrl: true,
        alt: false,
    };
}

//=== InputEvent ==========================================================

/// A single input event as reported by the renderer.
///
/// # Event Types
///
/// - **Key**: key press with modifier state
/// - **Pointer**: button press (or drag with the button held) at a screen
///   cell; `column`/`row` are zero-based terminal coordinates
/// - **Resize**: the display changed size and needs a full repaint
/// - **Unidentified**: anything else (focus changes, paste, scroll), ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    Key {
        key: KeyCode,
        modifiers: Modifiers,
    },

    Pointer {
        column: u16,
        row: u16,
        button: MouseButton,
    },

    Resize {
        columns: u16,
        rows: u16,
    },

    Unidentified,
}

impl InputEvent {
    /// Convenience constructor for an unmodified key press.
    pub fn key(key: KeyCode) -> Self {
        Self::Key {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    /// Convenience constructor for a pointer press.
    pub fn pointer(column: u16, row: u16, button: MouseButton) -> Self {
        Self::Pointer { column, row, button }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
