//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// Display-backend contract consumed by the event loop, and the errors a
// backend may report.
//
// The simulation never reads alive/dead state back from the display: the
// renderer is a mirror of the in-memory grid, not its storage.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::fmt;
use std::io;

//=== Internal Dependencies ===============================================

use crate::core::input::InputEvent;

//=== CellStyle ===========================================================

/// Presentation hint for a drawn cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellStyle {
    /// Terminal default colors.
    #[default]
    Plain,

    /// Header text.
    Header,
}

//=== Renderer ============================================================

/// Character-cell display backend.
///
/// All calls happen on the event loop's thread. Coordinates are screen
/// cells with a top-left origin.
///
/// # Contract
///
/// - `init` runs once before anything else; failure is fatal
/// - `set_cell` only stages a glyph; nothing is visible until `show`
/// - `has_pending_event` never blocks
/// - `poll_event` is called only after `has_pending_event` returned true
/// - `finalize` may be called more than once
pub trait Renderer {
    /// Prepares the display.
    fn init(&mut self) -> Result<(), PlatformError>;

    /// Stages one glyph at `(x, y)`.
    fn set_cell(&mut self, x: u16, y: u16, glyph: char, style: CellStyle);

    /// Returns the glyph last staged at `(x, y)` (blank if never drawn).
    fn get_cell(&self, x: u16, y: u16) -> char;

    /// Flushes staged glyphs to the physical display.
    fn show(&mut self) -> Result<(), PlatformError>;

    /// Starts reporting pointer events.
    fn enable_pointer_capture(&mut self) -> Result<(), PlatformError>;

    /// Returns `true` if an input event can be read without blocking.
    fn has_pending_event(&mut self) -> bool;

    /// Reads exactly one pending event.
    fn poll_event(&mut self) -> InputEvent;

    /// Restores the display to its pre-`init` state.
    fn finalize(&mut self);
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn init(&mut self) -> Result<(), PlatformError> {
        (**self).init()
    }

    fn set_cell(&mut self, x: u16, y: u16, glyph: char, style: CellStyle) {
        (**self).set_cell(x, y, glyph, style);
    }

    fn get_cell(&self, x: u16, y: u16) -> char {
        (**self).get_cell(x, y)
    }

    fn show(&mut self) -> Result<(), PlatformError> {
        (**self).show()
    }

    fn enable_pointer_capture(&mut self) -> Result<(), PlatformError> {
        (**self).enable_pointer_capture()
    }

    fn has_pending_event(&mut self) -> bool {
        (**self).has_pending_event()
    }

    fn poll_event(&mut self) -> InputEvent {
        (**self).poll_event()
    }

    fn finalize(&mut self) {
        (**self).finalize();
    }
}

//=== PlatformError =======================================================

/// Display backend and OS integration errors.
///
/// `Init` and `SignalHandler` are fatal before the loop starts; `Io`
/// during the loop is logged and the loop carries on.
#[derive(Debug)]
pub enum PlatformError {
    /// Display could not be prepared (no TTY, raw mode refused, ...).
    Init(io::Error),

    /// Writing to or reading from the display failed.
    Io(io::Error),

    /// The interrupt listener could not be installed.
    SignalHandler(String),
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init(e) => write!(f, "Display initialization failed: {}", e),
            Self::Io(e) => write!(f, "Display I/O error: {}", e),
            Self::SignalHandler(e) => write!(f, "Interrupt handler installation failed: {}", e),
        }
    }
}

impl std::error::Error for PlatformError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Init(e) | Self::Io(e) => Some(e),
            Self::SignalHandler(_) => None,
        }
    }
}

impl From<io::Error> for PlatformError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
