//=========================================================================
// Headless Renderer
//=========================================================================
//
// In-memory `Renderer` used to drive the event loop in tests: scripted
// input events, a glyph buffer, and counters for flushes and teardown.
// Each fallible call can be switched to fail with an I/O error.
//
//=========================================================================

use std::collections::{HashMap, VecDeque};
use std::io;

use crate::core::input::InputEvent;
use crate::core::platform_bridge::{CellStyle, PlatformError, Renderer};

#[derive(Debug, Default)]
pub(crate) struct HeadlessRenderer {
    glyphs: HashMap<(u16, u16), char>,
    events: VecDeque<InputEvent>,
    shows: usize,
    finalize_calls: usize,
    initialized: bool,
    pointer_capture: bool,
    fail_init: bool,
    fail_show: bool,
    fail_pointer_capture: bool,
}

impl HeadlessRenderer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// `init()` reports a missing terminal.
    pub(crate) fn failing_init(mut self) -> Self {
        self.fail_init = true;
        self
    }

    /// `enable_pointer_capture()` is refused.
    pub(crate) fn refusing_pointer_capture(mut self) -> Self {
        self.fail_pointer_capture = true;
        self
    }

    /// Toggles failure of subsequent `show()` calls.
    pub(crate) fn fail_show(&mut self, fail: bool) {
        self.fail_show = fail;
    }

    pub(crate) fn queue_events(&mut self, events: impl IntoIterator<Item = InputEvent>) {
        self.events.extend(events);
    }

    pub(crate) fn shows(&self) -> usize {
        self.shows
    }

    pub(crate) fn finalize_calls(&self) -> usize {
        self.finalize_calls
    }

    pub(crate) fn pointer_capture(&self) -> bool {
        self.pointer_capture
    }
}

fn io_failure(what: &str) -> io::Error {
    io::Error::other(format!("{} failed", what))
}

impl Renderer for HeadlessRenderer {
    fn init(&mut self) -> Result<(), PlatformError> {
        if self.fail_init {
            return Err(PlatformError::Init(io_failure("init")));
        }
        self.initialized = true;
        Ok(())
    }

    fn set_cell(&mut self, x: u16, y: u16, glyph: char, _style: CellStyle) {
        self.glyphs.insert((x, y), glyph);
    }

    fn get_cell(&self, x: u16, y: u16) -> char {
        self.glyphs.get(&(x, y)).copied().unwrap_or(' ')
    }

    fn show(&mut self) -> Result<(), PlatformError> {
        assert!(self.initialized, "show() before init()");
        self.shows += 1;
        if self.fail_show {
            return Err(PlatformError::Io(io_failure("show")));
        }
        Ok(())
    }

    fn enable_pointer_capture(&mut self) -> Result<(), PlatformError> {
        if self.fail_pointer_capture {
            return Err(PlatformError::Io(io_failure("pointer capture")));
        }
        self.pointer_capture = true;
        Ok(())
    }

    fn has_pending_event(&mut self) -> bool {
        !self.events.is_empty()
    }

    fn poll_event(&mut self) -> InputEvent {
        self.events.pop_front().unwrap_or(InputEvent::Unidentified)
    }

    fn finalize(&mut self) {
        self.finalize_calls += 1;
    }
}
