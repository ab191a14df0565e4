//=========================================================================
// Platform Subsystem
//
// Crossterm-backed terminal implementation of the `Renderer` contract.
//
// Architecture:
// ```text
//  Event loop                          Terminal
//  ┌──────────────────────────┐       ┌──────────────────────┐
//  │ set_cell() ──► ScreenBuffer      │                      │
//  │                 (dirty set)      │                      │
//  │ show() ──► queue!(MoveTo, Print) ──► flush ──► glyphs   │
//  │                                  │                      │
//  │ has_pending_event() ◄── event::poll(0)                  │
//  │ poll_event() ◄── event::read() ── EventMapper           │
//  └──────────────────────────┘       └──────────────────────┘
// ```
//
// Key Design Decisions:
// - **Diff flush**: only glyphs whose content changed since the last
//   `show()` are written, batched with `queue!` and flushed once
// - **Resize invalidates**: after a resize every staged glyph is
//   rewritten, since the terminal may have dropped its contents
// - **Idempotent teardown**: `finalize()` restores the terminal once, and
//   `Drop` calls it so a panic does not leave the shell in raw mode
//
//=========================================================================

//=== Submodules ==========================================================

mod event_mapper;
mod screen_buffer;

#[cfg(test)]
pub(crate) mod headless;

//=== Standard Library Imports ============================================

use std::io::{self, Stdout, Write};
use std::time::Duration;

//=== External Crates =====================================================

use crossterm::{
    cursor::{self, MoveTo},
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute, queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;

//=== Internal Imports ====================================================

use crate::core::input::InputEvent;
use crate::core::platform_bridge::{CellStyle, PlatformError, Renderer};
use screen_buffer::ScreenBuffer;

//=== TerminalRenderer ====================================================

/// Full-screen terminal display.
///
/// # Lifecycle
///
/// 1. **Construction**: `TerminalRenderer::new()` - touches nothing
/// 2. **init()**: raw mode, alternate screen, hidden cursor
/// 3. **Loop**: staged draws, diff flushes, zero-timeout event polling
/// 4. **finalize()** (or drop): terminal restored
pub struct TerminalRenderer<W: Write = Stdout> {
    /// Output sink (stdout in production).
    out: W,

    /// Staged glyphs and pending redraws.
    buffer: ScreenBuffer,

    /// Raw mode and alternate screen are active.
    active: bool,

    /// Mouse reporting was enabled and must be disabled on teardown.
    pointer_capture: bool,
}

impl TerminalRenderer<Stdout> {
    //--- Construction -----------------------------------------------------

    /// Creates a renderer drawing to stdout.
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalRenderer<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    /// Creates a renderer drawing to an arbitrary sink.
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            buffer: ScreenBuffer::new(),
            active: false,
            pointer_capture: false,
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn enter_screen(&mut self) -> io::Result<()> {
        execute!(self.out, EnterAlternateScreen, cursor::Hide, Clear(ClearType::All))
    }

    fn leave_screen(&mut self) -> io::Result<()> {
        if self.pointer_capture {
            execute!(self.out, DisableMouseCapture)?;
            self.pointer_capture = false;
        }
        execute!(self.out, SetAttribute(Attribute::Reset), cursor::Show, LeaveAlternateScreen)
    }

    /// Writes every dirty glyph and flushes once.
    fn flush_dirty(&mut self) -> io::Result<usize> {
        let dirty = self.buffer.take_dirty();

        for cell in &dirty {
            let attribute = match cell.style {
                CellStyle::Plain => Attribute::Reset,
                CellStyle::Header => Attribute::Bold,
            };
            queue!(
                self.out,
                MoveTo(cell.x, cell.y),
                SetAttribute(attribute),
                Print(cell.glyph)
            )?;
        }

        self.out.flush()?;
        Ok(dirty.len())
    }
}

//=== Renderer Integration ================================================

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn init(&mut self) -> Result<(), PlatformError> {
        terminal::enable_raw_mode().map_err(PlatformError::Init)?;
        self.active = true;

        if let Err(e) = self.enter_screen() {
            self.finalize();
            return Err(PlatformError::Init(e));
        }

        info!(target: "platform", "Terminal initialized");
        Ok(())
    }

    fn set_cell(&mut self, x: u16, y: u16, glyph: char, style: CellStyle) {
        self.buffer.stage(x, y, glyph, style);
    }

    fn get_cell(&self, x: u16, y: u16) -> char {
        self.buffer.glyph(x, y)
    }

    fn show(&mut self) -> Result<(), PlatformError> {
        let written = self.flush_dirty()?;
        trace!(target: "platform", "Flushed {} cells", written);
        Ok(())
    }

    fn enable_pointer_capture(&mut self) -> Result<(), PlatformError> {
        execute!(self.out, EnableMouseCapture)?;
        self.pointer_capture = true;
        debug!(target: "platform", "Mouse capture enabled");
        Ok(())
    }

    fn has_pending_event(&mut self) -> bool {
        match event::poll(Duration::ZERO) {
            Ok(ready) => ready,
            Err(e) => {
                warn!(target: "platform", "Event poll failed: {}", e);
                false
            }
        }
    }

    fn poll_event(&mut self) -> InputEvent {
        let raw = match event::read() {
            Ok(raw) => raw,
            Err(e) => {
                warn!(target: "platform", "Event read failed: {}", e);
                return InputEvent::Unidentified;
            }
        };

        let event = event_mapper::map_event(raw);
        trace!(target: "platform", "Event: {:?}", event);

        if let InputEvent::Resize { .. } = event {
            if let Err(e) = queue!(self.out, Clear(ClearType::All)) {
                warn!(target: "platform", "Clear after resize failed: {}", e);
            }
            self.buffer.invalidate();
        }

        event
    }

    fn finalize(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;

        if let Err(e) = self.leave_screen() {
            warn!(target: "platform", "Leaving alternate screen failed: {}", e);
        }
        if let Err(e) = terminal::disable_raw_mode() {
            warn!(target: "platform", "Disabling raw mode failed: {}", e);
        }

        info!(target: "platform", "Terminal restored");
    }
}

impl<W: Write> Drop for TerminalRenderer<W> {
    fn drop(&mut self) {
        self.finalize();
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
//
// These never call `init()`: raw mode is process-global and needs a TTY.
//
