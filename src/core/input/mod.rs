//=========================================================================
// Input Handler
//
// Interprets one input event against the simulation, immediately.
//
// Responsibilities:
// - Map quit keys (Esc, `q`, Ctrl+C) to a termination request
// - Resolve pointer positions to grid cells (below the header rows)
// - Apply state-checked cell edits so the population stays exact
//
// Notes:
// Edits are never deferred to the next tick. The event loop mirrors the
// returned outcome to the display and flushes right away.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod event;

//=== External Crates =====================================================

use log::{debug, info, trace};

//=== Internal Dependencies ===============================================

use crate::core::grid::Cell;
use crate::core::simulation::Simulation;
pub use event::{InputEvent, KeyCode, Modifiers, MouseButton};

//=== InputOutcome ========================================================

/// What the event loop must do after an event was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// Finalize the display and stop the loop.
    Quit,

    /// A pointer edit targeted `cell`; `changed` is false when the cell
    /// already had the requested state. Either way the frame is flushed.
    Edited { cell: Cell, changed: bool },

    /// The whole frame must be redrawn.
    Repaint,

    /// Nothing to do.
    Ignored,
}

//=== InputHandler ========================================================

/// Applies input events to a [`Simulation`].
///
/// The handler knows how many screen rows the header occupies so it can
/// translate terminal coordinates into grid coordinates.
#[derive(Debug, Clone, Copy)]
pub struct InputHandler {
    header_rows: u16,
}

impl InputHandler {
    pub fn new(header_rows: u16) -> Self {
        Self { header_rows }
    }

    /// Handles one event and reports the follow-up the loop must perform.
    pub fn handle(&self, simulation: &mut Simulation, event: &InputEvent) -> InputOutcome {
        match *event {
            InputEvent::Key { key, modifiers } => self.handle_key(key, modifiers),
            InputEvent::Pointer { column, row, button } => {
                self.handle_pointer(simulation, column, row, button)
            }
            InputEvent::Resize { columns, rows } => {
                debug!(target: "input", "Display resized to {}x{}", columns, rows);
                InputOutcome::Repaint
            }
            InputEvent::Unidentified => InputOutcome::Ignored,
        }
    }

    /// Resolves a screen position to a grid cell, or `None` on the header.
    ///
    /// Positions past the grid's right or bottom edge wrap around.
    pub fn resolve(&self, simulation: &Simulation, column: u16, row: u16) -> Option<Cell> {
        let y = row.checked_sub(self.header_rows)?;
        Some(simulation.grid().wrap(i64::from(column), i64::from(y)))
    }

    //--- Internal Helpers -------------------------------------------------

    fn handle_key(&self, key: KeyCode, modifiers: Modifiers) -> InputOutcome {
        let quit = match key {
            KeyCode::Escape => true,
            KeyCode::Char('c') | KeyCode::Char('C') if modifiers.ctrl => true,
            KeyCode::Char('q') => !modifiers.ctrl,
            _ => false,
        };

        if quit {
            info!(target: "input", "Quit requested ({:?})", key);
            InputOutcome::Quit
        } else {
            trace!(target: "input", "Key ignored: {:?} {:?}", key, modifiers);
            InputOutcome::Ignored
        }
    }

    fn handle_pointer(
        &self,
        simulation: &mut Simulation,
        column: u16,
        row: u16,
        button: MouseButton,
    ) -> InputOutcome {
        let Some(cell) = self.resolve(simulation, column, row) else {
            trace!(target: "input", "Pointer on header row {} ignored", row);
            return InputOutcome::Ignored;
        };

        let (cell, changed) = match button {
            MouseButton::Left => simulation.revive(cell.x as i64, cell.y as i64),
            MouseButton::Right => simulation.kill(cell.x as i64, cell.y as i64),
            MouseButton::Middle | MouseButton::Other => return InputOutcome::Ignored,
        };

        InputOutcome::Edited { cell, changed }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
