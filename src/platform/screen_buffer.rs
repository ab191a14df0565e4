//=========================================================================
// Screen Buffer
//=========================================================================
//
// Staged glyphs with dirty tracking for the terminal renderer.
//
// `stage()` records a glyph and marks its position dirty only when the
// content actually changed. `take_dirty()` hands the flush the changed
// positions in row-major order so cursor moves stay short.
//
//=========================================================================

use std::collections::{BTreeSet, HashMap};

use crate::core::platform_bridge::CellStyle;

/// A glyph waiting to be written to the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct StagedCell {
    pub x: u16,
    pub y: u16,
    pub glyph: char,
    pub style: CellStyle,
}

#[derive(Debug, Default)]
pub(crate) struct ScreenBuffer {
    /// Keyed by (row, column).
    cells: HashMap<(u16, u16), (char, CellStyle)>,
    dirty: BTreeSet<(u16, u16)>,
}

impl ScreenBuffer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Records a glyph; marks it dirty if it differs from what is staged.
    pub(crate) fn stage(&mut self, x: u16, y: u16, glyph: char, style: CellStyle) {
        let key = (y, x);
        if self.cells.insert(key, (glyph, style)) != Some((glyph, style)) {
            self.dirty.insert(key);
        }
    }

    /// Staged glyph at `(x, y)`, blank if never staged.
    pub(crate) fn glyph(&self, x: u16, y: u16) -> char {
        self.cells.get(&(y, x)).map_or(' ', |&(glyph, _)| glyph)
    }

    /// Drains dirty positions in row-major order.
    pub(crate) fn take_dirty(&mut self) -> Vec<StagedCell> {
        let dirty = std::mem::take(&mut self.dirty);
        dirty
            .into_iter()
            .filter_map(|(y, x)| {
                self.cells
                    .get(&(y, x))
                    .map(|&(glyph, style)| StagedCell { x, y, glyph, style })
            })
            .collect()
    }

    /// Marks every staged glyph dirty (after the terminal lost its contents).
    pub(crate) fn invalidate(&mut self) {
        self.dirty.extend(self.cells.keys().copied());
    }

    #[cfg(test)]
    pub(crate) fn dirty_len(&self) -> usize {
        self.dirty.len()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
