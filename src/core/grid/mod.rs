//=========================================================================
// Toroidal Grid
//
// Authoritative record of which cells are alive.
//
// The grid is a fixed W×H field whose edges are glued together: every
// coordinate handed to `get` / `set` is folded into range with Euclidean
// remainder, so there is no such thing as an out-of-bounds access.
//
// Responsibilities:
// - Store alive/dead state in a flat row-major buffer
// - Wrap arbitrary integer coordinates onto the torus
// - Apply a batch of next-generation changes in one pass
//
//=========================================================================

//=== Submodules ==========================================================

pub mod neighbors;

//=== Standard Library Imports ============================================

use std::fmt;

//=== Internal Dependencies ===============================================

use crate::core::patterns::Pattern;
use crate::core::step::ChangeSet;

//=== Cell ================================================================

/// A coordinate that has already been wrapped into `[0,W)×[0,H)`.
///
/// Only [`Grid::wrap`] produces cells for a given grid, so a `Cell` taken
/// from one grid is always a valid index into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
}

impl Cell {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

//=== GridError ===========================================================

/// Grid construction errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// A torus needs at least one column and one row.
    EmptyDimension { width: usize, height: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDimension { width, height } => {
                write!(f, "Grid dimensions must be non-zero, got {}x{}", width, height)
            }
        }
    }
}

impl std::error::Error for GridError {}

//=== Grid ================================================================

/// Fixed-size toroidal field of alive/dead cells.
///
/// # Wrapping
///
/// ```text
///   x = -1  ──►  W - 1
///   x =  W  ──►  0
///   y = -1  ──►  H - 1
/// ```
///
/// Dimensions never change after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    //--- Construction -----------------------------------------------------

    /// Creates an all-dead grid.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::EmptyDimension`] if either dimension is zero.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyDimension { width, height });
        }

        Ok(Self {
            width,
            height,
            cells: vec![false; width * height],
        })
    }

    //--- Dimensions -------------------------------------------------------

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    //--- Coordinate Wrapping ----------------------------------------------

    /// Folds any integer pair onto the torus.
    pub fn wrap(&self, x: i64, y: i64) -> Cell {
        Cell {
            x: x.rem_euclid(self.width as i64) as usize,
            y: y.rem_euclid(self.height as i64) as usize,
        }
    }

    #[inline]
    fn index(&self, cell: Cell) -> usize {
        cell.y * self.width + cell.x
    }

    //--- Access -----------------------------------------------------------

    /// Returns whether the (wrapped) coordinate is alive.
    pub fn get(&self, x: i64, y: i64) -> bool {
        self.is_alive(self.wrap(x, y))
    }

    /// Sets the (wrapped) coordinate and returns its previous state.
    pub fn set(&mut self, x: i64, y: i64, alive: bool) -> bool {
        let cell = self.wrap(x, y);
        self.set_cell(cell, alive)
    }

    pub fn is_alive(&self, cell: Cell) -> bool {
        self.cells[self.index(cell)]
    }

    pub(crate) fn set_cell(&mut self, cell: Cell, alive: bool) -> bool {
        let idx = self.index(cell);
        std::mem::replace(&mut self.cells[idx], alive)
    }

    //--- Batch Operations -------------------------------------------------

    /// Writes every entry of a change set into the grid.
    ///
    /// This is the only place a step result touches the live grid; it runs
    /// after the whole next-generation pass has finished reading.
    pub fn apply(&mut self, changes: &ChangeSet) {
        for (&cell, &alive) in changes.iter() {
            self.set_cell(cell, alive);
        }
    }

    /// Marks every cell of `pattern` alive and returns how many were newly born.
    pub fn seed(&mut self, pattern: &Pattern) -> u64 {
        pattern
            .cells
            .iter()
            .filter(|&&(x, y)| !self.set(x, y, true))
            .count() as u64
    }

    //--- Queries ----------------------------------------------------------

    /// Counts alive cells by scanning the whole grid.
    ///
    /// The event loop never calls this; population is tracked incrementally.
    pub fn count_alive(&self) -> u64 {
        self.cells.iter().filter(|&&alive| alive).count() as u64
    }

    /// Iterates every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Cell::new(x, y)))
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    //=====================================================================
    // Construction
    //=====================================================================

    #[test]
    fn new_grid_is_empty() {
        let grid = Grid::new(60, 60).unwrap();
        assert_eq!(grid.width(), 60);
        assert_eq!(grid.height(), 60);
        assert_eq!(grid.count_alive(), 0);
    }

    #[test]
    fn zero_dimension_is_rejected() {
        assert_eq!(
            Grid::new(0, 10),
            Err(GridError::EmptyDimension { width: 0, height: 10 })
        );
        assert!(Grid::new(10, 0).is_err());
    }

    #[test]
    fn grid_error_display() {
        let err = GridError::EmptyDimension { width: 0, height: 3 };
        assert_eq!(err.to_string(), "Grid dimensions must be non-zero, got 0x3");
    }

    //=====================================================================
    // Wrapping
    //=====================================================================

    #[test]
    fn wrap_folds_negative_and_overflowing_coordinates() {
        let grid = Grid::new(60, 40).unwrap();
        assert_eq!(grid.wrap(-1, -1), Cell::new(59, 39));
        assert_eq!(grid.wrap(60, 40), Cell::new(0, 0));
        assert_eq!(grid.wrap(125, -81), Cell::new(5, 39));
    }

    #[test]
    fn set_and_get_wrap_consistently() {
        let mut grid = Grid::new(10, 10).unwrap();
        grid.set(-1, 10, true);

        assert!(grid.get(9, 0));
        assert!(grid.get(19, -10));
        assert_eq!(grid.count_alive(), 1);
    }

    #[test]
    fn set_returns_previous_state() {
        let mut grid = Grid::new(5, 5).unwrap();
        assert!(!grid.set(2, 2, true));
        assert!(grid.set(2, 2, true));
        assert!(grid.set(2, 2, false));
        assert!(!grid.set(2, 2, false));
    }

    //=====================================================================
    // Batch Operations
    //=====================================================================

    #[test]
    fn apply_writes_all_changes() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.set(0, 0, true);

        let mut changes = ChangeSet::new();
        changes.insert(Cell::new(0, 0), false);
        changes.insert(Cell::new(4, 4), true);
        grid.apply(&changes);

        assert!(!grid.get(0, 0));
        assert!(grid.get(4, 4));
    }

    #[test]
    fn seed_reports_newly_born_cells_only() {
        let mut grid = Grid::new(10, 10).unwrap();
        grid.set(1, 1, true);

        let pattern = Pattern {
            name: "Pair",
            cells: &[(1, 1), (2, 2)],
        };

        assert_eq!(grid.seed(&pattern), 1);
        assert_eq!(grid.count_alive(), 2);
    }

    #[test]
    fn cells_covers_whole_domain() {
        let grid = Grid::new(3, 2).unwrap();
        assert_eq!(grid.cells().count(), 6);
        assert_eq!(grid.cells().last(), Some(Cell::new(2, 1)));
    }
}
