//=========================================================================
// Neighbor Model
//
// The Moore neighborhood: eight offsets, every non-zero combination of
// {-1, 0, 1} × {-1, 0, 1}. Order does not matter for counting.
//
//=========================================================================

use super::Grid;

/// Offsets of the eight cells adjacent to a cell (diagonals included).
pub const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Counts alive neighbors of `(x, y)`, wrapping across every edge.
pub fn live_neighbors(grid: &Grid, x: i64, y: i64) -> u8 {
    NEIGHBOR_OFFSETS
        .iter()
        .filter(|&&(dx, dy)| grid.get(x + dx, y + dy))
        .count() as u8
}

//=========================================================================
// Unit Tests
//=========================================================================
