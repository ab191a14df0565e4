//=========================================================================
// Step Engine
//
// Computes the next generation under the B3/S23 rule.
//
// Architecture:
// ```text
//   &Grid (frame N) ──advance()──► StepOutcome { changes, population_delta }
//                                          │
//                     caller ◄─────────────┘  grid.apply(&changes)
// ```
//
// The pass borrows the grid immutably for its whole duration and only
// records flips into a separate change set. Nothing written for frame N+1
// is visible while frame N is being evaluated, so the result does not
// depend on the order cells are visited in.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::collections::BTreeMap;

//=== External Crates =====================================================

use log::trace;

//=== Internal Dependencies ===============================================

use crate::core::grid::neighbors::live_neighbors;
use crate::core::grid::{Cell, Grid};

//=== ChangeSet ===========================================================

/// Cells that flip between two generations, mapped to their new state.
///
/// Ordered so that redraws and comparisons are deterministic.
pub type ChangeSet = BTreeMap<Cell, bool>;

//=== StepOutcome =========================================================

/// Result of one generation pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StepOutcome {
    /// Only cells whose state changes; unchanged cells are absent.
    pub changes: ChangeSet,

    /// Births minus deaths.
    pub population_delta: i64,
}

//=== StepEngine ==========================================================

/// Stateless B3/S23 rule engine.
pub struct StepEngine;

impl StepEngine {
    /// Classic Conway rule: birth on 3, survival on 2 or 3.
    #[inline]
    pub fn next_state(alive: bool, neighbors: u8) -> bool {
        matches!((alive, neighbors), (true, 2) | (_, 3))
    }

    /// Evaluates every cell of `grid` and returns the flips for the next frame.
    pub fn advance(grid: &Grid) -> StepOutcome {
        let mut outcome = StepOutcome::default();

        for cell in grid.cells() {
            let alive = grid.is_alive(cell);
            let neighbors = live_neighbors(grid, cell.x as i64, cell.y as i64);
            let next = Self::next_state(alive, neighbors);

            if next != alive {
                outcome.changes.insert(cell, next);
                outcome.population_delta += if next { 1 } else { -1 };
            }
        }

        trace!(
            target: "engine::tick",
            "Step computed: {} changes (delta {:+})",
            outcome.changes.len(),
            outcome.population_delta
        );

        outcome
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
