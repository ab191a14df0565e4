//=========================================================================
// Simulation State
//
// The single mutable value the event loop owns: the grid plus the two
// counters shown in the header.
//
// Invariants:
// - `population` equals `grid.count_alive()` between operations
// - `generation` grows by exactly one per `tick()` and never otherwise
//
// Both counters are updated incrementally; nothing here rescans the grid.
//
//=========================================================================

//=== External Crates =====================================================

use log::{debug, trace};

//=== Internal Dependencies ===============================================

use crate::core::grid::{Cell, Grid, GridError};
use crate::core::patterns::Pattern;
use crate::core::step::{StepEngine, StepOutcome};

//=== Simulation ==========================================================

/// Grid, population and generation, kept mutually consistent.
#[derive(Debug, Clone)]
pub struct Simulation {
    grid: Grid,
    population: u64,
    generation: u64,
}

impl Simulation {
    //--- Construction -----------------------------------------------------

    /// Creates an empty simulation at generation zero.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        Ok(Self {
            grid: Grid::new(width, height)?,
            population: 0,
            generation: 0,
        })
    }

    /// Creates a simulation seeded with `pattern`.
    pub fn seeded(width: usize, height: usize, pattern: &Pattern) -> Result<Self, GridError> {
        let mut simulation = Self::new(width, height)?;
        simulation.population = simulation.grid.seed(pattern);

        debug!(
            target: "engine",
            "Seeded {} ({} cells) on {}x{} grid",
            pattern.name,
            simulation.population,
            width,
            height
        );

        Ok(simulation)
    }

    //--- Accessors --------------------------------------------------------

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn population(&self) -> u64 {
        self.population
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    //--- Tick -------------------------------------------------------------

    /// Advances one generation and returns the applied flips.
    ///
    /// The full pass completes before any change lands on the grid.
    pub fn tick(&mut self) -> StepOutcome {
        let outcome = StepEngine::advance(&self.grid);

        self.grid.apply(&outcome.changes);
        self.population = self.population.saturating_add_signed(outcome.population_delta);
        self.generation += 1;

        trace!(
            target: "engine::tick",
            "Generation {}: population {}",
            self.generation,
            self.population
        );

        outcome
    }

    //--- User Edits -------------------------------------------------------

    /// Makes `(x, y)` alive. Returns the wrapped cell and whether it changed.
    ///
    /// Population only moves when the cell was previously dead, so repeated
    /// clicks on the same cell cannot drift the counter.
    pub fn revive(&mut self, x: i64, y: i64) -> (Cell, bool) {
        self.edit(x, y, true)
    }

    /// Makes `(x, y)` dead. Returns the wrapped cell and whether it changed.
    pub fn kill(&mut self, x: i64, y: i64) -> (Cell, bool) {
        self.edit(x, y, false)
    }

    fn edit(&mut self, x: i64, y: i64, alive: bool) -> (Cell, bool) {
        let cell = self.grid.wrap(x, y);
        let was_alive = self.grid.set_cell(cell, alive);
        let changed = was_alive != alive;

        if changed {
            if alive {
                self.population += 1;
            } else {
                self.population -= 1;
            }
        }

        debug!(
            target: "input",
            "Cell ({}, {}) set {} (changed: {}, population: {})",
            cell.x,
            cell.y,
            if alive { "alive" } else { "dead" },
            changed,
            self.population
        );

        (cell, changed)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
