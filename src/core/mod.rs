//=========================================================================
// Simulation Core
//
// Everything that decides what the grid looks like, independent of how
// it is displayed.
//
// Components (leaves first):
// - `grid`: toroidal alive/dead storage and the neighbor model
// - `patterns`: seed patterns
// - `step`: B3/S23 next-generation pass producing a change set
// - `simulation`: grid + population + generation, kept consistent
// - `input`: event types and the handler that applies them
// - `hud`: header line formatting
// - `platform_bridge`: the renderer contract and shutdown signalling
//
// Notes:
// The core owns no threads. The event loop drives it from one thread
// and passes the simulation by `&mut`.
//
//=========================================================================

pub mod grid;
pub mod hud;
pub mod input;
pub mod patterns;
pub mod platform_bridge;
pub mod simulation;
pub mod step;

//=== Re-exports ==========================================================

pub use grid::{Cell, Grid, GridError};
pub use simulation::Simulation;
pub use step::{ChangeSet, StepEngine, StepOutcome};
