//=========================================================================
// Compile-Time Configuration
//=========================================================================
//
// Defaults for the simulation. There are no runtime flags; library
// callers and tests override these through `EngineBuilder`.
//
//=========================================================================

use std::time::Duration;

use crate::core::patterns::{Pattern, GLIDER};

/// Grid width in cells.
pub const GRID_WIDTH: usize = 60;

/// Grid height in cells.
pub const GRID_HEIGHT: usize = 60;

/// Time between simulation ticks.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Screen rows reserved above the grid for the counters.
pub const HEADER_ROWS: u16 = 2;

/// Pattern the grid is seeded with at startup.
pub const INITIAL_PATTERN: Pattern = GLIDER;

/// Glyph drawn for an alive cell.
pub const ALIVE_GLYPH: char = '█';

/// Glyph drawn for a dead cell.
pub const DEAD_GLYPH: char = ' ';

/// Longest the loop sleeps when there is nothing to do.
pub const IDLE_SLEEP: Duration = Duration::from_millis(10);

/// Environment variable naming a file to append log output to.
pub const LOG_FILE_ENV: &str = "TORUS_LIFE_LOG";

/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";
