//=========================================================================
// Simulation Engine
//
// Main entry point and coordinator for a run.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run(renderer, signal)──>  [EventLoop]
//         │                          │
//         ├─ with_dimensions()       ├─ renderer.init()   (fatal on error)
//         ├─ with_tick_interval()    ├─ seeds Simulation
//         └─ with_seed()             └─ blocks until quit / interrupt
// ```
//
//=========================================================================

//=== Submodules ==========================================================

mod event_loop;
mod tick_timer;

//=== Standard Library Imports ============================================

use std::fmt;
use std::time::{Duration, Instant};

//=== External Dependencies ===============================================

use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::config::{GRID_HEIGHT, GRID_WIDTH, HEADER_ROWS, INITIAL_PATTERN, TICK_INTERVAL};
use crate::core::grid::GridError;
use crate::core::patterns::Pattern;
use crate::core::platform_bridge::{PlatformError, Renderer, ShutdownSignal};
use crate::core::simulation::Simulation;

pub use event_loop::{EventLoop, LoopState, RunSummary, TickControl};

//=== EngineError =========================================================

/// Errors that abort a run before the loop starts.
#[derive(Debug)]
pub enum EngineError {
    /// Display or OS integration failed.
    Platform(PlatformError),

    /// The simulation grid could not be built.
    Grid(GridError),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Platform(e) => write!(f, "{}", e),
            Self::Grid(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Platform(e) => Some(e),
            Self::Grid(e) => Some(e),
        }
    }
}

impl From<PlatformError> for EngineError {
    fn from(e: PlatformError) -> Self {
        Self::Platform(e)
    }
}

impl From<GridError> for EngineError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **Grid**: 60×60
/// - **Tick interval**: 100 ms
/// - **Seed**: glider
///
/// # Examples
///
/// ```no_run
/// use torus_life::{EngineBuilder, TerminalRenderer};
/// use torus_life::core::platform_bridge::install_interrupt_listener;
///
/// let signal = install_interrupt_listener()?;
/// let summary = EngineBuilder::new()
///     .build()
///     .run(TerminalRenderer::new(), signal)?;
/// println!("stopped at generation {}", summary.generation);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct EngineBuilder {
    width: usize,
    height: usize,
    tick_interval: Duration,
    seed: Pattern,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            tick_interval: TICK_INTERVAL,
            seed: INITIAL_PATTERN,
        }
    }

    /// Sets the grid size.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero or the grid plus header would
    /// not fit in terminal coordinates.
    pub fn with_dimensions(mut self, width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "Grid dimensions must be positive");
        assert!(
            width <= u16::MAX as usize && height <= (u16::MAX - HEADER_ROWS) as usize,
            "Grid dimensions exceed terminal coordinates"
        );
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the time between simulation ticks.
    ///
    /// # Panics
    ///
    /// Panics if `interval` is zero.
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        assert!(!interval.is_zero(), "Tick interval must be positive");
        self.tick_interval = interval;
        self
    }

    /// Sets the pattern the grid starts from.
    pub fn with_seed(mut self, seed: Pattern) -> Self {
        self.seed = seed;
        self
    }

    /// Builds the engine instance.
    pub fn build(self) -> Engine {
        info!(
            target: "engine",
            "Building engine ({}x{}, tick {:?}, seed {})",
            self.width,
            self.height,
            self.tick_interval,
            self.seed.name
        );

        Engine {
            width: self.width,
            height: self.height,
            tick_interval: self.tick_interval,
            seed: self.seed,
        }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Configured simulation, ready to run against a renderer.
#[derive(Debug, Clone)]
pub struct Engine {
    width: usize,
    height: usize,
    tick_interval: Duration,
    seed: Pattern,
}

impl Engine {
    /// Shorthand for `EngineBuilder::new()`.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    /// Runs the simulation and blocks until quit or interrupt.
    ///
    /// # Lifecycle
    ///
    /// 1. Initializes the renderer (failure aborts with no state created)
    /// 2. Seeds the simulation
    /// 3. Runs the event loop until `Terminating`
    /// 4. Returns the final counters; the renderer is already finalized
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] if the renderer cannot be initialized.
    pub fn run<R: Renderer>(
        self,
        mut renderer: R,
        shutdown: ShutdownSignal,
    ) -> Result<RunSummary, EngineError> {
        if let Err(e) = renderer.init() {
            error!(target: "engine", "Renderer initialization failed: {}", e);
            return Err(e.into());
        }

        let simulation = match Simulation::seeded(self.width, self.height, &self.seed) {
            Ok(simulation) => simulation,
            Err(e) => {
                renderer.finalize();
                return Err(e.into());
            }
        };

        let event_loop = EventLoop::new(
            renderer,
            simulation,
            shutdown,
            self.tick_interval,
            HEADER_ROWS,
            Instant::now(),
        );

        Ok(event_loop.run())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
