//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use torus_life::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine
pub use crate::engine::{Engine, EngineBuilder, EngineError, RunSummary};

// Simulation core
pub use crate::core::grid::{Cell, Grid};
pub use crate::core::patterns::{Pattern, GLIDER};
pub use crate::core::simulation::Simulation;
pub use crate::core::step::{StepEngine, StepOutcome};

// Input
pub use crate::core::input::{InputEvent, InputHandler, InputOutcome, KeyCode, MouseButton};

// Display contract
pub use crate::core::platform_bridge::{CellStyle, PlatformError, Renderer, ShutdownSignal};
pub use crate::platform::TerminalRenderer;
