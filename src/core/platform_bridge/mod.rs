//=========================================================================
// Platform Bridge
//=========================================================================
//
// Bridges display/OS backends with the simulation core.
//
// This module defines the contract between the display backend and core
// logic, so the terminal backend can be swapped (for a test double, for
// instance) without touching the event loop.
//
// Components:
// - `interface`: Renderer trait, cell styles and errors (the contract)
// - `shutdown`: One-shot interrupt notification into the loop
//
//=========================================================================

//=== Module Declarations =================================================

pub mod interface;
pub mod shutdown;

//=== Public API ==========================================================

pub use interface::{CellStyle, PlatformError, Renderer};
pub use shutdown::{install_interrupt_listener, ShutdownSignal, ShutdownTrigger};
