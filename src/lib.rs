//=========================================================================
// Torus Life — Library Root
//
// Conway's Game of Life on a fixed toroidal grid, driven by a single
// cooperative event loop and drawn to a character-cell display.
//
// Responsibilities:
// - Expose the engine facade (`EngineBuilder`, `Engine`)
// - Expose the simulation core for embedding and testing
// - Keep the terminal backend internal behind the `Renderer` contract
//
// Typical usage:
// ```no_run
// use torus_life::{EngineBuilder, TerminalRenderer};
// use torus_life::core::platform_bridge::install_interrupt_listener;
//
// let signal = install_interrupt_listener().unwrap();
// EngineBuilder::new().build().run(TerminalRenderer::new(), signal).unwrap();
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the grid, rule engine, input handling and the renderer
// contract. `config` holds the compile-time defaults.
//
pub mod config;
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` contains the crossterm terminal backend.
// `engine` defines the builder, the run entry point and the event loop.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use engine::{Engine, EngineBuilder, EngineError, EventLoop, LoopState, RunSummary, TickControl};
pub use platform::TerminalRenderer;
