//=========================================================================
// torus_life binary
//
// No flags: installs the interrupt listener, runs the simulation in the
// terminal until `q` / Esc / Ctrl+C / SIGINT / SIGTERM, exits with 0.
// Exits with 1 if the terminal cannot be initialized.
//
//=========================================================================

use std::env;
use std::fs::OpenOptions;
use std::process;

use log::{error, info};

use torus_life::config::{DEFAULT_LOG_FILTER, LOG_FILE_ENV};
use torus_life::core::platform_bridge::install_interrupt_listener;
use torus_life::{EngineBuilder, EngineError, RunSummary, TerminalRenderer};

fn main() {
    init_logging();

    match run() {
        Ok(summary) => {
            info!(
                "Exited at generation {} with population {}",
                summary.generation, summary.population
            );
        }
        Err(e) => {
            error!("Fatal: {}", e);
            eprintln!("torus_life: {}", e);
            process::exit(1);
        }
    }
}

fn run() -> Result<RunSummary, EngineError> {
    let shutdown = install_interrupt_listener()?;
    EngineBuilder::new().build().run(TerminalRenderer::new(), shutdown)
}

/// Installs `env_logger`; the terminal is in raw mode while running, so
/// output goes to `$TORUS_LIFE_LOG` when it is set.
fn init_logging() {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER));

    if let Ok(path) = env::var(LOG_FILE_ENV) {
        match OpenOptions::new().create(true).append(true).open(&path) {
            Ok(file) => {
                builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
            Err(e) => eprintln!("torus_life: cannot open log file {}: {}", path, e),
        }
    }

    builder.init();
}
