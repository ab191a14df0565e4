//=========================================================================
// Event Loop
//
// Single cooperative loop that owns the simulation and the renderer.
//
// Cycle (non-blocking, priority order):
// ```text
//   ┌─► shutdown raised? ──yes──► Terminating
//   │        │ no
//   │   tick due? ──yes──► Simulation::tick → mirror diff → header → show
//   │        │ no
//   │   event pending? ──yes──► poll one → InputHandler → mirror → show
//   │        │ no                              └─ Quit ──► Terminating
//   └── idle (never past the next tick deadline)
// ```
//
// Each cycle performs at most one of tick / event, so the grid is only
// ever touched by one operation at a time and needs no locking.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::thread;
use std::time::{Duration, Instant};

//=== External Crates =====================================================

use log::{debug, info, warn};

//=== Internal Dependencies ===============================================

use super::tick_timer::TickTimer;
use crate::config::{ALIVE_GLYPH, DEAD_GLYPH, IDLE_SLEEP};
use crate::core::grid::Cell;
use crate::core::hud;
use crate::core::input::{InputHandler, InputOutcome};
use crate::core::platform_bridge::{CellStyle, Renderer, ShutdownSignal};
use crate::core::simulation::Simulation;

//=== LoopState ===========================================================

/// Lifecycle of the loop. `Terminating` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminating,
}

//=== TickControl =========================================================

/// Result of one loop cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickControl {
    /// Work was done; run the next cycle immediately.
    Continue,

    /// Nothing to do; the caller may sleep this long before retrying.
    Idle(Duration),

    /// The loop has terminated and the renderer is finalized.
    Exit,
}

//=== RunSummary ==========================================================

/// Counters at the moment the loop terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub generation: u64,
    pub population: u64,
}

//=== EventLoop ===========================================================

/// Owns all mutable state for one run of the simulation.
pub struct EventLoop<R: Renderer> {
    renderer: R,
    simulation: Simulation,
    handler: InputHandler,
    timer: TickTimer,
    shutdown: ShutdownSignal,
    state: LoopState,
    header_rows: u16,
}

impl<R: Renderer> EventLoop<R> {
    //--- Construction -----------------------------------------------------

    /// Assembles a loop around an already-initialized renderer.
    ///
    /// The first tick is due one interval after `now`.
    pub fn new(
        renderer: R,
        simulation: Simulation,
        shutdown: ShutdownSignal,
        tick_interval: Duration,
        header_rows: u16,
        now: Instant,
    ) -> Self {
        Self {
            renderer,
            simulation,
            handler: InputHandler::new(header_rows),
            timer: TickTimer::new(tick_interval, now),
            shutdown,
            state: LoopState::Running,
            header_rows,
        }
    }

    //--- Accessors --------------------------------------------------------

    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            generation: self.simulation.generation(),
            population: self.simulation.population(),
        }
    }

    //--- Execution --------------------------------------------------------

    /// Draws the first frame and turns on pointer reporting.
    ///
    /// A terminal that refuses pointer capture still runs, keyboard only.
    pub fn start(&mut self) {
        self.paint_all();
        self.flush();

        if let Err(e) = self.renderer.enable_pointer_capture() {
            warn!(target: "engine", "Pointer capture unavailable: {}", e);
        }

        info!(
            target: "engine",
            "Event loop started ({}x{}, tick {:?})",
            self.simulation.grid().width(),
            self.simulation.grid().height(),
            self.timer.interval()
        );
    }

    /// Runs cycles until termination, sleeping while idle.
    pub fn run(mut self) -> RunSummary {
        self.start();

        loop {
            match self.cycle(Instant::now()) {
                TickControl::Continue => {}
                TickControl::Idle(wait) => thread::sleep(wait),
                TickControl::Exit => break,
            }
        }

        let summary = self.summary();
        info!(
            target: "engine",
            "Event loop terminated at generation {} (population {})",
            summary.generation,
            summary.population
        );
        summary
    }

    /// Performs at most one unit of work: a tick or a single input event.
    pub fn cycle(&mut self, now: Instant) -> TickControl {
        if self.state == LoopState::Terminating {
            return TickControl::Exit;
        }

        //--- Step 0: Interrupt --------------------------------------------
        if self.shutdown.is_raised() {
            info!(target: "engine", "Shutdown signal observed");
            self.terminate();
            return TickControl::Exit;
        }

        //--- Step 1: Simulation tick --------------------------------------
        if self.timer.fire(now) {
            self.on_tick();
            return TickControl::Continue;
        }

        //--- Step 2: One input event --------------------------------------
        if self.renderer.has_pending_event() {
            let event = self.renderer.poll_event();
            return match self.handler.handle(&mut self.simulation, &event) {
                InputOutcome::Quit => {
                    self.terminate();
                    TickControl::Exit
                }
                InputOutcome::Edited { cell, .. } => {
                    self.draw_cell(cell);
                    self.draw_header();
                    self.flush();
                    TickControl::Continue
                }
                InputOutcome::Repaint => {
                    self.paint_all();
                    self.flush();
                    TickControl::Continue
                }
                InputOutcome::Ignored => TickControl::Continue,
            };
        }

        //--- Step 3: Idle -------------------------------------------------
        TickControl::Idle(IDLE_SLEEP.min(self.timer.remaining(now)))
    }

    //--- Internal Helpers -------------------------------------------------

    fn on_tick(&mut self) {
        let outcome = self.simulation.tick();

        for &cell in outcome.changes.keys() {
            self.draw_cell(cell);
        }
        self.draw_header();
        self.flush();
    }

    /// Finalizes the renderer exactly once.
    fn terminate(&mut self) {
        if self.state == LoopState::Running {
            self.state = LoopState::Terminating;
            self.renderer.finalize();
            debug!(target: "engine", "Renderer finalized");
        }
    }

    /// Mirrors one grid cell to the display, skipping unchanged glyphs.
    ///
    /// Cells outside the `u16` screen coordinate range are not drawn.
    fn draw_cell(&mut self, cell: Cell) {
        let Some((x, y)) = self.screen_position(cell) else {
            return;
        };
        let glyph = if self.simulation.grid().is_alive(cell) {
            ALIVE_GLYPH
        } else {
            DEAD_GLYPH
        };

        if self.renderer.get_cell(x, y) != glyph {
            self.renderer.set_cell(x, y, glyph, CellStyle::Plain);
        }
    }

    fn screen_position(&self, cell: Cell) -> Option<(u16, u16)> {
        let x = u16::try_from(cell.x).ok()?;
        let y = u16::try_from(cell.y).ok()?.checked_add(self.header_rows)?;
        Some((x, y))
    }

    fn draw_header(&mut self) {
        let lines = hud::header_lines(self.simulation.population(), self.simulation.generation());

        for (row, line) in lines.iter().enumerate().take(self.header_rows as usize) {
            for (col, glyph) in line.chars().enumerate() {
                self.renderer.set_cell(col as u16, row as u16, glyph, CellStyle::Header);
            }
        }
    }

    fn paint_all(&mut self) {
        self.draw_header();

        let cells: Vec<Cell> = self.simulation.grid().cells().collect();
        for cell in cells {
            self.draw_cell(cell);
        }
    }

    fn flush(&mut self) {
        if let Err(e) = self.renderer.show() {
            warn!(target: "engine", "Frame flush failed: {}", e);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HEADER_ROWS;
    use crate::core::input::{InputEvent, KeyCode, MouseButton};
    use crate::core::patterns::GLIDER;
    use crate::core::platform_bridge::ShutdownTrigger;
    use crate::platform::headless::HeadlessRenderer;

    const INTERVAL: Duration = Duration::from_millis(100);

    //--- Test Helpers -----------------------------------------------------

    struct Harness {
        event_loop: EventLoop<HeadlessRenderer>,
        trigger: ShutdownTrigger,
        start: Instant,
    }

    fn harness(events: Vec<InputEvent>) -> Harness {
        let start = Instant::now();
        let (trigger, signal) = ShutdownSignal::channel();
        let simulation = Simulation::seeded(60, 60, &GLIDER).unwrap();
        let mut renderer = HeadlessRenderer::new();
        renderer.init().unwrap();
        renderer.queue_events(events);

        let mut event_loop =
            EventLoop::new(renderer, simulation, signal, INTERVAL, HEADER_ROWS, start);
        event_loop.start();

        Harness {
            event_loop,
            trigger,
            start,
        }
    }

    fn header_text(renderer: &HeadlessRenderer, row: u16) -> String {
        (0..hud::HEADER_FIELD_WIDTH as u16)
            .map(|x| renderer.get_cell(x, row))
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    fn click(column: u16, row: u16, button: MouseButton) -> InputEvent {
        InputEvent::pointer(column, row, button)
    }

    //=====================================================================
    // Startup
    //=====================================================================

    #[test]
    fn start_paints_header_and_seed() {
        let h = harness(vec![]);
        let renderer = h.event_loop.renderer();

        assert_eq!(header_text(renderer, 0), "Population: 5");
        assert_eq!(header_text(renderer, 1), "Generation: 0");
        for &(x, y) in GLIDER.cells {
            assert_eq!(renderer.get_cell(x as u16, y as u16 + HEADER_ROWS), ALIVE_GLYPH);
        }
        assert_eq!(renderer.shows(), 1);
        assert!(renderer.pointer_capture());
    }

    #[test]
    fn start_without_pointer_capture_keeps_running() {
        let (_trigger, signal) = ShutdownSignal::channel();
        let simulation = Simulation::seeded(60, 60, &GLIDER).unwrap();
        let mut renderer = HeadlessRenderer::new().refusing_pointer_capture();
        renderer.init().unwrap();

        let mut event_loop =
            EventLoop::new(renderer, simulation, signal, INTERVAL, HEADER_ROWS, Instant::now());
        event_loop.start();

        let renderer = event_loop.renderer();
        assert!(!renderer.pointer_capture());
        assert_eq!(renderer.shows(), 1);
        assert_eq!(header_text(renderer, 0), "Population: 5");
        for &(x, y) in GLIDER.cells {
            assert_eq!(renderer.get_cell(x as u16, y as u16 + HEADER_ROWS), ALIVE_GLYPH);
        }
        assert_eq!(event_loop.state(), LoopState::Running);
    }

    #[test]
    fn rows_past_screen_range_are_skipped() {
        let start = Instant::now();
        let (_trigger, signal) = ShutdownSignal::channel();
        let mut simulation = Simulation::new(1, 65_535).unwrap();
        simulation.revive(0, 0);
        simulation.revive(0, 65_534);
        let mut renderer = HeadlessRenderer::new();
        renderer.init().unwrap();

        let mut event_loop = EventLoop::new(renderer, simulation, signal, INTERVAL, 2, start);
        event_loop.start();

        assert_eq!(event_loop.renderer().get_cell(0, 2), ALIVE_GLYPH);
        assert_eq!(event_loop.renderer().get_cell(0, 65_535), DEAD_GLYPH);
        assert_eq!(event_loop.cycle(start + INTERVAL), TickControl::Continue);
        assert_eq!(event_loop.simulation().generation(), 1);
    }

    //=====================================================================
    // Ticks
    //=====================================================================

    #[test]
    fn idle_before_first_tick() {
        let mut h = harness(vec![]);

        let control = h.event_loop.cycle(h.start + Duration::from_millis(95));

        assert_eq!(control, TickControl::Idle(Duration::from_millis(5)));
        assert_eq!(h.event_loop.simulation().generation(), 0);
    }

    #[test]
    fn idle_is_capped() {
        let mut h = harness(vec![]);
        assert_eq!(h.event_loop.cycle(h.start), TickControl::Idle(IDLE_SLEEP));
    }

    #[test]
    fn tick_advances_generation_and_redraws() {
        let mut h = harness(vec![]);

        let control = h.event_loop.cycle(h.start + INTERVAL);

        assert_eq!(control, TickControl::Continue);
        assert_eq!(h.event_loop.simulation().generation(), 1);
        assert_eq!(header_text(h.event_loop.renderer(), 1), "Generation: 1");
        assert_eq!(h.event_loop.renderer().shows(), 2);
    }

    #[test]
    fn failed_flush_does_not_stop_ticks() {
        let mut h = harness(vec![]);
        h.event_loop.renderer.fail_show(true);

        assert_eq!(h.event_loop.cycle(h.start + INTERVAL), TickControl::Continue);
        assert_eq!(h.event_loop.cycle(h.start + INTERVAL * 2), TickControl::Continue);

        assert_eq!(h.event_loop.simulation().generation(), 2);
        assert_eq!(h.event_loop.state(), LoopState::Running);
        assert_eq!(h.event_loop.renderer().shows(), 3);
    }

    #[test]
    fn display_mirrors_grid_after_ticks() {
        let mut h = harness(vec![]);

        for n in 1..=8 {
            h.event_loop.cycle(h.start + INTERVAL * n);
        }

        let sim = h.event_loop.simulation();
        let renderer = h.event_loop.renderer();
        assert_eq!(sim.generation(), 8);
        for cell in sim.grid().cells() {
            let expected = if sim.grid().is_alive(cell) { ALIVE_GLYPH } else { DEAD_GLYPH };
            assert_eq!(renderer.get_cell(cell.x as u16, cell.y as u16 + HEADER_ROWS), expected);
        }
        assert_eq!(header_text(renderer, 0), "Population: 5");
    }

    #[test]
    fn tick_takes_priority_over_pending_event() {
        let mut h = harness(vec![InputEvent::key(KeyCode::Char('q'))]);

        assert_eq!(h.event_loop.cycle(h.start + INTERVAL), TickControl::Continue);
        assert_eq!(h.event_loop.simulation().generation(), 1);
        assert_eq!(h.event_loop.state(), LoopState::Running);

        assert_eq!(h.event_loop.cycle(h.start + INTERVAL), TickControl::Exit);
    }

    //=====================================================================
    // Input
    //=====================================================================

    #[test]
    fn one_event_per_cycle() {
        let mut h = harness(vec![
            click(30, 32, MouseButton::Left),
            click(31, 32, MouseButton::Left),
        ]);

        h.event_loop.cycle(h.start);
        assert_eq!(h.event_loop.simulation().population(), 6);

        h.event_loop.cycle(h.start);
        assert_eq!(h.event_loop.simulation().population(), 7);
    }

    #[test]
    fn click_between_ticks_updates_immediately() {
        let mut h = harness(vec![
            click(30, 32, MouseButton::Left),
            click(30, 32, MouseButton::Right),
        ]);
        let before = h.event_loop.simulation().population();
        let between = h.start + Duration::from_millis(40);

        h.event_loop.cycle(between);
        let renderer = h.event_loop.renderer();
        assert_eq!(h.event_loop.simulation().population(), before + 1);
        assert_eq!(h.event_loop.simulation().generation(), 0);
        assert_eq!(renderer.get_cell(30, 32), ALIVE_GLYPH);
        assert_eq!(header_text(renderer, 0), "Population: 6");
        assert_eq!(renderer.shows(), 2, "edit must flush without waiting for a tick");

        h.event_loop.cycle(between);
        assert_eq!(h.event_loop.simulation().population(), before);
        assert_eq!(h.event_loop.renderer().get_cell(30, 32), DEAD_GLYPH);
    }

    #[test]
    fn repeated_click_does_not_drift_population() {
        let mut h = harness(vec![
            click(10, 12, MouseButton::Left),
            click(10, 12, MouseButton::Left),
            click(10, 12, MouseButton::Left),
        ]);

        for _ in 0..3 {
            h.event_loop.cycle(h.start);
        }

        let sim = h.event_loop.simulation();
        assert_eq!(sim.population(), 6);
        assert_eq!(sim.population(), sim.grid().count_alive());
        assert_eq!(h.event_loop.renderer().shows(), 4);
    }

    #[test]
    fn quit_key_finalizes_once() {
        let mut h = harness(vec![InputEvent::key(KeyCode::Escape)]);

        assert_eq!(h.event_loop.cycle(h.start), TickControl::Exit);
        assert_eq!(h.event_loop.state(), LoopState::Terminating);
        assert_eq!(h.event_loop.cycle(h.start + INTERVAL), TickControl::Exit);
        assert_eq!(h.event_loop.renderer().finalize_calls(), 1);
        assert_eq!(h.event_loop.simulation().generation(), 0);
    }

    #[test]
    fn resize_repaints_frame() {
        let mut h = harness(vec![InputEvent::Resize { columns: 80, rows: 70 }]);
        let shows = h.event_loop.renderer().shows();

        assert_eq!(h.event_loop.cycle(h.start), TickControl::Continue);
        assert_eq!(h.event_loop.renderer().shows(), shows + 1);
    }

    #[test]
    fn ignored_event_does_not_flush() {
        let mut h = harness(vec![InputEvent::Unidentified]);
        let shows = h.event_loop.renderer().shows();

        assert_eq!(h.event_loop.cycle(h.start), TickControl::Continue);
        assert_eq!(h.event_loop.renderer().shows(), shows);
    }

    //=====================================================================
    // Shutdown
    //=====================================================================

    #[test]
    fn interrupt_terminates_before_tick() {
        let mut h = harness(vec![]);
        h.trigger.raise();

        assert_eq!(h.event_loop.cycle(h.start + INTERVAL), TickControl::Exit);
        assert_eq!(h.event_loop.simulation().generation(), 0);
        assert_eq!(h.event_loop.renderer().finalize_calls(), 1);
    }

    #[test]
    fn summary_reports_counters() {
        let mut h = harness(vec![]);
        h.event_loop.cycle(h.start + INTERVAL);
        h.event_loop.cycle(h.start + INTERVAL * 2);

        assert_eq!(
            h.event_loop.summary(),
            RunSummary { generation: 2, population: 5 }
        );
    }

    #[test]
    fn run_returns_after_quit() {
        let h = harness(vec![InputEvent::key(KeyCode::Char('q'))]);

        let summary = h.event_loop.run();

        assert_eq!(summary.population, 5);
    }
}
