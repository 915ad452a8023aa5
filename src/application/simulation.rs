use std::sync::Arc;
use std::time::Duration;

use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug, info, trace, warn};

use crate::config::SimulationConfig;
use crate::domain::{Grid, step};
use crate::error::{ConfigError, GridError};

/// Whether the loop keeps scheduling ticks
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RunState {
    #[default]
    Stopped,
    Running,
}

/// A user edit that waits for the in-flight tick to publish
#[derive(Debug)]
enum Edit {
    Toggle { row: isize, col: isize },
    Replace(Grid),
}

/// Simulation owns the current generation and drives the tick schedule.
///
/// Time only moves through [`Simulation::advance`], which the host frame loop
/// calls with the elapsed frame time. A tick runs in two halves:
/// [`Simulation::begin_tick`] reads the run state and captures the current
/// generation, [`Simulation::complete_tick`] computes and publishes the next one.
/// Edits that arrive between the halves are applied on top of the published
/// result.
pub struct Simulation {
    config: SimulationConfig,
    current: Arc<Grid>,
    run_state: RunState,
    generation: u64,
    /// Loop clock, advanced by the host
    clock: Duration,
    /// When the next tick fires, if one is scheduled
    next_tick: Option<Duration>,
    /// Input snapshot of the tick currently in flight
    in_flight: Option<Arc<Grid>>,
    pending_edits: Vec<Edit>,
    rng: StdRng,
}

impl Simulation {
    /// Create a stopped simulation over an empty grid
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Create a simulation whose `randomize` draws from a seeded generator
    pub fn with_seed(config: SimulationConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: SimulationConfig, rng: StdRng) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            current: Arc::new(Grid::empty(config.rows, config.cols)),
            config,
            run_state: RunState::Stopped,
            generation: 0,
            clock: Duration::ZERO,
            next_tick: None,
            in_flight: None,
            pending_edits: Vec::new(),
            rng,
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Current generation; the snapshot never changes once handed out
    pub fn grid(&self) -> Arc<Grid> {
        Arc::clone(&self.current)
    }

    pub const fn run_state(&self) -> RunState {
        self.run_state
    }

    pub const fn is_running(&self) -> bool {
        matches!(self.run_state, RunState::Running)
    }

    /// Generations published since the grid was last cleared or randomized
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub const fn is_tick_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Deadline of the next scheduled tick on the loop clock
    pub const fn next_tick_at(&self) -> Option<Duration> {
        self.next_tick
    }

    /// Start ticking; the first tick is due immediately
    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }
        self.run_state = RunState::Running;
        self.next_tick = Some(self.clock);
        info!(generation = self.generation, "simulation started");
    }

    /// Stop scheduling ticks. A tick in flight still publishes its result;
    /// a tick already scheduled exits without work when it fires.
    pub fn stop(&mut self) {
        if !self.is_running() {
            return;
        }
        self.run_state = RunState::Stopped;
        info!(generation = self.generation, "simulation stopped");
    }

    pub fn toggle_running(&mut self) {
        if self.is_running() {
            self.stop();
        } else {
            self.start();
        }
    }

    /// Replace the grid with an all-dead one; run state is unchanged
    pub fn clear(&mut self) {
        info!("clearing grid");
        let empty = Grid::empty(self.config.rows, self.config.cols);
        self.submit(Edit::Replace(empty));
    }

    /// Replace the grid with a random one at the configured density
    pub fn randomize(&mut self) {
        let SimulationConfig { rows, cols, birth_probability, .. } = self.config;
        let grid = Grid::random_with(rows, cols, birth_probability, &mut self.rng);
        info!(population = grid.population(), "randomized grid");
        self.submit(Edit::Replace(grid));
    }

    /// Replace the grid with a caller-built one of the same dimensions
    pub fn load(&mut self, grid: Grid) -> Result<(), GridError> {
        let (rows, cols) = grid.dimensions();
        if (rows, cols) != self.current.dimensions() {
            return Err(GridError::DimensionMismatch {
                actual_rows: rows,
                actual_cols: cols,
                rows: self.config.rows,
                cols: self.config.cols,
            });
        }
        self.submit(Edit::Replace(grid));
        Ok(())
    }

    /// Flip one cell of the current generation
    pub fn toggle_cell(&mut self, row: isize, col: isize) -> Result<(), GridError> {
        if let Err(err) = self.current.check_bounds(row, col) {
            warn!(%err, "rejected toggle");
            return Err(err);
        }
        self.submit(Edit::Toggle { row, col });
        Ok(())
    }

    /// Feed elapsed host time to the loop and fire the tick if it is due.
    /// Returns the number of generations published.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        self.clock += elapsed;

        let due = self.next_tick.is_some_and(|at| at <= self.clock);
        if due && self.begin_tick() {
            usize::from(self.complete_tick())
        } else {
            0
        }
    }

    /// Fire the scheduled tick now: check the run state and capture the
    /// current generation as the tick's input.
    /// Returns false when nothing was started.
    pub fn begin_tick(&mut self) -> bool {
        if self.in_flight.is_some() {
            return false;
        }
        self.next_tick = None;

        if !self.is_running() {
            trace!(generation = self.generation, "tick fired after stop; exiting");
            return false;
        }
        self.in_flight = Some(Arc::clone(&self.current));
        true
    }

    /// Compute and publish the next generation for the tick in flight,
    /// apply edits that arrived meanwhile, then reschedule if still running.
    pub fn complete_tick(&mut self) -> bool {
        let Some(input) = self.in_flight.take() else {
            return false;
        };

        self.current = Arc::new(step(&input));
        self.generation += 1;
        debug!(
            generation = self.generation,
            population = self.current.population(),
            "published generation"
        );

        for edit in std::mem::take(&mut self.pending_edits) {
            self.apply(edit);
        }

        if self.is_running() {
            self.next_tick = Some(self.clock + self.config.tick_delay);
        }
        true
    }

    fn submit(&mut self, edit: Edit) {
        if self.in_flight.is_some() {
            self.pending_edits.push(edit);
        } else {
            self.apply(edit);
        }
    }

    fn apply(&mut self, edit: Edit) {
        match edit {
            Edit::Toggle { row, col } => match self.current.toggle(row, col) {
                Ok(grid) => self.current = Arc::new(grid),
                Err(err) => warn!(%err, "dropped queued toggle"),
            },
            Edit::Replace(grid) => {
                self.current = Arc::new(grid);
                self.generation = 0;
            }
        }
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::with_rng(SimulationConfig::default(), StdRng::from_os_rng())
            .unwrap_or_else(|_| unreachable!("default config is valid"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(100);

    fn blinker_sim() -> Simulation {
        let config = SimulationConfig::default().with_dimensions(5, 5);
        let mut sim = Simulation::with_seed(config, 1).unwrap();
        for (row, col) in [(2, 1), (2, 2), (2, 3)] {
            sim.toggle_cell(row, col).unwrap();
        }
        sim
    }

    #[test]
    fn test_starts_stopped_with_empty_grid() {
        let sim = Simulation::default();
        assert_eq!(sim.run_state(), RunState::Stopped);
        assert_eq!(sim.grid().dimensions(), (50, 50));
        assert_eq!(sim.grid().population(), 0);
        assert_eq!(sim.generation(), 0);
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = SimulationConfig::default().with_dimensions(0, 5);
        assert!(Simulation::new(config).is_err());
        // Would overflow the cell buffer if it reached Grid::empty
        let huge = SimulationConfig::default().with_dimensions(1 << 33, 1 << 33);
        assert!(matches!(Simulation::new(huge), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_no_ticks_while_stopped() {
        let mut sim = blinker_sim();
        let before = sim.grid();
        for _ in 0..20 {
            assert_eq!(sim.advance(DELAY), 0);
        }
        assert_eq!(sim.grid(), before);
        assert_eq!(sim.generation(), 0);
    }

    #[test]
    fn test_first_tick_fires_immediately_then_on_cadence() {
        let mut sim = blinker_sim();
        sim.start();
        assert_eq!(sim.advance(Duration::ZERO), 1);
        assert_eq!(sim.grid().live_cells(), vec![(1, 2), (2, 2), (3, 2)]);

        assert_eq!(sim.advance(Duration::from_millis(99)), 0);
        assert_eq!(sim.advance(Duration::from_millis(1)), 1);
        assert_eq!(sim.grid().live_cells(), vec![(2, 1), (2, 2), (2, 3)]);
        assert_eq!(sim.generation(), 2);
    }

    #[test]
    fn test_at_most_one_tick_per_advance() {
        let mut sim = blinker_sim();
        sim.start();
        assert_eq!(sim.advance(Duration::from_secs(10)), 1);
        assert_eq!(sim.advance(Duration::from_secs(10)), 1);
        assert_eq!(sim.generation(), 2);
    }

    #[test]
    fn test_stop_between_ticks_prevents_further_generations() {
        let mut sim = blinker_sim();
        sim.start();
        sim.advance(Duration::ZERO);
        sim.stop();

        let frozen = sim.grid();
        for _ in 0..50 {
            assert_eq!(sim.advance(DELAY), 0);
        }
        assert_eq!(sim.generation(), 1);
        assert_eq!(sim.grid(), frozen);
        assert_eq!(sim.next_tick_at(), None);
    }

    #[test]
    fn test_stop_during_tick_publishes_exactly_one_more() {
        let mut sim = blinker_sim();
        sim.start();
        assert!(sim.begin_tick());
        sim.stop();
        assert!(sim.complete_tick());
        assert_eq!(sim.generation(), 1);
        assert_eq!(sim.next_tick_at(), None);

        let published = sim.grid();
        for _ in 0..50 {
            assert_eq!(sim.advance(DELAY * 3), 0);
        }
        assert_eq!(sim.generation(), 1);
        assert_eq!(sim.grid(), published);
    }

    #[test]
    fn test_only_one_tick_in_flight() {
        let mut sim = blinker_sim();
        sim.start();
        assert!(sim.begin_tick());
        assert!(sim.is_tick_in_flight());
        assert!(!sim.begin_tick());
        assert!(sim.complete_tick());
        assert!(!sim.is_tick_in_flight());
        assert!(!sim.complete_tick());
    }

    #[test]
    fn test_edits_during_tick_apply_to_published_result() {
        let mut sim = blinker_sim();
        let input = sim.grid();
        sim.start();
        assert!(sim.begin_tick());
        sim.toggle_cell(0, 0).unwrap();
        // The edit waits for the tick
        assert_eq!(sim.grid(), input);

        sim.complete_tick();
        let expected = step(&input).toggle(0, 0).unwrap();
        assert_eq!(*sim.grid(), expected);
    }

    #[test]
    fn test_clear_during_tick_wins_over_result() {
        let mut sim = blinker_sim();
        sim.start();
        sim.begin_tick();
        sim.clear();
        sim.complete_tick();
        assert_eq!(sim.grid().population(), 0);
        assert_eq!(sim.generation(), 0);
        assert!(sim.is_running());
    }

    #[test]
    fn test_clear_keeps_run_state() {
        let mut sim = blinker_sim();
        sim.start();
        sim.clear();
        assert!(sim.is_running());
        assert_eq!(sim.advance(Duration::ZERO), 1);
        assert_eq!(sim.grid().population(), 0);
    }

    #[test]
    fn test_toggle_out_of_bounds_is_rejected() {
        let mut sim = blinker_sim();
        let before = sim.grid();
        assert!(matches!(sim.toggle_cell(-1, 0), Err(GridError::OutOfBounds { .. })));
        assert!(matches!(sim.toggle_cell(5, 0), Err(GridError::OutOfBounds { .. })));

        sim.start();
        sim.begin_tick();
        assert!(sim.toggle_cell(0, 5).is_err());
        sim.complete_tick();
        assert_eq!(*sim.grid(), step(&before));
    }

    #[test]
    fn test_snapshots_are_immutable() {
        let mut sim = blinker_sim();
        let snapshot = sim.grid();
        let copy = (*snapshot).clone();
        sim.start();
        sim.advance(Duration::ZERO);
        sim.toggle_cell(0, 0).unwrap();
        assert_eq!(*snapshot, copy);
        assert_ne!(sim.grid(), snapshot);
    }

    #[test]
    fn test_randomize_is_reproducible_with_seed() {
        let config = SimulationConfig::default();
        let mut a = Simulation::with_seed(config.clone(), 99).unwrap();
        let mut b = Simulation::with_seed(config, 99).unwrap();
        a.randomize();
        b.randomize();
        assert_eq!(a.grid(), b.grid());
        assert!(a.grid().population() > 0);
    }

    #[test]
    fn test_randomize_resets_generation_but_not_run_state() {
        let mut sim = blinker_sim();
        sim.start();
        sim.advance(Duration::ZERO);
        sim.randomize();
        assert_eq!(sim.generation(), 0);
        assert!(sim.is_running());
    }

    #[test]
    fn test_restart_ticks_immediately() {
        let mut sim = blinker_sim();
        sim.start();
        sim.advance(Duration::ZERO);
        sim.stop();
        sim.advance(Duration::from_millis(30));
        sim.start();
        assert_eq!(sim.advance(Duration::ZERO), 1);
        assert_eq!(sim.generation(), 2);
    }

    #[test]
    fn test_load_checks_dimensions() {
        let mut sim = blinker_sim();
        assert_eq!(
            sim.load(Grid::empty(6, 5)),
            Err(GridError::DimensionMismatch { actual_rows: 6, actual_cols: 5, rows: 5, cols: 5 })
        );
        assert!(sim.load(Grid::empty(5, 5)).is_ok());
        assert_eq!(sim.grid().population(), 0);
    }
}
