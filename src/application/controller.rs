use crate::domain::{advance, stamp_pattern, Grid, GridError};

/// Tick interval the simulation starts with, in milliseconds per turn.
pub const DEFAULT_INTERVAL_MS: u32 = 300;

/// SimulationController orchestrates the simulation.
/// This is the application layer that coordinates domain logic: it owns the
/// grid, the run state, the turn counter, and the single tick timer, and
/// every mutation goes through one of its operations.
#[derive(Debug)]
pub struct SimulationController {
    grid: Grid,
    is_running: bool,
    turn: u64,
    /// Milliseconds between generation advances. Callers keep this inside
    /// the speed menu's bounds.
    interval_ms: u32,
    /// Frame time accumulated toward the next advance. Zeroing it cancels
    /// the pending wait, which is how start/pause/set_speed guarantee no
    /// stale tick ever fires.
    tick_timer: f32,
}

impl SimulationController {
    /// Create a paused controller over an all-dead grid of the given size.
    pub fn new(size: usize) -> Result<Self, GridError> {
        Ok(Self {
            grid: Grid::new(size)?,
            is_running: false,
            turn: 0,
            interval_ms: DEFAULT_INTERVAL_MS,
            tick_timer: 0.0,
        })
    }

    /// The live board.
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Whether the tick timer is currently advancing generations.
    pub const fn is_running(&self) -> bool {
        self.is_running
    }

    /// Generations advanced since the board was last replaced.
    pub const fn turn(&self) -> u64 {
        self.turn
    }

    /// Current tick interval in milliseconds per turn.
    pub const fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Begin (or restart) ticking; the wait always starts from zero.
    pub fn start(mut self) -> Self {
        self.is_running = true;
        self.tick_timer = 0.0;
        self
    }

    /// Stop ticking and drop any partially elapsed wait.
    pub fn pause(mut self) -> Self {
        self.is_running = false;
        self.tick_timer = 0.0;
        self
    }

    /// Toggle play/pause state
    pub fn toggle_running(self) -> Self {
        if self.is_running { self.pause() } else { self.start() }
    }

    /// Clear the grid, reset the turn counter, and pause.
    pub fn reset(mut self) -> Self {
        let size = self.grid.size();
        self.grid = Grid::empty(size);
        self.turn = 0;
        self.pause()
    }

    /// Replace the grid with a random one and reset the turn counter.
    /// Run state is untouched, so a live simulation keeps ticking over the
    /// new board.
    pub fn randomize(mut self) -> Self {
        let size = self.grid.size();
        self.grid = Grid::randomized(size);
        self.turn = 0;
        self
    }

    /// Change the tick interval. While running this cancels the pending
    /// wait and restarts it at the new pace; while paused it only records
    /// the interval for the next start.
    pub fn set_speed(mut self, interval_ms: u32) -> Self {
        self.interval_ms = interval_ms;
        if self.is_running {
            self.tick_timer = 0.0;
        }
        self
    }

    /// Swap to a fresh empty grid of `new_size` and reset the turn counter.
    /// Fails without touching any state when the size is rejected.
    pub fn resize(&mut self, new_size: usize) -> Result<(), GridError> {
        self.grid = Grid::new(new_size)?;
        self.turn = 0;
        Ok(())
    }

    /// Clear the grid and stamp the named pattern at its center. Unknown
    /// names leave the fresh grid empty.
    pub fn load_pattern(&mut self, name: &str) {
        let size = self.grid.size();
        let center = (size / 2) as i32;
        let mut grid = Grid::empty(size);
        stamp_pattern(&mut grid, name, center, center);
        self.grid = grid;
        self.turn = 0;
    }

    /// Flip a single cell; turn counter and run state are untouched.
    pub fn toggle_cell_at(&mut self, x: usize, y: usize) -> Result<(), GridError> {
        self.grid.toggle(x, y)
    }

    /// Update simulation by one frame
    /// This is the main game loop coordination
    pub fn tick(mut self, frame_dt: f32) -> Self {
        if !self.is_running {
            return self;
        }

        self.tick_timer += frame_dt;
        let interval = self.interval_ms as f32 / 1000.0;

        // At most one generation per frame: a slow frame delays the
        // simulation instead of firing a catch-up burst.
        if self.tick_timer >= interval {
            self.grid = advance(&self.grid);
            self.turn += 1;
            self.tick_timer = 0.0;
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Cell;

    fn paused(size: usize) -> SimulationController {
        SimulationController::new(size).unwrap()
    }

    #[test]
    fn test_new_controller_is_paused_on_an_empty_grid() {
        let sim = paused(10);
        assert!(!sim.is_running());
        assert_eq!(sim.turn(), 0);
        assert_eq!(sim.interval_ms(), DEFAULT_INTERVAL_MS);
        assert_eq!(sim.grid().live_count(), 0);
    }

    #[test]
    fn test_new_rejects_zero_size() {
        assert_eq!(
            SimulationController::new(0).unwrap_err(),
            GridError::InvalidSize
        );
    }

    #[test]
    fn test_tick_does_nothing_while_paused() {
        let sim = paused(10).tick(10.0);
        assert_eq!(sim.turn(), 0);
        assert_eq!(sim.tick_timer, 0.0);
    }

    #[test]
    fn test_tick_advances_once_the_interval_elapses() {
        let sim = paused(10).start().tick(0.1).tick(0.1);
        assert_eq!(sim.turn(), 0);

        let sim = sim.tick(0.15);
        assert_eq!(sim.turn(), 1);
    }

    #[test]
    fn test_slow_frame_advances_a_single_generation() {
        let sim = paused(10).start().tick(5.0);
        assert_eq!(sim.turn(), 1);
        assert_eq!(sim.tick_timer, 0.0);
    }

    #[test]
    fn test_start_while_running_restarts_the_wait() {
        let sim = paused(10).start().tick(0.25).start();
        let sim = sim.tick(0.25);
        assert_eq!(sim.turn(), 0);

        let sim = sim.tick(0.06);
        assert_eq!(sim.turn(), 1);
    }

    #[test]
    fn test_pause_discards_the_pending_wait() {
        let sim = paused(10).start().tick(0.25).pause();
        let sim = sim.tick(10.0);
        assert_eq!(sim.turn(), 0);

        // After resuming, a full interval must elapse again.
        let sim = sim.start().tick(0.25);
        assert_eq!(sim.turn(), 0);
        let sim = sim.tick(0.06);
        assert_eq!(sim.turn(), 1);
    }

    #[test]
    fn test_set_speed_while_running_restarts_the_wait() {
        let sim = paused(10).start().tick(0.15).set_speed(200);
        let sim = sim.tick(0.15);
        assert_eq!(sim.turn(), 0);

        let sim = sim.tick(0.06);
        assert_eq!(sim.turn(), 1);
    }

    #[test]
    fn test_set_speed_while_paused_only_records_the_interval() {
        let sim = paused(10).set_speed(100);
        assert!(!sim.is_running());
        assert_eq!(sim.interval_ms(), 100);

        let sim = sim.start().tick(0.11);
        assert_eq!(sim.turn(), 1);
    }

    #[test]
    fn test_reset_clears_pauses_and_rezeroes_the_turn() {
        let sim = paused(10).randomize().start().tick(0.31);
        assert_eq!(sim.turn(), 1);

        let sim = sim.reset();
        assert!(!sim.is_running());
        assert_eq!(sim.turn(), 0);
        assert_eq!(sim.grid().size(), 10);
        assert_eq!(sim.grid().live_count(), 0);
    }

    #[test]
    fn test_randomize_keeps_the_run_state() {
        let sim = paused(10).randomize();
        assert!(!sim.is_running());

        let sim = sim.start().randomize();
        assert!(sim.is_running());
        assert_eq!(sim.turn(), 0);
    }

    #[test]
    fn test_resize_swaps_the_grid_and_keeps_running() {
        let mut sim = paused(10).start();
        sim.toggle_cell_at(2, 3).unwrap();

        sim.resize(7).unwrap();
        assert_eq!(sim.grid().size(), 7);
        assert_eq!(sim.grid().live_count(), 0);
        assert_eq!(sim.turn(), 0);
        assert!(sim.is_running());
    }

    #[test]
    fn test_resize_to_zero_is_rejected_without_side_effects() {
        let mut sim = paused(10);
        sim.toggle_cell_at(2, 3).unwrap();

        assert_eq!(sim.resize(0).unwrap_err(), GridError::InvalidSize);
        assert_eq!(sim.grid().size(), 10);
        assert_eq!(sim.grid().get(2, 3), Cell::Alive);
    }

    #[test]
    fn test_load_pattern_stamps_at_the_grid_center() {
        let mut sim = paused(10);
        sim.toggle_cell_at(0, 0).unwrap();

        sim.load_pattern("glider");
        assert_eq!(sim.grid().live_count(), 5);
        assert_eq!(sim.grid().get(0, 0), Cell::Dead);
        assert_eq!(sim.grid().get(6, 5), Cell::Alive);
        assert_eq!(sim.turn(), 0);
    }

    #[test]
    fn test_load_unknown_pattern_leaves_a_cleared_grid() {
        let mut sim = paused(10);
        sim.toggle_cell_at(4, 4).unwrap();

        sim.load_pattern("acorn");
        assert_eq!(sim.grid().live_count(), 0);
        assert_eq!(sim.turn(), 0);
    }

    #[test]
    fn test_toggle_cell_reports_out_of_bounds() {
        let mut sim = paused(10);
        let err = sim.toggle_cell_at(10, 0).unwrap_err();
        assert_eq!(err, GridError::OutOfBounds { x: 10, y: 0, size: 10 });
    }
}
