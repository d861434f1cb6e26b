use crate::{Board, GameOfLife};

/// Iterations per second a new controller starts with
pub const DEFAULT_ITERATIONS_PER_SECOND: u32 = 10;

/// Whether the simulation is advancing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Paused,
    Running,
}

/// Drives the simulation at a fixed rate from variable frame deltas
///
/// Owns the board, the run state, the iteration rate and the generation
/// counter. Starts paused. While running, [`Controller::tick`] accumulates
/// elapsed time and, once a full period `1 / iterations_per_second` has
/// passed, applies `ceil(delta * iterations_per_second)` generations at once.
/// A slow frame therefore catches up in a single jump.
#[derive(Debug, Clone)]
pub struct Controller {
    game: GameOfLife,
    state: RunState,
    iterations_per_second: u32,
    generation: u64,
    accumulated: f64,
}

impl Controller {
    pub fn new(board: Board) -> Self {
        Self {
            game: GameOfLife::new(board),
            state: RunState::Paused,
            iterations_per_second: DEFAULT_ITERATIONS_PER_SECOND,
            generation: 0,
            accumulated: 0.0,
        }
    }

    #[inline]
    pub fn pause(&mut self) {
        if self.state != RunState::Paused {
            log::debug!("paused at generation {}", self.generation);
        }
        self.state = RunState::Paused;
    }
    #[inline]
    pub fn resume(&mut self) {
        if self.state != RunState::Running {
            log::debug!("resumed at generation {}", self.generation);
        }
        self.state = RunState::Running;
    }
    pub fn toggle(&mut self) {
        match self.state {
            RunState::Paused => self.resume(),
            RunState::Running => self.pause(),
        }
    }

    /// Advances the clock by `delta` seconds, which must not be negative
    ///
    /// Returns the number of generations applied, always 0 while paused.
    pub fn tick(&mut self, delta: f64) -> u64 {
        debug_assert!(delta >= 0.0, "negative frame delta: {delta}");
        if self.state == RunState::Paused {
            return 0;
        }

        let rate = f64::from(self.iterations_per_second);
        let period = 1.0 / rate;
        self.accumulated += delta;
        if self.accumulated < period {
            return 0;
        }
        self.accumulated = 0.0;

        // no upper bound: a long stall is caught up in one call
        let due = (delta * rate).ceil() as u64;
        if due > u64::from(self.iterations_per_second) {
            log::warn!(
                "catching up {} generations after a {:.3}s frame",
                due,
                delta
            );
        }
        for _ in 0..due {
            self.step();
        }
        due
    }

    /// Applies exactly one generation, regardless of the run state
    pub fn step(&mut self) {
        self.game.next_generation();
        self.generation += 1;
    }

    /// Sets the rate; values below 1 are clamped to 1
    pub fn set_iterations_per_second(&mut self, rate: u32) {
        if rate == 0 {
            log::warn!("iteration rate must be positive, clamping 0 to 1");
        }
        self.iterations_per_second = rate.max(1);
        log::debug!("iteration rate set to {}/s", self.iterations_per_second);
    }

    pub fn reset_counter(&mut self) {
        log::debug!("generation counter reset from {}", self.generation);
        self.generation = 0;
    }

    pub fn clear_board(&mut self) {
        log::debug!("board cleared");
        self.game.board_mut().clear();
    }

    #[inline]
    pub fn state(&self) -> RunState {
        self.state
    }
    #[inline]
    pub fn is_paused(&self) -> bool {
        self.state == RunState::Paused
    }
    #[inline]
    pub fn iterations_per_second(&self) -> u32 {
        self.iterations_per_second
    }
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }
    #[inline]
    pub fn board(&self) -> &Board {
        self.game.board()
    }
    #[inline]
    pub fn board_mut(&mut self) -> &mut Board {
        self.game.board_mut()
    }
    #[inline]
    pub fn board_width(&self) -> i32 {
        self.board().width()
    }
    #[inline]
    pub fn board_height(&self) -> i32 {
        self.board().height()
    }
}
