use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use super::{
    action::Action,
    apple::Apple,
    config::GameConfig,
    grid::Cell,
    snake::{Advance, Snake},
    state::{GameState, LoopState},
};

/// What a tick did to the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The snake moved onto an empty cell
    Moved,
    /// The snake ate the apple and will grow on the next tick
    Ate,
    /// The snake ran into itself; `length` is how long it was
    Reset { length: usize },
}

/// Result of a game step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepResult {
    pub outcome: TickOutcome,
    /// Tail cell freed by this step, for renderers that only erase the trail
    pub vacated: Option<Cell>,
    /// `Resetting` when the board was set up again during this tick
    pub state: LoopState,
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration.
    ///
    /// The random source is seeded from `config.seed` when present, which
    /// makes whole games reproducible.
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { config, rng }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Build the initial game state
    pub fn reset(&mut self) -> GameState {
        let grid = self.config.grid();
        let snake = Snake::new(self.config.origin(), &mut self.rng);
        let apple = Apple::spawn(&grid, &snake.occupied(), &mut self.rng);
        GameState::new(grid, snake, apple, self.config.speed_start)
    }

    /// Put a fresh snake on the board, move the apple away from it and drop
    /// back to the starting speed. Best length, tick and reset counters are
    /// kept.
    pub fn restart(&mut self, state: &mut GameState) {
        state.record_length(state.snake.len());
        state.snake.reset(self.config.origin(), &mut self.rng);
        let occupied = state.snake.occupied();
        state.apple.respawn(&state.grid, &occupied, &mut self.rng);
        state.speed = self.config.speed_start;
    }

    /// Execute one tick of the game
    pub fn step(&mut self, state: &mut GameState, action: Action) -> StepResult {
        state.snake.set_heading(action.direction());

        let result = match state.snake.advance(&state.grid) {
            Advance::Collided { at } => {
                let length = state.snake.len();
                info!(length, x = at.x, y = at.y, "snake ran into itself");

                self.restart(state);
                state.resets += 1;

                StepResult {
                    outcome: TickOutcome::Reset { length },
                    vacated: None,
                    state: LoopState::Resetting,
                }
            }
            Advance::Moved { head, vacated } => {
                let outcome = if head == state.apple.position() {
                    self.eat(state);
                    TickOutcome::Ate
                } else {
                    TickOutcome::Moved
                };

                StepResult {
                    outcome,
                    vacated,
                    state: LoopState::Playing,
                }
            }
        };

        state.ticks += 1;
        result
    }

    fn eat(&mut self, state: &mut GameState) {
        state.snake.grow();
        state.record_length(state.snake.target_length());

        let occupied = state.snake.occupied();
        state.apple.respawn(&state.grid, &occupied, &mut self.rng);

        let speed = state.speed.saturating_add(self.config.speed_step);
        state.speed = match self.config.speed_max {
            Some(max) => speed.min(max),
            None => speed,
        };

        debug!(
            length = state.snake.target_length(),
            speed = state.speed,
            "apple eaten"
        );
    }
}
