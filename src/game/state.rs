use std::collections::HashSet;

use super::{
    apple::Apple,
    grid::{Cell, Grid},
    snake::Snake,
};

/// Where the game loop is within a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Normal play
    Playing,
    /// A collision was detected this tick and the board was set up again
    Resetting,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub grid: Grid,
    pub snake: Snake,
    pub apple: Apple,
    /// Current tick rate, in ticks per second
    pub speed: u32,
    /// Longest snake seen since the program started
    pub best_length: usize,
    /// Ticks simulated since the program started
    pub ticks: u64,
    /// Number of collisions so far
    pub resets: u32,
}

impl GameState {
    /// Create a new game state
    pub fn new(grid: Grid, snake: Snake, apple: Apple, speed: u32) -> Self {
        let best_length = snake.len();
        Self {
            grid,
            snake,
            apple,
            speed,
            best_length,
            ticks: 0,
            resets: 0,
        }
    }

    /// Cells currently covered by the snake
    pub fn occupied(&self) -> HashSet<Cell> {
        self.snake.occupied()
    }

    /// Check if a cell is occupied by the snake
    pub fn is_occupied_by_snake(&self, cell: Cell) -> bool {
        self.snake.contains(cell)
    }

    pub fn record_length(&mut self, length: usize) {
        self.best_length = self.best_length.max(length);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Direction;

    #[test]
    fn test_new_state() {
        let snake = Snake::with_body([Cell::new(1, 0), Cell::new(0, 0)], Direction::Right);
        let state = GameState::new(Grid::new(4, 4), snake, Apple::at(Cell::new(3, 3)), 20);

        assert_eq!(state.best_length, 2);
        assert_eq!(state.ticks, 0);
        assert_eq!(state.resets, 0);
        assert!(state.is_occupied_by_snake(Cell::new(0, 0)));
        assert!(!state.is_occupied_by_snake(Cell::new(3, 3)));
        assert_eq!(state.occupied().len(), 2);
    }

    #[test]
    fn test_best_length_never_decreases() {
        let snake = Snake::with_body([Cell::new(0, 0)], Direction::Right);
        let mut state = GameState::new(Grid::new(4, 4), snake, Apple::at(Cell::new(3, 3)), 20);

        state.record_length(5);
        assert_eq!(state.best_length, 5);
        state.record_length(2);
        assert_eq!(state.best_length, 5);
    }
}
