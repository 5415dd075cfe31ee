use rand::Rng;
use std::collections::{HashSet, VecDeque};

use super::{
    action::Direction,
    grid::{Cell, Grid},
};

/// What happened when the snake tried to take a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// The head moved to `head`. `vacated` is the tail cell that was freed:
    /// `None` on a growth step or when the head took over the old tail cell.
    Moved { head: Cell, vacated: Option<Cell> },
    /// The head would have entered its own body at `at`; nothing was moved.
    Collided { at: Cell },
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    body: VecDeque<Cell>,
    /// Current direction of movement
    heading: Direction,
    /// Length the body is trimmed to after each step
    target_length: usize,
}

impl Snake {
    /// A fresh length-1 snake at `origin` with a random heading
    pub fn new<R: Rng + ?Sized>(origin: Cell, rng: &mut R) -> Self {
        let mut snake = Self {
            body: VecDeque::new(),
            heading: Direction::Right,
            target_length: 1,
        };
        snake.reset(origin, rng);
        snake
    }

    /// A snake laid out on explicit cells, head first.
    ///
    /// The target length is the number of cells given.
    ///
    /// # Panics
    ///
    /// Panics if `body` is empty.
    pub fn with_body(body: impl IntoIterator<Item = Cell>, heading: Direction) -> Self {
        let body: VecDeque<Cell> = body.into_iter().collect();
        assert!(!body.is_empty(), "a snake needs at least a head");
        let target_length = body.len();
        Self {
            body,
            heading,
            target_length,
        }
    }

    /// Back to a single cell at `origin`, facing a random direction
    pub fn reset<R: Rng + ?Sized>(&mut self, origin: Cell, rng: &mut R) {
        self.body.clear();
        self.body.push_back(origin);
        self.heading = Direction::random(rng);
        self.target_length = 1;
    }

    /// Change heading unless the request is empty or would reverse the snake.
    ///
    /// Several calls before the next `advance` are allowed; the last accepted
    /// one is the heading used.
    pub fn set_heading(&mut self, requested: Option<Direction>) {
        if let Some(direction) = requested {
            if !self.heading.is_opposite(direction) {
                self.heading = direction;
            }
        }
    }

    /// Take one step along the current heading, wrapping at the edges.
    ///
    /// The new head is tested against the body as it will be after the step:
    /// on a normal step the tail moves out of the way, so entering the cell it
    /// leaves is allowed. On a growth step the tail stays and entering it is a
    /// collision. A collision leaves the snake untouched.
    pub fn advance(&mut self, grid: &Grid) -> Advance {
        let new_head = grid.step(self.head(), self.heading);
        let trims_tail = self.body.len() >= self.target_length;
        let kept = if trims_tail {
            self.body.len() - 1
        } else {
            self.body.len()
        };

        if self.body.iter().take(kept).any(|&cell| cell == new_head) {
            return Advance::Collided { at: new_head };
        }

        self.body.push_front(new_head);
        let vacated = if self.body.len() > self.target_length {
            self.body.pop_back().filter(|&cell| cell != new_head)
        } else {
            None
        };

        Advance::Moved {
            head: new_head,
            vacated,
        }
    }

    /// Lengthen the snake by one; takes effect on the next `advance`
    pub fn grow(&mut self) {
        self.target_length += 1;
    }

    /// Get the head cell
    pub fn head(&self) -> Cell {
        self.body[0]
    }

    /// Get the tail cell (last segment)
    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn target_length(&self) -> usize {
        self.target_length
    }

    pub fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    /// Check if a cell is covered by any segment, head included
    pub fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Every cell covered by the snake
    pub fn occupied(&self) -> HashSet<Cell> {
        self.body.iter().copied().collect()
    }

    /// Every cell covered by the snake except its head
    pub fn occupies_excluding_head(&self) -> HashSet<Cell> {
        self.body.iter().skip(1).copied().collect()
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; a snake keeps at least its head
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}
