use serde::{Deserialize, Serialize};

use super::action::Direction;

/// A cell on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move cell by delta, without wrapping
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move cell one step in a direction, without wrapping
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// The board: a `width` x `height` torus.
///
/// Leaving one edge re-enters on the opposite one, so every coordinate pair
/// maps onto exactly one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
}

impl Grid {
    /// Largest accepted side, small enough for `i32` cells and `u16` terminal columns
    pub const MAX_SIDE: usize = 4096;

    /// Build a grid, or `None` when a side is 0 or above `MAX_SIDE`
    pub fn try_new(width: usize, height: usize) -> Option<Self> {
        let side = |n: usize| {
            i32::try_from(n)
                .ok()
                .filter(|&side| side > 0 && n <= Self::MAX_SIDE)
        };
        Some(Self {
            width: side(width)?,
            height: side(height)?,
        })
    }

    /// # Panics
    ///
    /// If a side is 0 or above `MAX_SIDE`. `GameConfig::validate` rejects
    /// such sizes before a grid is built from user input.
    pub fn new(width: usize, height: usize) -> Self {
        match Self::try_new(width, height) {
            Some(grid) => grid,
            None => panic!("grid {width}x{height} is empty or too large"),
        }
    }

    pub fn width(&self) -> usize {
        self.width as usize
    }

    pub fn height(&self) -> usize {
        self.height as usize
    }

    /// Maps any coordinate pair onto the torus
    pub fn wrap(&self, x: i32, y: i32) -> Cell {
        Cell::new(x.rem_euclid(self.width), y.rem_euclid(self.height))
    }

    /// One step from `cell` in `direction`, wrapping at the edges
    pub fn step(&self, cell: Cell, direction: Direction) -> Cell {
        let next = cell.moved_in_direction(direction);
        self.wrap(next.x, next.y)
    }

    pub fn cell_count(&self) -> usize {
        self.width() * self.height()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.width).contains(&cell.x) && (0..self.height).contains(&cell.y)
    }

    /// The cell snakes start from unless configured otherwise
    pub fn center(&self) -> Cell {
        Cell::new(self.width / 2, self.height / 2)
    }

    /// Every cell of the board in row-major order
    pub fn all_cells(&self) -> impl Iterator<Item = Cell> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| Cell::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_movement() {
        let cell = Cell::new(5, 5);
        assert_eq!(cell.moved_by(1, 0), Cell::new(6, 5));
        assert_eq!(cell.moved_by(-1, 0), Cell::new(4, 5));
        assert_eq!(cell.moved_by(0, 1), Cell::new(5, 6));
        assert_eq!(cell.moved_by(0, -1), Cell::new(5, 4));
    }

    #[test]
    fn test_wrap() {
        let grid = Grid::new(32, 24);
        assert_eq!(grid.wrap(32, 0), Cell::new(0, 0));
        assert_eq!(grid.wrap(-1, 0), Cell::new(31, 0));
        assert_eq!(grid.wrap(0, -1), Cell::new(0, 23));
        assert_eq!(grid.wrap(0, 24), Cell::new(0, 0));
        assert_eq!(grid.wrap(-33, 49), Cell::new(31, 1));
        assert_eq!(grid.wrap(5, 7), Cell::new(5, 7));
    }

    #[test]
    fn test_step_stays_on_board() {
        let grid = Grid::new(5, 3);
        for cell in grid.all_cells() {
            for direction in Direction::ALL {
                let next = grid.step(cell, direction);
                assert!(grid.contains(next), "{cell:?} + {direction:?} -> {next:?}");
            }
        }
    }

    #[test]
    fn test_all_cells() {
        let grid = Grid::new(4, 3);
        let cells: Vec<Cell> = grid.all_cells().collect();
        assert_eq!(cells.len(), grid.cell_count());
        assert_eq!(cells.len(), 12);
        assert_eq!(cells[0], Cell::new(0, 0));
        assert_eq!(cells[1], Cell::new(1, 0));
        assert_eq!(cells[11], Cell::new(3, 2));
    }

    #[test]
    fn test_bounds_checking() {
        let grid = Grid::new(20, 20);
        assert!(grid.contains(Cell::new(0, 0)));
        assert!(grid.contains(Cell::new(19, 19)));
        assert!(!grid.contains(Cell::new(-1, 0)));
        assert!(!grid.contains(Cell::new(20, 0)));
        assert!(!grid.contains(Cell::new(0, 20)));
    }

    #[test]
    fn test_size_limits() {
        assert!(Grid::try_new(0, 5).is_none());
        assert!(Grid::try_new(5, 0).is_none());
        assert!(Grid::try_new(1usize << 32, 4).is_none());
        assert!(Grid::try_new(Grid::MAX_SIDE + 1, 4).is_none());

        let grid = Grid::try_new(Grid::MAX_SIDE, 1).unwrap();
        assert_eq!(grid.width(), Grid::MAX_SIDE);
        assert_eq!(grid.wrap(-1, 0), Cell::new(Grid::MAX_SIDE as i32 - 1, 0));
    }

    #[test]
    #[should_panic(expected = "too large")]
    fn test_new_rejects_truncating_width() {
        Grid::new(1usize << 32, 4);
    }

    #[test]
    fn test_center() {
        assert_eq!(Grid::new(32, 24).center(), Cell::new(16, 12));
        assert_eq!(Grid::new(1, 1).center(), Cell::new(0, 0));
    }
}
