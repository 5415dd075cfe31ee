use rand::{Rng, seq::IteratorRandom};
use std::collections::HashSet;

use super::grid::{Cell, Grid};

/// The apple the snake is chasing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Apple {
    position: Cell,
}

impl Apple {
    /// An apple at a fixed cell
    pub fn at(position: Cell) -> Self {
        Self { position }
    }

    /// Place a new apple on a random free cell.
    ///
    /// On a board with no free cell the apple lands on the first cell of the
    /// grid; the next successful `respawn` moves it away.
    pub fn spawn<R: Rng + ?Sized>(grid: &Grid, occupied: &HashSet<Cell>, rng: &mut R) -> Self {
        let mut apple = Self::at(Cell::new(0, 0));
        apple.respawn(grid, occupied, rng);
        apple
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    /// Move to a cell drawn uniformly from the cells not in `occupied`.
    ///
    /// Returns `false` and keeps the current position when every cell is
    /// occupied.
    pub fn respawn<R: Rng + ?Sized>(
        &mut self,
        grid: &Grid,
        occupied: &HashSet<Cell>,
        rng: &mut R,
    ) -> bool {
        let free = grid.all_cells().filter(|cell| !occupied.contains(cell));
        match free.choose(rng) {
            Some(cell) => {
                self.position = cell;
                true
            }
            None => {
                tracing::warn!(
                    cells = grid.cell_count(),
                    "no free cell left for the apple, keeping it at {:?}",
                    self.position
                );
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashMap;

    #[test]
    fn test_respawn_avoids_occupied() {
        let grid = Grid::new(4, 4);
        let mut rng = StdRng::seed_from_u64(11);
        // Everything but the last row is taken
        let occupied: HashSet<Cell> = grid.all_cells().filter(|cell| cell.y < 3).collect();
        let mut apple = Apple::at(Cell::new(0, 0));

        for _ in 0..100 {
            assert!(apple.respawn(&grid, &occupied, &mut rng));
            assert!(!occupied.contains(&apple.position()));
            assert!(grid.contains(apple.position()));
        }
    }

    #[test]
    fn test_single_free_cell_is_chosen() {
        let grid = Grid::new(3, 3);
        let mut rng = StdRng::seed_from_u64(3);
        let free = Cell::new(2, 1);
        let occupied: HashSet<Cell> = grid.all_cells().filter(|&cell| cell != free).collect();

        let apple = Apple::spawn(&grid, &occupied, &mut rng);
        assert_eq!(apple.position(), free);
    }

    #[test]
    fn test_full_board_keeps_position() {
        let grid = Grid::new(4, 4);
        let mut rng = StdRng::seed_from_u64(5);
        let occupied: HashSet<Cell> = grid.all_cells().collect();
        let mut apple = Apple::at(Cell::new(2, 3));

        assert!(!apple.respawn(&grid, &occupied, &mut rng));
        assert_eq!(apple.position(), Cell::new(2, 3));
    }

    #[test]
    fn test_spawn_on_full_board_is_deterministic() {
        let grid = Grid::new(2, 2);
        let mut rng = StdRng::seed_from_u64(5);
        let occupied: HashSet<Cell> = grid.all_cells().collect();

        let apple = Apple::spawn(&grid, &occupied, &mut rng);
        assert_eq!(apple.position(), Cell::new(0, 0));
    }

    #[test]
    fn test_respawn_reaches_every_free_cell() {
        let grid = Grid::new(3, 2);
        let mut rng = StdRng::seed_from_u64(99);
        let occupied: HashSet<Cell> = [Cell::new(0, 0)].into_iter().collect();
        let mut apple = Apple::at(Cell::new(1, 1));
        let mut hits: HashMap<Cell, usize> = HashMap::new();

        for _ in 0..5000 {
            apple.respawn(&grid, &occupied, &mut rng);
            *hits.entry(apple.position()).or_default() += 1;
        }

        // Five free cells, roughly 1000 draws each
        assert_eq!(hits.len(), 5);
        assert!(!hits.contains_key(&Cell::new(0, 0)));
        for count in hits.values() {
            assert!((700..1300).contains(count), "skewed draw: {hits:?}");
        }
    }
}
