use color::ColorPolicy;
use grid::Grid;
use rand::Rng;

pub mod color;
pub mod error;
pub mod grid;
pub mod pos;
pub mod rule;

/// The current generation of a simulation, together with everything needed to compute the next one.
#[derive(Debug, Clone)]
pub struct Game<R> {
    grid: Grid,
    color_policy: ColorPolicy,
    rng: R,
    generation: u64,
}

impl<R> Game<R>
where
    R: Rng,
{
    pub fn new(grid: Grid, color_policy: ColorPolicy, rng: R) -> Self {
        Self {
            grid,
            color_policy,
            rng,
            generation: 0,
        }
    }

    pub fn tick(&mut self) {
        self.grid = self.grid.advance(self.color_policy, &mut self.rng);
        self.generation += 1;
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of ticks since the game was created.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::{color::CellColor, grid::Cell};

    #[test]
    fn tick_replaces_the_grid_and_counts_generations() {
        let mut grid = Grid::new(5, 5).unwrap();
        for pos in [[1, 2], [2, 2], [3, 2]] {
            *grid.cell_mut(pos).unwrap() = Cell::alive(CellColor::Red);
        }

        let mut game = Game::new(grid.clone(), ColorPolicy::default(), ChaCha8Rng::seed_from_u64(1));
        assert_eq!(game.generation(), 0);

        game.tick();
        assert_eq!(game.generation(), 1);
        assert!(game.grid().cell([2, 1]).unwrap().alive);
        assert!(!game.grid().cell([1, 2]).unwrap().alive);

        game.tick();
        assert_eq!(game.generation(), 2);
        let alive = |grid: &Grid| grid.cells().iter().map(|cell| cell.alive).collect::<Vec<_>>();
        assert_eq!(alive(game.grid()), alive(&grid));
    }

    #[test]
    fn games_with_the_same_seed_stay_in_lockstep() {
        let start = |seed| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let grid = Grid::new_random(10, 10, 0.5, &mut rng).unwrap();
            Game::new(grid, ColorPolicy::ClearOnDeath, rng)
        };

        let mut first = start(21);
        let mut second = start(21);

        for _ in 0..15 {
            first.tick();
            second.tick();
            assert_eq!(first.grid(), second.grid());
        }
    }
}
