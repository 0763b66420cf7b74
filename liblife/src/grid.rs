use std::fmt;

use itertools::Itertools;
use rand::Rng;

use super::{
    color::{CellColor, ColorPolicy},
    error::GridError,
    pos::Position,
    rule,
};

const NEIGHBOR_RELATIVE_POSITIONS: [[isize; 2]; 8] = [
    [-1, -1],
    [-1, 0],
    [-1, 1],
    [0, -1],
    [0, 1],
    [1, -1],
    [1, 0],
    [1, 1],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub alive: bool,
    pub color: Option<CellColor>,
}

impl Cell {
    pub fn alive(color: CellColor) -> Self {
        Self {
            alive: true,
            color: Some(color),
        }
    }
}

/// A toroidal grid of cells, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        let cells = vec![Cell::default(); Self::cell_count(width, height)?];
        Self::with_cells(width, height, cells)
    }

    pub fn with_cells(width: usize, height: usize, cells: Vec<Cell>) -> Result<Self, GridError> {
        let expected = Self::cell_count(width, height)?;

        if cells.len() != expected {
            return Err(GridError::CellCountMismatch {
                expected,
                actual: cells.len(),
            });
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Populates a grid where every cell is alive with probability `density`.
    /// Cells that start alive are given a random color right away.
    pub fn new_random<R>(
        width: usize,
        height: usize,
        density: f64,
        rng: &mut R,
    ) -> Result<Self, GridError>
    where
        R: Rng + ?Sized,
    {
        if !(0.0..=1.0).contains(&density) {
            return Err(GridError::InvalidDensity(density));
        }

        let mut grid = Self::new(width, height)?;

        for cell in &mut grid.cells {
            if rng.random_bool(density) {
                *cell = Cell::alive(CellColor::random(rng));
            }
        }

        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell<P>(&self, pos: P) -> Option<&Cell>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos)?;
        self.cells.get(index)
    }

    pub fn cell_mut<P>(&mut self, pos: P) -> Option<&mut Cell>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos)?;
        self.cells.get_mut(index)
    }

    /// Alive state at `pos`, wrapping coordinates that fall outside the grid.
    pub fn is_alive<P>(&self, pos: P) -> bool
    where
        P: Into<Position>,
    {
        let Position { x, y } = pos.into();
        let index = (x % self.width) + (y % self.height) * self.width;
        self.cells[index].alive
    }

    /// Counts the live cells among the eight neighbors of `pos`, with edges wrapping around.
    /// On grids narrower than three cells the same cell can be reached through several offsets
    /// and is counted once per offset.
    pub fn count_live_neighbors<P>(&self, pos: P) -> usize
    where
        P: Into<Position>,
    {
        let pos = pos.into();

        NEIGHBOR_RELATIVE_POSITIONS
            .iter()
            .map(|[dx, dy]| pos.wrapping_offset(*dx, *dy, self.width, self.height))
            .filter(|neighbor_pos| self.is_alive(*neighbor_pos))
            .count()
    }

    pub fn count_alive(&self) -> usize {
        self.cells.iter().filter(|cell| cell.alive).count()
    }

    pub fn enumerate_cells(&self) -> impl Iterator<Item = (Position, &Cell)> {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, cell)| (self.index_to_pos(index), cell))
    }

    /// Computes the next generation into a new grid, leaving this one untouched.
    pub fn advance<R>(&self, policy: ColorPolicy, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let next_cells = self
            .enumerate_cells()
            .map(|(cell_pos, cell)| self.advance_cell(cell_pos, cell, policy, rng))
            .collect();

        Self {
            width: self.width,
            height: self.height,
            cells: next_cells,
        }
    }

    fn advance_cell<R>(
        &self,
        cell_pos: Position,
        cell: &Cell,
        policy: ColorPolicy,
        rng: &mut R,
    ) -> Cell
    where
        R: Rng + ?Sized,
    {
        let alive = rule::next_alive(cell.alive, self.count_live_neighbors(cell_pos));

        // Colors are only ever handed out here, and only to live cells that don't have one yet.
        let color = match policy.retained(cell.color, alive) {
            None if alive => Some(CellColor::random(rng)),
            color => color,
        };

        Cell { alive, color }
    }

    fn cell_count(width: usize, height: usize) -> Result<usize, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyDimensions { width, height });
        }

        width
            .checked_mul(height)
            .ok_or(GridError::TooLarge { width, height })
    }

    fn pos_to_index<P>(&self, pos: P) -> Option<usize>
    where
        P: Into<Position>,
    {
        let Position { x, y } = pos.into();

        if x >= self.width {
            return None;
        }

        if y >= self.height {
            return None;
        }

        Some(x + (y * self.width))
    }

    fn index_to_pos(&self, index: usize) -> Position {
        let y = index / self.width;
        let x = index % self.width;
        Position { x, y }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self
            .cells
            .chunks(self.width)
            .map(|row| {
                row.iter()
                    .map(|cell| if cell.alive { '*' } else { '.' })
                    .collect::<String>()
            })
            .join("\n");

        f.write_str(&rows)
    }
}
