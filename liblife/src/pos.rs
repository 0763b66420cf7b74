#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    /// Moves the position by `(dx, dy)` on a `width` x `height` torus, so stepping off one edge
    /// lands on the opposite one.
    pub fn wrapping_offset(self, dx: isize, dy: isize, width: usize, height: usize) -> Self {
        Self {
            x: wrap(self.x, dx, width),
            y: wrap(self.y, dy, height),
        }
    }
}

fn wrap(coord: usize, offset: isize, dimension: usize) -> usize {
    (coord as isize + offset).rem_euclid(dimension as isize) as usize
}

impl From<[usize; 2]> for Position {
    fn from(value: [usize; 2]) -> Self {
        Self {
            x: value[0],
            y: value[1],
        }
    }
}

impl From<Position> for [usize; 2] {
    fn from(value: Position) -> Self {
        [value.x, value.y]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_wrap_to_the_opposite_edge() {
        let corner = Position { x: 0, y: 0 };

        assert_eq!(corner.wrapping_offset(-1, -1, 6, 4), Position { x: 5, y: 3 });
        assert_eq!(
            Position { x: 5, y: 3 }.wrapping_offset(1, 1, 6, 4),
            corner
        );
    }

    #[test]
    fn offsets_inside_the_grid_are_plain_additions() {
        let pos = Position::from([2, 2]);

        assert_eq!(pos.wrapping_offset(1, -1, 6, 4), Position { x: 3, y: 1 });
        assert_eq!(<[usize; 2]>::from(pos), [2, 2]);
    }
}
