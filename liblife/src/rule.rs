//! Conway's Life, B3/S23.

/// Live neighbor counts that bring a dead cell to life.
pub const BIRTH: [usize; 1] = [3];

/// Live neighbor counts that keep a live cell alive.
pub const SURVIVE: [usize; 2] = [2, 3];

pub fn next_alive(alive: bool, alive_neighbors: usize) -> bool {
    if alive {
        SURVIVE.contains(&alive_neighbors)
    } else {
        BIRTH.contains(&alive_neighbors)
    }
}
