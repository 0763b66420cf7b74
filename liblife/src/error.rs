use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    #[error("grid dimensions must be non-zero, got {width}x{height}")]
    EmptyDimensions { width: usize, height: usize },

    #[error("a {width}x{height} grid has more cells than can be addressed")]
    TooLarge { width: usize, height: usize },

    #[error("expected {expected} cells for the grid, got {actual}")]
    CellCountMismatch { expected: usize, actual: usize },

    #[error("alive density must be between 0 and 1, got {0}")]
    InvalidDensity(f64),
}
