//! Error types for the life core.

/// Checked failures in the core.
///
/// `OutOfBounds` carries signed fields so callers can report the raw value they
/// computed, before any clamping, e.g. a neighbor offset that stepped off the edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LifeError {
    #[error("cell ({x}, {y}) is outside the {size}x{size} grid")]
    OutOfBounds { x: i64, y: i64, size: usize },

    #[error("a {size}x{size} grid is too large, the side is capped at {max}")]
    GridTooLarge { size: usize, max: usize },
}

/// Failure to read a grid picture (see `GridState`'s `FromStr`).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseGridError {
    #[error("grid picture has no rows")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged { row: usize, expected: usize, found: usize },

    #[error("unexpected character {0:?}, use 'o' for alive and '.' for dead")]
    UnexpectedChar(char),

    #[error(transparent)]
    Grid(#[from] LifeError),
}
