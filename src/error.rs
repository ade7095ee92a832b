/// Errors raised by board and game operations.
///
/// All of these are recoverable: the caller re-prompts on a bad column and
/// treats `NoLegalMove` as the end of the game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error(
        "Invalid board size {width}x{height}. Width must be between {} and {}, height between {} and {}",
        crate::MIN_WIDTH,
        crate::MAX_WIDTH,
        crate::MIN_HEIGHT,
        crate::MAX_HEIGHT
    )]
    InvalidDimensions { width: usize, height: usize },

    #[error(
        "Invalid move, column {} out of range. Columns must be between 1 and {width}",
        .column + 1
    )]
    InvalidColumn { column: usize, width: usize },

    #[error("Invalid move, column {} full", .0 + 1)]
    ColumnFull(usize),

    #[error("No legal move available")]
    NoLegalMove,
}
