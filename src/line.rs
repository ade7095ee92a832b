//! Four-in-a-row detection

use crate::board::{Board, Player};

/// Checks whether `player` owns four aligned cells after a placement at `(row, col)`
///
/// # Notes
/// Only the horizontal scan is limited to `row` and the vertical scan to `col`;
/// each of them rescans the whole line rather than the cells around the placement.
/// Both diagonal directions are rescanned over the entire board regardless of
/// `(row, col)`, so a diagonal four anywhere on the board counts.
pub fn has_four_in_a_row(board: &Board, row: usize, col: usize, player: Player) -> bool {
    let (width, height) = (board.width(), board.height());
    let target = player.cell();
    let owned = |r: usize, c: usize| board.get(r, c) == target;

    // horizontal
    if (0..=width - 4).any(|c| (0..4).all(|i| owned(row, c + i))) {
        return true;
    }

    // vertical
    if (0..=height - 4).any(|r| (0..4).all(|i| owned(r + i, col))) {
        return true;
    }

    // diagonal /, read from the lower-left end upwards
    for r in 3..height {
        for c in 0..=width - 4 {
            if (0..4).all(|i| owned(r - i, c + i)) {
                return true;
            }
        }
    }

    // diagonal \, read from the lower-right end upwards
    for r in 3..height {
        for c in 3..width {
            if (0..4).all(|i| owned(r - i, c - i)) {
                return true;
            }
        }
    }

    false
}
