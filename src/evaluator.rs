//! Static evaluation of a position for one player

use crate::board::{Board, Cell, Player};

/// Bonus per token in the center column
pub const CENTER_WEIGHT: i32 = 3;

/// Scores a single window of four cells for `player`
pub fn evaluate_window(window: [Cell; 4], player: Player) -> i32 {
    let own = player.cell();
    let opponent = player.opponent().cell();
    let player_count = window.iter().filter(|&&cell| cell == own).count();
    let opponent_count = window.iter().filter(|&&cell| cell == opponent).count();

    match (player_count, opponent_count) {
        (4, _) => 100,
        (3, 0) => 10,
        (2, 0) => 5,
        (0, 3) => -8,
        _ => 0,
    }
}

/// Sums the center column bonus and every window score on the board for `player`
///
/// This is not a differential, the opponent's own windows are only
/// accounted for by the caller scoring both sides.
pub fn score_position(board: &Board, player: Player) -> i32 {
    let (width, height) = (board.width(), board.height());
    let mut score = 0;

    let center = width / 2;
    let center_count = (0..height)
        .filter(|&row| board.get(row, center) == player.cell())
        .count() as i32;
    score += center_count * CENTER_WEIGHT;

    let window = |cells: [(usize, usize); 4]| {
        let mut window = [Cell::Empty; 4];
        for (slot, &(row, col)) in window.iter_mut().zip(cells.iter()) {
            *slot = board.get(row, col);
        }
        evaluate_window(window, player)
    };

    // horizontal
    for row in 0..height {
        for col in 0..=width - 4 {
            score += window([(row, col), (row, col + 1), (row, col + 2), (row, col + 3)]);
        }
    }

    // vertical
    for col in 0..width {
        for row in 0..=height - 4 {
            score += window([(row, col), (row + 1, col), (row + 2, col), (row + 3, col)]);
        }
    }

    for row in 0..=height - 4 {
        for col in 0..=width - 4 {
            // diagonal \
            score += window([
                (row, col),
                (row + 1, col + 1),
                (row + 2, col + 2),
                (row + 3, col + 3),
            ]);
            // diagonal /, bottom-to-top
            score += window([
                (row + 3, col),
                (row + 2, col + 1),
                (row + 1, col + 2),
                (row, col + 3),
            ]);
        }
    }

    score
}
