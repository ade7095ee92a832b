//! An agent to choose moves by fixed-depth minimax search

use log::{debug, trace};

use crate::{
    board::*, error::GameError, evaluator::score_position, line::has_four_in_a_row, FIXED_DEPTH,
};

/// The score of a position where a side has just completed four in a row
pub const WIN_SCORE: i32 = 1000;

/// Scores a position as the computer's heuristic advantage over its opponent
pub fn evaluate(board: &Board, ai: Player, human: Player) -> i32 {
    score_position(board, ai) - score_position(board, human)
}

/// An agent to pick moves for the computer player
///
/// # Notes
/// This agent performs a plain minimax search to a fixed depth, without pruning.
/// The search runs on the caller's board: every simulated placement is undone
/// before the call returns, so the board is left exactly as it was given.
///
/// # Position Scoring
/// Positions at the search horizon, or with a full board, are scored statically
/// with [`evaluate`]. A placement that completes four in a row ends its branch
/// immediately with [`WIN_SCORE`] for the computer or `-WIN_SCORE` for its opponent,
/// which dominates every heuristic score.
///
/// Columns are always tried left to right and the first column reaching the
/// best score is kept, so the search is deterministic.
#[derive(Clone, Debug)]
pub struct Solver {
    depth: usize,

    /// The number of nodes searched by this `Solver` so far (for diagnostics only)
    pub node_count: usize,
}

impl Solver {
    /// Creates a new `Solver` searching [`FIXED_DEPTH`] plies
    pub fn new() -> Self {
        Self::with_depth(FIXED_DEPTH)
    }

    /// Creates a new `Solver` searching the given number of plies
    pub fn with_depth(depth: usize) -> Self {
        Self {
            depth,
            node_count: 0,
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Performs game tree search
    ///
    /// Returns the score of the position from the computer's point of view
    /// (see [Position Scoring]). `maximizing` is true when `ai` is to move.
    ///
    /// [Position Scoring]: #position-scoring
    pub fn minimax(
        &mut self,
        board: &mut Board,
        depth: usize,
        maximizing: bool,
        ai: Player,
        human: Player,
    ) -> i32 {
        self.node_count += 1;

        if depth == 0 || board.is_full() {
            return evaluate(board, ai, human);
        }

        let (player, win_score) = if maximizing {
            (ai, WIN_SCORE)
        } else {
            (human, -WIN_SCORE)
        };

        let mut best: Option<i32> = None;
        for column in 0..board.width() {
            // full columns are skipped
            let row = match board.place(column, player) {
                Ok(row) => row,
                Err(_) => continue,
            };
            if has_four_in_a_row(board, row, column, player) {
                board.undo(row, column);
                return win_score;
            }
            let score = self.minimax(board, depth - 1, !maximizing, ai, human);
            board.undo(row, column);

            best = Some(match best {
                Some(best) if maximizing => best.max(score),
                Some(best) => best.min(score),
                None => score,
            });
        }

        // a board that is not full always has a playable column
        best.unwrap_or_else(|| evaluate(board, ai, human))
    }

    /// Calculates the best column for `ai` to play
    ///
    /// An immediately winning column is returned without searching the
    /// remaining candidates. Fails with `NoLegalMove` if every column is full.
    pub fn best_move(
        &mut self,
        board: &mut Board,
        ai: Player,
        human: Player,
    ) -> Result<usize, GameError> {
        self.node_count = 0;

        let mut best: Option<(usize, i32)> = None;
        for column in 0..board.width() {
            let row = match board.place(column, ai) {
                Ok(row) => row,
                Err(_) => continue,
            };
            if has_four_in_a_row(board, row, column, ai) {
                board.undo(row, column);
                debug!("Winning move found in column {}", column + 1);
                return Ok(column);
            }
            // the candidate is already on the board, so the opponent replies first
            let score = self.minimax(board, self.depth, false, ai, human);
            board.undo(row, column);
            trace!("Column {} scored {}", column + 1, score);

            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((column, score));
            }
        }

        let (column, score) = best.ok_or(GameError::NoLegalMove)?;
        debug!(
            "Best move: column {}, score {}, {} positions searched",
            column + 1,
            score,
            self.node_count
        );
        Ok(column)
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}
