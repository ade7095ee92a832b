//! Entry points for a game loop, and the state of a game in progress

use log::info;

use crate::{
    board::{Board, Player},
    config::GameMode,
    error::GameError,
    line::has_four_in_a_row,
    solver::Solver,
};

/// True if `column` is on the board and not yet full
pub fn is_legal_move(board: &Board, column: usize) -> bool {
    board.is_column_playable(column)
}

/// Permanently drops a token for `player` into `column`, returning its row
pub fn apply_move(board: &mut Board, column: usize, player: Player) -> Result<usize, GameError> {
    board.place(column, player)
}

/// True if the token at `(row, col)` gave `player` four in a row
pub fn is_winning_placement(board: &Board, row: usize, col: usize, player: Player) -> bool {
    has_four_in_a_row(board, row, col, player)
}

pub fn is_board_full(board: &Board) -> bool {
    board.is_full()
}

/// Chooses the computer's column with a [`FIXED_DEPTH`](crate::FIXED_DEPTH) search
pub fn select_computer_move(
    board: &mut Board,
    ai: Player,
    human: Player,
) -> Result<usize, GameError> {
    Solver::new().best_move(board, ai, human)
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameState {
    Playing,
    PlayerOneWin,
    PlayerTwoWin,
    Draw,
}

/// The outcome of a single move
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Placement {
    pub player: Player,
    pub row: usize,
    pub column: usize,
    pub state: GameState,
}

/// A game in progress. Player One always moves first and, against the
/// computer, Player Two is the computer.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    mode: GameMode,
    to_move: Player,
    state: GameState,
    solver: Solver,
}

impl Game {
    pub fn new(width: usize, height: usize, mode: GameMode) -> Result<Self, GameError> {
        Ok(Self::with_board(Board::new(width, height)?, mode))
    }

    /// Starts a game on an already created board, Player One to move
    pub fn with_board(board: Board, mode: GameMode) -> Self {
        Self {
            board,
            mode,
            to_move: Player::One,
            state: GameState::Playing,
            solver: Solver::new(),
        }
    }

    /// Replaces the search used for computer moves
    pub fn with_solver(mut self, solver: Solver) -> Self {
        self.solver = solver;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn computer_to_move(&self) -> bool {
        self.mode == GameMode::PlayerVsComputer && self.to_move == Player::Two
    }

    /// Asks the solver for the column of the player to move
    pub fn computer_move(&mut self) -> Result<usize, GameError> {
        if self.state != GameState::Playing {
            return Err(GameError::NoLegalMove);
        }
        let human = self.to_move.opponent();
        self.solver.best_move(&mut self.board, self.to_move, human)
    }

    /// Plays `column` for the player to move and updates the game state
    ///
    /// A rejected move leaves the board and the turn unchanged.
    pub fn play(&mut self, column: usize) -> Result<Placement, GameError> {
        if self.state != GameState::Playing {
            return Err(GameError::NoLegalMove);
        }
        let player = self.to_move;
        let row = apply_move(&mut self.board, column, player)?;

        self.state = if is_winning_placement(&self.board, row, column, player) {
            info!("Player {} wins", player.number());
            match player {
                Player::One => GameState::PlayerOneWin,
                Player::Two => GameState::PlayerTwoWin,
            }
        } else if is_board_full(&self.board) {
            info!("Game drawn");
            GameState::Draw
        } else {
            self.to_move = player.opponent();
            GameState::Playing
        };

        Ok(Placement {
            player,
            row,
            column,
            state: self.state,
        })
    }
}
