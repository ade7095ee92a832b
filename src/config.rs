use std::convert::TryFrom;
use std::path::PathBuf;

use crate::{board::Board, error::GameError};

/// Who controls the second player
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameMode {
    PlayerVsPlayer,
    PlayerVsComputer,
}

impl TryFrom<usize> for GameMode {
    type Error = anyhow::Error;

    /// Parses the number chosen from the game mode menu
    fn try_from(choice: usize) -> Result<Self, Self::Error> {
        match choice {
            1 => Ok(GameMode::PlayerVsPlayer),
            2 => Ok(GameMode::PlayerVsComputer),
            _ => Err(anyhow::anyhow!("Game mode {} is invalid", choice)),
        }
    }
}

/// Settings chosen before a game starts
///
/// The board size and the game mode are checked separately, the size before
/// the move log is opened and the mode once the log has its header.
#[derive(Clone, Debug)]
pub struct GameConfig {
    /// File the move log is written to
    pub log_path: PathBuf,
    pub width: usize,
    pub height: usize,
    /// Number picked from the game mode menu
    pub mode_choice: usize,
}

impl GameConfig {
    /// Creates the empty board for these settings, failing on an unsupported size
    pub fn board(&self) -> Result<Board, GameError> {
        Board::new(self.width, self.height)
    }

    pub fn mode(&self) -> anyhow::Result<GameMode> {
        GameMode::try_from(self.mode_choice)
    }
}
