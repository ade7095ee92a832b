use std::fmt;

use crate::{error::GameError, MAX_HEIGHT, MAX_WIDTH, MIN_HEIGHT, MIN_WIDTH};

/// One of the two sides of a game
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// The cell value this player's tokens occupy
    pub fn cell(self) -> Cell {
        match self {
            Player::One => Cell::PlayerOne,
            Player::Two => Cell::PlayerTwo,
        }
    }

    pub fn glyph(self) -> char {
        self.cell().glyph()
    }

    /// 1-based player number, as shown to the players
    pub fn number(self) -> usize {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Cell {
    PlayerOne,
    PlayerTwo,
    Empty,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Display glyph for rendering and the move log
    pub fn glyph(&self) -> char {
        match self {
            Cell::PlayerOne => 'X',
            Cell::PlayerTwo => 'O',
            Cell::Empty => ' ',
        }
    }
}

/// A rectangular gravity-drop board
///
/// Row 0 is the top row and row `height - 1` the bottom. Within every column the
/// filled cells form a contiguous block resting on the bottom row.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    cells: Vec<Cell>, // cells are stored row by row, top-to-bottom, left-to-right
    width: usize,
    height: usize,
}

impl Board {
    /// Creates an empty board, rejecting sizes outside the supported range
    pub fn new(width: usize, height: usize) -> Result<Self, GameError> {
        if !(MIN_WIDTH..=MAX_WIDTH).contains(&width)
            || !(MIN_HEIGHT..=MAX_HEIGHT).contains(&height)
        {
            return Err(GameError::InvalidDimensions { width, height });
        }
        Ok(Self {
            cells: vec![Cell::Empty; width * height],
            width,
            height,
        })
    }

    /// Builds a position by dropping tokens into the given 0-indexed columns,
    /// alternating players and starting with `Player::One`
    pub fn from_moves(width: usize, height: usize, moves: &[usize]) -> Result<Self, GameError> {
        let mut board = Self::new(width, height)?;
        let mut player = Player::One;
        for &column in moves {
            board.place(column, player)?;
            player = player.opponent();
        }
        Ok(board)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the cell at `(row, col)`; both must be in range
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.width + col]
    }

    #[inline]
    fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row * self.width + col] = cell;
    }

    /// Drops a token for `player` into `col`, returning the row it landed on
    pub fn place(&mut self, col: usize, player: Player) -> Result<usize, GameError> {
        if col >= self.width {
            return Err(GameError::InvalidColumn {
                column: col,
                width: self.width,
            });
        }
        let row = (0..self.height)
            .rev()
            .find(|&row| self.get(row, col).is_empty())
            .ok_or(GameError::ColumnFull(col))?;
        self.set(row, col, player.cell());
        Ok(row)
    }

    /// Clears the cell filled by the matching `place` call
    ///
    /// The coordinates must be exactly those returned by `place`, and
    /// placements must be undone in reverse order.
    pub fn undo(&mut self, row: usize, col: usize) {
        self.set(row, col, Cell::Empty);
    }

    pub fn is_column_playable(&self, col: usize) -> bool {
        col < self.width && self.get(0, col).is_empty()
    }

    /// Playable columns in ascending order
    pub fn playable_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.width).filter(move |&col| self.is_column_playable(col))
    }

    /// True once every cell of the top row is filled, which under gravity
    /// means the whole board is filled
    pub fn is_full(&self) -> bool {
        (0..self.width).all(|col| !self.get(0, col).is_empty())
    }

    /// Writes a cell directly, bypassing gravity (test positions only)
    #[cfg(test)]
    pub(crate) fn set_unchecked(&mut self, row: usize, col: usize, cell: Cell) {
        self.set(row, col, cell);
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                write!(f, "| {} ", self.get(row, col).glyph())?;
            }
            writeln!(f, "|")?;
        }
        for col in 1..=self.width {
            // keep labels aligned with the cells once they reach two digits
            if col < 10 {
                write!(f, "  {} ", col)?;
            } else {
                write!(f, "  {}", col)?;
            }
        }
        writeln!(f)
    }
}
