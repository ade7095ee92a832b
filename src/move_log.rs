//! A plain text record of a game, written as it is played

use anyhow::{Context, Result};

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::{
    board::{Board, Player},
    game::Placement,
};

pub struct MoveLog<W: Write> {
    writer: W,
}

impl MoveLog<BufWriter<File>> {
    /// Creates (or truncates) the log file at `path`
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path)
            .with_context(|| format!("Error opening log file {}", path.display()))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> MoveLog<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn header(&mut self, board: &Board) -> Result<()> {
        self.line(format_args!(
            "Board height - {} \nBoard width - {}",
            board.height(),
            board.width()
        ))
    }

    pub fn board(&mut self, board: &Board) -> Result<()> {
        write!(self.writer, "{}", board)?;
        self.writer.flush()?;
        Ok(())
    }

    pub fn placement(&mut self, placement: &Placement) -> Result<()> {
        let player = placement.player;
        self.line(format_args!(
            "Player {} ({}) placed at column {}",
            player.number(),
            player.glyph(),
            placement.column + 1
        ))
    }

    pub fn invalid_move(&mut self, player: Player) -> Result<()> {
        self.line(format_args!(
            "Player {} ({}) tried making an invalid move",
            player.number(),
            player.glyph()
        ))
    }

    pub fn win(&mut self, player: Player) -> Result<()> {
        self.line(format_args!(
            "Player {} ({}) wins!",
            player.number(),
            player.glyph()
        ))
    }

    pub fn draw(&mut self) -> Result<()> {
        self.line(format_args!("The game is a draw!"))
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn line(&mut self, args: std::fmt::Arguments<'_>) -> Result<()> {
        writeln!(self.writer, "{}", args)?;
        self.writer.flush()?;
        Ok(())
    }
}
