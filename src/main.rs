use anyhow::{anyhow, bail, Context, Result};
use crossterm::{
    cursor::MoveTo,
    style::{style, Attribute, Color, PrintStyledContent},
    terminal::{Clear, ClearType},
    QueueableCommand,
};
use indicatif::ProgressBar;

use std::io::{stdin, stdout, Stdin, Write};
use std::path::PathBuf;
use std::str::FromStr;
use std::thread::sleep;
use std::time::Duration;

use connect4_minimax::{
    config::GameConfig,
    move_log::MoveLog,
    *,
};

fn main() -> Result<()> {
    env_logger::init();

    let stdin = stdin();
    let config = read_config(&stdin)?;
    let board = config.board()?;

    let mut log = MoveLog::create(&config.log_path)?;
    log.header(&board)?;

    let mode = match config.mode() {
        Ok(mode) => mode,
        Err(err) => {
            display(&board)?;
            log.board(&board)?;
            println!("{}.", err);
            return Ok(());
        }
    };
    let mut game = Game::with_board(board, mode);

    // game loop
    loop {
        display(game.board())?;
        log.board(game.board())?;

        let player = game.to_move();
        let column = if game.computer_to_move() {
            let spinner = ProgressBar::new_spinner();
            spinner.set_message("AI is thinking...");
            spinner.enable_steady_tick(100);
            let column = game.computer_move()?;
            spinner.finish_and_clear();

            println!("AI chooses column {}", column + 1);
            sleep(Duration::from_secs(2));
            column
        } else {
            let input = prompt(
                &stdin,
                &format!(
                    "Player {} ({}), enter column (1-{}): ",
                    player.number(),
                    player.glyph(),
                    game.board().width()
                ),
            )?;
            match input.parse::<usize>() {
                Ok(column) if column >= 1 => column - 1,
                _ => {
                    println!("Invalid move. Try again.");
                    log.invalid_move(player)?;
                    sleep(Duration::from_secs(3));
                    continue;
                }
            }
        };

        let placement = match game.play(column) {
            Ok(placement) => placement,
            Err(err) => {
                println!("{}. Try again.", err);
                log.invalid_move(player)?;
                // try the move again
                sleep(Duration::from_secs(3));
                continue;
            }
        };
        log.placement(&placement)?;

        // end states
        match placement.state {
            GameState::Playing => {}
            GameState::PlayerOneWin | GameState::PlayerTwoWin => {
                display(game.board())?;
                log.board(game.board())?;
                println!("Player {} ({}) wins!", player.number(), player.glyph());
                log.win(player)?;
                break;
            }
            GameState::Draw => {
                display(game.board())?;
                log.board(game.board())?;
                println!("The game is a draw!");
                log.draw()?;
                break;
            }
        }
    }
    Ok(())
}

fn read_config(stdin: &Stdin) -> Result<GameConfig> {
    let log_path = PathBuf::from(prompt(stdin, "Enter the filename to save the game result: ")?);
    let width = prompt_number(
        stdin,
        &format!("Enter the width of the board (max {}): ", MAX_WIDTH),
    )?;
    let height = prompt_number(
        stdin,
        &format!("Enter the height of the board (max {}): ", MAX_HEIGHT),
    )?;
    let mode_choice = prompt_number(stdin, "Enter game mode (1 for PvP, 2 for PvAI): ")?;

    Ok(GameConfig {
        log_path,
        width,
        height,
        mode_choice,
    })
}

fn prompt(stdin: &Stdin, message: &str) -> Result<String> {
    print!("{}", message);
    stdout().flush()?;

    let mut buffer = String::new();
    if stdin.read_line(&mut buffer)? == 0 {
        bail!("Input closed");
    }
    Ok(buffer.trim().to_string())
}

fn prompt_number<T: FromStr>(stdin: &Stdin, message: &str) -> Result<T> {
    let input = prompt(stdin, message)?;
    input
        .parse::<T>()
        .map_err(|_| anyhow!("Invalid number: {}", input))
        .context("Failed to read game settings")
}

/// Clears the terminal and draws the board with coloured tokens
fn display(board: &Board) -> Result<()> {
    let mut stdout = stdout();
    stdout.queue(Clear(ClearType::All))?.queue(MoveTo(0, 0))?;

    for row in 0..board.height() {
        for col in 0..board.width() {
            let cell = board.get(row, col);
            stdout
                .queue(PrintStyledContent(style("| ")))?
                .queue(PrintStyledContent(
                    style(cell.glyph())
                        .attribute(Attribute::Bold)
                        .with(match cell {
                            Cell::PlayerOne => Color::Red,
                            Cell::PlayerTwo => Color::Yellow,
                            Cell::Empty => Color::Reset,
                        }),
                ))?
                .queue(PrintStyledContent(style(" ")))?;
        }
        stdout.queue(PrintStyledContent(style("|\n")))?;
    }

    let labels: String = (1..=board.width())
        .map(|col| {
            if col < 10 {
                format!("  {} ", col)
            } else {
                format!("  {}", col)
            }
        })
        .collect();
    stdout.queue(PrintStyledContent(style(labels + "\n")))?;
    stdout.flush()?;
    Ok(())
}
