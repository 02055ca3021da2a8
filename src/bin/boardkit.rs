// Copyright 2022 The boardkit developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Interactive terminal front end for the board engine. Each line naming a
//! square ("e2") counts as one click on that square; the board is redrawn
//! from `board_state` and `highlight_mask` after every event, the same
//! poll-and-redraw contract a graphical view uses.

use std::io::{self, BufRead, Write};

use structopt::StructOpt;
use tracing_subscriber::{filter::LevelFilter, EnvFilter, FmtSubscriber};

use boardkit::core::{self, Cell, Square};
use boardkit::Board;

#[derive(Debug, StructOpt)]
struct Options {
    /// Position to start from, instead of the two-king starting position.
    #[structopt(long, name = "FEN")]
    fen: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(LevelFilter::WARN)
        .with_env_filter(EnvFilter::from_env("BOARDKIT_LOG"))
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let options = Options::from_args();
    let mut board = match options.fen {
        Some(fen) => Board::from_fen(fen)?,
        None => Board::new(),
    };

    let stdout = io::stdout();
    draw(&board, &mut stdout.lock())?;

    let stdin = io::stdin();
    for maybe_line in stdin.lock().lines() {
        let line = maybe_line?;
        match line.trim() {
            "" => continue,
            "quit" | "exit" => break,
            "board" => draw(&board, &mut stdout.lock())?,
            "fen" => println!("{}", board.as_fen()),
            "dump" => println!("{}", serde_json::to_string(&board.board_state().to_vec())?),
            command => match command.parse::<Square>() {
                Ok(square) => {
                    board.notify_click(square);
                    draw(&board, &mut stdout.lock())?;
                }
                Err(err) => println!("unrecognized command: {} ({})", command, err),
            },
        }
    }

    Ok(())
}

/// Renders the board through the same two reads a graphical front end polls
/// each frame. Candidate destinations are bracketed, the selected piece is
/// parenthesized.
fn draw(board: &Board, out: &mut impl Write) -> io::Result<()> {
    let state = board.board_state();
    let mask = board.highlight_mask();
    let selected = board.selected();

    for rank in core::ranks().rev() {
        for file in core::files() {
            let square = Square::of(rank, file);
            let idx = square.as_u8() as usize;
            let glyph = match state[idx] {
                Cell::Occupied(piece) => piece.to_string(),
                Cell::Empty => ".".to_owned(),
                Cell::OffBoard => unreachable!("board_state never yields sentinels"),
            };

            if selected == Some(square) {
                write!(out, "({})", glyph)?;
            } else if mask[idx] {
                write!(out, "[{}]", glyph)?;
            } else {
                write!(out, " {} ", glyph)?;
            }
        }

        writeln!(out, "| {}", rank)?;
    }

    for _ in core::files() {
        write!(out, "---")?;
    }

    writeln!(out)?;
    for file in core::files() {
        write!(out, " {} ", file)?;
    }

    writeln!(out)?;
    writeln!(out, "{} to move", board.side_to_move())?;
    Ok(())
}
