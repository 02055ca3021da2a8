// Copyright 2022 The boardkit developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use anyhow::bail;
use structopt::StructOpt;

use boardkit::core::Square;
use boardkit::Board;

/// Prints the destinations offered for the piece on a square, one per line.
#[derive(Debug, StructOpt)]
struct Options {
    /// FEN representation of the position to inspect.
    #[structopt(name = "FEN")]
    fen: String,

    /// Square holding the piece whose moves to list, e.g. "e1".
    #[structopt(name = "SQUARE")]
    square: String,
}

fn main() -> anyhow::Result<()> {
    let options = Options::from_args();
    let mut board = Board::from_fen(&options.fen)?;
    let square: Square = options.square.parse()?;

    board.notify_click(square);
    if board.selected().is_none() {
        bail!(
            "no piece of the side to move ({}) on {}",
            board.side_to_move(),
            square
        );
    }

    for dest in board.highlights() {
        println!("{}", dest);
    }

    Ok(())
}
