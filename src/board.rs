// Copyright 2022 The boardkit developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The board engine: padded cell storage, side to move, and the two-phase
//! select-then-move click state machine.
//!
//! The engine is the sole owner of all mutable game state. A view layer
//! drives it with [`Board::notify_click`], one call per completed pointer
//! press-and-release on a square, and polls [`Board::board_state`] and
//! [`Board::highlight_mask`] on every redraw. Every call is an immediate,
//! total function of the current state and its single input; nothing here
//! suspends or blocks. Because a selection's candidate set is computed at
//! select time and consumed unverified at move time, no other mutation of
//! the grid may happen between the two clicks. Single ownership makes that
//! trivially true today; a concurrent front end would need to funnel clicks
//! through one serialized queue to keep it true.

use std::{convert::TryFrom, fmt};

use thiserror::Error;

use crate::{
    core::{self, Cell, Color, Grid, GridIndex, Piece, Square, SquareSet},
    movegen,
};

/// Possible errors that can arise when parsing a FEN string into a [`Board`].
#[derive(Clone, PartialEq, Eq, Debug, Error)]
pub enum FenParseError {
    #[error("unexpected char: {0}")]
    UnexpectedChar(char),
    #[error("unexpected EOF while reading")]
    UnexpectedEnd,
    #[error("invalid digit")]
    InvalidDigit,
    #[error("file does not sum to 8")]
    FileDoesNotSumToEight,
    #[error("unknown piece: {0}")]
    UnknownPiece(char),
    #[error("invalid side to move")]
    InvalidSideToMove,
}

/// What the engine is waiting for next.
///
/// The candidate set lives alongside the selected origin so that "a piece is
/// selected" and "the squares it may move to" cannot drift apart, and so
/// that no sentinel index value is needed to express "nothing selected".
#[derive(Copy, Clone, Debug)]
enum Selection {
    Idle,
    Selected {
        origin: GridIndex,
        candidates: SquareSet,
    },
}

/// A chess board mid-game: piece placement, side to move, and the current
/// selection, if any.
#[derive(Copy, Clone, Debug)]
pub struct Board {
    grid: Grid,
    side_to_move: Color,
    selection: Selection,
}

impl Board {
    /// The fixed starting position: one king per side, White to move.
    pub fn new() -> Board {
        Board::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").expect("starting position FEN is valid")
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.grid.cell_at(square).piece()
    }

    /// The square of the currently selected piece, if a selection is active.
    pub fn selected(&self) -> Option<Square> {
        match self.selection {
            Selection::Selected { origin, .. } => origin.square(),
            Selection::Idle => None,
        }
    }

    /// Read access to the padded grid, for driving [`crate::movegen`]
    /// directly. All mutation stays behind [`Board::notify_click`].
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The 64 playable cells in square order. Pure read; the sentinel
    /// border never appears in the output.
    pub fn board_state(&self) -> [Cell; 64] {
        let mut cells = [Cell::Empty; 64];
        for square in core::squares() {
            cells[square.as_u8() as usize] = self.grid.cell_at(square);
        }

        cells
    }

    /// The candidate destinations of the selected piece; empty when idle.
    pub fn highlights(&self) -> SquareSet {
        match self.selection {
            Selection::Selected { candidates, .. } => candidates,
            Selection::Idle => SquareSet::empty(),
        }
    }

    /// Per-square legal-destination flags, in the same square order as
    /// [`Board::board_state`]. All false when no piece is selected.
    pub fn highlight_mask(&self) -> [bool; 64] {
        let mut mask = [false; 64];
        for square in self.highlights() {
            mask[square.as_u8() as usize] = true;
        }

        mask
    }

    /// The sole mutating entry point, fired once per completed click on a
    /// playable square.
    ///
    /// Idle: clicking a piece of the side to move selects it and computes
    /// its candidate destinations; any other click is a no-op. Selected:
    /// clicking a candidate square performs the move and flips the turn;
    /// clicking anything else only clears the selection. In particular a
    /// click on a second piece of the side to move deselects the first but
    /// does not select the second; the next click starts from idle again.
    pub fn notify_click(&mut self, square: Square) {
        let clicked = GridIndex::of(square);
        match std::mem::replace(&mut self.selection, Selection::Idle) {
            Selection::Idle => {
                if let Some(piece) = self.grid.cell(clicked).piece() {
                    if piece.color == self.side_to_move {
                        let candidates = movegen::discover_moves(&self.grid, clicked);
                        tracing::debug!(%square, %piece, candidates = candidates.len(), "selected");
                        self.selection = Selection::Selected {
                            origin: clicked,
                            candidates,
                        };
                    }
                }
            }
            Selection::Selected { origin, candidates } => {
                if candidates.contains(square) {
                    self.perform_move(origin, clicked);
                } else {
                    tracing::debug!(%square, "deselected");
                }
            }
        }
    }

    /// Moves the piece at `origin` to `dest`, replacing whatever stood
    /// there, and flips the turn. Legality is not re-checked here: `dest`
    /// came out of the candidate set computed at selection time, and
    /// nothing can have mutated the grid in between.
    fn perform_move(&mut self, origin: GridIndex, dest: GridIndex) {
        let cell = self.grid.cell(origin);
        self.grid.set(dest, cell);
        self.grid.set(origin, Cell::Empty);
        self.side_to_move = self.side_to_move.toggle();
        if let (Some(from), Some(to)) = (origin.square(), dest.square()) {
            tracing::debug!(%from, %to, next = %self.side_to_move, "moved");
        }
    }
}

//
// FEN parsing and output.
//
// The board engine itself has no persistence; FEN is the setup surface for
// tests and the terminal front ends. Only the placement and side-to-move
// fields carry meaning for this engine, and only the piece letters it knows
// (K/R, both colors) are accepted. Any remaining fields are ignored.
//

impl Board {
    /// Constructs a board from the FEN subset this engine understands:
    /// placement over {K, R, k, r} plus side to move. Trailing FEN fields
    /// (castling, en passant, clocks) are accepted and ignored.
    pub fn from_fen(fen: impl AsRef<str>) -> Result<Board, FenParseError> {
        use std::{iter::Peekable, str::Chars};

        type Stream<'a> = Peekable<Chars<'a>>;

        fn eat(iter: &mut Stream<'_>, expected: char) -> Result<(), FenParseError> {
            match iter.next() {
                Some(c) if c == expected => Ok(()),
                Some(c) => Err(FenParseError::UnexpectedChar(c)),
                None => Err(FenParseError::UnexpectedEnd),
            }
        }

        fn peek(iter: &mut Stream<'_>) -> Result<char, FenParseError> {
            iter.peek().copied().ok_or(FenParseError::UnexpectedEnd)
        }

        let mut board = Board {
            grid: Grid::new(),
            side_to_move: Color::White,
            selection: Selection::Idle,
        };

        let str_ref = fen.as_ref();
        let iter = &mut str_ref.chars().peekable();
        for rank in core::ranks().rev() {
            let mut file = 0;
            while file <= 7 {
                let c = peek(iter)?;
                // digits 1 through 8 indicate a run of empty squares.
                if c.is_ascii_digit() {
                    if !('1'..='8').contains(&c) {
                        return Err(FenParseError::InvalidDigit);
                    }

                    file += c as usize - '0' as usize;
                    if file > 8 {
                        return Err(FenParseError::FileDoesNotSumToEight);
                    }

                    let _ = iter.next();
                    continue;
                }

                // otherwise it names a piece.
                let piece =
                    Piece::try_from(c).map_err(|_| FenParseError::UnknownPiece(c))?;
                let square = Square::of(rank, core::File::try_from(file as u8).unwrap());
                board
                    .grid
                    .set(GridIndex::of(square), Cell::Occupied(piece));
                let _ = iter.next();
                file += 1;
            }

            if rank != core::RANK_1 {
                eat(iter, '/')?;
            }
        }

        eat(iter, ' ')?;
        board.side_to_move = match peek(iter)? {
            'w' => Color::White,
            'b' => Color::Black,
            _ => return Err(FenParseError::InvalidSideToMove),
        };

        Ok(board)
    }

    pub fn as_fen(&self) -> String {
        use std::fmt::Write;

        let mut buf = String::new();
        for rank in core::ranks().rev() {
            let mut empty_squares = 0;
            for file in core::files() {
                let square = Square::of(rank, file);
                if let Some(piece) = self.piece_at(square) {
                    if empty_squares != 0 {
                        write!(&mut buf, "{}", empty_squares).unwrap();
                    }
                    write!(&mut buf, "{}", piece).unwrap();
                    empty_squares = 0;
                } else {
                    empty_squares += 1;
                }
            }

            if empty_squares != 0 {
                write!(&mut buf, "{}", empty_squares).unwrap();
            }

            if rank != core::RANK_1 {
                buf.push('/');
            }
        }

        buf.push(' ');
        match self.side_to_move {
            Color::White => buf.push('w'),
            Color::Black => buf.push('b'),
        }

        buf.push_str(" - - 0 1");
        buf
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in core::ranks().rev() {
            for file in core::files() {
                let sq = Square::of(rank, file);
                if let Some(piece) = self.piece_at(sq) {
                    write!(f, " {} ", piece)?;
                } else {
                    write!(f, " . ")?;
                }
            }

            writeln!(f, "| {}", rank)?;
        }

        for _ in core::files() {
            write!(f, "---")?;
        }

        writeln!(f)?;
        for file in core::files() {
            write!(f, " {} ", file)?;
        }

        writeln!(f)?;
        Ok(())
    }
}
