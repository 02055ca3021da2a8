// Copyright 2022 The boardkit developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! `boardkit` is the rules engine behind a click-driven chess board.
//!
//! The library owns all mutable game state: a sentinel-padded board, the
//! side to move, and a two-phase select-then-move state machine driven by
//! "square clicked" events. A front end, graphical or terminal, resolves
//! pointer input to squares, feeds them to [`Board::notify_click`], and
//! polls [`Board::board_state`] and [`Board::highlight_mask`] to redraw.
//!
//! Movement rules currently cover Kings and Rooks only; the remaining
//! pieces and rules (checks, castling, en passant, promotion) are not yet
//! implemented.

pub mod board;
pub mod core;
pub mod movegen;

pub use board::{Board, FenParseError};
