// Copyright 2022 The boardkit developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Module `core` contains the board data model shared by the engine and its
//! front ends.

mod grid;
mod squareset;
mod types;

pub use grid::{Cell, Grid, GridIndex};
pub use squareset::{SquareSet, SquareSetIterator};
pub use types::{
    files, ranks, squares, Color, Direction, File, FileParseError, Piece, PieceKind,
    PieceParseError, Rank, RankParseError, Square, SquareParseError,
};

pub use types::{FILE_A, FILE_B, FILE_C, FILE_D, FILE_E, FILE_F, FILE_G, FILE_H};
pub use types::{RANK_1, RANK_2, RANK_3, RANK_4, RANK_5, RANK_6, RANK_7, RANK_8};
