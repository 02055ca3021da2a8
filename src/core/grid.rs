// Copyright 2022 The boardkit developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The sentinel-padded board storage.
//!
//! The playing area is embedded in a 10x12 grid: one sentinel column on each
//! side and two sentinel ranks above and below. Move generation steps through
//! this grid with the fixed offsets of [`Direction`]; the padding guarantees
//! that any single step taken from a playable cell lands either on another
//! playable cell or on an [`Cell::OffBoard`] sentinel, never wrapping into an
//! unrelated rank. Sentinel cells are never written after construction.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{self, Direction, File, Piece, Rank, Square};

const GRID_CELLS: usize = 120;
const GRID_WIDTH: u8 = 10;

/// One position on the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Occupied(Piece),
    OffBoard,
}

impl Cell {
    pub fn piece(self) -> Option<Piece> {
        match self {
            Cell::Occupied(piece) => Some(piece),
            _ => None,
        }
    }
}

/// A position within the padded grid. Unlike [`Square`], a GridIndex may
/// refer to a sentinel cell; only indices with a `square()` are playable.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GridIndex(u8);

impl GridIndex {
    /// The grid position of a playable square. Square 0 (a1) sits at grid
    /// index 21, one sentinel column and two sentinel ranks in.
    pub const fn of(square: Square) -> GridIndex {
        let s = square.as_u8();
        GridIndex(2 * GRID_WIDTH + 1 + (s >> 3) * GRID_WIDTH + (s & 7))
    }

    /// The playable square at this grid position, or `None` for a sentinel.
    pub fn square(self) -> Option<Square> {
        let rank = (self.0 / GRID_WIDTH) as i32 - 2;
        let file = (self.0 % GRID_WIDTH) as i32 - 1;
        if (0..8).contains(&rank) && (0..8).contains(&file) {
            Some(Square::of(
                Rank::try_from(rank as u8).unwrap(),
                File::try_from(file as u8).unwrap(),
            ))
        } else {
            None
        }
    }

    /// The neighboring grid position one step in the given direction. A step
    /// from any playable cell stays within the grid; that is the invariant
    /// the sentinel padding exists to provide.
    pub const fn towards(self, dir: Direction) -> GridIndex {
        GridIndex((self.0 as i32 + dir.as_offset()) as u8)
    }

    fn as_usize(self) -> usize {
        self.0 as usize
    }
}

/// The padded cell storage. All mutation goes through [`Grid::set`], which
/// refuses to touch sentinel cells.
#[derive(Copy, Clone)]
pub struct Grid {
    cells: [Cell; GRID_CELLS],
}

impl Grid {
    /// An empty playing area surrounded by sentinels.
    pub fn new() -> Grid {
        let mut cells = [Cell::OffBoard; GRID_CELLS];
        for square in core::squares() {
            cells[GridIndex::of(square).as_usize()] = Cell::Empty;
        }

        Grid { cells }
    }

    pub fn cell(&self, index: GridIndex) -> Cell {
        self.cells[index.as_usize()]
    }

    pub fn cell_at(&self, square: Square) -> Cell {
        self.cell(GridIndex::of(square))
    }

    pub(crate) fn set(&mut self, index: GridIndex, cell: Cell) {
        debug_assert!(
            index.square().is_some(),
            "attempted to write a sentinel cell at grid index {:?}",
            index
        );
        self.cells[index.as_usize()] = cell;
    }
}

impl Default for Grid {
    fn default() -> Grid {
        Grid::new()
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("cells", &&self.cells[..])
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Color, PieceKind};

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn corner_grid_positions() {
        assert_eq!(GridIndex::of(sq("a1")), GridIndex(21));
        assert_eq!(GridIndex::of(sq("h1")), GridIndex(28));
        assert_eq!(GridIndex::of(sq("a8")), GridIndex(91));
        assert_eq!(GridIndex::of(sq("h8")), GridIndex(98));
    }

    #[test]
    fn square_to_grid_is_a_bijection() {
        for square in core::squares() {
            assert_eq!(GridIndex::of(square).square(), Some(square));
        }
    }

    #[test]
    fn sentinels_have_no_square() {
        // Left border of rank 1 and the rank below it.
        assert_eq!(GridIndex(20).square(), None);
        assert_eq!(GridIndex(10).square(), None);
        // Right border next to h4.
        assert_eq!(GridIndex::of(sq("h4")).towards(Direction::East).square(), None);
    }

    #[test]
    fn stepping_off_the_board_lands_on_sentinels() {
        let grid = Grid::new();
        for square in core::squares() {
            for dir in Direction::ALL {
                let stepped = GridIndex::of(square).towards(dir);
                match stepped.square() {
                    Some(_) => assert_eq!(grid.cell(stepped), Cell::Empty),
                    None => assert_eq!(grid.cell(stepped), Cell::OffBoard),
                }
            }
        }
    }

    #[test]
    fn set_and_read_back() {
        let mut grid = Grid::new();
        let piece = Piece {
            color: Color::White,
            kind: PieceKind::Rook,
        };
        grid.set(GridIndex::of(sq("c3")), Cell::Occupied(piece));
        assert_eq!(grid.cell_at(sq("c3")), Cell::Occupied(piece));
        assert_eq!(grid.cell_at(sq("c4")), Cell::Empty);
    }
}
