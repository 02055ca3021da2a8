// Copyright 2022 The boardkit developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Move generation for the two piece kinds the board rules cover.
//!
//! Kings step one cell in each of the eight compass directions; Rooks walk
//! rays along the four orthogonal directions until blocked. All stepping is
//! done in the padded grid, so running off the visible board surfaces as an
//! [`Cell::OffBoard`] sentinel rather than an index wrap.

use crate::core::{Cell, Color, Direction, Grid, GridIndex, PieceKind, SquareSet};

/// Computes the set of candidate destinations for the piece standing at
/// `origin`. Returns the empty set when `origin` holds no piece.
pub fn discover_moves(grid: &Grid, origin: GridIndex) -> SquareSet {
    let piece = match grid.cell(origin).piece() {
        Some(piece) => piece,
        None => return SquareSet::empty(),
    };

    match piece.kind {
        PieceKind::King => king_moves(grid, origin),
        PieceKind::Rook => rook_moves(grid, origin, piece.color),
    }
}

/// One step in each direction, onto empty cells only. The King does not
/// capture: the observed rules never evaluate occupied destinations for it.
fn king_moves(grid: &Grid, origin: GridIndex) -> SquareSet {
    let mut moves = SquareSet::empty();
    for dir in Direction::ALL {
        let dest = origin.towards(dir);
        if grid.cell(dest) == Cell::Empty {
            mark(&mut moves, dest);
        }
    }

    moves
}

/// Classic sliding-piece ray casting: each of the four rays is independent,
/// and a blocking piece or the board edge terminates exactly that ray. An
/// enemy blocker is itself a candidate (a capture); a friendly blocker and
/// the sentinel border are not.
fn rook_moves(grid: &Grid, origin: GridIndex, us: Color) -> SquareSet {
    let mut moves = SquareSet::empty();
    for dir in Direction::ORTHOGONAL {
        let mut cursor = origin.towards(dir);
        loop {
            match grid.cell(cursor) {
                Cell::Empty => {
                    mark(&mut moves, cursor);
                    cursor = cursor.towards(dir);
                }
                Cell::Occupied(other) if other.color != us => {
                    mark(&mut moves, cursor);
                    break;
                }
                Cell::Occupied(_) | Cell::OffBoard => break,
            }
        }
    }

    moves
}

fn mark(moves: &mut SquareSet, dest: GridIndex) {
    let square = dest
        .square()
        .expect("generated a sentinel cell as a destination?");
    moves.insert(square);
}

#[cfg(test)]
mod tests {
    use super::discover_moves;
    use crate::core::{GridIndex, Square};
    use crate::Board;

    fn assert_discovers(fen: &'static str, origin: &str, expected: &[&str]) {
        let board = Board::from_fen(fen).unwrap();
        let origin: Square = origin.parse().unwrap();
        let moves = discover_moves(board.grid(), GridIndex::of(origin));
        let mut found: Vec<String> = moves.into_iter().map(|sq| sq.to_string()).collect();
        let mut wanted: Vec<String> = expected.iter().map(|sq| sq.to_string()).collect();
        found.sort();
        wanted.sort();
        assert_eq!(found, wanted, "in position:\n{}", board);
    }

    mod kings {
        use super::*;

        #[test]
        fn open_board_neighborhood() {
            assert_discovers(
                "8/8/8/3K4/8/8/8/8 w - - 0 1",
                "d5",
                &["c4", "c5", "c6", "d4", "d6", "e4", "e5", "e6"],
            );
        }

        #[test]
        fn corner_is_clipped_by_the_border() {
            assert_discovers("8/8/8/8/8/8/8/K7 w - - 0 1", "a1", &["a2", "b1", "b2"]);
        }

        #[test]
        fn own_piece_blocks_a_step() {
            assert_discovers(
                "8/8/8/8/8/8/3R4/3K4 w - - 0 1",
                "d1",
                &["c1", "c2", "e1", "e2"],
            );
        }

        #[test]
        fn enemy_piece_is_not_offered_as_a_capture() {
            // The King's rules never evaluate occupied destinations.
            assert_discovers(
                "8/8/8/8/8/8/3r4/3K4 w - - 0 1",
                "d1",
                &["c1", "c2", "e1", "e2"],
            );
        }

        #[test]
        fn never_two_steps_away() {
            let board = Board::from_fen("8/8/8/3K4/8/8/8/8 w - - 0 1").unwrap();
            let origin: Square = "d5".parse().unwrap();
            let moves = discover_moves(board.grid(), GridIndex::of(origin));
            for dest in moves {
                let rank_gap = (dest.rank().as_u8() as i32 - 4).abs();
                let file_gap = (dest.file().as_u8() as i32 - 3).abs();
                assert!(rank_gap <= 1 && file_gap <= 1, "{} is too far from d5", dest);
            }
        }
    }

    mod rooks {
        use super::*;

        #[test]
        fn open_board_rays() {
            assert_discovers(
                "8/8/8/3r4/8/8/8/8 b - - 0 1",
                "d5",
                &[
                    "a5", "b5", "c5", "e5", "f5", "g5", "h5", // rank
                    "d1", "d2", "d3", "d4", "d6", "d7", "d8", // file
                ],
            );
        }

        #[test]
        fn own_blocker_ends_the_ray_unmarked() {
            // White king on d1, three squares east of the rook.
            assert_discovers(
                "8/8/8/8/8/8/8/R2K4 w - - 0 1",
                "a1",
                &["b1", "c1", "a2", "a3", "a4", "a5", "a6", "a7", "a8"],
            );
        }

        #[test]
        fn enemy_blocker_is_captured_and_ends_the_ray() {
            // Same shape, but the blocker is black: its square is a
            // candidate, everything beyond it is not.
            assert_discovers(
                "8/8/8/8/8/8/8/R2k4 w - - 0 1",
                "a1",
                &["b1", "c1", "d1", "a2", "a3", "a4", "a5", "a6", "a7", "a8"],
            );
        }

        #[test]
        fn boxed_in_rook_has_no_moves() {
            assert_discovers("8/8/8/8/8/8/R7/RR6 w - - 0 1", "a1", &[]);
        }
    }

    #[test]
    fn empty_origin_discovers_nothing() {
        let board = Board::from_fen("8/8/8/3K4/8/8/8/8 w - - 0 1").unwrap();
        let origin: Square = "a1".parse().unwrap();
        assert!(discover_moves(board.grid(), GridIndex::of(origin)).is_empty());
    }
}
