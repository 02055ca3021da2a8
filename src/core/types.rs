// Copyright 2022 The boardkit developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::{convert::TryFrom, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Debug, Error)]
pub enum SquareParseError {
    #[error("square index out of range: {0}")]
    OutOfRange(u8),
    #[error("malformed square: {0}")]
    Malformed(String),
}

#[derive(Clone, Debug, Error)]
pub enum RankParseError {
    #[error("rank index out of range: {0}")]
    OutOfRange(u8),
    #[error("invalid char: {0}")]
    InvalidChar(char),
}

#[derive(Clone, Debug, Error)]
pub enum FileParseError {
    #[error("file index out of range: {0}")]
    OutOfRange(u8),
    #[error("invalid char: {0}")]
    InvalidChar(char),
}

#[derive(Clone, Debug, Error)]
pub enum PieceParseError {
    #[error("invalid char: {0}")]
    InvalidChar(char),
}

/// A playable square on the chessboard, numbered 0 through 63, row-major,
/// with square 0 at a1. This is the index space the view layer speaks; the
/// engine translates to its padded grid internally.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Square(pub(in crate::core) u8);

impl Square {
    /// Returns the rank of this square on the chessboard.
    pub const fn rank(self) -> Rank {
        Rank(self.0 >> 3)
    }

    /// Returns the file of this square on the chessboard.
    pub const fn file(self) -> File {
        File(self.0 & 7)
    }

    /// Creates a new Square composed of a given rank and file.
    pub const fn of(rank: Rank, file: File) -> Square {
        Square(rank.0 * 8 + file.0)
    }

    pub const fn as_u8(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Square {
    type Error = SquareParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value >= 64 {
            return Err(SquareParseError::OutOfRange(value));
        }

        Ok(Square(value))
    }
}

impl FromStr for Square {
    type Err = SquareParseError;

    /// Parses coordinate notation, e.g. "e4".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let square = match (chars.next(), chars.next(), chars.next()) {
            (Some(f), Some(r), None) => {
                let file =
                    File::try_from(f).map_err(|_| SquareParseError::Malformed(s.to_owned()))?;
                let rank =
                    Rank::try_from(r).map_err(|_| SquareParseError::Malformed(s.to_owned()))?;
                Square::of(rank, file)
            }
            _ => return Err(SquareParseError::Malformed(s.to_owned())),
        };

        Ok(square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rank(u8);

impl Rank {
    pub const fn as_u8(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rank {
    type Error = RankParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value >= 8 {
            return Err(RankParseError::OutOfRange(value));
        }

        Ok(Rank(value))
    }
}

impl TryFrom<char> for Rank {
    type Error = RankParseError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '1'..='8' => Ok(Rank(value as u8 - b'1')),
            c => Err(RankParseError::InvalidChar(c)),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", (b'1' + self.0) as char)
    }
}

pub const RANK_1: Rank = Rank(0);
pub const RANK_2: Rank = Rank(1);
pub const RANK_3: Rank = Rank(2);
pub const RANK_4: Rank = Rank(3);
pub const RANK_5: Rank = Rank(4);
pub const RANK_6: Rank = Rank(5);
pub const RANK_7: Rank = Rank(6);
pub const RANK_8: Rank = Rank(7);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct File(u8);

impl File {
    pub const fn as_u8(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for File {
    type Error = FileParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value >= 8 {
            return Err(FileParseError::OutOfRange(value));
        }

        Ok(File(value))
    }
}

impl TryFrom<char> for File {
    type Error = FileParseError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'a'..='h' => Ok(File(value as u8 - b'a')),
            c => Err(FileParseError::InvalidChar(c)),
        }
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", (b'a' + self.0) as char)
    }
}

pub const FILE_A: File = File(0);
pub const FILE_B: File = File(1);
pub const FILE_C: File = File(2);
pub const FILE_D: File = File(3);
pub const FILE_E: File = File(4);
pub const FILE_F: File = File(5);
pub const FILE_G: File = File(6);
pub const FILE_H: File = File(7);

#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn toggle(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// The piece kinds this engine knows how to move. The board rules cover
/// exactly these two; the remaining chess pieces are a planned extension,
/// which exhaustive matching over this enum keeps compiler-checked.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PieceKind {
    King,
    Rook,
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            PieceKind::King => 'k',
            PieceKind::Rook => 'r',
        };

        write!(f, "{}", c)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl TryFrom<char> for Piece {
    type Error = PieceParseError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        let piece = match value {
            'k' => Piece {
                color: Color::Black,
                kind: PieceKind::King,
            },
            'r' => Piece {
                color: Color::Black,
                kind: PieceKind::Rook,
            },
            'K' => Piece {
                color: Color::White,
                kind: PieceKind::King,
            },
            'R' => Piece {
                color: Color::White,
                kind: PieceKind::Rook,
            },
            c => return Err(PieceParseError::InvalidChar(c)),
        };

        Ok(piece)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match (self.color, self.kind) {
            (Color::White, PieceKind::King) => 'K',
            (Color::White, PieceKind::Rook) => 'R',
            (Color::Black, PieceKind::King) => 'k',
            (Color::Black, PieceKind::Rook) => 'r',
        };

        write!(f, "{}", c)
    }
}

/// The eight compass directions a piece can step in. Offsets are expressed
/// in the padded grid's index space (see [`crate::core::GridIndex`]), where
/// one rank is ten cells wide.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// Every direction, the King's step set.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// The four rank/file directions, the Rook's ray set.
    pub const ORTHOGONAL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// One step in this direction, as an offset into the padded grid.
    pub const fn as_offset(self) -> i32 {
        match self {
            Direction::North => 10,
            Direction::NorthEast => 11,
            Direction::East => 1,
            Direction::SouthEast => -9,
            Direction::South => -10,
            Direction::SouthWest => -11,
            Direction::West => -1,
            Direction::NorthWest => 9,
        }
    }
}

pub fn squares() -> impl DoubleEndedIterator<Item = Square> {
    (0..64).map(Square)
}

pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
    (0..8).map(Rank)
}

pub fn files() -> impl DoubleEndedIterator<Item = File> {
    (0..8).map(File)
}

#[cfg(test)]
mod tests {
    use std::convert::TryFrom;

    use super::*;

    #[test]
    fn square_coordinate_roundtrip() {
        for square in squares() {
            let parsed: Square = square.to_string().parse().unwrap();
            assert_eq!(parsed, square);
        }
    }

    #[test]
    fn square_parse_rejects_garbage() {
        assert!("".parse::<Square>().is_err());
        assert!("e".parse::<Square>().is_err());
        assert!("e44".parse::<Square>().is_err());
        assert!("j4".parse::<Square>().is_err());
        assert!("e9".parse::<Square>().is_err());
    }

    #[test]
    fn square_index_out_of_range() {
        assert!(Square::try_from(63).is_ok());
        assert!(Square::try_from(64).is_err());
    }

    #[test]
    fn square_of_rank_and_file() {
        let e4: Square = "e4".parse().unwrap();
        assert_eq!(Square::of(RANK_4, FILE_E), e4);
        assert_eq!(e4.rank(), RANK_4);
        assert_eq!(e4.file(), FILE_E);
    }

    #[test]
    fn opposing_directions_cancel() {
        assert_eq!(
            Direction::North.as_offset() + Direction::South.as_offset(),
            0
        );
        assert_eq!(
            Direction::NorthEast.as_offset() + Direction::SouthWest.as_offset(),
            0
        );
        assert_eq!(Direction::East.as_offset() + Direction::West.as_offset(), 0);
        assert_eq!(
            Direction::NorthWest.as_offset() + Direction::SouthEast.as_offset(),
            0
        );
    }

    #[test]
    fn piece_char_roundtrip() {
        for c in ['K', 'R', 'k', 'r'] {
            let piece = Piece::try_from(c).unwrap();
            assert_eq!(piece.to_string(), c.to_string());
        }

        assert!(Piece::try_from('q').is_err());
        assert!(Piece::try_from('.').is_err());
    }
}
