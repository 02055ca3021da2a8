// Copyright 2022 The boardkit developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::{fmt, ops};

use crate::core::{self, Square};

/// A set of squares on the chessboard, backed by one bit per playable
/// square. The engine uses it to hold the highlight mask: the candidate
/// destinations of the currently selected piece.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SquareSet(u64);

impl SquareSet {
    /// Creates a new, empty SquareSet.
    pub const fn empty() -> SquareSet {
        SquareSet(0)
    }

    /// Tests whether or not the given square is contained within this SquareSet.
    pub const fn contains(&self, square: Square) -> bool {
        self.0 & (1u64 << square.0) != 0
    }

    pub fn insert(&mut self, square: Square) {
        self.0 |= 1u64 << square.0;
    }

    pub fn remove(&mut self, square: Square) {
        self.0 &= !(1u64 << square.0);
    }

    pub const fn len(&self) -> u32 {
        self.0.count_ones()
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub const fn or(self, other: SquareSet) -> SquareSet {
        SquareSet(self.0 | other.0)
    }

    pub const fn and(self, other: SquareSet) -> SquareSet {
        SquareSet(self.0 & other.0)
    }
}

impl ops::BitOr for SquareSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.or(rhs)
    }
}

impl ops::BitAnd for SquareSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.and(rhs)
    }
}

impl FromIterator<Square> for SquareSet {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> SquareSet {
        let mut set = SquareSet::empty();
        for square in iter {
            set.insert(square);
        }

        set
    }
}

impl IntoIterator for SquareSet {
    type Item = Square;
    type IntoIter = SquareSetIterator;

    fn into_iter(self) -> Self::IntoIter {
        SquareSetIterator(self.0)
    }
}

impl fmt::Display for SquareSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in core::ranks().rev() {
            for file in core::files() {
                let sq = Square::of(rank, file);
                if self.contains(sq) {
                    write!(f, " * ")?;
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

/// An iterator over squares stored in a [`SquareSet`], in ascending square
/// order.
pub struct SquareSetIterator(u64);

impl Iterator for SquareSetIterator {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            None
        } else {
            let next = self.0.trailing_zeros() as u8;
            self.0 &= self.0 - 1;
            Some(Square(next))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SquareSet;
    use crate::core::Square;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn insert_contains_remove() {
        let mut set = SquareSet::empty();
        assert!(!set.contains(sq("a1")));
        set.insert(sq("a1"));
        assert!(set.contains(sq("a1")));
        set.remove(sq("a1"));
        assert!(!set.contains(sq("a1")));
    }

    #[test]
    fn count() {
        let set: SquareSet = [sq("a3"), sq("a4"), sq("a5")].into_iter().collect();
        assert_eq!(set.len(), 3);
        assert!(!set.is_empty());
        assert!(SquareSet::empty().is_empty());
    }

    #[test]
    fn iterates_in_square_order() {
        let set: SquareSet = [sq("h8"), sq("a4"), sq("c1")].into_iter().collect();
        let squares: Vec<_> = set.into_iter().collect();
        assert_eq!(squares, vec![sq("c1"), sq("a4"), sq("h8")]);
    }

    #[test]
    fn union_and_intersection() {
        let left: SquareSet = [sq("a1"), sq("b2")].into_iter().collect();
        let right: SquareSet = [sq("b2"), sq("c3")].into_iter().collect();
        assert_eq!((left | right).len(), 3);
        let both = left & right;
        assert_eq!(both.len(), 1);
        assert!(both.contains(sq("b2")));
    }
}
