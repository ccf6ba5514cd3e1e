use std::fmt::{Display, Formatter};

use crate::util::bits::{get_nth_set_bit, BitIter};
use crate::util::coord::Coord;

/// A set of cells of the 8x8 board, one bit per [Coord] index.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct BitBoard8(u64);

impl BitBoard8 {
    pub const EMPTY: BitBoard8 = BitBoard8(0);
    pub const FULL: BitBoard8 = BitBoard8(!0);

    #[must_use]
    pub const fn new(bits: u64) -> BitBoard8 {
        BitBoard8(bits)
    }

    #[must_use]
    pub const fn coord(coord: Coord) -> BitBoard8 {
        BitBoard8(1 << coord.index())
    }

    #[must_use]
    pub const fn bits(self) -> u64 {
        self.0
    }

    #[must_use]
    pub const fn has(self, coord: Coord) -> bool {
        (self.0 >> coord.index()) & 1 != 0
    }

    #[must_use]
    pub const fn none(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn any(self) -> bool {
        self.0 != 0
    }

    #[must_use]
    pub const fn count(self) -> u8 {
        self.0.count_ones() as u8
    }

    #[must_use]
    pub fn get_nth(self, index: u32) -> Coord {
        Coord::from_index(get_nth_set_bit(self.0, index))
    }

    #[must_use]
    pub const fn set(self, coord: Coord) -> Self {
        BitBoard8(self.0 | (1 << coord.index()))
    }

    #[must_use]
    pub const fn clear(self, coord: Coord) -> Self {
        BitBoard8(self.0 & !(1 << coord.index()))
    }

    pub const fn left(self) -> Self {
        BitBoard8((self.0 >> 1) & 0x7f7f7f7f7f7f7f7f)
    }

    pub const fn right(self) -> Self {
        BitBoard8((self.0 << 1) & 0xfefefefefefefefe)
    }

    pub const fn down(self) -> Self {
        BitBoard8((self.0 >> 8) & 0x00ffffffffffffff)
    }

    pub const fn up(self) -> Self {
        BitBoard8((self.0 << 8) & 0xffffffffffffff00)
    }

    pub const fn orthogonal(self) -> Self {
        BitBoard8(self.left().0 | self.right().0 | self.up().0 | self.down().0)
    }

    pub const fn diagonal(self) -> Self {
        BitBoard8(self.left().up().0 | self.right().up().0 | self.left().down().0 | self.right().down().0)
    }

    pub const fn adjacent(self) -> Self {
        BitBoard8(self.orthogonal().0 | self.diagonal().0)
    }
}

impl IntoIterator for BitBoard8 {
    type Item = Coord;
    type IntoIter = std::iter::Map<BitIter<u64>, fn(u8) -> Coord>;

    fn into_iter(self) -> Self::IntoIter {
        BitIter::new(self.0).map(|i| Coord::from_index(i))
    }
}

impl Display for BitBoard8 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for y in (0..8).rev() {
            for x in 0..8 {
                let coord = Coord::from_xy(x, y);
                write!(f, "{}", if self.has(coord) { '1' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

mod operations {
    use super::*;

    impl std::ops::BitOr for BitBoard8 {
        type Output = BitBoard8;

        fn bitor(self, rhs: Self) -> Self::Output {
            BitBoard8(self.0 | rhs.0)
        }
    }

    impl std::ops::BitAnd for BitBoard8 {
        type Output = BitBoard8;

        fn bitand(self, rhs: Self) -> Self::Output {
            BitBoard8(self.0 & rhs.0)
        }
    }

    impl std::ops::BitXor for BitBoard8 {
        type Output = BitBoard8;

        fn bitxor(self, rhs: Self) -> Self::Output {
            BitBoard8(self.0 ^ rhs.0)
        }
    }

    impl std::ops::Not for BitBoard8 {
        type Output = BitBoard8;

        fn not(self) -> Self::Output {
            BitBoard8(!self.0)
        }
    }

    impl std::ops::BitOrAssign for BitBoard8 {
        fn bitor_assign(&mut self, rhs: Self) {
            self.0 |= rhs.0
        }
    }

    impl std::ops::BitAndAssign for BitBoard8 {
        fn bitand_assign(&mut self, rhs: Self) {
            self.0 &= rhs.0
        }
    }

    impl std::ops::BitXorAssign for BitBoard8 {
        fn bitxor_assign(&mut self, rhs: Self) {
            self.0 ^= rhs.0
        }
    }
}
