use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A cell of the 8x8 board, stored as `x + 8 * y`.
///
/// `x` is the file (`a`..`h` from the left), `y` is the rank (`1`..`8` from the bottom).
/// Displays and parses in algebraic form, eg. `d3`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Coord {
    index: u8,
}

pub type CoordAllIter = std::iter::Map<std::ops::Range<u8>, fn(u8) -> Coord>;

impl Coord {
    pub const fn from_index(index: u8) -> Self {
        assert!(index < 64);
        Coord { index }
    }

    pub const fn from_xy(x: u8, y: u8) -> Self {
        assert!(x < 8);
        assert!(y < 8);
        Coord { index: x + 8 * y }
    }

    pub fn all() -> CoordAllIter {
        (0..64).map(|index| Coord::from_index(index))
    }

    pub const fn index(self) -> u8 {
        self.index
    }

    pub const fn x(self) -> u8 {
        self.index % 8
    }

    pub const fn y(self) -> u8 {
        self.index / 8
    }
}

impl Display for Coord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", (b'a' + self.x()) as char, self.y() + 1)
    }
}

#[derive(Debug, Eq, PartialEq)]
pub struct InvalidCoord(pub String);

impl Display for InvalidCoord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid coordinate '{}'", self.0)
    }
}

impl std::error::Error for InvalidCoord {}

impl FromStr for Coord {
    type Err = InvalidCoord;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || InvalidCoord(s.to_owned());

        let mut chars = s.chars();
        let file = chars.next().ok_or_else(err)?.to_ascii_lowercase();
        let rank = chars.next().ok_or_else(err)?;
        if chars.next().is_some() {
            return Err(err());
        }

        if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
            return Err(err());
        }

        Ok(Coord::from_xy(file as u8 - b'a', rank as u8 - b'1'))
    }
}
