//! The 8x8 board and the capture rules.
//!
//! The two stone colors are named after the oracle vocabulary: [Stone::Yes] is the dark
//! stone that moves first, [Stone::No] the light one. The board itself does not know whose
//! turn it is, that is the job of [crate::game::Game].

use std::cmp::Ordering;
use std::fmt::{Debug, Display, Formatter, Write};

use itertools::Itertools;

use crate::util::bitboard::BitBoard8;
use crate::util::coord::Coord;

/// One of the two stone colors.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Stone {
    Yes,
    No,
}

impl Stone {
    pub const BOTH: [Stone; 2] = [Stone::Yes, Stone::No];

    pub fn other(self) -> Stone {
        match self {
            Stone::Yes => Stone::No,
            Stone::No => Stone::Yes,
        }
    }

    pub fn index(self) -> u8 {
        match self {
            Stone::Yes => 0,
            Stone::No => 1,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Stone::Yes => 'y',
            Stone::No => 'n',
        }
    }

    pub fn from_char(c: char) -> Option<Stone> {
        match c {
            'y' => Some(Stone::Yes),
            'n' => Some(Stone::No),
            _ => None,
        }
    }
}

impl Display for Stone {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Stone::Yes => write!(f, "YES"),
            Stone::No => write!(f, "NO"),
        }
    }
}

/// The stone counts at some point in the game.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Score {
    pub yes: u8,
    pub no: u8,
}

impl Score {
    pub fn outcome(self) -> Outcome {
        match self.yes.cmp(&self.no) {
            Ordering::Greater => Outcome::WonBy(Stone::Yes),
            Ordering::Less => Outcome::WonBy(Stone::No),
            Ordering::Equal => Outcome::Draw,
        }
    }
}

/// The final result of a game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Outcome {
    WonBy(Stone),
    Draw,
}

/// One of the 8 directions a capture line can run in.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    /// Shift every cell of `board` one step in this direction, dropping cells that fall off.
    pub fn shift(self, board: BitBoard8) -> BitBoard8 {
        match self {
            Direction::Up => board.up(),
            Direction::Down => board.down(),
            Direction::Left => board.left(),
            Direction::Right => board.right(),
            Direction::UpLeft => board.up().left(),
            Direction::UpRight => board.up().right(),
            Direction::DownLeft => board.down().left(),
            Direction::DownRight => board.down().right(),
        }
    }
}

/// The board state: two disjoint bitboards, one per stone color.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Board {
    yes: BitBoard8,
    no: BitBoard8,
}

impl Default for Board {
    fn default() -> Self {
        Board::standard()
    }
}

impl Board {
    /// The standard Othello opening: `Yes` on d5 and e4, `No` on d4 and e5.
    pub fn standard() -> Board {
        Board {
            yes: BitBoard8::coord(Coord::from_xy(3, 4)) | BitBoard8::coord(Coord::from_xy(4, 3)),
            no: BitBoard8::coord(Coord::from_xy(3, 3)) | BitBoard8::coord(Coord::from_xy(4, 4)),
        }
    }

    pub fn empty() -> Board {
        Board {
            yes: BitBoard8::EMPTY,
            no: BitBoard8::EMPTY,
        }
    }

    pub fn tiles(&self, stone: Stone) -> BitBoard8 {
        match stone {
            Stone::Yes => self.yes,
            Stone::No => self.no,
        }
    }

    fn tiles_mut(&mut self, stone: Stone) -> &mut BitBoard8 {
        match stone {
            Stone::Yes => &mut self.yes,
            Stone::No => &mut self.no,
        }
    }

    pub fn tile(&self, coord: Coord) -> Option<Stone> {
        if self.yes.has(coord) {
            return Some(Stone::Yes);
        }
        if self.no.has(coord) {
            return Some(Stone::No);
        }
        None
    }

    pub fn free_tiles(&self) -> BitBoard8 {
        !(self.yes | self.no)
    }

    pub fn is_full(&self) -> bool {
        self.free_tiles().none()
    }

    pub fn count(&self, stone: Stone) -> u8 {
        self.tiles(stone).count()
    }

    pub fn score(&self) -> Score {
        Score {
            yes: self.yes.count(),
            no: self.no.count(),
        }
    }

    /// The cells where `stone` has at least one capture line, ie. the ordinary Othello moves.
    pub fn legal_moves(&self, stone: Stone) -> BitBoard8 {
        let own = self.tiles(stone);
        let opp = self.tiles(stone.other());

        let mut moves = BitBoard8::EMPTY;
        for dir in Direction::ALL {
            // flood own stones through the adjacent opponent run, then step once more
            let mut flood = dir.shift(own) & opp;
            for _ in 0..5 {
                flood |= dir.shift(flood) & opp;
            }
            moves |= dir.shift(flood);
        }

        moves & self.free_tiles()
    }

    /// All opponent stones that placing `stone` at `coord` would capture:
    /// for each direction, the unbroken opponent run terminated by an own stone.
    pub fn captures(&self, coord: Coord, stone: Stone) -> BitBoard8 {
        debug_assert!(self.tile(coord).is_none());

        let own = self.tiles(stone);
        let opp = self.tiles(stone.other());

        let mut result = BitBoard8::EMPTY;
        for dir in Direction::ALL {
            let mut line = BitBoard8::EMPTY;
            let mut cursor = dir.shift(BitBoard8::coord(coord));

            while (cursor & opp).any() {
                line |= cursor;
                cursor = dir.shift(cursor);
            }
            if (cursor & own).any() {
                result |= line;
            }
        }
        result
    }

    /// Put `stone` on the empty cell `coord`. With `flip` set the capture lines are
    /// converted as well, otherwise only the single cell changes. Returns the converted set.
    pub fn place(&mut self, coord: Coord, stone: Stone, flip: bool) -> BitBoard8 {
        debug_assert!(self.tile(coord).is_none());

        let flipped = if flip { self.captures(coord, stone) } else { BitBoard8::EMPTY };

        *self.tiles_mut(stone) |= flipped | BitBoard8::coord(coord);
        *self.tiles_mut(stone.other()) &= !flipped;

        self.assert_valid();
        flipped
    }

    /// Convert every opponent stone directly adjacent to `coord` to `stone`,
    /// with no line or termination requirement. Returns the converted set.
    pub fn flip_adjacent(&mut self, coord: Coord, stone: Stone) -> BitBoard8 {
        let flipped = self.tiles(stone.other()) & BitBoard8::coord(coord).adjacent();

        *self.tiles_mut(stone) |= flipped;
        *self.tiles_mut(stone.other()) &= !flipped;

        self.assert_valid();
        flipped
    }

    pub fn assert_valid(&self) {
        assert!((self.yes & self.no).none());
    }
}

#[derive(Debug, Clone)]
pub struct InvalidFen {
    pub fen: String,
    pub reason: &'static str,
}

impl Display for InvalidFen {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid fen '{}': {}", self.fen, self.reason)
    }
}

impl std::error::Error for InvalidFen {}

impl Board {
    /// Parse a board from its single-line notation: 8 rows from rank 8 down to rank 1,
    /// separated by `/`, with `y`/`n` stones and digits for runs of empty cells.
    /// The standard opening is `8/8/8/3yn3/3ny3/8/8/8`.
    pub fn from_fen(fen: &str) -> Result<Board, InvalidFen> {
        let err = |reason| InvalidFen {
            fen: fen.into(),
            reason,
        };

        let rows = fen.split('/').collect_vec();
        if rows.len() != 8 {
            return Err(err("expected 8 rows"));
        }

        let mut board = Board::empty();
        for (i, &line) in rows.iter().enumerate() {
            let y = 7 - i as u8;
            let mut x: u8 = 0;

            for c in line.chars() {
                if x >= 8 {
                    return Err(err("too many columns in row"));
                }

                if let Some(d) = c.to_digit(10) {
                    x += d as u8;
                    continue;
                }

                match Stone::from_char(c) {
                    Some(stone) => {
                        *board.tiles_mut(stone) |= BitBoard8::coord(Coord::from_xy(x, y));
                    }
                    None => return Err(err("invalid character in row")),
                }

                x += 1;
            }

            if x != 8 {
                return Err(err("row does not cover 8 columns"));
            }
        }

        board.assert_valid();
        Ok(board)
    }

    pub fn to_fen(&self) -> String {
        let mut s = String::new();

        for y in (0..8).rev() {
            if y != 7 {
                write!(&mut s, "/").unwrap();
            }

            let mut empty_count = 0;
            for x in 0..8 {
                let coord = Coord::from_xy(x, y);

                match self.tile(coord) {
                    None => empty_count += 1,
                    Some(stone) => {
                        if empty_count != 0 {
                            write!(&mut s, "{}", empty_count).unwrap();
                            empty_count = 0;
                        }
                        write!(&mut s, "{}", stone.to_char()).unwrap();
                    }
                }
            }
            if empty_count != 0 {
                write!(&mut s, "{}", empty_count).unwrap();
            }
        }

        s
    }
}

impl Debug for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Board(\"{}\")", self.to_fen())
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "FEN: {}", self.to_fen())?;

        for y in (0..8).rev() {
            write!(f, "{} ", y + 1)?;

            for x in 0..8 {
                let c = match self.tile(Coord::from_xy(x, y)) {
                    Some(stone) => stone.to_char(),
                    None => '.',
                };
                write!(f, "{}", c)?;
            }

            if y == 3 {
                let score = self.score();
                write!(f, "    y {}  n {}", score.yes, score.no)?;
            }
            writeln!(f)?;
        }

        write!(f, "  ")?;
        for x in 0..8 {
            write!(f, "{}", (b'a' + x) as char)?;
        }
        writeln!(f)?;

        Ok(())
    }
}
