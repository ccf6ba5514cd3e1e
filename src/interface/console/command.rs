use crate::util::coord::Coord;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Command {
    /// Place on the given cell, written like `d3`.
    Place(Coord),
    /// List the cells available this turn.
    Moves,
    /// Show the board again.
    Print,
    Help,
    Quit,
}

impl Command {
    pub fn parse(input: &str) -> Result<Command, nom::Err<nom::error::Error<&str>>> {
        parse::command()(input).map(|(left, command)| {
            assert!(left.is_empty());
            command
        })
    }
}

mod parse {
    use nom::branch::alt;
    use nom::bytes::complete::tag;
    use nom::character::complete::one_of;
    use nom::combinator::{eof, map, value};
    use nom::sequence::{terminated, tuple};
    use nom::IResult;

    use super::*;

    pub fn command<'a>() -> impl FnMut(&'a str) -> IResult<&'a str, Command> {
        // a cell must come before the single-letter aliases, "d3" is a placement, "d" a print
        let place = map(
            tuple((one_of("abcdefghABCDEFGH"), one_of("12345678"))),
            |(file, rank): (char, char)| {
                let x = file.to_ascii_lowercase() as u8 - b'a';
                let y = rank as u8 - b'1';
                Command::Place(Coord::from_xy(x, y))
            },
        );

        let main = alt((
            place,
            value(Command::Quit, alt((tag("quit"), tag("exit"), tag("q")))),
            value(Command::Print, alt((tag("print"), tag("board"), tag("d")))),
            value(Command::Moves, tag("moves")),
            value(Command::Help, alt((tag("help"), tag("?")))),
        ));

        terminated(main, eof)
    }
}
