use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use itertools::Itertools;
use rand::Rng;

use crate::ai::Strategy;
use crate::board::{Outcome, Stone};
use crate::game::{Game, GameDone, PlayError, Step, TurnStart};
use crate::interface::console::command::Command;
use crate::oracle::{Directive, Gif, Oracle};
use crate::turn::Placement;

/// How the console session is set up.
#[derive(Debug)]
pub struct Settings {
    /// Strategy playing the `No` side, `None` for two human players.
    pub no_strategy: Option<Box<dyn Strategy>>,
    /// Sleep a random 0.5..3.0s before each strategy placement.
    pub pace_ai: bool,
}

/// Drive `game` to its end over `input`/`output`.
///
/// Returns the outcome, or `None` when the session stopped early (quit command or eof).
pub fn run(
    game: &mut Game<impl Oracle>,
    settings: Settings,
    input: impl Read,
    output: impl Write,
) -> std::io::Result<Option<Outcome>> {
    let result = run_inner(game, settings, input, output);

    if let Err(err) = &result {
        if err.kind() == ErrorKind::BrokenPipe {
            return Ok(None);
        }
    }

    result
}

fn run_inner(
    game: &mut Game<impl Oracle>,
    mut settings: Settings,
    input: impl Read,
    output: impl Write,
) -> std::io::Result<Option<Outcome>> {
    let mut input = BufReader::new(input);
    let mut output = BufWriter::new(output);

    writeln!(output, "Game start")?;
    write!(output, "{}", game.board())?;

    let mut line = String::new();
    let mut gif_index = 0u32;

    while !game.is_done() {
        output.flush()?;

        let step = match game.advance() {
            Ok(step) => step,
            Err(GameDone) => break,
        };

        match step {
            Step::Pass(report) => {
                writeln!(output, "{} must pass", report.player)?;
            }
            Step::Turn(start) => {
                announce_turn(&mut output, &start)?;

                if let Some(gif) = &start.gif {
                    gif_index += 1;
                    match save_gif(gif, gif_index) {
                        Ok(path) => writeln!(output, "oracle gif saved to {}", path.display())?,
                        Err(e) => writeln!(output, "failed to save gif: {}", e)?,
                    }
                }

                let placement = match (&mut settings.no_strategy, start.turn.player) {
                    (Some(strategy), Stone::No) => {
                        writeln!(output, "AI is thinking...")?;
                        output.flush()?;
                        if settings.pace_ai {
                            let delay = rand::thread_rng().gen_range(0.5f32..3.0);
                            thread::sleep(Duration::from_secs_f32(delay));
                        }

                        let target = strategy.select(game.board(), start.turn);
                        match game.play(target) {
                            Ok(placement) => placement,
                            Err(e) => {
                                writeln!(output, "strategy picked an unplayable cell: {}", e)?;
                                return Ok(None);
                            }
                        }
                    }
                    _ => match prompt_human(game, &start, &mut input, &mut output, &mut line)? {
                        Some(placement) => placement,
                        None => return Ok(None),
                    },
                };

                report_placement(&mut output, &placement)?;
                write!(output, "{}", game.board())?;
            }
        }
    }

    if game.board().is_full() {
        writeln!(output, "Board is full")?;
    }
    if let Some(outcome) = game.outcome() {
        writeln!(output, "{}", winner_line(outcome))?;
    }
    output.flush()?;

    Ok(game.outcome())
}

fn announce_turn(output: &mut impl Write, start: &TurnStart) -> std::io::Result<()> {
    if start.fallback {
        writeln!(output, "Random stone ready")?;
    } else {
        match start.turn.directive {
            Directive::PlaceYes => writeln!(output, "YES stone ready")?,
            Directive::PlaceNo => writeln!(output, "NO stone ready")?,
            Directive::PlaceMaybe => writeln!(output, "MAYBE! Flipping surrounding stones")?,
        }
    }
    writeln!(output, "{} to place a {} stone", start.turn.player, start.turn.mandated_stone())?;
    Ok(())
}

fn prompt_human<O: Oracle>(
    game: &mut Game<O>,
    start: &TurnStart,
    input: &mut impl BufRead,
    output: &mut impl Write,
    line: &mut String,
) -> std::io::Result<Option<Placement>> {
    loop {
        write!(output, "> ")?;
        output.flush()?;

        line.clear();
        if input.read_line(line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim();

        let command = match Command::parse(trimmed) {
            Ok(command) => command,
            Err(_) => {
                writeln!(output, "could not read '{}', try 'help'", trimmed)?;
                continue;
            }
        };

        match command {
            Command::Place(target) => match game.play(target) {
                Ok(placement) => return Ok(Some(placement)),
                Err(PlayError::UnavailableTarget) => {
                    writeln!(output, "{} is not available, 'moves' lists the options", target)?;
                }
                Err(e) => {
                    writeln!(output, "cannot place: {}", e)?;
                }
            },
            Command::Moves => {
                let list = start.targets.into_iter().map(|c| c.to_string()).join(" ");
                writeln!(output, "available: {}", list)?;
            }
            Command::Print => write!(output, "{}", game.board())?,
            Command::Help => print_help(output)?,
            Command::Quit => return Ok(None),
        }
    }
}

fn report_placement(output: &mut impl Write, placement: &Placement) -> std::io::Result<()> {
    if placement.is_mismatch() {
        writeln!(
            output,
            "{} placed {}, but nothing flipped",
            placement.player, placement.stone
        )?;
    } else {
        writeln!(output, "{} placed {}", placement.player, placement.stone)?;
    }
    if placement.flash() {
        writeln!(output, "maybe converted {} adjacent stones", placement.forced.count())?;
    }
    Ok(())
}

fn print_help(output: &mut impl Write) -> std::io::Result<()> {
    writeln!(output, "commands:")?;
    writeln!(output, "  <cell>  place on a cell, eg. d3")?;
    writeln!(output, "  moves   list the cells available this turn")?;
    writeln!(output, "  print   show the board again")?;
    writeln!(output, "  help    this overview")?;
    writeln!(output, "  quit    stop the game")?;
    Ok(())
}

fn winner_line(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::WonBy(Stone::Yes) => "Yes player wins!",
        Outcome::WonBy(Stone::No) => "No player wins!",
        Outcome::Draw => "Draw!",
    }
}

fn save_gif(gif: &Gif, index: u32) -> std::io::Result<PathBuf> {
    let path = std::env::temp_dir().join(format!("yesno-othello-{}.gif", index));
    std::fs::write(&path, &gif.data)?;
    Ok(path)
}
