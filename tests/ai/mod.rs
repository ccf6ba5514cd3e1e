use std::cell::Cell;

use rand::SeedableRng;
use rand_xoshiro::Xoroshiro64StarStar;

use yesno_othello::ai::simple::{GreedyStrategy, RandomStrategy};
use yesno_othello::ai::Strategy;
use yesno_othello::board::{Board, Stone};
use yesno_othello::oracle::{Directive, RandomOracle};
use yesno_othello::turn::Turn;
use yesno_othello::util::bot_game;
use yesno_othello::util::coord::Coord;
use yesno_othello::util::tiny::consistent_rng;

use crate::board::{cells, coord};
use crate::util::test_sampler_uniform;

#[test]
fn random_is_uniform() {
    let board = Board::standard();

    let turn = Turn::new(Stone::Yes, Directive::PlaceYes);
    let expected: Vec<Coord> = turn.legal_targets(&board).into_iter().collect();
    let mut strategy = RandomStrategy::new(consistent_rng());
    test_sampler_uniform(&expected, || strategy.select(&board, turn));

    // on a mismatch the choice is uniform over all empty cells
    let turn = Turn::new(Stone::Yes, Directive::PlaceNo);
    let expected: Vec<Coord> = board.free_tiles().into_iter().collect();
    let mut strategy = RandomStrategy::new(consistent_rng());
    test_sampler_uniform(&expected, || strategy.select(&board, turn));
}

#[test]
fn greedy_prefers_larger_capture() {
    // d1 flips two stones, c3 only one
    let board = Board::from_fen("8/8/8/8/8/yn6/8/ynn5").unwrap();
    let turn = Turn::new(Stone::Yes, Directive::PlaceYes);
    assert_eq!(turn.legal_targets(&board), cells(&["c3", "d1"]));

    let mut greedy = GreedyStrategy;
    assert_eq!(greedy.select(&board, turn), coord("d1"));
}

#[test]
fn greedy_ties_take_first_cell() {
    // all four openers flip exactly one stone, the lowest cell index wins
    let board = Board::standard();
    let mut greedy = GreedyStrategy;

    let turn = Turn::new(Stone::Yes, Directive::PlaceYes);
    assert_eq!(greedy.select(&board, turn), coord("d3"));

    // on a mismatch every placement scores the same, so the first empty cell wins
    let turn = Turn::new(Stone::Yes, Directive::PlaceNo);
    assert_eq!(greedy.select(&board, turn), coord("a1"));
}

#[test]
fn greedy_counts_adjacent_conversions() {
    // c1 comes first in cell order and captures one stone, but d3 additionally
    // force-flips two neighbours, so it must win the comparison
    let board = Board::from_fen("8/8/8/3y4/3n4/2n1n3/8/yn6").unwrap();
    let turn = Turn::new(Stone::Yes, Directive::PlaceMaybe);
    assert_eq!(turn.legal_targets(&board), cells(&["c1", "d3"]));

    let mut greedy = GreedyStrategy;
    assert_eq!(greedy.select(&board, turn), coord("d3"));
}

#[test]
fn functions_are_strategies() {
    fn first_target(board: &Board, turn: Turn) -> Coord {
        turn.legal_targets(board).into_iter().next().unwrap()
    }

    let mut strategy: fn(&Board, Turn) -> Coord = first_target;
    let turn = Turn::new(Stone::Yes, Directive::PlaceYes);
    assert_eq!(strategy.select(&Board::standard(), turn), coord("d3"));
}

#[test]
fn match_runner_reports() {
    let calls = Cell::new(0u32);

    let result = bot_game::run(
        |i| RandomOracle::new(Xoroshiro64StarStar::seed_from_u64(100 + i as u64)),
        || RandomStrategy::new(consistent_rng()),
        || GreedyStrategy,
        8,
        |stats, replay| {
            calls.set(calls.get() + 1);
            assert_eq!(stats.games, calls.get());
            assert_eq!(replay.outcome, replay.score.outcome());
        },
    );

    assert_eq!(calls.get(), 8);
    assert_eq!(result.stats.games, 8);
    assert_eq!(result.stats.wins_yes + result.stats.wins_no + result.stats.draws, 8);
    assert_eq!(result.replays.len(), 8);
    assert_eq!(result.debug_yes, "RandomStrategy");
    assert_eq!(result.debug_no, "GreedyStrategy");

    for replay in &result.replays {
        // each placement puts exactly one new stone on the board
        assert_eq!(
            replay.score.yes as usize + replay.score.no as usize,
            4 + replay.placements.len()
        );
    }
}
