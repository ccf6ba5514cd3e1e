use yesno_othello::board::{Board, Outcome, Score, Stone};
use yesno_othello::game::{Game, GameDone, PassReport, PlayError, Step, TurnStart};
use yesno_othello::oracle::{Directive, ScriptedOracle};
use yesno_othello::turn::Turn;

use crate::board::{board_test_main, cells, coord};

fn step_turn(step: Step) -> TurnStart {
    match step {
        Step::Turn(start) => start,
        Step::Pass(report) => panic!("expected a placement turn, got {:?}", report),
    }
}

fn step_pass(step: Step) -> PassReport {
    match step {
        Step::Pass(report) => report,
        Step::Turn(start) => panic!("expected a pass, got {:?}", start),
    }
}

#[test]
fn matched_turn_plays_captures() {
    let mut board = Board::standard();
    let turn = Turn::new(Stone::Yes, Directive::PlaceYes);

    assert_eq!(turn.mandated_stone(), Stone::Yes);
    assert!(!turn.is_mismatch());
    assert_eq!(turn.legal_targets(&board), cells(&["d3", "c4", "f5", "e6"]));

    let placement = turn.apply(&mut board, coord("d3"));
    assert_eq!(placement.player, Stone::Yes);
    assert_eq!(placement.stone, Stone::Yes);
    assert_eq!(placement.flipped, cells(&["d4"]));
    assert!(placement.forced.none());
    assert!(!placement.flash());
    assert_eq!(placement.converted(), 1);

    board_test_main(&board);
}

#[test]
fn mismatched_turn_changes_one_cell() {
    let board = Board::standard();
    let turn = Turn::new(Stone::Yes, Directive::PlaceNo);

    assert!(turn.is_mismatch());
    assert_eq!(turn.mandated_stone(), Stone::No);
    // every empty cell is available, even ones without any capture line
    assert_eq!(turn.legal_targets(&board), board.free_tiles());
    assert_eq!(turn.legal_targets(&board).count(), 60);

    let mut after = board.clone();
    let placement = turn.apply(&mut after, coord("a1"));
    assert_eq!(placement.stone, Stone::No);
    assert!(placement.is_mismatch());
    assert!(placement.flipped.none());
    assert!(placement.forced.none());
    assert_eq!(placement.converted(), 0);
    assert_eq!(after.score(), Score { yes: 2, no: 3 });

    let changed = board.free_tiles() & !after.free_tiles();
    assert_eq!(changed, cells(&["a1"]));

    board_test_main(&after);
}

#[test]
fn maybe_turn_converts_neighbours() {
    let mut board = Board::from_fen("8/8/8/3y4/3n4/2n1n3/8/8").unwrap();
    let turn = Turn::new(Stone::Yes, Directive::PlaceMaybe);

    assert_eq!(turn.mandated_stone(), Stone::Yes);
    assert!(!turn.is_mismatch());
    assert!(turn.legal_targets(&board).has(coord("d3")));

    let placement = turn.apply(&mut board, coord("d3"));
    assert_eq!(placement.flipped, cells(&["d4"]));
    assert_eq!(placement.forced, cells(&["c3", "e3"]));
    assert!(placement.flash());
    assert_eq!(placement.converted(), 3);
    assert_eq!(board.score(), Score { yes: 5, no: 0 });

    board_test_main(&board);
}

#[test]
fn maybe_without_neighbours_does_not_flash() {
    let mut board = Board::from_fen("8/8/8/8/8/8/8/yn6").unwrap();
    let turn = Turn::new(Stone::Yes, Directive::PlaceMaybe);

    let placement = turn.apply(&mut board, coord("c1"));
    assert_eq!(placement.flipped, cells(&["b1"]));
    assert!(placement.forced.none());
    assert!(!placement.flash());
    assert_eq!(placement.converted(), 1);

    board_test_main(&board);
}

#[test]
fn controller_first_turn() {
    let oracle = ScriptedOracle::new([Directive::PlaceYes]);
    let mut game = Game::new(oracle);

    assert_eq!(game.next_player(), Stone::Yes);
    assert!(!game.is_done());
    assert_eq!(game.pending_turn(), None);

    // playing before advancing is rejected
    assert_eq!(game.play(coord("d3")).unwrap_err(), PlayError::NoPendingTurn);

    let start = step_turn(game.advance().unwrap());
    assert_eq!(start.turn, Turn::new(Stone::Yes, Directive::PlaceYes));
    assert_eq!(start.targets, cells(&["d3", "c4", "f5", "e6"]));
    assert!(!start.fallback);
    assert!(start.gif.is_none());
    assert_eq!(game.pending_turn(), Some(start.turn));

    // an off-target placement is rejected and leaves the turn pending
    assert_eq!(game.play(coord("a1")).unwrap_err(), PlayError::UnavailableTarget);
    assert_eq!(game.pending_turn(), Some(start.turn));

    let placement = game.play(coord("d3")).unwrap();
    assert_eq!(placement.flipped, cells(&["d4"]));

    assert_eq!(game.score(), Score { yes: 4, no: 1 });
    assert_eq!(game.next_player(), Stone::No);
    assert_eq!(game.pending_turn(), None);
    assert_eq!(game.pass_streak(), 0);

    board_test_main(game.board());
}

#[test]
fn double_pass_finishes() {
    // a lonely yes stone, neither color has a capture move anywhere
    let board = Board::from_fen("8/8/8/8/8/8/8/y7").unwrap();
    let oracle = ScriptedOracle::new([Directive::PlaceYes, Directive::PlaceNo]);
    let mut game = Game::from_board(board, Stone::Yes, oracle);

    let report = step_pass(game.advance().unwrap());
    assert_eq!(
        report,
        PassReport {
            player: Stone::Yes,
            directive: Directive::PlaceYes,
            fallback: false,
            pass_streak: 1,
        }
    );
    assert!(!game.is_done());
    assert_eq!(game.next_player(), Stone::No);

    let report = step_pass(game.advance().unwrap());
    assert_eq!(report.player, Stone::No);
    assert_eq!(report.pass_streak, 2);

    // the game ends with empty cells still on the board
    assert!(game.is_done());
    assert!(!game.board().is_full());
    assert_eq!(game.outcome(), Some(Outcome::WonBy(Stone::Yes)));

    assert_eq!(game.advance().unwrap_err(), GameDone);
    assert_eq!(game.play(coord("a2")).unwrap_err(), PlayError::GameDone);
}

#[test]
fn pass_streak_resets_on_placement() {
    let board = Board::from_fen("8/8/8/8/8/8/8/y7").unwrap();
    let oracle = ScriptedOracle::new([Directive::PlaceYes, Directive::PlaceYes]);
    let mut game = Game::from_board(board, Stone::Yes, oracle);

    assert_eq!(step_pass(game.advance().unwrap()).pass_streak, 1);

    // no draws a mismatched directive, so any empty cell works and the streak clears
    let start = step_turn(game.advance().unwrap());
    assert_eq!(start.turn, Turn::new(Stone::No, Directive::PlaceYes));
    assert!(start.turn.is_mismatch());
    assert_eq!(start.targets.count(), 63);

    let placement = game.play(coord("h8")).unwrap();
    assert!(placement.is_mismatch());
    assert_eq!(placement.stone, Stone::Yes);
    assert_eq!(game.pass_streak(), 0);
    assert!(!game.is_done());
}

#[test]
fn filling_the_board_finishes() {
    let fen = "nnnnnnnn/yyyyyyyy/yyyyyyyy/yyyyyyyy/yyyyyyyy/yyyyyyyy/yyyyyyyy/1yyyyyyy";
    let board = Board::from_fen(fen).unwrap();
    let oracle = ScriptedOracle::new([Directive::PlaceNo]);
    let mut game = Game::from_board(board, Stone::Yes, oracle);

    let start = step_turn(game.advance().unwrap());
    assert_eq!(start.targets, cells(&["a1"]));

    let placement = game.play(coord("a1")).unwrap();
    assert_eq!(placement.stone, Stone::No);

    assert!(game.is_done());
    assert!(game.board().is_full());
    assert_eq!(game.score(), Score { yes: 55, no: 9 });
    assert_eq!(game.outcome(), Some(Outcome::WonBy(Stone::Yes)));
    // the turn does not change hands anymore once the game is over
    assert_eq!(game.next_player(), Stone::Yes);
}

#[test]
fn started_full_is_done() {
    let fen = "nnnnnnnn/nnnnnnnn/nnnnnnnn/nnnnnnnn/yyyyyyyy/yyyyyyyy/yyyyyyyy/yyyyyyyy";
    let board = Board::from_fen(fen).unwrap();
    let mut game = Game::from_board(board, Stone::Yes, ScriptedOracle::new([]));

    assert!(game.is_done());
    assert_eq!(game.outcome(), Some(Outcome::Draw));
    assert_eq!(game.advance().unwrap_err(), GameDone);
}

#[test]
fn alternating_script_terminates() {
    // an endless alternating script, the game must finish on its own
    let script = [Directive::PlaceYes, Directive::PlaceNo].into_iter().cycle().take(400);
    let mut game = Game::new(ScriptedOracle::new(script));

    for _ in 0..400 {
        if game.is_done() {
            break;
        }
        match game.advance().unwrap() {
            Step::Pass(_) => {}
            Step::Turn(start) => {
                let target = start.targets.into_iter().next().unwrap();
                game.play(target).unwrap();
            }
        }
    }

    assert!(game.is_done());
    board_test_main(game.board());
}

#[test]
#[should_panic(expected = "awaiting a placement")]
fn advance_with_pending_turn_panics() {
    let oracle = ScriptedOracle::new([Directive::PlaceYes, Directive::PlaceYes]);
    let mut game = Game::new(oracle);

    let _ = game.advance().unwrap();
    let _ = game.advance().unwrap();
}
