//! Gameplay integration tests: opening sequence, end-game fixtures, and
//! turn-control errors through the public API.

use std::collections::BTreeSet;

use othello_search::{Action, Board, Conclusion, Game, OthelloError, Player, State};

fn actions(names: &[&str]) -> BTreeSet<Action> {
    names.iter().map(|name| name.parse().unwrap()).collect()
}

fn legal(state: &State, player: Player) -> BTreeSet<Action> {
    state.legal_actions(player).collect()
}

fn state_from(rows: [&str; 8]) -> State {
    State::new(Board::from_rows(rows).unwrap())
}

// =============================================================================
// Opening
// =============================================================================

#[test]
fn test_opening_sequence() {
    let mut game = Game::new();

    assert_eq!(
        game.state().board().rows(),
        ["........", "........", "........", "...OX...", "...XO...", "........", "........", "........"]
    );
    assert_eq!(legal(game.state(), Player::Dark), actions(&["d3", "c4", "f5", "e6"]));

    game.play(Player::Dark, Some("d3".parse().unwrap())).unwrap();
    assert_eq!(
        game.state().board().rows(),
        ["........", "........", "...X....", "...XX...", "...XO...", "........", "........", "........"]
    );
    assert_eq!(legal(game.state(), Player::Light), actions(&["c3", "e3", "c5"]));

    game.play(Player::Light, Some("c5".parse().unwrap())).unwrap();
    assert_eq!(
        game.state().board().rows(),
        ["........", "........", "...X....", "...XX...", "..OOO...", "........", "........", "........"]
    );
    assert_eq!(game.move_count(), 2);
    assert_eq!(game.history()[0].to_string(), "Dark plays d3");
    assert_eq!(game.history()[1].to_string(), "Light plays c5");
}

#[test]
fn test_coordinates_case_insensitive() {
    let mut game = Game::new();
    game.play(Player::Dark, Some("F5".parse().unwrap())).unwrap();

    assert_eq!(game.history()[0].action.unwrap().to_string(), "f5");
}

// =============================================================================
// End-game fixtures
// =============================================================================

fn assert_concluded(state: &State, expected: Conclusion) {
    assert!(legal(state, Player::Dark).is_empty());
    assert!(legal(state, Player::Light).is_empty());
    assert!(state.is_terminal());
    assert_eq!(Game::from_state(*state, Player::Dark).conclusion(), Some(expected));
}

#[test]
fn test_endgame_light_surrounds() {
    let state = state_from([
        "OOOOOOOO",
        "OOOOOOOO",
        "OOOOOOOO",
        "OOOOOOO.",
        "OOOOOO..",
        "OOOOOO.X",
        "OOOOOOO.",
        "OOOOOOOO",
    ]);
    assert_concluded(&state, Conclusion::Winner(Player::Light));
}

#[test]
fn test_endgame_dark_border() {
    let state = state_from([
        ".XXXXXXX",
        ".OOOOO.X",
        "OOOOOOOX",
        "OOOOOOOX",
        "OOOOOOOX",
        "OOOOOOOX",
        "OOOOOOOX",
        ".OOOOOO.",
    ]);
    assert_concluded(&state, Conclusion::Winner(Player::Light));
}

#[test]
fn test_endgame_open_board() {
    let state = state_from([
        "....O...",
        "....OO..",
        "OOOOOOOX",
        "..OOOO.X",
        "..OOO..X",
        "........",
        "........",
        "........",
    ]);
    assert_concluded(&state, Conclusion::Winner(Player::Light));
}

#[test]
fn test_full_board_draw() {
    let state = state_from([
        "XXXXXXXX",
        "XXXXXXXX",
        "XXXXXXXX",
        "XXXXXXXX",
        "OOOOOOOO",
        "OOOOOOOO",
        "OOOOOOOO",
        "OOOOOOOO",
    ]);
    assert_eq!(state.piece_difference(), 0);
    assert_concluded(&state, Conclusion::Draw);
}

#[test]
fn test_full_board_winner() {
    let state = state_from([
        "XXXXXXXX",
        "XXXXXXXX",
        "XXXXXXXX",
        "XXXXXXXX",
        "XOOOOOOO",
        "OOOOOOOO",
        "OOOOOOOO",
        "OOOOOOOO",
    ]);
    assert_eq!(state.piece_difference(), 2);
    assert_concluded(&state, Conclusion::Winner(Player::Dark));
}

#[test]
fn test_blocked_board_draw() {
    // Open squares remain but neither side can bracket anything.
    let state = state_from([
        "XX......",
        "........",
        "........",
        "........",
        "........",
        "........",
        "........",
        "......OO",
    ]);
    assert_concluded(&state, Conclusion::Draw);
}

// =============================================================================
// Turn control
// =============================================================================

#[test]
fn test_turn_errors() {
    let mut game = Game::new();

    assert_eq!(
        game.play(Player::Light, Some("e3".parse().unwrap())),
        Err(OthelloError::OutOfTurn { player: Player::Light, expected: Player::Dark })
    );
    assert_eq!(game.play(Player::Dark, None), Err(OthelloError::IllegalSkip(Player::Dark)));
    assert!(matches!(
        game.play(Player::Dark, Some("e3".parse().unwrap())),
        Err(OthelloError::IllegalAction { .. })
    ));
    assert_eq!(game.move_count(), 0);
}

#[test]
fn test_double_skip_ends_game() {
    // Neither side can move from here, so both must skip.
    let state = state_from([
        "XX......",
        "........",
        "........",
        "........",
        "........",
        "........",
        "........",
        "......OO",
    ]);
    let mut game = Game::from_state(state, Player::Light);

    game.play(Player::Light, None).unwrap();
    game.play(Player::Dark, None).unwrap();

    assert_eq!(game.move_count(), 2);
    assert_eq!(game.next_player(), Player::Light);
    assert_eq!(game.conclusion(), Some(Conclusion::Draw));
}

#[test]
fn test_malformed_inputs_rejected() {
    assert!(matches!("i1".parse::<Action>(), Err(OthelloError::InvalidCoordinate(_))));
    assert!(matches!("a9".parse::<Action>(), Err(OthelloError::InvalidCoordinate(_))));
    assert!(matches!("a10".parse::<Action>(), Err(OthelloError::InvalidCoordinate(_))));
    assert!(matches!(Board::new(1, 1), Err(OthelloError::OverlappingMasks(1))));
    assert!(matches!(
        Board::from_rows(["........"; 7]),
        Err(OthelloError::InvalidBoardText(_))
    ));
}
