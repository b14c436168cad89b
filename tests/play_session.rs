use std::io::Cursor;

use tttgraph::{
    BoardDefinition, GameGraph, Player,
    cli::{commands::play::run, config::PlayConfig},
};

mod common;
use common::tic_tac_toe;

fn session(graph: &mut GameGraph, config: &PlayConfig, input: &str) -> (Option<Player>, String) {
    let mut output = Vec::new();
    let winner = run(graph, config, Cursor::new(input.as_bytes()), &mut output).unwrap();
    (winner, String::from_utf8(output).unwrap())
}

#[test]
fn automated_player_wins_two_by_two_board() {
    let mut graph = BoardDefinition::standard(2).new_game().unwrap();
    let (winner, output) = session(&mut graph, &PlayConfig::default(), "4\n");

    assert_eq!(winner, Some(Player::Automated));
    assert!(output.contains("I'll go first."));
    assert!(output.ends_with("I win!\n"));
}

#[test]
fn invalid_input_reprompts_until_quit() {
    let mut graph = tic_tac_toe();
    let (winner, output) = session(&mut graph, &PlayConfig::default(), "seven\n0\n1\nq\n");

    assert_eq!(winner, None);
    assert!(output.contains("please enter 'w', 'h', 'u', 'q' or a number 1 through 9!"));
    assert!(output.contains("box 0 is not available"));
    // The automated opening takes box 1.
    assert!(output.contains("box 1 is not available"));
    assert_eq!(graph.moves_played(), 1);
}

#[test]
fn end_of_input_leaves_the_game() {
    let mut graph = tic_tac_toe();
    let (winner, output) = session(&mut graph, &PlayConfig::default(), "");
    assert_eq!(winner, None);
    assert!(output.ends_with("Goodbye!\n"));
}

#[test]
fn winning_lines_and_hints_on_request() {
    let mut graph = tic_tac_toe();
    let (_, output) = session(&mut graph, &PlayConfig::default(), "w\nh\nq\n");

    assert!(output.contains("W | W | W\n- | - | -\n- | - | -\n"));
    assert!(output.contains("Try box 5."));
}

#[test]
fn hints_can_be_disabled() {
    let mut graph = tic_tac_toe();
    let config = PlayConfig {
        precompute: false,
        hints: false,
    };
    let (_, output) = session(&mut graph, &config, "h\nq\n");
    assert!(output.contains("Hints are disabled."));
}

#[test]
fn undo_rewinds_a_full_round() {
    let mut graph = tic_tac_toe();
    let (_, output) = session(&mut graph, &PlayConfig::default(), "u\n5\nu\nq\n");

    assert!(output.contains("Nothing to undo."));
    assert_eq!(graph.moves_played(), 1);
    assert_eq!(graph.next_player_to_move(), Player::Human);
    assert_eq!(graph.current_board().occupant(5), Some(Player::Nobody));
}

#[test]
fn optimal_human_play_ends_in_cats_game() {
    // Record the replies the hint would give, then type them in.
    let mut replay = tic_tac_toe();
    let mut moves = Vec::new();
    while !replay.is_done() {
        if replay.next_player_to_move() == Player::Automated {
            assert!(replay.play_automated_move().unwrap());
        } else {
            let box_index = replay.suggest_human_move().unwrap();
            assert!(replay.apply_human_move(box_index));
            moves.push(box_index);
        }
    }
    assert_eq!(replay.winner(), Some(Player::Nobody));

    let script: String = moves.iter().map(|b| format!("{b}\n")).collect();
    let mut graph = tic_tac_toe();
    let (winner, output) = session(&mut graph, &PlayConfig::default(), &script);
    assert_eq!(winner, Some(Player::Nobody));
    assert!(output.ends_with("Cat's game!\n"));
}
