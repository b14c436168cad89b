//! Shared helpers for the tttgraph integration tests.

#![allow(dead_code)]

use tttgraph::{GameGraph, Player, game::standard_lines};

/// Standard 3x3 game with the eight rows, columns and diagonals.
pub fn tic_tac_toe() -> GameGraph {
    GameGraph::new(9, standard_lines(3)).expect("standard board is valid")
}

/// Play `boxes` in order, letting the automated player move whenever it is
/// its turn. Panics if a human box is rejected.
pub fn play_human_boxes(graph: &mut GameGraph, boxes: &[usize]) {
    for &box_index in boxes {
        if graph.next_player_to_move() == Player::Automated {
            assert!(graph.play_automated_move().expect("graph is consistent"));
        }
        assert!(
            graph.apply_human_move(box_index),
            "human move on box {box_index} rejected"
        );
    }
}
