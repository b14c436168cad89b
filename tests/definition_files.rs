use std::fs;

use tempfile::tempdir;
use tttgraph::{BoardDefinition, Error, Player};

#[test]
fn loads_text_definition_and_plays_it() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("two_by_two.txt");
    fs::write(&path, "4\n1 2\n3 4\n1 3\n2 4\n").unwrap();

    let definition = BoardDefinition::from_path(&path).unwrap();
    assert_eq!(definition.num_boxes, 4);
    assert_eq!(definition.winning_lines.len(), 4);

    let mut graph = definition.new_game().unwrap();
    // An opening on box 1 threatens boxes 2 and 3; the human can block only one.
    assert_eq!(graph.solve(), 1);
    assert!(graph.play_automated_move().unwrap());
    assert_eq!(graph.current_board().occupant(1), Some(Player::Automated));
}

#[test]
fn loads_json_definition() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("board.json");
    let original = BoardDefinition::standard(3);
    fs::write(&path, serde_json::to_string(&original).unwrap()).unwrap();

    let loaded = BoardDefinition::from_path(&path).unwrap();
    assert_eq!(loaded, original);
}

#[test]
fn missing_file_reports_io_error_with_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.txt");

    let err = BoardDefinition::from_path(&path).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert!(err.to_string().contains("absent.txt"));
}

#[test]
fn malformed_json_is_a_serialization_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{\"num_boxes\": 9").unwrap();

    assert!(matches!(
        BoardDefinition::from_path(&path),
        Err(Error::Serialization(_))
    ));
}

#[test]
fn definition_with_out_of_range_box_is_rejected_before_play() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.txt");
    fs::write(&path, "3\n1 2 3\n2 3 4\n").unwrap();

    let definition = BoardDefinition::from_path(&path).unwrap();
    let err = definition.new_game().unwrap_err();
    assert!(matches!(
        err,
        Error::BoxOutOfRange {
            line: 2,
            index: 4,
            num_boxes: 3
        }
    ));
}
