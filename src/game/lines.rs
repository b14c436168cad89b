//! Winning line definitions

use serde::Serialize;

use super::Player;
use crate::{Error, Result};

/// Largest board the graph will agree to explore exhaustively.
///
/// The number of distinct configurations grows roughly as 3^N, and the
/// whole reachable graph is retained for the session. Each configuration
/// keeps its cells in the arena and again in the canonical index, plus one
/// neighbor entry per successor. A standard 4x4 board reaches on the order
/// of ten million configurations, which takes several gigabytes; boards of
/// ten or fewer boxes stay well under a hundred megabytes.
pub const MAX_BOXES: usize = 16;

/// Validated set of winning lines over a board of `num_boxes` boxes.
///
/// Box indices are 1-based. Every line is non-empty and only references
/// boxes in `1..=num_boxes`. Lines keep their definition order, which is
/// the order win detection scans them in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WinningLines {
    num_boxes: usize,
    lines: Vec<Vec<usize>>,
}

impl WinningLines {
    /// Validate `lines` against a board of `num_boxes` boxes.
    ///
    /// # Errors
    ///
    /// Returns error if the box count is zero or above [`MAX_BOXES`], if a
    /// line is empty, or if a line references box 0 or a box past the end
    /// of the board.
    pub fn new(num_boxes: usize, lines: Vec<Vec<usize>>) -> Result<Self> {
        if num_boxes == 0 {
            return Err(Error::InvalidBoxCount { num_boxes });
        }
        if num_boxes > MAX_BOXES {
            return Err(Error::TooManyBoxes {
                num_boxes,
                max: MAX_BOXES,
            });
        }

        for (line_number, line) in lines.iter().enumerate() {
            if line.is_empty() {
                return Err(Error::EmptyWinningLine {
                    line: line_number + 1,
                });
            }
            if let Some(&index) = line.iter().find(|&&b| b == 0 || b > num_boxes) {
                return Err(Error::BoxOutOfRange {
                    line: line_number + 1,
                    index,
                    num_boxes,
                });
            }
        }

        Ok(Self { num_boxes, lines })
    }

    pub fn num_boxes(&self) -> usize {
        self.num_boxes
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &[usize]> {
        self.lines.iter().map(Vec::as_slice)
    }

    /// Player holding every box of the first uniformly occupied line.
    ///
    /// `cells[i]` is the occupant of box `i + 1`. Lines held entirely by
    /// `Nobody` do not count.
    pub fn first_winner(&self, cells: &[Player]) -> Option<Player> {
        self.lines.iter().find_map(|line| {
            let first = cells[line[0] - 1];
            if first.is_nobody() {
                return None;
            }
            line.iter().all(|&b| cells[b - 1] == first).then_some(first)
        })
    }
}

/// Rows, columns and both diagonals of a `dim` x `dim` grid, numbered
/// row-major from 1.
pub fn standard_lines(dim: usize) -> Vec<Vec<usize>> {
    let at = |row: usize, col: usize| row * dim + col + 1;
    let mut lines = Vec::with_capacity(2 * dim + 2);

    for row in 0..dim {
        lines.push((0..dim).map(|col| at(row, col)).collect());
    }
    for col in 0..dim {
        lines.push((0..dim).map(|row| at(row, col)).collect());
    }
    if dim > 0 {
        lines.push((0..dim).map(|i| at(i, i)).collect());
        lines.push((0..dim).map(|i| at(i, dim - 1 - i)).collect());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_three_by_three_has_eight_lines() {
        let lines = standard_lines(3);
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], vec![1, 2, 3]);
        assert_eq!(lines[3], vec![1, 4, 7]);
        assert_eq!(lines[6], vec![1, 5, 9]);
        assert_eq!(lines[7], vec![3, 5, 7]);
    }

    #[test]
    fn rejects_zero_and_oversized_indices() {
        assert!(matches!(
            WinningLines::new(4, vec![vec![0, 1]]),
            Err(Error::BoxOutOfRange { index: 0, .. })
        ));
        assert!(matches!(
            WinningLines::new(4, vec![vec![1, 2], vec![3, 5]]),
            Err(Error::BoxOutOfRange {
                line: 2,
                index: 5,
                ..
            })
        ));
    }

    #[test]
    fn rejects_bad_box_counts_and_empty_lines() {
        assert!(matches!(
            WinningLines::new(0, vec![]),
            Err(Error::InvalidBoxCount { num_boxes: 0 })
        ));
        assert!(matches!(
            WinningLines::new(MAX_BOXES + 1, vec![]),
            Err(Error::TooManyBoxes { .. })
        ));
        assert!(matches!(
            WinningLines::new(3, vec![vec![]]),
            Err(Error::EmptyWinningLine { line: 1 })
        ));
    }

    #[test]
    fn first_winner_reports_the_first_matching_line() {
        let lines = WinningLines::new(4, vec![vec![1, 2], vec![3, 4]]).unwrap();
        let cells = [
            Player::Human,
            Player::Human,
            Player::Automated,
            Player::Automated,
        ];
        assert_eq!(lines.first_winner(&cells), Some(Player::Human));
    }

    #[test]
    fn empty_line_of_nobody_is_not_a_win() {
        let lines = WinningLines::new(2, vec![vec![1, 2]]).unwrap();
        assert_eq!(lines.first_winner(&[Player::Nobody; 2]), None);
        assert_eq!(
            lines.first_winner(&[Player::Automated, Player::Human]),
            None
        );
    }
}
