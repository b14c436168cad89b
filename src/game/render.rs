//! Text diagrams of boards and winning lines

use std::fmt;

use super::{BoardConfiguration, WinningLines};

/// Number of columns used to lay out `num_boxes` boxes: the smallest
/// square grid that fits them all.
pub fn columns(num_boxes: usize) -> usize {
    let mut dim = 1;
    while dim * dim < num_boxes {
        dim += 1;
    }
    dim
}

/// Lay out one label per box, row-major, cells separated by ` | `.
pub fn grid<I, S>(labels: I, num_boxes: usize) -> String
where
    I: IntoIterator<Item = S>,
    S: fmt::Display,
{
    let labels: Vec<String> = labels.into_iter().map(|l| l.to_string()).collect();
    let width = labels.iter().map(String::len).max().unwrap_or(1);

    let mut out = String::new();
    for row in labels.chunks(columns(num_boxes)) {
        let cells: Vec<String> = row.iter().map(|l| format!("{l:>width$}")).collect();
        out.push_str(&cells.join(" | "));
        out.push('\n');
    }
    out
}

/// Board showing each box's number instead of its occupant.
pub fn labeled_board(num_boxes: usize) -> String {
    grid(1..=num_boxes, num_boxes)
}

/// One diagram per winning line with the line's boxes marked `W`.
pub fn winning_line_diagrams(lines: &WinningLines) -> Vec<String> {
    let num_boxes = lines.num_boxes();
    lines
        .iter()
        .map(|line| {
            let marks = (1..=num_boxes).map(|b| if line.contains(&b) { 'W' } else { '-' });
            grid(marks, num_boxes)
        })
        .collect()
}

impl fmt::Display for BoardConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "next player: {}", self.next_player())?;
        let symbols = self.cells().iter().map(|p| p.symbol());
        write!(f, "{}", grid(symbols, self.num_boxes()))
    }
}
