//! Board definitions: how many boxes a board has and which lines win
//!
//! The plain text format is the box count on the first non-blank line,
//! followed by one winning line per non-blank line as whitespace separated
//! 1-based box indices. Text after `#` is ignored.
//!
//! ```text
//! 4
//! 1 2
//! 3 4
//! ```

use std::{fs, path::Path, str::FromStr};

use rand::{Rng, seq::index};
use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    game::{GameGraph, WinningLines, standard_lines},
};

/// Unvalidated description of a board as read from a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardDefinition {
    pub num_boxes: usize,
    pub winning_lines: Vec<Vec<usize>>,
}

impl BoardDefinition {
    pub fn new(num_boxes: usize, winning_lines: Vec<Vec<usize>>) -> Self {
        Self {
            num_boxes,
            winning_lines,
        }
    }

    /// Classic `dim` x `dim` board won by any row, column or diagonal.
    pub fn standard(dim: usize) -> Self {
        Self::new(dim * dim, standard_lines(dim))
    }

    /// `num_lines` random lines of `line_size` distinct boxes each.
    ///
    /// # Errors
    ///
    /// Returns error if `line_size` is zero or larger than the board.
    pub fn random<R: Rng + ?Sized>(
        num_boxes: usize,
        num_lines: usize,
        line_size: usize,
        rng: &mut R,
    ) -> Result<Self> {
        if line_size == 0 || line_size > num_boxes {
            return Err(Error::InvalidLineSize {
                line_size,
                num_boxes,
            });
        }

        let winning_lines = (0..num_lines)
            .map(|_| {
                index::sample(rng, num_boxes, line_size)
                    .into_iter()
                    .map(|i| i + 1)
                    .collect()
            })
            .collect();

        Ok(Self::new(num_boxes, winning_lines))
    }

    /// Load a definition from disk. Files ending in `.json` are read as
    /// JSON, everything else as the plain text format.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or does not parse.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read board definition {}", path.display()),
            source,
        })?;

        if path.extension().is_some_and(|ext| ext == "json") {
            Ok(serde_json::from_str(&text)?)
        } else {
            text.parse()
        }
    }

    /// Render in the plain text format accepted by [`FromStr`].
    pub fn to_text(&self) -> String {
        let mut out = format!("{}\n", self.num_boxes);
        for line in &self.winning_lines {
            let boxes: Vec<String> = line.iter().map(usize::to_string).collect();
            out.push_str(&boxes.join(" "));
            out.push('\n');
        }
        out
    }

    /// Validate the lines against the box count.
    ///
    /// # Errors
    ///
    /// See [`WinningLines::new`].
    pub fn validate(&self) -> Result<WinningLines> {
        WinningLines::new(self.num_boxes, self.winning_lines.clone())
    }

    /// Validate and start a new game on this board.
    ///
    /// # Errors
    ///
    /// See [`WinningLines::new`].
    pub fn new_game(&self) -> Result<GameGraph> {
        Ok(GameGraph::with_lines(self.validate()?))
    }
}

impl FromStr for BoardDefinition {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut lines = s
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.split('#').next().unwrap_or("").trim()))
            .filter(|(_, line)| !line.is_empty());

        let (line_number, count) = lines.next().ok_or(Error::MissingBoxCount)?;
        let num_boxes = count
            .parse::<usize>()
            .map_err(|_| Error::InvalidBoxCountLiteral {
                line_number,
                value: count.to_string(),
            })?;

        let winning_lines = lines
            .map(|(line_number, line)| {
                line.split_whitespace()
                    .map(|token| {
                        token.parse::<usize>().map_err(|_| Error::InvalidBoxIndex {
                            line_number,
                            value: token.to_string(),
                        })
                    })
                    .collect::<Result<Vec<usize>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::new(num_boxes, winning_lines))
    }
}
