//! Players and their scores

use std::fmt;

use serde::{Deserialize, Serialize};

/// Occupant of a box, or the holder of the turn.
///
/// `Nobody` marks an empty box and the winner of a drawn game. It never
/// holds the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Automated,
    Human,
    Nobody,
}

impl Player {
    /// Minimax value of a game won by this player.
    ///
    /// The automated player maximizes and the human minimizes, so a draw
    /// sits between the two wins.
    pub fn score(self) -> i32 {
        match self {
            Player::Automated => 1,
            Player::Human => -1,
            Player::Nobody => 0,
        }
    }

    /// The player who moves after this one.
    ///
    /// `Nobody` maps to `Automated`, which is the side that opens every game.
    pub fn opponent(self) -> Player {
        match self {
            Player::Automated => Player::Human,
            Player::Human | Player::Nobody => Player::Automated,
        }
    }

    /// Single-character symbol used in board diagrams.
    pub fn symbol(self) -> char {
        match self {
            Player::Automated => 'X',
            Player::Human => 'O',
            Player::Nobody => '-',
        }
    }

    pub fn is_nobody(self) -> bool {
        self == Player::Nobody
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
