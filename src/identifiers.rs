//! Identifier types for configurations and moves in the game graph.
//!
//! Configurations live in an arena owned by [`GameGraph`](crate::game::GameGraph);
//! a [`ConfigId`] is the stable handle to one of them for the lifetime of
//! that graph. Identity comparisons between configurations are comparisons
//! of their ids.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::game::Player;

/// Handle to a configuration stored in a game graph's arena.
///
/// Ids are only meaningful for the graph that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ConfigId(usize);

impl ConfigId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the configuration in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ConfigId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A placement: `player` takes the 1-based box `box_index`.
///
/// This is the key under which a successor is recorded in its
/// predecessor's neighbor list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub player: Player,
    pub box_index: usize,
}

impl Move {
    pub fn new(player: Player, box_index: usize) -> Self {
        Self { player, box_index }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} played on {}", self.player.symbol(), self.box_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_display_names_player_and_box() {
        let mv = Move::new(Player::Human, 7);
        assert_eq!(mv.to_string(), "O played on 7");
    }

    #[test]
    fn config_id_display_uses_arena_index() {
        assert_eq!(ConfigId::new(12).to_string(), "#12");
        assert_eq!(ConfigId::new(12).index(), 12);
    }
}
