//! Board configurations: one node of the game graph

use std::cell::OnceCell;

use super::{Player, WinningLines};
use crate::identifiers::{ConfigId, Move};

/// Deduplication identity of a configuration: the full assignment of
/// occupants plus whose turn is next.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalKey {
    cells: Box<[Player]>,
    next_player: Player,
}

impl CanonicalKey {
    pub fn new(cells: Box<[Player]>, next_player: Player) -> Self {
        Self { cells, next_player }
    }

    pub fn cells(&self) -> &[Player] {
        &self.cells
    }

    pub fn next_player(&self) -> Player {
        self.next_player
    }
}

/// One game state: who holds each box and who moves next.
///
/// The box assignment never changes after construction. Win and terminal
/// status are resolved at most once and then served from their caches, so
/// repeated queries always agree. Neighbors are filled in by the owning
/// [`GameGraph`](super::GameGraph) exactly once.
#[derive(Debug, Clone)]
pub struct BoardConfiguration {
    cells: Box<[Player]>,
    next_player: Player,
    win: OnceCell<Option<Player>>,
    terminal: OnceCell<bool>,
    neighbors: Vec<(Move, ConfigId)>,
    expanded: bool,
}

impl BoardConfiguration {
    /// Configuration with the given occupants, box `i + 1` held by `cells[i]`.
    pub fn new(cells: Box<[Player]>, next_player: Player) -> Self {
        Self {
            cells,
            next_player,
            win: OnceCell::new(),
            terminal: OnceCell::new(),
            neighbors: Vec::new(),
            expanded: false,
        }
    }

    /// Empty board of `num_boxes` boxes with `first` to move.
    pub fn empty(num_boxes: usize, first: Player) -> Self {
        Self::new(vec![Player::Nobody; num_boxes].into_boxed_slice(), first)
    }

    pub(crate) fn from_key(key: CanonicalKey) -> Self {
        Self::new(key.cells, key.next_player)
    }

    /// Check whether some winning line is held entirely by one player.
    ///
    /// The first matching line in definition order decides the winner. A
    /// board with no matching line leaves the winner unset.
    ///
    /// Only the owning graph resolves this, always with its own lines.
    pub(crate) fn is_win(&self, lines: &WinningLines) -> bool {
        self.win
            .get_or_init(|| lines.first_winner(&self.cells))
            .is_some()
    }

    /// Check whether the game is over, by a win or by a full board.
    ///
    /// A full board without a win records `Nobody` as the winner.
    pub(crate) fn is_terminal(&self, lines: &WinningLines) -> bool {
        *self
            .terminal
            .get_or_init(|| self.is_win(lines) || !self.cells.contains(&Player::Nobody))
    }

    /// Winner once known: the line holder after a win, `Nobody` after a
    /// draw, `None` while unresolved or still in progress.
    ///
    /// Resolution happens through [`GameGraph::is_terminal`](super::GameGraph::is_terminal).
    pub fn winner(&self) -> Option<Player> {
        match self.win.get() {
            Some(Some(player)) => Some(*player),
            _ if self.terminal.get() == Some(&true) => Some(Player::Nobody),
            _ => None,
        }
    }

    /// Cached terminal status without resolving it.
    pub fn cached_terminal(&self) -> Option<bool> {
        self.terminal.get().copied()
    }

    pub fn next_player(&self) -> Player {
        self.next_player
    }

    pub fn player_after_next(&self) -> Player {
        self.next_player.opponent()
    }

    /// Occupant of the 1-based `box_index`, `None` when out of range.
    pub fn occupant(&self, box_index: usize) -> Option<Player> {
        box_index
            .checked_sub(1)
            .and_then(|i| self.cells.get(i))
            .copied()
    }

    pub fn num_boxes(&self) -> usize {
        self.cells.len()
    }

    pub fn cells(&self) -> &[Player] {
        &self.cells
    }

    /// All boxes with their occupants, in box order.
    pub fn boxes(&self) -> impl Iterator<Item = (usize, Player)> + '_ {
        self.cells.iter().enumerate().map(|(i, &p)| (i + 1, p))
    }

    /// 1-based indices of unoccupied boxes, ascending.
    pub fn empty_boxes(&self) -> impl Iterator<Item = usize> + '_ {
        self.boxes()
            .filter(|(_, p)| p.is_nobody())
            .map(|(b, _)| b)
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|p| !p.is_nobody()).count()
    }

    pub fn canonical_key(&self) -> CanonicalKey {
        CanonicalKey::new(self.cells.clone(), self.next_player)
    }

    /// Key of the configuration reached when the player to move takes
    /// `box_index`. The caller guarantees the box is empty.
    pub(crate) fn successor_key(&self, box_index: usize) -> CanonicalKey {
        let mut cells = self.cells.clone();
        cells[box_index - 1] = self.next_player;
        CanonicalKey::new(cells, self.player_after_next())
    }

    /// Successors recorded by expansion, in ascending box order.
    pub fn neighbors(&self) -> &[(Move, ConfigId)] {
        &self.neighbors
    }

    /// Successor recorded under `mv`, if any.
    pub fn neighbor(&self, mv: Move) -> Option<ConfigId> {
        self.neighbors
            .iter()
            .find(|(m, _)| *m == mv)
            .map(|&(_, id)| id)
    }

    pub fn has_neighbor(&self, id: ConfigId) -> bool {
        self.neighbors.iter().any(|&(_, n)| n == id)
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub(crate) fn set_neighbors(&mut self, neighbors: Vec<(Move, ConfigId)>) {
        debug_assert!(!self.expanded, "configuration expanded twice");
        self.neighbors = neighbors;
        self.expanded = true;
    }
}
