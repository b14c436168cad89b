//! The game graph: lazily expanded state space with memoized minimax

use std::collections::HashMap;

use tracing::{debug, error, info, trace};

use super::{BoardConfiguration, CanonicalKey, Player, WinningLines};
use crate::{
    Error, Result,
    identifiers::{ConfigId, Move},
};

/// One game session over a fixed board and set of winning lines.
///
/// Every configuration discovered while exploring lives in an arena owned
/// by the graph and is reachable through its canonical key, so two move
/// orders that produce the same board and turn share a single node. The
/// arena and the score cache only grow; both are dropped with the graph.
#[derive(Debug, Clone)]
pub struct GameGraph {
    lines: WinningLines,
    configs: Vec<BoardConfiguration>,
    index: HashMap<CanonicalKey, ConfigId>,
    scores: HashMap<ConfigId, i32>,
    root: ConfigId,
    current: ConfigId,
    history: Vec<ConfigId>,
}

impl GameGraph {
    /// Start a game on `num_boxes` boxes with the automated player to move.
    ///
    /// # Errors
    ///
    /// Returns error if the box count is zero or too large, or if any
    /// winning line is empty or references a box outside `1..=num_boxes`.
    pub fn new(num_boxes: usize, winning_lines: Vec<Vec<usize>>) -> Result<Self> {
        let lines = WinningLines::new(num_boxes, winning_lines)?;
        Ok(Self::with_lines(lines))
    }

    /// Start a game over an already validated set of lines.
    pub fn with_lines(lines: WinningLines) -> Self {
        let empty = BoardConfiguration::empty(lines.num_boxes(), Player::Automated);
        let root = ConfigId::new(0);

        let mut index = HashMap::new();
        index.insert(empty.canonical_key(), root);

        Self {
            lines,
            configs: vec![empty],
            index,
            scores: HashMap::new(),
            root,
            current: root,
            history: Vec::new(),
        }
    }

    pub fn winning_lines(&self) -> &WinningLines {
        &self.lines
    }

    pub fn num_boxes(&self) -> usize {
        self.lines.num_boxes()
    }

    pub fn root(&self) -> ConfigId {
        self.root
    }

    pub fn current(&self) -> ConfigId {
        self.current
    }

    /// Configuration the game was in before the last accepted move.
    pub fn previous(&self) -> Option<ConfigId> {
        self.history.last().copied()
    }

    /// Look up a configuration issued by this graph.
    ///
    /// # Panics
    ///
    /// Panics if `id` was issued by a different graph and is out of range.
    pub fn configuration(&self, id: ConfigId) -> &BoardConfiguration {
        &self.configs[id.index()]
    }

    /// Every discovered configuration, in discovery order.
    pub fn configurations(&self) -> impl Iterator<Item = (ConfigId, &BoardConfiguration)> {
        self.configs
            .iter()
            .enumerate()
            .map(|(i, config)| (ConfigId::new(i), config))
    }

    /// Find an already discovered configuration by its canonical key.
    pub fn lookup(&self, key: &CanonicalKey) -> Option<ConfigId> {
        self.index.get(key).copied()
    }

    pub fn current_board(&self) -> &BoardConfiguration {
        self.configuration(self.current)
    }

    /// Number of distinct configurations discovered so far.
    pub fn configuration_count(&self) -> usize {
        self.configs.len()
    }

    /// Number of configurations with a cached minimax score.
    pub fn scored_count(&self) -> usize {
        self.scores.len()
    }

    /// Resolve whether `id` ends the game, using this graph's lines.
    ///
    /// Configurations handed out by the graph cannot be resolved against
    /// any other set of lines:
    ///
    /// ```compile_fail
    /// use tttgraph::{GameGraph, WinningLines, game::standard_lines};
    ///
    /// let graph = GameGraph::new(9, standard_lines(3)).unwrap();
    /// let other = WinningLines::new(9, vec![vec![1]]).unwrap();
    /// graph.configuration(graph.root()).is_terminal(&other);
    /// ```
    pub fn is_terminal(&self, id: ConfigId) -> bool {
        self.configuration(id).is_terminal(&self.lines)
    }

    pub fn is_done(&self) -> bool {
        self.is_terminal(self.current)
    }

    /// Winner of the current configuration; `None` while the game is on.
    pub fn winner(&self) -> Option<Player> {
        let board = self.current_board();
        if board.is_terminal(&self.lines) {
            board.winner()
        } else {
            None
        }
    }

    pub fn next_player_to_move(&self) -> Player {
        self.current_board().next_player()
    }

    /// Generate every successor of `id`, one per empty box.
    ///
    /// Successors already present in the graph are reused. Terminal and
    /// already expanded configurations are left untouched.
    pub fn expand(&mut self, id: ConfigId) {
        let config = &self.configs[id.index()];
        if config.is_expanded() || config.is_terminal(&self.lines) {
            return;
        }

        let mover = config.next_player();
        let successors: Vec<(usize, CanonicalKey)> = config
            .empty_boxes()
            .map(|b| (b, config.successor_key(b)))
            .collect();

        let mut neighbors = Vec::with_capacity(successors.len());
        for (box_index, key) in successors {
            let next = self.intern(key);
            neighbors.push((Move::new(mover, box_index), next));
        }

        trace!(config = %id, neighbors = neighbors.len(), "expanded configuration");
        self.configs[id.index()].set_neighbors(neighbors);
    }

    /// Return the id for `key`, creating the configuration on first sight.
    fn intern(&mut self, key: CanonicalKey) -> ConfigId {
        if let Some(&id) = self.index.get(&key) {
            return id;
        }
        let id = ConfigId::new(self.configs.len());
        self.configs.push(BoardConfiguration::from_key(key.clone()));
        self.index.insert(key, id);
        id
    }

    fn neighbor_ids(&mut self, id: ConfigId) -> Vec<ConfigId> {
        self.expand(id);
        self.configuration(id)
            .neighbors()
            .iter()
            .map(|&(_, next)| next)
            .collect()
    }

    /// Exact minimax value of `id` under optimal play by both sides.
    ///
    /// +1 means the automated player can force a win, -1 the human, 0 a
    /// draw. Each distinct configuration is scored once; later calls hit
    /// the cache. Recursion depth is bounded by the number of empty boxes.
    pub fn minimax(&mut self, id: ConfigId) -> i32 {
        if let Some(&score) = self.scores.get(&id) {
            return score;
        }

        let config = self.configuration(id);
        if config.is_terminal(&self.lines) {
            return config.winner().unwrap_or(Player::Nobody).score();
        }

        let maximizing = config.next_player() == Player::Automated;
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for next in self.neighbor_ids(id) {
            let score = self.minimax(next);
            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }

        self.scores.insert(id, best);
        best
    }

    /// Best successor of `id` for the player to move there.
    ///
    /// The automated player takes the highest scoring neighbor and the
    /// human the lowest. Ties go to the lowest box. Returns `None` for
    /// terminal configurations.
    pub fn best_move(&mut self, id: ConfigId) -> Option<ConfigId> {
        let maximizing = self.configuration(id).next_player() == Player::Automated;
        let mut best: Option<(ConfigId, i32)> = None;

        for next in self.neighbor_ids(id) {
            let score = self.minimax(next);
            let better = match best {
                None => true,
                Some((_, best_score)) if maximizing => score > best_score,
                Some((_, best_score)) => score < best_score,
            };
            if better {
                best = Some((next, score));
            }
        }

        if let Some((next, score)) = best {
            debug!(from = %id, to = %next, score, "selected best move");
        }
        best.map(|(next, _)| next)
    }

    /// Score the whole game from the empty board.
    pub fn solve(&mut self) -> i32 {
        let value = self.minimax(self.root);
        info!(
            value,
            configurations = self.configuration_count(),
            scored = self.scored_count(),
            "solved game graph"
        );
        value
    }

    /// Move to `next` if it is a successor of the current configuration.
    ///
    /// Returns `false`, leaving the game unchanged, for anything else.
    pub fn apply_move(&mut self, next: ConfigId) -> bool {
        if !self.current_board().has_neighbor(next) {
            return false;
        }
        self.history.push(self.current);
        self.current = next;
        debug!(from = ?self.previous(), to = %next, "applied move");
        true
    }

    /// Let the automated player make its optimal move.
    ///
    /// Returns `Ok(false)` when the game is over or it is the human's turn.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InconsistentGraph`] if the chosen configuration is
    /// not a successor of the current one. That can only happen if the
    /// graph itself is corrupted.
    pub fn play_automated_move(&mut self) -> Result<bool> {
        if self.is_done() || self.next_player_to_move() != Player::Automated {
            return Ok(false);
        }

        let Some(next) = self.best_move(self.current) else {
            return Ok(false);
        };
        self.commit_automated_move(next)
    }

    /// Apply the automated player's chosen successor, treating rejection
    /// as graph corruption.
    fn commit_automated_move(&mut self, next: ConfigId) -> Result<bool> {
        if !self.apply_move(next) {
            error!(from = %self.current, to = %next, "best move is not a neighbor");
            return Err(Error::InconsistentGraph {
                message: format!(
                    "best move {next} is not a successor of current configuration {}",
                    self.current
                ),
            });
        }
        Ok(true)
    }

    /// Place the human's mark on the 1-based `box_index`.
    ///
    /// Returns `false` if the box is taken or out of range, if it is not
    /// the human's turn, or if the game is over.
    pub fn apply_human_move(&mut self, box_index: usize) -> bool {
        self.expand(self.current);
        match self
            .current_board()
            .neighbor(Move::new(Player::Human, box_index))
        {
            Some(next) => self.apply_move(next),
            None => false,
        }
    }

    /// Best box for the human at the current configuration.
    pub fn suggest_human_move(&mut self) -> Option<usize> {
        if self.next_player_to_move() != Player::Human {
            return None;
        }
        let next = self.best_move(self.current)?;
        self.move_between(self.current, next).map(|mv| mv.box_index)
    }

    /// Move that leads from `from` to its successor `to`.
    pub fn move_between(&self, from: ConfigId, to: ConfigId) -> Option<Move> {
        self.configuration(from)
            .neighbors()
            .iter()
            .find(|&&(_, id)| id == to)
            .map(|&(mv, _)| mv)
    }

    /// The last accepted move.
    pub fn last_move(&self) -> Option<Move> {
        self.move_between(self.previous()?, self.current)
    }

    /// Number of accepted moves that have not been undone.
    pub fn moves_played(&self) -> usize {
        self.history.len()
    }

    /// Step back to the configuration before the last accepted move.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                debug!(from = %self.current, to = %previous, "undid move");
                self.current = previous;
                true
            }
            None => false,
        }
    }
}
