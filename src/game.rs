//! Generalized n-in-a-row game: configurations and the game graph

pub mod configuration;
pub mod graph;
pub mod lines;
pub mod player;
pub mod render;

pub use configuration::{BoardConfiguration, CanonicalKey};
pub use graph::GameGraph;
pub use lines::{MAX_BOXES, WinningLines, standard_lines};
pub use player::Player;
