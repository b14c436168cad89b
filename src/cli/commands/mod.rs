//! Subcommands of the tttgraph binary

pub mod lines;
pub mod play;
pub mod profile;
pub mod solve;
