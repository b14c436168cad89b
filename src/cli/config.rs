//! Shared configuration types for CLI commands

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::{Deserialize, Serialize};

use crate::definition::BoardDefinition;

/// Where a command takes its board from
#[derive(Args, Debug, Clone)]
pub struct BoardArgs {
    /// Board definition file (text, or JSON with a .json extension)
    #[arg(long, short = 'f')]
    pub file: Option<PathBuf>,

    /// Use a standard N x N board won by any row, column or diagonal.
    /// N = 4 explores about ten million positions and needs several GB of memory
    #[arg(long, conflicts_with = "file", default_value_t = 3)]
    pub standard: usize,
}

impl BoardArgs {
    /// Resolve the board definition these arguments describe.
    pub fn definition(&self) -> Result<BoardDefinition> {
        match &self.file {
            Some(path) => BoardDefinition::from_path(path)
                .with_context(|| format!("loading board from {}", path.display())),
            None => Ok(BoardDefinition::standard(self.standard)),
        }
    }
}

/// Common configuration shared across commands
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommonConfig {
    /// Whether to show progress spinners
    pub progress: bool,

    /// Verbose output
    pub verbose: bool,
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            progress: true,
            verbose: false,
        }
    }
}

/// Interactive play configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayConfig {
    /// Solve the whole graph before the first move
    pub precompute: bool,

    /// Allow the human to ask for the best reply
    pub hints: bool,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            precompute: true,
            hints: true,
        }
    }
}

/// Random board profiling configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Boxes on the board
    pub num_boxes: usize,

    /// Number of random winning lines
    pub num_lines: usize,

    /// Boxes per winning line
    pub line_size: usize,

    /// Random seed for reproducibility
    pub seed: Option<u64>,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            num_boxes: 9,
            num_lines: 8,
            line_size: 3,
            seed: None,
        }
    }
}
