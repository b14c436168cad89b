//! Exhaustive minimax play for generalized n-in-a-row games
//!
//! This crate provides:
//! - Board configurations with cached win and terminal detection
//! - A lazily expanded, deduplicated game graph with memoized minimax
//! - Board definitions loaded from text or JSON, or generated
//! - A CLI for playing against the solver and inspecting boards

pub mod cli;
pub mod definition;
pub mod error;
pub mod game;
pub mod identifiers;

pub use definition::BoardDefinition;
pub use error::{Error, Result};
pub use game::{BoardConfiguration, GameGraph, Player, WinningLines};
pub use identifiers::{ConfigId, Move};
