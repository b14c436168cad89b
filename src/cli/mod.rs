//! CLI infrastructure for the tttgraph toolkit
//!
//! This module provides the command-line interface for playing against the
//! solver, reporting solved values, and inspecting board definitions.

pub mod commands;
pub mod config;
pub mod output;
