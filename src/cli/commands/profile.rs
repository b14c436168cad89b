//! Profile command - time a full solve of a random board

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use tracing::info;

use crate::{
    cli::{
        config::{CommonConfig, ProfileConfig},
        output::{create_spinner, describe_value, format_number, print_kv, print_section},
    },
    definition::BoardDefinition,
};

#[derive(Parser, Debug)]
#[command(about = "Solve a randomly generated board and report timings")]
pub struct ProfileArgs {
    /// Boxes on the board
    #[arg(long, short = 'n', default_value_t = 9)]
    pub boxes: usize,

    /// Number of random winning lines
    #[arg(long, short = 'l', default_value_t = 8)]
    pub lines: usize,

    /// Boxes per winning line
    #[arg(long, short = 's', default_value_t = 3)]
    pub line_size: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,
}

impl From<&ProfileArgs> for ProfileConfig {
    fn from(args: &ProfileArgs) -> Self {
        Self {
            num_boxes: args.boxes,
            num_lines: args.lines,
            line_size: args.line_size,
            seed: args.seed,
        }
    }
}

/// Timings and sizes from one profiling run
#[derive(Debug, Clone)]
pub struct ProfileRun {
    pub definition: BoardDefinition,
    pub value: i32,
    pub configurations: usize,
    pub elapsed: Duration,
}

/// Generate the board described by `config` and solve it.
pub fn profile(config: &ProfileConfig) -> Result<ProfileRun> {
    let seed = config.seed.unwrap_or_else(rand::random::<u64>);
    let mut rng = StdRng::seed_from_u64(seed);
    let definition =
        BoardDefinition::random(config.num_boxes, config.num_lines, config.line_size, &mut rng)?;
    let mut graph = definition.new_game()?;

    let start = Instant::now();
    let value = graph.solve();
    let elapsed = start.elapsed();
    info!(seed, ?elapsed, "profiled random board");

    Ok(ProfileRun {
        definition,
        value,
        configurations: graph.configuration_count(),
        elapsed,
    })
}

pub fn execute(args: ProfileArgs, common: &CommonConfig) -> Result<()> {
    let config = ProfileConfig::from(&args);

    let spinner = create_spinner("Initializing...", common.progress);
    let run = profile(&config)?;
    spinner.finish_and_clear();

    print_section("Profile");
    print_kv("Boxes", &config.num_boxes.to_string());
    print_kv("Winning lines", &config.num_lines.to_string());
    print_kv("Line size", &config.line_size.to_string());
    print_kv(
        "Value",
        &format!("{} ({})", run.value, describe_value(run.value)),
    );
    print_kv("Configurations", &format_number(run.configurations));
    print_kv("Elapsed", &format!("{:.3?}", run.elapsed));
    if common.verbose {
        println!("\nBoard definition:\n{}", run.definition.to_text());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_profile_is_reproducible() {
        let config = ProfileConfig {
            num_boxes: 6,
            num_lines: 4,
            line_size: 2,
            seed: Some(11),
        };
        let first = profile(&config).unwrap();
        let second = profile(&config).unwrap();

        assert_eq!(first.definition, second.definition);
        assert_eq!(first.value, second.value);
        assert_eq!(first.configurations, second.configurations);
        assert!((-1..=1).contains(&first.value));
    }

    #[test]
    fn oversized_lines_are_rejected() {
        let config = ProfileConfig {
            num_boxes: 3,
            num_lines: 1,
            line_size: 5,
            seed: Some(1),
        };
        assert!(profile(&config).is_err());
    }
}
