//! Solve command - score a board from the empty position

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::{
        config::{BoardArgs, CommonConfig},
        output::{create_spinner, describe_value, format_number, print_kv, print_section},
    },
    game::GameGraph,
};

#[derive(Parser, Debug)]
#[command(about = "Solve a board and report its minimax value")]
pub struct SolveArgs {
    #[command(flatten)]
    pub board: BoardArgs,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Result of solving a board from the empty position
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolveReport {
    pub num_boxes: usize,
    pub winning_lines: usize,
    pub value: i32,
    pub opening_box: Option<usize>,
    pub configurations: usize,
    pub scored: usize,
}

impl SolveReport {
    /// Solve `graph` from its root and collect the statistics.
    pub fn from_graph(graph: &mut GameGraph) -> Self {
        let root = graph.root();
        let value = graph.solve();
        let opening_box = graph
            .best_move(root)
            .and_then(|next| graph.move_between(root, next))
            .map(|mv| mv.box_index);

        Self {
            num_boxes: graph.num_boxes(),
            winning_lines: graph.winning_lines().len(),
            value,
            opening_box,
            configurations: graph.configuration_count(),
            scored: graph.scored_count(),
        }
    }

    pub fn print(&self) {
        print_section("Solved board");
        print_kv("Boxes", &self.num_boxes.to_string());
        print_kv("Winning lines", &self.winning_lines.to_string());
        print_kv(
            "Value",
            &format!("{} ({})", self.value, describe_value(self.value)),
        );
        match self.opening_box {
            Some(b) => print_kv("Opening box", &b.to_string()),
            None => print_kv("Opening box", "none"),
        }
        print_kv("Configurations", &format_number(self.configurations));
        print_kv("Scored", &format_number(self.scored));
    }
}

pub fn execute(args: SolveArgs, common: &CommonConfig) -> Result<()> {
    let mut graph = args.board.definition()?.new_game()?;

    let spinner = create_spinner("Solving game graph...", common.progress && !args.json);
    let report = SolveReport::from_graph(&mut graph);
    spinner.finish_and_clear();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        report.print();
    }
    Ok(())
}
