//! Lines command - show a board's box numbering and winning lines

use std::{fs::File, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    cli::{config::BoardArgs, output::print_section},
    game::render::{labeled_board, winning_line_diagrams},
};

#[derive(Parser, Debug)]
#[command(about = "Show box numbering and winning lines of a board")]
pub struct LinesArgs {
    #[command(flatten)]
    pub board: BoardArgs,

    /// Export the board definition as JSON
    #[arg(long)]
    pub export: Option<PathBuf>,
}

pub fn execute(args: LinesArgs) -> Result<()> {
    let definition = args.board.definition()?;
    let lines = definition.validate()?;

    print_section("Boxes");
    print!("{}", labeled_board(lines.num_boxes()));

    print_section(&format!("Winning lines ({})", lines.len()));
    for (i, diagram) in winning_line_diagrams(&lines).iter().enumerate() {
        println!("Line {}:", i + 1);
        println!("{diagram}");
    }

    if let Some(path) = args.export {
        let file = File::create(&path)
            .with_context(|| format!("creating {}", path.display()))?;
        serde_json::to_writer_pretty(file, &definition)?;
        println!("Board definition exported to: {}", path.display());
    }

    Ok(())
}
