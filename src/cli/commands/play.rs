//! Play command - interactive game against the automated player

use std::io::{self, BufRead, Write};

use anyhow::{Result, bail};
use clap::Parser;

use crate::{
    cli::{
        config::{BoardArgs, CommonConfig, PlayConfig},
        output::create_spinner,
    },
    game::{
        GameGraph, Player,
        render::{labeled_board, winning_line_diagrams},
    },
};

#[derive(Parser, Debug)]
#[command(about = "Play against the automated player")]
pub struct PlayArgs {
    #[command(flatten)]
    pub board: BoardArgs,

    /// Explore lazily instead of solving the whole graph up front
    #[arg(long)]
    pub no_precompute: bool,

    /// Disable the hint command
    #[arg(long)]
    pub no_hints: bool,
}

/// One line of human input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Play(usize),
    ShowLines,
    Hint,
    Undo,
    Quit,
}

impl Command {
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        match input.to_ascii_lowercase().as_str() {
            "w" => Some(Command::ShowLines),
            "h" => Some(Command::Hint),
            "u" => Some(Command::Undo),
            "q" => Some(Command::Quit),
            _ => input.parse().ok().map(Command::Play),
        }
    }
}

pub fn execute(args: PlayArgs, common: &CommonConfig) -> Result<()> {
    let definition = args.board.definition()?;
    let mut graph = definition.new_game()?;
    let config = PlayConfig {
        precompute: !args.no_precompute,
        hints: !args.no_hints,
    };

    if config.precompute {
        let spinner = create_spinner("Solving game graph...", common.progress);
        graph.solve();
        spinner.finish_and_clear();
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&mut graph, &config, stdin.lock(), stdout.lock())?;
    Ok(())
}

/// Drive one game, reading human commands from `input`.
///
/// Returns the winner, or `None` if the human quit or input ran out.
pub fn run<R, W>(
    graph: &mut GameGraph,
    config: &PlayConfig,
    mut input: R,
    mut output: W,
) -> Result<Option<Player>>
where
    R: BufRead,
    W: Write,
{
    let num_boxes = graph.num_boxes();
    writeln!(
        output,
        "Let's play! You'll be 'O', and I'll be 'X'. I'll go first."
    )?;

    while !graph.is_done() {
        writeln!(output, "Current board:\n{}", graph.current_board())?;

        if graph.next_player_to_move() == Player::Automated {
            if !graph.play_automated_move()? {
                bail!("automated player had no move on an unfinished board");
            }
            continue;
        }

        writeln!(output, "It's your turn!\n{}", labeled_board(num_boxes))?;
        write!(
            output,
            "Enter a box 1-{num_boxes}, 'w' for winning lines, 'h' for a hint, 'u' to undo, 'q' to quit: "
        )?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output, "\nGoodbye!")?;
            return Ok(None);
        }

        match Command::parse(&line) {
            Some(Command::Play(box_index)) => {
                if !graph.apply_human_move(box_index) {
                    writeln!(
                        output,
                        "Whoops, box {box_index} is not available. Why don't you try again."
                    )?;
                }
            }
            Some(Command::ShowLines) => {
                for diagram in winning_line_diagrams(graph.winning_lines()) {
                    writeln!(output, "{diagram}")?;
                }
            }
            Some(Command::Hint) if config.hints => match graph.suggest_human_move() {
                Some(box_index) => writeln!(output, "Try box {box_index}.")?,
                None => writeln!(output, "No hint available.")?,
            },
            Some(Command::Hint) => writeln!(output, "Hints are disabled.")?,
            Some(Command::Undo) => {
                // Undo the automated reply together with the human move before it.
                if graph.moves_played() >= 3 {
                    graph.undo();
                    graph.undo();
                } else {
                    writeln!(output, "Nothing to undo.")?;
                }
            }
            Some(Command::Quit) => return Ok(None),
            None => writeln!(
                output,
                "Whoops, please enter 'w', 'h', 'u', 'q' or a number 1 through {num_boxes}!"
            )?,
        }
    }

    writeln!(output, "{}", graph.current_board())?;
    let winner = graph.winner();
    let message = match winner {
        Some(Player::Automated) => "I win!",
        Some(Player::Human) => "You win!",
        _ => "Cat's game!",
    };
    writeln!(output, "{message}")?;

    Ok(winner)
}
