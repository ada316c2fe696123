//! Command-line front end: parse an outline and emit the positioned
//! graph, or inspect a single node the way the details sidebar would.

use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use mindgraph::graph::MindmapData;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no node matches `{0}` by id or label")]
    NodeNotFound(String),
}

#[derive(Parser, Debug)]
#[command(name = "mindgraph", about = "Mindmap outline parser and radial layout")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse an outline and print the positioned graph as JSON.
    Parse {
        /// Outline file; reads stdin when omitted.
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,
        /// Use the built-in demo outline instead of FILE/stdin.
        #[arg(long)]
        sample: bool,
        /// Emit compact JSON instead of pretty-printed.
        #[arg(long)]
        compact: bool,
    },
    /// Parse an outline and print one node's details view.
    Node {
        /// Node id, falling back to label match.
        selector: String,
        /// Outline file; reads stdin when omitted.
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,
        /// Use the built-in demo outline instead of FILE/stdin.
        #[arg(long)]
        sample: bool,
    },
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Parse { input, sample, compact } => {
            let data = parse_input(input, sample)?;
            let json = if compact {
                serde_json::to_string(&data)?
            } else {
                serde_json::to_string_pretty(&data)?
            };
            println!("{json}");
        }
        Command::Node { selector, input, sample } => {
            let data = parse_input(input, sample)?;
            let node = data
                .find(&selector)
                .ok_or_else(|| CliError::NodeNotFound(selector.clone()))?;
            let view = serde_json::json!({
                "id": node.id,
                "label": node.label,
                "level": node.level,
                "parentId": node.parent_id,
                "children": data
                    .children_of(&node.id)
                    .iter()
                    .map(|c| c.label.clone())
                    .collect::<Vec<_>>(),
                "details": node.details,
            });
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
    }

    Ok(())
}

/// Resolve the outline text from `--sample`, a file, or stdin, and parse it.
fn parse_input(input: Option<PathBuf>, sample: bool) -> Result<MindmapData, CliError> {
    let text = if sample {
        mindgraph::sample::IT_TECHNOLOGY.to_owned()
    } else if let Some(path) = input {
        std::fs::read_to_string(path)?
    } else {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    };
    Ok(mindgraph::parse(&text))
}
