use super::{emit, load_tree};
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use sitecraft_editor::{DropPosition, MoveRequest};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct MoveArgs {
    /// Tree snapshot (JSON)
    pub tree: PathBuf,

    /// Node to move
    #[arg(short, long)]
    pub source: String,

    /// Node to move relative to
    #[arg(short, long)]
    pub target: String,

    /// before, after, or inside
    #[arg(short, long, default_value = "inside")]
    pub position: DropPosition,

    /// Write the new tree here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn move_node(args: MoveArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let tree = load_tree(&args.tree)?;

    let request = MoveRequest::new(&args.source, &args.target, args.position);
    let moved = request.apply(&tree, config.editor.inside_placement)?;

    if args.output.is_some() {
        eprintln!(
            "{} Moved {} {} {}",
            "✓".green(),
            args.source.bright_white(),
            args.position,
            args.target.bright_white()
        );
    }

    emit(&config.to_json(&moved)?, args.output.as_ref())
}
