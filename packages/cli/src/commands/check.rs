use super::load_tree;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use sitecraft_editor::check_move;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Tree snapshot (JSON)
    pub tree: PathBuf,

    /// Node being dragged
    #[arg(short, long)]
    pub source: String,

    /// Node dropped onto
    #[arg(short, long)]
    pub target: String,
}

pub fn check(args: CheckArgs, _cwd: &str) -> Result<()> {
    let tree = load_tree(&args.tree)?;

    match check_move(&tree, &args.source, &args.target) {
        Ok(()) => {
            println!(
                "{} {} → {} is allowed",
                "✓".green(),
                args.source.bright_white(),
                args.target.bright_white()
            );
        }
        Err(err) => {
            println!("{} {}", "✗".red(), err);
            std::process::exit(2);
        }
    }

    Ok(())
}
