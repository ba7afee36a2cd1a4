use super::load_tree;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use sitecraft_tree::{flatten, try_rebuild};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Tree snapshot (JSON)
    pub tree: PathBuf,
}

pub fn validate(args: ValidateArgs, _cwd: &str) -> Result<()> {
    println!("🔍 {} {}", "Validating".green().bold(), args.tree.display());

    let tree = load_tree(&args.tree)?;
    println!("   {} {} nodes, ids unique", "✓".green(), tree.node_count());

    let items = flatten(&tree);
    let rebuilt = try_rebuild(&items)?;
    if rebuilt != tree {
        return Err(anyhow!("Flatten/rebuild round trip changed the tree"));
    }
    println!("   {} flatten/rebuild round trip", "✓".green());

    Ok(())
}
