use super::{emit, load_tree};
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct FlattenArgs {
    /// Tree snapshot (JSON)
    pub tree: PathBuf,

    /// Write the list here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn flatten(args: FlattenArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let tree = load_tree(&args.tree)?;

    let items = sitecraft_tree::flatten(&tree);
    emit(&config.to_json(&items)?, args.output.as_ref())
}
