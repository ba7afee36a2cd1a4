use crate::config::Config;
use anyhow::Result;
use clap::Args;
use sitecraft_editor::{resolve_drop_position_with, Bounds};

#[derive(Debug, Args)]
pub struct ResolveArgs {
    /// Top of the target element
    #[arg(long, allow_negative_numbers = true)]
    pub top: f64,

    /// Height of the target element
    #[arg(long)]
    pub height: f64,

    /// Pointer's vertical position
    #[arg(long, allow_negative_numbers = true)]
    pub pointer_y: f64,

    /// Override the configured threshold fraction
    #[arg(long)]
    pub threshold: Option<f64>,
}

pub fn resolve(args: ResolveArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let threshold = args.threshold.unwrap_or(config.editor.drop_threshold);

    let bounds = Bounds::vertical(args.top, args.height);
    let position = resolve_drop_position_with(&bounds, args.pointer_y, threshold);

    println!("{}", position);
    Ok(())
}
