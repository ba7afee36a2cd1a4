use super::{emit, load_tree};
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use sitecraft_editor::{Bounds, DragSession, DropOutcome, DropPoint, TreeChange, TreeChangeListener};
use std::path::PathBuf;

/// Replays a single pointer gesture: press on `source`, move over `target`,
/// release at `pointer_y` within the target's box.
#[derive(Debug, Args)]
pub struct DragArgs {
    /// Tree snapshot (JSON)
    pub tree: PathBuf,

    /// Node pressed on
    #[arg(short, long)]
    pub source: String,

    /// Node released over (omit to release over nothing)
    #[arg(short, long)]
    pub target: Option<String>,

    /// Top of the target element
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    pub top: f64,

    /// Height of the target element
    #[arg(long, default_value = "100")]
    pub height: f64,

    /// Pointer's vertical position on release
    #[arg(long, default_value = "50", allow_negative_numbers = true)]
    pub pointer_y: f64,

    /// Write the new tree here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Logs each change notification
struct ChangeLogger;

impl TreeChangeListener for ChangeLogger {
    fn on_tree_change(&mut self, change: &TreeChange<'_>) {
        tracing::info!(
            "Tree changed: {} {} {} ({} nodes)",
            change.request.source_id,
            change.request.position,
            change.request.target_id,
            change.current.node_count()
        );
    }
}

pub fn drag(args: DragArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let tree = load_tree(&args.tree)?;

    let mut session = DragSession::with_config(config.editor.clone())?;
    session.subscribe(ChangeLogger);

    let point = DropPoint::new(Bounds::vertical(args.top, args.height), args.pointer_y);

    session.start_drag(&args.source);
    session.hover(args.target.as_deref());

    if let Some(feedback) = session.feedback(&tree, point) {
        eprintln!(
            "   over {} → {} ({})",
            feedback.over_id.bright_white(),
            feedback.position,
            if feedback.accepted {
                "accepted".green()
            } else {
                "rejected".red()
            }
        );
    }

    match session.drop(&tree, point) {
        DropOutcome::Moved { root, request } => {
            eprintln!(
                "{} Moved {} {} {}",
                "✓".green(),
                request.source_id.bright_white(),
                request.position,
                request.target_id.bright_white()
            );
            emit(&config.to_json(&root)?, args.output.as_ref())
        }
        DropOutcome::Unchanged { request } => {
            eprintln!(
                "{} {} {} {} leaves the tree unchanged",
                "•".yellow(),
                request.source_id,
                request.position,
                request.target_id
            );
            Ok(())
        }
        DropOutcome::Rejected { error, .. } => {
            eprintln!("{} Drop rejected: {}", "✗".red(), error);
            Ok(())
        }
        DropOutcome::NoTarget | DropOutcome::Idle => {
            eprintln!("{} Released over no target", "•".yellow());
            Ok(())
        }
    }
}
