pub mod check;
pub mod drag;
pub mod flatten;
pub mod init;
pub mod move_node;
pub mod resolve;
pub mod validate;

pub use check::{check, CheckArgs};
pub use drag::{drag, DragArgs};
pub use flatten::{flatten, FlattenArgs};
pub use init::{init, InitArgs};
pub use move_node::{move_node, MoveArgs};
pub use resolve::{resolve, ResolveArgs};
pub use validate::{validate, ValidateArgs};

use anyhow::{Context, Result};
use sitecraft_tree::{validate_tree, ComponentNode};
use std::path::{Path, PathBuf};

/// Read a tree snapshot and check its ids
pub fn load_tree(path: &Path) -> Result<ComponentNode> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read tree file {}", path.display()))?;
    let tree: ComponentNode = serde_json::from_str(&content)
        .with_context(|| format!("Invalid tree JSON in {}", path.display()))?;
    validate_tree(&tree)?;

    tracing::debug!("Loaded {} nodes from {}", tree.node_count(), path.display());
    Ok(tree)
}

/// Print JSON to stdout, or write it to `output`
pub fn emit(json: &str, output: Option<&PathBuf>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("Cannot write {}", path.display()))?;
        }
        None => println!("{}", json),
    }
    Ok(())
}
