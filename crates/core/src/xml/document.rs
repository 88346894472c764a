//! Reading and writing whole documents on disk.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use super::node::{Node, WriteOptions};

/// Load and parse the document stored at `path`.
pub fn load_document(path: impl AsRef<Path>) -> Result<Node> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read document {}", path.display()))?;
    let root = Node::parse(&contents)
        .with_context(|| format!("failed to parse document {}", path.display()))?;
    debug!("loaded <{}> document from {}", root.tag(), path.display());
    Ok(root)
}

/// Write `root` to `path`, creating parent directories if needed.
pub fn save_document(path: impl AsRef<Path>, root: &Node, options: &WriteOptions) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create document directory {}", parent.display()))?;
    }
    if path.exists() {
        warn!("overwriting existing document {}", path.display());
    }

    let serialized = root
        .write_xml(options)
        .with_context(|| format!("failed to serialize <{}> document", root.tag()))?;
    fs::write(path, serialized)
        .with_context(|| format!("failed to write document {}", path.display()))
}
