use std::path::Path;

use anyhow::{Context, Result};
use netobj_core::{read_batch, Batch};

/// Rows from `file` when given, otherwise the inline values, one row each.
pub fn load_source(file: Option<&Path>, inline: &[String]) -> Result<Batch> {
    match file {
        Some(path) => {
            read_batch(path).with_context(|| format!("failed to read {}", path.display()))
        }
        None => Ok(Batch::from_lines(inline.iter().cloned())),
    }
}
