use std::path::Path;

use anyhow::{bail, Context, Result};

/// Refuse to write generated commands over one of the files they were read
/// from.
///
/// Inputs have already been read, so they exist; an output path that does not
/// exist yet cannot alias any of them.
pub fn ensure_output_not_input(output: &Path, inputs: &[&Path]) -> Result<()> {
    if !output.exists() {
        return Ok(());
    }
    let target = output
        .canonicalize()
        .with_context(|| format!("failed to resolve output path {}", output.display()))?;

    for input in inputs {
        let source = input
            .canonicalize()
            .with_context(|| format!("failed to resolve input path {}", input.display()))?;
        if source == target {
            bail!(
                "refusing to overwrite input file: output {} is the same file as {}",
                output.display(),
                input.display()
            );
        }
    }
    Ok(())
}
