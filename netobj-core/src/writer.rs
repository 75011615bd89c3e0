use std::fs;
use std::path::Path;

use thiserror::Error;

/// Errors that can occur while writing generated lines.
#[derive(Debug, Error)]
pub enum WriteError {
    /// Failed to write the output file.
    #[error("failed to write output file: {0}")]
    Io(#[from] std::io::Error),
}

/// Join lines with `\n`, ending with a trailing newline. Empty input yields an
/// empty string.
pub fn join_lines<S: AsRef<str>>(lines: &[S]) -> String {
    let mut out = String::new();
    for line in lines {
        out.push_str(line.as_ref());
        out.push('\n');
    }
    out
}

/// Join `lines` and write them to `path`, replacing any existing content.
pub fn write_lines<S: AsRef<str>>(lines: &[S], path: &Path) -> Result<(), WriteError> {
    fs::write(path, join_lines(lines))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::join_lines;

    #[test]
    fn joins_with_trailing_newline() {
        assert_eq!(join_lines(&["a", "b"]), "a\nb\n");
    }

    #[test]
    fn empty_input_is_empty_output() {
        assert_eq!(join_lines::<&str>(&[]), "");
    }
}
