use std::path::Path;

use addrcmd::platform::Platform;
use addrcmd::report::{render_lines, render_summary, CommandReport, ReportFormat};
use addrcmd::settings::{load_settings, Settings};
use anyhow::{Context, Result};
use netobj_core::{join_lines, write_lines};
use tracing::{debug, info};

use crate::cli::OutputArgs;
use crate::path_guard;

/// Platform and format for one generation action: flag, then settings file,
/// then built-in default.
pub fn resolve(args: &OutputArgs) -> Result<(Platform, ReportFormat)> {
    let settings = match &args.config {
        Some(path) => {
            let settings = load_settings(path)?;
            debug!(path = %path.display(), "loaded settings");
            settings
        }
        None => Settings::default(),
    };
    Ok((
        settings.platform_or(args.platform.map(Into::into)),
        settings.format_or(args.format.map(Into::into)),
    ))
}

/// Render `report` to stdout or the `--output` file. `inputs` are the files
/// the batch was read from; the output may not overwrite any of them.
pub fn emit(
    report: &CommandReport,
    format: ReportFormat,
    output: Option<&Path>,
    inputs: &[&Path],
) -> Result<()> {
    let lines = render_lines(report, format)?;

    match output {
        Some(path) => {
            path_guard::ensure_output_not_input(path, inputs)?;
            write_lines(&lines, path)
                .with_context(|| format!("failed to save commands to {}", path.display()))?;
            info!(path = %path.display(), "{}", render_summary(report));
        }
        None => {
            print!("{}", join_lines(&lines));
            info!("{}", render_summary(report));
        }
    }
    Ok(())
}
