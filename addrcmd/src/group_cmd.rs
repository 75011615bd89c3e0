use std::path::Path;

use addrcmd::generate::group_commands;
use addrcmd::import::import_groups;
use addrcmd::report::CommandReport;
use anyhow::{Context, Result};
use tracing::debug;

use crate::cli::GroupArgs;
use crate::output;
use crate::source::load_source;

pub fn run_group(args: GroupArgs) -> Result<()> {
    let (platform, format) = output::resolve(&args.output)?;

    let groups = load_source(args.groups_file.as_deref(), &args.groups)?;
    let members = load_source(args.members_file.as_deref(), &args.members)?;
    debug!(
        groups = groups.len(),
        member_rows = members.len(),
        "read group sources"
    );

    let records = import_groups(&groups, &members).context("group import rejected")?;
    let commands = group_commands(platform, &records).context("invalid group member")?;
    let report = CommandReport::groups(platform, records, commands);

    let inputs: Vec<&Path> = [args.groups_file.as_deref(), args.members_file.as_deref()]
        .into_iter()
        .flatten()
        .collect();
    output::emit(&report, format, args.output.output.as_deref(), &inputs)
}
