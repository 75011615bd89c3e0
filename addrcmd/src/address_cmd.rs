use std::path::Path;

use addrcmd::generate::address_commands;
use addrcmd::import::import_addresses;
use addrcmd::report::CommandReport;
use anyhow::{Context, Result};
use tracing::debug;

use crate::cli::AddressArgs;
use crate::output;
use crate::source::load_source;

pub fn run_address(args: AddressArgs) -> Result<()> {
    let (platform, format) = output::resolve(&args.output)?;

    let names = load_source(args.names_file.as_deref(), &args.names)?;
    let addresses = load_source(args.addresses_file.as_deref(), &args.addresses)?;
    debug!(
        names = names.len(),
        addresses = addresses.len(),
        "read address sources"
    );

    let records = import_addresses(&names, &addresses).context("address import rejected")?;
    let commands = address_commands(platform, &records);
    let report = CommandReport::addresses(platform, records, commands);

    let inputs: Vec<&Path> = [args.names_file.as_deref(), args.addresses_file.as_deref()]
        .into_iter()
        .flatten()
        .collect();
    output::emit(&report, format, args.output.output.as_deref(), &inputs)
}
