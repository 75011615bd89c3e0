use anyhow::Result;
use clap::Parser;

mod address_cmd;
mod check_cmd;
mod cli;
mod group_cmd;
mod logging;
mod output;
mod path_guard;
mod source;

use cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Command::Address(args) => address_cmd::run_address(args),
        Command::Group(args) => group_cmd::run_group(args),
        Command::CheckName(args) => check_cmd::run_check_name(args),
        Command::Normalize(args) => check_cmd::run_normalize(args),
    }
}
