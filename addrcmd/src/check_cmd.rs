use anyhow::Result;
use netobj_core::{AddressLiteral, Name};

use crate::cli::{CheckNameArgs, NormalizeArgs};

pub fn run_check_name(args: CheckNameArgs) -> Result<()> {
    let names = args
        .names
        .iter()
        .map(|raw| Name::parse(raw))
        .collect::<Result<Vec<_>, _>>()?;

    for name in names {
        println!("ok {name}");
    }
    Ok(())
}

pub fn run_normalize(args: NormalizeArgs) -> Result<()> {
    let addresses = args
        .addresses
        .iter()
        .map(|raw| AddressLiteral::normalize(raw))
        .collect::<Result<Vec<_>, _>>()?;

    for address in addresses {
        println!("{address}");
    }
    Ok(())
}
