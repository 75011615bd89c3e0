use netobj_core::{AddressLiteral, Name, NameError};
use serde::Serialize;

use crate::platform::Platform;

/// A named address object ready for command generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressRecord {
    pub name: Name,
    pub address: AddressLiteral,
}

/// An address group and its ordered member references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupRecord {
    pub group: Name,
    pub members: Vec<Name>,
}

/// Render the command that creates one address object.
pub fn generate_address_command(platform: Platform, name: &Name, cidr: &AddressLiteral) -> String {
    format!(
        "{} address {name} ip-netmask {cidr}",
        platform.command_prefix()
    )
}

/// Render one `static` membership command per member of `group`.
///
/// Members are trimmed and blank entries are skipped. The first member that
/// is not a valid name fails the whole call, so no partial list is returned.
pub fn generate_group_commands<S: AsRef<str>>(
    platform: Platform,
    group: &Name,
    members: &[S],
) -> Result<Vec<String>, NameError> {
    let mut commands = Vec::with_capacity(members.len());
    for member in members {
        let member = member.as_ref().trim();
        if member.is_empty() {
            continue;
        }
        let member = Name::parse(member)?;
        commands.push(format!(
            "{} address-group {group} static {member}",
            platform.command_prefix()
        ));
    }
    Ok(commands)
}

/// Commands for a whole batch of address records, in input order.
pub fn address_commands(platform: Platform, records: &[AddressRecord]) -> Vec<String> {
    records
        .iter()
        .map(|r| generate_address_command(platform, &r.name, &r.address))
        .collect()
}

/// Commands for a whole batch of groups, in input order.
pub fn group_commands(platform: Platform, groups: &[GroupRecord]) -> Result<Vec<String>, NameError> {
    let mut commands = Vec::new();
    for record in groups {
        commands.extend(generate_group_commands(platform, &record.group, &record.members)?);
    }
    Ok(commands)
}
