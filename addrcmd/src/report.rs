use colored::Colorize;
use netobj_core::join_lines;
use serde::{Deserialize, Serialize};

use crate::generate::{AddressRecord, GroupRecord};
use crate::platform::Platform;

/// How generated commands are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Bare command lines, directly pasteable.
    #[default]
    Text,
    /// Records and commands as a JSON document.
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    Address,
    Group,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Records {
    Address(Vec<AddressRecord>),
    Group(Vec<GroupRecord>),
}

/// Result of one generation action.
#[derive(Debug, Clone, Serialize)]
pub struct CommandReport {
    pub platform: Platform,
    pub kind: ObjectKind,
    pub records: Records,
    pub commands: Vec<String>,
}

impl CommandReport {
    pub fn addresses(platform: Platform, records: Vec<AddressRecord>, commands: Vec<String>) -> Self {
        Self {
            platform,
            kind: ObjectKind::Address,
            records: Records::Address(records),
            commands,
        }
    }

    pub fn groups(platform: Platform, records: Vec<GroupRecord>, commands: Vec<String>) -> Self {
        Self {
            platform,
            kind: ObjectKind::Group,
            records: Records::Group(records),
            commands,
        }
    }
}

/// Output lines for a report. Text output is exactly the command lines; JSON
/// output is a single pretty-printed document.
pub fn render_lines(
    report: &CommandReport,
    format: ReportFormat,
) -> Result<Vec<String>, serde_json::Error> {
    match format {
        ReportFormat::Text => Ok(report.commands.clone()),
        ReportFormat::Json => Ok(vec![serde_json::to_string_pretty(report)?]),
    }
}

/// Render a report in the requested format, each line newline-terminated.
pub fn render(report: &CommandReport, format: ReportFormat) -> Result<String, serde_json::Error> {
    Ok(join_lines(&render_lines(report, format)?))
}

/// One-line summary for the terminal.
pub fn render_summary(report: &CommandReport) -> String {
    let (count, noun) = match &report.records {
        Records::Address(r) => (r.len(), "address objects"),
        Records::Group(r) => (r.len(), "address groups"),
    };
    format!(
        "generated {} commands for {count} {noun} (platform={})",
        report.commands.len(),
        report.platform
    )
    .cyan()
    .to_string()
}

#[cfg(test)]
mod tests {
    use netobj_core::{AddressLiteral, Name};
    use serde_json::Value;

    use super::{render, CommandReport, ReportFormat};
    use crate::generate::{address_commands, AddressRecord};
    use crate::platform::Platform;

    fn report() -> CommandReport {
        let records = vec![AddressRecord {
            name: Name::parse("web1").expect("name"),
            address: AddressLiteral::normalize("10.0.0.1").expect("address"),
        }];
        let commands = address_commands(Platform::Panorama, &records);
        CommandReport::addresses(Platform::Panorama, records, commands)
    }

    #[test]
    fn text_is_just_the_commands() {
        let out = render(&report(), ReportFormat::Text).expect("render");
        assert_eq!(out, "set shared address web1 ip-netmask 10.0.0.1/32\n");
    }

    #[test]
    fn json_carries_records_and_commands() {
        let out = render(&report(), ReportFormat::Json).expect("render");
        let value: Value = serde_json::from_str(&out).expect("json");
        assert_eq!(value["platform"], "panorama");
        assert_eq!(value["kind"], "address");
        assert_eq!(value["records"][0]["name"], "web1");
        assert_eq!(value["records"][0]["address"], "10.0.0.1/32");
        assert_eq!(
            value["commands"][0],
            "set shared address web1 ip-netmask 10.0.0.1/32"
        );
    }
}
