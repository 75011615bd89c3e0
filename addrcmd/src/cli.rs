use std::path::PathBuf;

use addrcmd::platform::Platform;
use addrcmd::report::ReportFormat;
use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "addrcmd")]
#[command(about = "Generate address and address-group configuration commands")]
pub struct Cli {
    /// Show debug logging on stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Generate address-object commands from paired names and addresses.
    Address(AddressArgs),
    /// Generate address-group membership commands from paired groups and members.
    Group(GroupArgs),
    /// Validate object names.
    CheckName(CheckNameArgs),
    /// Print addresses in canonical `<ip>/<prefixlen>` form.
    Normalize(NormalizeArgs),
}

#[derive(Clone, Copy, Debug, ValueEnum, PartialEq, Eq)]
pub enum PlatformArg {
    Firewall,
    Panorama,
}

impl From<PlatformArg> for Platform {
    fn from(value: PlatformArg) -> Self {
        match value {
            PlatformArg::Firewall => Platform::Firewall,
            PlatformArg::Panorama => Platform::Panorama,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl From<OutputFormat> for ReportFormat {
    fn from(value: OutputFormat) -> Self {
        match value {
            OutputFormat::Text => ReportFormat::Text,
            OutputFormat::Json => ReportFormat::Json,
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// Command dialect (defaults to the settings file, then firewall).
    #[arg(long, value_enum)]
    pub platform: Option<PlatformArg>,
    /// Output format (defaults to the settings file, then text).
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
    /// Write output to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// TOML settings file with `platform` and `format` defaults.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct AddressArgs {
    /// Names file (.csv: first column; otherwise one name per line).
    #[arg(long, conflicts_with = "names", required_unless_present = "names")]
    pub names_file: Option<PathBuf>,
    /// Object name; repeat once per object.
    #[arg(long = "name")]
    pub names: Vec<String>,
    /// Addresses file (.csv: first column; otherwise one IP or CIDR per line).
    #[arg(long, conflicts_with = "addresses", required_unless_present = "addresses")]
    pub addresses_file: Option<PathBuf>,
    /// IP or CIDR; repeat once per object, in the same order as the names.
    #[arg(long = "address")]
    pub addresses: Vec<String>,
    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Parser, Debug)]
pub struct GroupArgs {
    /// Group names file (.csv: first column; otherwise one name per line).
    #[arg(long, conflicts_with = "groups", required_unless_present = "groups")]
    pub groups_file: Option<PathBuf>,
    /// Group name; repeat once per group.
    #[arg(long = "group")]
    pub groups: Vec<String>,
    /// Members file (.csv: second column on; otherwise comma-separated per line).
    #[arg(long, conflicts_with = "members", required_unless_present = "members")]
    pub members_file: Option<PathBuf>,
    /// Comma-separated members of one group; repeat once per group.
    #[arg(long = "members")]
    pub members: Vec<String>,
    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Parser, Debug)]
pub struct CheckNameArgs {
    #[arg(required = true)]
    pub names: Vec<String>,
}

#[derive(Parser, Debug)]
pub struct NormalizeArgs {
    #[arg(required = true)]
    pub addresses: Vec<String>,
}
