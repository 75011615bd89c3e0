//! Address-object and address-group command generation.
//!
//! Turns lists of object names and IP/CIDR literals into configuration
//! commands for a standalone firewall (`set address ...`) or the shared scope
//! of a central manager (`set shared address ...`).
//!
//! # Modules
//!
//! - [`platform`]: the two command dialects
//! - [`generate`]: address and address-group command templates
//! - [`import`]: lenient per-source readers and strict positional pairing
//! - [`report`]: text/JSON rendering of generated commands
//! - [`settings`]: optional TOML defaults for platform and format
//!
//! Name and address validation live in `netobj-core`.
//!
//! # Examples
//!
//! ```
//! use addrcmd::generate::generate_address_command;
//! use addrcmd::platform::Platform;
//! use netobj_core::{AddressLiteral, Name};
//!
//! let name = Name::parse("web1").unwrap();
//! let cidr = AddressLiteral::normalize("10.0.0.1").unwrap();
//! assert_eq!(
//!     generate_address_command(Platform::Panorama, &name, &cidr),
//!     "set shared address web1 ip-netmask 10.0.0.1/32"
//! );
//! ```

pub mod generate;
pub mod import;
pub mod platform;
pub mod report;
pub mod settings;
