//! Validation and batch-reading primitives for firewall address objects.
//!
//! - [`name`]: object names (no whitespace, no `/`)
//! - [`address`]: IPv4/IPv6 address and CIDR normalization to `<ip>/<prefixlen>`
//! - [`reader`]: csv and line-oriented batch readers
//! - [`writer`]: newline-joined output

pub mod address;
pub mod name;
pub mod reader;
pub mod writer;

pub use address::{AddressError, AddressLiteral};
pub use name::{Name, NameError, NameRule};
pub use reader::{parse_batch, read_batch, Batch, ReadError, RecordFormat, Row};
pub use writer::{join_lines, write_lines, WriteError};
