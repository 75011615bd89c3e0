use std::fmt::{self, Display, Formatter};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use ipnet::IpNet;
use serde::Serialize;
use thiserror::Error;

/// A candidate IP or CIDR literal could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// Input was empty after trimming.
    #[error("IP address must not be empty")]
    Empty,
    /// Input was not a valid address or network.
    #[error("invalid IP address: \"{0}\"")]
    Invalid(String),
}

/// Canonical `<ip>/<prefixlen>` form of an address or network.
///
/// Bare addresses become host routes (`/32` or `/128`). Networks given with
/// host bits set are reduced to their network address, keeping the prefix.
/// An IPv6 zone id (`fe80::1%eth0`) is carried through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct AddressLiteral {
    net: IpNet,
    zone: Option<String>,
    text: String,
}

impl AddressLiteral {
    /// Validate and normalize an IPv4/IPv6 address or CIDR literal.
    ///
    /// Surrounding whitespace is ignored. The mask may be a prefix length or,
    /// for IPv4, a dotted netmask (`255.255.255.0`) or hostmask (`0.0.0.255`).
    pub fn normalize(value: &str) -> Result<Self, AddressError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(AddressError::Empty);
        }
        let invalid = || AddressError::Invalid(value.to_string());

        let (addr, mask) = match trimmed.split_once('/') {
            Some((addr, mask)) => (addr, Some(mask)),
            None => (trimmed, None),
        };
        let (addr, zone) = parse_addr(addr).ok_or_else(invalid)?;
        let net = match mask {
            Some(mask) => {
                let prefix = parse_mask(addr, mask).ok_or_else(invalid)?;
                IpNet::new(addr, prefix).map_err(|_| invalid())?.trunc()
            }
            None => IpNet::new(addr, host_prefix(addr)).map_err(|_| invalid())?,
        };

        let text = match &zone {
            Some(zone) => format!("{}%{zone}/{}", net.addr(), net.prefix_len()),
            None => format!("{}/{}", net.addr(), net.prefix_len()),
        };
        Ok(Self { net, zone, text })
    }

    /// The canonical `<ip>/<prefixlen>` text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The network without any zone id.
    pub fn network(&self) -> IpNet {
        self.net
    }

    pub fn zone(&self) -> Option<&str> {
        self.zone.as_deref()
    }

    pub fn prefix_len(&self) -> u8 {
        self.net.prefix_len()
    }

    pub fn is_ipv4(&self) -> bool {
        matches!(self.net, IpNet::V4(_))
    }
}

/// Parse an address with an optional IPv6 zone id suffix.
fn parse_addr(text: &str) -> Option<(IpAddr, Option<String>)> {
    let Some((addr, zone)) = text.split_once('%') else {
        return Some((text.parse().ok()?, None));
    };
    if zone.is_empty() || zone.contains('%') || zone.chars().any(char::is_whitespace) {
        return None;
    }
    let addr: Ipv6Addr = addr.parse().ok()?;
    Some((IpAddr::V6(addr), Some(zone.to_string())))
}

fn host_prefix(addr: IpAddr) -> u8 {
    match addr {
        IpAddr::V4(_) => 32,
        IpAddr::V6(_) => 128,
    }
}

fn parse_mask(addr: IpAddr, mask: &str) -> Option<u8> {
    if !mask.is_empty() && mask.bytes().all(|b| b.is_ascii_digit()) {
        return mask.parse().ok();
    }
    // Only IPv4 accepts the dotted spellings; netmask is tried before hostmask.
    match addr {
        IpAddr::V4(_) => {
            let mask: Ipv4Addr = mask.parse().ok()?;
            ipnet::ipv4_mask_to_prefix(mask)
                .or_else(|_| ipnet::ipv4_mask_to_prefix(Ipv4Addr::from(!u32::from(mask))))
                .ok()
        }
        IpAddr::V6(_) => None,
    }
}

impl Display for AddressLiteral {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for AddressLiteral {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl From<AddressLiteral> for String {
    fn from(value: AddressLiteral) -> Self {
        value.text
    }
}

impl FromStr for AddressLiteral {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::normalize(s)
    }
}
