use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Target configuration scope; selects the command dialect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Standalone firewall: `set address ...`.
    #[default]
    Firewall,
    /// Central manager shared scope: `set shared address ...`.
    Panorama,
}

impl Platform {
    /// Leading words shared by every command in this dialect.
    pub fn command_prefix(self) -> &'static str {
        match self {
            Platform::Firewall => "set",
            Platform::Panorama => "set shared",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Firewall => "firewall",
            Platform::Panorama => "panorama",
        }
    }
}

impl Display for Platform {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
