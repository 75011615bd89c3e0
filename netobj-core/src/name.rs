use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// Which naming rule a candidate token broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameRule {
    /// The token was empty.
    Empty,
    /// The token contained a whitespace character.
    Whitespace,
    /// The token contained `/`.
    Slash,
}

/// A candidate object name was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid name \"{value}\": {}", describe(.rule))]
pub struct NameError {
    /// The literal that was rejected.
    pub value: String,
    pub rule: NameRule,
}

fn describe(rule: &NameRule) -> &'static str {
    match rule {
        NameRule::Empty => "name must not be empty",
        NameRule::Whitespace | NameRule::Slash => "must not contain whitespace or \"/\"",
    }
}

/// Identifier of an address or address-group object.
///
/// A `Name` is never empty and never contains whitespace or `/`, so it can be
/// spliced into a configuration command without quoting.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    /// Validate `value` as an object name.
    ///
    /// The value is taken as-is; callers that read from files trim first.
    pub fn parse(value: &str) -> Result<Self, NameError> {
        let rule = if value.is_empty() {
            Some(NameRule::Empty)
        } else if value.chars().any(char::is_whitespace) {
            Some(NameRule::Whitespace)
        } else if value.contains('/') {
            Some(NameRule::Slash)
        } else {
            None
        };

        match rule {
            Some(rule) => Err(NameError {
                value: value.to_string(),
                rule,
            }),
            None => Ok(Self(value.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Name {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Name {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
