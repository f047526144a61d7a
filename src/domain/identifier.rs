//! Globally unique identifiers for product ids and upgrade codes

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// A 128-bit random identifier, rendered the way installer markup expects
/// (uppercase, hyphenated).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identifier(Uuid);

impl Identifier {
    /// Generate a fresh identifier
    pub fn new() -> Self {
        Identifier(Uuid::new_v4())
    }

    /// The all-zero identifier. Treated as "no identifier" by validation.
    pub fn nil() -> Self {
        Identifier(Uuid::nil())
    }

    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }

    /// Braced form, e.g. `{0C8C3E4A-...}`
    pub fn braced(&self) -> String {
        format!("{{{}}}", self)
    }
}

impl Default for Identifier {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = Uuid::encode_buffer();
        f.write_str(self.0.hyphenated().encode_upper(&mut buf))
    }
}

impl FromStr for Identifier {
    type Err = String;

    /// Accepts plain or braced GUIDs in any case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('{')
            .and_then(|rest| rest.strip_suffix('}'))
            .unwrap_or(trimmed);

        Uuid::parse_str(inner)
            .map(Identifier)
            .map_err(|e| format!("Invalid identifier '{}': {}", s, e))
    }
}

impl TryFrom<String> for Identifier {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Identifier> for String {
    fn from(value: Identifier) -> Self {
        value.to_string()
    }
}
