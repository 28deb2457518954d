use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A Python interpreter version (e.g. `3.11.4`).
///
/// Ordering is derived so minimum-version requirements can be checked
/// with plain comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PythonVersion {
    pub major: u32,
    pub minor: u32,
    #[serde(default)]
    pub patch: u32,
}

impl PythonVersion {
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl fmt::Display for PythonVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for PythonVersion {
    type Err = Error;

    /// Parses `"3.11"` or `"3.11.4"`. Trailing pre-release tags are rejected.
    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.trim().splitn(3, '.');
        let major = parse_part(parts.next(), s)?;
        let minor = parse_part(parts.next(), s)?;
        let patch = match parts.next() {
            Some(p) => p
                .parse()
                .map_err(|_| Error::Other(format!("invalid version string: {s}")))?,
            None => 0,
        };
        Ok(Self {
            major,
            minor,
            patch,
        })
    }
}

fn parse_part(part: Option<&str>, original: &str) -> Result<u32> {
    part.and_then(|p| p.parse().ok())
        .ok_or_else(|| Error::Other(format!("invalid version string: {original}")))
}
