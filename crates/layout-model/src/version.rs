//! Four-part layout version (`major.minor.patch.build`).
//!
//! The designer stamps every layout with the version of its layout schema.
//! It is informational only; compatibility is decided by the integer file
//! version in the envelope.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ModelError, Result};

/// Layout schema version.
///
/// Ordering compares components left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LayoutVersion {
    /// Major version number.
    pub major: u32,
    /// Minor version number.
    pub minor: u32,
    /// Patch version number.
    pub patch: u32,
    /// Build number.
    pub build: u32,
}

impl LayoutVersion {
    #[must_use]
    pub const fn new(major: u32, minor: u32, patch: u32, build: u32) -> Self {
        Self {
            major,
            minor,
            patch,
            build,
        }
    }
}

impl Default for LayoutVersion {
    fn default() -> Self {
        Self::new(1, 0, 0, 0)
    }
}

impl FromStr for LayoutVersion {
    type Err = ModelError;

    /// Accepts two to four dot-separated components; missing ones are zero.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let parts: Vec<&str> = s.split('.').collect();
        if !(2..=4).contains(&parts.len()) {
            return Err(ModelError::InvalidVersion(s.to_string()));
        }

        let mut numbers = [0u32; 4];
        for (slot, part) in numbers.iter_mut().zip(&parts) {
            *slot = part
                .parse()
                .map_err(|_| ModelError::InvalidVersion(s.to_string()))?;
        }

        let [major, minor, patch, build] = numbers;
        Ok(Self::new(major, minor, patch, build))
    }
}

impl fmt::Display for LayoutVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.major, self.minor, self.patch, self.build
        )
    }
}

impl Serialize for LayoutVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for LayoutVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_version() {
        let v = LayoutVersion::from_str("1.2.3.4").unwrap();
        assert_eq!(v, LayoutVersion::new(1, 2, 3, 4));
        assert_eq!(v.to_string(), "1.2.3.4");
    }

    #[test]
    fn test_parse_short_version() {
        let v = LayoutVersion::from_str("2.1").unwrap();
        assert_eq!(v, LayoutVersion::new(2, 1, 0, 0));
    }

    #[test]
    fn test_version_ordering() {
        let a = LayoutVersion::new(1, 0, 0, 9);
        let b = LayoutVersion::new(1, 0, 1, 0);
        let c = LayoutVersion::new(2, 0, 0, 0);
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn test_invalid_version() {
        assert!(LayoutVersion::from_str("1").is_err());
        assert!(LayoutVersion::from_str("1.2.3.4.5").is_err());
        assert!(LayoutVersion::from_str("1.x").is_err());
        assert!(LayoutVersion::from_str("").is_err());
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&LayoutVersion::default()).unwrap();
        assert_eq!(json, "\"1.0.0.0\"");
        let back: LayoutVersion = serde_json::from_str("\"1.0\"").unwrap();
        assert_eq!(back, LayoutVersion::default());
    }
}
