//! Version envelope written at the top of every layout file.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::version::LayoutVersion;

/// Current file format revision.
///
/// Increment this when making breaking changes to the layout format.
/// The loader refuses other versions unless the caller forces the load.
pub const CURRENT_FILE_VERSION: u32 = 3;

/// File version assigned to bare-array layouts, which carry no envelope.
pub const LEGACY_FILE_VERSION: u32 = 1;

/// Header fields of a layout file.
///
/// Decodes on its own from a full layout document: every other field is
/// ignored, so the envelope of a newer or partly unknown file can still be
/// inspected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VersionEnvelope {
    /// Format revision, compared against [`CURRENT_FILE_VERSION`].
    pub file_version: u32,

    /// Schema version (informational).
    #[serde(default)]
    pub layout_version: LayoutVersion,

    /// When the layout was last written.
    #[serde(default = "unix_epoch", with = "timestamp")]
    pub modified: DateTime<Utc>,
}

impl VersionEnvelope {
    /// Envelope for a new layout, stamped with the current version and time.
    pub fn current() -> Self {
        Self {
            file_version: CURRENT_FILE_VERSION,
            layout_version: LayoutVersion::default(),
            modified: Utc::now(),
        }
    }

    /// Envelope assumed for layouts stored without one.
    pub fn legacy() -> Self {
        Self {
            file_version: LEGACY_FILE_VERSION,
            layout_version: LayoutVersion::default(),
            modified: unix_epoch(),
        }
    }

    /// Re-stamp the file version and modification time for saving.
    pub fn stamp(&mut self) {
        self.file_version = CURRENT_FILE_VERSION;
        self.modified = Utc::now();
    }

    /// Whether the file version matches [`CURRENT_FILE_VERSION`].
    #[inline]
    pub fn is_current(&self) -> bool {
        self.file_version == CURRENT_FILE_VERSION
    }
}

impl Default for VersionEnvelope {
    fn default() -> Self {
        Self::current()
    }
}

fn unix_epoch() -> DateTime<Utc> {
    DateTime::UNIX_EPOCH
}

/// RFC 3339 timestamps; values written without an offset are read as UTC.
mod timestamp {
    use super::{DateTime, NaiveDateTime, Utc};
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &DateTime<Utc>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.to_rfc3339_opts(chrono::SecondsFormat::AutoSi, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let text = String::deserialize(deserializer)?;
        if let Ok(parsed) = DateTime::parse_from_rfc3339(&text) {
            return Ok(parsed.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(&text, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|naive| naive.and_utc())
            .map_err(|e| D::Error::custom(format!("invalid timestamp '{text}': {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_current_envelope() {
        let envelope = VersionEnvelope::current();
        assert!(envelope.is_current());
        assert_eq!(envelope.layout_version, LayoutVersion::new(1, 0, 0, 0));
    }

    #[test]
    fn test_envelope_ignores_other_fields() {
        let json = r#"{
            "FileVersion": 7,
            "LayoutVersion": "2.0.0.0",
            "Modified": "2021-03-04T05:06:07Z",
            "Objects": [{"Unknown": {"Nested": true}}],
            "SomethingNew": 42
        }"#;
        let envelope: VersionEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.file_version, 7);
        assert_eq!(envelope.layout_version, LayoutVersion::new(2, 0, 0, 0));
        assert_eq!(
            envelope.modified,
            Utc.with_ymd_and_hms(2021, 3, 4, 5, 6, 7).unwrap()
        );
    }

    #[test]
    fn test_timestamp_without_offset_is_utc() {
        let json = r#"{"FileVersion": 3, "Modified": "2020-01-02T03:04:05.1234567"}"#;
        let envelope: VersionEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.modified.timestamp(), 1_577_934_245);
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let envelope: VersionEnvelope = serde_json::from_str(r#"{"FileVersion": 2}"#).unwrap();
        assert_eq!(envelope.file_version, 2);
        assert_eq!(envelope.layout_version, LayoutVersion::default());
        assert_eq!(envelope.modified, DateTime::UNIX_EPOCH);
    }

    #[test]
    fn test_file_version_required() {
        assert!(serde_json::from_str::<VersionEnvelope>(r#"{"Objects": []}"#).is_err());
    }

    #[test]
    fn test_stamp_restamps_version() {
        let mut envelope = VersionEnvelope::legacy();
        assert!(!envelope.is_current());
        envelope.stamp();
        assert!(envelope.is_current());
        assert!(envelope.modified > DateTime::UNIX_EPOCH);
    }
}
