//! Layout container: envelope plus ordered objects.

use serde::{Deserialize, Serialize};

use crate::envelope::VersionEnvelope;
use crate::object::PlacedObject;

/// A complete layout document.
///
/// The envelope fields are written first and `Objects` last. Object order
/// is the drawing order and survives a save/load cycle unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutFile {
    #[serde(flatten)]
    pub envelope: VersionEnvelope,

    #[serde(rename = "Objects")]
    pub objects: Vec<PlacedObject>,
}

impl LayoutFile {
    /// Create a layout stamped with the current file version.
    pub fn new(objects: Vec<PlacedObject>) -> Self {
        Self {
            envelope: VersionEnvelope::current(),
            objects,
        }
    }

    /// Wrap objects read from an envelope-less (bare array) file.
    pub fn from_legacy(objects: Vec<PlacedObject>) -> Self {
        Self {
            envelope: VersionEnvelope::legacy(),
            objects,
        }
    }

    /// Re-stamp the envelope for saving.
    pub fn stamp(&mut self) {
        self.envelope.stamp();
    }

    #[inline]
    pub fn file_version(&self) -> u32 {
        self.envelope.file_version
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Default for LayoutFile {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
