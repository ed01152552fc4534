//! File generations and their decoders.
//!
//! Layouts went from a bare array of objects to an object with a version
//! envelope. Each generation has its own decode function; [`decode_layout`]
//! tries them in a fixed order.

use layout_model::{LayoutFile, PlacedObject, VersionEnvelope};

use crate::error::{LayoutError, Result};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Top-level shape of a layout document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutShape {
    /// Envelope with named fields (file versions 2 and 3).
    Envelope,
    /// Bare array of objects (file version 1).
    BareArray,
}

/// A successfully decoded layout, tagged with the shape it came from.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedLayout {
    Envelope(LayoutFile),
    BareArray(Vec<PlacedObject>),
}

impl DecodedLayout {
    pub fn shape(&self) -> LayoutShape {
        match self {
            Self::Envelope(_) => LayoutShape::Envelope,
            Self::BareArray(_) => LayoutShape::BareArray,
        }
    }

    pub fn objects(&self) -> &[PlacedObject] {
        match self {
            Self::Envelope(layout) => &layout.objects,
            Self::BareArray(objects) => objects,
        }
    }

    /// Convert into a container; bare arrays get the legacy envelope.
    pub fn into_layout(self) -> LayoutFile {
        match self {
            Self::Envelope(layout) => layout,
            Self::BareArray(objects) => LayoutFile::from_legacy(objects),
        }
    }
}

/// Drop a leading UTF-8 byte order mark; serde_json rejects it.
pub(crate) fn strip_bom(bytes: &[u8]) -> &[u8] {
    bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes)
}

/// Classify the document by its first significant byte.
pub fn detect_shape(bytes: &[u8]) -> Result<LayoutShape> {
    let first = strip_bom(bytes)
        .iter()
        .copied()
        .find(|byte| !byte.is_ascii_whitespace());

    match first {
        Some(b'{') => Ok(LayoutShape::Envelope),
        Some(b'[') => Ok(LayoutShape::BareArray),
        Some(other) => Err(LayoutError::MalformedEnvelope {
            reason: format!("unexpected leading byte 0x{other:02x}"),
            source: None,
        }),
        None => Err(LayoutError::MalformedEnvelope {
            reason: "empty input".to_string(),
            source: None,
        }),
    }
}

/// Decode only the envelope fields.
///
/// Returns `Ok(None)` for bare arrays, which carry no envelope. Fields other
/// than `FileVersion`, `LayoutVersion` and `Modified` are skipped without
/// being interpreted, so files from newer revisions still probe.
pub fn probe_envelope(bytes: &[u8]) -> Result<Option<VersionEnvelope>> {
    match detect_shape(bytes)? {
        LayoutShape::BareArray => Ok(None),
        LayoutShape::Envelope => serde_json::from_slice(strip_bom(bytes))
            .map(Some)
            .map_err(|e| LayoutError::MalformedEnvelope {
                reason: e.to_string(),
                source: Some(e),
            }),
    }
}

fn decode_envelope(bytes: &[u8]) -> serde_json::Result<LayoutFile> {
    serde_json::from_slice(bytes)
}

fn decode_bare_array(bytes: &[u8]) -> serde_json::Result<Vec<PlacedObject>> {
    serde_json::from_slice(bytes)
}

/// Decode the full document: container first, then bare array.
///
/// A container without an `Objects` list fails the first attempt and falls
/// through to the second. When both fail, both errors are returned.
pub fn decode_layout(bytes: &[u8]) -> Result<DecodedLayout> {
    let bytes = strip_bom(bytes);

    let envelope_error = match decode_envelope(bytes) {
        Ok(layout) => return Ok(DecodedLayout::Envelope(layout)),
        Err(e) => e,
    };
    tracing::debug!(error = %envelope_error, "Not a layout container; trying object list");

    match decode_bare_array(bytes) {
        Ok(objects) => Ok(DecodedLayout::BareArray(objects)),
        Err(bare_array) => Err(LayoutError::UnsupportedFormat {
            envelope: envelope_error,
            bare_array,
        }),
    }
}
