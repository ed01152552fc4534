//! Layout loading operations.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use layout_model::{CURRENT_FILE_VERSION, LayoutFile};

use crate::error::{LayoutError, Result};
use crate::io::shape::{decode_layout, probe_envelope, strip_bom};

/// Load a layout from an in-memory buffer.
///
/// The envelope is probed first. A file version other than
/// [`CURRENT_FILE_VERSION`] fails with [`LayoutError::VersionMismatch`]
/// unless `force_load` is set. Bare-array files have no envelope and are
/// never gated.
pub fn load_layout_bytes(bytes: &[u8], force_load: bool) -> Result<LayoutFile> {
    let bytes = strip_bom(bytes);

    if let Some(envelope) = probe_envelope(bytes)?
        && !envelope.is_current()
    {
        if !force_load {
            return Err(LayoutError::VersionMismatch {
                found: envelope.file_version,
                expected: CURRENT_FILE_VERSION,
            });
        }
        tracing::warn!(
            found = envelope.file_version,
            expected = CURRENT_FILE_VERSION,
            "Forcing load of layout with mismatched file version"
        );
    }

    let decoded = decode_layout(bytes)?;
    tracing::debug!(
        shape = ?decoded.shape(),
        objects = decoded.objects().len(),
        "Decoded layout"
    );
    Ok(decoded.into_layout())
}

/// Load a layout from a stream.
///
/// The stream is buffered in full: the envelope probe and the decode
/// attempts each read the document from the start.
pub fn load_layout<R: Read>(mut reader: R, force_load: bool) -> Result<LayoutFile> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| LayoutError::Stream {
            operation: "read",
            source: e,
        })?;
    load_layout_bytes(&bytes, force_load)
}

/// Load a layout from a file.
pub fn load_layout_file(path: &Path, force_load: bool) -> Result<LayoutFile> {
    let bytes = fs::read(path).map_err(|e| LayoutError::Io {
        operation: "read",
        path: path.to_path_buf(),
        source: e,
    })?;

    let layout = load_layout_bytes(&bytes, force_load)?;
    tracing::info!(
        objects = layout.len(),
        file_version = layout.file_version(),
        "Loaded layout from {}",
        path.display()
    );
    Ok(layout)
}

/// Load a layout asynchronously.
///
/// Spawns the load operation on a blocking thread pool to avoid
/// blocking the async runtime.
pub async fn load_layout_file_async(path: PathBuf, force_load: bool) -> Result<LayoutFile> {
    tokio::task::spawn_blocking(move || load_layout_file(&path, force_load))
        .await
        .map_err(|e| LayoutError::Task { source: e })?
}
