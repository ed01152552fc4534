//! Layout saving operations.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use layout_model::{LayoutFile, PlacedObject, VersionEnvelope};
use serde::Serialize;

use crate::error::{LayoutError, Result};

/// Borrowed view of a container, for writing objects without cloning them.
#[derive(Serialize)]
struct LayoutFileRef<'a> {
    #[serde(flatten)]
    envelope: &'a VersionEnvelope,

    #[serde(rename = "Objects")]
    objects: &'a [PlacedObject],
}

/// Reject objects that would be written as text the loader refuses.
fn validate_objects(objects: &[PlacedObject]) -> Result<()> {
    for (index, object) in objects.iter().enumerate() {
        object
            .validate()
            .map_err(|source| LayoutError::InvalidObject {
                index,
                identifier: object.identifier.clone(),
                source,
            })?;
    }
    Ok(())
}

fn write_layout<W: Write>(layout: &LayoutFileRef<'_>, mut writer: W) -> Result<()> {
    validate_objects(layout.objects)?;
    serde_json::to_writer_pretty(&mut writer, layout)
        .map_err(|e| LayoutError::Serialization { source: e })?;
    writer.flush().map_err(|e| LayoutError::Stream {
        operation: "write",
        source: e,
    })
}

/// Save a layout to a stream.
///
/// The envelope is re-stamped with the current file version and time first.
/// Objects with a NaN or infinite position, radius or influence range fail
/// with [`LayoutError::InvalidObject`] before anything is written. A failure
/// part way through leaves the stream truncated.
pub fn save_layout<W: Write>(layout: &mut LayoutFile, writer: W) -> Result<()> {
    layout.stamp();
    write_layout(
        &LayoutFileRef {
            envelope: &layout.envelope,
            objects: &layout.objects,
        },
        writer,
    )
}

/// Save a list of objects as a new layout.
pub fn save_objects<W: Write>(objects: &[PlacedObject], writer: W) -> Result<()> {
    let envelope = VersionEnvelope::current();
    write_layout(
        &LayoutFileRef {
            envelope: &envelope,
            objects,
        },
        writer,
    )
}

/// Serialize a layout to bytes (re-stamping it, as [`save_layout`] does).
pub fn layout_to_bytes(layout: &mut LayoutFile) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    save_layout(layout, &mut bytes)?;
    Ok(bytes)
}

/// `<path>.tmp`, next to the target so the rename stays on one filesystem.
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}

/// Save a layout to a file.
///
/// Uses atomic write (temp file + rename) to prevent data corruption
/// on crash or power loss.
pub fn save_layout_file(layout: &mut LayoutFile, path: &Path) -> Result<()> {
    let bytes = layout_to_bytes(layout)?;

    // Write to a temp file first, then rename for atomicity
    let temp_path = temp_path_for(path);

    // Create parent directory if needed
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| LayoutError::Io {
            operation: "create directory",
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let mut file = File::create(&temp_path).map_err(|e| LayoutError::Io {
        operation: "create",
        path: temp_path.clone(),
        source: e,
    })?;

    file.write_all(&bytes).map_err(|e| LayoutError::Io {
        operation: "write",
        path: temp_path.clone(),
        source: e,
    })?;

    file.sync_all().map_err(|e| LayoutError::Io {
        operation: "sync",
        path: temp_path.clone(),
        source: e,
    })?;

    // Atomic rename
    fs::rename(&temp_path, path).map_err(|e| LayoutError::AtomicWriteFailed {
        temp_path: temp_path.clone(),
        target_path: path.to_path_buf(),
        source: e,
    })?;

    tracing::info!(
        objects = layout.len(),
        "Saved layout to {}",
        path.display()
    );
    Ok(())
}

/// Save a layout asynchronously.
///
/// Spawns the save operation on a blocking thread pool to avoid
/// blocking the async runtime. Returns the re-stamped layout.
pub async fn save_layout_file_async(layout: LayoutFile, path: PathBuf) -> Result<LayoutFile> {
    tokio::task::spawn_blocking(move || {
        let mut layout = layout;
        save_layout_file(&mut layout, &path).map(|()| layout)
    })
    .await
    .map_err(|e| LayoutError::Task { source: e })?
}
