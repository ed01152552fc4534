//! Data model for building layout files.
//!
//! A layout is an ordered list of [`PlacedObject`]s wrapped in a
//! [`LayoutFile`] container. The container carries a [`VersionEnvelope`]
//! (file version, layout version, modification time) that can be decoded
//! on its own, before the rest of the payload is trusted.
//!
//! # File Format
//!
//! Layouts are stored as JSON. The current generation looks like this:
//!
//! ```text
//! {
//!   "FileVersion": 3,
//!   "LayoutVersion": "1.0.0.0",
//!   "Modified": "2024-05-01T12:00:00Z",
//!   "Objects": [ { "Identifier": "...", "Position": "4,7", "Size": "3,3", ... } ]
//! }
//! ```
//!
//! The oldest generation is a bare array of objects with no envelope. The
//! loader in `layout-persistence` reads every generation; this crate only
//! defines the shapes.
//!
//! # Architecture
//!
//! - `geometry` - `Point`, `Size` and `Color` with the designer's encodings
//! - `object` - `PlacedObject` and `GridDirection`
//! - `version` - four-part `LayoutVersion`
//! - `envelope` - `VersionEnvelope` and the file version constants
//! - `layout` - `LayoutFile` container
//! - `ignore` - `IgnoreRule` classifiers used by statistics

mod envelope;
mod error;
mod geometry;
mod ignore;
mod layout;
mod object;
mod version;

pub use envelope::{CURRENT_FILE_VERSION, LEGACY_FILE_VERSION, VersionEnvelope};
pub use error::{ModelError, Result};
pub use geometry::{Color, Point, Size};
pub use ignore::{IgnoreRule, NoIgnore, TemplateIgnoreRule};
pub use layout::LayoutFile;
pub use object::{GridDirection, PlacedObject};
pub use version::LayoutVersion;
