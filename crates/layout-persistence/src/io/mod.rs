//! File I/O operations for layout persistence.
//!
//! This module handles:
//! - Probing the version envelope and classifying the file generation
//! - Loading layouts with the version gate and legacy fallback
//! - Saving layouts with atomic writes

mod load;
mod save;
mod shape;

pub use load::{load_layout, load_layout_bytes, load_layout_file, load_layout_file_async};
pub use save::{
    layout_to_bytes, save_layout, save_layout_file, save_layout_file_async, save_objects,
};
pub use shape::{DecodedLayout, LayoutShape, decode_layout, detect_shape, probe_envelope};

/// Extension of layout files written by the designer.
pub const LAYOUT_FILE_EXTENSION: &str = "ad";
