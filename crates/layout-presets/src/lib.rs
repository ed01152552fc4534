//! Building and color presets.
//!
//! The designer ships two catalogs next to the executable:
//!
//! - `presets.json` - every placeable building with its footprint,
//!   influence and icon
//! - `colors.json` - color schemes mapping templates or identifiers to colors
//!
//! Both are loaded once into a [`PresetLibrary`] and passed to whatever needs
//! them. There is no global instance.

mod buildings;
mod catalog;
mod colors;
mod error;

pub use buildings::{BuildBlocker, BuildingPreset, BuildingPresets};
pub use catalog::{PresetCatalog, PresetLibrary};
pub use colors::{ColorPresets, ColorScheme, PredefinedColor};
pub use error::{PresetError, Result};
