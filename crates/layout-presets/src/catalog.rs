//! Lookup service handed to components that resolve presets.

use std::path::Path;

use layout_model::{Color, PlacedObject};

use crate::buildings::{BuildingPreset, BuildingPresets};
use crate::colors::ColorPresets;
use crate::error::Result;

/// Read-only access to building and color presets.
pub trait PresetCatalog {
    /// Building preset for an identifier (case-insensitive).
    fn building(&self, identifier: &str) -> Option<&BuildingPreset>;

    /// Color for an object under the named scheme.
    fn color_for(&self, scheme: &str, object: &PlacedObject) -> Option<Color>;

    /// Display name for an identifier, if the catalog knows it.
    fn display_name(&self, identifier: &str) -> Option<&str> {
        self.building(identifier).map(|preset| preset.name.as_str())
    }
}

/// Building and color presets loaded together.
#[derive(Debug, Clone, Default)]
pub struct PresetLibrary {
    buildings: BuildingPresets,
    colors: ColorPresets,
}

impl PresetLibrary {
    pub fn new(buildings: BuildingPresets, colors: ColorPresets) -> Self {
        Self { buildings, colors }
    }

    /// Load from `presets.json` and, optionally, `colors.json`.
    pub fn load(buildings: &Path, colors: Option<&Path>) -> Result<Self> {
        let buildings = BuildingPresets::from_path(buildings)?;
        let colors = match colors {
            Some(path) => ColorPresets::from_path(path)?,
            None => ColorPresets::default(),
        };
        Ok(Self::new(buildings, colors))
    }

    pub fn buildings(&self) -> &BuildingPresets {
        &self.buildings
    }

    pub fn colors(&self) -> &ColorPresets {
        &self.colors
    }
}

impl PresetCatalog for PresetLibrary {
    fn building(&self, identifier: &str) -> Option<&BuildingPreset> {
        self.buildings.get(identifier)
    }

    fn color_for(&self, scheme: &str, object: &PlacedObject) -> Option<Color> {
        self.colors.scheme(scheme)?.color_for(object)
    }
}
