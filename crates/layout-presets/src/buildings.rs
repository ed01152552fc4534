//! Building presets (`presets.json`).

use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use layout_model::{PlacedObject, Point, Size};
use serde::{Deserialize, Serialize};

use crate::error::{PresetError, Result};

/// Footprint of a building (`x` wide, `z` deep).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BuildBlocker {
    pub x: f64,
    pub z: f64,
}

/// One placeable building.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BuildingPreset {
    /// Game header (e.g., "(A7) Anno 1800").
    pub header: String,
    pub faction: String,
    pub group: String,
    pub identifier: String,
    pub name: String,
    pub icon_file_name: Option<String>,
    pub build_blocker: Option<BuildBlocker>,
    pub template: String,
    pub influence_radius: f64,
    pub influence_range: f64,
    pub road: bool,
    pub borderless: bool,
    /// Display names keyed by language code ("eng", "ger", ...).
    pub localization: BTreeMap<String, String>,
}

impl BuildingPreset {
    /// Name in the given language, falling back to `name`.
    pub fn localized_name(&self, language: &str) -> &str {
        self.localization
            .get(language)
            .map_or(self.name.as_str(), String::as_str)
    }

    /// Build a placed object from this preset at `position`.
    ///
    /// Presets without a build blocker get a 1x1 footprint.
    pub fn to_object(&self, position: Point) -> PlacedObject {
        let size = self
            .build_blocker
            .and_then(|blocker| Size::new(blocker.x, blocker.z).ok())
            .unwrap_or_else(|| Size::new(1.0, 1.0).unwrap_or_default());

        PlacedObject {
            identifier: self.identifier.clone(),
            label: self.name.clone(),
            position,
            size,
            icon: self.icon_file_name.clone().unwrap_or_default(),
            template: self.template.clone(),
            radius: self.influence_radius,
            influence_range: self.influence_range,
            road: self.road,
            borderless: self.borderless,
            ..Default::default()
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct BuildingPresetsFile {
    #[serde(default)]
    version: String,
    #[serde(default)]
    buildings: Vec<BuildingPreset>,
}

/// The building catalog, indexed by identifier (case-insensitive).
#[derive(Debug, Clone, Default)]
pub struct BuildingPresets {
    version: String,
    buildings: Vec<BuildingPreset>,
    index: HashMap<String, usize>,
}

impl BuildingPresets {
    /// Build a catalog from a list of presets.
    ///
    /// When identifiers repeat, the first preset wins.
    pub fn new(version: impl Into<String>, buildings: Vec<BuildingPreset>) -> Self {
        let mut index = HashMap::with_capacity(buildings.len());
        for (position, building) in buildings.iter().enumerate() {
            let key = building.identifier.to_lowercase();
            if index.contains_key(&key) {
                tracing::warn!(
                    identifier = %building.identifier,
                    "Duplicate building preset identifier; keeping the first"
                );
                continue;
            }
            index.insert(key, position);
        }

        Self {
            version: version.into(),
            buildings,
            index,
        }
    }

    /// Parse `presets.json` content.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let file: BuildingPresetsFile =
            serde_json::from_reader(reader).map_err(|e| PresetError::Parse {
                catalog: "building",
                source: e,
            })?;
        let presets = Self::new(file.version, file.buildings);
        tracing::debug!(
            version = %presets.version,
            count = presets.len(),
            "Loaded building presets"
        );
        Ok(presets)
    }

    /// Load `presets.json` from disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| PresetError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Look up a preset by identifier.
    pub fn get(&self, identifier: &str) -> Option<&BuildingPreset> {
        self.index
            .get(&identifier.to_lowercase())
            .map(|&position| &self.buildings[position])
    }

    pub fn iter(&self) -> impl Iterator<Item = &BuildingPreset> {
        self.buildings.iter()
    }

    pub fn len(&self) -> usize {
        self.buildings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buildings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRESETS: &str = r#"{
        "Version": "3.4",
        "Buildings": [
            {
                "Header": "(A7) Anno 1800",
                "Faction": "(1) Farmers",
                "Group": "Residence",
                "Identifier": "Residence_Old_World",
                "Name": "Residence",
                "IconFileName": "A7_resident.png",
                "BuildBlocker": {"x": 3, "z": 3},
                "Template": "ResidenceBuilding7",
                "InfluenceRadius": 0,
                "InfluenceRange": 0,
                "Road": false,
                "Borderless": false,
                "Localization": {"eng": "Farmer Residence", "ger": "Bauernhaus"}
            },
            {
                "Identifier": "Lumberjack",
                "Name": "Lumberjack's Hut",
                "BuildBlocker": {"x": 3, "z": 2},
                "Template": "FactoryBuilding7",
                "InfluenceRadius": 7.5
            },
            {
                "Identifier": "lumberjack",
                "Name": "Duplicate"
            }
        ]
    }"#;

    #[test]
    fn test_parse_presets() {
        let presets = BuildingPresets::from_reader(PRESETS.as_bytes()).unwrap();
        assert_eq!(presets.version(), "3.4");
        assert_eq!(presets.len(), 3);
        let residence = presets.get("residence_old_world").unwrap();
        assert_eq!(residence.localized_name("ger"), "Bauernhaus");
        assert_eq!(residence.localized_name("pol"), "Residence");
    }

    #[test]
    fn test_duplicate_identifier_keeps_first() {
        let presets = BuildingPresets::from_reader(PRESETS.as_bytes()).unwrap();
        assert_eq!(presets.get("LUMBERJACK").unwrap().name, "Lumberjack's Hut");
    }

    #[test]
    fn test_to_object_copies_geometry() {
        let presets = BuildingPresets::from_reader(PRESETS.as_bytes()).unwrap();
        let object = presets
            .get("Lumberjack")
            .unwrap()
            .to_object(Point::new(5.0, 6.0));
        assert_eq!(object.identifier, "Lumberjack");
        assert_eq!(object.size, Size::new(3.0, 2.0).unwrap());
        assert_eq!(object.position, Point::new(5.0, 6.0));
        assert_eq!(object.radius, 7.5);
        assert_eq!(object.template, "FactoryBuilding7");
    }

    #[test]
    fn test_missing_blocker_is_single_tile() {
        let preset = BuildingPreset {
            identifier: "Marker".into(),
            ..Default::default()
        };
        let object = preset.to_object(Point::default());
        assert_eq!(object.size, Size::new(1.0, 1.0).unwrap());
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = BuildingPresets::from_path(&dir.path().join("presets.json"));
        assert!(matches!(result, Err(PresetError::Io { .. })));
    }

    #[test]
    fn test_invalid_json() {
        let result = BuildingPresets::from_reader(&b"{ not json"[..]);
        assert!(matches!(result, Err(PresetError::Parse { .. })));
    }
}
