//! Color schemes (`colors.json`).

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use layout_model::{Color, PlacedObject};
use serde::{Deserialize, Serialize};

use crate::error::{PresetError, Result};

/// A color assigned to a template and/or specific identifiers.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PredefinedColor {
    pub target_template: String,
    pub target_identifiers: Vec<String>,
    pub color: Color,
}

/// Named set of predefined colors.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ColorScheme {
    pub name: String,
    pub colors: Vec<PredefinedColor>,
}

impl ColorScheme {
    /// Resolve the color for an object.
    ///
    /// An entry naming the object's identifier beats one that only matches
    /// its template.
    pub fn color_for(&self, object: &PlacedObject) -> Option<Color> {
        let by_identifier = self.colors.iter().find(|entry| {
            entry
                .target_identifiers
                .iter()
                .any(|id| id.eq_ignore_ascii_case(&object.identifier))
        });

        by_identifier
            .or_else(|| {
                self.colors.iter().find(|entry| {
                    !entry.target_template.is_empty()
                        && entry.target_template.eq_ignore_ascii_case(&object.template)
                })
            })
            .map(|entry| entry.color)
    }
}

/// All available color schemes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ColorPresets {
    pub version: String,
    pub available_schemes: Vec<ColorScheme>,
}

impl ColorPresets {
    /// Parse `colors.json` content.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let presets: Self = serde_json::from_reader(reader).map_err(|e| PresetError::Parse {
            catalog: "color",
            source: e,
        })?;
        tracing::debug!(
            version = %presets.version,
            schemes = presets.available_schemes.len(),
            "Loaded color presets"
        );
        Ok(presets)
    }

    /// Load `colors.json` from disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| PresetError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// Find a scheme by name (case-insensitive).
    pub fn scheme(&self, name: &str) -> Option<&ColorScheme> {
        self.available_schemes
            .iter()
            .find(|scheme| scheme.name.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLORS: &str = r#"{
        "Version": "1.1",
        "AvailableSchemes": [
            {
                "Name": "Default",
                "Colors": [
                    {"TargetTemplate": "FactoryBuilding7", "Color": {"A": 255, "R": 200, "G": 0, "B": 0}},
                    {"TargetTemplate": "FactoryBuilding7", "TargetIdentifiers": ["Lumberjack"],
                     "Color": {"A": 255, "R": 0, "G": 128, "B": 0}}
                ]
            }
        ]
    }"#;

    #[test]
    fn test_identifier_beats_template() {
        let presets = ColorPresets::from_reader(COLORS.as_bytes()).unwrap();
        let scheme = presets.scheme("default").unwrap();

        let lumberjack = PlacedObject::new("lumberjack").with_template("FactoryBuilding7");
        assert_eq!(scheme.color_for(&lumberjack), Some(Color::rgb(0, 128, 0)));

        let sawmill = PlacedObject::new("Sawmill").with_template("FactoryBuilding7");
        assert_eq!(scheme.color_for(&sawmill), Some(Color::rgb(200, 0, 0)));

        let house = PlacedObject::new("House").with_template("Residence");
        assert_eq!(scheme.color_for(&house), None);
    }

    #[test]
    fn test_unknown_scheme() {
        let presets = ColorPresets::from_reader(COLORS.as_bytes()).unwrap();
        assert!(presets.scheme("Fancy").is_none());
    }
}
