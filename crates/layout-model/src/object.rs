//! Placed building objects.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ModelError, Result};
use crate::geometry::{Color, Point, Size};

/// Orientation of an object's blocked area.
///
/// Written as its index (`Up = 0` .. `Left = 3`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GridDirection {
    #[default]
    Up,
    Right,
    Down,
    Left,
}

impl GridDirection {
    pub const ALL: [Self; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    /// Index used in the file format.
    pub fn index(self) -> u8 {
        match self {
            Self::Up => 0,
            Self::Right => 1,
            Self::Down => 2,
            Self::Left => 3,
        }
    }

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    /// Next direction clockwise.
    #[must_use]
    pub fn rotate_clockwise(self) -> Self {
        Self::ALL[usize::from((self.index() + 1) % 4)]
    }
}

impl fmt::Display for GridDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Up => "Up",
            Self::Right => "Right",
            Self::Down => "Down",
            Self::Left => "Left",
        };
        f.write_str(name)
    }
}

impl FromStr for GridDirection {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|direction| direction.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ModelError::InvalidDirection(s.to_string()))
    }
}

impl Serialize for GridDirection {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.index())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DirectionRepr {
    Index(u8),
    Name(String),
}

impl<'de> Deserialize<'de> for GridDirection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        match DirectionRepr::deserialize(deserializer)? {
            DirectionRepr::Index(index) => Self::from_index(index)
                .ok_or_else(|| D::Error::custom(ModelError::InvalidDirection(index.to_string()))),
            DirectionRepr::Name(name) => name.parse().map_err(D::Error::custom),
        }
    }
}

/// Older designer versions write `null` for unset strings.
fn nullable_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// A building placed on the layout grid.
///
/// Every field defaults when missing so that files written before a field
/// existed still decode.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PlacedObject {
    /// Preset identifier (e.g., "A6_Farmhouse").
    #[serde(deserialize_with = "nullable_string")]
    pub identifier: String,

    /// Text drawn on the object.
    #[serde(deserialize_with = "nullable_string")]
    pub label: String,

    pub color: Color,

    /// Top-left corner in tiles.
    pub position: Point,

    pub size: Size,

    /// Icon file name.
    #[serde(deserialize_with = "nullable_string")]
    pub icon: String,

    /// Preset template the object was built from.
    #[serde(deserialize_with = "nullable_string")]
    pub template: String,

    /// Influence radius in tiles.
    pub radius: f64,

    /// Influence range along roads.
    pub influence_range: f64,

    pub road: bool,

    pub borderless: bool,

    pub paved_street: bool,

    pub blocked_area_length: i32,

    pub blocked_area_width: i32,

    pub direction: GridDirection,
}

impl PlacedObject {
    /// Create an object with the given identifier and a 1x1 footprint at the origin.
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            size: Size::new(1.0, 1.0).unwrap_or_default(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.position = Point::new(x, y);
        self
    }

    #[must_use]
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    #[must_use]
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }

    #[must_use]
    pub fn with_road(mut self, road: bool) -> Self {
        self.road = road;
        self
    }

    /// Right edge (`x + width`).
    #[inline]
    pub fn right(&self) -> f64 {
        self.position.x + self.size.width()
    }

    /// Bottom edge (`y + height`).
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.position.y + self.size.height()
    }

    /// Check that every real-valued field can be written and read back.
    ///
    /// The file format has no encoding for NaN or infinity.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("Position.X", self.position.x),
            ("Position.Y", self.position.y),
            ("Radius", self.radius),
            ("InfluenceRange", self.influence_range),
        ];
        match fields.into_iter().find(|(_, value)| !value.is_finite()) {
            Some((field, value)) => Err(ModelError::NonFinite { field, value }),
            None => Ok(()),
        }
    }

    /// Turn the object a quarter clockwise in place.
    pub fn rotate(&mut self) {
        self.size = self.size.rotated();
        self.direction = self.direction.rotate_clockwise();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_designer_object() {
        let json = r#"{
            "Identifier": "A6_Farmhouse",
            "Label": "Farm",
            "Color": {"A": 255, "R": 1, "G": 2, "B": 3},
            "Position": "10,4",
            "Size": "3,3",
            "Icon": null,
            "Template": "Residence",
            "Radius": 12.5,
            "InfluenceRange": 0.0,
            "Road": false,
            "Borderless": false,
            "PavedStreet": false,
            "BlockedAreaLength": 1,
            "BlockedAreaWidth": 3,
            "Direction": 2
        }"#;

        let object: PlacedObject = serde_json::from_str(json).unwrap();
        assert_eq!(object.identifier, "A6_Farmhouse");
        assert_eq!(object.icon, "");
        assert_eq!(object.position, Point::new(10.0, 4.0));
        assert_eq!(object.right(), 13.0);
        assert_eq!(object.bottom(), 7.0);
        assert_eq!(object.radius, 12.5);
        assert_eq!(object.direction, GridDirection::Down);
    }

    #[test]
    fn test_missing_fields_default() {
        let object: PlacedObject = serde_json::from_str(r#"{"Position": "1,1"}"#).unwrap();
        assert_eq!(object.identifier, "");
        assert!(!object.road);
        assert_eq!(object.size, Size::default());
        assert_eq!(object.direction, GridDirection::Up);
    }

    #[test]
    fn test_direction_by_name() {
        let object: PlacedObject = serde_json::from_str(r#"{"Direction": "left"}"#).unwrap();
        assert_eq!(object.direction, GridDirection::Left);
        assert!(serde_json::from_str::<PlacedObject>(r#"{"Direction": 9}"#).is_err());
    }

    #[test]
    fn test_direction_written_as_index() {
        let mut object = PlacedObject::new("Road");
        object.direction = GridDirection::Right;
        let value = serde_json::to_value(&object).unwrap();
        assert_eq!(value["Direction"], 1);
        assert_eq!(value["Position"], "0,0");
        assert_eq!(value["Size"], "1,1");
    }

    #[test]
    fn test_validate_rejects_non_finite_fields() {
        assert!(PlacedObject::new("Farm").validate().is_ok());

        let mut object = PlacedObject::new("Farm");
        object.radius = f64::INFINITY;
        assert!(matches!(
            object.validate(),
            Err(ModelError::NonFinite { field: "Radius", .. })
        ));

        let object = PlacedObject::new("Farm").with_position(f64::NAN, 0.0);
        assert!(matches!(
            object.validate(),
            Err(ModelError::NonFinite { field: "Position.X", .. })
        ));
    }

    #[test]
    fn test_rotate_swaps_size_and_turns() {
        let mut object =
            PlacedObject::new("Warehouse").with_size(Size::new(2.0, 5.0).unwrap());
        object.rotate();
        assert_eq!(object.size, Size::new(5.0, 2.0).unwrap());
        assert_eq!(object.direction, GridDirection::Right);

        for _ in 0..3 {
            object.rotate();
        }
        assert_eq!(object.direction, GridDirection::Up);
    }
}
