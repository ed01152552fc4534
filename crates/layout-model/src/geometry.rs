//! Grid geometry and color values.
//!
//! `Point` and `Size` are written as `"x,y"` strings, the way the designer
//! has always stored them. Objects of the form `{ "x": .., "y": .. }` are
//! accepted on read as well.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ModelError, Result};

/// Parse `"a,b"` into two finite reals.
fn parse_pair(s: &str) -> Result<(f64, f64)> {
    let invalid = || ModelError::InvalidPair(s.to_string());
    let (a, b) = s.split_once(',').ok_or_else(invalid)?;
    let a: f64 = a.trim().parse().map_err(|_| invalid())?;
    let b: f64 = b.trim().parse().map_err(|_| invalid())?;
    if !a.is_finite() || !b.is_finite() {
        return Err(invalid());
    }
    Ok((a, b))
}

/// Position on the tile grid.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl FromStr for Point {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        let (x, y) = parse_pair(s)?;
        Ok(Self { x, y })
    }
}

impl Serialize for Point {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PointRepr {
    Text(String),
    Fields {
        #[serde(alias = "X")]
        x: f64,
        #[serde(alias = "Y")]
        y: f64,
    },
}

impl<'de> Deserialize<'de> for Point {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        match PointRepr::deserialize(deserializer)? {
            PointRepr::Text(text) => text.parse().map_err(D::Error::custom),
            PointRepr::Fields { x, y } => Ok(Self { x, y }),
        }
    }
}

/// Footprint of an object in tiles.
///
/// Both dimensions are finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    width: f64,
    height: f64,
}

impl Size {
    /// Create a size, rejecting negative or non-finite dimensions.
    pub fn new(width: f64, height: f64) -> Result<Self> {
        if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
            return Err(ModelError::InvalidSize { width, height });
        }
        Ok(Self { width, height })
    }

    /// Width in tiles.
    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Height in tiles.
    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Number of tiles covered.
    #[inline]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Swap width and height (a quarter turn).
    #[must_use]
    pub fn rotated(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.width, self.height)
    }
}

impl FromStr for Size {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        let (width, height) = parse_pair(s)?;
        Self::new(width, height)
    }
}

impl Serialize for Size {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SizeRepr {
    Text(String),
    Fields {
        #[serde(alias = "Width")]
        width: f64,
        #[serde(alias = "Height")]
        height: f64,
    },
}

impl<'de> Deserialize<'de> for Size {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        match SizeRepr::deserialize(deserializer)? {
            SizeRepr::Text(text) => text.parse().map_err(D::Error::custom),
            SizeRepr::Fields { width, height } => {
                Self::new(width, height).map_err(D::Error::custom)
            }
        }
    }
}

/// ARGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    #[serde(rename = "A")]
    pub a: u8,
    #[serde(rename = "R")]
    pub r: u8,
    #[serde(rename = "G")]
    pub g: u8,
    #[serde(rename = "B")]
    pub b: u8,
}

impl Color {
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { a: 255, r, g, b }
    }

    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}
