//! Statistics result value.

/// Measurements over a set of placed objects.
///
/// All values are in tiles except `efficiency`, which is a whole-number
/// percentage of the bounding box covered by buildings.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StatisticsResult {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
    pub used_area_width: f64,
    pub used_area_height: f64,
    /// Tiles inside the bounding box.
    pub used_tiles: f64,
    /// Tiles covered by counted objects.
    pub min_tiles: f64,
    pub efficiency: f64,
}

impl StatisticsResult {
    /// Nothing to measure.
    pub const EMPTY: Self = Self {
        min_x: 0.0,
        min_y: 0.0,
        max_x: 0.0,
        max_y: 0.0,
        used_area_width: 0.0,
        used_area_height: 0.0,
        used_tiles: 0.0,
        min_tiles: 0.0,
        efficiency: 0.0,
    };

    /// Derive the area metrics from a bounding box and covered tile count.
    ///
    /// A zero-width or zero-height box has an efficiency of 0.
    pub fn from_bounds(min_x: f64, min_y: f64, max_x: f64, max_y: f64, min_tiles: f64) -> Self {
        let used_area_width = max_x - min_x;
        let used_area_height = max_y - min_y;
        let efficiency = if used_area_width == 0.0 || used_area_height == 0.0 {
            0.0
        } else {
            (min_tiles / used_area_width / used_area_height * 100.0).round_ties_even()
        };

        Self {
            min_x,
            min_y,
            max_x,
            max_y,
            used_area_width,
            used_area_height,
            used_tiles: used_area_width * used_area_height,
            min_tiles,
            efficiency,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_default() {
        assert_eq!(StatisticsResult::default(), StatisticsResult::EMPTY);
        assert!(StatisticsResult::EMPTY.is_empty());
    }

    #[test]
    fn test_zero_area_efficiency_is_zero() {
        let result = StatisticsResult::from_bounds(2.0, 2.0, 2.0, 5.0, 0.0);
        assert_eq!(result.used_area_width, 0.0);
        assert_eq!(result.used_tiles, 0.0);
        assert_eq!(result.efficiency, 0.0);
        assert!(!result.efficiency.is_nan());
    }

    #[test]
    fn test_efficiency_rounds_half_to_even() {
        // 1 / 8 = 12.5%
        let result = StatisticsResult::from_bounds(0.0, 0.0, 2.0, 4.0, 1.0);
        assert_eq!(result.efficiency, 12.0);
        // 3 / 8 = 37.5%
        let result = StatisticsResult::from_bounds(0.0, 0.0, 2.0, 4.0, 3.0);
        assert_eq!(result.efficiency, 38.0);
    }
}
