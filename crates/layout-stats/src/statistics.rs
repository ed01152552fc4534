//! Bounding box and tile efficiency calculation.

use layout_model::{IgnoreRule, PlacedObject};

use crate::result::StatisticsResult;

/// Running min/max/sum over objects.
///
/// Accumulators over disjoint chunks can be merged in any order and give
/// the same result as one pass over the whole set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Accumulator {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
    min_tiles: f64,
    count: usize,
    include_roads: bool,
}

impl Accumulator {
    pub fn new(include_roads: bool) -> Self {
        Self {
            min_x: f64::INFINITY,
            min_y: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            max_y: f64::NEG_INFINITY,
            min_tiles: 0.0,
            count: 0,
            include_roads,
        }
    }

    pub fn push(&mut self, object: &PlacedObject) {
        self.min_x = self.min_x.min(object.position.x);
        self.min_y = self.min_y.min(object.position.y);
        self.max_x = self.max_x.max(object.right());
        self.max_y = self.max_y.max(object.bottom());
        if self.include_roads || !object.road {
            self.min_tiles += object.size.area();
        }
        self.count += 1;
    }

    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
            min_tiles: self.min_tiles + other.min_tiles,
            count: self.count + other.count,
            include_roads: self.include_roads,
        }
    }

    /// Number of objects pushed so far.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn finish(self) -> StatisticsResult {
        if self.count == 0 {
            return StatisticsResult::EMPTY;
        }
        StatisticsResult::from_bounds(
            self.min_x,
            self.min_y,
            self.max_x,
            self.max_y,
            self.min_tiles,
        )
    }
}

/// Compute statistics for a set of placed objects.
///
/// Returns `None` when there is no input at all, and
/// [`StatisticsResult::EMPTY`] when nothing is left after ignored objects
/// are removed. Roads count toward `min_tiles` only with `include_roads`.
pub fn calculate<R>(
    objects: Option<&[PlacedObject]>,
    include_roads: bool,
    rule: &R,
) -> Option<StatisticsResult>
where
    R: IgnoreRule + ?Sized,
{
    let objects = objects?;

    let mut accumulator = Accumulator::new(include_roads);
    for object in objects.iter().filter(|object| !rule.is_ignored(object)) {
        accumulator.push(object);
    }

    tracing::trace!(
        total = objects.len(),
        counted = accumulator.count(),
        include_roads,
        "Calculated layout statistics"
    );
    Some(accumulator.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use layout_model::{NoIgnore, Size, TemplateIgnoreRule};

    fn object(x: f64, y: f64, width: f64, height: f64) -> PlacedObject {
        PlacedObject::new("Building")
            .with_position(x, y)
            .with_size(Size::new(width, height).unwrap())
    }

    #[test]
    fn test_no_input_is_none() {
        assert_eq!(calculate(None, false, &NoIgnore), None);
    }

    #[test]
    fn test_empty_input_is_empty() {
        assert_eq!(
            calculate(Some(&[][..]), false, &NoIgnore),
            Some(StatisticsResult::EMPTY)
        );
    }

    #[test]
    fn test_all_ignored_is_empty() {
        let objects = vec![object(0.0, 0.0, 2.0, 2.0).with_template("Blocker")];
        let result = calculate(Some(objects.as_slice()), false, &TemplateIgnoreRule::default());
        assert_eq!(result, Some(StatisticsResult::EMPTY));
    }

    #[test]
    fn test_single_object() {
        let objects = vec![object(0.0, 0.0, 2.0, 3.0)];
        let result = calculate(Some(objects.as_slice()), false, &NoIgnore).unwrap();
        assert_eq!(
            result,
            StatisticsResult {
                min_x: 0.0,
                min_y: 0.0,
                max_x: 2.0,
                max_y: 3.0,
                used_area_width: 2.0,
                used_area_height: 3.0,
                used_tiles: 6.0,
                min_tiles: 6.0,
                efficiency: 100.0,
            }
        );
    }

    #[test]
    fn test_road_exclusion() {
        let objects = vec![
            object(0.0, 0.0, 4.0, 4.0).with_road(true),
            object(3.0, 3.0, 1.0, 1.0),
        ];

        let without = calculate(Some(objects.as_slice()), false, &NoIgnore).unwrap();
        assert_eq!(without.min_tiles, 1.0);
        assert_eq!(without.used_tiles, 16.0);
        assert_eq!(without.efficiency, 6.0);

        let with = calculate(Some(objects.as_slice()), true, &NoIgnore).unwrap();
        assert_eq!(with.min_tiles, 17.0);
        assert_eq!(with.used_tiles, 16.0);
    }

    #[test]
    fn test_ignored_objects_do_not_widen_bounds() {
        let objects = vec![
            object(0.0, 0.0, 2.0, 2.0),
            object(50.0, 50.0, 1.0, 1.0).with_template("Blocker"),
        ];
        let result = calculate(Some(objects.as_slice()), false, &TemplateIgnoreRule::default()).unwrap();
        assert_eq!(result.max_x, 2.0);
        assert_eq!(result.max_y, 2.0);
        assert_eq!(result.efficiency, 100.0);
    }

    #[test]
    fn test_negative_coordinates() {
        let objects = vec![object(-3.0, -2.0, 1.0, 1.0), object(1.0, 1.0, 2.0, 1.0)];
        let result = calculate(Some(objects.as_slice()), false, &NoIgnore).unwrap();
        assert_eq!(result.min_x, -3.0);
        assert_eq!(result.min_y, -2.0);
        assert_eq!(result.used_area_width, 6.0);
        assert_eq!(result.used_area_height, 4.0);
        assert_eq!(result.min_tiles, 3.0);
        // 3 / 24 = 12.5%
        assert_eq!(result.efficiency, 12.0);
    }

    #[test]
    fn test_zero_size_object_has_zero_efficiency() {
        let objects = vec![object(4.0, 4.0, 0.0, 0.0)];
        let result = calculate(Some(objects.as_slice()), false, &NoIgnore).unwrap();
        assert_eq!(result.used_tiles, 0.0);
        assert_eq!(result.efficiency, 0.0);
    }

    #[test]
    fn test_dyn_rule() {
        let rule: &dyn IgnoreRule = &|object: &PlacedObject| object.road;
        let objects = vec![object(0.0, 0.0, 1.0, 1.0).with_road(true)];
        assert_eq!(
            calculate(Some(objects.as_slice()), true, rule),
            Some(StatisticsResult::EMPTY)
        );
    }
}
