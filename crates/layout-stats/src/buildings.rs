//! Per-building counts for the statistics panel.

use std::collections::HashMap;

use layout_model::{IgnoreRule, PlacedObject};
use layout_presets::PresetCatalog;

/// How many objects of one kind are placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildingCount {
    /// Identifier, or the label for objects without one.
    pub identifier: String,
    pub name: String,
    pub count: usize,
}

/// Count placed buildings by identifier, skipping ignored objects.
///
/// Identifiers are grouped case-insensitively under the first spelling seen.
/// Names come from the catalog when it knows the identifier. Objects without
/// an identifier are grouped by label. The result is sorted by descending
/// count, then by name.
pub fn count_buildings<R, C>(objects: &[PlacedObject], rule: &R, catalog: &C) -> Vec<BuildingCount>
where
    R: IgnoreRule + ?Sized,
    C: PresetCatalog + ?Sized,
{
    let mut counts: HashMap<String, (&str, usize)> = HashMap::new();
    for object in objects.iter().filter(|object| !rule.is_ignored(object)) {
        let key = if object.identifier.is_empty() {
            object.label.as_str()
        } else {
            object.identifier.as_str()
        };
        counts.entry(key.to_lowercase()).or_insert((key, 0)).1 += 1;
    }

    let mut result: Vec<BuildingCount> = counts
        .into_values()
        .map(|(identifier, count)| BuildingCount {
            identifier: identifier.to_string(),
            name: catalog
                .display_name(identifier)
                .unwrap_or(identifier)
                .to_string(),
            count,
        })
        .collect();

    result.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.identifier.cmp(&b.identifier))
    });
    result
}
