//! Legend and key entries shown alongside a map

use std::collections::HashSet;

use crate::map::DeploymentMap;

/// Swatch drawn next to a legend entry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Swatch {
    /// Square, for zones
    Square,
    /// Round, for objects
    Round,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LegendEntry {
    pub name: String,
    pub color: String,
    pub swatch: Swatch,
}

/// Legend entries: zones first, then objects de-duplicated by name.
///
/// Entities flagged `excludeLegend` are left out. For objects the first
/// occurrence of a name wins, so several consoles share one entry.
pub fn legend_entries(map: &DeploymentMap) -> Vec<LegendEntry> {
    let zones = map
        .zones
        .iter()
        .filter(|z| !z.exclude_legend)
        .map(|z| LegendEntry {
            name: z.name.clone(),
            color: z.color.clone(),
            swatch: Swatch::Square,
        });

    let mut seen = HashSet::new();
    let objects = map
        .objects
        .iter()
        .filter(|o| !o.exclude_legend)
        .filter(|o| seen.insert(o.name.as_str()))
        .map(|o| LegendEntry {
            name: o.name.clone(),
            color: o.color.clone(),
            swatch: Swatch::Round,
        });

    zones.chain(objects).collect()
}

/// Names of zones that appear as labels on the map itself: zones not
/// flagged `excludeKey` whose name is not hidden.
pub fn key_entries(map: &DeploymentMap) -> Vec<String> {
    map.zones
        .iter()
        .filter(|z| !z.exclude_key && !z.hide_name)
        .map(|z| z.name.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::{MapObject, Zone, ZoneShape};

    fn coffin(x: f64) -> MapObject {
        MapObject::new("Tech-Coffin", [x, 24.0], 1.0).with_color("bg-cyan-600")
    }

    #[test]
    fn objects_are_deduplicated_by_name() {
        let map = DeploymentMap::default()
            .with_object(coffin(12.0))
            .with_object(coffin(36.0));
        let entries = legend_entries(&map);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "Tech-Coffin");
        assert_eq!(entries[0].swatch, Swatch::Round);
    }

    #[test]
    fn first_object_occurrence_wins() {
        let map = DeploymentMap::default()
            .with_object(MapObject::new("Beacon", [1.0, 1.0], 1.0).with_color("bg-red-600"))
            .with_object(MapObject::new("Beacon", [2.0, 2.0], 1.0).with_color("bg-blue-600"));
        assert_eq!(legend_entries(&map)[0].color, "bg-red-600");
    }

    #[test]
    fn zones_come_before_objects_and_are_not_deduplicated() {
        let map = DeploymentMap::default()
            .with_object(coffin(12.0))
            .with_zone(Zone::new("Dead Zone", ZoneShape::FullWidth, [0.0, 20.0], 8.0))
            .with_zone(Zone::new("Dead Zone", ZoneShape::FullWidth, [0.0, 30.0], 8.0));
        let names: Vec<_> = legend_entries(&map).into_iter().map(|e| e.name).collect();
        assert_eq!(names, ["Dead Zone", "Dead Zone", "Tech-Coffin"]);
    }

    #[test]
    fn flags_are_independent() {
        let map = DeploymentMap::default()
            .with_zone(Zone::new("Drawn only", ZoneShape::Box, [10.0, 10.0], 4.0).excluded_from_legend())
            .with_zone(Zone::new("Legend only", ZoneShape::Box, [20.0, 20.0], 4.0).with_hidden_name())
            .with_zone(Zone::new("Unkeyed", ZoneShape::Box, [30.0, 30.0], 4.0).excluded_from_key())
            .with_object(coffin(5.0).excluded_from_legend());

        let legend: Vec<_> = legend_entries(&map).into_iter().map(|e| e.name).collect();
        assert_eq!(legend, ["Legend only", "Unkeyed"]);
        assert_eq!(key_entries(&map), ["Drawn only"]);
    }
}
