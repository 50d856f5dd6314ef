//! Whole-map layout: every zone, object and ruler turned into normalized
//! parameters a rendering surface can paint without touching inches.

use crate::errors::{EntityKind, MapError, MapWarning};
use crate::log::{debug, warn};
use crate::map::{DeploymentMap, GameSize, MapObject, Ruler, RulerPlacement, Zone, ZoneShape};
use crate::types::{Inches, PtPct, Size, SizePct};

use super::geometry::{TableDimensions, to_normalized_position, to_normalized_size};
use super::legend::{LegendEntry, key_entries, legend_entries};
use super::ruler::{RulerLayout, layout_ruler};
use super::shapes::{LabelPlacement, ShapeRule, ZoneGeometry, ZoneRule};

/// Color token marking an objective room, which gets door markers
const OBJECTIVE_ROOM: &str = "obj-room";

/// On-map label of a zone
#[derive(Clone, Debug, PartialEq)]
pub struct ZoneLabel {
    pub text: String,
    pub placement: LabelPlacement,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ZoneLayout {
    /// Position of the zone in the map's `zones` list
    pub index: usize,
    pub name: String,
    pub color: String,
    pub shape: ZoneShape,
    pub geometry: ZoneGeometry,
    /// None when the zone hides its name or its shape takes no label
    pub label: Option<ZoneLabel>,
    /// Draw a door marker centered on each side
    pub room_doors: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectLayout {
    pub index: usize,
    pub name: String,
    pub color: String,
    pub center: PtPct,
    /// Bounding box of the marker circle
    pub extent: SizePct,
}

/// Everything a surface needs to draw one map
#[derive(Clone, Debug, PartialEq)]
pub struct MapLayout {
    pub game_size: GameSize,
    pub dimensions: TableDimensions,
    pub zones: Vec<ZoneLayout>,
    pub objects: Vec<ObjectLayout>,
    pub rulers: Vec<RulerLayout>,
    pub legend: Vec<LegendEntry>,
    pub key: Vec<String>,
    pub warnings: Vec<MapWarning>,
    /// Top-edge rulers need headroom above the table for their labels
    pub has_top_rulers: bool,
}

impl MapLayout {
    /// Header line under the game size, e.g. `48" x 48"`
    pub fn dimensions_label(&self) -> String {
        self.dimensions.to_string()
    }
}

/// Lay out a whole map.
///
/// Unknown shapes and placements, and degenerate inside rulers, skip only
/// the offending entity and are reported in [`MapLayout::warnings`].
/// Entities off the table or with non-positive sizes are laid out anyway,
/// with a warning.
pub fn layout_map(map: &DeploymentMap) -> Result<MapLayout, MapError> {
    let dims = TableDimensions::for_game_size(map.game_size);
    debug!(
        game_size = %map.game_size,
        zones = map.zones.len(),
        objects = map.objects.len(),
        rulers = map.rulers().len(),
        "laying out map"
    );

    let mut warnings = Vec::new();

    let mut zones = Vec::with_capacity(map.zones.len());
    for (index, zone) in map.zones.iter().enumerate() {
        check_placement(EntityKind::Zone, index, zone.position, zone_size(zone), &dims, &mut warnings);
        zones.extend(record(EntityKind::Zone, index, layout_zone(index, zone, &dims), &mut warnings)?);
    }

    let objects = map
        .objects
        .iter()
        .enumerate()
        .map(|(index, object)| {
            check_placement(EntityKind::Object, index, object.position, Some(object.size), &dims, &mut warnings);
            layout_object(index, object, &dims)
        })
        .collect();

    let mut rulers = Vec::with_capacity(map.rulers().len());
    for (index, ruler) in map.rulers().iter().enumerate() {
        rulers.extend(record(EntityKind::Ruler, index, layout_ruler(index, ruler, &dims), &mut warnings)?);
    }

    let has_top_rulers = map
        .rulers()
        .iter()
        .any(|r| matches!(r, Ruler::Outside(o) if o.placement == RulerPlacement::Top));

    Ok(MapLayout {
        game_size: map.game_size,
        dimensions: dims,
        zones,
        objects,
        rulers,
        legend: legend_entries(map),
        key: key_entries(map),
        warnings,
        has_top_rulers,
    })
}

/// Lay out one zone according to its shape rule
pub fn layout_zone(index: usize, zone: &Zone, dims: &TableDimensions) -> Result<ZoneLayout, MapError> {
    let rule = ShapeRule::try_from(&zone.shape)?;
    let label = if zone.hide_name {
        None
    } else {
        rule.label_placement(zone, dims).map(|placement| ZoneLabel {
            text: zone.name.clone(),
            placement,
        })
    };

    Ok(ZoneLayout {
        index,
        name: zone.name.clone(),
        color: zone.color.clone(),
        shape: zone.shape.clone(),
        geometry: rule.geometry(zone, dims),
        label,
        room_doors: zone.shape == ZoneShape::Box && zone.color.contains(OBJECTIVE_ROOM),
    })
}

/// Lay out one object marker: a circle of diameter `size`
pub fn layout_object(index: usize, object: &MapObject, dims: &TableDimensions) -> ObjectLayout {
    let diameter = Inches(object.size);
    ObjectLayout {
        index,
        name: object.name.clone(),
        color: object.color.clone(),
        center: to_normalized_position(object.position, dims),
        extent: to_normalized_size(Size::new(diameter, diameter), dims),
    }
}

/// Lines ignore their size, so only sized shapes are checked
fn zone_size(zone: &Zone) -> Option<f64> {
    match zone.shape {
        ZoneShape::Box | ZoneShape::Circle | ZoneShape::FullWidth => Some(zone.size),
        _ => None,
    }
}

fn check_placement(
    kind: EntityKind,
    index: usize,
    position: [f64; 2],
    size: Option<f64>,
    dims: &TableDimensions,
    warnings: &mut Vec<MapWarning>,
) {
    if !dims.contains(position) {
        let [x, y] = position;
        warn!(%kind, index, x, y, "entity lies outside the table");
        warnings.push(MapWarning::OutOfBounds {
            kind,
            index,
            x,
            y,
            width: dims.width.0,
            height: dims.height.0,
        });
    }
    if let Some(size) = size.filter(|s| *s <= 0.0) {
        warn!(%kind, index, size, "entity has non-positive size");
        warnings.push(MapWarning::NonPositiveSize { kind, index, size });
    }
}

/// Keep a laid-out entity, or turn an entity-scoped error into a warning.
/// Any other error is fatal to the whole map and is passed back up.
fn record<T>(
    kind: EntityKind,
    index: usize,
    result: Result<T, MapError>,
    warnings: &mut Vec<MapWarning>,
) -> Result<Option<T>, MapError> {
    match result {
        Ok(layout) => Ok(Some(layout)),
        Err(source) if source.is_entity_scoped() => {
            warn!(%kind, index, error = %source, "skipping entity");
            warnings.push(MapWarning::Skipped { kind, index, source });
            Ok(None)
        }
        Err(err) => Err(err),
    }
}
