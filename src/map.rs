//! Deployment map data model.
//!
//! These types are the JSON contract shared with mission content files and
//! the interactive map builder: field names and nesting round-trip through
//! serde unchanged. Maps are plain values; editing helpers consume a map and
//! hand back a new one rather than mutating in place.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::MapError;
use crate::render::defaults;
use crate::types::Inches;

/// Position on the table in inches: `[x, y]`, origin top-left, +y down.
pub type Position = [f64; 2];

// ============================================================================
// Game size
// ============================================================================

/// Point bracket that fixes the physical table size
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum GameSize {
    /// 150 points, 24" x 32"
    Small,
    /// 200 or 250 points, 32" x 48"
    Medium,
    /// 300, 350 or 400 points, 48" x 48"
    #[default]
    Large,
}

impl GameSize {
    pub const ALL: [GameSize; 3] = [GameSize::Small, GameSize::Medium, GameSize::Large];

    /// Wire label, as written in mission content
    pub fn label(self) -> &'static str {
        match self {
            GameSize::Small => "150P",
            GameSize::Medium => "200P / 250P",
            GameSize::Large => "300P / 350P / 400P",
        }
    }

    /// Table width and height in inches
    pub fn table_size(self) -> (Inches, Inches) {
        match self {
            GameSize::Small => (defaults::TABLE_SMALL, defaults::TABLE_MEDIUM),
            GameSize::Medium => (defaults::TABLE_MEDIUM, defaults::TABLE_LARGE),
            GameSize::Large => (defaults::TABLE_LARGE, defaults::TABLE_LARGE),
        }
    }
}

impl FromStr for GameSize {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        match compact.as_str() {
            "150P" => Ok(GameSize::Small),
            "200P/250P" => Ok(GameSize::Medium),
            "300P/350P/400P" => Ok(GameSize::Large),
            _ => Err(MapError::InvalidGameSize { value: s.to_string() }),
        }
    }
}

impl TryFrom<String> for GameSize {
    type Error = MapError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<GameSize> for String {
    fn from(size: GameSize) -> Self {
        size.label().to_string()
    }
}

impl fmt::Display for GameSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Zones
// ============================================================================

/// How a zone is drawn. Unrecognized names survive deserialization so a
/// single bad zone can be skipped at layout time.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ZoneShape {
    FullWidth,
    Circle,
    Box,
    HorizLine,
    VertLine,
    DiagLine,
    DiagLineFlipped,
    Unrecognized(String),
}

impl ZoneShape {
    pub fn as_str(&self) -> &str {
        match self {
            ZoneShape::FullWidth => "full-width",
            ZoneShape::Circle => "circle",
            ZoneShape::Box => "box",
            ZoneShape::HorizLine => "horiz-line",
            ZoneShape::VertLine => "vert-line",
            ZoneShape::DiagLine => "diag-line",
            ZoneShape::DiagLineFlipped => "diag-line-flipped",
            ZoneShape::Unrecognized(s) => s,
        }
    }
}

impl From<String> for ZoneShape {
    fn from(s: String) -> Self {
        match s.as_str() {
            "full-width" => ZoneShape::FullWidth,
            "circle" => ZoneShape::Circle,
            "box" => ZoneShape::Box,
            "horiz-line" => ZoneShape::HorizLine,
            "vert-line" => ZoneShape::VertLine,
            "diag-line" => ZoneShape::DiagLine,
            "diag-line-flipped" => ZoneShape::DiagLineFlipped,
            _ => ZoneShape::Unrecognized(s),
        }
    }
}

impl From<&str> for ZoneShape {
    fn from(s: &str) -> Self {
        ZoneShape::from(s.to_string())
    }
}

impl From<ZoneShape> for String {
    fn from(shape: ZoneShape) -> Self {
        shape.as_str().to_string()
    }
}

impl fmt::Display for ZoneShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn is_false(b: &bool) -> bool {
    !*b
}

/// A named region of the table
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    pub name: String,
    /// Design token such as `bg-red-600` or `exclusion-zone`
    pub color: String,
    pub position: Position,
    /// Radius for circles, edge for boxes, band thickness for full-width
    pub size: f64,
    pub shape: ZoneShape,
    #[serde(default, skip_serializing_if = "is_false")]
    pub exclude_legend: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub hide_name: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub exclude_key: bool,
}

impl Zone {
    pub fn new(name: impl Into<String>, shape: ZoneShape, position: Position, size: f64) -> Self {
        Zone {
            name: name.into(),
            color: String::new(),
            position,
            size,
            shape,
            exclude_legend: false,
            hide_name: false,
            exclude_key: false,
        }
    }

    /// The zone the builder inserts for "Add Zone"
    pub fn placeholder() -> Self {
        Zone::new("zone", ZoneShape::FullWidth, [0.0, 0.0], 1.0)
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn excluded_from_legend(mut self) -> Self {
        self.exclude_legend = true;
        self
    }

    pub fn with_hidden_name(mut self) -> Self {
        self.hide_name = true;
        self
    }

    pub fn excluded_from_key(mut self) -> Self {
        self.exclude_key = true;
        self
    }
}

// ============================================================================
// Objects
// ============================================================================

/// A point marker such as a console or beacon, drawn as a circle
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapObject {
    pub name: String,
    pub position: Position,
    /// Diameter in inches
    pub size: f64,
    pub color: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub exclude_legend: bool,
}

impl MapObject {
    pub fn new(name: impl Into<String>, position: Position, size: f64) -> Self {
        MapObject {
            name: name.into(),
            position,
            size,
            color: String::new(),
            exclude_legend: false,
        }
    }

    pub fn placeholder() -> Self {
        MapObject::new("object", [0.0, 0.0], 4.0)
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn excluded_from_legend(mut self) -> Self {
        self.exclude_legend = true;
        self
    }
}

// ============================================================================
// Rulers
// ============================================================================

/// Table edge an outside ruler hangs off
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum RulerPlacement {
    Left,
    Right,
    Top,
    Bottom,
    Unrecognized(String),
}

impl RulerPlacement {
    pub fn as_str(&self) -> &str {
        match self {
            RulerPlacement::Left => "left",
            RulerPlacement::Right => "right",
            RulerPlacement::Top => "top",
            RulerPlacement::Bottom => "bottom",
            RulerPlacement::Unrecognized(s) => s,
        }
    }
}

impl From<&str> for RulerPlacement {
    fn from(s: &str) -> Self {
        match s {
            "left" => RulerPlacement::Left,
            "right" => RulerPlacement::Right,
            "top" => RulerPlacement::Top,
            "bottom" => RulerPlacement::Bottom,
            other => RulerPlacement::Unrecognized(other.to_string()),
        }
    }
}

impl fmt::Display for RulerPlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ruler anchored to a table edge
#[derive(Clone, Debug, PartialEq)]
pub struct OutsideRuler {
    pub placement: RulerPlacement,
    pub start: Position,
    /// Inches along the edge axis
    pub length: f64,
}

/// Ruler between two interior points
#[derive(Clone, Debug, PartialEq)]
pub struct InsideRuler {
    pub start: Position,
    pub end: Position,
    /// Overrides the start/end distance while keeping the direction
    pub length: Option<f64>,
}

/// A labeled measurement overlay.
///
/// On the wire both variants share one object shape and `placement` is the
/// discriminant: `"inside"` selects [`InsideRuler`], anything else is an edge.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRuler", into = "RawRuler")]
pub enum Ruler {
    Outside(OutsideRuler),
    Inside(InsideRuler),
}

const INSIDE: &str = "inside";

#[derive(Serialize, Deserialize)]
struct RawRuler {
    placement: String,
    start: Position,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    end: Option<Position>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    length: Option<f64>,
}

impl TryFrom<RawRuler> for Ruler {
    type Error = String;

    fn try_from(raw: RawRuler) -> Result<Self, Self::Error> {
        if raw.placement == INSIDE {
            let end = raw
                .end
                .ok_or_else(|| "inside ruler is missing `end`".to_string())?;
            return Ok(Ruler::Inside(InsideRuler {
                start: raw.start,
                end,
                length: raw.length,
            }));
        }
        let placement = RulerPlacement::from(raw.placement.as_str());
        let length = match (&placement, raw.length) {
            (_, Some(length)) => length,
            // Skipped at layout time
            (RulerPlacement::Unrecognized(_), None) => 0.0,
            (_, None) => return Err(format!("{} ruler is missing `length`", raw.placement)),
        };
        Ok(Ruler::Outside(OutsideRuler {
            placement,
            start: raw.start,
            length,
        }))
    }
}

impl From<Ruler> for RawRuler {
    fn from(ruler: Ruler) -> Self {
        match ruler {
            Ruler::Outside(r) => RawRuler {
                placement: r.placement.as_str().to_string(),
                start: r.start,
                end: None,
                length: Some(r.length),
            },
            Ruler::Inside(r) => RawRuler {
                placement: INSIDE.to_string(),
                start: r.start,
                end: Some(r.end),
                length: r.length,
            },
        }
    }
}

impl Ruler {
    pub fn outside(placement: RulerPlacement, start: Position, length: f64) -> Self {
        Ruler::Outside(OutsideRuler { placement, start, length })
    }

    pub fn inside(start: Position, end: Position, length: Option<f64>) -> Self {
        Ruler::Inside(InsideRuler { start, end, length })
    }

    pub fn start(&self) -> Position {
        match self {
            Ruler::Outside(r) => r.start,
            Ruler::Inside(r) => r.start,
        }
    }

    /// Wire value of the `placement` field
    pub fn placement(&self) -> &str {
        match self {
            Ruler::Outside(r) => r.placement.as_str(),
            Ruler::Inside(_) => INSIDE,
        }
    }
}

// ============================================================================
// Deployment map
// ============================================================================

/// Root aggregate describing one diagram
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct DeploymentMap {
    #[serde(rename = "gameSizes")]
    pub game_size: GameSize,
    pub zones: Vec<Zone>,
    pub objects: Vec<MapObject>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rulers: Option<Vec<Ruler>>,
}

impl DeploymentMap {
    pub fn new(game_size: GameSize) -> Self {
        DeploymentMap {
            game_size,
            ..Default::default()
        }
    }

    /// Rulers, treating an absent list as empty
    pub fn rulers(&self) -> &[Ruler] {
        self.rulers.as_deref().unwrap_or(&[])
    }

    pub fn with_game_size(self, game_size: GameSize) -> Self {
        DeploymentMap { game_size, ..self }
    }

    pub fn with_zone(mut self, zone: Zone) -> Self {
        self.zones.push(zone);
        self
    }

    pub fn with_object(mut self, object: MapObject) -> Self {
        self.objects.push(object);
        self
    }

    pub fn with_ruler(mut self, ruler: Ruler) -> Self {
        self.rulers.get_or_insert_with(Vec::new).push(ruler);
        self
    }

    /// Replace the zone at `index` with the result of `edit`.
    /// Out-of-range indices leave the map unchanged.
    pub fn replace_zone(mut self, index: usize, edit: impl FnOnce(Zone) -> Zone) -> Self {
        if index < self.zones.len() {
            let zone = self.zones.remove(index);
            self.zones.insert(index, edit(zone));
        }
        self
    }

    pub fn remove_zone(mut self, index: usize) -> Self {
        if index < self.zones.len() {
            self.zones.remove(index);
        }
        self
    }

    pub fn replace_object(
        mut self,
        index: usize,
        edit: impl FnOnce(MapObject) -> MapObject,
    ) -> Self {
        if index < self.objects.len() {
            let object = self.objects.remove(index);
            self.objects.insert(index, edit(object));
        }
        self
    }

    pub fn remove_object(mut self, index: usize) -> Self {
        if index < self.objects.len() {
            self.objects.remove(index);
        }
        self
    }

    pub fn replace_ruler(mut self, index: usize, edit: impl FnOnce(Ruler) -> Ruler) -> Self {
        if let Some(rulers) = self.rulers.as_mut() {
            if index < rulers.len() {
                let ruler = rulers.remove(index);
                rulers.insert(index, edit(ruler));
            }
        }
        self
    }

    pub fn remove_ruler(mut self, index: usize) -> Self {
        if let Some(rulers) = self.rulers.as_mut() {
            if index < rulers.len() {
                rulers.remove(index);
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn game_size_labels_parse() {
        for size in GameSize::ALL {
            assert_eq!(size.label().parse::<GameSize>(), Ok(size));
        }
        assert_eq!("200P/250P".parse::<GameSize>(), Ok(GameSize::Medium));
        assert_eq!(
            "150p".parse::<GameSize>(),
            Err(MapError::InvalidGameSize { value: "150p".into() })
        );
        assert_eq!(
            "500P".parse::<GameSize>(),
            Err(MapError::InvalidGameSize { value: "500P".into() })
        );
    }

    #[test]
    fn game_size_table_sizes() {
        assert_eq!(GameSize::Small.table_size(), (Inches(24.0), Inches(32.0)));
        assert_eq!(GameSize::Medium.table_size(), (Inches(32.0), Inches(48.0)));
        assert_eq!(GameSize::Large.table_size(), (Inches(48.0), Inches(48.0)));
    }

    #[test]
    fn map_json_round_trip_keeps_field_names() {
        let value = json!({
            "gameSizes": "200P / 250P",
            "zones": [{
                "name": "Deployment Zone",
                "color": "bg-blue-600",
                "position": [0.0, 0.0],
                "size": 12.0,
                "shape": "full-width",
                "excludeLegend": true
            }],
            "objects": [{
                "name": "Console",
                "position": [16.0, 24.0],
                "size": 1.0,
                "color": "bg-amber-600"
            }],
            "rulers": [
                {"placement": "left", "start": [0.0, 0.0], "length": 12.0},
                {"placement": "inside", "start": [16.0, 24.0], "end": [16.0, 36.0]}
            ]
        });
        let map: DeploymentMap = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(map.game_size, GameSize::Medium);
        assert!(map.zones[0].exclude_legend);
        assert!(!map.zones[0].hide_name);
        assert!(matches!(map.rulers()[1], Ruler::Inside(_)));
        assert_eq!(serde_json::to_value(&map).unwrap(), value);
    }

    #[test]
    fn unknown_shape_and_placement_survive_parsing() {
        let map: DeploymentMap = serde_json::from_value(json!({
            "gameSizes": "150P",
            "zones": [{"name": "Odd", "color": "", "position": [1, 1], "size": 1, "shape": "hexagon"}],
            "objects": [],
            "rulers": [{"placement": "diagonal", "start": [0, 0], "length": 3}]
        }))
        .unwrap();
        assert_eq!(map.zones[0].shape, ZoneShape::Unrecognized("hexagon".into()));
        assert_eq!(map.rulers()[0].placement(), "diagonal");
    }

    #[test]
    fn invalid_game_size_fails_parsing() {
        let err = serde_json::from_value::<DeploymentMap>(json!({
            "gameSizes": "1000P", "zones": [], "objects": []
        }))
        .unwrap_err();
        assert!(err.to_string().contains("invalid game size"));
    }

    #[test]
    fn inside_ruler_requires_end() {
        let err = serde_json::from_value::<Ruler>(json!({"placement": "inside", "start": [1, 1]}))
            .unwrap_err();
        assert!(err.to_string().contains("missing `end`"));
    }

    #[test]
    fn misspelled_placement_without_length_still_parses() {
        let map: DeploymentMap = serde_json::from_value(json!({
            "gameSizes": "300P / 350P / 400P",
            "zones": [{"name": "Deploy", "color": "", "position": [0, 0], "size": 8, "shape": "full-width"}],
            "objects": [],
            "rulers": [
                {"placement": "insde", "start": [5, 5], "end": [10, 10]},
                {"placement": "left", "start": [0, 0], "length": 12}
            ]
        }))
        .unwrap();
        assert_eq!(map.rulers().len(), 2);
        assert!(matches!(
            &map.rulers()[0],
            Ruler::Outside(OutsideRuler { placement: RulerPlacement::Unrecognized(p), .. }) if p == "insde"
        ));
    }

    #[test]
    fn outside_ruler_requires_length() {
        assert!(serde_json::from_value::<Ruler>(json!({"placement": "top", "start": [1, 0]})).is_err());
    }

    #[test]
    fn builder_defaults() {
        let map = DeploymentMap::default();
        assert_eq!(map.game_size, GameSize::Large);
        assert!(map.zones.is_empty() && map.objects.is_empty() && map.rulers.is_none());

        let zone = Zone::placeholder();
        assert_eq!(zone.name, "zone");
        assert_eq!(zone.shape, ZoneShape::FullWidth);
        assert_eq!(zone.size, 1.0);
        assert_eq!(zone.position, [0.0, 0.0]);

        let object = MapObject::placeholder();
        assert_eq!(object.name, "object");
        assert_eq!(object.size, 4.0);
    }

    #[test]
    fn editing_returns_new_values() {
        let original = DeploymentMap::default().with_zone(Zone::placeholder());
        let renamed = original.clone().replace_zone(0, |z| Zone {
            name: "Dead Zone".into(),
            ..z
        });
        assert_eq!(original.zones[0].name, "zone");
        assert_eq!(renamed.zones[0].name, "Dead Zone");

        let trimmed = renamed.remove_zone(0).remove_zone(5);
        assert!(trimmed.zones.is_empty());

        let ruled = trimmed
            .with_ruler(Ruler::outside(RulerPlacement::Top, [0.0, 0.0], 8.0))
            .replace_ruler(0, |_| Ruler::inside([1.0, 1.0], [2.0, 2.0], None));
        assert_eq!(ruled.rulers()[0].placement(), "inside");
        assert!(ruled.remove_ruler(0).rulers().is_empty());
    }
}
