//! Per-shape zone layout rules
//!
//! Each zone shape is its own rule type that knows:
//! - Where the shape is anchored (center, top edge, or a single axis)
//! - Its normalized extent
//! - Where its on-map label goes, if it has one

use enum_dispatch::enum_dispatch;

use crate::errors::MapError;
use crate::map::{Zone, ZoneShape};
use crate::types::{Degrees, Inches, Percent, PtPct, Size, SizePct};

use super::geometry::{TableDimensions, to_normalized_position, to_normalized_size};

/// Normalized geometry a rendering surface paints for one zone
#[derive(Clone, Debug, PartialEq)]
pub enum ZoneGeometry {
    /// Axis-aligned rectangle centered on `center`
    Rect { center: PtPct, extent: SizePct },
    /// Circle inscribed in `extent`, centered on `center`
    Circle { center: PtPct, extent: SizePct },
    /// Full-width band whose top edge sits at `top`
    Band { top: Percent, height: Percent },
    /// Zero-height hairline spanning the table width
    HorizontalLine { y: Percent },
    /// Zero-width hairline spanning the table height
    VerticalLine { x: Percent },
    /// Line of `length` (% of the longest side) centered on `center`,
    /// drawn vertically then rotated by `angle`
    Diagonal {
        center: PtPct,
        length: Percent,
        angle: Degrees,
    },
}

/// Where a zone's name is written relative to its shape
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelPlacement {
    /// Centered on the shape
    Centered,
    /// Offset from the center toward the table interior
    Quadrant { east: bool, south: bool },
}

/// Common behavior for all zone shapes
#[enum_dispatch]
pub trait ZoneRule {
    /// Normalized geometry for `zone` on a table of `dims`
    fn geometry(&self, zone: &Zone, dims: &TableDimensions) -> ZoneGeometry;

    /// Label placement, or None for shapes that never carry a label
    fn label_placement(&self, _zone: &Zone, _dims: &TableDimensions) -> Option<LabelPlacement> {
        Some(LabelPlacement::Centered)
    }
}

/// Dispatch over the closed set of zone shapes
#[enum_dispatch(ZoneRule)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShapeRule {
    BoxRule,
    CircleRule,
    FullWidthRule,
    HorizLineRule,
    VertLineRule,
    DiagLineRule,
}

impl TryFrom<&ZoneShape> for ShapeRule {
    type Error = MapError;

    fn try_from(shape: &ZoneShape) -> Result<Self, Self::Error> {
        Ok(match shape {
            ZoneShape::Box => BoxRule.into(),
            ZoneShape::Circle => CircleRule.into(),
            ZoneShape::FullWidth => FullWidthRule.into(),
            ZoneShape::HorizLine => HorizLineRule.into(),
            ZoneShape::VertLine => VertLineRule.into(),
            ZoneShape::DiagLine => DiagLineRule { flipped: false }.into(),
            ZoneShape::DiagLineFlipped => DiagLineRule { flipped: true }.into(),
            ZoneShape::Unrecognized(name) => {
                return Err(MapError::UnknownShape { shape: name.clone() });
            }
        })
    }
}

// ============================================================================
// Shape Rules
// ============================================================================

/// Square of edge `size`, centered on the position
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxRule;

impl ZoneRule for BoxRule {
    fn geometry(&self, zone: &Zone, dims: &TableDimensions) -> ZoneGeometry {
        let edge = Inches(zone.size);
        ZoneGeometry::Rect {
            center: to_normalized_position(zone.position, dims),
            extent: to_normalized_size(Size::new(edge, edge), dims),
        }
    }
}

/// Circle of radius `size`, centered on the position
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleRule;

impl ZoneRule for CircleRule {
    fn geometry(&self, zone: &Zone, dims: &TableDimensions) -> ZoneGeometry {
        let diameter = Inches(zone.size * 2.0);
        ZoneGeometry::Circle {
            center: to_normalized_position(zone.position, dims),
            extent: to_normalized_size(Size::new(diameter, diameter), dims),
        }
    }

    fn label_placement(&self, zone: &Zone, dims: &TableDimensions) -> Option<LabelPlacement> {
        let center = dims.center();
        let [x, y] = zone.position;
        Some(LabelPlacement::Quadrant {
            east: x <= center.x.0,
            south: y <= center.y.0,
        })
    }
}

/// Band across the whole table width, `size` tall, top edge at position.y
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FullWidthRule;

impl ZoneRule for FullWidthRule {
    fn geometry(&self, zone: &Zone, dims: &TableDimensions) -> ZoneGeometry {
        ZoneGeometry::Band {
            top: dims.pct_y(Inches(zone.position[1])),
            height: dims.pct_y(Inches(zone.size)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HorizLineRule;

impl ZoneRule for HorizLineRule {
    fn geometry(&self, zone: &Zone, dims: &TableDimensions) -> ZoneGeometry {
        ZoneGeometry::HorizontalLine {
            y: dims.pct_y(Inches(zone.position[1])),
        }
    }

    fn label_placement(&self, _zone: &Zone, _dims: &TableDimensions) -> Option<LabelPlacement> {
        None
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VertLineRule;

impl ZoneRule for VertLineRule {
    fn geometry(&self, zone: &Zone, dims: &TableDimensions) -> ZoneGeometry {
        ZoneGeometry::VerticalLine {
            x: dims.pct_x(Inches(zone.position[0])),
        }
    }

    fn label_placement(&self, _zone: &Zone, _dims: &TableDimensions) -> Option<LabelPlacement> {
        None
    }
}

/// Table-diagonal line through the position.
///
/// The angle comes from the table aspect, not the zone: `atan2(width,
/// height)` turns a vertical line onto the corner-to-corner diagonal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DiagLineRule {
    pub flipped: bool,
}

impl ZoneRule for DiagLineRule {
    fn geometry(&self, zone: &Zone, dims: &TableDimensions) -> ZoneGeometry {
        let angle = Degrees::from_radians(dims.width.0.atan2(dims.height.0));
        ZoneGeometry::Diagonal {
            center: to_normalized_position(zone.position, dims),
            length: dims.pct_longest(dims.diagonal()),
            angle: if self.flipped { -angle } else { angle },
        }
    }

    fn label_placement(&self, _zone: &Zone, _dims: &TableDimensions) -> Option<LabelPlacement> {
        None
    }
}
