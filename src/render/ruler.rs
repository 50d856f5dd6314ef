//! Ruler layout: anchor, rendered length, rotation and label
//!
//! Edge rulers are pushed one inch off the table and drawn along the axis of
//! the edge they hang from. Inside rulers are free vectors: their angle is
//! derived from the start → end delta with the y axis flipped up, and an
//! explicit length overrides the endpoint distance while keeping direction.

use crate::errors::MapError;
use crate::map::{InsideRuler, OutsideRuler, Position, Ruler, RulerPlacement};
use crate::types::{Degrees, Inches, Percent, PtPct};
use crate::vector::Vector2D;

use super::defaults;
use super::geometry::{TableDimensions, to_normalized_position};

/// How a ruler line runs across the surface
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RulerOrientation {
    /// Along the table height (left/right edge)
    Vertical,
    /// Along the table width (top/bottom edge)
    Horizontal,
    /// A vertical line of the given length rotated about its anchor
    Rotated(Degrees),
}

/// Side of the ruler line the label sits on.
///
/// Edge rulers keep their label on the outer side, clear of the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelSide {
    Left,
    Right,
    Above,
    Below,
    /// Beside a rotated ruler, counter-rotated to stay level
    Beside,
}

/// Layout parameters for one ruler
#[derive(Clone, Debug, PartialEq)]
pub struct RulerLayout {
    pub index: usize,
    /// Top-left origin of the ruler line
    pub anchor: PtPct,
    /// Vertical: % of table height. Horizontal: % of table width.
    /// Rotated: % of the longest side.
    pub length: Percent,
    /// Measured length in inches before normalization
    pub inches: Inches,
    pub orientation: RulerOrientation,
    pub label: String,
    pub label_side: LabelSide,
}

impl RulerLayout {
    /// Rotation to apply to the line (zero for edge rulers)
    pub fn angle(&self) -> Degrees {
        match self.orientation {
            RulerOrientation::Rotated(angle) => angle,
            _ => Degrees::ZERO,
        }
    }

    /// Rotation that keeps the label horizontal on a rotated line
    pub fn label_angle(&self) -> Degrees {
        -self.angle()
    }
}

/// Label text: length rounded to a whole inch with an inch mark
pub fn ruler_label(length: f64) -> String {
    format!("{}\"", length.round())
}

/// Lay out any ruler; fails only for unknown placements or a degenerate
/// inside ruler.
pub fn layout_ruler(
    index: usize,
    ruler: &Ruler,
    dims: &TableDimensions,
) -> Result<RulerLayout, MapError> {
    match ruler {
        Ruler::Outside(r) => layout_outside(index, r, dims),
        Ruler::Inside(r) => layout_inside(index, r, dims),
    }
}

/// Lay out an edge-anchored ruler
pub fn layout_outside(
    index: usize,
    ruler: &OutsideRuler,
    dims: &TableDimensions,
) -> Result<RulerLayout, MapError> {
    let [x, y] = ruler.start;
    let offset = defaults::RULER_OFFSET.0;

    let (start, max_length, orientation, label_side): (Position, Inches, _, _) =
        match &ruler.placement {
            RulerPlacement::Left => (
                [x - offset, y],
                dims.height,
                RulerOrientation::Vertical,
                LabelSide::Left,
            ),
            RulerPlacement::Right => (
                [x + offset, y],
                dims.height,
                RulerOrientation::Vertical,
                LabelSide::Right,
            ),
            RulerPlacement::Top => (
                [x, y - offset],
                dims.width,
                RulerOrientation::Horizontal,
                LabelSide::Above,
            ),
            RulerPlacement::Bottom => (
                [x, y + offset],
                dims.width,
                RulerOrientation::Horizontal,
                LabelSide::Below,
            ),
            RulerPlacement::Unrecognized(placement) => {
                return Err(MapError::UnknownPlacement {
                    placement: placement.clone(),
                });
            }
        };

    let inches = Inches(ruler.length);
    Ok(RulerLayout {
        index,
        anchor: to_normalized_position(start, dims),
        length: inches.percent_of(max_length).unwrap_or(Percent::ZERO),
        inches,
        orientation,
        label: ruler_label(ruler.length),
        label_side,
    })
}

/// Lay out a point-to-point ruler
pub fn layout_inside(
    index: usize,
    ruler: &InsideRuler,
    dims: &TableDimensions,
) -> Result<RulerLayout, MapError> {
    let start = Vector2D::from(ruler.start);
    let end = Vector2D::from(ruler.end);

    // The anchor is taken before flipping y into the angle convention
    let anchor = to_normalized_position(start.to_array(), dims);

    let mut delta = start.flip_y().subtract(end.flip_y());
    if let Some(length) = ruler.length.filter(|l| *l != 0.0) {
        delta = delta.with_magnitude(length)?;
    } else if delta.magnitude() == 0.0 {
        return Err(MapError::ZeroVectorNormalize);
    }

    let rendered = delta.magnitude();
    let [dx, dy] = delta.to_array();
    // atan2 takes the x component first: the line is drawn pointing down and
    // rotated clockwise, so this yields the start → end direction on screen.
    let angle = Degrees::from_radians(dx.atan2(dy));

    Ok(RulerLayout {
        index,
        anchor,
        length: dims.pct_longest(Inches(rendered)),
        inches: Inches(rendered),
        orientation: RulerOrientation::Rotated(angle),
        label: ruler_label(rendered),
        label_side: LabelSide::Beside,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::GameSize;

    const EPS: f64 = 1e-9;

    fn large() -> TableDimensions {
        TableDimensions::for_game_size(GameSize::Large)
    }

    #[test]
    fn left_ruler_is_offset_and_scaled_by_height() {
        let ruler = OutsideRuler {
            placement: RulerPlacement::Left,
            start: [0.0, 24.0],
            length: 24.0,
        };
        let layout = layout_outside(0, &ruler, &large()).unwrap();
        assert!((layout.anchor.x.0 + 100.0 / 48.0).abs() < EPS);
        assert_eq!(layout.anchor.y, Percent(50.0));
        assert_eq!(layout.length, Percent(50.0));
        assert_eq!(layout.orientation, RulerOrientation::Vertical);
        assert_eq!(layout.label_side, LabelSide::Left);
        assert_eq!(layout.angle(), Degrees::ZERO);
    }

    #[test]
    fn top_and_bottom_rulers_use_table_width() {
        let dims = TableDimensions::for_game_size(GameSize::Medium);
        let top = OutsideRuler {
            placement: RulerPlacement::Top,
            start: [0.0, 0.0],
            length: 8.0,
        };
        let layout = layout_outside(0, &top, &dims).unwrap();
        assert_eq!(layout.length, Percent(25.0));
        assert_eq!(layout.orientation, RulerOrientation::Horizontal);
        assert!(layout.anchor.y.0 < 0.0);

        let bottom = OutsideRuler {
            placement: RulerPlacement::Bottom,
            start: [0.0, 48.0],
            length: 8.0,
        };
        let layout = layout_outside(1, &bottom, &dims).unwrap();
        assert!(layout.anchor.y.0 > 100.0);
        assert_eq!(layout.label_side, LabelSide::Below);
    }

    #[test]
    fn right_ruler_moves_outward() {
        let ruler = OutsideRuler {
            placement: RulerPlacement::Right,
            start: [48.0, 0.0],
            length: 12.0,
        };
        let layout = layout_outside(0, &ruler, &large()).unwrap();
        assert!(layout.anchor.x.0 > 100.0);
        assert_eq!(layout.label_side, LabelSide::Right);
    }

    #[test]
    fn unknown_placement_is_reported() {
        let ruler = OutsideRuler {
            placement: RulerPlacement::Unrecognized("middle".into()),
            start: [0.0, 0.0],
            length: 1.0,
        };
        assert_eq!(
            layout_outside(0, &ruler, &large()),
            Err(MapError::UnknownPlacement { placement: "middle".into() })
        );
    }

    #[test]
    fn explicit_length_overrides_endpoint_distance() {
        let ruler = InsideRuler {
            start: [24.0, 24.0],
            end: [25.0, 25.0],
            length: Some(16.0),
        };
        let layout = layout_inside(0, &ruler, &large()).unwrap();
        assert!((layout.inches.0 - 16.0).abs() < EPS);
        assert!((layout.length.0 - 16.0 / 48.0 * 100.0).abs() < EPS);
        assert_eq!(layout.anchor.x, Percent(50.0));
        assert_eq!(layout.label, "16\"");
    }

    #[test]
    fn inside_ruler_angle_points_from_start_to_end() {
        // Straight down the table: no rotation of the downward line
        let down = InsideRuler {
            start: [24.0, 12.0],
            end: [24.0, 36.0],
            length: None,
        };
        let layout = layout_inside(0, &down, &large()).unwrap();
        assert!(layout.angle().0.abs() < EPS);
        assert!((layout.length.0 - 50.0).abs() < EPS);

        // Down and to the right: rotate counter-clockwise by 45 degrees
        let diag = InsideRuler {
            start: [24.0, 24.0],
            end: [25.0, 25.0],
            length: None,
        };
        let layout = layout_inside(0, &diag, &large()).unwrap();
        assert!((layout.angle().0 + 45.0).abs() < EPS);
        assert!((layout.label_angle().0 - 45.0).abs() < EPS);
        assert_eq!(layout.label, "1\"");
    }

    #[test]
    fn degenerate_inside_ruler_is_an_error() {
        let ruler = InsideRuler {
            start: [10.0, 10.0],
            end: [10.0, 10.0],
            length: None,
        };
        assert_eq!(
            layout_inside(0, &ruler, &large()),
            Err(MapError::ZeroVectorNormalize)
        );

        let forced = InsideRuler {
            length: Some(4.0),
            ..ruler
        };
        assert_eq!(
            layout_inside(0, &forced, &large()),
            Err(MapError::ZeroVectorNormalize)
        );
    }

    #[test]
    fn labels_round_to_whole_inches() {
        insta::assert_snapshot!(ruler_label(23.6), @r#"24""#);
        insta::assert_snapshot!(ruler_label(std::f64::consts::SQRT_2), @r#"1""#);
    }
}
