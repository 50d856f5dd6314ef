//! Default sizes and settings (table space in inches, surface in pixels)

use crate::types::Inches;

pub const TABLE_SMALL: Inches = Inches::new(24.0);
pub const TABLE_MEDIUM: Inches = Inches::new(32.0);
pub const TABLE_LARGE: Inches = Inches::new(48.0);

/// Distance an edge ruler sits outside the table
pub const RULER_OFFSET: Inches = Inches::new(1.0);

/// Inside rulers are nudged sideways so they do not sit on top of markers
pub const RULER_NUDGE_PX: f64 = 10.0;

pub const PIXELS_PER_INCH: f64 = 12.0;
pub const MARGIN: Inches = Inches::new(2.0);
pub const HEADER_HEIGHT_PX: f64 = 40.0;
pub const LEGEND_ROW_PX: f64 = 24.0;
pub const LEGEND_SWATCH_PX: f64 = 14.0;
pub const FONT_SIZE_PX: f64 = 13.0;
pub const CHARWID_PX: f64 = 7.5;

pub const RULER_STROKE_PX: f64 = 2.0;
pub const HAIRLINE_PX: f64 = 1.0;
pub const BORDER_PX: f64 = 1.0;

/// Door markers on objective rooms, in pixels
pub const DOOR_LENGTH_PX: f64 = 16.0;
pub const DOOR_DEPTH_PX: f64 = 3.0;

/// How far into a circle zone its label starts, measured from the far
/// edge as a fraction of the diameter
pub const CIRCLE_LABEL_OFFSET: f64 = 0.53;
