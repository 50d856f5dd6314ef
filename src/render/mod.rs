//! Layout and rendering of deployment maps
//!
//! This module is organized into submodules:
//! - `defaults`: Table sizes, ruler offsets and surface settings
//! - `geometry`: Table dimensions and inch → percent normalization
//! - `shapes`: Per-shape zone rules dispatched through `ZoneRule`
//! - `ruler`: Edge and inside ruler layout
//! - `legend`: Legend and zone key entries
//! - `layout`: Whole-map layout with per-entity warnings
//! - `palette`: Color tokens and their fills
//! - `svg`: SVG generation

pub mod defaults;
pub mod geometry;
pub mod layout;
pub mod legend;
pub mod palette;
pub mod ruler;
pub mod shapes;
pub mod svg;

pub use geometry::{TableDimensions, resolve_dimensions, to_normalized_position, to_normalized_size};
pub use layout::{MapLayout, ObjectLayout, ZoneLabel, ZoneLayout, layout_map};
pub use legend::{LegendEntry, Swatch, key_entries, legend_entries};
pub use ruler::{LabelSide, RulerLayout, RulerOrientation, layout_ruler};
pub use shapes::{LabelPlacement, ZoneGeometry};
pub use svg::{RenderOptions, generate_svg};
