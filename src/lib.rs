//! Deployment map geometry and rendering for tabletop mission diagrams.
//!
//! A [`DeploymentMap`] describes zones, objective markers and measuring
//! rulers in table inches. [`layout_map`] turns it into percentages of the
//! table plus rotation angles and labels, enough for any surface to paint;
//! [`render_svg`] is the bundled surface.

pub mod content;
pub mod errors;
pub mod log;
pub mod map;
pub mod render;
pub mod types;
pub mod vector;

pub use errors::{ContentError, EntityKind, MapError, MapWarning};
pub use map::{
    DeploymentMap, GameSize, InsideRuler, MapObject, OutsideRuler, Position, Ruler,
    RulerPlacement, Zone, ZoneShape,
};
pub use render::layout::{MapLayout, layout_map};
pub use render::svg::RenderOptions;
pub use vector::Vector2D;

/// Lay out and render a map to an SVG document.
pub fn render_svg(map: &DeploymentMap, options: &RenderOptions) -> Result<String, MapError> {
    let layout = layout_map(map)?;
    render::svg::generate_svg(&layout, options)
}

/// Parse a map from JSON, pointing at the offending span on failure.
pub fn map_from_json(name: &str, source: &str) -> Result<DeploymentMap, ContentError> {
    serde_json::from_str(source).map_err(|e| ContentError::json(name, source, &e))
}

/// Parse and render map JSON with default options.
///
/// Returns the SVG string on success, or a report with diagnostics.
pub fn render_json(source: &str) -> Result<String, miette::Report> {
    let map = map_from_json("map.json", source)?;
    let svg = render_svg(&map, &RenderOptions::default())?;
    Ok(svg)
}
