//! Error types with rich diagnostics using miette
//!
//! Map errors are either fatal to the map being rendered (bad game size,
//! degenerate vector math) or scoped to a single zone/object/ruler, in
//! which case layout records them as [`MapWarning`]s and carries on.
//! Content errors carry source spans so a broken JSON file points at the
//! offending line.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

// ============================================================================
// Map Errors
// ============================================================================

/// Errors raised by map geometry and layout
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum MapError {
    #[error("invalid game size: {value:?}")]
    #[diagnostic(
        code(deploymap::map::invalid_game_size),
        help("expected one of \"150P\", \"200P / 250P\" or \"300P / 350P / 400P\"")
    )]
    InvalidGameSize { value: String },

    #[error("cannot normalize a zero vector")]
    #[diagnostic(
        code(deploymap::vector::zero_vector_normalize),
        help("an inside ruler needs distinct start and end points")
    )]
    ZeroVectorNormalize,

    #[error("cannot divide by zero")]
    #[diagnostic(code(deploymap::vector::divide_by_zero))]
    DivideByZero,

    #[error("unknown zone shape: {shape:?}")]
    #[diagnostic(
        code(deploymap::map::unknown_shape),
        help("known shapes: full-width, circle, box, horiz-line, vert-line, diag-line, diag-line-flipped")
    )]
    UnknownShape { shape: String },

    #[error("unknown ruler placement: {placement:?}")]
    #[diagnostic(
        code(deploymap::map::unknown_placement),
        help("known placements: left, right, top, bottom, inside")
    )]
    UnknownPlacement { placement: String },

    #[error("invalid scale: {value} pixels per inch")]
    #[diagnostic(code(deploymap::render::invalid_scale))]
    InvalidScale { value: f64 },
}

impl MapError {
    /// Whether the error only affects the single entity it came from.
    pub fn is_entity_scoped(&self) -> bool {
        matches!(
            self,
            MapError::UnknownShape { .. }
                | MapError::UnknownPlacement { .. }
                | MapError::ZeroVectorNormalize
        )
    }
}

// ============================================================================
// Layout Warnings
// ============================================================================

/// Which collection of the map an entity lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Zone,
    Object,
    Ruler,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Zone => write!(f, "zone"),
            EntityKind::Object => write!(f, "object"),
            EntityKind::Ruler => write!(f, "ruler"),
        }
    }
}

/// Non-fatal problems found while laying out a map
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum MapWarning {
    /// The entity could not be laid out and was left off the diagram
    #[error("{kind} #{index} skipped: {source}")]
    #[diagnostic(code(deploymap::layout::skipped))]
    Skipped {
        kind: EntityKind,
        index: usize,
        #[source]
        source: MapError,
    },

    #[error("{kind} #{index} at ({x}, {y}) lies outside the {width} x {height} table")]
    #[diagnostic(
        code(deploymap::layout::out_of_bounds),
        help("it will be drawn partly or wholly off the table")
    )]
    OutOfBounds {
        kind: EntityKind,
        index: usize,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },

    #[error("{kind} #{index} has non-positive size {size}")]
    #[diagnostic(code(deploymap::layout::non_positive_size))]
    NonPositiveSize {
        kind: EntityKind,
        index: usize,
        size: f64,
    },
}

// ============================================================================
// Content Errors
// ============================================================================

/// Errors from loading maps and mission content from JSON
#[derive(Error, Diagnostic, Debug)]
pub enum ContentError {
    #[error("invalid JSON: {message}")]
    #[diagnostic(code(deploymap::content::json))]
    Json {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: SourceSpan,
    },

    #[error("{name} does not match the {expected} shape")]
    #[diagnostic(code(deploymap::content::shape_mismatch))]
    ShapeMismatch { name: String, expected: &'static str },

    #[error("could not read {path}")]
    #[diagnostic(code(deploymap::content::io))]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl ContentError {
    /// Build a JSON diagnostic pointing at serde_json's line/column.
    pub fn json(name: &str, source: &str, err: &serde_json::Error) -> Self {
        let offset = line_col_to_offset(source, err.line(), err.column());
        ContentError::Json {
            message: err.to_string(),
            src: NamedSource::new(name, source.to_string()),
            span: SourceSpan::from((offset, 0)),
        }
    }
}

/// Convert serde_json's 1-based line and column into a byte offset.
///
/// Column 0 (reported for errors such as EOF before any token) maps to the
/// start of the line; positions past the end clamp to the source length.
fn line_col_to_offset(source: &str, line: usize, column: usize) -> usize {
    if line == 0 {
        return 0;
    }
    let mut offset = 0;
    for (i, l) in source.split_inclusive('\n').enumerate() {
        if i + 1 == line {
            let within = column.saturating_sub(1).min(l.len());
            return offset + within;
        }
        offset += l.len();
    }
    source.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_scoped_classification() {
        assert!(MapError::UnknownShape { shape: "hex".into() }.is_entity_scoped());
        assert!(MapError::ZeroVectorNormalize.is_entity_scoped());
        assert!(!MapError::InvalidGameSize { value: "500P".into() }.is_entity_scoped());
        assert!(!MapError::DivideByZero.is_entity_scoped());
    }

    #[test]
    fn line_col_offsets() {
        let src = "{\n  \"a\": 1,\n  oops\n}";
        assert_eq!(line_col_to_offset(src, 1, 1), 0);
        assert_eq!(line_col_to_offset(src, 3, 3), 14);
        assert_eq!(line_col_to_offset(src, 9, 1), src.len());
    }

    #[test]
    fn json_error_points_into_source() {
        let src = "{\n  \"gameSizes\": ,\n}";
        let err = serde_json::from_str::<serde_json::Value>(src).unwrap_err();
        match ContentError::json("broken.json", src, &err) {
            ContentError::Json { span, .. } => {
                assert!(span.offset() > 0 && span.offset() < src.len());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn skipped_warning_message() {
        let w = MapWarning::Skipped {
            kind: EntityKind::Zone,
            index: 2,
            source: MapError::UnknownShape { shape: "hex".into() },
        };
        assert_eq!(w.to_string(), "zone #2 skipped: unknown zone shape: \"hex\"");
    }
}
