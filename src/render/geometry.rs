//! Table dimensions and the inch → percent affine mapping

use std::fmt;

use crate::errors::MapError;
use crate::map::{GameSize, Position};
use crate::types::{Inches, Percent, Point, PtIn, PtPct, Size, SizePct};

/// Physical table size for a resolved game size
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TableDimensions {
    pub width: Inches,
    pub height: Inches,
}

impl TableDimensions {
    pub fn for_game_size(size: GameSize) -> Self {
        let (width, height) = size.table_size();
        TableDimensions { width, height }
    }

    /// Denominator for ruler and diagonal lengths, so one inch maps to the
    /// same share of the longer axis whatever the orientation.
    pub fn longest_side(&self) -> Inches {
        self.width.max(self.height)
    }

    pub fn diagonal(&self) -> Inches {
        Inches(self.width.0.hypot(self.height.0))
    }

    pub fn center(&self) -> PtIn {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Whether `pos` lies on the table, edges included
    pub fn contains(&self, pos: Position) -> bool {
        let [x, y] = pos;
        (0.0..=self.width.0).contains(&x) && (0.0..=self.height.0).contains(&y)
    }

    fn pct(len: Inches, whole: Inches) -> Percent {
        // `new` guarantees a non-zero denominator
        len.percent_of(whole).unwrap_or(Percent::ZERO)
    }

    /// Percent of the table width
    pub fn pct_x(&self, x: Inches) -> Percent {
        Self::pct(x, self.width)
    }

    /// Percent of the table height
    pub fn pct_y(&self, y: Inches) -> Percent {
        Self::pct(y, self.height)
    }

    /// Percent of the longest side
    pub fn pct_longest(&self, len: Inches) -> Percent {
        Self::pct(len, self.longest_side())
    }
}

impl fmt::Display for TableDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.width, self.height)
    }
}

/// Resolve a game size label to table dimensions
pub fn resolve_dimensions(game_size: &str) -> Result<TableDimensions, MapError> {
    let size: GameSize = game_size.parse()?;
    Ok(TableDimensions::for_game_size(size))
}

/// Top/left offsets of `pos` within a box of the table's aspect ratio
pub fn to_normalized_position(pos: Position, dims: &TableDimensions) -> PtPct {
    let [x, y] = pos;
    Point::new(dims.pct_x(Inches(x)), dims.pct_y(Inches(y)))
}

/// Same mapping as [`to_normalized_position`], applied to an extent
pub fn to_normalized_size(size: Size<Inches>, dims: &TableDimensions) -> SizePct {
    Size::new(dims.pct_x(size.w), dims.pct_y(size.h))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn large() -> TableDimensions {
        TableDimensions::for_game_size(GameSize::Large)
    }

    #[test]
    fn resolves_all_game_sizes() {
        let expected = [("150P", 24.0, 32.0), ("200P / 250P", 32.0, 48.0), ("300P / 350P / 400P", 48.0, 48.0)];
        for (label, w, h) in expected {
            let dims = resolve_dimensions(label).unwrap();
            assert_eq!((dims.width.0, dims.height.0), (w, h));
            assert!(dims.width.0 > 0.0 && dims.height.0 > 0.0);
        }
    }

    #[test]
    fn unknown_game_size_is_fatal() {
        assert!(matches!(
            resolve_dimensions("600P"),
            Err(MapError::InvalidGameSize { .. })
        ));
    }

    #[test]
    fn center_of_square_table_is_half_way() {
        let p = to_normalized_position([24.0, 24.0], &large());
        assert_eq!(p, Point::new(Percent(50.0), Percent(50.0)));
    }

    #[test]
    fn normalized_position_uses_each_axis() {
        let dims = TableDimensions::for_game_size(GameSize::Small);
        let p = to_normalized_position([6.0, 8.0], &dims);
        assert_eq!(p, Point::new(Percent(25.0), Percent(25.0)));
    }

    #[test]
    fn normalized_size_uses_each_axis() {
        let dims = TableDimensions::for_game_size(GameSize::Medium);
        let s = to_normalized_size(Size::new(Inches(8.0), Inches(8.0)), &dims);
        assert_eq!(s.w, Percent(25.0));
        assert!((s.h.0 - 100.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn longest_side_and_diagonal() {
        let dims = TableDimensions::for_game_size(GameSize::Small);
        assert_eq!(dims.longest_side(), Inches(32.0));
        assert_eq!(dims.diagonal(), Inches(40.0));
        assert_eq!(large().longest_side(), Inches(48.0));
    }

    #[test]
    fn contains_includes_edges() {
        let dims = large();
        assert!(dims.contains([0.0, 48.0]));
        assert!(!dims.contains([-0.5, 10.0]));
        assert!(!dims.contains([10.0, 48.5]));
    }

    #[test]
    fn display_label() {
        insta::assert_snapshot!(large().to_string(), @r#"48" x 48""#);
    }
}
