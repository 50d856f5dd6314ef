//! Strongly-typed numeric primitives (zero-cost newtypes).
//!
//! Table space is measured in [`Inches`] with the origin at the top-left
//! corner and +y pointing down. Layout output is expressed in [`Percent`]
//! of a table axis, and rotations in [`Degrees`] using the screen
//! convention (positive turns clockwise).

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Length or coordinate on the table, in inches
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Inches(pub f64);

impl Inches {
    pub const ZERO: Inches = Inches(0.0);

    #[inline]
    pub const fn new(val: f64) -> Inches {
        Inches(val)
    }

    #[inline]
    pub fn max(self, other: Inches) -> Inches {
        Inches(self.0.max(other.0))
    }

    /// Express this length as a percentage of `whole`.
    ///
    /// Returns None when `whole` is zero, so a degenerate table never
    /// produces an infinite layout.
    #[inline]
    pub fn percent_of(self, whole: Inches) -> Option<Percent> {
        if whole.0 == 0.0 {
            None
        } else {
            Some(Percent(self.0 / whole.0 * 100.0))
        }
    }
}

impl Add for Inches {
    type Output = Inches;
    fn add(self, rhs: Inches) -> Inches {
        Inches(self.0 + rhs.0)
    }
}

impl Sub for Inches {
    type Output = Inches;
    fn sub(self, rhs: Inches) -> Inches {
        Inches(self.0 - rhs.0)
    }
}

impl Mul<f64> for Inches {
    type Output = Inches;
    fn mul(self, rhs: f64) -> Inches {
        Inches(self.0 * rhs)
    }
}

impl Div<f64> for Inches {
    type Output = Inches;
    fn div(self, rhs: f64) -> Inches {
        Inches(self.0 / rhs)
    }
}

// NOTE: Inches / Inches is intentionally not an operator.
// Use Inches::percent_of(), which refuses a zero denominator.

impl Neg for Inches {
    type Output = Inches;
    fn neg(self) -> Inches {
        Inches(-self.0)
    }
}

impl From<f64> for Inches {
    fn from(v: f64) -> Self {
        Inches(v)
    }
}

impl fmt::Display for Inches {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\"", self.0)
    }
}

/// Normalized coordinate or extent, as a percentage of a table axis
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Percent(pub f64);

impl Percent {
    pub const ZERO: Percent = Percent(0.0);

    /// Fraction in 0..1 (for surfaces that want unit coordinates)
    #[inline]
    pub fn fraction(self) -> f64 {
        self.0 / 100.0
    }

    /// Resolve against a concrete extent on a rendering surface.
    #[inline]
    pub fn of(self, extent: f64) -> f64 {
        self.fraction() * extent
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Rotation in degrees, positive is clockwise on a y-down surface
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Degrees(pub f64);

impl Degrees {
    pub const ZERO: Degrees = Degrees(0.0);

    #[inline]
    pub fn from_radians(rad: f64) -> Degrees {
        Degrees(rad.to_degrees())
    }
}

impl Neg for Degrees {
    type Output = Degrees;
    fn neg(self) -> Degrees {
        Degrees(-self.0)
    }
}

impl fmt::Display for Degrees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}deg", self.0)
    }
}

/// Generic 2D point
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

impl<T> Point<T> {
    pub fn new(x: T, y: T) -> Self {
        Point { x, y }
    }
}

/// 2D size
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size<T> {
    pub w: T,
    pub h: T,
}

impl<T> Size<T> {
    pub fn new(w: T, h: T) -> Self {
        Size { w, h }
    }
}

/// Convenient aliases
pub type PtIn = Point<Inches>;
pub type PtPct = Point<Percent>;
pub type SizePct = Size<Percent>;
