//! Immutable 2D vector used by ruler geometry.
//!
//! Every operation returns a new value, so expressions chain freely:
//! `start.subtract(end).normalize()?.multiply_scalar(16.0)`.

use std::ops::{Add, Mul, Neg, Sub};

use glam::{DVec2, dvec2};

use crate::errors::MapError;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    pub const ZERO: Vector2D = Vector2D { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Vector2D { x, y }
    }

    #[inline]
    fn dvec(self) -> DVec2 {
        dvec2(self.x, self.y)
    }

    pub fn add(self, other: Vector2D) -> Vector2D {
        (self.dvec() + other.dvec()).into()
    }

    pub fn subtract(self, other: Vector2D) -> Vector2D {
        (self.dvec() - other.dvec()).into()
    }

    pub fn multiply_scalar(self, scalar: f64) -> Vector2D {
        (self.dvec() * scalar).into()
    }

    /// Divide both components by `scalar`.
    ///
    /// A zero divisor is reported rather than producing infinities.
    pub fn divide_scalar(self, scalar: f64) -> Result<Vector2D, MapError> {
        if scalar == 0.0 {
            return Err(MapError::DivideByZero);
        }
        Ok((self.dvec() / scalar).into())
    }

    pub fn magnitude(self) -> f64 {
        self.dvec().length()
    }

    /// Unit vector with the same direction.
    ///
    /// Fails on a zero-length vector instead of returning NaN components.
    pub fn normalize(self) -> Result<Vector2D, MapError> {
        let mag = self.magnitude();
        if mag == 0.0 {
            return Err(MapError::ZeroVectorNormalize);
        }
        Ok((self.dvec() / mag).into())
    }

    pub fn dot(self, other: Vector2D) -> f64 {
        self.dvec().dot(other.dvec())
    }

    pub fn distance_to(self, other: Vector2D) -> f64 {
        self.dvec().distance(other.dvec())
    }

    pub fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// Same vector with the y component negated.
    ///
    /// Map positions grow downward; ruler angles are computed with y up.
    pub fn flip_y(self) -> Vector2D {
        Vector2D::new(self.x, -self.y)
    }

    /// Same direction, forced to `length`.
    pub fn with_magnitude(self, length: f64) -> Result<Vector2D, MapError> {
        Ok(self.normalize()?.multiply_scalar(length))
    }
}

impl From<DVec2> for Vector2D {
    fn from(v: DVec2) -> Self {
        Vector2D::new(v.x, v.y)
    }
}

impl From<Vector2D> for DVec2 {
    fn from(v: Vector2D) -> Self {
        v.dvec()
    }
}

impl From<[f64; 2]> for Vector2D {
    fn from([x, y]: [f64; 2]) -> Self {
        Vector2D::new(x, y)
    }
}

impl From<Vector2D> for [f64; 2] {
    fn from(v: Vector2D) -> Self {
        v.to_array()
    }
}

impl From<(f64, f64)> for Vector2D {
    fn from((x, y): (f64, f64)) -> Self {
        Vector2D::new(x, y)
    }
}

impl Add for Vector2D {
    type Output = Vector2D;
    fn add(self, rhs: Vector2D) -> Vector2D {
        Vector2D::add(self, rhs)
    }
}

impl Sub for Vector2D {
    type Output = Vector2D;
    fn sub(self, rhs: Vector2D) -> Vector2D {
        self.subtract(rhs)
    }
}

impl Mul<f64> for Vector2D {
    type Output = Vector2D;
    fn mul(self, rhs: f64) -> Vector2D {
        self.multiply_scalar(rhs)
    }
}

impl Neg for Vector2D {
    type Output = Vector2D;
    fn neg(self) -> Vector2D {
        Vector2D::new(-self.x, -self.y)
    }
}
