//! Numeric primitives shared by every component.
//!
//! All lengths are millimetres and all coordinates live in a Y-up plane with
//! the bottom bracket as the usual origin. Angles are stored in radians and
//! only converted from degrees at the parameter boundary.

use std::fmt;
use std::ops::{Add, Neg, Sub};

use glam::DVec2;

/// An (x, y) position in millimetres.
pub type Coordinates = DVec2;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Reject NaN and infinite inputs before they leak into the trigonometry.
#[inline]
pub fn check_finite(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else {
        Ok(val)
    }
}

/// Plane angle, stored in radians.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Angle(f64);

impl Angle {
    pub const ZERO: Angle = Angle(0.0);
    pub const RIGHT: Angle = Angle(std::f64::consts::FRAC_PI_2);

    #[inline]
    pub const fn from_radians(rad: f64) -> Angle {
        Angle(rad)
    }

    #[inline]
    pub fn from_degrees(deg: f64) -> Angle {
        Angle(crate::geometry::to_radians(deg))
    }

    #[inline]
    pub fn radians(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn degrees(self) -> f64 {
        crate::geometry::to_degrees(self.0)
    }

    #[inline]
    pub fn sin(self) -> f64 {
        self.0.sin()
    }

    #[inline]
    pub fn cos(self) -> f64 {
        self.0.cos()
    }

    #[inline]
    pub fn tan(self) -> f64 {
        self.0.tan()
    }
}

impl Add for Angle {
    type Output = Angle;
    fn add(self, rhs: Angle) -> Angle {
        Angle(self.0 + rhs.0)
    }
}

impl Sub for Angle {
    type Output = Angle;
    fn sub(self, rhs: Angle) -> Angle {
        Angle(self.0 - rhs.0)
    }
}

impl Neg for Angle {
    type Output = Angle;
    fn neg(self) -> Angle {
        Angle(-self.0)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

/// Axis-aligned bounding box in millimetres
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Coordinates,
    pub max: Coordinates,
}

impl Bounds {
    /// Create an empty bounding box (will expand on first point)
    pub fn new() -> Self {
        Bounds {
            min: DVec2::splat(f64::MAX),
            max: DVec2::splat(f64::MIN),
        }
    }

    /// Check if the bounds are empty (never expanded)
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Expand to include a point
    pub fn expand_point(&mut self, p: Coordinates) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    /// Expand to include a circle
    pub fn expand_circle(&mut self, center: Coordinates, radius: f64) {
        self.expand_point(center - DVec2::splat(radius));
        self.expand_point(center + DVec2::splat(radius));
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Coordinates {
        (self.min + self.max) / 2.0
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new()
    }
}
