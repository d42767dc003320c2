//! The directed line segment every frame, cockpit and rider part is built on.

use crate::geometry::{distance, rotate};
use crate::types::{Angle, Coordinates};

/// A directed segment. Its endpoints only move through [`Tilt`].
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Segment {
    start: Coordinates,
    end: Coordinates,
}

impl Segment {
    pub fn new(start: Coordinates, end: Coordinates) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn start(&self) -> Coordinates {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Coordinates {
        self.end
    }

    pub fn length(&self) -> f64 {
        distance(self.start, self.end)
    }

    /// Angle of `start → end` measured from the positive x axis.
    pub fn heading(&self) -> Angle {
        let d = self.end - self.start;
        Angle::from_radians(d.y.atan2(d.x))
    }
}

/// Rigid rotation about a pivot, used once by the wheel leveling pass.
pub trait Tilt {
    fn tilt(&mut self, origin: Coordinates, angle: Angle);
}

impl Tilt for Segment {
    fn tilt(&mut self, origin: Coordinates, angle: Angle) {
        self.start = rotate(self.start, angle, origin);
        self.end = rotate(self.end, angle, origin);
    }
}

/// Give a part type read access to its inner `segment` field.
macro_rules! impl_segment_access {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl std::ops::Deref for $ty {
                type Target = $crate::segment::Segment;
                fn deref(&self) -> &Self::Target {
                    &self.segment
                }
            }
        )+
    };
}
pub(crate) use impl_segment_access;
