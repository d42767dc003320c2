use glam::dvec2;

use super::{BottomBracket, TopTubeHorizontal};
use crate::errors::GeometryError;
use crate::geometry::{rotate, solve_quadratic};
use crate::log::debug;
use crate::segment::{Segment, Tilt, impl_segment_access};
use crate::types::{Angle, Coordinates};

/// Seat tube, from its top down to the bottom bracket.
///
/// The top lies on the line through the top-tube-horizontal start at the
/// actual seat angle, `length` away from the bottom bracket. When actual and
/// effective angles differ the tube is drawn bent at half its height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeatTube {
    segment: Segment,
    break_point: Coordinates,
    actual_angle: Angle,
}

impl SeatTube {
    pub fn new(
        bb: &BottomBracket,
        top_tube_horizontal: &TopTubeHorizontal,
        length: f64,
        actual_angle: Angle,
    ) -> Result<Self, GeometryError> {
        let bb = bb.coordinates();
        let h = top_tube_horizontal.start();

        // Line y = t·x + k through h, intersected with the circle of radius
        // `length` around the bottom bracket.
        let t = (-actual_angle).tan();
        let k = h.y - t * h.x;
        let a = 1.0 + t * t;
        let b = 2.0 * ((k - bb.y) * t - bb.x);
        let c = (k - bb.y).powi(2) - length * length + bb.x * bb.x;
        let (x, _) = solve_quadratic(a, b, c).ok_or(GeometryError::SeatTubeUnreachable { length })?;
        let start = dvec2(x, t * x + k);

        let break_point = Self::break_point(bb, start, h, length)?;
        debug!(
            x = start.x,
            y = start.y,
            bx = break_point.x,
            by = break_point.y,
            "seat tube"
        );

        Ok(Self {
            segment: Segment::new(start, bb),
            break_point,
            actual_angle,
        })
    }

    /// Point at half the tube length above the bottom bracket, on the line
    /// from the tube top through the top-tube-horizontal start.
    fn break_point(
        bb: Coordinates,
        start: Coordinates,
        h: Coordinates,
        length: f64,
    ) -> Result<Coordinates, GeometryError> {
        let dx = h.x - start.x;
        let dy = h.y - start.y;
        if dx == 0.0 || dy == 0.0 {
            return Err(GeometryError::DegenerateSeatTube);
        }
        let slope = dy / dx;
        let y = bb.y + length / 2.0;
        Ok(dvec2((y - start.y) / slope + start.x, y))
    }

    pub fn actual_angle(&self) -> Angle {
        self.actual_angle
    }

    pub fn break_point_coordinates(&self) -> Coordinates {
        self.break_point
    }
}

impl Tilt for SeatTube {
    fn tilt(&mut self, origin: Coordinates, angle: Angle) {
        self.segment.tilt(origin, angle);
        self.break_point = rotate(self.break_point, angle, origin);
        self.actual_angle = self.actual_angle - angle;
    }
}

impl_segment_access!(SeatTube);
