use glam::dvec2;

use super::{BottomBracket, HeadTube};
use crate::errors::GeometryError;
use crate::segment::{Segment, Tilt, impl_segment_access};
use crate::types::{Angle, Coordinates};

/// Horizontal line at stack height from the effective seat tube line to the
/// head tube top. Only a construction aid for the seat tube, never drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TopTubeHorizontal {
    segment: Segment,
}

impl TopTubeHorizontal {
    pub fn new(
        bb: &BottomBracket,
        head_tube: &HeadTube,
        effective_seat_tube_angle: Angle,
    ) -> Result<Self, GeometryError> {
        if effective_seat_tube_angle.radians() == 0.0 {
            return Err(GeometryError::ZeroSeatTubeAngle);
        }
        let bb = bb.coordinates();
        let top = head_tube.start();
        let x = (top.y - bb.y) / (-effective_seat_tube_angle).tan() + bb.x;
        Ok(Self {
            segment: Segment::new(dvec2(x, top.y), top),
        })
    }
}

impl Tilt for TopTubeHorizontal {
    fn tilt(&mut self, origin: Coordinates, angle: Angle) {
        self.segment.tilt(origin, angle);
    }
}

impl_segment_access!(TopTubeHorizontal);
