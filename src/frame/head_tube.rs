use glam::dvec2;

use super::BottomBracket;
use crate::segment::{Segment, Tilt, impl_segment_access};
use crate::types::{Angle, Coordinates};

/// Head tube, from its top (reach/stack point) down the steering axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeadTube {
    segment: Segment,
    angle: Angle,
}

impl HeadTube {
    pub fn new(bb: &BottomBracket, length: f64, angle: Angle, reach: f64, stack: f64) -> Self {
        let bb = bb.coordinates();
        let start = dvec2(reach + bb.x, stack + bb.y);
        let end = dvec2(
            angle.cos() * length + start.x,
            -angle.sin() * length + start.y,
        );
        Self {
            segment: Segment::new(start, end),
            angle,
        }
    }

    /// Head angle from horizontal, including any leveling tilt.
    pub fn angle(&self) -> Angle {
        self.angle
    }
}

impl Tilt for HeadTube {
    fn tilt(&mut self, origin: Coordinates, angle: Angle) {
        self.segment.tilt(origin, angle);
        self.angle = self.angle - angle;
    }
}

impl_segment_access!(HeadTube);
