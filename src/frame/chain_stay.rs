use glam::dvec2;

use super::BottomBracket;
use crate::errors::GeometryError;
use crate::segment::{Segment, Tilt, impl_segment_access};
use crate::types::{Angle, Coordinates};

/// Chain stay, from the rear axle to the bottom bracket.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChainStay {
    segment: Segment,
    bb_drop_length: f64,
}

impl ChainStay {
    pub fn new(
        bb: &BottomBracket,
        bb_drop_length: f64,
        length: f64,
    ) -> Result<Self, GeometryError> {
        if length < bb_drop_length.abs() {
            return Err(GeometryError::ChainStayTooShort {
                chain_stay: length,
                drop: bb_drop_length,
            });
        }
        let bb = bb.coordinates();
        let run = (length * length - bb_drop_length * bb_drop_length).sqrt();
        let start = dvec2(bb.x - run, bb.y + bb_drop_length);
        Ok(Self {
            segment: Segment::new(start, bb),
            bb_drop_length,
        })
    }

    /// Rear axle position.
    pub fn rear_axle(&self) -> Coordinates {
        self.start()
    }

    pub fn bb_drop_length(&self) -> f64 {
        self.bb_drop_length
    }
}

impl Tilt for ChainStay {
    fn tilt(&mut self, origin: Coordinates, angle: Angle) {
        self.segment.tilt(origin, angle);
    }
}

impl_segment_access!(ChainStay);
