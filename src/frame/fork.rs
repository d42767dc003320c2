use glam::dvec2;

use super::{BottomBracket, ChainStay, HeadTube};
use crate::errors::GeometryError;
use crate::geometry::rotate;
use crate::log::debug;
use crate::segment::{Segment, Tilt, impl_segment_access};
use crate::types::{Angle, Coordinates};

/// Which input placed the front axle
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ForkPlacement {
    /// Right triangle from front-center length and bottom bracket drop
    FrontCenter,
    /// Fixed distance ahead of the rear axle
    WheelBase,
    /// Offset and crown-to-axle along the steering axis
    OffsetAndCrown,
}

/// Fork, from the head tube bottom to the front axle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fork {
    segment: Segment,
    offset_length: f64,
    placement: ForkPlacement,
}

impl Fork {
    /// Place the front axle. A non-zero crown-to-axle length always wins;
    /// otherwise front center is tried before wheelbase.
    pub fn new(
        bb: &BottomBracket,
        head_tube: &HeadTube,
        chain_stay: &ChainStay,
        offset_length: f64,
        crown_to_axle_length: f64,
        front_center_length: f64,
        wheel_base: f64,
    ) -> Result<Self, GeometryError> {
        let start = head_tube.end();
        let drop = chain_stay.bb_drop_length();

        let (placement, axle) = if crown_to_axle_length == 0.0 && front_center_length != 0.0 {
            if front_center_length < drop.abs() {
                return Err(GeometryError::FrontCenterTooShort {
                    front_center: front_center_length,
                    drop,
                });
            }
            let bb = bb.coordinates();
            let run = (front_center_length * front_center_length - drop * drop).sqrt();
            (ForkPlacement::FrontCenter, dvec2(bb.x + run, chain_stay.start().y))
        } else if crown_to_axle_length == 0.0 && wheel_base != 0.0 {
            let rear = chain_stay.start();
            (ForkPlacement::WheelBase, dvec2(rear.x + wheel_base, rear.y))
        } else {
            // Build with a vertical steering axis, then lean it to the head angle.
            let upright = start + dvec2(offset_length, -crown_to_axle_length);
            let axle = rotate(upright, Angle::RIGHT - head_tube.angle(), start);
            (ForkPlacement::OffsetAndCrown, axle)
        };

        debug!(?placement, x = axle.x, y = axle.y, "front axle");
        Ok(Self {
            segment: Segment::new(start, axle),
            offset_length,
            placement,
        })
    }

    pub fn front_axle(&self) -> Coordinates {
        self.end()
    }

    pub fn offset_length(&self) -> f64 {
        self.offset_length
    }

    pub fn placement(&self) -> ForkPlacement {
        self.placement
    }
}

impl Tilt for Fork {
    fn tilt(&mut self, origin: Coordinates, angle: Angle) {
        self.segment.tilt(origin, angle);
    }
}

impl_segment_access!(Fork);
