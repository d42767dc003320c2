//! Spacers, stem and handlebar, stacked on top of the head tube.

use std::f64::consts::PI;

use glam::dvec2;

use crate::frame::HeadTube;
use crate::geometry::{direction, rotate};
use crate::segment::{Segment, impl_segment_access};
use crate::types::{Angle, Coordinates};

/// Headset spacers, from the top of the stack down to the head tube top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spacers {
    segment: Segment,
    steerer_angle: Angle,
}

impl Spacers {
    pub fn new(head_tube: &HeadTube, length: f64) -> Self {
        let top = head_tube.start();
        let start = top + steerer_direction(head_tube) * length;
        Self {
            segment: Segment::new(start, top),
            steerer_angle: head_tube.angle(),
        }
    }

    pub fn steerer_angle(&self) -> Angle {
        self.steerer_angle
    }
}

/// Stem, from the bar clamp back to the steerer.
///
/// A 0° stem is perpendicular to the steering axis; positive angles rise.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stem {
    segment: Segment,
}

impl Stem {
    pub fn new(spacers: &Spacers, length: f64, angle: Angle) -> Self {
        let base = spacers.start();
        let perpendicular = Angle::RIGHT - spacers.steerer_angle();
        let clamp = rotate(base + dvec2(length, 0.0), perpendicular + angle, base);
        Self {
            segment: Segment::new(clamp, base),
        }
    }
}

/// Where the hands go.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandleBar {
    coordinates: Coordinates,
    width: f64,
}

impl HandleBar {
    pub fn new(stem: &Stem, reach: f64, height: f64, width: f64) -> Self {
        Self {
            coordinates: stem.start() + dvec2(reach, height),
            width,
        }
    }

    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    /// Arm length as seen from the side, with the hands spread across the bar.
    /// None if the arm cannot span half the bar.
    pub fn projected_arm_length(&self, arm_length: f64) -> Option<f64> {
        let half = self.width / 2.0;
        if arm_length < half {
            return None;
        }
        Some((arm_length * arm_length - half * half).sqrt())
    }
}

impl_segment_access!(Spacers, Stem);

/// Unit vector up the steering axis.
pub fn steerer_direction(head_tube: &HeadTube) -> glam::DVec2 {
    direction(Angle::from_radians(PI) - head_tube.angle())
}
