use std::f64::consts::PI;

use glam::dvec2;

use super::{bottom_dead_centre, saddle_to_pedal_reach};
use crate::defaults::{INSEAM_TOLERANCE, SEAT_POST_MAX_LENGTH, SEAT_POST_STEP};
use crate::drivetrain::Crank;
use crate::errors::PoseError;
use crate::frame::{BottomBracket, SeatTube};
use crate::geometry::direction;
use crate::log::debug;
use crate::segment::{Segment, impl_segment_access};
use crate::types::{Angle, Coordinates};

/// Seatpost, from the saddle down to the seat tube top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeatPost {
    segment: Segment,
    length: f64,
}

impl SeatPost {
    /// Shortest extension that brings the saddle to within tolerance of the
    /// rider's inseam, measured to the pedal at bottom dead centre.
    pub fn new(
        bb: &BottomBracket,
        seat_tube: &SeatTube,
        crank: &Crank,
        inseam: f64,
        offset: f64,
    ) -> Result<Self, PoseError> {
        let pedal = bottom_dead_centre(bb, crank);
        let lateral = crank.lateral_offset();
        let reach = |length: f64| {
            saddle_to_pedal_reach(Self::saddle_at(seat_tube, length, offset), pedal, lateral)
        };

        let at_zero = reach(0.0);
        if at_zero > inseam {
            return Err(PoseError::InseamTooShort {
                reach: at_zero,
                inseam,
            });
        }

        let steps = (SEAT_POST_MAX_LENGTH / SEAT_POST_STEP) as usize;
        for step in 0..=steps {
            let length = step as f64 * SEAT_POST_STEP;
            if inseam - reach(length) < INSEAM_TOLERANCE {
                let saddle = Self::saddle_at(seat_tube, length, offset);
                debug!(length, x = saddle.x, y = saddle.y, "seatpost");
                return Ok(Self {
                    segment: Segment::new(saddle, seat_tube.start()),
                    length,
                });
            }
        }
        Err(PoseError::SeatPostTooLong {
            max: SEAT_POST_MAX_LENGTH,
        })
    }

    /// Saddle clamp for a given extension along the seat tube, set back
    /// horizontally by the post offset.
    fn saddle_at(seat_tube: &SeatTube, length: f64, offset: f64) -> Coordinates {
        let up = direction(Angle::from_radians(PI) - seat_tube.actual_angle());
        seat_tube.start() + up * length - dvec2(offset, 0.0)
    }

    pub fn saddle(&self) -> Coordinates {
        self.start()
    }

    /// Extension out of the seat tube.
    pub fn length(&self) -> f64 {
        self.length
    }
}

impl_segment_access!(SeatPost);
