//! Rider placement: seatpost extension, leg pose and torso pose.
//!
//! These components are optional. A rider who cannot reach the pedals or the
//! bars leaves them absent while the frame stays valid.

mod lower_body;
mod seat_post;
mod upper_body;

pub use lower_body::LowerBody;
pub use seat_post::SeatPost;
pub use upper_body::UpperBody;

use glam::dvec2;

use crate::drivetrain::Crank;
use crate::frame::BottomBracket;
use crate::geometry::distance;
use crate::types::Coordinates;

/// Crank and foot positions for one spin angle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub crank_end: Coordinates,
    pub heel: Coordinates,
    pub knee: Coordinates,
    pub toe: Coordinates,
}

/// Pedal spindle with the crank pointing straight down.
pub fn bottom_dead_centre(bb: &BottomBracket, crank: &Crank) -> Coordinates {
    bb.coordinates() - dvec2(0.0, crank.length())
}

/// Saddle to pedal in 3D: the side-view distance combined with the pedal's
/// lateral offset from the centre plane.
pub fn saddle_to_pedal_reach(saddle: Coordinates, pedal: Coordinates, lateral_offset: f64) -> f64 {
    distance(saddle, pedal).hypot(lateral_offset)
}
