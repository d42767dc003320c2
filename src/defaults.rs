//! Engine constants (all lengths in millimetres)

/// Longest seatpost extension the search will consider.
pub const SEAT_POST_MAX_LENGTH: f64 = 450.0;
/// Seatpost search step.
pub const SEAT_POST_STEP: f64 = 1.0;
/// The search stops once the inseam is within this distance of the pedal.
pub const INSEAM_TOLERANCE: f64 = 1.0;
/// Heel sits this fraction of the foot length behind the pedal spindle.
pub const HEEL_BEHIND_PEDAL: f64 = 2.0 / 3.0;
/// Tilt angles below this (radians) are treated as level.
pub const LEVEL_EPSILON: f64 = 1e-12;
