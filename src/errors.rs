//! Error types with diagnostics using miette
//!
//! Frame errors abort construction of the whole bike. Pose errors only make
//! the affected rider component absent.

use miette::Diagnostic;
use thiserror::Error;

use crate::types::NumericError;

// ============================================================================
// Frame Errors
// ============================================================================

/// Errors that make the frame itself impossible to build
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("parameter `{name}` is not a usable number: {source}")]
    #[diagnostic(code(bikegeo::params::invalid))]
    InvalidParameter {
        name: &'static str,
        source: NumericError,
    },

    #[error("chain stay ({chain_stay} mm) is shorter than the bottom bracket drop ({drop} mm)")]
    #[diagnostic(
        code(bikegeo::frame::chain_stay_too_short),
        help("the chain stay is the hypotenuse of the drop triangle, at least |drop| long")
    )]
    ChainStayTooShort { chain_stay: f64, drop: f64 },

    #[error("front center ({front_center} mm) is shorter than the bottom bracket drop ({drop} mm)")]
    #[diagnostic(code(bikegeo::frame::front_center_too_short))]
    FrontCenterTooShort { front_center: f64, drop: f64 },

    #[error("effective seat tube angle is zero")]
    #[diagnostic(
        code(bikegeo::frame::zero_seat_tube_angle),
        help("set `effectiveSeatTubeAngle`; the top tube line is found from it")
    )]
    ZeroSeatTubeAngle,

    #[error("a {length} mm seat tube cannot reach the top tube line")]
    #[diagnostic(code(bikegeo::frame::seat_tube_unreachable))]
    SeatTubeUnreachable { length: f64 },

    #[error("seat tube line is degenerate, cannot place its break point")]
    #[diagnostic(code(bikegeo::frame::degenerate_seat_tube))]
    DegenerateSeatTube,
}

// ============================================================================
// Pose Errors
// ============================================================================

/// Errors that make a rider component (seatpost, legs, torso) absent
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum PoseError {
    #[error("seatpost would need more than {max} mm of extension")]
    #[diagnostic(
        code(bikegeo::rider::seat_post_too_long),
        help("the frame is too small for this inseam")
    )]
    SeatPostTooLong { max: f64 },

    #[error("saddle at zero extension is already {reach} mm from the pedal, inseam is {inseam} mm")]
    #[diagnostic(
        code(bikegeo::rider::inseam_too_short),
        help("the frame is too big for this inseam")
    )]
    InseamTooShort { reach: f64, inseam: f64 },

    #[error("saddle to pedal ({reach} mm) exceeds inseam ({inseam} mm)")]
    #[diagnostic(code(bikegeo::rider::saddle_above_pedal_reach))]
    SaddleAbovePedalReach { reach: f64, inseam: f64 },

    #[error("lower leg length is not positive ({length} mm)")]
    #[diagnostic(
        code(bikegeo::rider::lower_leg_non_positive),
        help("upper leg must be shorter than the inseam")
    )]
    LowerLegNonPositive { length: f64 },

    #[error("heel sits on the saddle")]
    #[diagnostic(code(bikegeo::rider::heel_on_seat_post))]
    HeelOnSeatPost,

    #[error("leg cannot reach from saddle to heel ({distance} mm)")]
    #[diagnostic(code(bikegeo::rider::leg_cannot_close))]
    LegCannotClose { distance: f64 },

    #[error("arm ({arm} mm) is shorter than half the handlebar width ({half_width} mm)")]
    #[diagnostic(code(bikegeo::rider::arm_shorter_than_half_bar))]
    ArmShorterThanHalfBar { arm: f64, half_width: f64 },

    #[error("spine and arms cannot span saddle to handlebar ({distance} mm)")]
    #[diagnostic(code(bikegeo::rider::shoulder_unreachable))]
    ShoulderUnreachable { distance: f64 },

    #[error("shoulder would sit below the hands")]
    #[diagnostic(code(bikegeo::rider::shoulder_below_hands))]
    ShoulderBelowHands,

    #[error("no seatpost, rider cannot be placed")]
    #[diagnostic(code(bikegeo::rider::no_seat_post))]
    NoSeatPost,

    #[error("rider has no lower body pose")]
    #[diagnostic(code(bikegeo::rider::unseated))]
    Unseated,
}

impl PoseError {
    /// Short kebab-case tag for reports and UI message lookup
    pub fn kind(&self) -> &'static str {
        match self {
            PoseError::SeatPostTooLong { .. } => "seat-post-too-long",
            PoseError::InseamTooShort { .. } => "inseam-too-short",
            PoseError::SaddleAbovePedalReach { .. } => "saddle-above-pedal-reach",
            PoseError::LowerLegNonPositive { .. } => "lower-leg-non-positive",
            PoseError::HeelOnSeatPost => "heel-on-seat-post",
            PoseError::LegCannotClose { .. } => "leg-cannot-close",
            PoseError::ArmShorterThanHalfBar { .. } => "arm-shorter-than-half-bar",
            PoseError::ShoulderUnreachable { .. } => "shoulder-unreachable",
            PoseError::ShoulderBelowHands => "shoulder-below-hands",
            PoseError::NoSeatPost => "no-seat-post",
            PoseError::Unseated => "unseated",
        }
    }
}
