use glam::dvec2;

use super::{Pose, SeatPost, bottom_dead_centre, saddle_to_pedal_reach};
use crate::defaults::HEEL_BEHIND_PEDAL;
use crate::drivetrain::Crank;
use crate::errors::PoseError;
use crate::frame::BottomBracket;
use crate::geometry::law_of_cosines;
use crate::log::trace;
use crate::types::{Angle, Coordinates};

/// Leg from saddle through knee to heel and toe, for one crank position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LowerBody {
    saddle: Coordinates,
    knee: Coordinates,
    heel: Coordinates,
    toe: Coordinates,
    bottom_dead_centre: Coordinates,
    upper_leg: f64,
    lower_leg: f64,
    foot: f64,
}

impl LowerBody {
    pub fn new(
        bb: &BottomBracket,
        seat_post: &SeatPost,
        crank: &Crank,
        inseam: f64,
        upper_leg: f64,
        foot: f64,
    ) -> Result<Self, PoseError> {
        let saddle = seat_post.saddle();
        let lower_leg = inseam - upper_leg;
        let bdc = bottom_dead_centre(bb, crank);
        let pose = solve_leg(
            saddle,
            crank.end(),
            bdc,
            crank.lateral_offset(),
            inseam,
            upper_leg,
            foot,
        )?;
        Ok(Self {
            saddle,
            knee: pose.knee,
            heel: pose.heel,
            toe: pose.toe,
            bottom_dead_centre: bdc,
            upper_leg,
            lower_leg,
            foot,
        })
    }

    /// Same leg, same saddle, crank turned to `spin`.
    pub fn pose_at(&self, crank: &Crank, spin: Angle) -> Result<Pose, PoseError> {
        solve_leg(
            self.saddle,
            crank.pedal_at(spin),
            self.bottom_dead_centre,
            crank.lateral_offset(),
            self.upper_leg + self.lower_leg,
            self.upper_leg,
            self.foot,
        )
    }

    pub fn saddle(&self) -> Coordinates {
        self.saddle
    }

    pub fn knee(&self) -> Coordinates {
        self.knee
    }

    pub fn heel(&self) -> Coordinates {
        self.heel
    }

    pub fn toe(&self) -> Coordinates {
        self.toe
    }

    pub fn upper_leg_length(&self) -> f64 {
        self.upper_leg
    }

    pub fn lower_leg_length(&self) -> f64 {
        self.lower_leg
    }

    /// saddle → knee → heel → toe
    pub fn points(&self) -> [Coordinates; 4] {
        [self.saddle, self.knee, self.heel, self.toe]
    }
}

/// Two-bone leg: thigh from the saddle, shin down to the heel, which sits
/// behind the pedal spindle by a fixed share of the foot.
///
/// The saddle is checked against the pedal at bottom dead centre, where the
/// seatpost was sized, whatever the current spin.
///
/// The heel is offset laterally by half the q-factor, so the triangle is
/// solved in 3D and the knee projected back onto the side view.
fn solve_leg(
    saddle: Coordinates,
    pedal: Coordinates,
    bottom_dead_centre: Coordinates,
    lateral: f64,
    inseam: f64,
    upper_leg: f64,
    foot: f64,
) -> Result<Pose, PoseError> {
    let reach = saddle_to_pedal_reach(saddle, bottom_dead_centre, lateral);
    if reach > inseam {
        return Err(PoseError::SaddleAbovePedalReach { reach, inseam });
    }

    let heel = pedal - dvec2(HEEL_BEHIND_PEDAL * foot, 0.0);
    let toe = heel + dvec2(foot, 0.0);

    let lower_leg = inseam - upper_leg;
    if lower_leg <= 0.0 {
        return Err(PoseError::LowerLegNonPositive { length: lower_leg });
    }

    let to_heel = heel - saddle;
    let planar = to_heel.length();
    if planar == 0.0 {
        return Err(PoseError::HeelOnSeatPost);
    }
    let spatial = planar.hypot(lateral);
    let at_hip = law_of_cosines(upper_leg, spatial, lower_leg)
        .ok_or(PoseError::LegCannotClose { distance: spatial })?;

    let along = to_heel / planar;
    let mut forward = along.perp();
    if forward.x < 0.0 {
        forward = -forward;
    }
    let knee = saddle
        + along * (upper_leg * at_hip.cos() * planar / spatial)
        + forward * (upper_leg * at_hip.sin());
    trace!(knee_x = knee.x, knee_y = knee.y, "leg solved");

    Ok(Pose {
        crank_end: pedal,
        heel,
        knee,
        toe,
    })
}
