//! The assembled bike: every part built once from a [`BikeParams`] snapshot,
//! plus the derived metrics a fit tool shows next to the drawing.

use serde::Serialize;

use crate::cockpit::{HandleBar, Spacers, Stem};
use crate::drivetrain::Crank;
use crate::errors::{GeometryError, PoseError};
use crate::frame::{
    BottomBracket, ChainStay, DownTube, Fork, HeadTube, SeatStay, SeatTube, TopTube,
    TopTubeHorizontal,
};
use crate::geometry::distance;
use crate::log::{debug, warn};
use crate::params::BikeParams;
use crate::rider::{LowerBody, Pose, SeatPost, UpperBody};
use crate::tilt::{FrameParts, GroundContacts, level_frame};
use crate::types::Angle;
use crate::wheel::Wheel;

/// Frame, fork, cockpit and rider for one parameter set.
///
/// The frame parts are always present; construction fails with a
/// [`GeometryError`] otherwise. Seatpost, legs and torso are optional: when
/// the rider does not fit they are left out and the reason is kept in
/// [`rider_issues`](Self::rider_issues).
#[derive(Clone, Debug, PartialEq)]
pub struct BikeGeometry {
    params: BikeParams,
    bottom_bracket: BottomBracket,
    head_tube: HeadTube,
    chain_stay: ChainStay,
    top_tube_horizontal: TopTubeHorizontal,
    seat_tube: SeatTube,
    fork: Fork,
    front_wheel: Wheel,
    rear_wheel: Wheel,
    tilt_angle: Angle,
    down_tube: DownTube,
    top_tube: TopTube,
    seat_stay: SeatStay,
    crank: Crank,
    spacers: Spacers,
    stem: Stem,
    handlebar: HandleBar,
    seat_post: Option<SeatPost>,
    lower_body: Option<LowerBody>,
    upper_body: Option<UpperBody>,
    rider_issues: Vec<PoseError>,
}

/// Derived numbers for one bike. Millimetres and degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub spine_angle: f64,
    pub standover_height: f64,
    pub ground_pedal_clearance: f64,
    pub toe_overlap_clearance: f64,
    pub trail: f64,
    pub wheelbase: f64,
    pub front_center: f64,
    pub tilt_angle: f64,
    pub seat_post_length: Option<f64>,
}

impl BikeGeometry {
    pub fn new(params: &BikeParams) -> Result<Self, GeometryError> {
        params.validate()?;
        let p = params;

        let bottom_bracket = BottomBracket::new(p.bottom_bracket());
        let mut head_tube = HeadTube::new(
            &bottom_bracket,
            p.head_tube_length,
            Angle::from_degrees(p.head_tube_angle),
            p.reach_length,
            p.stack_length,
        );
        let mut chain_stay =
            ChainStay::new(&bottom_bracket, p.bb_drop_length, p.chain_stay_length)?;
        let mut top_tube_horizontal = TopTubeHorizontal::new(
            &bottom_bracket,
            &head_tube,
            Angle::from_degrees(p.effective_seat_tube_angle),
        )?;
        let mut seat_tube = SeatTube::new(
            &bottom_bracket,
            &top_tube_horizontal,
            p.seat_tube_length,
            Angle::from_degrees(p.seat_tube_angle),
        )?;
        let mut fork = Fork::new(
            &bottom_bracket,
            &head_tube,
            &chain_stay,
            p.fork_offset_length,
            p.crown_to_axle_length,
            p.front_center_length,
            p.wheel_base,
        )?;

        let front_wheel = Wheel::new(p.front_wheel_diameter, p.front_tire_width);
        let rear_wheel = Wheel::new(p.rear_wheel_diameter, p.rear_tire_width);
        let tilt_angle = level_frame(
            &bottom_bracket,
            FrameParts {
                chain_stay: &mut chain_stay,
                head_tube: &mut head_tube,
                top_tube_horizontal: &mut top_tube_horizontal,
                seat_tube: &mut seat_tube,
                fork: &mut fork,
            },
            &rear_wheel,
            &front_wheel,
        );
        debug!(tilt_deg = tilt_angle.degrees(), "frame leveled");

        let down_tube = DownTube::new(&head_tube, &bottom_bracket);
        let top_tube = TopTube::new(&head_tube, &seat_tube);
        let seat_stay = SeatStay::new(&chain_stay, &seat_tube);

        let crank = Crank::new(
            &bottom_bracket,
            p.crank_length,
            p.q_factor,
            Angle::from_degrees(p.crank_spin_angle),
        );
        let spacers = Spacers::new(&head_tube, p.spacers_length);
        let stem = Stem::new(&spacers, p.stem_length, Angle::from_degrees(p.stem_angle));
        let handlebar = HandleBar::new(
            &stem,
            p.handlebar_reach,
            p.handlebar_height,
            p.handlebar_width,
        );
        debug!(
            x = handlebar.coordinates().x,
            y = handlebar.coordinates().y,
            "handlebar"
        );

        let mut rider_issues = Vec::new();
        let seat_post = keep(
            SeatPost::new(
                &bottom_bracket,
                &seat_tube,
                &crank,
                p.rider_inseam_length,
                p.seat_post_offset,
            ),
            &mut rider_issues,
        );
        let lower_body = keep(
            seat_post.ok_or(PoseError::NoSeatPost).and_then(|sp| {
                LowerBody::new(
                    &bottom_bracket,
                    &sp,
                    &crank,
                    p.rider_inseam_length,
                    p.rider_upper_leg_length,
                    p.rider_foot_length,
                )
            }),
            &mut rider_issues,
        );
        let upper_body = keep(
            seat_post.ok_or(PoseError::NoSeatPost).and_then(|sp| {
                UpperBody::new(&sp, &handlebar, p.rider_spine_length, p.rider_arm_length)
            }),
            &mut rider_issues,
        );

        Ok(Self {
            params: *params,
            bottom_bracket,
            head_tube,
            chain_stay,
            top_tube_horizontal,
            seat_tube,
            fork,
            front_wheel,
            rear_wheel,
            tilt_angle,
            down_tube,
            top_tube,
            seat_stay,
            crank,
            spacers,
            stem,
            handlebar,
            seat_post,
            lower_body,
            upper_body,
            rider_issues,
        })
    }

    pub fn params(&self) -> &BikeParams {
        &self.params
    }

    pub fn bottom_bracket(&self) -> &BottomBracket {
        &self.bottom_bracket
    }

    pub fn head_tube(&self) -> &HeadTube {
        &self.head_tube
    }

    pub fn chain_stay(&self) -> &ChainStay {
        &self.chain_stay
    }

    pub fn top_tube_horizontal(&self) -> &TopTubeHorizontal {
        &self.top_tube_horizontal
    }

    pub fn seat_tube(&self) -> &SeatTube {
        &self.seat_tube
    }

    pub fn fork(&self) -> &Fork {
        &self.fork
    }

    pub fn front_wheel(&self) -> &Wheel {
        &self.front_wheel
    }

    pub fn rear_wheel(&self) -> &Wheel {
        &self.rear_wheel
    }

    pub fn down_tube(&self) -> &DownTube {
        &self.down_tube
    }

    pub fn top_tube(&self) -> &TopTube {
        &self.top_tube
    }

    pub fn seat_stay(&self) -> &SeatStay {
        &self.seat_stay
    }

    pub fn crank(&self) -> &Crank {
        &self.crank
    }

    pub fn spacers(&self) -> &Spacers {
        &self.spacers
    }

    pub fn stem(&self) -> &Stem {
        &self.stem
    }

    pub fn handlebar(&self) -> &HandleBar {
        &self.handlebar
    }

    pub fn seat_post(&self) -> Option<&SeatPost> {
        self.seat_post.as_ref()
    }

    pub fn lower_body(&self) -> Option<&LowerBody> {
        self.lower_body.as_ref()
    }

    pub fn upper_body(&self) -> Option<&UpperBody> {
        self.upper_body.as_ref()
    }

    /// Why seatpost, legs or torso were left out, in construction order.
    pub fn rider_issues(&self) -> &[PoseError] {
        &self.rider_issues
    }

    /// Rotation applied about the bottom bracket to level the wheels.
    pub fn tilt_angle(&self) -> Angle {
        self.tilt_angle
    }

    pub fn ground_contacts(&self) -> GroundContacts {
        GroundContacts::new(
            self.chain_stay.rear_axle(),
            self.fork.front_axle(),
            &self.rear_wheel,
            &self.front_wheel,
        )
    }

    /// Leg pose with the crank turned to `spin_degrees`. Nothing stored
    /// changes.
    pub fn pose_at(&self, spin_degrees: f64) -> Result<Pose, PoseError> {
        let lower_body = self.lower_body.as_ref().ok_or(PoseError::Unseated)?;
        lower_body.pose_at(&self.crank, Angle::from_degrees(spin_degrees))
    }

    /// Torso lean from horizontal in degrees, 0 without a torso.
    pub fn spine_angle(&self) -> f64 {
        let spine = self.params.rider_spine_length;
        match &self.upper_body {
            Some(body) if spine > 0.0 => {
                let rise = (body.shoulder().y - body.start().y) / spine;
                rise.clamp(-1.0, 1.0).asin().to_degrees()
            }
            _ => 0.0,
        }
    }

    /// Ground to the top tube at its midpoint, approximated from the head
    /// and seat tube tops.
    pub fn standover_height(&self) -> f64 {
        let ht_top = self.head_tube.start().y;
        let st_top = self.seat_tube.start().y;
        let height = (ht_top - st_top) / 2.0 + st_top - self.chain_stay.start().y
            + self.rear_wheel.radius_with_tire();
        height.max(0.0)
    }

    /// Gap between the ground and the pedal at the bottom of the stroke.
    pub fn ground_pedal_clearance(&self) -> f64 {
        let bb = self.bottom_bracket.coordinates();
        let drop = self.crank.length() + self.chain_stay.start().y - bb.y;
        (self.rear_wheel.radius_with_tire() - drop).max(0.0)
    }

    /// Gap between the front tire and the toe with the crank pointing
    /// forward. 0 without a leg pose.
    pub fn toe_overlap_clearance(&self) -> f64 {
        if self.lower_body.is_none() {
            return 0.0;
        }
        let reach = distance(self.fork.front_axle(), self.bottom_bracket.coordinates());
        let toe = self.front_wheel.radius_with_tire()
            + self.crank.length()
            + self.params.rider_foot_length / 3.0;
        (reach - toe).max(0.0)
    }

    /// Ground distance from the tire contact to where the steering axis
    /// meets the ground.
    pub fn trail(&self) -> f64 {
        let angle = self.head_tube.angle();
        let run_per_rise = (angle.cos() / angle.sin()).abs();
        self.front_wheel.radius_with_tire() * run_per_rise
            - self.fork.offset_length() / run_per_rise.atan().cos()
    }

    /// Axle to axle.
    pub fn wheelbase(&self) -> f64 {
        distance(self.chain_stay.rear_axle(), self.fork.front_axle())
    }

    /// Bottom bracket to front axle.
    pub fn front_center(&self) -> f64 {
        distance(self.bottom_bracket.coordinates(), self.fork.front_axle())
    }

    pub fn metrics(&self) -> Metrics {
        Metrics {
            spine_angle: self.spine_angle(),
            standover_height: self.standover_height(),
            ground_pedal_clearance: self.ground_pedal_clearance(),
            toe_overlap_clearance: self.toe_overlap_clearance(),
            trail: self.trail(),
            wheelbase: self.wheelbase(),
            front_center: self.front_center(),
            tilt_angle: self.tilt_angle.degrees(),
            seat_post_length: self.seat_post.map(|sp| sp.length()),
        }
    }
}

/// Keep an optional rider component, or note why it was dropped.
fn keep<T>(result: Result<T, PoseError>, issues: &mut Vec<PoseError>) -> Option<T> {
    match result {
        Ok(part) => Some(part),
        Err(err) => {
            warn!(kind = err.kind(), %err, "rider component left out");
            issues.push(err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn road() -> BikeParams {
        BikeParams {
            reach_length: 380.0,
            stack_length: 560.0,
            head_tube_length: 150.0,
            head_tube_angle: 73.0,
            chain_stay_length: 410.0,
            bb_drop_length: 70.0,
            seat_tube_length: 520.0,
            seat_tube_angle: 73.5,
            effective_seat_tube_angle: 74.0,
            fork_offset_length: 45.0,
            crown_to_axle_length: 370.0,
            crank_length: 172.5,
            q_factor: 150.0,
            spacers_length: 20.0,
            stem_length: 100.0,
            stem_angle: -6.0,
            handlebar_reach: 80.0,
            handlebar_width: 420.0,
            front_wheel_diameter: 622.0,
            front_tire_width: 28.0,
            rear_wheel_diameter: 622.0,
            rear_tire_width: 28.0,
            rider_inseam_length: 840.0,
            rider_upper_leg_length: 440.0,
            rider_foot_length: 270.0,
            rider_arm_length: 620.0,
            rider_spine_length: 600.0,
            ..Default::default()
        }
    }

    #[test]
    fn road_bike_has_a_full_rider() {
        let bike = BikeGeometry::new(&road()).unwrap();
        assert!(bike.seat_post().is_some());
        assert!(bike.lower_body().is_some());
        assert!(bike.upper_body().is_some());
        assert!(bike.rider_issues().is_empty());

        let contacts = bike.ground_contacts();
        assert!(contacts.height_difference().abs() < 1e-6);
        assert!(bike.tilt_angle().radians() < 0.0);
    }

    #[test]
    fn road_bike_metrics() {
        let bike = BikeGeometry::new(&road()).unwrap();
        let m = bike.metrics();
        assert!(m.spine_angle > 30.0 && m.spine_angle < 60.0, "{m:?}");
        assert!(
            m.standover_height > 750.0 && m.standover_height < 850.0,
            "{m:?}"
        );
        assert!(
            m.ground_pedal_clearance > 80.0 && m.ground_pedal_clearance < 110.0,
            "{m:?}"
        );
        assert_eq!(m.toe_overlap_clearance, 0.0);
        assert!(m.trail > 45.0 && m.trail < 65.0, "{m:?}");
        assert!(m.wheelbase > 950.0 && m.wheelbase < 1050.0, "{m:?}");
        let post = bike.seat_post().map(|sp| sp.length());
        assert_eq!(m.seat_post_length, post);
    }

    #[test]
    fn short_chain_stay_is_fatal() {
        let params = BikeParams {
            chain_stay_length: 400.0,
            bb_drop_length: 450.0,
            ..road()
        };
        assert_eq!(
            BikeGeometry::new(&params),
            Err(GeometryError::ChainStayTooShort {
                chain_stay: 400.0,
                drop: 450.0,
            })
        );
    }

    #[test]
    fn nan_input_is_fatal() {
        let params = BikeParams {
            reach_length: f64::NAN,
            ..road()
        };
        assert!(matches!(
            BikeGeometry::new(&params),
            Err(GeometryError::InvalidParameter { name: "reachLength", .. })
        ));
    }

    #[test]
    fn short_rider_loses_seat_post_and_legs() {
        let params = BikeParams {
            rider_inseam_length: 600.0,
            ..road()
        };
        let bike = BikeGeometry::new(&params).unwrap();
        assert!(bike.seat_post().is_none());
        assert!(bike.lower_body().is_none());
        assert!(bike.upper_body().is_none());
        let kinds: Vec<_> = bike.rider_issues().iter().map(PoseError::kind).collect();
        assert_eq!(kinds, ["inseam-too-short", "no-seat-post", "no-seat-post"]);
        assert_eq!(bike.toe_overlap_clearance(), 0.0);
        assert_eq!(bike.spine_angle(), 0.0);
        assert_eq!(bike.pose_at(90.0), Err(PoseError::Unseated));
    }

    #[test]
    fn torso_can_fail_on_its_own() {
        let params = BikeParams {
            rider_arm_length: 100.0,
            ..road()
        };
        let bike = BikeGeometry::new(&params).unwrap();
        assert!(bike.lower_body().is_some());
        assert!(bike.upper_body().is_none());
        assert_eq!(bike.rider_issues().len(), 1);
        assert_eq!(bike.rider_issues()[0].kind(), "arm-shorter-than-half-bar");
    }

    #[test]
    fn pose_at_stored_spin_matches_lower_body() {
        let bike = BikeGeometry::new(&road()).unwrap();
        let legs = bike.lower_body().unwrap();
        let pose = bike.pose_at(0.0).unwrap();
        assert!((pose.knee - legs.knee()).length() < 1e-9);
        assert!((pose.crank_end - bike.crank().end()).length() < 1e-9);
    }

    #[test]
    fn trail_without_tilt() {
        let params = BikeParams {
            front_wheel_diameter: 0.0,
            ..road()
        };
        let bike = BikeGeometry::new(&params).unwrap();
        assert_eq!(bike.tilt_angle(), Angle::ZERO);
        let run_per_rise = 1.0 / 73f64.to_radians().tan();
        // 0 mm rim, 28 mm tire
        let expected = 28.0 * run_per_rise - 45.0 / run_per_rise.atan().cos();
        assert!((bike.trail() - expected).abs() < 1e-9);
    }

    #[test]
    fn geometry_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BikeGeometry>();
    }
}
