//! Wheel leveling.
//!
//! With two wheel sizes the axles sit at different heights above the ground,
//! so the frame is rotated about the bottom bracket until both tires touch
//! one horizontal ground line.

use glam::dvec2;

use crate::defaults::LEVEL_EPSILON;
use crate::frame::{BottomBracket, ChainStay, Fork, HeadTube, SeatTube, TopTubeHorizontal};
use crate::log::{debug, warn};
use crate::segment::Tilt;
use crate::types::{Angle, Coordinates};
use crate::wheel::Wheel;

/// Where each tire touches the ground, straight below its axle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GroundContacts {
    pub rear: Coordinates,
    pub front: Coordinates,
}

impl GroundContacts {
    pub fn new(
        rear_axle: Coordinates,
        front_axle: Coordinates,
        rear: &Wheel,
        front: &Wheel,
    ) -> Self {
        Self {
            rear: dvec2(rear_axle.x, rear_axle.y - rear.radius_with_tire()),
            front: dvec2(front_axle.x, front_axle.y - front.radius_with_tire()),
        }
    }

    pub fn wheelbase_distance(&self) -> f64 {
        self.rear.distance(self.front)
    }

    /// Height of the rear contact above the front one.
    pub fn height_difference(&self) -> f64 {
        self.rear.y - self.front.y
    }
}

/// Rotation about the bottom bracket that puts both contacts on one level.
///
/// Solves `(R(θ)·A).y = r_front − r_rear` for the axle-to-axle vector `A`,
/// since ground contacts hang vertically below the axles whatever the tilt.
///
/// When the radii differ by more than the axle distance there is no exact
/// solution; the first-order `asin(Δy / wheelbase)` is used instead.
pub fn leveling_angle(
    rear_axle: Coordinates,
    front_axle: Coordinates,
    rear: &Wheel,
    front: &Wheel,
) -> Angle {
    let contacts = GroundContacts::new(rear_axle, front_axle, rear, front);
    let wheelbase = contacts.wheelbase_distance();
    if wheelbase == 0.0 {
        return Angle::ZERO;
    }
    let axles = front_axle - rear_axle;
    let r = axles.length();
    let difference = rear.radius_with_tire() - front.radius_with_tire();
    let theta = if difference.abs() <= r {
        (-difference / r).asin() - axles.y.atan2(axles.x)
    } else {
        warn!(
            difference,
            axle_distance = r,
            "wheels cannot be leveled exactly"
        );
        let rise = contacts.height_difference() / wheelbase;
        rise.clamp(-1.0, 1.0).asin()
    };
    debug!(
        theta_deg = theta.to_degrees(),
        height_difference = contacts.height_difference(),
        "leveling angle"
    );
    if theta.abs() < LEVEL_EPSILON {
        Angle::ZERO
    } else {
        Angle::from_radians(theta)
    }
}

/// The frame parts that move together when the bike is leveled.
pub struct FrameParts<'a> {
    pub chain_stay: &'a mut ChainStay,
    pub head_tube: &'a mut HeadTube,
    pub top_tube_horizontal: &'a mut TopTubeHorizontal,
    pub seat_tube: &'a mut SeatTube,
    pub fork: &'a mut Fork,
}

/// Level the frame on its wheels. Only applies when both wheel diameters are
/// known; returns the applied angle.
pub fn level_frame(
    bb: &BottomBracket,
    parts: FrameParts<'_>,
    rear: &Wheel,
    front: &Wheel,
) -> Angle {
    if rear.diameter() <= 0.0 || front.diameter() <= 0.0 {
        return Angle::ZERO;
    }
    let angle = leveling_angle(parts.chain_stay.start(), parts.fork.end(), rear, front);
    if angle == Angle::ZERO {
        return angle;
    }
    let origin = bb.coordinates();
    let ordered: [&mut dyn Tilt; 5] = [
        parts.chain_stay,
        parts.head_tube,
        parts.top_tube_horizontal,
        parts.seat_tube,
        parts.fork,
    ];
    for part in ordered {
        part.tilt(origin, angle);
    }
    angle
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::rotate;

    #[test]
    fn equal_wheels_at_equal_height_stay_level() {
        let w = Wheel::new(622.0, 28.0);
        let angle = leveling_angle(dvec2(-405.0, 65.0), dvec2(600.0, 65.0), &w, &w);
        assert_eq!(angle, Angle::ZERO);
    }

    #[test]
    fn leveled_axles_put_contacts_on_one_line() {
        let bb = BottomBracket::default();
        let rear = Wheel::new(406.0, 35.0);
        let front = Wheel::new(622.0, 28.0);
        let rear_axle = dvec2(-405.0, 65.0);
        let front_axle = dvec2(590.0, 80.0);
        let angle = leveling_angle(rear_axle, front_axle, &rear, &front);
        assert!(angle.radians() > 0.0);

        let o = bb.coordinates();
        let (rear_axle, front_axle) = (rotate(rear_axle, angle, o), rotate(front_axle, angle, o));
        let contacts = GroundContacts::new(rear_axle, front_axle, &rear, &front);
        assert!(contacts.height_difference().abs() < 1e-9);
    }

    #[test]
    fn radius_difference_beyond_axle_distance_falls_back() {
        let rear = Wheel::new(100.0, 0.0);
        let front = Wheel::new(1000.0, 0.0);
        // contacts at y = -50 and y = -500 over a 400 mm run
        let angle = leveling_angle(dvec2(-200.0, 0.0), dvec2(200.0, 0.0), &rear, &front);
        let expected = (450.0 / 400.0_f64.hypot(450.0)).asin();
        assert!(angle.radians() > 0.0);
        assert!((angle.radians() - expected).abs() < 1e-12);
    }
}
