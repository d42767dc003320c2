//! Drawing model for renderers.
//!
//! Every visible part reduces to a polyline in bike coordinates. Wheels are
//! circles and only show up in [`BikeGeometry::bounds`].

use enum_dispatch::enum_dispatch;

use crate::bike::BikeGeometry;
use crate::cockpit::{Spacers, Stem};
use crate::drivetrain::Crank;
use crate::frame::{ChainStay, DownTube, Fork, HeadTube, SeatStay, SeatTube, TopTube};
use crate::rider::{LowerBody, SeatPost, UpperBody};
use crate::types::{Angle, Bounds, Coordinates};

/// Something that can be drawn as connected line segments.
#[enum_dispatch]
pub trait Drawable {
    fn polyline(&self) -> Vec<Coordinates>;
}

/// Any drawable part of the bike or rider.
#[enum_dispatch(Drawable)]
#[derive(Clone, Debug, PartialEq)]
pub enum Part {
    HeadTube,
    ChainStay,
    SeatTube,
    Fork,
    DownTube,
    TopTube,
    SeatStay,
    Crank,
    Spacers,
    Stem,
    SeatPost,
    LowerBody,
    UpperBody,
}

macro_rules! straight_segments {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Drawable for $ty {
                fn polyline(&self) -> Vec<Coordinates> {
                    vec![self.start(), self.end()]
                }
            }
        )+
    };
}

straight_segments!(
    HeadTube,
    ChainStay,
    Fork,
    DownTube,
    TopTube,
    SeatStay,
    Crank,
    Spacers,
    Stem,
    SeatPost,
);

impl Drawable for SeatTube {
    /// Bent at the break point.
    fn polyline(&self) -> Vec<Coordinates> {
        vec![self.start(), self.break_point_coordinates(), self.end()]
    }
}

impl Drawable for LowerBody {
    fn polyline(&self) -> Vec<Coordinates> {
        self.points().to_vec()
    }
}

impl Drawable for UpperBody {
    fn polyline(&self) -> Vec<Coordinates> {
        self.points().to_vec()
    }
}

impl Crank {
    /// The crank drawn at another spin angle.
    pub fn polyline_at(&self, spin: Angle) -> Vec<Coordinates> {
        vec![self.start(), self.pedal_at(spin)]
    }
}

impl BikeGeometry {
    /// Drawable parts, frame first, rider parts only when placed.
    pub fn parts(&self) -> Vec<Part> {
        let mut parts: Vec<Part> = vec![
            (*self.chain_stay()).into(),
            (*self.seat_stay()).into(),
            (*self.seat_tube()).into(),
            (*self.top_tube()).into(),
            (*self.down_tube()).into(),
            (*self.head_tube()).into(),
            (*self.fork()).into(),
            (*self.spacers()).into(),
            (*self.stem()).into(),
            (*self.crank()).into(),
        ];
        parts.extend(self.seat_post().map(|p| Part::from(*p)));
        parts.extend(self.lower_body().map(|p| Part::from(*p)));
        parts.extend(self.upper_body().map(|p| Part::from(*p)));
        parts
    }

    /// Box around every part and both wheel circles.
    pub fn bounds(&self) -> Bounds {
        let mut bounds = Bounds::new();
        for part in self.parts() {
            for point in part.polyline() {
                bounds.expand_point(point);
            }
        }
        bounds.expand_point(self.handlebar().coordinates());
        let rear = self.rear_wheel().radius_with_tire();
        let front = self.front_wheel().radius_with_tire();
        bounds.expand_circle(self.chain_stay().rear_axle(), rear);
        bounds.expand_circle(self.fork().front_axle(), front);
        bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::BikeParams;

    fn bike(inseam: f64) -> BikeGeometry {
        let params = BikeParams {
            reach_length: 380.0,
            stack_length: 560.0,
            head_tube_length: 150.0,
            head_tube_angle: 73.0,
            chain_stay_length: 410.0,
            bb_drop_length: 70.0,
            seat_tube_length: 520.0,
            seat_tube_angle: 72.0,
            effective_seat_tube_angle: 74.0,
            fork_offset_length: 45.0,
            crown_to_axle_length: 370.0,
            crank_length: 172.5,
            q_factor: 150.0,
            stem_length: 100.0,
            handlebar_width: 420.0,
            front_wheel_diameter: 622.0,
            front_tire_width: 28.0,
            rear_wheel_diameter: 622.0,
            rear_tire_width: 28.0,
            rider_inseam_length: inseam,
            rider_upper_leg_length: 440.0,
            rider_foot_length: 270.0,
            rider_arm_length: 620.0,
            rider_spine_length: 600.0,
            ..Default::default()
        };
        BikeGeometry::new(&params).unwrap()
    }

    #[test]
    fn seat_tube_is_drawn_bent() {
        let bike = bike(840.0);
        let line = Part::from(*bike.seat_tube()).polyline();
        assert_eq!(line.len(), 3);
        assert_eq!(line[1], bike.seat_tube().break_point_coordinates());
    }

    #[test]
    fn rider_parts_only_when_placed() {
        assert_eq!(bike(840.0).parts().len(), 13);
        assert_eq!(bike(500.0).parts().len(), 10);
    }

    #[test]
    fn crank_drawn_at_other_spin() {
        let bike = bike(840.0);
        let crank = bike.crank();
        assert_eq!(crank.polyline(), crank.polyline_at(crank.spin()));
        let down = crank.polyline_at(Angle::from_degrees(90.0));
        let bdc = crank.start() - glam::dvec2(0.0, 172.5);
        assert!((down[1] - bdc).length() < 1e-9);
    }

    #[test]
    fn bounds_cover_wheels_and_rider() {
        let bike = bike(840.0);
        let bounds = bike.bounds();
        let contacts = bike.ground_contacts();
        let ground = contacts.rear.y.min(contacts.front.y);
        assert!((bounds.min.y - ground).abs() < 1e-9);
        let shoulder = bike.upper_body().unwrap().shoulder();
        assert!(bounds.max.y >= shoulder.y);
        assert!(bounds.width() > bike.wheelbase());
    }
}
