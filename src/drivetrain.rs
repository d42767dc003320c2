use glam::dvec2;

use crate::frame::BottomBracket;
use crate::geometry::rotate;
use crate::segment::{Segment, impl_segment_access};
use crate::types::{Angle, Coordinates};

/// Drive-side crank arm, bottom bracket to pedal spindle.
///
/// Spin is measured clockwise from pointing forward, so 90° puts the pedal
/// at bottom dead centre.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Crank {
    segment: Segment,
    length: f64,
    q_factor: f64,
    spin: Angle,
}

impl Crank {
    pub fn new(bb: &BottomBracket, length: f64, q_factor: f64, spin: Angle) -> Self {
        let origin = bb.coordinates();
        let end = Self::pedal(origin, length, spin);
        Self {
            segment: Segment::new(origin, end),
            length,
            q_factor,
            spin,
        }
    }

    fn pedal(origin: Coordinates, length: f64, spin: Angle) -> Coordinates {
        rotate(origin + dvec2(length, 0.0), -spin, origin)
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn q_factor(&self) -> f64 {
        self.q_factor
    }

    pub fn spin(&self) -> Angle {
        self.spin
    }

    /// Pedal spindle position for another spin angle; the crank is unchanged.
    pub fn pedal_at(&self, spin: Angle) -> Coordinates {
        Self::pedal(self.start(), self.length, spin)
    }

    /// Distance of one pedal from the bike's centre plane.
    pub fn lateral_offset(&self) -> f64 {
        self.q_factor / 2.0
    }
}

impl_segment_access!(Crank);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::distance;

    #[test]
    fn crank_points_forward_at_zero_spin() {
        let crank = Crank::new(&BottomBracket::default(), 172.5, 150.0, Angle::ZERO);
        assert_eq!(crank.start(), Coordinates::ZERO);
        assert!((crank.end() - dvec2(172.5, 0.0)).length() < 1e-12);
    }

    #[test]
    fn crank_length_holds_for_any_spin() {
        let bb = BottomBracket::new(dvec2(5.0, -3.0));
        for deg in [0.0, 33.0, 90.0, 180.0, 271.5, -45.0] {
            let crank = Crank::new(&bb, 170.0, 150.0, Angle::from_degrees(deg));
            assert!((distance(crank.start(), crank.end()) - 170.0).abs() < 1e-9);
        }
    }

    #[test]
    fn ninety_degrees_is_bottom_dead_centre() {
        let crank = Crank::new(&BottomBracket::default(), 175.0, 150.0, Angle::ZERO);
        let bdc = crank.pedal_at(Angle::from_degrees(90.0));
        assert!((bdc - dvec2(0.0, -175.0)).length() < 1e-9);
        assert!((crank.end() - dvec2(175.0, 0.0)).length() < 1e-12);
        assert_eq!(crank.lateral_offset(), 75.0);
    }
}
