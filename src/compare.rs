//! Bike against shadow bike.
//!
//! A fit tool shows a second bike drawn behind the first. This lists how far
//! apart the two are, per metric and per key point.

use crate::bike::BikeGeometry;
use crate::geometry::distance;
use crate::types::Coordinates;

/// Differences below this many millimetres (or degrees) are rounding noise.
pub const MATCH_TOLERANCE: f64 = 0.01;

/// One metric on both bikes. `None` where the metric does not exist, e.g. a
/// seatpost length without a seatpost.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricDelta {
    pub name: &'static str,
    pub bike: Option<f64>,
    pub shadow: Option<f64>,
}

impl MetricDelta {
    /// shadow − bike, when both exist
    pub fn difference(&self) -> Option<f64> {
        Some(self.shadow? - self.bike?)
    }

    fn within(&self, tolerance: f64) -> bool {
        match (self.bike, self.shadow) {
            (None, None) => true,
            (Some(a), Some(b)) => (b - a).abs() <= tolerance,
            _ => false,
        }
    }
}

/// One key point on both bikes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointDelta {
    pub name: &'static str,
    pub bike: Option<Coordinates>,
    pub shadow: Option<Coordinates>,
}

impl PointDelta {
    pub fn offset(&self) -> Option<Coordinates> {
        Some(self.shadow? - self.bike?)
    }

    pub fn distance(&self) -> Option<f64> {
        Some(distance(self.bike?, self.shadow?))
    }

    fn within(&self, tolerance: f64) -> bool {
        match (self.bike, self.shadow) {
            (None, None) => true,
            (Some(a), Some(b)) => distance(a, b) <= tolerance,
            _ => false,
        }
    }
}

/// Result of comparing two bikes
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub metrics: Vec<MetricDelta>,
    pub points: Vec<PointDelta>,
}

impl Comparison {
    /// Every metric and point agrees within `tolerance`, and both bikes place
    /// the same rider components.
    pub fn is_match(&self, tolerance: f64) -> bool {
        self.metrics.iter().all(|m| m.within(tolerance))
            && self.points.iter().all(|p| p.within(tolerance))
    }

    /// Entries that differ by more than `tolerance`.
    pub fn mismatches(&self, tolerance: f64) -> (Vec<&MetricDelta>, Vec<&PointDelta>) {
        let metrics = self.metrics.iter().filter(|m| !m.within(tolerance));
        let points = self.points.iter().filter(|p| !p.within(tolerance));
        (metrics.collect(), points.collect())
    }
}

/// Compare `shadow` against `bike`.
pub fn compare(bike: &BikeGeometry, shadow: &BikeGeometry) -> Comparison {
    let (a, b) = (bike.metrics(), shadow.metrics());
    let metric = |name, x: f64, y: f64| MetricDelta {
        name,
        bike: Some(x),
        shadow: Some(y),
    };
    let metrics = vec![
        metric("spineAngle", a.spine_angle, b.spine_angle),
        metric("standoverHeight", a.standover_height, b.standover_height),
        metric(
            "groundPedalClearance",
            a.ground_pedal_clearance,
            b.ground_pedal_clearance,
        ),
        metric(
            "toeOverlapClearance",
            a.toe_overlap_clearance,
            b.toe_overlap_clearance,
        ),
        metric("trail", a.trail, b.trail),
        metric("wheelbase", a.wheelbase, b.wheelbase),
        metric("frontCenter", a.front_center, b.front_center),
        metric("tiltAngle", a.tilt_angle, b.tilt_angle),
        MetricDelta {
            name: "seatPostLength",
            bike: a.seat_post_length,
            shadow: b.seat_post_length,
        },
    ];

    let points = key_points(bike)
        .into_iter()
        .zip(key_points(shadow))
        .map(|((name, p), (_, q))| PointDelta {
            name,
            bike: p,
            shadow: q,
        })
        .collect();

    Comparison { metrics, points }
}

/// Named points a renderer overlays. Rider points are `None` when absent.
pub fn key_points(bike: &BikeGeometry) -> [(&'static str, Option<Coordinates>); 10] {
    [
        ("bottomBracket", Some(bike.bottom_bracket().coordinates())),
        ("rearAxle", Some(bike.chain_stay().rear_axle())),
        ("frontAxle", Some(bike.fork().front_axle())),
        ("headTubeTop", Some(bike.head_tube().start())),
        ("seatTubeTop", Some(bike.seat_tube().start())),
        ("handlebar", Some(bike.handlebar().coordinates())),
        ("pedal", Some(bike.crank().end())),
        ("saddle", bike.seat_post().map(|sp| sp.saddle())),
        ("knee", bike.lower_body().map(|lb| lb.knee())),
        ("shoulder", bike.upper_body().map(|ub| ub.shoulder())),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::BikeParams;

    fn params() -> BikeParams {
        BikeParams {
            reach_length: 385.0,
            stack_length: 555.0,
            head_tube_length: 140.0,
            head_tube_angle: 73.0,
            chain_stay_length: 410.0,
            bb_drop_length: 70.0,
            seat_tube_length: 520.0,
            seat_tube_angle: 73.5,
            effective_seat_tube_angle: 73.5,
            fork_offset_length: 45.0,
            crown_to_axle_length: 370.0,
            crank_length: 172.5,
            q_factor: 150.0,
            stem_length: 100.0,
            handlebar_width: 420.0,
            rider_inseam_length: 840.0,
            rider_upper_leg_length: 440.0,
            rider_foot_length: 270.0,
            rider_arm_length: 620.0,
            rider_spine_length: 600.0,
            ..Default::default()
        }
    }

    #[test]
    fn identical_bikes_match() {
        let bike = BikeGeometry::new(&params()).unwrap();
        let shadow = BikeGeometry::new(&params()).unwrap();
        let cmp = compare(&bike, &shadow);
        assert!(cmp.is_match(0.0));
        let unchanged = |m: &MetricDelta| m.difference() == Some(0.0) || m.bike.is_none();
        assert!(cmp.metrics.iter().all(unchanged));
    }

    #[test]
    fn longer_reach_moves_the_front() {
        let bike = BikeGeometry::new(&params()).unwrap();
        let shadow = BikeGeometry::new(&BikeParams {
            reach_length: 395.0,
            ..params()
        })
        .unwrap();
        let cmp = compare(&bike, &shadow);
        assert!(!cmp.is_match(MATCH_TOLERANCE));

        let front = cmp.points.iter().find(|p| p.name == "frontAxle").unwrap();
        let offset = front.offset().unwrap();
        assert!((offset.x - 10.0).abs() < 1e-9);
        assert!(offset.y.abs() < 1e-9);

        let (metrics, points) = cmp.mismatches(MATCH_TOLERANCE);
        assert!(metrics.iter().any(|m| m.name == "wheelbase"));
        let moved: Vec<_> = points.iter().map(|p| p.name).collect();
        assert!(!moved.contains(&"bottomBracket"));
        assert!(!moved.contains(&"rearAxle"));
    }

    #[test]
    fn missing_rider_is_a_mismatch() {
        let bike = BikeGeometry::new(&params()).unwrap();
        let shadow = BikeGeometry::new(&BikeParams {
            rider_inseam_length: 500.0,
            ..params()
        })
        .unwrap();
        let cmp = compare(&bike, &shadow);
        assert!(!cmp.is_match(f64::MAX));
        let saddle = cmp.points.iter().find(|p| p.name == "saddle").unwrap();
        assert!(saddle.bike.is_some() && saddle.shadow.is_none());
        assert_eq!(saddle.distance(), None);
    }
}
