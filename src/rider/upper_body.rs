use super::SeatPost;
use crate::cockpit::HandleBar;
use crate::errors::PoseError;
use crate::geometry::{circle_intersections, distance};
use crate::segment::{Segment, impl_segment_access};
use crate::types::{Angle, Coordinates};

/// Torso from saddle to shoulder, arms from shoulder to the bar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UpperBody {
    segment: Segment,
    hands: Coordinates,
}

impl UpperBody {
    /// The shoulder sits where a spine-length circle around the saddle meets
    /// an arm-length circle around the hands. Of the two meeting points the
    /// higher one that is not below the hands is used.
    pub fn new(
        seat_post: &SeatPost,
        handlebar: &HandleBar,
        spine: f64,
        arm: f64,
    ) -> Result<Self, PoseError> {
        let saddle = seat_post.saddle();
        let hands = handlebar.coordinates();
        let projected_arm = handlebar.projected_arm_length(arm).ok_or(
            PoseError::ArmShorterThanHalfBar {
                arm,
                half_width: handlebar.width() / 2.0,
            },
        )?;
        let (a, b) = circle_intersections(saddle, spine, hands, projected_arm)
            .ok_or(PoseError::ShoulderUnreachable {
                distance: distance(saddle, hands),
            })?;

        let shoulder = [a, b]
            .into_iter()
            .filter(|p| p.y >= hands.y)
            .max_by(|p, q| p.y.total_cmp(&q.y))
            .ok_or(PoseError::ShoulderBelowHands)?;

        Ok(Self {
            segment: Segment::new(saddle, shoulder),
            hands,
        })
    }

    pub fn shoulder(&self) -> Coordinates {
        self.end()
    }

    pub fn hands(&self) -> Coordinates {
        self.hands
    }

    /// Torso lean from horizontal.
    pub fn spine_angle(&self) -> Angle {
        self.heading()
    }

    /// saddle → shoulder → hands
    pub fn points(&self) -> [Coordinates; 3] {
        [self.start(), self.end(), self.hands]
    }
}

impl_segment_access!(UpperBody);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cockpit::{Spacers, Stem};
    use crate::drivetrain::Crank;
    use crate::frame::{BottomBracket, HeadTube, SeatTube, TopTubeHorizontal};

    struct Setup {
        seat_post: SeatPost,
        handlebar: HandleBar,
    }

    fn setup(bar_width: f64) -> Setup {
        let bb = BottomBracket::default();
        let ht = HeadTube::new(&bb, 150.0, Angle::from_degrees(73.0), 380.0, 560.0);
        let tth = TopTubeHorizontal::new(&bb, &ht, Angle::from_degrees(74.0)).unwrap();
        let st = SeatTube::new(&bb, &tth, 520.0, Angle::from_degrees(73.5)).unwrap();
        let crank = Crank::new(&bb, 172.5, 150.0, Angle::ZERO);
        let seat_post = SeatPost::new(&bb, &st, &crank, 840.0, 0.0).unwrap();
        let spacers = Spacers::new(&ht, 20.0);
        let stem = Stem::new(&spacers, 100.0, Angle::from_degrees(-6.0));
        let handlebar = HandleBar::new(&stem, 80.0, 0.0, bar_width);
        Setup {
            seat_post,
            handlebar,
        }
    }

    #[test]
    fn shoulder_sits_on_both_circles() {
        let s = setup(420.0);
        let body = UpperBody::new(&s.seat_post, &s.handlebar, 600.0, 620.0).unwrap();
        assert_eq!(body.start(), s.seat_post.saddle());
        assert!((body.length() - 600.0).abs() < 1e-6);
        let arm = s.handlebar.projected_arm_length(620.0).unwrap();
        let reach = distance(body.shoulder(), body.hands());
        assert!((reach - arm).abs() < 1e-6);
        assert!(body.shoulder().y > body.hands().y);
        let lean = body.spine_angle().degrees();
        assert!(lean > 30.0 && lean < 70.0, "lean {lean}");
    }

    #[test]
    fn short_arms_on_wide_bar() {
        let s = setup(800.0);
        let err = UpperBody::new(&s.seat_post, &s.handlebar, 600.0, 350.0);
        assert_eq!(
            err,
            Err(PoseError::ArmShorterThanHalfBar {
                arm: 350.0,
                half_width: 400.0,
            })
        );
    }

    #[test]
    fn torso_too_short_to_span() {
        let s = setup(420.0);
        let err = UpperBody::new(&s.seat_post, &s.handlebar, 50.0, 250.0);
        assert!(matches!(err, Err(PoseError::ShoulderUnreachable { .. })));
    }

    #[test]
    fn shoulder_forced_below_hands() {
        let s = setup(0.0);
        let saddle = s.seat_post.saddle();
        let hands = s.handlebar.coordinates();
        assert!(hands.y < saddle.y);
        // circles meet far out along the falling saddle → hands line, both
        // points well below the bar
        let gap = distance(saddle, hands);
        let along = 10.0 * gap;
        let spine = along.hypot(100.0);
        let arm = (along - gap).hypot(100.0);
        let err = UpperBody::new(&s.seat_post, &s.handlebar, spine, arm);
        assert_eq!(err, Err(PoseError::ShoulderBelowHands));
    }
}
