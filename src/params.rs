//! The flat parameter snapshot a bike is built from.
//!
//! Every field defaults to zero so presets only need to name what they set.
//! Lengths are millimetres, angles are degrees.

use serde::{Deserialize, Serialize};

use crate::errors::GeometryError;
use crate::types::{Coordinates, check_finite};

#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BikeParams {
    pub bottom_bracket_x: f64,
    pub bottom_bracket_y: f64,

    // Frame
    pub reach_length: f64,
    pub stack_length: f64,
    pub head_tube_length: f64,
    pub head_tube_angle: f64,
    pub chain_stay_length: f64,
    pub bb_drop_length: f64,
    pub seat_tube_length: f64,
    /// Actual (physical) seat tube angle
    pub seat_tube_angle: f64,
    pub effective_seat_tube_angle: f64,

    // Fork placement: crown-to-axle wins, then front center, then wheelbase
    pub fork_offset_length: f64,
    pub crown_to_axle_length: f64,
    pub front_center_length: f64,
    pub wheel_base: f64,

    // Drivetrain and cockpit
    pub crank_length: f64,
    pub q_factor: f64,
    pub crank_spin_angle: f64,
    pub spacers_length: f64,
    pub stem_length: f64,
    pub stem_angle: f64,
    pub handlebar_reach: f64,
    pub handlebar_height: f64,
    pub handlebar_width: f64,
    pub seat_post_offset: f64,

    // Wheels
    pub front_wheel_diameter: f64,
    pub front_tire_width: f64,
    pub rear_wheel_diameter: f64,
    pub rear_tire_width: f64,

    // Rider
    pub rider_inseam_length: f64,
    pub rider_upper_leg_length: f64,
    pub rider_foot_length: f64,
    pub rider_arm_length: f64,
    pub rider_spine_length: f64,
}

impl BikeParams {
    pub fn bottom_bracket(&self) -> Coordinates {
        Coordinates::new(self.bottom_bracket_x, self.bottom_bracket_y)
    }

    /// Every field paired with its preset name.
    pub fn fields(&self) -> [(&'static str, f64); 34] {
        [
            ("bottomBracketX", self.bottom_bracket_x),
            ("bottomBracketY", self.bottom_bracket_y),
            ("reachLength", self.reach_length),
            ("stackLength", self.stack_length),
            ("headTubeLength", self.head_tube_length),
            ("headTubeAngle", self.head_tube_angle),
            ("chainStayLength", self.chain_stay_length),
            ("bbDropLength", self.bb_drop_length),
            ("seatTubeLength", self.seat_tube_length),
            ("seatTubeAngle", self.seat_tube_angle),
            ("effectiveSeatTubeAngle", self.effective_seat_tube_angle),
            ("forkOffsetLength", self.fork_offset_length),
            ("crownToAxleLength", self.crown_to_axle_length),
            ("frontCenterLength", self.front_center_length),
            ("wheelBase", self.wheel_base),
            ("crankLength", self.crank_length),
            ("qFactor", self.q_factor),
            ("crankSpinAngle", self.crank_spin_angle),
            ("spacersLength", self.spacers_length),
            ("stemLength", self.stem_length),
            ("stemAngle", self.stem_angle),
            ("handlebarReach", self.handlebar_reach),
            ("handlebarHeight", self.handlebar_height),
            ("handlebarWidth", self.handlebar_width),
            ("seatPostOffset", self.seat_post_offset),
            ("frontWheelDiameter", self.front_wheel_diameter),
            ("frontTireWidth", self.front_tire_width),
            ("rearWheelDiameter", self.rear_wheel_diameter),
            ("rearTireWidth", self.rear_tire_width),
            ("riderInseamLength", self.rider_inseam_length),
            ("riderUpperLegLength", self.rider_upper_leg_length),
            ("riderFootLength", self.rider_foot_length),
            ("riderArmLength", self.rider_arm_length),
            ("riderSpineLength", self.rider_spine_length),
        ]
    }

    /// Reject NaN and infinite values. Ranges are the caller's business.
    pub fn validate(&self) -> Result<(), GeometryError> {
        for (name, value) in self.fields() {
            check_finite(value).map_err(|source| GeometryError::InvalidParameter { name, source })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NumericError;

    #[test]
    fn default_is_all_zero() {
        let p = BikeParams::default();
        assert!(p.fields().iter().all(|(_, v)| *v == 0.0));
        assert!(p.validate().is_ok());
    }

    #[test]
    fn validate_names_the_bad_field() {
        let p = BikeParams {
            stem_angle: f64::INFINITY,
            ..Default::default()
        };
        assert_eq!(
            p.validate(),
            Err(GeometryError::InvalidParameter {
                name: "stemAngle",
                source: NumericError::Infinite,
            })
        );
    }

    #[test]
    fn deserializes_partial_camel_case_preset() {
        let p: BikeParams = serde_json::from_str(
            r#"{ "reachLength": 380, "stackLength": 580, "headTubeAngle": 73.0 }"#,
        )
        .unwrap();
        assert_eq!(p.reach_length, 380.0);
        assert_eq!(p.stack_length, 580.0);
        assert_eq!(p.head_tube_angle, 73.0);
        assert_eq!(p.chain_stay_length, 0.0);
    }

    #[test]
    fn field_names_match_serde_names() {
        let p = BikeParams {
            q_factor: 150.0,
            bb_drop_length: 70.0,
            ..Default::default()
        };
        let json = serde_json::to_value(p).unwrap();
        for (name, value) in p.fields() {
            assert_eq!(json[name].as_f64(), Some(value), "{name}");
        }
    }
}
