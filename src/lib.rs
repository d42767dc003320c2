//! Bicycle geometry from geometry-chart numbers.
//!
//! Feed a [`BikeParams`] (reach, stack, tube lengths and angles, wheel
//! sizes, rider measurements) to [`build`] and get back a [`BikeGeometry`]
//! with the 2D position of every tube, the fork, crank and cockpit, the
//! rider's seatpost, leg and torso, and the usual fit metrics.
//!
//! Coordinates are millimetres with the y axis pointing up. Angles come in
//! as degrees and are kept as [`Angle`] (radians) internally.

pub mod bike;
pub mod cockpit;
pub mod compare;
pub mod defaults;
pub mod draw;
pub mod drivetrain;
pub mod errors;
pub mod frame;
pub mod geometry;
pub mod log;
pub mod params;
pub mod rider;
pub mod segment;
pub mod tilt;
pub mod types;
pub mod wheel;

pub use bike::{BikeGeometry, Metrics};
pub use compare::{Comparison, compare};
pub use draw::{Drawable, Part};
pub use errors::{GeometryError, PoseError};
pub use params::BikeParams;
pub use rider::Pose;
pub use types::{Angle, Bounds, Coordinates};

/// Build the bike described by `params`.
///
/// Returns an error only when the frame cannot exist. A rider that does not
/// fit leaves the rider parts out; see [`BikeGeometry::rider_issues`].
pub fn build(params: &BikeParams) -> Result<BikeGeometry, GeometryError> {
    BikeGeometry::new(params)
}
