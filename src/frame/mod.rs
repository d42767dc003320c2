//! Frame and fork construction.
//!
//! Each part is built from the bottom bracket and the parts before it, in
//! this order: head tube, chain stay, top tube horizontal, seat tube, fork.
//! The connectors (down tube, top tube, seat stay) only join points that are
//! already known and are built after the leveling pass.

mod chain_stay;
mod fork;
mod head_tube;
mod seat_tube;
mod top_tube;

pub use chain_stay::ChainStay;
pub use fork::{Fork, ForkPlacement};
pub use head_tube::HeadTube;
pub use seat_tube::SeatTube;
pub use top_tube::TopTubeHorizontal;

use crate::segment::{Segment, impl_segment_access};
use crate::types::Coordinates;

/// The fixed reference every other coordinate hangs off.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct BottomBracket {
    coordinates: Coordinates,
}

impl BottomBracket {
    pub fn new(coordinates: Coordinates) -> Self {
        Self { coordinates }
    }

    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }
}

/// Head tube bottom to bottom bracket.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DownTube {
    segment: Segment,
}

impl DownTube {
    pub fn new(head_tube: &HeadTube, bb: &BottomBracket) -> Self {
        Self {
            segment: Segment::new(head_tube.end(), bb.coordinates()),
        }
    }
}

/// Head tube top to seat tube top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TopTube {
    segment: Segment,
}

impl TopTube {
    pub fn new(head_tube: &HeadTube, seat_tube: &SeatTube) -> Self {
        Self {
            segment: Segment::new(head_tube.start(), seat_tube.start()),
        }
    }
}

/// Rear axle to seat tube top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeatStay {
    segment: Segment,
}

impl SeatStay {
    pub fn new(chain_stay: &ChainStay, seat_tube: &SeatTube) -> Self {
        Self {
            segment: Segment::new(chain_stay.start(), seat_tube.start()),
        }
    }
}

impl_segment_access!(DownTube, TopTube, SeatStay);
