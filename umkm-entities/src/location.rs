use crate::geo::*;

/// Device position, refreshed once per screen activation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UserLocation {
    pub pos: MapPoint,
    /// Radius of uncertainty in meters
    pub accuracy: Option<f64>,
}

impl UserLocation {
    pub const fn new(pos: MapPoint) -> Self {
        Self {
            pos,
            accuracy: None,
        }
    }
}
