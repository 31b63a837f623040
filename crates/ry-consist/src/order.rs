//! Motion orders — the output side of the actuator interface.

use std::fmt;

use ry_core::TravelDirection;

/// How fast the consist is allowed to go while executing an order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MotionMode {
    /// Restricted yard speed.
    Yard,
    /// Road speed up to the given limit.
    Road { max_speed_mph: u32 },
}

impl fmt::Display for MotionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotionMode::Yard => write!(f, "yard speed"),
            MotionMode::Road { max_speed_mph } => write!(f, "max {max_speed_mph} mph"),
        }
    }
}

/// A single movement instruction handed to the consist.
///
/// Distances are computed by the route calculator before the order is
/// issued; the consist only has to cover `distance_m` in `direction`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MotionOrder {
    pub mode:       MotionMode,
    pub direction:  TravelDirection,
    pub distance_m: f32,
}
