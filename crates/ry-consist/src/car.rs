//! Individual cars and their end gear.

/// Coupler and pneumatic state at one end of a car.
///
/// `Default` is the parked, uncoupled state: nothing connected, anglecock
/// closed, cut lever down.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct EndGear {
    /// Mechanically coupled to a neighbouring car.
    pub coupled: bool,
    /// Brake-pipe gladhands connected across the coupling.
    pub air_connected: bool,
    /// Anglecock open — air flows past this end.
    pub anglecock_open: bool,
    /// Cut lever lifted (pin pulled), ready to part the coupling.
    pub cut_lever_lifted: bool,
}

/// One car in a consist.
///
/// `gear_a` is the end toward the front of the consist (car index 0),
/// `gear_b` the end toward the rear.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Car {
    pub length_m:  f32,
    pub handbrake: bool,
    pub gear_a:    EndGear,
    pub gear_b:    EndGear,
}

impl Car {
    pub fn new(length_m: f32) -> Self {
        Self {
            length_m,
            handbrake: false,
            gear_a: EndGear::default(),
            gear_b: EndGear::default(),
        }
    }
}
