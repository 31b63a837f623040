//! Direction of travel along the consist's own axis.

use std::fmt;

/// Which way the locomotive is ordered to move.
///
/// `Forward` is the locomotive's front coupler; the track map has no global
/// orientation, so the consist resolves this to a concrete [`Location`]
/// via `head_location` at execution time.
///
/// [`Location`]: https://docs.rs/ry-track
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TravelDirection {
    Forward,
    Reverse,
}

impl TravelDirection {
    pub fn opposite(self) -> TravelDirection {
        match self {
            TravelDirection::Forward => TravelDirection::Reverse,
            TravelDirection::Reverse => TravelDirection::Forward,
        }
    }

    pub fn is_forward(self) -> bool {
        matches!(self, TravelDirection::Forward)
    }
}

impl fmt::Display for TravelDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TravelDirection::Forward => write!(f, "forward"),
            TravelDirection::Reverse => write!(f, "back"),
        }
    }
}
