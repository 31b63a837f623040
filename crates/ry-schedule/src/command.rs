//! The closed command union a schedule is made of.
//!
//! The set of commands is an exhaustive enum rather than a registry: adding
//! a variant makes the compiler point at every match that must learn about
//! it, including the executor table in the runner.

use serde::{Deserialize, Serialize};

use ry_core::{NodeId, TravelDirection};

// ── MoveTarget ────────────────────────────────────────────────────────────────

/// Where a `Move` command stops.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "$Type")]
pub enum MoveTarget {
    /// The `count`-th switch ahead, stopping short of it or clearing it.
    SwitchCount {
        count: u32,
        before: bool,
        clear_under_train: bool,
    },
    /// A specific switch node, found by search rather than counting.
    NamedSwitch { node: NodeId, before: bool },
    /// The end of the track ahead, less the safety margin.
    EndOfTrack,
    /// A fixed distance expressed in nominal car lengths.
    CarLengths { count: u32 },
}

// ── Command ───────────────────────────────────────────────────────────────────

/// One step of a schedule.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "$Type")]
pub enum Command {
    Move {
        direction: TravelDirection,
        target: MoveTarget,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_speed_mph: Option<u32>,
    },
    ConnectAir,
    ReleaseHandbrakes,
    SetSwitch { node: NodeId, thrown: bool },
    RestoreSwitches,
    SetHandbrake { car: i32 },
    Uncouple { car: i32 },
    Wait { seconds: f32 },
    NoticeWait { message: String },
    /// Sentinel standing in for a record that failed to deserialize.  A
    /// schedule containing one is not executable.
    Invalid { reason: String },
}

impl Command {
    /// The stable discriminator written to the `"$Type"` field.
    pub fn tag(&self) -> &'static str {
        match self {
            Command::Move { .. } => "Move",
            Command::ConnectAir => "ConnectAir",
            Command::ReleaseHandbrakes => "ReleaseHandbrakes",
            Command::SetSwitch { .. } => "SetSwitch",
            Command::RestoreSwitches => "RestoreSwitches",
            Command::SetHandbrake { .. } => "SetHandbrake",
            Command::Uncouple { .. } => "Uncouple",
            Command::Wait { .. } => "Wait",
            Command::NoticeWait { .. } => "NoticeWait",
            Command::Invalid { .. } => "Invalid",
        }
    }

    /// Crew cost of executing this command, in wage units.
    pub fn wage(&self) -> u32 {
        match self {
            Command::ConnectAir => 10,
            Command::Move { .. } => 5,
            Command::ReleaseHandbrakes
            | Command::SetSwitch { .. }
            | Command::RestoreSwitches
            | Command::SetHandbrake { .. }
            | Command::Uncouple { .. } => 1,
            Command::Wait { .. } | Command::NoticeWait { .. } | Command::Invalid { .. } => 0,
        }
    }

    /// `true` when the command completes without suspending the run.
    pub fn is_instant(&self) -> bool {
        !matches!(
            self,
            Command::Move { .. } | Command::Wait { .. } | Command::NoticeWait { .. }
        )
    }

    /// Human-readable description, e.g. for a run log or crew order sheet.
    pub fn display_text(&self) -> String {
        match self {
            Command::Move {
                direction,
                target,
                max_speed_mph,
            } => {
                let speed = match max_speed_mph {
                    Some(mph) => format!(" at max {mph} mph"),
                    None => " at yard speed".to_string(),
                };
                format!("move {direction}, {}{speed}", target.display_text())
            }
            Command::ConnectAir => "connect air through the consist".to_string(),
            Command::ReleaseHandbrakes => "release all handbrakes".to_string(),
            Command::SetSwitch { node, thrown } => {
                let pos = if *thrown { "reverse" } else { "normal" };
                format!("set switch {node} to {pos}")
            }
            Command::RestoreSwitches => "restore switches to their prior state".to_string(),
            Command::SetHandbrake { car } => format!("set the handbrake on car {car}"),
            Command::Uncouple { car } => format!("uncouple at car {car}"),
            Command::Wait { seconds } => format!("wait {seconds} s"),
            Command::NoticeWait { message } => message.clone(),
            Command::Invalid { reason } => format!("invalid command: {reason}"),
        }
    }
}

impl MoveTarget {
    fn display_text(&self) -> String {
        match self {
            MoveTarget::SwitchCount {
                count,
                before,
                clear_under_train,
            } => {
                let stop = if *before { "stopping before" } else { "clearing" };
                let from = if *clear_under_train {
                    " counted from the rear"
                } else {
                    ""
                };
                format!("{stop} the {} switch{from}", ordinal(*count))
            }
            MoveTarget::NamedSwitch { node, before } => {
                let stop = if *before { "stopping before" } else { "clearing" };
                format!("{stop} switch {node}")
            }
            MoveTarget::EndOfTrack => "stopping at the end of track".to_string(),
            MoveTarget::CarLengths { count } => {
                let s = if *count == 1 { "" } else { "s" };
                format!("going {count} car length{s}")
            }
        }
    }
}

/// `1` → `"1st"`, `2` → `"2nd"`, `13` → `"13th"`.
fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (1, 11) | (2, 12) | (3, 13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}
