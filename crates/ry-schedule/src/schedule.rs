//! Schedules and their loss-tolerant deserialization.

use serde::de::Deserializer;
use serde::{Deserialize, Serialize};

use crate::command::Command;
use crate::error::ScheduleResult;

/// A named, ordered list of commands.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Schedule {
    pub name: String,
    pub commands: Vec<Command>,
}

impl Schedule {
    pub fn new(name: impl Into<String>, commands: Vec<Command>) -> Self {
        Self {
            name: name.into(),
            commands,
        }
    }

    /// Executable: non-empty and free of [`Command::Invalid`] sentinels.
    pub fn is_valid(&self) -> bool {
        !self.commands.is_empty()
            && !self
                .commands
                .iter()
                .any(|c| matches!(c, Command::Invalid { .. }))
    }

    /// Structurally independent copy, made by round-tripping through the
    /// JSON codec so the copy shares nothing with the original.
    pub fn duplicate(&self) -> ScheduleResult<Schedule> {
        Self::from_json(&self.to_json()?)
    }

    pub fn to_json(&self) -> ScheduleResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> ScheduleResult<Schedule> {
        Ok(serde_json::from_str(json)?)
    }
}

// ── Tolerant deserialization ──────────────────────────────────────────────────

/// Mirror of [`Schedule`] with commands left as raw JSON so one bad record
/// cannot fail the document.
#[derive(Deserialize)]
struct RawSchedule {
    name: String,
    commands: Vec<serde_json::Value>,
}

impl<'de> Deserialize<'de> for Schedule {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawSchedule::deserialize(deserializer)?;
        let commands = raw
            .commands
            .into_iter()
            .map(|value| {
                let tag = value
                    .get("$Type")
                    .and_then(|t| t.as_str())
                    .unwrap_or("<missing $Type>")
                    .to_string();
                serde_json::from_value::<Command>(value).unwrap_or_else(|e| Command::Invalid {
                    reason: format!("{tag}: {e}"),
                })
            })
            .collect();
        Ok(Schedule {
            name: raw.name,
            commands,
        })
    }
}
