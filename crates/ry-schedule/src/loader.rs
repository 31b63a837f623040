//! Schedule-collection persistence.
//!
//! The whole collection is one JSON array.  Any `Read`/`Write` works; tests
//! pass a `std::io::Cursor`, hosts pass a file.

use std::io::{Read, Write};

use crate::error::ScheduleResult;
use crate::schedule::Schedule;

/// Write the collection as pretty-printed JSON.
pub fn save_schedules<W: Write>(writer: W, schedules: &[Schedule]) -> ScheduleResult<()> {
    serde_json::to_writer_pretty(writer, schedules)?;
    Ok(())
}

/// Load a collection saved by [`save_schedules`].
///
/// Individual command records that fail to parse come back as
/// [`Command::Invalid`](crate::Command::Invalid) sentinels rather than
/// failing the load; only a malformed document errors.
pub fn load_schedules<R: Read>(reader: R) -> ScheduleResult<Vec<Schedule>> {
    Ok(serde_json::from_reader(reader)?)
}
