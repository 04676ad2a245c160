//! Input loading for CLI commands
//!
//! Upstream analytics exports are not guaranteed to be sorted or contiguous.
//! The calendar engine assumes both, so the loader sorts, rejects duplicate
//! dates, and (optionally) fills missing days with rest records.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use crate::types::{DayRecord, Result, RolltrackError, ZoneDurations};

/// Open a file for reading, or stdin when the path is `-`
pub fn open_input(path: &Path) -> Result<Box<dyn Read>> {
    if path.as_os_str() == "-" {
        return Ok(Box::new(io::stdin().lock()));
    }
    let file = File::open(path).map_err(|e| {
        RolltrackError::Io(io::Error::new(
            e.kind(),
            format!("{}: {}", path.display(), e),
        ))
    })?;
    Ok(Box::new(BufReader::new(file)))
}

/// Parse a JSON array of day records, sorted ascending by date
pub fn load_days<R: Read>(reader: R) -> Result<Vec<DayRecord>> {
    let mut days: Vec<DayRecord> = serde_json::from_reader(reader)?;
    days.sort_by_key(|d| d.date);

    if let Some(pair) = days.windows(2).find(|w| w[0].date == w[1].date) {
        return Err(RolltrackError::Parse(format!(
            "duplicate date {} in calendar input",
            pair[0].date
        )));
    }

    tracing::debug!(days = days.len(), "loaded calendar days");
    Ok(days)
}

/// Insert rest days so consecutive records are exactly one day apart.
/// Expects sorted, de-duplicated input (as returned by `load_days`).
pub fn fill_gaps(days: Vec<DayRecord>) -> Vec<DayRecord> {
    let (Some(first), Some(last)) = (days.first(), days.last()) else {
        return days;
    };
    let (start, end) = (first.date, last.date);
    let span = (end - start).num_days() as usize + 1;
    if span == days.len() {
        return days;
    }

    let given = days.len();
    let mut filled = Vec::with_capacity(span);
    let mut iter = days.into_iter().peekable();
    for date in start.iter_days().take(span) {
        match iter.next_if(|d| d.date == date) {
            Some(record) => filled.push(record),
            None => filled.push(DayRecord::rest(date)),
        }
    }

    tracing::info!(
        inserted = span - given,
        total = span,
        "filled calendar gaps"
    );
    filled
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ZoneInput {
    Many(Vec<ZoneDurations>),
    One(ZoneDurations),
}

/// Parse either a single zone map or an array of them (one per session)
pub fn load_zone_maps<R: Read>(reader: R) -> Result<Vec<ZoneDurations>> {
    let maps = match serde_json::from_reader::<_, ZoneInput>(reader)? {
        ZoneInput::Many(maps) => maps,
        ZoneInput::One(map) => vec![map],
    };
    tracing::debug!(maps = maps.len(), "loaded zone maps");
    Ok(maps)
}
