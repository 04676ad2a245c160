//! Heart-rate zone bar: proportional segments with sliver suppression

use crate::types::{Segment, Zone, ZoneDurations};

/// Segments narrower than this (in percent) are dropped
pub const MIN_VISIBLE_PERCENT: f64 = 1.0;

/// Build the stacked-bar segments for a zone duration map.
///
/// Returns `None` when no time was recorded. Slivers under 1% are dropped
/// without renormalizing the rest, so the bar may under-fill 100%.
pub fn render(zones: &ZoneDurations) -> Option<Vec<Segment>> {
    let total = zones.total();
    if total == 0 {
        return None;
    }

    let segments = Zone::ALL
        .iter()
        .filter_map(|&zone| {
            let pct = zones.get(zone) as f64 / total as f64 * 100.0;
            (pct >= MIN_VISIBLE_PERCENT).then(|| Segment {
                zone,
                width_percent: pct,
                color: zone.color(),
            })
        })
        .collect();

    Some(segments)
}

/// Format milliseconds as a compact duration: "1h 05m", "12m", "45s"
pub fn format_duration(millis: u64) -> String {
    let secs = millis / 1000;
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;

    if hours > 0 {
        format!("{}h {:02}m", hours, minutes)
    } else if minutes > 0 {
        format!("{}m", minutes)
    } else {
        format!("{}s", secs)
    }
}
