//! Training calendar layout: Sunday-aligned week columns and month labels

use std::sync::Arc;

use chrono::Datelike;

use crate::types::{
    CalendarLayout, Cell, ColorToken, DayRecord, MonthLabel, WeekColumn, DAYS_PER_WEEK,
};

/// Opacity per intensity level (1-5)
const OPACITY_LEVELS: [(u8, f64); 5] = [(1, 0.25), (2, 0.40), (3, 0.60), (4, 0.80), (5, 1.00)];

/// Opacity used when a level has no table entry
const FALLBACK_OPACITY: f64 = 0.25;

/// Bucket a flat, contiguous, ascending run of days into Sunday-start weeks.
///
/// Leading cells before the first day and trailing cells after the last are
/// `Cell::Padding`, so every column holds exactly seven cells.
pub fn layout(days: &[DayRecord]) -> CalendarLayout {
    let Some(first) = days.first() else {
        return CalendarLayout::default();
    };

    let lead = first.date.weekday().num_days_from_sunday() as usize;
    let padded = std::iter::repeat_n(Cell::Padding, lead)
        .chain(days.iter().copied().map(Cell::Real));

    let mut weeks = Vec::with_capacity((lead + days.len()).div_ceil(DAYS_PER_WEEK));
    let mut current = WeekColumn::default();
    let mut filled = 0;

    for cell in padded {
        current.0[filled] = cell;
        filled += 1;
        if filled == DAYS_PER_WEEK {
            weeks.push(current);
            current = WeekColumn::default();
            filled = 0;
        }
    }

    // WeekColumn::default() is all padding, so the tail is already right-padded
    if filled > 0 {
        weeks.push(current);
    }

    let months = month_labels(&weeks);
    CalendarLayout { weeks, months }
}

/// One label per month transition, keyed on each column's first real day
fn month_labels(weeks: &[WeekColumn]) -> Vec<MonthLabel> {
    let mut labels = Vec::new();
    let mut last_month: Option<u32> = None;

    for (col, week) in weeks.iter().enumerate() {
        let Some(first) = week.first_real() else {
            continue;
        };
        let month = first.date.month();
        if last_month.is_none_or(|m| m != month) {
            labels.push(MonthLabel {
                label: first.date.format("%b").to_string(),
                col,
            });
            last_month = Some(month);
        }
    }

    labels
}

/// Intensity level 1-5 for a day with sessions (ceil, then clamp)
pub fn intensity_level(intensity: f64) -> u8 {
    // NaN casts to 0 and lands on level 1
    (intensity.ceil() as i64).clamp(1, 5) as u8
}

fn opacity_for_level(level: u8) -> f64 {
    OPACITY_LEVELS
        .iter()
        .find(|(l, _)| *l == level)
        .map(|(_, opacity)| *opacity)
        .unwrap_or(FALLBACK_OPACITY)
}

/// Map a day's session count and intensity to a display color
pub fn color_for(count: u32, intensity: f64) -> ColorToken {
    if count == 0 {
        return ColorToken::Empty;
    }
    ColorToken::Accent {
        opacity: opacity_for_level(intensity_level(intensity)),
    }
}

/// Color for a grid cell; padding cells are empty
pub fn color_for_cell(cell: &Cell) -> ColorToken {
    match cell {
        Cell::Real(record) => color_for(record.count, record.intensity),
        Cell::Padding => ColorToken::Empty,
    }
}

/// Caller-side memo that recomputes only when the input `Arc` changes
#[derive(Debug, Default)]
pub struct LayoutMemo {
    cached: Option<(Arc<[DayRecord]>, Arc<CalendarLayout>)>,
}

impl LayoutMemo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, days: &Arc<[DayRecord]>) -> Arc<CalendarLayout> {
        if let Some((input, output)) = &self.cached {
            if Arc::ptr_eq(input, days) {
                return Arc::clone(output);
            }
        }
        tracing::debug!(days = days.len(), "recomputing calendar layout");
        let output = Arc::new(layout(days));
        self.cached = Some((Arc::clone(days), Arc::clone(&output)));
        output
    }
}
