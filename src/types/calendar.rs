//! Calendar heatmap types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize, Serializer};

/// Days per week column (Sunday through Saturday)
pub const DAYS_PER_WEEK: usize = 7;

/// One day of training, already aggregated upstream
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayRecord {
    pub date: NaiveDate,
    /// Number of sessions logged on this date
    pub count: u32,
    /// Average session intensity, 0-5 scale (fractional allowed)
    #[serde(default)]
    pub intensity: f64,
}

impl DayRecord {
    pub fn new(date: NaiveDate, count: u32, intensity: f64) -> Self {
        Self {
            date,
            count,
            intensity,
        }
    }

    /// A rest day: no sessions, no intensity
    pub fn rest(date: NaiveDate) -> Self {
        Self::new(date, 0, 0.0)
    }
}

/// A single grid cell: a real day or alignment padding
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Cell {
    Real(DayRecord),
    #[default]
    Padding,
}

impl Cell {
    pub fn date(&self) -> Option<NaiveDate> {
        self.record().map(|r| r.date)
    }

    pub fn record(&self) -> Option<&DayRecord> {
        match self {
            Self::Real(record) => Some(record),
            Self::Padding => None,
        }
    }

    pub fn is_padding(&self) -> bool {
        matches!(self, Self::Padding)
    }
}

/// Padding serializes as `null`, real cells as the record itself
impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Real(record) => record.serialize(serializer),
            Self::Padding => serializer.serialize_none(),
        }
    }
}

/// One calendar week, index 0 = Sunday
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct WeekColumn(pub [Cell; DAYS_PER_WEEK]);

impl WeekColumn {
    pub fn cells(&self) -> &[Cell; DAYS_PER_WEEK] {
        &self.0
    }

    /// First non-padding cell, scanning Sunday to Saturday
    pub fn first_real(&self) -> Option<&DayRecord> {
        self.0.iter().find_map(Cell::record)
    }
}

/// Month name positioned over a week column
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthLabel {
    /// Short month name (e.g., "Mar")
    pub label: String,
    /// Zero-based week column index
    pub col: usize,
}

/// Columns a carried month label needs before the next label starts
const CARRIED_LABEL_GAP: usize = 2;

/// Week-bucketed calendar grid plus month labels
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CalendarLayout {
    pub weeks: Vec<WeekColumn>,
    pub months: Vec<MonthLabel>,
}

impl CalendarLayout {
    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    fn real_cells(&self) -> impl Iterator<Item = &DayRecord> {
        self.weeks
            .iter()
            .flat_map(|w| w.0.iter())
            .filter_map(Cell::record)
    }

    /// Sum of session counts across all real days
    pub fn total_sessions(&self) -> u64 {
        self.real_cells().map(|r| u64::from(r.count)).sum()
    }

    /// Number of days with at least one session
    pub fn active_days(&self) -> usize {
        self.real_cells().filter(|r| r.count > 0).count()
    }

    /// Keep only the most recent `weeks` columns, shifting month labels.
    /// A label is re-emitted at column 0 for the month in progress, unless
    /// the next month starts close enough that the two would overlap.
    pub fn tail(&self, weeks: usize) -> Self {
        if weeks >= self.weeks.len() {
            return self.clone();
        }
        if weeks == 0 {
            return Self::default();
        }
        let skip = self.weeks.len() - weeks;

        let mut months: Vec<MonthLabel> = self
            .months
            .iter()
            .filter(|m| m.col >= skip)
            .map(|m| MonthLabel {
                label: m.label.clone(),
                col: m.col - skip,
            })
            .collect();

        if months.first().is_none_or(|m| m.col >= CARRIED_LABEL_GAP) {
            if let Some(carried) = self.months.iter().rev().find(|m| m.col < skip) {
                months.insert(
                    0,
                    MonthLabel {
                        label: carried.label.clone(),
                        col: 0,
                    },
                );
            }
        }

        Self {
            weeks: self.weeks[skip..].to_vec(),
            months,
        }
    }
}
