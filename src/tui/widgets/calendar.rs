//! Training calendar heatmap widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use crate::services::calendar::{color_for, color_for_cell};
use crate::tui::theme::Theme;
use crate::types::{CalendarLayout, Rgb, DAYS_PER_WEEK};

/// Cell dimensions for grid layout
const CELL_WIDTH: u16 = 2; // 1 glyph + 1 gap
const LABEL_WIDTH: u16 = 4; // "Mon " prefix

const CELL_GLYPH: &str = "■";

/// Rows above the grid: header, month labels
const GRID_TOP: u16 = 2;

/// Weekday labels, Sunday first; blank rows keep the column quiet
const WEEKDAY_LABELS: [&str; DAYS_PER_WEEK] = ["", "Mon", "", "Wed", "", "Fri", ""];

/// Legend samples, least to most intense
const LEGEND_SAMPLES: [(u32, f64); 6] = [
    (0, 0.0),
    (1, 1.0),
    (1, 2.0),
    (1, 3.0),
    (1, 4.0),
    (1, 5.0),
];

/// Format number with thousand separators
/// Example: 1234567 → "1,234,567"
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let len = s.len();
    let mut result = String::with_capacity(len + len / 3);

    // Digits are ASCII, so byte indexing is safe
    for (i, ch) in s.bytes().enumerate() {
        if i > 0 && (len - i).is_multiple_of(3) {
            result.push(',');
        }
        result.push(ch as char);
    }

    result
}

/// Calendar heatmap widget for ratatui
pub struct CalendarHeatmap<'a> {
    layout: &'a CalendarLayout,
    theme: Theme,
    accent: Rgb,
}

impl<'a> CalendarHeatmap<'a> {
    /// Total rows: header + months + 7 weekdays + legend
    pub const HEIGHT: u16 = GRID_TOP + DAYS_PER_WEEK as u16 + 1;

    pub fn new(layout: &'a CalendarLayout, theme: Theme, accent: Rgb) -> Self {
        Self {
            layout,
            theme,
            accent,
        }
    }

    /// Number of week columns that fit in `width`
    pub fn weeks_for_width(width: u16) -> usize {
        (width.saturating_sub(LABEL_WIDTH) / CELL_WIDTH) as usize
    }

    /// Width needed to draw `weeks` columns
    pub fn width_for_weeks(weeks: usize) -> u16 {
        let weeks = u16::try_from(weeks).unwrap_or(u16::MAX);
        LABEL_WIDTH.saturating_add(weeks.saturating_mul(CELL_WIDTH))
    }

    /// Calculate x_offset for centering the heatmap
    fn calculate_x_offset(&self, area: Rect) -> u16 {
        area.width
            .saturating_sub(Self::width_for_weeks(self.layout.weeks.len()))
            / 2
    }

    /// Header line: "12 sessions · 9 active days"
    fn render_header(&self, area: Rect, buf: &mut Buffer, x: u16) {
        let text = format!(
            "{} sessions · {} active days",
            format_number(self.layout.total_sessions()),
            format_number(self.layout.active_days() as u64)
        );
        buf.set_stringn(
            x,
            area.y,
            text,
            (area.x + area.width).saturating_sub(x) as usize,
            Style::default()
                .fg(self.theme.text())
                .add_modifier(Modifier::BOLD),
        );
    }

    /// Month labels above the grid. Labels that would collide with the
    /// previous one are skipped.
    fn render_month_labels(&self, area: Rect, buf: &mut Buffer, grid_x: u16) {
        let y = area.y + 1;
        let max_x = area.x + area.width;
        let style = Style::default().fg(self.theme.muted());
        let mut next_free_x = grid_x;

        for month in &self.layout.months {
            let x = grid_x + (month.col as u16) * CELL_WIDTH;
            let label_width = month.label.len() as u16;
            if x < next_free_x {
                continue;
            }
            if x + label_width > max_x {
                break;
            }
            buf.set_string(x, y, &month.label, style);
            next_free_x = x + label_width + 1;
        }
    }

    /// One weekday row: "Mon ■ ■ ■"
    fn render_day_row(&self, area: Rect, buf: &mut Buffer, day_idx: usize, x_offset: u16) {
        let y = area.y + GRID_TOP + day_idx as u16;
        let label_x = area.x + x_offset;
        let grid_x = label_x + LABEL_WIDTH;
        let max_x = area.x + area.width;

        buf.set_string(
            label_x,
            y,
            WEEKDAY_LABELS[day_idx],
            Style::default().fg(self.theme.muted()),
        );

        for (col, week) in self.layout.weeks.iter().enumerate() {
            let x = grid_x + (col as u16) * CELL_WIDTH;
            if x >= max_x {
                break;
            }
            let cell = &week.cells()[day_idx];
            if cell.is_padding() {
                continue;
            }
            let color = self.theme.token_color(color_for_cell(cell), self.accent);
            buf.set_string(x, y, CELL_GLYPH, Style::default().fg(color));
        }
    }

    /// Legend below the grid: "Less ■ ■ ■ ■ ■ ■ More"
    fn render_legend(&self, area: Rect, buf: &mut Buffer, grid_x: u16) {
        let y = area.y + GRID_TOP + DAYS_PER_WEEK as u16;
        let max_x = area.x + area.width;
        let muted = Style::default().fg(self.theme.muted());

        let legend_width = 5 + LEGEND_SAMPLES.len() as u16 * CELL_WIDTH + 4;
        if grid_x + legend_width > max_x {
            return;
        }

        buf.set_string(grid_x, y, "Less", muted);
        let mut x = grid_x + 5;
        for (count, intensity) in LEGEND_SAMPLES {
            let color = self.theme.token_color(color_for(count, intensity), self.accent);
            buf.set_string(x, y, CELL_GLYPH, Style::default().fg(color));
            x += CELL_WIDTH;
        }
        buf.set_string(x, y, "More", muted);
    }
}

impl Widget for CalendarHeatmap<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.layout.is_empty() || area.height < Self::HEIGHT {
            return;
        }

        let x_offset = self.calculate_x_offset(area);
        let grid_x = area.x + x_offset + LABEL_WIDTH;

        self.render_header(area, buf, area.x + x_offset);
        self.render_month_labels(area, buf, grid_x);
        for day_idx in 0..DAYS_PER_WEEK {
            self.render_day_row(area, buf, day_idx, x_offset);
        }
        self.render_legend(area, buf, grid_x);
    }
}
