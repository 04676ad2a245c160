//! Mini zone bar widget - proportional heart-rate zone breakdown

use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use crate::services::zones::{format_duration, render};
use crate::tui::theme::{rgb, Theme};
use crate::types::{Segment, ZoneDurations};

const BAR_GLYPH: &str = "█";
const LEGEND_GLYPH: &str = "■";
const NO_DATA: &str = "no zone data";

/// Horizontal stacked bar of zone segments
pub struct ZoneBar {
    segments: Option<Vec<Segment>>,
    durations: ZoneDurations,
    show_legend: bool,
    theme: Theme,
}

impl ZoneBar {
    pub fn new(durations: &ZoneDurations, theme: Theme) -> Self {
        Self {
            segments: render(durations),
            durations: *durations,
            show_legend: false,
            theme,
        }
    }

    /// Add a second line with per-zone durations
    pub fn with_legend(mut self, show: bool) -> Self {
        self.show_legend = show;
        self
    }

    pub fn height(&self) -> u16 {
        if self.show_legend && self.segments.is_some() {
            2
        } else {
            1
        }
    }

    /// Column span for each segment. Proportional, at least one column per
    /// surviving segment, never past `width`. Dropped slivers leave the bar
    /// short of `width` rather than being redistributed.
    pub fn column_spans(segments: &[Segment], width: u16) -> Vec<u16> {
        let mut remaining = width;
        segments
            .iter()
            .map(|segment| {
                let cols = (segment.width_percent / 100.0 * f64::from(width)).round() as u16;
                let cols = cols.max(1).min(remaining);
                remaining -= cols;
                cols
            })
            .collect()
    }

    fn render_bar(&self, segments: &[Segment], area: Rect, buf: &mut Buffer) {
        let mut x = area.x;
        for (segment, cols) in segments.iter().zip(Self::column_spans(segments, area.width)) {
            let style = Style::default().fg(rgb(segment.color));
            for _ in 0..cols {
                buf.set_string(x, area.y, BAR_GLYPH, style);
                x += 1;
            }
        }
    }

    /// "■ Z2 12m  ■ Z3 5m" for surviving segments
    fn render_legend(&self, segments: &[Segment], area: Rect, buf: &mut Buffer) {
        let y = area.y + 1;
        let max_x = area.x + area.width;
        let mut x = area.x;

        for segment in segments {
            let text = format!(
                " {} {}",
                segment.zone.label(),
                format_duration(self.durations.get(segment.zone))
            );
            let entry_width = 1 + text.chars().count() as u16;
            if x + entry_width > max_x {
                break;
            }
            buf.set_string(x, y, LEGEND_GLYPH, Style::default().fg(rgb(segment.color)));
            buf.set_string(x + 1, y, &text, Style::default().fg(self.theme.muted()));
            x += entry_width + 2;
        }
    }
}

impl Widget for ZoneBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let Some(segments) = &self.segments else {
            buf.set_stringn(
                area.x,
                area.y,
                NO_DATA,
                area.width as usize,
                Style::default().fg(self.theme.muted()),
            );
            return;
        };

        self.render_bar(segments, area, buf);
        if self.show_legend && area.height > 1 {
            self.render_legend(segments, area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Zone, ZONE_PALETTE};

    fn render_bar(durations: ZoneDurations, width: u16, legend: bool) -> Buffer {
        let area = Rect::new(0, 0, width, 2);
        let mut buf = Buffer::empty(area);
        ZoneBar::new(&durations, Theme::Dark)
            .with_legend(legend)
            .render(area, &mut buf);
        buf
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf.cell((x, y)).unwrap().symbol().to_string())
            .collect()
    }

    // ========== column_spans tests ==========

    #[test]
    fn test_column_spans_proportional() {
        let segments = render(&ZoneDurations::new([250, 250, 500, 0, 0])).unwrap();
        assert_eq!(ZoneBar::column_spans(&segments, 40), vec![10, 10, 20]);
    }

    #[test]
    fn test_column_spans_minimum_one() {
        // 1.5% of 20 columns rounds to 0; still gets one
        let segments = render(&ZoneDurations::new([15, 985, 0, 0, 0])).unwrap();
        assert_eq!(ZoneBar::column_spans(&segments, 20), vec![1, 19]);
    }

    #[test]
    fn test_column_spans_never_exceed_width() {
        let segments = render(&ZoneDurations::new([1, 1, 1, 1, 1])).unwrap();
        for width in 0..12 {
            let total: u16 = ZoneBar::column_spans(&segments, width).iter().sum();
            assert!(total <= width, "width {width} total {total}");
        }
    }

    #[test]
    fn test_column_spans_underfill_after_sliver() {
        let segments = render(&ZoneDurations::new([5, 5, 990, 0, 0])).unwrap();
        assert_eq!(ZoneBar::column_spans(&segments, 100), vec![99]);
    }

    // ========== rendering tests ==========

    #[test]
    fn test_render_sliver_leaves_gap() {
        let buf = render_bar(ZoneDurations::new([9, 991, 0, 0, 0]), 100, false);

        for x in 0..99 {
            let cell = buf.cell((x, 0)).unwrap();
            assert_eq!(cell.symbol(), BAR_GLYPH);
            assert_eq!(cell.fg, rgb(ZONE_PALETTE[Zone::Two.index()]));
        }
        assert_eq!(buf.cell((99, 0)).unwrap().symbol(), " ");
    }

    #[test]
    fn test_render_segment_colors_in_order() {
        let buf = render_bar(ZoneDurations::new([1, 1, 1, 1, 1]), 10, false);
        for (i, zone) in Zone::ALL.iter().enumerate() {
            let cell = buf.cell(((i * 2) as u16, 0)).unwrap();
            assert_eq!(cell.fg, rgb(zone.color()));
        }
    }

    #[test]
    fn test_render_no_data() {
        let buf = render_bar(ZoneDurations::default(), 20, true);
        assert!(row_text(&buf, 0).starts_with(NO_DATA));
        assert_eq!(row_text(&buf, 1).trim(), "");
    }

    #[test]
    fn test_render_legend() {
        let buf = render_bar(ZoneDurations::new([0, 720_000, 300_000, 0, 0]), 40, true);
        let legend = row_text(&buf, 1);
        assert!(legend.contains("Z2 12m"));
        assert!(legend.contains("Z3 5m"));
        assert!(!legend.contains("Z1"));
    }

    #[test]
    fn test_height() {
        let zones = ZoneDurations::new([0, 1, 0, 0, 0]);
        assert_eq!(ZoneBar::new(&zones, Theme::Dark).height(), 1);
        assert_eq!(ZoneBar::new(&zones, Theme::Dark).with_legend(true).height(), 2);
        assert_eq!(
            ZoneBar::new(&ZoneDurations::default(), Theme::Dark)
                .with_legend(true)
                .height(),
            1
        );
    }
}
