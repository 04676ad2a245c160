use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::services::{calendar, loader, zones, Config, ThemePreference};
use crate::tui::{
    self,
    theme::Theme,
    widgets::{calendar::CalendarHeatmap, zone_bar::ZoneBar},
};
use crate::types::{Result, Rgb, RolltrackError, Segment, ZoneDurations};

/// Widest a zone bar is drawn, regardless of terminal width
const MAX_BAR_WIDTH: u16 = 60;

/// Training calendar heatmap & heart-rate zone bars
#[derive(Parser)]
#[command(name = "rolltrack")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (default: ~/.rolltrack/config.json)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Color theme, overriding the config file
    #[arg(long, global = true, value_enum)]
    theme: Option<ThemePreference>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the training calendar heatmap
    Calendar {
        /// JSON array of {date, count, intensity} records ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output the week layout as JSON
        #[arg(long)]
        json: bool,

        /// Don't insert rest days for missing dates
        #[arg(long)]
        no_fill: bool,
    },

    /// Render heart-rate zone bars
    Zones {
        /// JSON zone map, or array of maps, keyed zone_one_milli..zone_five_milli ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output the segments as JSON
        #[arg(long)]
        json: bool,

        /// Hide the per-zone duration legend
        #[arg(long)]
        no_legend: bool,
    },
}

/// Resolved display settings shared by both commands
struct Display {
    theme_pref: ThemePreference,
    accent: Rgb,
    weeks: Option<usize>,
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }

    pub fn run(self) -> anyhow::Result<()> {
        let config = load_config(self.config.as_deref()).context("failed to load config")?;
        let display = Display {
            theme_pref: self.theme.unwrap_or(config.theme),
            accent: config.accent_rgb()?,
            weeks: config.weeks,
        };

        match self.command {
            Commands::Calendar {
                input,
                json,
                no_fill,
            } => run_calendar(&input, json, no_fill, &display),
            Commands::Zones {
                input,
                json,
                no_legend,
            } => run_zones(&input, json, !no_legend, &display),
        }
    }
}

/// An explicit path must exist. The default path may be absent, and falls
/// back to defaults when the home directory can't be resolved.
fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) if !path.exists() => Err(RolltrackError::Config(format!(
            "config file not found: {}",
            path.display()
        ))),
        Some(path) => Config::load_from(path),
        None => match Config::default_path() {
            Ok(path) => Config::load_from(&path),
            Err(e) => {
                tracing::warn!("{}; using default config", e);
                Ok(Config::default())
            }
        },
    }
}

fn run_calendar(
    input: &Path,
    json: bool,
    no_fill: bool,
    display: &Display,
) -> anyhow::Result<()> {
    let reader = loader::open_input(input)?;
    let days = loader::load_days(reader)
        .with_context(|| format!("failed to load calendar from {}", input.display()))?;
    let days = if no_fill { days } else { loader::fill_gaps(days) };

    let layout = calendar::layout(&days);

    if json {
        println!("{}", serde_json::to_string_pretty(&layout)?);
        return Ok(());
    }

    if layout.is_empty() {
        println!("No training days to display");
        return Ok(());
    }

    let theme = Theme::from_preference(display.theme_pref);
    let accent = display.accent;
    let max_weeks = display.weeks;

    tui::draw_inline(CalendarHeatmap::HEIGHT, |frame| {
        let area = frame.area();
        let fit = CalendarHeatmap::weeks_for_width(area.width);
        let weeks = max_weeks.map_or(fit, |w| w.min(fit));
        let shown = layout.tail(weeks);
        frame.render_widget(CalendarHeatmap::new(&shown, theme, accent), area);
    })?;
    Ok(())
}

/// Title and bar rows for one session's zone breakdown
fn zone_rows(bar: &ZoneBar) -> u16 {
    1 + bar.height()
}

fn zone_title(index: usize, durations: &ZoneDurations, theme: Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("Session {}", index + 1),
            Style::default()
                .fg(theme.text())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", zones::format_duration(durations.total())),
            Style::default().fg(theme.muted()),
        ),
    ])
}

fn run_zones(input: &Path, json: bool, legend: bool, display: &Display) -> anyhow::Result<()> {
    let reader = loader::open_input(input)?;
    let maps = loader::load_zone_maps(reader)
        .with_context(|| format!("failed to load zones from {}", input.display()))?;

    if json {
        let segments: Vec<Option<Vec<Segment>>> = maps.iter().map(zones::render).collect();
        println!("{}", serde_json::to_string_pretty(&segments)?);
        return Ok(());
    }

    if maps.is_empty() {
        println!("No zone data to display");
        return Ok(());
    }

    // One viewport per session keeps every draw within the terminal height
    let theme = Theme::from_preference(display.theme_pref);
    for (index, durations) in maps.iter().enumerate() {
        let bar = ZoneBar::new(durations, theme).with_legend(legend);
        tui::draw_inline(zone_rows(&bar), |frame| {
            draw_session(frame, index, durations, bar, theme)
        })?;
    }
    Ok(())
}

/// Title line, then the bar (and legend) below it
fn draw_session(
    frame: &mut Frame,
    index: usize,
    durations: &ZoneDurations,
    bar: ZoneBar,
    theme: Theme,
) {
    let area = frame.area();
    let width = area.width.min(MAX_BAR_WIDTH);
    let title = Rect::new(area.x, area.y, width, area.height.min(1));
    let body = Rect::new(area.x, area.y + title.height, width, area.height - title.height);
    frame.render_widget(Paragraph::new(zone_title(index, durations, theme)), title);
    frame.render_widget(bar, body);
}
