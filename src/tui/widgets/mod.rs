//! TUI widgets

pub mod calendar;
pub mod zone_bar;
