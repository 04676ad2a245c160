//! Services for calendar layout, zone bars, and input loading

pub mod calendar;
pub mod config;
pub mod loader;
pub mod zones;

pub use calendar::{color_for, layout, LayoutMemo};
pub use config::{Config, ThemePreference};
