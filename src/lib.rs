//! rolltrack: training calendar heatmap and heart-rate zone bars
//!
//! The core (`services::calendar`, `services::zones`) is pure layout math
//! over already-aggregated records. `tui` draws the results with ratatui and
//! `cli` wires both to JSON input.

pub mod cli;
pub mod logging;
pub mod services;
pub mod tui;
pub mod types;
