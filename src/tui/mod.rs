//! Terminal rendering: theme and widgets, drawn into an inline viewport

pub mod theme;
pub mod widgets;

use ratatui::{Frame, TerminalOptions, Viewport};

use crate::types::{Result, RolltrackError};

/// Draw once into an inline viewport of `height` rows below the cursor,
/// then hand the terminal back so the output stays in scrollback.
pub fn draw_inline<F>(height: u16, render: F) -> Result<()>
where
    F: FnOnce(&mut Frame),
{
    let mut terminal = ratatui::try_init_with_options(TerminalOptions {
        viewport: Viewport::Inline(height),
    })
    .map_err(|e| RolltrackError::Render(e.to_string()))?;

    let drawn = terminal.draw(render).map(|_| ());
    ratatui::restore();
    drawn.map_err(|e| RolltrackError::Render(e.to_string()))?;

    println!();
    Ok(())
}
