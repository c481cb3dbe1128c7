//! Widget geometry: where the frame, title and text area go on screen.

use crate::config::EditorOptions;
use crate::error::{Error, Result};
use crate::screen::Rect;

/// Placement of every part of the widget, computed from the options and
/// the current screen size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Border around the whole widget, when boxed.
    pub frame: Option<Rect>,
    /// Row and column where the title starts, when there is a title.
    pub title: Option<(u16, u16)>,
    pub text: Rect,
}

impl Layout {
    /// Clamp the requested size to the screen minus the chrome and pull the
    /// widget back so all of it is visible.
    pub fn compute(options: &EditorOptions, screen_rows: u16, screen_cols: u16) -> Result<Self> {
        let border = u16::from(options.boxed);
        let title_rows = u16::from(!options.title.is_empty());
        let chrome_rows = 2 * border + title_rows;
        let chrome_cols = 2 * border;

        let (want_rows, want_cols) = options.size;
        let rows = want_rows.min(screen_rows.saturating_sub(chrome_rows));
        let cols = want_cols.min(screen_cols.saturating_sub(chrome_cols));
        if rows < 1 || cols < 2 {
            return Err(Error::ViewportTooSmall { rows, cols });
        }

        let outer_rows = rows + chrome_rows;
        let outer_cols = cols + chrome_cols;
        let top = options.location.0.min(screen_rows - outer_rows);
        let left = options.location.1.min(screen_cols - outer_cols);

        let frame = (border == 1).then_some(Rect {
            row: top,
            col: left,
            height: outer_rows,
            width: outer_cols,
        });
        let title = (title_rows == 1).then_some((top + border, left + border));
        let text = Rect {
            row: top + border + title_rows,
            col: left + border,
            height: rows,
            width: cols,
        };

        Ok(Self { frame, title, text })
    }

    /// Columns available for the title line.
    #[must_use]
    pub fn title_width(&self) -> u16 {
        self.text.width
    }
}
