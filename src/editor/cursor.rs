use super::state::EditorState;

/// Screen-relative cursor plus the scroll offsets of the viewport.
///
/// Buffer-absolute coordinates are derived: `y_offset + row`, `x_offset + col`.
/// Columns count characters, not display cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub(crate) row: usize,
    pub(crate) col: usize,
    pub(crate) y_offset: usize,
    pub(crate) x_offset: usize,
}

impl Cursor {
    /// Position inside the viewport as (row, col).
    #[must_use]
    pub fn screen(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Scroll offsets as (vertical, horizontal).
    #[must_use]
    pub fn offsets(&self) -> (usize, usize) {
        (self.y_offset, self.x_offset)
    }
}

impl EditorState {
    /// Absolute index of the row under the cursor.
    #[must_use]
    pub fn abs_row(&self) -> usize {
        self.cursor.y_offset + self.cursor.row
    }

    /// Absolute character column of the cursor within its row.
    #[must_use]
    pub fn abs_col(&self) -> usize {
        self.cursor.x_offset + self.cursor.col
    }

    /// Largest vertical offset that still fills the viewport.
    fn max_y_offset(&self) -> usize {
        self.index.len().saturating_sub(self.viewport.height)
    }

    pub fn left(&mut self) {
        if self.cursor.col > 0 {
            self.cursor.col -= 1;
        } else if self.cursor.x_offset > 0 {
            self.cursor.x_offset -= 1;
        } else if self.abs_row() > 0 {
            self.up();
            self.end();
            return;
        }
        self.clamp_cursor();
    }

    pub fn right(&mut self) {
        let len = self.index.row_len(self.abs_row());
        if self.abs_col() < len {
            if self.mode.horizontal_scroll && self.cursor.col + 1 >= self.viewport.width {
                self.cursor.x_offset += 1;
            } else {
                self.cursor.col += 1;
            }
        } else if self.abs_row() + 1 < self.index.len() {
            self.home();
            self.down();
            return;
        }
        self.clamp_cursor();
    }

    /// Move up one row, scrolling when the cursor is on the top edge.
    pub fn up(&mut self) {
        if self.cursor.row > 0 {
            self.cursor.row -= 1;
        } else {
            self.cursor.y_offset = self.cursor.y_offset.saturating_sub(1);
        }
        self.clamp_cursor();
    }

    /// Move down one row, scrolling when the cursor is on the bottom edge.
    pub fn down(&mut self) {
        if self.abs_row() + 1 >= self.index.len() {
            self.clamp_cursor();
            return;
        }
        if self.cursor.row + 1 < self.viewport.height {
            self.cursor.row += 1;
        } else {
            self.cursor.y_offset = (self.cursor.y_offset + 1).min(self.max_y_offset());
        }
        self.clamp_cursor();
    }

    pub fn home(&mut self) {
        self.set_abs_col(0);
    }

    pub fn end(&mut self) {
        let len = self.index.row_len(self.abs_row());
        self.set_abs_col(len);
    }

    pub fn page_up(&mut self) {
        self.cursor.y_offset = self.cursor.y_offset.saturating_sub(self.viewport.height);
        self.clamp_cursor();
    }

    pub fn page_down(&mut self) {
        self.cursor.y_offset =
            (self.cursor.y_offset + self.viewport.height).min(self.max_y_offset());
        self.clamp_cursor();
    }

    /// Put the cursor on an absolute row and column, scrolling the
    /// minimum needed to keep it visible.
    pub(crate) fn move_to(&mut self, abs_row: usize, abs_col: usize) {
        let abs_row = abs_row.min(self.index.len() - 1);
        let height = self.viewport.height;

        let mut y_offset = self.cursor.y_offset.min(self.max_y_offset());
        if abs_row < y_offset {
            y_offset = abs_row;
        } else if abs_row >= y_offset + height {
            y_offset = abs_row + 1 - height;
        }
        self.cursor.y_offset = y_offset;
        self.cursor.row = abs_row - y_offset;

        let len = self.index.row_len(abs_row);
        self.set_abs_col(abs_col.min(len));
    }

    /// Set the absolute column; in horizontal-scroll mode the offset follows.
    fn set_abs_col(&mut self, abs_col: usize) {
        if !self.mode.horizontal_scroll {
            self.cursor.x_offset = 0;
            self.cursor.col = abs_col;
            return;
        }

        let last_visible = self.viewport.width.saturating_sub(1);
        let mut x_offset = self.cursor.x_offset;
        if abs_col < x_offset {
            x_offset = abs_col;
        } else if abs_col - x_offset > last_visible {
            x_offset = abs_col - last_visible;
        }
        self.cursor.x_offset = x_offset;
        self.cursor.col = abs_col - x_offset;
    }

    /// Bring the cursor back inside the buffer: valid row, column no
    /// further than the end of that row.
    pub(crate) fn clamp_cursor(&mut self) {
        self.cursor.y_offset = self.cursor.y_offset.min(self.max_y_offset());
        let last_row = self.index.len() - 1 - self.cursor.y_offset;
        self.cursor.row = self
            .cursor
            .row
            .min(last_row)
            .min(self.viewport.height - 1);

        let len = self.index.row_len(self.abs_row());
        if self.abs_col() > len {
            self.set_abs_col(len);
        }
    }
}
