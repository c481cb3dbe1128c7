use super::document::{LogicalLine, TAB_WIDTH};
use super::index::RowEntry;
use super::state::EditorState;
use super::word_jump::{EditPoint, WrapJump, word_wrap_jump};

/// What Enter did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineBreak {
    /// The line was split at the cursor.
    Split,
    /// The row cap is reached; nothing changed.
    Capped,
    /// Single-row entry: Enter commits the text.
    Commit,
}

impl EditorState {
    /// Insert a printable character at the cursor. Control characters are ignored.
    pub fn insert_char(&mut self, ch: char) {
        if ch.is_control() {
            tracing::trace!(?ch, "ignoring control character");
            return;
        }

        let entry = self.current_row().clone();
        let col = self.abs_col().min(entry.len());
        let edited = insert_at(&entry.text, col, ch);

        if self.wrap_width().is_none() {
            self.set_row(&entry, edited);
            self.rebuild_index();
            self.right();
            return;
        }

        self.set_row(&entry, edited);
        let point = self.edit_point(&entry, col + 1);
        self.rewrap_line(entry.line);
        self.rebuild_index();

        self.place_cursor(entry.line, entry.row, col + 1);
        self.reanchor(&point, entry.line);
    }

    /// A tab is four spaces.
    pub fn insert_tab(&mut self) {
        for _ in 0..TAB_WIDTH {
            self.insert_char(' ');
        }
    }

    /// Split the current line at the cursor, or report why not.
    ///
    /// Text left of the cursor stays; the rest of the row plus all following
    /// rows of the same line become a new line below, with the cursor at its start.
    pub fn insert_line_or_quit(&mut self) -> LineBreak {
        if self.mode.single_row() {
            return LineBreak::Commit;
        }
        if self.mode.max_rows > 0 && self.index.len() >= self.mode.max_rows {
            tracing::debug!(max_rows = self.mode.max_rows, "row cap reached");
            return LineBreak::Capped;
        }

        let entry = self.current_row().clone();
        let Some(line) = self.document.line(entry.line) else {
            return LineBreak::Capped;
        };
        let rows = line.rows();
        let col = self.abs_col().min(entry.len());
        let (head_text, tail_text) = split_at_char(&entry.text, col);

        // An empty head row keeps the soft break before it as a trailing space.
        let mut head_rows = rows[..entry.row].to_vec();
        head_rows.push(head_text);

        let mut tail_rows = vec![tail_text];
        tail_rows.extend_from_slice(&rows[entry.row + 1..]);

        self.document.split_line(
            entry.line,
            LogicalLine::from_rows(head_rows),
            LogicalLine::from_rows(tail_rows),
        );
        self.rewrap_line(entry.line);
        self.rewrap_line(entry.line + 1);
        self.rebuild_index();

        let abs_row = self.index.position_of(entry.line + 1, 0).unwrap_or(0);
        self.move_to(abs_row, 0);
        LineBreak::Split
    }

    /// Delete the character left of the cursor, joining rows and lines at
    /// the start of a row.
    pub fn backspace(&mut self) {
        let abs_row = self.abs_row();
        let entry = self.current_row().clone();
        let col = self.abs_col().min(entry.len());

        if col > 0 {
            let mut chars: Vec<char> = entry.text.chars().collect();
            chars.remove(col - 1);
            let edited: String = chars.into_iter().collect();

            if self.wrap_width().is_none() {
                self.set_row(&entry, edited);
                self.rebuild_index();
                self.left();
                return;
            }

            self.set_row(&entry, edited);
            let point = self.edit_point(&entry, col - 1);
            self.rewrap_line(entry.line);
            self.rebuild_index();
            self.place_cursor(entry.line, entry.row, col - 1);
            self.reanchor(&point, entry.line);
        } else if abs_row > 0 {
            self.join_with_previous_row(abs_row);
        } else if self.document.line_count() > 1
            && self
                .document
                .line(entry.line)
                .is_some_and(LogicalLine::is_blank)
        {
            self.document.remove_line(entry.line);
            self.rebuild_index();
            self.move_to(0, 0);
        }
    }

    /// Delete the character under the cursor. The cursor does not move.
    pub fn delete_char(&mut self) {
        let entry = self.current_row().clone();
        let col = self.abs_col();
        if col >= entry.len() {
            return;
        }

        let mut chars: Vec<char> = entry.text.chars().collect();
        chars.remove(col);
        self.set_row(&entry, chars.into_iter().collect());
        let point = self.edit_point(&entry, col);
        self.rewrap_line(entry.line);
        self.rebuild_index();
        self.place_cursor(entry.line, entry.row, col);
        self.reanchor(&point, entry.line);
    }

    /// Truncate the current row at the cursor (Ctrl+K). No rewrap.
    pub fn delete_to_end_of_line(&mut self) {
        let entry = self.current_row().clone();
        let col = self.abs_col().min(entry.len());
        let (head, _) = split_at_char(&entry.text, col);
        self.set_row(&entry, head);
        self.rebuild_index();
        self.clamp_cursor();
    }

    /// Drop everything left of the cursor on the current row (Ctrl+U). No rewrap.
    pub fn delete_to_start_of_line(&mut self) {
        let entry = self.current_row().clone();
        let col = self.abs_col().min(entry.len());
        let (_, tail) = split_at_char(&entry.text, col);
        self.set_row(&entry, tail);
        self.rebuild_index();
        self.home();
        self.clamp_cursor();
    }

    /// Backspace at column 0 of a row below the first.
    fn join_with_previous_row(&mut self, abs_row: usize) {
        let current = self.index.entry(abs_row).clone();
        let previous = self.index.entry(abs_row - 1).clone();
        let join_col = previous.len();

        if current.line == previous.line {
            // Soft break: the separator the wrap consumed is what gets deleted.
            if let Some(line) = self.document.line_mut(current.line) {
                let rows = line.rows_mut();
                let tail = rows.remove(current.row);
                rows[previous.row].push_str(&tail);
            }
        } else if self
            .document
            .line(current.line)
            .is_some_and(LogicalLine::is_blank)
        {
            self.document.remove_line(current.line);
            self.rebuild_index();
            self.move_to(abs_row - 1, join_col);
            return;
        } else if let Some(removed) = self.document.remove_line(current.line) {
            if let Some(line) = self.document.line_mut(previous.line) {
                let mut moved = removed.rows().to_vec();
                let first = moved.remove(0);
                let rows = line.rows_mut();
                if let Some(last) = rows.last_mut() {
                    last.push_str(&first);
                }
                rows.extend(moved);
            }
        }

        let point = self.edit_point(&previous, join_col);
        self.rewrap_line(previous.line);
        self.rebuild_index();
        self.place_cursor(previous.line, previous.row, join_col);
        self.reanchor(&point, previous.line);
    }

    fn set_row(&mut self, entry: &RowEntry, text: String) {
        if let Some(row) = self
            .document
            .line_mut(entry.line)
            .and_then(|line| line.rows_mut().get_mut(entry.row))
        {
            *row = text;
        }
    }

    /// Edit point at `col` of the document row `entry` addresses.
    fn edit_point(&self, entry: &RowEntry, col: usize) -> EditPoint {
        self.document
            .line(entry.line)
            .map(|line| EditPoint::at(line.rows(), entry.row, col))
            .unwrap_or_default()
    }

    /// Rewrap a whole line after one of its rows changed. Spaces typed at a
    /// break stay as trailing spaces of the row before it.
    fn rewrap_line(&mut self, line_idx: usize) {
        let width = self.wrap_width();
        if width.is_none() {
            return;
        }
        if let Some(line) = self.document.line_mut(line_idx) {
            line.rewrap(width);
            tracing::trace!(line = line_idx, rows = line.row_count(), "rewrapped line");
        }
    }

    /// Cursor on row `row` of `line` (or that line's last row), column clamped.
    fn place_cursor(&mut self, line: usize, row: usize, col: usize) {
        let abs_row = self
            .index
            .position_of(line, row)
            .or_else(|| self.index.last_row_of(line))
            .unwrap_or(0);
        self.move_to(abs_row, col);
    }

    fn reanchor(&mut self, point: &EditPoint, line: usize) {
        let tentative = (self.abs_row(), self.abs_col());
        if let WrapJump::To { abs_row, col } = word_wrap_jump(point, &self.index, line, tentative)
        {
            tracing::trace!(?point, abs_row, col, "word wrap jump");
            self.move_to(abs_row, col);
        }
    }
}

fn insert_at(text: &str, col: usize, ch: char) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    chars.insert(col.min(chars.len()), ch);
    chars.into_iter().collect()
}

fn split_at_char(text: &str, col: usize) -> (String, String) {
    let byte = text
        .char_indices()
        .nth(col)
        .map_or(text.len(), |(idx, _)| idx);
    (text[..byte].to_string(), text[byte..].to_string())
}
