use super::document::Document;

/// One wrapped row addressed by its position in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowEntry {
    /// Index of the logical line owning this row.
    pub line: usize,
    /// Index of the row within its logical line.
    pub row: usize,
    pub text: String,
}

impl RowEntry {
    /// Length of the row in characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Flattened, document-ordered list of every wrapped row.
///
/// Derived state: rebuild after every document or width change before any
/// cursor math reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferIndex {
    rows: Vec<RowEntry>,
}

impl BufferIndex {
    #[must_use]
    pub fn build(document: &Document) -> Self {
        let mut rows = Vec::with_capacity(document.row_count());
        for (line_idx, line) in document.lines().iter().enumerate() {
            for (row_idx, text) in line.rows().iter().enumerate() {
                rows.push(RowEntry {
                    line: line_idx,
                    row: row_idx,
                    text: text.clone(),
                });
            }
        }
        if rows.is_empty() {
            rows.push(RowEntry {
                line: 0,
                row: 0,
                text: String::new(),
            });
        }
        Self { rows }
    }

    /// Total wrapped rows; always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn get(&self, abs_row: usize) -> Option<&RowEntry> {
        self.rows.get(abs_row)
    }

    /// Entry for `abs_row`, clamped to the last row.
    #[must_use]
    pub fn entry(&self, abs_row: usize) -> &RowEntry {
        &self.rows[abs_row.min(self.rows.len() - 1)]
    }

    /// Character length of the row at `abs_row` (0 past the end).
    #[must_use]
    pub fn row_len(&self, abs_row: usize) -> usize {
        self.rows.get(abs_row).map_or(0, RowEntry::len)
    }

    /// Absolute index of row `row` of logical line `line`.
    #[must_use]
    pub fn position_of(&self, line: usize, row: usize) -> Option<usize> {
        self.rows
            .iter()
            .position(|entry| entry.line == line && entry.row == row)
    }

    /// Absolute index of the last row of logical line `line`.
    #[must_use]
    pub fn last_row_of(&self, line: usize) -> Option<usize> {
        self.rows.iter().rposition(|entry| entry.line == line)
    }

    /// Rows in `start..start + count`, clipped to the buffer.
    #[must_use]
    pub fn window(&self, start: usize, count: usize) -> &[RowEntry] {
        let start = start.min(self.rows.len());
        let end = start.saturating_add(count).min(self.rows.len());
        &self.rows[start..end]
    }

    pub fn iter(&self) -> impl Iterator<Item = &RowEntry> {
        self.rows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flattens_lines_in_order() {
        let doc = Document::from_text("hello world foo\nbar", Some(10));
        let index = BufferIndex::build(&doc);
        assert_eq!(index.len(), 3);

        let entry = index.get(1).unwrap();
        assert_eq!((entry.line, entry.row, entry.text.as_str()), (0, 1, "world foo"));

        let entry = index.get(2).unwrap();
        assert_eq!((entry.line, entry.row, entry.text.as_str()), (1, 0, "bar"));
    }

    #[test]
    fn test_lookups() {
        let doc = Document::from_text("hello world foo\nbar", Some(10));
        let index = BufferIndex::build(&doc);
        assert_eq!(index.position_of(1, 0), Some(2));
        assert_eq!(index.position_of(1, 1), None);
        assert_eq!(index.last_row_of(0), Some(1));
        assert_eq!(index.row_len(1), 9);
        assert_eq!(index.row_len(9), 0);
        assert_eq!(index.entry(42).text, "bar");
    }

    #[test]
    fn test_window_is_clipped() {
        let doc = Document::from_text("a\nb\nc", Some(10));
        let index = BufferIndex::build(&doc);
        assert_eq!(index.window(1, 10).len(), 2);
        assert!(index.window(5, 2).is_empty());
    }
}
