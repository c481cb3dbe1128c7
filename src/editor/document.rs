use super::wrap::wrap_keeping_spaces;

/// Spaces inserted for a tab, both when typed and when loading text.
pub const TAB_WIDTH: usize = 4;

/// One newline-delimited line of user text, stored as its wrapped rows.
///
/// The logical text is the rows joined by single spaces; the rows are
/// regenerated from that text whenever it changes or the width changes.
/// Space runs a break would swallow stay as trailing spaces of the row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalLine {
    rows: Vec<String>,
}

impl LogicalLine {
    /// Build a line from its text. `width` of `None` disables wrapping.
    #[must_use]
    pub fn new(text: &str, width: Option<usize>) -> Self {
        Self {
            rows: wrap_rows(text, width),
        }
    }

    /// A line with a single empty row.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            rows: vec![String::new()],
        }
    }

    /// Build a line from already wrapped rows.
    pub(crate) fn from_rows(rows: Vec<String>) -> Self {
        if rows.is_empty() {
            Self::empty()
        } else {
            Self { rows }
        }
    }

    #[must_use]
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub(crate) fn rows_mut(&mut self) -> &mut Vec<String> {
        &mut self.rows
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// The logical text: rows rejoined with single spaces.
    #[must_use]
    pub fn text(&self) -> String {
        self.rows.join(" ")
    }

    /// True when the line holds no characters at all.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.rows.iter().all(String::is_empty)
    }

    /// Re-run the wrap over the whole line.
    pub fn rewrap(&mut self, width: Option<usize>) {
        self.rows = wrap_rows(&self.text(), width);
    }
}

fn wrap_rows(text: &str, width: Option<usize>) -> Vec<String> {
    match width {
        Some(width) => wrap_keeping_spaces(text, width),
        None => vec![text.to_string()],
    }
}

/// Ordered sequence of logical lines. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    lines: Vec<LogicalLine>,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            lines: vec![LogicalLine::empty()],
        }
    }
}

impl Document {
    /// Split `text` on newlines and wrap every line.
    ///
    /// A trailing `\r` on each line is dropped and tabs become spaces.
    #[must_use]
    pub fn from_text(text: &str, width: Option<usize>) -> Self {
        let tab = " ".repeat(TAB_WIDTH);
        let lines = text
            .split('\n')
            .map(|line| {
                let line = line.strip_suffix('\r').unwrap_or(line);
                LogicalLine::new(&line.replace('\t', &tab), width)
            })
            .collect();
        Self { lines }
    }

    /// Serialize back to text: lines joined by newlines.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.lines
            .iter()
            .map(LogicalLine::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[must_use]
    pub fn lines(&self) -> &[LogicalLine] {
        &self.lines
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn line(&self, idx: usize) -> Option<&LogicalLine> {
        self.lines.get(idx)
    }

    pub(crate) fn line_mut(&mut self, idx: usize) -> Option<&mut LogicalLine> {
        self.lines.get_mut(idx)
    }

    /// Total wrapped rows across all lines.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.lines.iter().map(LogicalLine::row_count).sum()
    }

    /// Remove a line, keeping at least one line in the document.
    pub(crate) fn remove_line(&mut self, idx: usize) -> Option<LogicalLine> {
        if idx >= self.lines.len() {
            return None;
        }
        let removed = self.lines.remove(idx);
        if self.lines.is_empty() {
            self.lines.push(LogicalLine::empty());
        }
        Some(removed)
    }

    /// Replace one line with two, at the same position.
    pub(crate) fn split_line(&mut self, idx: usize, head: LogicalLine, tail: LogicalLine) {
        if idx >= self.lines.len() {
            return;
        }
        self.lines[idx] = head;
        self.lines.insert(idx + 1, tail);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text_wraps_each_line() {
        let doc = Document::from_text("hello world foo\nbar", Some(10));
        assert_eq!(doc.line_count(), 2);
        assert_eq!(doc.lines()[0].rows(), ["hello", "world foo"]);
        assert_eq!(doc.lines()[1].rows(), ["bar"]);
        assert_eq!(doc.row_count(), 3);
    }

    #[test]
    fn test_empty_text_is_one_blank_line() {
        let doc = Document::from_text("", Some(10));
        assert_eq!(doc.line_count(), 1);
        assert!(doc.lines()[0].is_blank());
        assert_eq!(doc.to_text(), "");
    }

    #[test]
    fn test_round_trip_with_blank_lines() {
        let text = "first line here\n\nthird\n";
        let doc = Document::from_text(text, Some(8));
        assert_eq!(doc.to_text(), text);
    }

    #[test]
    fn test_crlf_and_tabs_normalized() {
        let doc = Document::from_text("a\tb\r\nc", Some(20));
        assert_eq!(doc.to_text(), "a    b\nc");
    }

    #[test]
    fn test_double_space_at_break_survives_load() {
        let doc = Document::from_text("aaa  bbb ccc", Some(7));
        assert_eq!(doc.lines()[0].rows(), ["aaa ", "bbb ccc"]);
        assert_eq!(doc.to_text(), "aaa  bbb ccc");
    }

    #[test]
    fn test_unwrapped_line_keeps_one_row() {
        let doc = Document::from_text("a very long line that would wrap", None);
        assert_eq!(doc.lines()[0].row_count(), 1);
    }

    #[test]
    fn test_remove_last_line_keeps_document_non_empty() {
        let mut doc = Document::from_text("only", Some(10));
        doc.remove_line(0);
        assert_eq!(doc.line_count(), 1);
        assert!(doc.lines()[0].is_blank());
    }
}
