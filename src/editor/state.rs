use super::cursor::Cursor;
use super::document::Document;
use super::index::{BufferIndex, RowEntry};

/// Size of the text area in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub height: usize,
    pub width: usize,
}

impl Viewport {
    #[must_use]
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            height: height.max(1),
            width: width.max(1),
        }
    }

    /// Wrap width: one column is kept free for the cursor past the last word.
    #[must_use]
    pub fn wrap_width(&self) -> usize {
        self.width.saturating_sub(1).max(1)
    }
}

/// Behaviour switches fixed for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModeFlags {
    /// Single-line entry that scrolls sideways instead of wrapping.
    pub horizontal_scroll: bool,
    /// Maximum number of wrapped rows; 0 is unlimited.
    pub max_rows: usize,
    /// Characters are kept in the buffer but never echoed.
    pub masked: bool,
}

impl ModeFlags {
    /// Horizontal scrolling only applies to a one-row viewport capped to one row.
    #[must_use]
    pub fn for_viewport(viewport_rows: usize, max_rows: usize, masked: bool) -> Self {
        Self {
            horizontal_scroll: viewport_rows < 2 && max_rows == 1,
            max_rows,
            masked,
        }
    }

    #[must_use]
    pub fn single_row(&self) -> bool {
        self.max_rows == 1
    }
}

/// Everything one editing session mutates: document, its row index,
/// the cursor and the viewport it is shown in.
#[derive(Debug, Clone)]
pub struct EditorState {
    pub(crate) document: Document,
    pub(crate) index: BufferIndex,
    pub(crate) cursor: Cursor,
    pub(crate) viewport: Viewport,
    pub(crate) mode: ModeFlags,
}

impl EditorState {
    /// Load `text` into a fresh state. A row cap smaller than the initial
    /// text is raised so nothing is lost.
    #[must_use]
    pub fn new(text: &str, viewport: Viewport, mut mode: ModeFlags) -> Self {
        let width = wrap_width_for(viewport, mode);
        let document = Document::from_text(text, width);
        let index = BufferIndex::build(&document);
        if mode.max_rows > 0 && mode.max_rows < index.len() {
            tracing::debug!(
                requested = mode.max_rows,
                rows = index.len(),
                "raising row cap to fit initial text"
            );
            mode.max_rows = index.len();
        }
        Self {
            document,
            index,
            cursor: Cursor::default(),
            viewport,
            mode,
        }
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    #[must_use]
    pub fn index(&self) -> &BufferIndex {
        &self.index
    }

    #[must_use]
    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn mode(&self) -> ModeFlags {
        self.mode
    }

    /// Current text: lines joined by newlines, rows by single spaces.
    #[must_use]
    pub fn text(&self) -> String {
        self.document.to_text()
    }

    /// Width passed to the wrap engine, `None` when wrapping is off.
    #[must_use]
    pub fn wrap_width(&self) -> Option<usize> {
        wrap_width_for(self.viewport, self.mode)
    }

    /// The row under the cursor.
    #[must_use]
    pub fn current_row(&self) -> &RowEntry {
        self.index.entry(self.abs_row())
    }

    /// Recompute the row index from the document.
    pub(crate) fn rebuild_index(&mut self) {
        self.index = BufferIndex::build(&self.document);
    }

    /// Adopt a new viewport: rewrap everything and return the cursor to the origin.
    pub fn resize(&mut self, viewport: Viewport) {
        let text = self.document.to_text();
        self.viewport = viewport;
        self.document = Document::from_text(&text, self.wrap_width());
        self.rebuild_index();
        self.cursor = Cursor::default();
        tracing::debug!(
            height = viewport.height,
            width = viewport.width,
            rows = self.index.len(),
            "viewport resized"
        );
    }
}

fn wrap_width_for(viewport: Viewport, mode: ModeFlags) -> Option<usize> {
    if mode.horizontal_scroll {
        None
    } else {
        Some(viewport.wrap_width())
    }
}
