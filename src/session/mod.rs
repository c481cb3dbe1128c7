//! One modal editing session: the event loop and its state machine.

pub mod keys;
pub mod layout;

use crate::config::EditorOptions;
use crate::editor::{EditorState, LineBreak, ModeFlags, Viewport};
use crate::error::Result;
use crate::render;
use crate::screen::{Event, Rect, Screen};
use keys::{Action, Key, action_for};
use layout::Layout;

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Editing,
    /// The help popup is shown; the next key closes it.
    HelpPopup,
    Saved,
    Cancelled,
    Aborted,
}

impl SessionState {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Saved | Self::Cancelled | Self::Aborted)
    }
}

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The final text, lines joined by `\n`.
    Saved(String),
    /// Edits were discarded.
    Cancelled,
    /// Interrupted, or the terminal could not be drawn.
    Aborted,
}

/// Run a complete session on `screen` and return how it ended.
///
/// Setup failures (such as a screen too small for the widget) abort.
pub fn run<S: Screen>(screen: S, options: EditorOptions) -> Outcome {
    match Session::new(screen, options) {
        Ok(mut session) => session.run(),
        Err(err) => {
            tracing::error!("Failed to start editing session: {err}");
            Outcome::Aborted
        }
    }
}

pub struct Session<S: Screen> {
    screen: S,
    options: EditorOptions,
    editor: EditorState,
    layout: Layout,
    state: SessionState,
    help: Option<Rect>,
}

impl<S: Screen> Session<S> {
    /// Lay out the widget on `screen` and draw it.
    pub fn new(mut screen: S, options: EditorOptions) -> Result<Self> {
        options.validate()?;
        let (rows, cols) = screen.size()?;
        let layout = Layout::compute(&options, rows, cols)?;
        let viewport = Viewport::new(layout.text.height as usize, layout.text.width as usize);
        let mode = ModeFlags::for_viewport(viewport.height, options.max_rows, options.password);
        let editor = EditorState::new(&options.text, viewport, mode);
        tracing::debug!(?layout, ?mode, "session started");

        if options.password
            && let Err(err) = screen.set_cursor_visible(false)
        {
            tracing::warn!("Cannot hide cursor: {err}");
        }

        let mut session = Self {
            screen,
            options,
            editor,
            layout,
            state: SessionState::Editing,
            help: None,
        };
        session.redraw()?;
        Ok(session)
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn editor(&self) -> &EditorState {
        &self.editor
    }

    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Process events until a terminal state is reached.
    pub fn run(&mut self) -> Outcome {
        while !self.state.is_terminal() {
            match self.screen.read_event() {
                Ok(event) => {
                    self.handle_event(event);
                }
                Err(err) => {
                    tracing::error!("Failed to read input: {err}");
                    self.state = SessionState::Aborted;
                }
            }
        }
        self.finish()
    }

    /// Result for the current (terminal) state.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        match self.state {
            SessionState::Saved => Some(Outcome::Saved(self.editor.text())),
            SessionState::Cancelled => Some(Outcome::Cancelled),
            SessionState::Aborted => Some(Outcome::Aborted),
            SessionState::Editing | SessionState::HelpPopup => None,
        }
    }

    /// Dispatch one event to completion and redraw.
    pub fn handle_event(&mut self, event: Event) -> SessionState {
        if self.state.is_terminal() {
            return self.state;
        }

        let result = match (self.state, event) {
            (_, Event::Resize) => self.resize(),
            (SessionState::HelpPopup, Event::Key(_)) => self.close_help(),
            (_, Event::Key(key)) => self.handle_key(key),
        };

        if let Err(err) = result {
            tracing::error!("Aborting session: {err}");
            self.state = SessionState::Aborted;
        }
        self.state
    }

    fn handle_key(&mut self, key: Key) -> Result<()> {
        let action = action_for(key);
        match action {
            Action::Left => self.editor.left(),
            Action::Right => self.editor.right(),
            Action::Up => self.editor.up(),
            Action::Down => self.editor.down(),
            Action::Home => self.editor.home(),
            Action::End => self.editor.end(),
            Action::PageUp => self.editor.page_up(),
            Action::PageDown => self.editor.page_down(),
            Action::Backspace => self.editor.backspace(),
            Action::Delete => self.editor.delete_char(),
            Action::Tab => self.editor.insert_tab(),
            Action::DeleteToEnd => self.editor.delete_to_end_of_line(),
            Action::DeleteToStart => self.editor.delete_to_start_of_line(),
            Action::Insert(ch) => self.editor.insert_char(ch),
            Action::Enter => {
                if self.editor.insert_line_or_quit() == LineBreak::Commit {
                    return self.transition(SessionState::Saved);
                }
            }
            Action::Help => return self.open_help(),
            Action::Save => return self.transition(SessionState::Saved),
            Action::Cancel => return self.transition(SessionState::Cancelled),
            Action::Abort => return self.transition(SessionState::Aborted),
            Action::Ignore => {
                tracing::trace!(?key, "unbound key");
                return Ok(());
            }
        }
        render::draw_text(&mut self.screen, &self.layout, &self.editor)?;
        Ok(())
    }

    fn transition(&mut self, state: SessionState) -> Result<()> {
        tracing::debug!(from = ?self.state, to = ?state, "session state change");
        self.state = state;
        Ok(())
    }

    /// Show the help popup. Failing to draw it leaves the session editing.
    fn open_help(&mut self) -> Result<()> {
        if let Err(err) = self.screen.set_cursor_visible(false) {
            tracing::warn!("Cannot hide cursor: {err}");
        }
        let drawn = self
            .screen
            .size()
            .and_then(|(rows, cols)| render::draw_help(&mut self.screen, rows, cols));
        match drawn {
            Ok(rect) => {
                self.help = Some(rect);
                self.transition(SessionState::HelpPopup)
            }
            Err(err) => {
                tracing::warn!("Cannot show help: {err}");
                self.restore_cursor();
                self.redraw()
            }
        }
    }

    fn close_help(&mut self) -> Result<()> {
        if let Some(rect) = self.help.take() {
            self.screen.close_popup(rect)?;
        }
        self.restore_cursor();
        self.transition(SessionState::Editing)?;
        self.redraw()
    }

    fn restore_cursor(&mut self) {
        if !self.options.password
            && let Err(err) = self.screen.set_cursor_visible(true)
        {
            tracing::warn!("Cannot show cursor: {err}");
        }
    }

    /// Recompute the layout for the new screen size and rewrap everything.
    fn resize(&mut self) -> Result<()> {
        let (rows, cols) = self.screen.size()?;
        self.layout = Layout::compute(&self.options, rows, cols)?;
        let viewport = Viewport::new(
            self.layout.text.height as usize,
            self.layout.text.width as usize,
        );
        self.editor.resize(viewport);
        if self.state == SessionState::HelpPopup {
            self.help = None;
            self.restore_cursor();
        }
        self.transition(SessionState::Editing)?;
        self.redraw()
    }

    fn redraw(&mut self) -> Result<()> {
        render::draw_chrome(&mut self.screen, &self.layout, &self.options.title)?;
        render::draw_text(&mut self.screen, &self.layout, &self.editor)?;
        Ok(())
    }

    fn finish(&mut self) -> Outcome {
        let _ = self.screen.flush();
        let outcome = self.outcome().unwrap_or(Outcome::Aborted);
        tracing::debug!(state = ?self.state, "session finished");
        outcome
    }
}
