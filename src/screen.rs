//! Terminal access for an editing session.
//!
//! The session only talks to a [`Screen`]; [`TerminalScreen`] is the crossterm
//! implementation that owns the real terminal for the lifetime of the value.

use crate::session::keys::Key;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, KeyEventKind},
    execute, queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Stdout, Write};

/// Input delivered to the session loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Key(Key),
    /// The terminal changed size; query [`Screen::size`] for the new one.
    Resize,
}

/// A rectangle of terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub row: u16,
    pub col: u16,
    pub height: u16,
    pub width: u16,
}

impl Rect {
    #[must_use]
    pub fn bottom(&self) -> u16 {
        self.row + self.height.saturating_sub(1)
    }

    #[must_use]
    pub fn right(&self) -> u16 {
        self.col + self.width.saturating_sub(1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextStyle {
    #[default]
    Plain,
    Bold,
    /// Reverse video.
    Standout,
}

/// Drawing and input primitives the session needs from a terminal.
pub trait Screen {
    /// Block until the next key or resize.
    fn read_event(&mut self) -> io::Result<Event>;

    /// Screen size as (rows, cols).
    fn size(&self) -> io::Result<(u16, u16)>;

    fn move_cursor(&mut self, row: u16, col: u16) -> io::Result<()>;

    /// Blank `width` cells starting at (row, col).
    fn clear_line(&mut self, row: u16, col: u16, width: u16) -> io::Result<()>;

    fn write_at(&mut self, row: u16, col: u16, text: &str, style: TextStyle) -> io::Result<()>;

    /// Clear the whole screen.
    fn clear_all(&mut self) -> io::Result<()>;

    /// Draw a single-line border along the edges of `rect`.
    fn draw_frame(&mut self, rect: Rect) -> io::Result<()>;

    /// Clear `rect` and frame it for modal content.
    fn open_popup(&mut self, rect: Rect) -> io::Result<()>;

    /// Blank the popup area again.
    fn close_popup(&mut self, rect: Rect) -> io::Result<()>;

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()>;

    fn flush(&mut self) -> io::Result<()>;
}

impl<S: Screen + ?Sized> Screen for &mut S {
    fn read_event(&mut self) -> io::Result<Event> {
        (**self).read_event()
    }

    fn size(&self) -> io::Result<(u16, u16)> {
        (**self).size()
    }

    fn move_cursor(&mut self, row: u16, col: u16) -> io::Result<()> {
        (**self).move_cursor(row, col)
    }

    fn clear_line(&mut self, row: u16, col: u16, width: u16) -> io::Result<()> {
        (**self).clear_line(row, col, width)
    }

    fn write_at(&mut self, row: u16, col: u16, text: &str, style: TextStyle) -> io::Result<()> {
        (**self).write_at(row, col, text, style)
    }

    fn clear_all(&mut self) -> io::Result<()> {
        (**self).clear_all()
    }

    fn draw_frame(&mut self, rect: Rect) -> io::Result<()> {
        (**self).draw_frame(rect)
    }

    fn open_popup(&mut self, rect: Rect) -> io::Result<()> {
        (**self).open_popup(rect)
    }

    fn close_popup(&mut self, rect: Rect) -> io::Result<()> {
        (**self).close_popup(rect)
    }

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()> {
        (**self).set_cursor_visible(visible)
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }
}

/// Crossterm-backed screen: raw mode on the alternate screen.
///
/// The terminal is restored when the value is dropped.
pub struct TerminalScreen {
    out: Stdout,
}

impl TerminalScreen {
    pub fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen, Clear(ClearType::All)) {
            let _ = terminal::disable_raw_mode();
            return Err(err);
        }
        tracing::debug!("terminal initialized");
        Ok(Self { out })
    }

    fn blank(&mut self, rect: Rect) -> io::Result<()> {
        let spaces = " ".repeat(rect.width as usize);
        for row in rect.row..rect.row + rect.height {
            queue!(self.out, MoveTo(rect.col, row), Print(&spaces))?;
        }
        Ok(())
    }
}

impl Drop for TerminalScreen {
    fn drop(&mut self) {
        let _ = execute!(self.out, Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

impl Screen for TerminalScreen {
    fn read_event(&mut self) -> io::Result<Event> {
        loop {
            match event::read()? {
                event::Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(key) = Key::from_key_event(key) {
                        return Ok(Event::Key(key));
                    }
                }
                event::Event::Resize(_, _) => return Ok(Event::Resize),
                _ => {}
            }
        }
    }

    fn size(&self) -> io::Result<(u16, u16)> {
        let (cols, rows) = terminal::size()?;
        Ok((rows, cols))
    }

    fn move_cursor(&mut self, row: u16, col: u16) -> io::Result<()> {
        queue!(self.out, MoveTo(col, row))
    }

    fn clear_line(&mut self, row: u16, col: u16, width: u16) -> io::Result<()> {
        queue!(
            self.out,
            MoveTo(col, row),
            Print(" ".repeat(width as usize))
        )
    }

    fn write_at(&mut self, row: u16, col: u16, text: &str, style: TextStyle) -> io::Result<()> {
        queue!(self.out, MoveTo(col, row))?;
        match style {
            TextStyle::Plain => queue!(self.out, Print(text)),
            TextStyle::Bold => queue!(
                self.out,
                SetAttribute(Attribute::Bold),
                Print(text),
                SetAttribute(Attribute::Reset)
            ),
            TextStyle::Standout => queue!(
                self.out,
                SetAttribute(Attribute::Reverse),
                Print(text),
                SetAttribute(Attribute::Reset)
            ),
        }
    }

    fn clear_all(&mut self) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All))
    }

    fn draw_frame(&mut self, rect: Rect) -> io::Result<()> {
        if rect.width < 2 || rect.height < 2 {
            return Ok(());
        }
        let inner = "─".repeat(rect.width as usize - 2);
        queue!(
            self.out,
            MoveTo(rect.col, rect.row),
            Print(format!("┌{inner}┐")),
            MoveTo(rect.col, rect.bottom()),
            Print(format!("└{inner}┘"))
        )?;
        for row in rect.row + 1..rect.bottom() {
            queue!(
                self.out,
                MoveTo(rect.col, row),
                Print("│"),
                MoveTo(rect.right(), row),
                Print("│")
            )?;
        }
        Ok(())
    }

    fn open_popup(&mut self, rect: Rect) -> io::Result<()> {
        self.blank(rect)?;
        self.draw_frame(rect)
    }

    fn close_popup(&mut self, rect: Rect) -> io::Result<()> {
        self.blank(rect)
    }

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()> {
        if visible {
            queue!(self.out, Show)
        } else {
            queue!(self.out, Hide)
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
