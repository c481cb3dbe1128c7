//! Drawing the widget through a [`Screen`].

use crate::editor::EditorState;
use crate::screen::{Rect, Screen, TextStyle};
use crate::session::keys::HELP_LINES;
use crate::session::layout::Layout;
use std::io;
use unicode_width::UnicodeWidthChar;

/// Hint shown after the title.
pub const QUICK_HELP: &str = "(F2 or Enter: Save, F5: Cancel)";

const TITLE_GAP: u16 = 3;

/// Clear the screen and draw the frame and title line.
pub fn draw_chrome<S: Screen>(screen: &mut S, layout: &Layout, title: &str) -> io::Result<()> {
    screen.clear_all()?;
    if let Some(frame) = layout.frame {
        screen.draw_frame(frame)?;
    }
    if let Some((row, col)) = layout.title {
        let width = layout.title_width();
        let title = fit(title, width as usize);
        let used = cells(&title);
        screen.write_at(row, col, &title, TextStyle::Bold)?;

        let hint_col = used + TITLE_GAP;
        if hint_col < width {
            let hint = fit(QUICK_HELP, (width - hint_col) as usize);
            screen.write_at(row, col + hint_col, &hint, TextStyle::Standout)?;
        }
    }
    Ok(())
}

/// Redraw the visible rows and park the terminal cursor on the edit point.
#[allow(clippy::cast_possible_truncation)]
pub fn draw_text<S: Screen>(screen: &mut S, layout: &Layout, editor: &EditorState) -> io::Result<()> {
    let area = layout.text;
    let (y_offset, x_offset) = editor.cursor().offsets();
    let masked = editor.mode().masked;

    for (i, entry) in editor
        .index()
        .window(y_offset, area.height as usize)
        .iter()
        .enumerate()
    {
        let row = area.row + i as u16;
        screen.clear_line(row, area.col, area.width)?;
        if masked {
            continue;
        }
        let visible = visible_part(&entry.text, x_offset, area.width as usize);
        if !visible.is_empty() {
            screen.write_at(row, area.col, &visible, TextStyle::Plain)?;
        }
    }
    let drawn = editor.index().window(y_offset, area.height as usize).len();
    for i in drawn..area.height as usize {
        screen.clear_line(area.row + i as u16, area.col, area.width)?;
    }

    let (row, col) = editor.cursor().screen();
    let before: String = editor
        .current_row()
        .text
        .chars()
        .skip(x_offset)
        .take(col)
        .collect();
    let x = cells(&before).min(area.width.saturating_sub(1));
    screen.move_cursor(area.row + row as u16, area.col + x)?;
    screen.flush()
}

/// Show the key binding popup in the top-left corner of the screen.
#[allow(clippy::cast_possible_truncation)]
pub fn draw_help<S: Screen>(screen: &mut S, screen_rows: u16, screen_cols: u16) -> io::Result<Rect> {
    let widest = HELP_LINES
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);
    let rect = Rect {
        row: 0,
        col: 0,
        height: screen_rows.min(HELP_LINES.len() as u16 + 2),
        width: screen_cols.min(widest as u16 + 4),
    };
    if rect.height < 3 || rect.width < 5 {
        return Err(io::Error::other(format!(
            "screen {screen_rows}x{screen_cols} too small for help"
        )));
    }

    screen.open_popup(rect)?;
    let inner = (rect.width - 4) as usize;
    for (i, line) in HELP_LINES.iter().take(rect.height as usize - 2).enumerate() {
        screen.write_at(rect.row + 1 + i as u16, rect.col + 2, &fit(line, inner), TextStyle::Plain)?;
    }
    screen.flush()?;
    Ok(rect)
}

/// Longest prefix of `text` that fits in `width` cells.
fn fit(text: &str, width: usize) -> String {
    let mut used = 0;
    text.chars()
        .take_while(|c| {
            used += c.width().unwrap_or(0);
            used <= width
        })
        .collect()
}

/// Chars of a row from `x_offset` that fit in `width` cells.
fn visible_part(text: &str, x_offset: usize, width: usize) -> String {
    let rest: String = text.chars().skip(x_offset).collect();
    fit(&rest, width)
}

#[allow(clippy::cast_possible_truncation)]
fn cells(text: &str) -> u16 {
    crate::editor::wrap::display_width(text) as u16
}
