//! Cursor re-anchoring after an edit-triggered rewrap.
//!
//! Typing or deleting a single character can push the word under the cursor
//! onto the next row, or pull it back onto the previous one. The edit point is
//! captured before the rewrap as a position in the text of its logical line:
//! just past the n-th non-space character, then some spaces. Rewrapping keeps
//! every character, so the same point is found again in the new rows and the
//! cursor jumps there when the tentative position disagrees.

use super::index::BufferIndex;
use super::wrap::count_non_spaces;

/// An edit point inside one logical line, independent of where it wraps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditPoint {
    /// Non-space characters between the start of the line and the point.
    pub non_spaces: usize,
    /// Spaces between the last of those characters and the point.
    pub gap: usize,
}

impl EditPoint {
    /// Point at character column `col` of row `row` of a line's `rows`.
    #[must_use]
    pub fn at<S: AsRef<str>>(rows: &[S], row: usize, col: usize) -> Self {
        let mut prefix = String::new();
        for text in rows.iter().take(row) {
            prefix.push_str(text.as_ref());
            prefix.push(' ');
        }
        if let Some(text) = rows.get(row) {
            prefix.extend(text.as_ref().chars().take(col));
        }

        let kept = prefix.trim_end_matches(' ');
        Self {
            non_spaces: count_non_spaces(kept),
            gap: prefix.len() - kept.len(),
        }
    }

    /// Row and column of this point in `rows`.
    ///
    /// Past the end of a row the point continues at the start of the next
    /// one, the soft break standing for one space.
    #[must_use]
    pub fn locate<S: AsRef<str>>(&self, rows: &[S]) -> (usize, usize) {
        let Some(last) = rows.len().checked_sub(1) else {
            return (0, 0);
        };

        let (mut row, mut col) = if self.non_spaces == 0 {
            (0, 0)
        } else {
            anchor_of(rows, self.non_spaces)
                .unwrap_or_else(|| (last, rows[last].as_ref().chars().count()))
        };

        for _ in 0..self.gap {
            if col < rows[row].as_ref().chars().count() {
                col += 1;
            } else if row < last {
                row += 1;
                col = 0;
            } else {
                break;
            }
        }
        (row, col)
    }
}

/// Position just past the `n`-th non-space character.
fn anchor_of<S: AsRef<str>>(rows: &[S], n: usize) -> Option<(usize, usize)> {
    let mut seen = 0;
    for (row, text) in rows.iter().enumerate() {
        for (col, ch) in text.as_ref().chars().enumerate() {
            if ch != ' ' {
                seen += 1;
                if seen == n {
                    return Some((row, col + 1));
                }
            }
        }
    }
    None
}

/// Where the cursor should go after a rewrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapJump {
    Stay,
    To { abs_row: usize, col: usize },
}

/// Decide the cursor jump for an edit in logical line `line`.
///
/// `before` is captured from the edited rows before rewrapping, `tentative`
/// is the absolute (row, col) the cursor was put at in the rebuilt `index`.
///
/// - word ends on the same row as before: stay
/// - word now ends the previous row: end of that row, or the start of the
///   following row when spaces separated word and cursor (the break took one)
/// - word now starts the next row: just past the word
#[must_use]
pub fn word_wrap_jump(
    before: &EditPoint,
    index: &BufferIndex,
    line: usize,
    tentative: (usize, usize),
) -> WrapJump {
    let Some(first) = index.position_of(line, 0) else {
        return WrapJump::Stay;
    };
    let rows: Vec<&str> = index
        .iter()
        .skip(first)
        .take_while(|entry| entry.line == line)
        .map(|entry| entry.text.as_str())
        .collect();

    let (row, col) = before.locate(&rows);
    let target = (first + row, col);
    if target == tentative {
        WrapJump::Stay
    } else {
        WrapJump::To {
            abs_row: target.0,
            col: target.1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::document::Document;

    fn index_of(text: &str, width: usize) -> BufferIndex {
        BufferIndex::build(&Document::from_text(text, Some(width)))
    }

    #[test]
    fn test_point_at() {
        assert_eq!(
            EditPoint::at(&["aaa bbb"], 0, 7),
            EditPoint {
                non_spaces: 6,
                gap: 0
            }
        );
        assert_eq!(
            EditPoint::at(&["aaa bbb  "], 0, 9),
            EditPoint {
                non_spaces: 6,
                gap: 2
            }
        );
        assert_eq!(EditPoint::at(&["aaa", "bbb"], 1, 0).gap, 1);
        assert_eq!(EditPoint::at(&[""], 0, 0), EditPoint::default());
    }

    #[test]
    fn test_locate_round_trips_every_column() {
        let rows = ["aaa ", "bbb ccc", "dd"];
        for (row, text) in rows.iter().enumerate() {
            for col in 0..=text.len() {
                assert_eq!(EditPoint::at(&rows, row, col).locate(&rows), (row, col));
            }
        }
    }

    #[test]
    fn test_unchanged_word_stays() {
        let index = index_of("aaa bbb", 10);
        let point = EditPoint::at(&["aaa bbb"], 0, 7);
        assert_eq!(word_wrap_jump(&point, &index, 0, (0, 7)), WrapJump::Stay);
    }

    #[test]
    fn test_word_pushed_to_next_row() {
        // "aaa bbbbb" no longer fits in 8 columns.
        let index = index_of("aaa bbbbb", 8);
        let point = EditPoint::at(&["aaa bbbbb"], 0, 9);
        assert_eq!(
            word_wrap_jump(&point, &index, 0, (0, 3)),
            WrapJump::To { abs_row: 1, col: 5 }
        );
    }

    #[test]
    fn test_word_pulled_to_previous_row() {
        let index = index_of("aaa bbbbbb", 10);
        let point = EditPoint::at(&["aaa", "bbbbbb"], 1, 6);
        assert_eq!(
            word_wrap_jump(&point, &index, 0, (0, 6)),
            WrapJump::To { abs_row: 0, col: 10 }
        );
    }

    #[test]
    fn test_space_split_word_leaves_cursor_at_row_start() {
        // "bbbbbb" became "bb bbbb" and "bb" moved up.
        let index = index_of("aaa bb bbbb", 8);
        let point = EditPoint::at(&["aaa", "bb bbbb"], 1, 3);
        assert_eq!(
            word_wrap_jump(&point, &index, 0, (1, 3)),
            WrapJump::To { abs_row: 1, col: 0 }
        );
    }

    #[test]
    fn test_short_word_is_not_mistaken_for_longer_one() {
        // "aaa b bb" wraps as "aaa b" / "bb ccc": the point after the
        // inserted space is the start of the second row, not past "bb".
        let index = index_of("aaa b bb ccc", 7);
        let point = EditPoint::at(&["aaa b bb ccc"], 0, 6);
        assert_eq!(
            word_wrap_jump(&point, &index, 0, (0, 5)),
            WrapJump::To { abs_row: 1, col: 0 }
        );
    }

    #[test]
    fn test_point_on_later_line() {
        let index = index_of("first\naaa bbbbb", 8);
        let point = EditPoint::at(&["aaa bbbbb"], 0, 9);
        assert_eq!(
            word_wrap_jump(&point, &index, 1, (1, 3)),
            WrapJump::To { abs_row: 2, col: 5 }
        );
    }
}
