use super::*;
use proptest::prelude::*;

fn editor(text: &str, height: usize, width: usize) -> EditorState {
    EditorState::new(text, Viewport::new(height, width), ModeFlags::default())
}

fn rows(state: &EditorState) -> Vec<String> {
    state.index().iter().map(|entry| entry.text.clone()).collect()
}

fn assert_cursor_in_bounds(state: &EditorState) {
    let abs_row = state.abs_row();
    assert!(abs_row < state.index().len());
    assert!(state.abs_col() <= state.index().row_len(abs_row));
    assert!(state.cursor().screen().0 < state.viewport().height);
}

#[test]
fn test_greedy_wrap_of_initial_text() {
    // Viewport width 11 leaves 10 columns for text.
    let state = editor("hello world foo", 5, 11);
    assert_eq!(rows(&state), vec!["hello", "world foo"]);
    assert_eq!(wrap("hello world foo", 10), vec!["hello", "world foo"]);
}

#[test]
fn test_enter_in_single_row_entry_commits_unchanged_text() {
    let mut state = EditorState::new(
        "just one line",
        Viewport::new(1, 30),
        ModeFlags::for_viewport(1, 1, false),
    );
    state.end();
    assert_eq!(state.insert_line_or_quit(), LineBreak::Commit);
    assert_eq!(state.text(), "just one line");
}

#[test]
fn test_delete_to_end_then_start_empties_row() {
    let mut state = editor("first\nsecond row", 5, 40);
    state.down();
    for _ in 0..3 {
        state.right();
    }
    state.delete_to_end_of_line();
    state.delete_to_start_of_line();
    assert_eq!(state.current_row().text, "");
    assert_eq!(state.text(), "first\n");
    assert_eq!((state.abs_row(), state.abs_col()), (1, 0));
}

#[test]
fn test_enter_with_row_cap_met_changes_nothing() {
    let mut state = EditorState::new(
        "aaaa bbbb",
        Viewport::new(5, 6),
        ModeFlags::for_viewport(5, 2, false),
    );
    assert_eq!(state.index().len(), 2);
    state.right();
    let document = state.document().clone();
    let cursor = *state.cursor();

    assert_eq!(state.insert_line_or_quit(), LineBreak::Capped);
    assert_eq!(state.document(), &document);
    assert_eq!(state.cursor(), &cursor);
}

#[test]
fn test_masked_mode_edits_like_unmasked() {
    let masked_mode = ModeFlags {
        masked: true,
        ..ModeFlags::default()
    };
    let mut masked = EditorState::new("", Viewport::new(3, 10), masked_mode);
    let mut plain = editor("", 3, 10);
    for ch in "hunter2 is my pass".chars() {
        masked.insert_char(ch);
        plain.insert_char(ch);
    }
    assert_eq!(masked.text(), plain.text());
    assert_eq!(rows(&masked), rows(&plain));
}

#[test]
fn test_typing_paragraph_keeps_exact_text() {
    let mut state = editor("", 4, 12);
    let typed = "the quick brown fox jumps over the lazy dog";
    for ch in typed.chars() {
        state.insert_char(ch);
        assert_cursor_in_bounds(&state);
    }
    assert_eq!(state.text(), typed);
    assert_eq!(state.abs_row(), state.index().len() - 1);
    assert_eq!(state.abs_col(), state.index().row_len(state.abs_row()));
}

#[test]
fn test_wide_characters_count_as_one_column() {
    let mut state = editor("héllo", 3, 20);
    state.end();
    state.insert_char('世');
    assert_eq!(state.text(), "héllo世");
    assert_eq!(state.abs_col(), 6);
    state.backspace();
    state.backspace();
    assert_eq!(state.text(), "héll");
}

#[test]
fn test_scrolls_while_typing_past_viewport() {
    let mut state = editor("", 2, 6);
    for ch in "aa bb cc dd ee".chars() {
        state.insert_char(ch);
    }
    assert_eq!(rows(&state), vec!["aa bb", "cc dd", "ee"]);
    assert_eq!(state.cursor().offsets(), (1, 0));
    assert_eq!(state.cursor().screen(), (1, 2));
}

#[test]
fn test_split_and_type_on_new_line() {
    let mut state = editor("hello", 3, 20);
    state.end();
    assert_eq!(state.insert_line_or_quit(), LineBreak::Split);
    for ch in "there".chars() {
        state.insert_char(ch);
    }
    assert_eq!(state.text(), "hello\nthere");
    assert_eq!((state.abs_row(), state.abs_col()), (1, 5));
}

#[test]
fn test_space_typed_before_break_is_kept() {
    // Wrap width 7: "aaa bbb" / "ccc ddd" / "eee".
    let mut state = editor("aaa bbb ccc ddd eee", 4, 8);
    state.move_to(0, 3);
    state.insert_char(' ');
    assert_eq!(state.text(), "aaa  bbb ccc ddd eee");
    assert_eq!(rows(&state), vec!["aaa ", "bbb ccc", "ddd eee"]);
    assert_eq!((state.abs_row(), state.abs_col()), (0, 4));

    state.backspace();
    assert_eq!(state.text(), "aaa bbb ccc ddd eee");
    assert_eq!((state.abs_row(), state.abs_col()), (0, 3));
}

#[test]
fn test_space_splitting_word_lands_before_moved_part() {
    let mut state = editor("aaa bbb ccc ddd eee", 4, 8);
    state.move_to(0, 5);
    state.insert_char(' ');
    assert_eq!(rows(&state), vec!["aaa b", "bb ccc", "ddd eee"]);
    assert_eq!((state.abs_row(), state.abs_col()), (1, 0));

    state.backspace();
    assert_eq!(state.text(), "aaa bbb ccc ddd eee");
    assert_eq!((state.abs_row(), state.abs_col()), (0, 5));
}

#[test]
fn test_backspace_follows_word_back_up() {
    let mut state = editor("aaa bbb ccc ddd eee", 4, 8);
    state.move_to(0, 4);
    state.insert_char('x');
    assert_eq!(rows(&state), vec!["aaa", "xbbb", "ccc ddd", "eee"]);
    assert_eq!((state.abs_row(), state.abs_col()), (1, 1));

    state.backspace();
    assert_eq!(state.text(), "aaa bbb ccc ddd eee");
    assert_eq!((state.abs_row(), state.abs_col()), (0, 4));
}

#[test]
fn test_split_at_soft_break_keeps_separator() {
    let mut state = editor("hello world foo", 5, 11);
    state.down();
    assert_eq!(state.insert_line_or_quit(), LineBreak::Split);
    assert_eq!(state.text(), "hello \nworld foo");

    state.backspace();
    assert_eq!(state.text(), "hello world foo");
    assert_eq!((state.abs_row(), state.abs_col()), (1, 0));
}

#[test]
fn test_delete_char_keeps_edit_point_when_word_moves_up() {
    // Wrap width 7: "aaaa" / "bbb cc".
    let mut state = editor("aaaa bbb cc", 4, 8);
    state.down();
    state.delete_char();
    assert_eq!(rows(&state), vec!["aaaa bb", "cc"]);
    assert_eq!((state.abs_row(), state.abs_col()), (0, 5));
}

fn words_text() -> impl Strategy<Value = String> {
    let line = prop::collection::vec("[a-z]{1,8}", 0..8).prop_map(|words| words.join(" "));
    prop::collection::vec(line, 1..5).prop_map(|lines| lines.join("\n"))
}

/// One line of short words, several rows long at narrow widths.
fn single_line() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z]{1,5}", 1..12).prop_map(|words| words.join(" "))
}

/// Short words separated by runs of one to three spaces.
fn spaced_line() -> impl Strategy<Value = String> {
    prop::collection::vec(("[a-z]{1,5}", " {1,3}"), 1..10).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(word, spaces)| word + &spaces)
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_untouched_text_round_trips(text in words_text(), width in 9usize..40) {
        let state = editor(&text, 5, width);
        prop_assert_eq!(state.text(), text);
    }

    #[test]
    fn prop_rewrap_is_idempotent(text in words_text(), width in 8usize..40) {
        for line in text.split('\n') {
            let rows = wrap(line, width);
            prop_assert_eq!(wrap(&rows.join(" "), width), rows);
        }
    }

    #[test]
    fn prop_cursor_stays_in_bounds(
        text in words_text(),
        width in 6usize..16,
        ops in prop::collection::vec(0u8..16, 1..60),
    ) {
        let mut state = editor(&text, 3, width);
        for op in ops {
            match op {
                0 => state.left(),
                1 => state.right(),
                2 => state.up(),
                3 => state.down(),
                4 => state.home(),
                5 => state.end(),
                6 => state.page_up(),
                7 => state.page_down(),
                8 => state.insert_char('x'),
                9 => state.insert_char(' '),
                10 => state.backspace(),
                11 => state.delete_char(),
                12 => {
                    state.insert_line_or_quit();
                }
                13 => state.delete_to_end_of_line(),
                14 => state.delete_to_start_of_line(),
                _ => state.insert_tab(),
            }
            let abs_row = state.abs_row();
            prop_assert!(abs_row < state.index().len());
            prop_assert!(state.abs_col() <= state.index().row_len(abs_row));
            prop_assert!(state.cursor().screen().0 < state.viewport().height);
        }
    }

    #[test]
    fn prop_typing_keeps_exact_text(typed in spaced_line(), width in 7usize..16) {
        let mut state = editor("", 3, width);
        for ch in typed.chars() {
            state.insert_char(ch);
        }
        prop_assert_eq!(state.text(), typed.clone());
        prop_assert_eq!(state.document().lines()[0].text(), typed);
        prop_assert_eq!(state.abs_row(), state.index().len() - 1);
        prop_assert_eq!(state.abs_col(), state.index().row_len(state.abs_row()));
    }

    #[test]
    fn prop_backspace_undoes_insert(
        text in single_line(),
        width in 7usize..16,
        steps in 0usize..60,
        ch in "[a-z ]",
    ) {
        let mut state = editor(&text, 3, width);
        for _ in 0..steps {
            state.right();
        }
        let start = (state.abs_row(), state.abs_col());
        let ch = ch.chars().next().unwrap_or(' ');
        state.insert_char(ch);
        state.backspace();
        prop_assert_eq!(state.text(), text);
        prop_assert_eq!((state.abs_row(), state.abs_col()), start);
    }

    #[test]
    fn prop_backspace_joins_split_line(
        text in single_line(),
        width in 7usize..16,
        steps in 0usize..60,
    ) {
        let mut state = editor(&text, 3, width);
        for _ in 0..steps {
            state.right();
        }
        let start = (state.abs_row(), state.abs_col());
        prop_assert_eq!(state.insert_line_or_quit(), LineBreak::Split);
        prop_assert_eq!(state.document().line_count(), 2);
        state.backspace();
        prop_assert_eq!(state.text(), text);
        prop_assert_eq!((state.abs_row(), state.abs_col()), start);
    }
}
