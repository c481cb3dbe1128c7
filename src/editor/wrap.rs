use textwrap::{Options, WordSeparator, WordSplitter, WrapAlgorithm};
use unicode_width::UnicodeWidthStr;

/// Greedy word-wrap of a single logical line into rows of at most `width` columns.
///
/// Breaks only on ASCII spaces (no hyphen splitting); words longer than `width`
/// are cut at character boundaries. Whitespace at a break point is consumed and
/// trailing whitespace is dropped. Never returns an empty vector: a blank line
/// yields one empty row.
#[must_use]
pub fn wrap(line: &str, width: usize) -> Vec<String> {
    let options = Options::new(width.max(1))
        .wrap_algorithm(WrapAlgorithm::FirstFit)
        .word_separator(WordSeparator::AsciiSpace)
        .word_splitter(WordSplitter::NoHyphenation)
        .break_words(true);

    let rows: Vec<String> = textwrap::wrap(line, options)
        .into_iter()
        .map(|row| row.into_owned())
        .collect();

    if rows.is_empty() {
        vec![String::new()]
    } else {
        rows
    }
}

/// Number of characters that are not ASCII spaces.
#[must_use]
pub fn count_non_spaces(s: &str) -> usize {
    s.chars().filter(|&c| c != ' ').count()
}

/// Display width of `s` in terminal cells.
#[must_use]
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Wrap `line` without losing spaces: the runs the wrap consumed at row
/// ends are re-appended to those rows, so joining the rows with single
/// spaces gives `line` back.
///
/// Words cut by `break_words` still gain a separator.
#[must_use]
pub fn wrap_keeping_spaces(line: &str, width: usize) -> Vec<String> {
    let mut rows = wrap(line, width);
    let wanted = space_runs(line);
    let mut got = space_runs(&rows.join(" "));
    if wanted.len() != got.len() {
        return rows;
    }

    // Each row ends inside the run that follows its last non-space character.
    let mut run = 0;
    for row in &mut rows {
        run += count_non_spaces(row);
        let missing = wanted[run].saturating_sub(got[run]);
        if missing > 0 {
            row.push_str(&" ".repeat(missing));
            got[run] += missing;
        }
    }
    rows
}

/// Lengths of the space runs of `text`: the leading run, then the run after
/// each non-space character.
fn space_runs(text: &str) -> Vec<usize> {
    let mut runs = vec![0];
    for ch in text.chars() {
        if ch == ' ' {
            let last = runs.len() - 1;
            runs[last] += 1;
        } else {
            runs.push(0);
        }
    }
    runs
}
