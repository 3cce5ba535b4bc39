//! Shared rendering utilities and helpers.
//!
//! Cursor positioning, substring match highlighting and character-safe
//! truncation. All ranges here are character indices, not byte indices, so
//! titles with non-ASCII letters never get sliced mid-character.
//!
//! # Example
//!
//! ```rust
//! use bookshelf::ui::helpers::{match_ranges, truncate};
//!
//! assert_eq!(match_ranges("The Catcher in the Rye", "the"), vec![(0, 3), (15, 18)]);
//! assert_eq!(truncate("Crime and Punishment", 10), ("Crime a...".to_string(), 7));
//! ```

use crate::domain::book::{fold_case, fold_case_indexed};
use crate::ui::theme::Theme;

/// Positions the cursor at a specific row and column.
///
/// Coordinates are 1-indexed.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Finds every non-overlapping case-insensitive occurrence of `query` in `text`.
///
/// Returns `(start, end)` character ranges of `text` with exclusive ends. An
/// empty query yields no ranges. Both sides are folded with
/// [`fold_case`], the same rule `Library::search` uses, and a match is widened
/// to cover every original character it touches.
#[must_use]
pub fn match_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    let needle: Vec<char> = fold_case(query).chars().collect();
    if needle.is_empty() {
        return vec![];
    }

    let haystack: Vec<(char, usize)> = fold_case_indexed(text).collect();

    let mut ranges: Vec<(usize, usize)> = Vec::new();
    let mut pos = 0;

    while pos + needle.len() <= haystack.len() {
        let window = &haystack[pos..pos + needle.len()];
        if window.iter().map(|&(c, _)| c).eq(needle.iter().copied()) {
            let start = window[0].1;
            let end = window[needle.len() - 1].1 + 1;
            if ranges.last().map_or(true, |&(_, prev_end)| start >= prev_end) {
                ranges.push((start, end));
            }
            pos += needle.len();
        } else {
            pos += 1;
        }
    }

    ranges
}

/// Drops or shortens ranges so none extends past `visible` characters.
#[must_use]
pub fn clip_ranges(ranges: &[(usize, usize)], visible: usize) -> Vec<(usize, usize)> {
    ranges
        .iter()
        .filter(|&&(start, _)| start < visible)
        .map(|&(start, end)| (start, end.min(visible)))
        .collect()
}

/// Shortens `text` to at most `max` characters, ending in `...` when cut.
///
/// Returns the display string and how many characters of the original text
/// it still shows.
#[must_use]
pub fn truncate(text: &str, max: usize) -> (String, usize) {
    let len = text.chars().count();
    if len <= max {
        return (text.to_string(), len);
    }
    if max <= 3 {
        return (text.chars().take(max).collect(), max);
    }

    let keep = max - 3;
    let mut out: String = text.chars().take(keep).collect();
    out.push_str("...");
    (out, keep)
}

/// Writes `text` followed by spaces up to `width` characters.
pub fn print_padded(text: &str, width: usize) {
    print!("{text}");
    print!("{}", " ".repeat(width.saturating_sub(text.chars().count())));
}

/// Renders text with highlighted character ranges for search matches.
///
/// When `is_selected` is `true` the text is printed plain so the selection
/// background stays intact. Ranges past the end of `text` are ignored.
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len()).max(current_pos);
        let end = end.min(chars.len());
        if start >= end {
            continue;
        }

        let normal_section: String = chars[current_pos..start].iter().collect();
        print!("{normal_section}");

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.text_normal));

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}
