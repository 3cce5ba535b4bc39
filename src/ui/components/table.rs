//! Table component renderer.
//!
//! Renders books as a three-column table (TITLE, AUTHOR, ISBN) with
//! selection and search-match highlighting. Cell text arrives already
//! truncated to the column widths.

use crate::ui::helpers::{self, position_cursor, print_padded};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ColumnWidths, DisplayItem};

/// Renders the bold column headers at `row` and returns the next row.
pub fn render_table_headers(row: usize, columns: &ColumnWidths, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print_padded("TITLE", columns.title);
    print_padded("AUTHOR", columns.author);
    print_padded("ISBN", columns.isbn);
    print!("{}", Theme::reset());
    row + 1
}

/// Renders every item starting at `row` and returns the row after the last.
pub fn render_table_rows(row: usize, items: &[DisplayItem], columns: &ColumnWidths, theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(current_row, item, columns, theme, cols);
    }
    current_row
}

/// Renders one book row, padded to the full width so the selection
/// background spans the line.
///
/// Selection colors win over match highlights.
fn render_table_row(row: usize, item: &DisplayItem, columns: &ColumnWidths, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    render_cell(&item.title, &item.title_highlights, columns.title, theme, item.is_selected);
    render_cell(&item.author, &item.author_highlights, columns.author, theme, item.is_selected);
    print_padded(&item.isbn, columns.isbn);

    let line_len = columns.title + columns.author + columns.isbn;
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}

fn render_cell(text: &str, highlights: &[(usize, usize)], width: usize, theme: &Theme, is_selected: bool) {
    helpers::render_highlighted_text(text, highlights, theme, is_selected);
    print!("{}", " ".repeat(width.saturating_sub(text.chars().count())));
}
