//! Composable UI component renderers.
//!
//! Each component draws one part of the screen at a given row and returns
//! the next free row, so [`render_frame`] can stack them.
//!
//! # Components
//!
//! - [`tabs`]: tab bar
//! - [`header`]: title bar
//! - [`form`]: add-book input fields
//! - [`search`]: search query box
//! - [`table`]: book table (TITLE, AUTHOR, ISBN)
//! - [`empty`]: centered two-line message
//! - [`footer`]: status line and keybinding hints
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Tab bar]
//! [Header]
//! [Border]
//! [Body: welcome | form | table | search box + table]
//! [Blank padding]
//! [Status]
//! [Border]
//! [Footer]
//! ```

mod empty;
mod footer;
mod form;
mod header;
mod search;
mod table;
mod tabs;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{Body, TableInfo, UIViewModel};

use empty::render_empty_state;
use footer::{render_footer, render_status};
use form::render_form;
use header::render_header;
use search::render_search_bar;
use table::{render_table_headers, render_table_rows};
use tabs::render_tab_bar;

/// Rows from the top of the pane where the body starts.
const BODY_START_ROW: usize = 5;

/// Renders a horizontal border line at `row` and returns the next row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders a three-line bordered input box whose left edge is at column
/// `margin + 1`, returning the next row.
///
/// When `text` is wider than the box, its tail is shown so the end of what
/// the user is typing stays visible.
fn render_input_box(row: usize, margin: usize, box_width: usize, text: &str, border: &str, theme: &Theme) -> usize {
    let inner_width = box_width.saturating_sub(2);

    let len = text.chars().count();
    let visible: String = text.chars().skip(len.saturating_sub(inner_width)).collect();
    let padding = inner_width.saturating_sub(visible.chars().count());

    position_cursor(row, margin + 1);
    print!("{}", Theme::fg(border));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    position_cursor(row + 1, margin + 1);
    print!("{}", Theme::fg(border));
    print!("│");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{visible}");
    print!("{}", " ".repeat(padding));
    print!("{}", Theme::fg(border));
    print!("│");
    print!("{}", Theme::reset());

    position_cursor(row + 2, margin + 1);
    print!("{}", Theme::fg(border));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}

/// Renders a book table, or its empty state when there is one.
fn render_table(row: usize, table: &TableInfo, theme: &Theme, cols: usize) -> usize {
    if let Some(empty) = &table.empty_state {
        return render_empty_state(row + 2, empty, theme, cols);
    }

    let current_row = render_table_headers(row, &table.columns, theme);
    render_table_rows(current_row, &table.rows, &table.columns, theme, cols)
}

/// Renders the whole pane: chrome around the body of the active tab.
pub fn render_frame(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2; // row 1 stays blank

    current_row = render_tab_bar(current_row, &vm.tabs, theme, cols);
    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    debug_assert_eq!(current_row, BODY_START_ROW);

    match &vm.body {
        Body::Home(welcome) => {
            let middle = (rows / 2).max(current_row);
            render_empty_state(middle, welcome, theme, cols);
        }
        Body::Form(form) => {
            render_form(current_row, form, theme, cols);
        }
        Body::Table(table) => {
            render_table(current_row, table, theme, cols);
        }
        Body::Search { search_bar, results } => {
            current_row = render_search_bar(current_row, search_bar, theme, cols);
            render_table(current_row, results, theme, cols);
        }
    }

    let footer_row = rows.saturating_sub(1);
    let border_row = footer_row.saturating_sub(1);
    let status_row = border_row.saturating_sub(1);

    render_status(status_row, vm.status.as_ref(), theme, cols);
    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}
