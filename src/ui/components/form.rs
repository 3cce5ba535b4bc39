//! Add-book form renderer.
//!
//! Each field is a bordered single-line input with its label to the left:
//!
//! ```text
//!            ┌────────────────────────────┐
//!   Title:   │ Dune                       │
//!            └────────────────────────────┘
//! ```
//!
//! The focused field gets the focus border color and a trailing cursor block.

use super::render_input_box;
use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FormInfo;

/// Columns reserved for the label, including left indent.
const LABEL_WIDTH: usize = 11;

/// Right-hand margin after the input boxes.
const RIGHT_MARGIN: usize = 4;

/// Renders all form fields starting at `row` followed by a submit hint line.
///
/// Returns the next free row.
pub fn render_form(row: usize, form: &FormInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(LABEL_WIDTH + RIGHT_MARGIN);
    let mut current_row = row + 1;

    for field in &form.fields {
        let border = if field.is_focused {
            &theme.colors.input_focus_border
        } else {
            &theme.colors.input_border
        };
        let cursor = if field.is_focused { "█" } else { "" };
        let text = format!(" {}{cursor}", field.value);

        render_input_box(current_row, LABEL_WIDTH, box_width, &text, border, theme);

        position_cursor(current_row + 1, 1);
        if field.is_focused {
            print!("{}", Theme::bold());
        }
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!("  {:<width$}", field.label, width = LABEL_WIDTH - 2);
        print!("{}", Theme::reset());

        current_row += 3;
    }

    position_cursor(current_row + 1, LABEL_WIDTH + 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("[ Enter: Add Book ]");
    print!("{}", Theme::reset());

    current_row + 2
}
