//! Search bar component renderer.

use super::render_input_box;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 5;

/// Renders the three-line search box at `row` and returns the next row.
///
/// ```text
/// [margin] ┌──────────────────────┐ [margin]
/// [margin] │ Search Query: orwell │ [margin]
/// [margin] └──────────────────────┘ [margin]
/// ```
///
/// The search box always has focus on the Search tab, so it uses the focus
/// border color.
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let text = format!(" Search Query: {}", search.query);

    render_input_box(row, SEARCH_BOX_MARGIN, box_width, &text, &theme.colors.input_focus_border, theme)
}
