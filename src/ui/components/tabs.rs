//! Tab bar component renderer.
//!
//! Draws the four tab labels on one line, the active one in inverted theme
//! colors, the rest dimmed.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::TabItem;

/// Renders the tab bar at `row` and returns the next row.
///
/// ```text
///  Home  │  Add Book  │  View Books  │  Search Books
/// ```
pub fn render_tab_bar(row: usize, tabs: &[TabItem], theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let mut used = 0;
    for (idx, tab) in tabs.iter().enumerate() {
        if idx > 0 {
            print!("{}│{}", Theme::fg(&theme.colors.border), Theme::reset());
            used += 1;
        }

        let label = format!(" {} ", tab.title);
        if tab.is_active {
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.tab_active_fg));
            print!("{}", Theme::bg(&theme.colors.tab_active_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.tab_inactive_fg));
        }
        print!("{label}");
        print!("{}", Theme::reset());
        used += label.chars().count();
    }

    print!("{}", " ".repeat(cols.saturating_sub(used)));
    row + 1
}
