//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They hold display-ready strings (already truncated to fit)
//! and highlight ranges, and no business logic.
//!
//! # Example
//!
//! ```rust
//! use bookshelf::ui::viewmodel::{ColumnWidths, DisplayItem, TableInfo};
//!
//! let table = TableInfo {
//!     columns: ColumnWidths::for_width(80),
//!     rows: vec![DisplayItem {
//!         title: "1984".to_string(),
//!         author: "George Orwell".to_string(),
//!         isbn: "978-0-452-28423-4".to_string(),
//!         is_selected: true,
//!         title_highlights: vec![],
//!         author_highlights: vec![(7, 13)],
//!     }],
//!     selected_index: 0,
//!     empty_state: None,
//! };
//! assert_eq!(table.rows.len(), 1);
//! ```

/// Fixed width reserved for the ISBN column, including its gap.
const ISBN_COLUMN_WIDTH: usize = 20;

/// Share of the remaining width given to the title column, in percent.
const TITLE_COLUMN_PERCENT: usize = 55;

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Tab bar entries, in order.
    pub tabs: Vec<TabItem>,

    /// Header information for the active tab.
    pub header: HeaderInfo,

    /// Tab-specific content.
    pub body: Body,

    /// Optional one-line status message.
    pub status: Option<StatusInfo>,

    /// Footer information (keybindings).
    pub footer: FooterInfo,
}

/// Content area of the active tab.
#[derive(Debug, Clone)]
pub enum Body {
    /// Centered welcome text.
    Home(EmptyState),
    /// Add-book input fields.
    Form(FormInfo),
    /// Whole-collection table.
    Table(TableInfo),
    /// Query box above a results table.
    Search {
        search_bar: SearchBarInfo,
        results: TableInfo,
    },
}

/// One entry in the tab bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabItem {
    pub title: String,
    pub is_active: bool,
}

/// Display information for a single book row.
#[derive(Debug, Clone)]
pub struct DisplayItem {
    /// Title, truncated to the title column.
    pub title: String,

    /// Author, truncated to the author column.
    pub author: String,

    /// Identifier, truncated to the ISBN column.
    pub isbn: String,

    /// Whether this row is under the cursor.
    pub is_selected: bool,

    /// Character ranges of the title matching the search query.
    ///
    /// Each tuple is `(start_index, end_index)` in character indices.
    pub title_highlights: Vec<(usize, usize)>,

    /// Character ranges of the author matching the search query.
    pub author_highlights: Vec<(usize, usize)>,
}

/// Column widths for the book table, in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnWidths {
    pub title: usize,
    pub author: usize,
    pub isbn: usize,
}

impl ColumnWidths {
    /// Splits `cols` into title, author and ISBN columns.
    ///
    /// The ISBN column is fixed; the rest is shared between title and author.
    ///
    /// ```
    /// use bookshelf::ui::viewmodel::ColumnWidths;
    ///
    /// let widths = ColumnWidths::for_width(100);
    /// assert_eq!(widths.title + widths.author + widths.isbn, 100);
    /// ```
    #[must_use]
    pub const fn for_width(cols: usize) -> Self {
        let remaining = cols.saturating_sub(ISBN_COLUMN_WIDTH);
        let title = remaining * TITLE_COLUMN_PERCENT / 100;
        Self {
            title,
            author: remaining - title,
            isbn: if cols < ISBN_COLUMN_WIDTH { cols } else { ISBN_COLUMN_WIDTH },
        }
    }
}

/// A table of books with its cursor.
#[derive(Debug, Clone)]
pub struct TableInfo {
    pub columns: ColumnWidths,

    /// Visible rows only.
    pub rows: Vec<DisplayItem>,

    /// Index of the selected row within `rows`.
    pub selected_index: usize,

    /// Message to show instead of the table when there is nothing to list.
    pub empty_state: Option<EmptyState>,
}

/// The add-book form.
#[derive(Debug, Clone)]
pub struct FormInfo {
    pub fields: Vec<FormFieldItem>,
}

/// One labeled input of the add-book form.
#[derive(Debug, Clone)]
pub struct FormFieldItem {
    pub label: String,
    pub value: String,
    pub is_focused: bool,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}

/// Status line display information.
#[derive(Debug, Clone)]
pub struct StatusInfo {
    pub message: String,
    pub is_error: bool,
}

/// Centered two-line message.
///
/// Used for the Home tab and for tables with nothing to show.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message (e.g., "No books found").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Search bar display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Current search query text.
    pub query: String,
}
