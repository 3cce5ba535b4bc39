//! Application state and view model computation.
//!
//! [`AppState`] is the single source of truth for the plugin. It owns the
//! [`Library`] and all transient UI state: the active tab, the add-book form,
//! the search query and its last results, selection cursors and the status
//! line. The event handler mutates it; the renderer only reads it through
//! [`AppState::compute_viewmodel`].
//!
//! # Example
//!
//! ```rust
//! use bookshelf::app::{AppState, Tab};
//! use bookshelf::{Library, Theme};
//!
//! let mut state = AppState::new(Library::seeded(), Theme::default());
//! state.switch_tab(Tab::SearchBooks);
//! state.search_query = "orwell".to_string();
//! state.run_search();
//! assert_eq!(state.search_results.as_ref().map(Vec::len), Some(1));
//!
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert!(viewmodel.header.title.contains("Search Books"));
//! ```

use super::form::BookForm;
use super::modes::{FormField, Tab};
use crate::domain::{Book, Library, Result};
use crate::ui::helpers::{clip_ranges, match_ranges, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    Body, ColumnWidths, DisplayItem, EmptyState, FooterInfo, FormFieldItem, FormInfo, HeaderInfo,
    SearchBarInfo, StatusInfo, TabItem, TableInfo, UIViewModel,
};

/// Rows used by everything except table rows on the View tab.
///
/// Blank line, tab bar, header, border, column headers, status, border, footer,
/// plus one row of slack.
const VIEW_CHROME_ROWS: usize = 9;

/// Rows used by everything except table rows on the Search tab (adds the
/// three-line search box).
const SEARCH_CHROME_ROWS: usize = 12;

/// Message shown after a book is appended.
pub const BOOK_ADDED_MESSAGE: &str = "Book added successfully!";

/// Severity of a status line message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

/// One-line feedback shown above the footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The book collection. Read only through its own operations.
    pub library: Library,

    /// Tab currently shown.
    pub active_tab: Tab,

    /// Inputs of the add-book form.
    pub form: BookForm,

    /// Cursor within `library.view_all()` on the View tab.
    pub view_selected: usize,

    /// Text typed into the search box.
    pub search_query: String,

    /// Snapshot of the last search, `None` until Enter is first pressed.
    ///
    /// Not refreshed when books are added; the user re-runs the search.
    pub search_results: Option<Vec<Book>>,

    /// Query that produced `search_results`, used for match highlighting.
    pub last_search: String,

    /// Cursor within `search_results`.
    pub search_selected: usize,

    /// Feedback from the last form submission.
    pub status: Option<StatusMessage>,

    /// Color scheme for rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates state on the Home tab with an empty form and no search.
    #[must_use]
    pub fn new(library: Library, theme: Theme) -> Self {
        Self {
            library,
            active_tab: Tab::Home,
            form: BookForm::default(),
            view_selected: 0,
            search_query: String::new(),
            search_results: None,
            last_search: String::new(),
            search_selected: 0,
            status: None,
            theme,
        }
    }

    /// Shows `tab` and drops any status message.
    pub fn switch_tab(&mut self, tab: Tab) {
        tracing::debug!(from = ?self.active_tab, to = ?tab, "switching tab");
        self.active_tab = tab;
        self.status = None;
    }

    /// Number of rows the cursor can move over on the active tab.
    fn selectable_len(&self) -> usize {
        match self.active_tab {
            Tab::ViewBooks => self.library.len(),
            Tab::SearchBooks => self.search_results.as_ref().map_or(0, Vec::len),
            Tab::Home | Tab::AddBook => 0,
        }
    }

    fn cursor_mut(&mut self) -> Option<&mut usize> {
        match self.active_tab {
            Tab::ViewBooks => Some(&mut self.view_selected),
            Tab::SearchBooks => Some(&mut self.search_selected),
            Tab::Home | Tab::AddBook => None,
        }
    }

    /// Moves the cursor down one row (or focus to the next form field),
    /// wrapping at the end.
    pub fn move_selection_down(&mut self) {
        if self.active_tab == Tab::AddBook {
            self.form.focus_next();
            return;
        }

        let len = self.selectable_len();
        if len == 0 {
            return;
        }
        if let Some(cursor) = self.cursor_mut() {
            *cursor = (*cursor + 1) % len;
        }
    }

    /// Moves the cursor up one row (or focus to the previous form field),
    /// wrapping at the start.
    pub fn move_selection_up(&mut self) {
        if self.active_tab == Tab::AddBook {
            self.form.focus_prev();
            return;
        }

        let len = self.selectable_len();
        if len == 0 {
            return;
        }
        if let Some(cursor) = self.cursor_mut() {
            *cursor = if *cursor == 0 { len - 1 } else { (*cursor - 1).min(len - 1) };
        }
    }

    /// Book under the cursor on the View or Search tab.
    #[must_use]
    pub fn selected_book(&self) -> Option<&Book> {
        match self.active_tab {
            Tab::ViewBooks => self.library.view_all().get(self.view_selected),
            Tab::SearchBooks => self
                .search_results
                .as_ref()
                .and_then(|results| results.get(self.search_selected)),
            Tab::Home | Tab::AddBook => None,
        }
    }

    /// Validates the form, appends the book and resets the form.
    ///
    /// Sets the status line either way.
    ///
    /// # Errors
    ///
    /// Returns the form's validation error when a field is empty. The form
    /// keeps its contents in that case.
    pub fn submit_form(&mut self) -> Result<Book> {
        let book = match self.form.submit() {
            Ok(book) => book,
            Err(e) => {
                tracing::debug!(error = %e, "book form rejected");
                self.status = Some(StatusMessage::error(e.to_string()));
                return Err(e);
            }
        };

        self.library.add(book.clone());
        self.form.clear();
        self.status = Some(StatusMessage::success(BOOK_ADDED_MESSAGE));

        tracing::debug!(total_books = self.library.len(), "book added from form");
        Ok(book)
    }

    /// Runs the current query against the library and stores the results.
    pub fn run_search(&mut self) {
        let results: Vec<Book> = self
            .library
            .search(&self.search_query)
            .into_iter()
            .cloned()
            .collect();

        tracing::debug!(query = %self.search_query, results = results.len(), "search results stored");

        self.last_search.clone_from(&self.search_query);
        self.search_results = Some(results);
        self.search_selected = 0;
    }

    /// Clears the query and forgets the last results.
    pub fn clear_search(&mut self) {
        self.search_query.clear();
        self.last_search.clear();
        self.search_results = None;
        self.search_selected = 0;
    }

    /// Computes a renderable view model for a pane of `rows` x `cols` cells.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let _span = tracing::debug_span!("compute_viewmodel", tab = ?self.active_tab, rows, cols).entered();

        let body = match self.active_tab {
            Tab::Home => Body::Home(self.compute_home()),
            Tab::AddBook => Body::Form(self.compute_form()),
            Tab::ViewBooks => Body::Table(self.compute_view_table(rows, cols)),
            Tab::SearchBooks => Body::Search {
                search_bar: SearchBarInfo {
                    query: self.search_query.clone(),
                },
                results: self.compute_search_table(rows, cols),
            },
        };

        UIViewModel {
            tabs: self.compute_tabs(),
            header: self.compute_header(),
            body,
            status: self.status.as_ref().map(|status| StatusInfo {
                message: status.text.clone(),
                is_error: status.kind == StatusKind::Error,
            }),
            footer: self.compute_footer(),
        }
    }

    fn compute_tabs(&self) -> Vec<TabItem> {
        Tab::ALL
            .iter()
            .map(|&tab| TabItem {
                title: tab.title().to_string(),
                is_active: tab == self.active_tab,
            })
            .collect()
    }

    fn compute_header(&self) -> HeaderInfo {
        let title = match self.active_tab {
            Tab::Home => " Book Management System ".to_string(),
            Tab::AddBook => " Add Book ".to_string(),
            Tab::ViewBooks => format!(" View Books ({}) ", self.library.len()),
            Tab::SearchBooks => match &self.search_results {
                Some(results) => format!(" Search Books ({}) ", results.len()),
                None => " Search Books ".to_string(),
            },
        };
        HeaderInfo { title }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.active_tab {
            Tab::Home => "Tab/Shift+Tab: switch tab  q: quit",
            Tab::AddBook => "Type to edit  Up/Down: field  Enter: add book  Tab: next tab",
            Tab::ViewBooks => "j/k or Ctrl+n/p: navigate  Tab: next tab  q: quit",
            Tab::SearchBooks => "Type query  Enter: search  Up/Down: navigate  ESC: clear  Tab: next tab",
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_home(&self) -> EmptyState {
        EmptyState {
            message: "Welcome to the Book Management System".to_string(),
            subtitle: format!("{} books in the collection", self.library.len()),
        }
    }

    fn compute_form(&self) -> FormInfo {
        FormInfo {
            fields: FormField::ALL
                .iter()
                .map(|&field| FormFieldItem {
                    label: field.label().to_string(),
                    value: self.form.value(field).to_string(),
                    is_focused: field == self.form.focus,
                })
                .collect(),
        }
    }

    fn compute_view_table(&self, rows: usize, cols: usize) -> TableInfo {
        let books: Vec<&Book> = self.library.view_all().iter().collect();
        let empty_state = books.is_empty().then(|| EmptyState {
            message: "No books yet".to_string(),
            subtitle: "Add one from the Add Book tab".to_string(),
        });

        Self::compute_table(
            &books,
            self.view_selected,
            rows.saturating_sub(VIEW_CHROME_ROWS),
            cols,
            "",
            empty_state,
        )
    }

    fn compute_search_table(&self, rows: usize, cols: usize) -> TableInfo {
        let available = rows.saturating_sub(SEARCH_CHROME_ROWS);

        let Some(results) = &self.search_results else {
            return Self::compute_table(
                &[],
                0,
                available,
                cols,
                "",
                Some(EmptyState {
                    message: "Type a title or author".to_string(),
                    subtitle: "Press Enter to search".to_string(),
                }),
            );
        };

        let books: Vec<&Book> = results.iter().collect();
        let empty_state = books.is_empty().then(|| EmptyState {
            message: "No books found".to_string(),
            subtitle: format!("Nothing matches \"{}\"", self.last_search),
        });

        Self::compute_table(&books, self.search_selected, available, cols, &self.last_search, empty_state)
    }

    /// Windows `books` around `selected` and formats each visible row.
    fn compute_table(
        books: &[&Book],
        selected: usize,
        available_rows: usize,
        cols: usize,
        highlight_query: &str,
        empty_state: Option<EmptyState>,
    ) -> TableInfo {
        let columns = ColumnWidths::for_width(cols);
        let (visible_start, visible_end) = Self::visible_window(books.len(), selected, available_rows.max(1));

        let rows = books[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, book)| {
                Self::compute_display_item(book, visible_start + relative_idx == selected, &columns, highlight_query)
            })
            .collect();

        TableInfo {
            columns,
            rows,
            selected_index: selected.saturating_sub(visible_start),
            empty_state,
        }
    }

    /// Returns `[start, end)` of the rows to show so that `selected` stays
    /// near the middle of a window of `available` rows.
    fn visible_window(len: usize, selected: usize, available: usize) -> (usize, usize) {
        let mut visible_start = selected.saturating_sub(available / 2);
        let visible_end = (visible_start + available).min(len);

        if visible_end - visible_start.min(visible_end) < available && len >= available {
            visible_start = visible_end.saturating_sub(available);
        }

        (visible_start.min(visible_end), visible_end)
    }

    fn compute_display_item(book: &Book, is_selected: bool, columns: &ColumnWidths, query: &str) -> DisplayItem {
        let (title, title_visible) = truncate(&book.title, columns.title.saturating_sub(1));
        let (author, author_visible) = truncate(&book.author, columns.author.saturating_sub(1));
        let (isbn, _) = truncate(&book.isbn, columns.isbn.saturating_sub(1));

        DisplayItem {
            title_highlights: clip_ranges(&match_ranges(&book.title, query), title_visible),
            author_highlights: clip_ranges(&match_ranges(&book.author, query), author_visible),
            title,
            author,
            isbn,
            is_selected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BookshelfError;

    fn state() -> AppState {
        AppState::new(Library::seeded(), Theme::default())
    }

    #[test]
    fn view_selection_wraps() {
        let mut state = state();
        state.switch_tab(Tab::ViewBooks);

        state.move_selection_up();
        assert_eq!(state.view_selected, 14);
        state.move_selection_down();
        assert_eq!(state.view_selected, 0);
        assert_eq!(state.selected_book().map(|b| b.title.as_str()), Some("To Kill a Mockingbird"));
    }

    #[test]
    fn selection_is_noop_without_results() {
        let mut state = state();
        state.switch_tab(Tab::SearchBooks);

        state.move_selection_down();
        assert_eq!(state.search_selected, 0);
        assert!(state.selected_book().is_none());
    }

    #[test]
    fn arrows_move_form_focus_on_add_tab() {
        let mut state = state();
        state.switch_tab(Tab::AddBook);

        state.move_selection_down();
        assert_eq!(state.form.focus, FormField::Author);
        state.move_selection_up();
        state.move_selection_up();
        assert_eq!(state.form.focus, FormField::Isbn);
    }

    #[test]
    fn submit_form_appends_and_clears() {
        let mut state = state();
        state.form.title = "Dune".to_string();
        state.form.author = "Frank Herbert".to_string();
        state.form.isbn = "978-0-441-01359-3".to_string();

        let book = state.submit_form().expect("complete form");

        assert_eq!(state.library.len(), 16);
        assert_eq!(state.library.view_all().last(), Some(&book));
        assert_eq!(state.form, BookForm::default());
        assert_eq!(state.status, Some(StatusMessage::success(BOOK_ADDED_MESSAGE)));
    }

    #[test]
    fn submit_incomplete_form_keeps_input() {
        let mut state = state();
        state.form.title = "Dune".to_string();

        let err = state.submit_form().unwrap_err();

        assert!(matches!(err, BookshelfError::Validation(_)));
        assert_eq!(state.library.len(), 15);
        assert_eq!(state.form.title, "Dune");
        assert_eq!(state.status.as_ref().map(|s| s.kind), Some(StatusKind::Error));
        assert_eq!(state.status.map(|s| s.text), Some("All fields are required!".to_string()));
    }

    #[test]
    fn switching_tab_clears_status() {
        let mut state = state();
        state.status = Some(StatusMessage::error("boom"));
        state.switch_tab(Tab::ViewBooks);
        assert!(state.status.is_none());
    }

    #[test]
    fn search_results_are_snapshot_until_rerun() {
        let mut state = state();
        state.search_query = "dune".to_string();
        state.run_search();
        assert_eq!(state.search_results.as_ref().map(Vec::len), Some(0));

        state.library.add(Book::new("Dune", "Frank Herbert", "978-0-441-01359-3"));
        assert_eq!(state.search_results.as_ref().map(Vec::len), Some(0));

        state.run_search();
        assert_eq!(state.search_results.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn clear_search_forgets_results() {
        let mut state = state();
        state.search_query = "the".to_string();
        state.run_search();
        state.clear_search();

        assert!(state.search_query.is_empty());
        assert!(state.search_results.is_none());
    }

    #[test]
    fn visible_window_keeps_selection_in_view() {
        assert_eq!(AppState::visible_window(15, 0, 5), (0, 5));
        assert_eq!(AppState::visible_window(15, 7, 5), (5, 10));
        assert_eq!(AppState::visible_window(15, 14, 5), (10, 15));
        assert_eq!(AppState::visible_window(3, 2, 10), (0, 3));
        assert_eq!(AppState::visible_window(0, 0, 4), (0, 0));
    }

    #[test]
    fn view_tab_viewmodel_lists_books() {
        let mut state = state();
        state.switch_tab(Tab::ViewBooks);
        state.view_selected = 1;

        let vm = state.compute_viewmodel(40, 100);

        assert_eq!(vm.header.title, " View Books (15) ");
        assert!(vm.tabs[2].is_active);
        let Body::Table(table) = vm.body else {
            panic!("view tab renders a table");
        };
        assert_eq!(table.rows.len(), 15);
        assert_eq!(table.selected_index, 1);
        assert!(table.rows[1].is_selected);
        assert_eq!(table.rows[1].title, "1984");
        assert!(table.empty_state.is_none());
    }

    #[test]
    fn short_pane_windows_the_table() {
        let mut state = state();
        state.switch_tab(Tab::ViewBooks);
        state.view_selected = 14;

        let vm = state.compute_viewmodel(14, 100);

        let Body::Table(table) = vm.body else {
            panic!("view tab renders a table");
        };
        assert_eq!(table.rows.len(), 5);
        assert_eq!(table.rows.last().map(|r| r.title.as_str()), Some("Great Expectations"));
        assert_eq!(table.selected_index, 4);
    }

    #[test]
    fn search_viewmodel_highlights_last_query() {
        let mut state = state();
        state.switch_tab(Tab::SearchBooks);
        state.search_query = "orwell".to_string();
        state.run_search();
        state.search_query.push('x');

        let vm = state.compute_viewmodel(30, 100);

        let Body::Search { search_bar, results } = vm.body else {
            panic!("search tab renders a search body");
        };
        assert_eq!(search_bar.query, "orwellx");
        assert_eq!(results.rows.len(), 1);
        assert_eq!(results.rows[0].author_highlights, vec![(7, 13)]);
        assert!(results.rows[0].title_highlights.is_empty());
    }

    #[test]
    fn search_viewmodel_empty_states() {
        let mut state = state();
        state.switch_tab(Tab::SearchBooks);

        let vm = state.compute_viewmodel(30, 100);
        let Body::Search { results, .. } = vm.body else {
            panic!("search tab renders a search body");
        };
        assert_eq!(results.empty_state.map(|e| e.message), Some("Type a title or author".to_string()));

        state.search_query = "zzz".to_string();
        state.run_search();
        let vm = state.compute_viewmodel(30, 100);
        let Body::Search { results, .. } = vm.body else {
            panic!("search tab renders a search body");
        };
        assert_eq!(results.empty_state.map(|e| e.message), Some("No books found".to_string()));
        assert_eq!(vm.header.title, " Search Books (0) ");
    }

    #[test]
    fn form_viewmodel_marks_focus() {
        let mut state = state();
        state.switch_tab(Tab::AddBook);
        state.form.push('D');
        state.form.focus_next();

        let vm = state.compute_viewmodel(24, 80);

        let Body::Form(form) = vm.body else {
            panic!("add tab renders a form");
        };
        let labels: Vec<&str> = form.fields.iter().map(|f| f.label.as_str()).collect();
        assert_eq!(labels, vec!["Title:", "Author:", "ISBN:"]);
        assert_eq!(form.fields[0].value, "D");
        assert!(form.fields[1].is_focused);
    }

    #[test]
    fn status_flows_into_viewmodel() {
        let mut state = state();
        state.status = Some(StatusMessage::error("All fields are required!"));

        let vm = state.compute_viewmodel(24, 80);
        let status = vm.status.expect("status present");
        assert!(status.is_error);
        assert_eq!(status.message, "All fields are required!");
    }

    #[test]
    fn narrow_pane_truncates_long_titles() {
        let mut state = AppState::new(
            std::iter::once(Book::new("A".repeat(60), "Someone", "1")).collect(),
            Theme::default(),
        );
        state.switch_tab(Tab::ViewBooks);

        let vm = state.compute_viewmodel(24, 60);
        let Body::Table(table) = vm.body else {
            panic!("view tab renders a table");
        };
        assert!(table.rows[0].title.ends_with("..."));
        assert!(table.rows[0].title.chars().count() < table.columns.title);
    }
}
