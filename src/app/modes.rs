//! Tab and form-focus state types.
//!
//! These enums decide which keybindings are active and what the body of the
//! UI shows. The plugin is always on exactly one [`Tab`]; on the add-book tab
//! exactly one [`FormField`] has focus.
//!
//! # Example
//!
//! ```rust
//! use bookshelf::app::modes::{FormField, Tab};
//!
//! assert_eq!(Tab::Home.next(), Tab::AddBook);
//! assert_eq!(Tab::Home.prev(), Tab::SearchBooks);
//! assert_eq!(FormField::Isbn.next(), FormField::Title);
//! ```

/// The four top-level views, in tab-bar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    /// Welcome screen.
    #[default]
    Home,
    /// Three-field form for appending a book.
    AddBook,
    /// Table of the whole collection.
    ViewBooks,
    /// Query box plus results table.
    SearchBooks,
}

impl Tab {
    /// Every tab in display order.
    pub const ALL: [Self; 4] = [Self::Home, Self::AddBook, Self::ViewBooks, Self::SearchBooks];

    /// Label shown in the tab bar.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::AddBook => "Add Book",
            Self::ViewBooks => "View Books",
            Self::SearchBooks => "Search Books",
        }
    }

    /// Position of this tab in [`Tab::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Home => 0,
            Self::AddBook => 1,
            Self::ViewBooks => 2,
            Self::SearchBooks => 3,
        }
    }

    /// The tab to the right, wrapping to the first.
    #[must_use]
    pub const fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The tab to the left, wrapping to the last.
    #[must_use]
    pub const fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Parses the `start_tab` configuration value.
    ///
    /// Accepts the short names `home`, `add`, `view` and `search`, case-insensitively.
    #[must_use]
    pub fn from_config(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "home" => Some(Self::Home),
            "add" => Some(Self::AddBook),
            "view" => Some(Self::ViewBooks),
            "search" => Some(Self::SearchBooks),
            _ => None,
        }
    }

    /// Whether typed characters are captured as text input on this tab.
    #[must_use]
    pub const fn captures_text(self) -> bool {
        matches!(self, Self::AddBook | Self::SearchBooks)
    }
}

/// Fields of the add-book form, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Title,
    Author,
    Isbn,
}

impl FormField {
    /// Every field in display order.
    pub const ALL: [Self; 3] = [Self::Title, Self::Author, Self::Isbn];

    /// Label rendered next to the input box.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Title => "Title:",
            Self::Author => "Author:",
            Self::Isbn => "ISBN:",
        }
    }

    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Title => Self::Author,
            Self::Author => Self::Isbn,
            Self::Isbn => Self::Title,
        }
    }

    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Title => Self::Isbn,
            Self::Author => Self::Title,
            Self::Isbn => Self::Author,
        }
    }
}
