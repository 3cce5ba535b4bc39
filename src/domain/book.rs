//! Book domain model.
//!
//! A [`Book`] is a passive value: a title, an author and an identifier
//! (normally an ISBN). Two books are the same book when all three fields are
//! equal; nothing else identifies them, so duplicates are allowed.

use std::fmt;

/// A single catalog record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub isbn: String,
}

impl Book {
    /// Creates a book from its three fields.
    ///
    /// No validation happens here; the add-book form is responsible for
    /// rejecting empty fields before a `Book` is built.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookshelf::Book;
    ///
    /// let book = Book::new("Dune", "Frank Herbert", "978-0-441-01359-3");
    /// assert_eq!(book.title, "Dune");
    /// assert_eq!(book.author, "Frank Herbert");
    /// ```
    #[must_use]
    pub fn new(title: impl Into<String>, author: impl Into<String>, isbn: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
        }
    }

    /// Returns `true` if `needle` occurs in the case-folded title or author.
    ///
    /// `needle` must already be folded with [`fold_case`]. The ISBN is never
    /// searched.
    #[must_use]
    pub fn matches_folded(&self, needle: &str) -> bool {
        fold_case(&self.title).contains(needle) || fold_case(&self.author).contains(needle)
    }
}

/// Lowercases `text` one character at a time, keeping every character of
/// multi-character mappings (`'İ'` becomes `"i\u{307}"`).
///
/// Search and match highlighting both fold through this, so a highlighted
/// range always corresponds to a search hit.
///
/// ```
/// use bookshelf::domain::fold_case;
///
/// assert_eq!(fold_case("George ORWELL"), "george orwell");
/// assert_eq!(fold_case("İzmir").chars().count(), 6);
/// ```
#[must_use]
pub fn fold_case(text: &str) -> String {
    fold_case_indexed(text).map(|(c, _)| c).collect()
}

/// Folded characters of `text`, each paired with the index of the original
/// character it came from.
pub fn fold_case_indexed(text: &str) -> impl Iterator<Item = (char, usize)> + '_ {
    text.chars()
        .enumerate()
        .flat_map(|(idx, c)| c.to_lowercase().map(move |folded| (folded, idx)))
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {} ({})", self.title, self.author, self.isbn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_title_and_author_but_not_isbn() {
        let book = Book::new("1984", "George Orwell", "978-0-452-28423-4");

        assert!(book.matches_folded("198"));
        assert!(book.matches_folded("orwell"));
        assert!(book.matches_folded(""));
        assert!(!book.matches_folded("978"));
    }

    #[test]
    fn needle_is_expected_lowercase() {
        let book = Book::new("Moby Dick", "Herman Melville", "978-0-14-243724-7");

        assert!(book.matches_folded("moby"));
        assert!(!book.matches_folded("MOBY"));
    }

    #[test]
    fn expanding_lowercase_is_kept_whole() {
        let book = Book::new("İstanbul", "Orhan Pamuk", "978-1-4000-3388-1");

        assert!(book.matches_folded(&fold_case("İST")));
        assert!(book.matches_folded("i\u{307}s"));
        assert!(!book.matches_folded("ist"));
    }

    #[test]
    fn display_joins_all_fields() {
        let book = Book::new("Ulysses", "James Joyce", "978-0-679-72232-9");
        assert_eq!(book.to_string(), "Ulysses by James Joyce (978-0-679-72232-9)");
    }
}
