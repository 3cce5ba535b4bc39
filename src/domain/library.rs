//! The book collection manager.
//!
//! [`Library`] exclusively owns an insertion-ordered list of [`Book`]s. It
//! exposes exactly three operations: [`add`](Library::add),
//! [`view_all`](Library::view_all) and [`search`](Library::search). None of
//! them can fail.

use super::book::{fold_case, Book};

/// Seed records loaded at startup, in display order.
const SEED_BOOKS: [(&str, &str, &str); 15] = [
    ("To Kill a Mockingbird", "Harper Lee", "978-0-06-112008-4"),
    ("1984", "George Orwell", "978-0-452-28423-4"),
    ("Pride and Prejudice", "Jane Austen", "978-0-19-953556-9"),
    ("The Great Gatsby", "F. Scott Fitzgerald", "978-0-7432-7356-5"),
    ("Moby Dick", "Herman Melville", "978-0-14-243724-7"),
    ("War and Peace", "Leo Tolstoy", "978-0-14-303999-0"),
    ("Ulysses", "James Joyce", "978-0-679-72232-9"),
    ("The Odyssey", "Homer", "978-0-14-026886-7"),
    ("Madame Bovary", "Gustave Flaubert", "978-0-14-044912-9"),
    ("The Divine Comedy", "Dante Alighieri", "978-0-14-243722-3"),
    ("The Brothers Karamazov", "Fyodor Dostoevsky", "978-0-14-044924-2"),
    ("Crime and Punishment", "Fyodor Dostoevsky", "978-0-14-044913-6"),
    ("The Catcher in the Rye", "J.D. Salinger", "978-0-316-76948-0"),
    ("Wuthering Heights", "Emily Bronte", "978-0-14-143955-6"),
    ("Great Expectations", "Charles Dickens", "978-0-14-143956-3"),
];

/// Returns the fifteen seed books in order.
#[must_use]
pub fn seed_books() -> Vec<Book> {
    SEED_BOOKS
        .iter()
        .map(|&(title, author, isbn)| Book::new(title, author, isbn))
        .collect()
}

/// Ordered, append-only collection of books.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Library {
    books: Vec<Book>,
}

impl Library {
    /// Creates an empty library.
    #[must_use]
    pub const fn new() -> Self {
        Self { books: Vec::new() }
    }

    /// Creates a library pre-populated with the seed set.
    ///
    /// ```
    /// use bookshelf::Library;
    ///
    /// let library = Library::seeded();
    /// assert_eq!(library.len(), 15);
    /// assert_eq!(library.view_all()[1].title, "1984");
    /// ```
    #[must_use]
    pub fn seeded() -> Self {
        seed_books().into_iter().collect()
    }

    /// Appends a book to the end of the collection.
    ///
    /// Field contents are not checked; duplicates are kept.
    pub fn add(&mut self, book: Book) {
        tracing::debug!(title = %book.title, author = %book.author, "adding book");
        self.books.push(book);
    }

    /// Returns every book in insertion order.
    #[must_use]
    pub fn view_all(&self) -> &[Book] {
        &self.books
    }

    /// Returns the books whose title or author contains `query`, ignoring case.
    ///
    /// Results keep insertion order. An empty query matches every book.
    ///
    /// ```
    /// use bookshelf::Library;
    ///
    /// let library = Library::seeded();
    /// let hits = library.search("ORWELL");
    /// assert_eq!(hits.len(), 1);
    /// assert_eq!(hits[0].title, "1984");
    /// ```
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Book> {
        let _span = tracing::debug_span!("library_search", query_len = query.len()).entered();

        let needle = fold_case(query);
        let hits: Vec<&Book> = self
            .books
            .iter()
            .filter(|book| book.matches_folded(&needle))
            .collect();

        tracing::debug!(total = self.books.len(), hits = hits.len(), "search complete");
        hits
    }

    /// Number of books in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl FromIterator<Book> for Library {
    fn from_iter<I: IntoIterator<Item = Book>>(iter: I) -> Self {
        Self {
            books: iter.into_iter().collect(),
        }
    }
}

impl Extend<Book> for Library {
    fn extend<I: IntoIterator<Item = Book>>(&mut self, iter: I) {
        for book in iter {
            self.add(book);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(books: &[&Book]) -> Vec<String> {
        books.iter().map(|b| b.title.clone()).collect()
    }

    #[test]
    fn seeded_library_keeps_seed_order() {
        let library = Library::seeded();
        let all = library.view_all();

        assert_eq!(all.len(), 15);
        assert_eq!(all[0].title, "To Kill a Mockingbird");
        assert_eq!(all[14].title, "Great Expectations");
        assert_eq!(all[11].author, "Fyodor Dostoevsky");
    }

    #[test]
    fn add_appends_at_end() {
        let mut library = Library::seeded();
        let dune = Book::new("Dune", "Frank Herbert", "978-0-441-01359-3");

        library.add(dune.clone());

        assert_eq!(library.len(), 16);
        assert_eq!(library.view_all().last(), Some(&dune));
        assert_eq!(library.search("Dune"), vec![&dune]);
    }

    #[test]
    fn duplicates_are_kept() {
        let mut library = Library::new();
        let book = Book::new("Same", "Author", "1");

        library.add(book.clone());
        library.add(book.clone());

        assert_eq!(library.view_all(), &[book.clone(), book]);
    }

    #[test]
    fn search_orwell_finds_single_record() {
        let library = Library::seeded();
        let hits = library.search("Orwell");

        assert_eq!(hits, vec![&Book::new("1984", "George Orwell", "978-0-452-28423-4")]);
    }

    #[test]
    fn search_the_matches_titles_and_inner_words_in_order() {
        let library = Library::seeded();

        assert_eq!(
            titles(&library.search("the")),
            vec![
                "The Great Gatsby",
                "The Odyssey",
                "The Divine Comedy",
                "The Brothers Karamazov",
                "The Catcher in the Rye",
                "Wuthering Heights",
            ]
        );
    }

    #[test]
    fn search_matches_author_field() {
        let library = Library::seeded();
        assert_eq!(
            titles(&library.search("dostoevsky")),
            vec!["The Brothers Karamazov", "Crime and Punishment"]
        );
    }

    #[test]
    fn search_does_not_look_at_isbn() {
        let library = Library::seeded();
        assert!(library.search("978-0").is_empty());
    }

    #[test]
    fn empty_query_returns_everything() {
        let library = Library::seeded();
        let all: Vec<&Book> = library.view_all().iter().collect();

        assert_eq!(library.search(""), all);
    }

    #[test]
    fn search_is_case_insensitive() {
        let library = Library::seeded();
        assert_eq!(library.search("orwell"), library.search("ORWELL"));
        assert_eq!(library.search("tHe"), library.search("THE"));
    }

    #[test]
    fn empty_library_search_is_empty() {
        let library = Library::new();
        assert!(library.is_empty());
        assert!(library.search("").is_empty());
    }

    #[test]
    fn extend_appends_in_order() {
        let mut library = Library::new();
        library.extend(vec![Book::new("A", "x", "1"), Book::new("B", "y", "2")]);

        let titles: Vec<&str> = library.view_all().iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B"]);
    }
}
