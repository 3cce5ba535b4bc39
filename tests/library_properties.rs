//! Collection-level behavior of `Library` through the public API only.

use bookshelf::domain::seed_books;
use bookshelf::{Book, Library};

fn dune() -> Book {
    Book::new("Dune", "Frank Herbert", "978-0-441-01359-3")
}

fn titles(books: &[&Book]) -> Vec<String> {
    books.iter().map(|b| b.title.clone()).collect()
}

fn is_subsequence(needle: &[&Book], haystack: &[Book]) -> bool {
    let mut rest = haystack.iter();
    needle.iter().all(|wanted| rest.any(|b| b == *wanted))
}

#[test]
fn view_all_is_seed_then_adds_in_call_order() {
    let added = vec![
        dune(),
        Book::new("Beloved", "Toni Morrison", "978-1-4000-3341-6"),
        dune(),
    ];

    let mut library = Library::seeded();
    for book in &added {
        library.add(book.clone());
    }

    let expected: Vec<Book> = seed_books().into_iter().chain(added).collect();
    assert_eq!(library.view_all(), expected.as_slice());
}

#[test]
fn empty_query_returns_everything_in_order() {
    let library = Library::seeded();
    let all: Vec<&Book> = library.view_all().iter().collect();
    assert_eq!(library.search(""), all);
}

#[test]
fn search_is_always_an_ordered_subset() {
    let mut library = Library::seeded();
    library.add(dune());

    for query in ["the", "an", "e", "fyodor", "DOSTOEVSKY", "x", "978", "  "] {
        let results = library.search(query);
        assert!(
            is_subsequence(&results, library.view_all()),
            "results for {query:?} are not a subsequence"
        );
    }
}

#[test]
fn every_title_and_author_substring_finds_its_book() {
    let library = Library::seeded();

    for book in library.view_all() {
        for text in [&book.title, &book.author] {
            let chars: Vec<char> = text.chars().collect();
            let start = chars.len() / 3;
            let end = (start + 4).min(chars.len());
            let fragment: String = chars[start..end].iter().collect();

            for query in [fragment.to_uppercase(), fragment.to_lowercase(), text.clone()] {
                assert!(
                    library.search(&query).contains(&book),
                    "{query:?} did not find {}",
                    book.title
                );
            }
        }
    }
}

#[test]
fn search_ignores_case() {
    let library = Library::seeded();
    assert_eq!(library.search("orwell"), library.search("ORWELL"));
    assert_eq!(library.search("tHe"), library.search("the"));
}

#[test]
fn orwell_finds_exactly_1984() {
    let library = Library::seeded();
    assert_eq!(
        library.search("Orwell"),
        vec![&Book::new("1984", "George Orwell", "978-0-452-28423-4")]
    );
}

#[test]
fn the_matches_titles_containing_it_in_seed_order() {
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
fn isbn_is_not_searched() {
    let library = Library::seeded();
    assert!(library.search("978-0-452").is_empty());
}

#[test]
fn added_book_is_last_and_searchable() {
    let mut library = Library::seeded();
    library.add(dune());

    assert_eq!(library.len(), 16);
    assert_eq!(library.view_all().last(), Some(&dune()));
    assert_eq!(library.search("Dune"), vec![&dune()]);
}

#[test]
fn duplicates_are_kept() {
    let mut library = Library::new();
    library.add(dune());
    library.add(dune());

    assert_eq!(library.len(), 2);
    assert_eq!(library.search("herbert").len(), 2);
}

#[test]
fn collects_from_iterator() {
    let library: Library = seed_books().into_iter().take(2).collect();
    assert_eq!(titles(&library.search("")), vec!["To Kill a Mockingbird", "1984"]);
}
