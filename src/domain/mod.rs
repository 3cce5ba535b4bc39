//! Domain layer for the Bookshelf plugin.
//!
//! Holds the book record, the collection manager that owns the book list, and
//! the crate's error type. Nothing in here knows about Zellij, rendering or
//! key handling.
//!
//! # Organization
//!
//! - [`book`]: the `Book` value type
//! - [`library`]: the `Library` collection manager and the seed set
//! - [`error`]: error types and result alias
//!
//! # Examples
//!
//! ```
//! use bookshelf::domain::{Book, Library};
//!
//! let mut library = Library::seeded();
//! library.add(Book::new("Dune", "Frank Herbert", "978-0-441-01359-3"));
//! assert_eq!(library.search("herbert").len(), 1);
//! ```

pub mod book;
pub mod error;
pub mod library;

pub use book::{fold_case, Book};
pub use error::{BookshelfError, Result};
pub use library::{seed_books, Library};
