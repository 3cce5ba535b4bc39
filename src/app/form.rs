//! The add-book form.
//!
//! [`BookForm`] holds the three text inputs of the "Add Book" tab and the
//! currently focused field. Submitting turns the inputs into a [`Book`] when
//! all of them are filled in.

use super::modes::FormField;
use crate::domain::{Book, BookshelfError, Result};

/// Message shown when a submission has an empty field.
pub const MISSING_FIELDS_MESSAGE: &str = "All fields are required!";

/// Text inputs for a new book.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookForm {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub focus: FormField,
}

impl BookForm {
    /// Current text of `field`.
    #[must_use]
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Author => &self.author,
            FormField::Isbn => &self.isbn,
        }
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::Title => &mut self.title,
            FormField::Author => &mut self.author,
            FormField::Isbn => &mut self.isbn,
        }
    }

    /// Appends a character to the focused field.
    pub fn push(&mut self, c: char) {
        self.focused_mut().push(c);
    }

    /// Removes the last character of the focused field, returning whether
    /// anything was removed.
    pub fn pop(&mut self) -> bool {
        self.focused_mut().pop().is_some()
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Empties every field and moves focus back to the title.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Builds a book from the current inputs.
    ///
    /// The form is left untouched either way; the caller clears it after a
    /// successful add.
    ///
    /// # Errors
    ///
    /// Returns [`BookshelfError::Validation`] if any field is the empty string.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookshelf::app::BookForm;
    ///
    /// let mut form = BookForm::default();
    /// assert!(form.submit().is_err());
    ///
    /// form.title = "Dune".into();
    /// form.author = "Frank Herbert".into();
    /// form.isbn = "978-0-441-01359-3".into();
    /// assert_eq!(form.submit().unwrap().title, "Dune");
    /// ```
    pub fn submit(&self) -> Result<Book> {
        if FormField::ALL.iter().any(|&field| self.value(field).is_empty()) {
            return Err(BookshelfError::Validation(MISSING_FIELDS_MESSAGE.to_string()));
        }

        Ok(Book::new(self.title.clone(), self.author.clone(), self.isbn.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> BookForm {
        BookForm {
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            isbn: "978-0-441-01359-3".to_string(),
            focus: FormField::Isbn,
        }
    }

    #[test]
    fn typing_goes_to_focused_field() {
        let mut form = BookForm::default();
        form.push('a');
        form.focus_next();
        form.push('b');
        form.focus_next();
        form.push('c');

        assert_eq!((form.title.as_str(), form.author.as_str(), form.isbn.as_str()), ("a", "b", "c"));
    }

    #[test]
    fn pop_on_empty_field_reports_nothing_removed() {
        let mut form = BookForm::default();
        assert!(!form.pop());

        form.push('x');
        assert!(form.pop());
        assert!(form.title.is_empty());
    }

    #[test]
    fn submit_requires_every_field() {
        for field in FormField::ALL {
            let mut form = filled();
            form.focus = field;
            while form.pop() {}

            match form.submit() {
                Err(BookshelfError::Validation(msg)) => assert_eq!(msg, MISSING_FIELDS_MESSAGE),
                other => panic!("expected validation error, got {other:?}"),
            }
        }
    }

    #[test]
    fn whitespace_counts_as_filled() {
        let form = BookForm {
            title: " ".to_string(),
            ..filled()
        };
        assert!(form.submit().is_ok());
    }

    #[test]
    fn submit_builds_book_and_clear_resets() {
        let mut form = filled();
        let book = form.submit().expect("form is complete");
        assert_eq!(book, Book::new("Dune", "Frank Herbert", "978-0-441-01359-3"));

        form.clear();
        assert_eq!(form, BookForm::default());
        assert_eq!(form.focus, FormField::Title);
    }
}
