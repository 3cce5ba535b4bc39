//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler mutates [`AppState`](crate::app::AppState) directly for
//! everything that stays inside the plugin (tab changes, form edits, library
//! appends). Anything that has to reach the host goes out as an [`Action`]
//! and is executed by `main.rs`.
//!
//! # Example
//!
//! ```rust
//! use bookshelf::app::{handle_event, Action, AppState, Event};
//! use bookshelf::{Library, Theme};
//!
//! let mut state = AppState::new(Library::seeded(), Theme::default());
//! let (_, actions) = handle_event(&mut state, &Event::CloseFocus)?;
//! assert_eq!(actions, vec![Action::CloseFocus]);
//! # Ok::<(), bookshelf::BookshelfError>(())
//! ```

/// Commands executed by the plugin runtime after an event is handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    ///
    /// Sent when the user presses `q` or Esc outside a text input.
    CloseFocus,
}
