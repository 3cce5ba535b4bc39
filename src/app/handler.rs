//! Event handling and state transition logic.
//!
//! [`handle_event`] is the only place where state changes in response to
//! input. The plugin runtime maps raw key presses to [`Event`]s, calls the
//! handler, re-renders if asked to, and executes the returned actions.
//!
//! # Event Types
//!
//! - **Navigation**: `NextTab`, `PrevTab`, `SelectTab`, `KeyDown`, `KeyUp`
//! - **Text input**: `Char`, `Backspace`
//! - **Commands**: `Submit`, `Escape`, `CloseFocus`
//!
//! What a text or command event means depends on the active tab: `Submit`
//! adds a book on the Add tab and runs the search on the Search tab.
//!
//! # Example
//!
//! ```rust
//! use bookshelf::app::{handle_event, AppState, Event, Tab};
//! use bookshelf::{Library, Theme};
//!
//! let mut state = AppState::new(Library::seeded(), Theme::default());
//! handle_event(&mut state, &Event::SelectTab(Tab::SearchBooks))?;
//! for c in "homer".chars() {
//!     handle_event(&mut state, &Event::Char(c))?;
//! }
//! handle_event(&mut state, &Event::Submit)?;
//! assert_eq!(state.search_results.map(|r| r.len()), Some(1));
//! # Ok::<(), bookshelf::BookshelfError>(())
//! ```

use super::modes::Tab;
use crate::app::{Action, AppState};
use crate::domain::Result;

/// Events triggered by user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Shows the tab to the right (wraps).
    NextTab,
    /// Shows the tab to the left (wraps).
    PrevTab,
    /// Jumps straight to a tab.
    SelectTab(Tab),
    /// Moves the cursor or form focus down.
    KeyDown,
    /// Moves the cursor or form focus up.
    KeyUp,
    /// Types a character into the active input.
    Char(char),
    /// Deletes the last character of the active input.
    Backspace,
    /// Adds the book (Add tab) or runs the search (Search tab).
    Submit,
    /// Clears the search (Search tab) or the status line (Add tab).
    Escape,
    /// Hides the plugin pane.
    CloseFocus,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// Returns whether the UI should re-render together with the actions to run.
///
/// # Errors
///
/// Currently never fails: form validation failures are reported through
/// the status line instead.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event, tab = ?state.active_tab).entered();

    match event {
        Event::NextTab => {
            state.switch_tab(state.active_tab.next());
            Ok((true, vec![]))
        }
        Event::PrevTab => {
            state.switch_tab(state.active_tab.prev());
            Ok((true, vec![]))
        }
        Event::SelectTab(tab) => {
            if *tab == state.active_tab {
                return Ok((false, vec![]));
            }
            state.switch_tab(*tab);
            Ok((true, vec![]))
        }
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::Char(c) => match state.active_tab {
            Tab::AddBook => {
                state.form.push(*c);
                state.status = None;
                tracing::trace!(field = ?state.form.focus, char = %c, "form input updated");
                Ok((true, vec![]))
            }
            Tab::SearchBooks => {
                state.search_query.push(*c);
                tracing::trace!(query = %state.search_query, char = %c, "search query updated");
                Ok((true, vec![]))
            }
            Tab::Home | Tab::ViewBooks => Ok((false, vec![])),
        },
        Event::Backspace => {
            let changed = match state.active_tab {
                Tab::AddBook => {
                    let removed = state.form.pop();
                    if removed {
                        state.status = None;
                    }
                    removed
                }
                Tab::SearchBooks => state.search_query.pop().is_some(),
                Tab::Home | Tab::ViewBooks => false,
            };
            Ok((changed, vec![]))
        }
        Event::Submit => match state.active_tab {
            Tab::AddBook => {
                // A rejected form is reported on the status line.
                if let Ok(book) = state.submit_form() {
                    tracing::info!(title = %book.title, total_books = state.library.len(), "book added");
                }
                Ok((true, vec![]))
            }
            Tab::SearchBooks => {
                state.run_search();
                Ok((true, vec![]))
            }
            Tab::Home | Tab::ViewBooks => Ok((false, vec![])),
        },
        Event::Escape => match state.active_tab {
            Tab::SearchBooks => {
                tracing::debug!(query = %state.search_query, "clearing search");
                state.clear_search();
                Ok((true, vec![]))
            }
            Tab::AddBook => {
                let had_status = state.status.take().is_some();
                Ok((had_status, vec![]))
            }
            Tab::Home | Tab::ViewBooks => Ok((false, vec![Action::CloseFocus])),
        },
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
    }
}
