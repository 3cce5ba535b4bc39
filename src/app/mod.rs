//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin runtime (`main.rs`) and the domain layer. Data
//! flows one way:
//!
//! ```text
//! Key press → Event → handle_event → AppState mutation → Actions → Side effects
//!                                          ↓
//!                                   compute_viewmodel → render
//! ```
//!
//! # Modules
//!
//! - [`actions`]: side effect commands emitted by the event handler
//! - [`form`]: add-book form inputs and validation
//! - [`handler`]: event processing
//! - [`keys`]: keybindings per tab
//! - [`modes`]: tab and form-focus enums
//! - [`state`]: central state container and view model computation

pub mod actions;
pub mod form;
pub mod handler;
pub mod keys;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use form::BookForm;
pub use handler::{handle_event, Event};
pub use keys::{map_key, Key, KeyInput};
pub use modes::{FormField, Tab};
pub use state::{AppState, StatusKind, StatusMessage};
