//! Top-level rendering coordinator.
//!
//! Rendering is two steps: compute the view model from state, then hand it to
//! the component layer.
//!
//! # Example
//!
//! ```rust
//! use bookshelf::app::AppState;
//! use bookshelf::ui::render;
//! use bookshelf::{Library, Theme};
//!
//! let state = AppState::new(Library::seeded(), Theme::default());
//! render(&state, 24, 80); // writes ANSI output to stdout
//! ```

use crate::app::AppState;
use crate::ui::components;

/// Renders the plugin UI to stdout for a pane of `rows` x `cols` cells.
///
/// Uses absolute cursor positioning; does not clear the screen.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);
    components::render_frame(&viewmodel, &state.theme, cols, rows);
}
