//! User interface rendering layer with component-based architecture.
//!
//! Transforms view models into ANSI-styled output through composable
//! components.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: view model types representing renderable UI state
//! - [`renderer`]: top-level rendering entry point
//! - [`components`]: tab bar, header, form, search box, table, footer
//! - [`helpers`]: highlighting, truncation and cursor utilities
//! - [`theme`]: color schemes and ANSI escape generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    Body, ColumnWidths, DisplayItem, EmptyState, FooterInfo, FormFieldItem, FormInfo, HeaderInfo,
    SearchBarInfo, StatusInfo, TabItem, TableInfo, UIViewModel,
};
