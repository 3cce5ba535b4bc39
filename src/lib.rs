//! Bookshelf: a Zellij plugin for keeping a small list of books.
//!
//! Bookshelf shows a four-tab terminal UI:
//! - **Home**: welcome screen with the collection size
//! - **Add Book**: title/author/ISBN form; all three fields are required
//! - **View Books**: the whole collection as a table, in insertion order
//! - **Search Books**: case-insensitive substring search over titles and authors
//!
//! The collection lives in memory only and starts with fifteen seed books.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Event handling
//! │  - Tabs and form state                              │
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                     │
//! ┌───────────────────────┐         ┌───────────────────────┐
//! │ UI Layer (ui/)        │         │ Domain Layer (domain/)│
//! │ - Rendering           │         │ - Book                │
//! │ - Theming             │         │ - Library (add, view, │
//! │ - Components          │         │   search)             │
//! └───────────────────────┘         └───────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing to a rotating JSON file    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/bookshelf.wasm" {
//!         theme "catppuccin-latte"
//!         start_tab "search"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Basic Usage (Library)
//!
//! ```rust
//! use bookshelf::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! for event in [Event::NextTab, Event::Char('x'), Event::Submit] {
//!     let (_should_render, _actions) = handle_event(&mut state, &event)?;
//! }
//! assert_eq!(state.library.len(), 15);
//! # Ok::<(), bookshelf::BookshelfError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, FormField, Tab};
pub use domain::{Book, BookshelfError, Library, Result};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration system.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. `~` is resolved against the
    /// sandbox host directory.
    pub theme_file: Option<String>,

    /// Tracing filter directive (`trace`, `debug`, `info`, ...). Tracing
    /// is only installed when this is set.
    pub trace_level: Option<String>,

    /// Tab shown when the plugin opens. Default: Home.
    pub start_tab: Tab,
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Unknown keys are ignored; empty strings count as unset; an
    /// unrecognised `start_tab` falls back to Home.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use bookshelf::{Config, Tab};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("theme".to_string(), "catppuccin-latte".to_string());
    /// map.insert("start_tab".to_string(), "view".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
    /// assert_eq!(config.start_tab, Tab::ViewBooks);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let non_empty = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let start_tab = non_empty("start_tab")
            .and_then(|value| {
                parse_start_tab(&value)
                    .map_err(|e| tracing::debug!(error = %e, "using home tab"))
                    .ok()
            })
            .unwrap_or_default();

        Self {
            theme_name: non_empty("theme"),
            theme_file: non_empty("theme_file"),
            trace_level: non_empty("trace_level"),
            start_tab,
        }
    }

    /// Resolves the configured theme, falling back to the default theme.
    ///
    /// `theme_file` wins over `theme_name`. Load failures are logged at debug
    /// level and never fatal.
    #[must_use]
    pub fn load_theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            let path = infrastructure::expand_tilde(theme_file);
            return Theme::from_file(&path).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %path, error = %e, "failed to load theme from file, using default");
                Theme::default()
            });
        }

        self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
            Theme::from_name(theme_name).unwrap_or_else(|| {
                tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

/// Parses a `start_tab` value (`home`, `add`, `view` or `search`).
///
/// # Errors
///
/// Returns [`BookshelfError::Config`] naming the rejected value.
pub fn parse_start_tab(value: &str) -> Result<Tab> {
    Tab::from_config(value).ok_or_else(|| {
        BookshelfError::Config(format!(
            "unknown start_tab \"{value}\", expected home, add, view or search"
        ))
    })
}

/// Builds the initial application state.
///
/// Seeds the library with the fifteen starter books, loads the theme and
/// opens on the configured tab.
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing bookshelf plugin");

    let mut state = AppState::new(Library::seeded(), config.load_theme());
    state.active_tab = config.start_tab;

    tracing::debug!(books = state.library.len(), tab = ?state.active_tab, "bookshelf initialized");
    state
}
