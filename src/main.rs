//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the Bookshelf library and the Zellij plugin
//! system. Everything Zellij-specific lives here: key translation, event
//! subscription and executing [`Action`]s against the host. The bindings
//! themselves live in `bookshelf::app::keys`.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, build the seeded `AppState`
//! 2. **Subscribe**: Register for `Key` events
//! 3. **Update**: Translate keys to library events and run `handle_event`
//! 4. **Render**: Call the library render function
//!
//! # Keybindings
//!
//! Everywhere:
//! - `Tab` / `Shift+Tab`: Next / previous tab
//! - `Ctrl+n` / `Ctrl+p`: Move down / up
//! - `Down` / `Up`: Move down / up (field focus on the Add tab)
//!
//! Home and View tabs:
//! - `j` / `k`: Move down / up
//! - `1`-`4`: Jump to a tab
//! - `q` / `Esc`: Close plugin
//!
//! Add and Search tabs:
//! - Characters type into the focused input, `Backspace` deletes
//! - `Enter`: Add the book / run the search
//! - `Esc`: Clear the status line / clear the search

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use bookshelf::app::{map_key, Key, KeyInput};
use bookshelf::{handle_event, Action, Config, Event};

register_plugin!(State);

/// Plugin state wrapper around the library's `AppState`.
struct State {
    app: bookshelf::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: bookshelf::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    /// Parses configuration, installs tracing and subscribes to key events.
    ///
    /// Bookshelf needs no host permissions: it neither reads files outside the
    /// theme path nor touches sessions.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        bookshelf::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(
            theme = ?config.theme_name,
            theme_file = ?config.theme_file,
            start_tab = ?config.start_tab,
            "parsed configuration"
        );
        self.app = bookshelf::initialize(&config);

        subscribe(&[EventType::Key]);
        tracing::debug!("plugin load complete");
    }

    /// Translates Zellij events to library events and runs the handler.
    ///
    /// Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let zellij_tile::prelude::Event::Key(key) = event else {
            return false;
        };

        let span = tracing::debug_span!("plugin_update_event", key = ?key.bare_key);
        let _guard = span.entered();

        let Some(our_event) = self.map_key_event(&key) else {
            return false;
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    Self::execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        bookshelf::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Translates a Zellij key press and maps it through the tab's bindings.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        let bound = match key.bare_key {
            BareKey::Char(c) => Key::Char(c),
            BareKey::Up => Key::Up,
            BareKey::Down => Key::Down,
            BareKey::Enter => Key::Enter,
            BareKey::Esc => Key::Esc,
            BareKey::Backspace => Key::Backspace,
            BareKey::Tab => Key::Tab,
            _ => return None,
        };

        map_key(
            self.app.active_tab,
            KeyInput {
                key: bound,
                ctrl: key.has_modifiers(&[KeyModifier::Ctrl]),
                shift: key.has_modifiers(&[KeyModifier::Shift]),
            },
        )
    }

    fn execute_action(action: &Action) {
        let _span = tracing::debug_span!("execute_action", action = ?action).entered();

        match action {
            Action::CloseFocus => {
                tracing::debug!("hiding plugin pane");
                hide_self();
            }
        }
    }
}
