//! Keybindings: turning key presses into [`Event`]s.
//!
//! The plugin runtime converts Zellij's key type into a [`KeyInput`] and
//! calls [`map_key`]. Which event a key produces depends on the active tab:
//! on the Add and Search tabs every character is text, elsewhere some
//! letters and digits are shortcuts.
//!
//! ```rust
//! use bookshelf::app::keys::{map_key, Key, KeyInput};
//! use bookshelf::{Event, Tab};
//!
//! assert_eq!(map_key(Tab::ViewBooks, KeyInput::plain(Key::Char('q'))), Some(Event::CloseFocus));
//! assert_eq!(map_key(Tab::SearchBooks, KeyInput::plain(Key::Char('q'))), Some(Event::Char('q')));
//! ```

use super::handler::Event;
use super::modes::Tab;

/// Keys the plugin reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Up,
    Down,
    Enter,
    Esc,
    Backspace,
    Tab,
}

/// A key press with the modifiers that matter for bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInput {
    pub key: Key,
    pub ctrl: bool,
    pub shift: bool,
}

impl KeyInput {
    #[must_use]
    pub const fn plain(key: Key) -> Self {
        Self {
            key,
            ctrl: false,
            shift: false,
        }
    }

    #[must_use]
    pub const fn ctrl(key: Key) -> Self {
        Self {
            key,
            ctrl: true,
            shift: false,
        }
    }

    #[must_use]
    pub const fn shift(key: Key) -> Self {
        Self {
            key,
            ctrl: false,
            shift: true,
        }
    }
}

/// Maps a key press on `tab` to an event, or `None` if the key is unbound.
#[must_use]
pub fn map_key(tab: Tab, input: KeyInput) -> Option<Event> {
    if input.ctrl {
        return match input.key {
            Key::Char('n') => Some(Event::KeyDown),
            Key::Char('p') => Some(Event::KeyUp),
            _ => None,
        };
    }

    Some(match input.key {
        Key::Tab if input.shift => Event::PrevTab,
        Key::Tab => Event::NextTab,
        Key::Down => Event::KeyDown,
        Key::Up => Event::KeyUp,
        Key::Esc => Event::Escape,
        Key::Enter => Event::Submit,
        Key::Backspace => Event::Backspace,
        Key::Char(c) if tab.captures_text() => Event::Char(c),
        Key::Char('j') => Event::KeyDown,
        Key::Char('k') => Event::KeyUp,
        Key::Char('q') => Event::CloseFocus,
        Key::Char(c @ '1'..='4') => {
            let index = c.to_digit(10)? as usize - 1;
            Event::SelectTab(*Tab::ALL.get(index)?)
        }
        Key::Char(_) => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT_TABS: [Tab; 2] = [Tab::AddBook, Tab::SearchBooks];
    const BROWSE_TABS: [Tab; 2] = [Tab::Home, Tab::ViewBooks];

    fn plain(tab: Tab, c: char) -> Option<Event> {
        map_key(tab, KeyInput::plain(Key::Char(c)))
    }

    #[test]
    fn shortcut_letters_are_text_on_input_tabs() {
        for tab in TEXT_TABS {
            for c in ['j', 'k', 'q', '1', '4', 'Z'] {
                assert_eq!(plain(tab, c), Some(Event::Char(c)), "{c:?} on {tab:?}");
            }
        }
    }

    #[test]
    fn q_closes_on_browse_tabs() {
        for tab in BROWSE_TABS {
            assert_eq!(plain(tab, 'q'), Some(Event::CloseFocus));
        }
    }

    #[test]
    fn j_and_k_move_on_browse_tabs() {
        for tab in BROWSE_TABS {
            assert_eq!(plain(tab, 'j'), Some(Event::KeyDown));
            assert_eq!(plain(tab, 'k'), Some(Event::KeyUp));
        }
    }

    #[test]
    fn digits_jump_to_tabs() {
        assert_eq!(plain(Tab::Home, '1'), Some(Event::SelectTab(Tab::Home)));
        assert_eq!(plain(Tab::Home, '2'), Some(Event::SelectTab(Tab::AddBook)));
        assert_eq!(plain(Tab::ViewBooks, '3'), Some(Event::SelectTab(Tab::ViewBooks)));
        assert_eq!(plain(Tab::ViewBooks, '4'), Some(Event::SelectTab(Tab::SearchBooks)));
        assert_eq!(plain(Tab::Home, '5'), None);
        assert_eq!(plain(Tab::Home, '0'), None);
    }

    #[test]
    fn other_letters_are_unbound_on_browse_tabs() {
        assert_eq!(plain(Tab::Home, 'x'), None);
        assert_eq!(plain(Tab::ViewBooks, 'Q'), None);
    }

    #[test]
    fn ctrl_n_and_p_move_everywhere() {
        for tab in Tab::ALL {
            assert_eq!(map_key(tab, KeyInput::ctrl(Key::Char('n'))), Some(Event::KeyDown));
            assert_eq!(map_key(tab, KeyInput::ctrl(Key::Char('p'))), Some(Event::KeyUp));
            assert_eq!(map_key(tab, KeyInput::ctrl(Key::Char('q'))), None);
        }
    }

    #[test]
    fn tab_and_shift_tab_cycle() {
        for tab in Tab::ALL {
            assert_eq!(map_key(tab, KeyInput::plain(Key::Tab)), Some(Event::NextTab));
            assert_eq!(map_key(tab, KeyInput::shift(Key::Tab)), Some(Event::PrevTab));
        }
    }

    #[test]
    fn editing_keys_are_the_same_on_every_tab() {
        for tab in Tab::ALL {
            assert_eq!(map_key(tab, KeyInput::plain(Key::Up)), Some(Event::KeyUp));
            assert_eq!(map_key(tab, KeyInput::plain(Key::Down)), Some(Event::KeyDown));
            assert_eq!(map_key(tab, KeyInput::plain(Key::Enter)), Some(Event::Submit));
            assert_eq!(map_key(tab, KeyInput::plain(Key::Esc)), Some(Event::Escape));
            assert_eq!(map_key(tab, KeyInput::plain(Key::Backspace)), Some(Event::Backspace));
        }
    }

    #[test]
    fn shifted_letter_is_still_text() {
        assert_eq!(
            map_key(Tab::AddBook, KeyInput::shift(Key::Char('D'))),
            Some(Event::Char('D'))
        );
    }
}
