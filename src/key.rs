//! Key binding primitives shared by the data table components.
//!
//! A [`Binding`] groups one or more key presses with the help text shown for
//! them. Components expose their bindings through the [`KeyMap`] trait so a
//! help view can list them.
//!
//! ```rust
//! use bubbletea_datatable::key::Binding;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let next = Binding::new(vec![KeyCode::Right, KeyCode::Char('l')]).with_help("→/l", "next page");
//! let reload = Binding::new(vec![(KeyCode::Char('r'), KeyModifiers::CONTROL)]).with_help("ctrl+r", "reload");
//! let first = Binding::new(vec!["home", "g"]).with_help("g/home", "first page");
//!
//! assert_eq!(next.keys().len(), 2);
//! assert_eq!(reload.help().key, "ctrl+r");
//! assert!(first.enabled());
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key press: a key code plus the modifiers held with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key that was pressed.
    pub code: KeyCode,
    /// Modifiers held while pressing it.
    pub modifiers: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, modifiers): (KeyCode, KeyModifiers)) -> Self {
        Self { code, modifiers }
    }
}

impl From<&str> for KeyPress {
    /// Parses names such as `"pgup"`, `"ctrl+r"`, `"G"` or `"left"`.
    ///
    /// Unknown multi-character names fall back to [`KeyCode::Null`], which
    /// never matches a real key event.
    fn from(name: &str) -> Self {
        let (modifiers, key) = match name.strip_prefix("ctrl+") {
            Some(rest) => (KeyModifiers::CONTROL, rest),
            None => match name.strip_prefix("alt+") {
                Some(rest) => (KeyModifiers::ALT, rest),
                None => (KeyModifiers::NONE, name),
            },
        };

        let code = match key {
            "enter" => KeyCode::Enter,
            "esc" => KeyCode::Esc,
            "tab" => KeyCode::Tab,
            "backspace" => KeyCode::Backspace,
            "space" => KeyCode::Char(' '),
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "pgup" => KeyCode::PageUp,
            "pgdown" => KeyCode::PageDown,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyCode::Char(c),
                    _ => KeyCode::Null,
                }
            }
        };

        Self { code, modifiers }
    }
}

/// Help text attached to a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short key label, e.g. `"←/h"`.
    pub key: String,
    /// What the binding does.
    pub desc: String,
}

/// A set of key presses that trigger the same action.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates an enabled binding from anything convertible into [`KeyPress`].
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            disabled: false,
        }
    }

    /// Sets the help label and description (builder pattern).
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Returns the key presses bound to this action.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Returns the help text for this binding.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// A binding is enabled when it is not disabled and has at least one key.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Enables or disables the binding.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Reports whether a key message triggers this binding.
    ///
    /// Character keys compare case-sensitively and ignore the shift modifier,
    /// so `"G"` matches a shifted `g` press reported as `Char('G')`.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        if !self.enabled() {
            return false;
        }
        self.keys.iter().any(|press| {
            if press.code != msg.key {
                return false;
            }
            match press.code {
                KeyCode::Char(_) => press.modifiers == msg.modifiers.difference(KeyModifiers::SHIFT),
                _ => press.modifiers == msg.modifiers,
            }
        })
    }
}

/// Implemented by components that expose key bindings for help views.
pub trait KeyMap {
    /// Bindings for the compact, single-line help view.
    fn short_help(&self) -> Vec<&Binding>;

    /// Bindings grouped in columns for the expanded help view.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}
