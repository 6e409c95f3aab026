//! Report why a menu could not be built.
use std::fmt;

/// The role a required element plays in a menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// The panel that is shown and hidden.
    Menu,

    /// The control that toggles the panel.
    Toggle,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Role::Menu => "menu",
            Role::Toggle => "toggle",
        })
    }
}

/// An error that prevents a menu from being built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A required element could not be located.
    #[error("no {role} element found with id `{id}`")]
    MissingElement {
        /// The role of the missing element.
        role: Role,
        /// The identifier that was looked up.
        id: String,
    },

    /// The menu could be opened but never closed.
    #[error(
        "no menu close option selected: define a close control or enable closing on outside clicks"
    )]
    MissingCloseOption,

    /// The settings document could not be parsed.
    #[cfg(feature = "serde")]
    #[error("invalid settings: {0}")]
    Settings(String),
}
