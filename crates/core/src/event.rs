//! Handle interactions with a menu.
use crate::{Element, Host};

/// Where a [`Listener`] is registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// The whole document; sees every interaction that is not stopped.
    Document,

    /// A single element; sees interactions on itself and its descendants.
    Element(Element),
}

/// The handler of a menu a registration is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Listener {
    /// The toggle control of the menu.
    Toggle,

    /// The explicit close control of the menu.
    Close,

    /// A submenu branch, by its index in the submenu tree.
    Branch(usize),

    /// The document-wide listener that dismisses the menu on outside interactions.
    OutsideDismiss,
}

/// The identifier of a listener registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    /// Creates a [`ListenerId`] from its raw value.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw value of the [`ListenerId`].
    #[must_use]
    pub const fn as_raw(self) -> u64 {
        self.0
    }
}

/// The propagation status of an [`Interaction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The [`Interaction`] keeps bubbling to ancestors.
    Ignored,

    /// The [`Interaction`] was captured; no ancestor will see it.
    Captured,
}

impl Status {
    /// Merges two [`Status`] into one.
    ///
    /// `Captured` takes precedence over `Ignored`:
    ///
    /// ```
    /// use lightmenu_core::event::Status;
    ///
    /// assert_eq!(Status::Ignored.merge(Status::Ignored), Status::Ignored);
    /// assert_eq!(Status::Ignored.merge(Status::Captured), Status::Captured);
    /// assert_eq!(Status::Captured.merge(Status::Ignored), Status::Captured);
    /// assert_eq!(Status::Captured.merge(Status::Captured), Status::Captured);
    /// ```
    #[must_use]
    pub fn merge(self, b: Self) -> Self {
        match self {
            Status::Ignored => b,
            Status::Captured => Status::Captured,
        }
    }
}

/// A single user interaction (a click or a tap) travelling through a host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interaction {
    target: Element,
    status: Status,
    default_prevented: bool,
}

impl Interaction {
    /// Creates a new [`Interaction`] that originated at `target`.
    #[must_use]
    pub fn new(target: Element) -> Self {
        Self {
            target,
            status: Status::Ignored,
            default_prevented: false,
        }
    }

    /// Returns the element the [`Interaction`] originated at.
    #[must_use]
    pub fn target(&self) -> Element {
        self.target
    }

    /// Suppresses the default follow-through of the [`Interaction`],
    /// like following a link.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Returns whether the default follow-through was suppressed.
    #[must_use]
    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// Stops the [`Interaction`] from reaching the handlers of any ancestor.
    pub fn stop_propagation(&mut self) {
        self.status = self.status.merge(Status::Captured);
    }

    /// Returns whether propagation was stopped.
    #[must_use]
    pub fn is_propagation_stopped(&self) -> bool {
        self.status == Status::Captured
    }

    /// Returns the current [`Status`] of the [`Interaction`].
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }
}

/// Something that reacts to the [`Listener`]s it registered on a [`Host`].
///
/// Hosts call [`Handler::handle`] once for every registration an
/// [`Interaction`] reaches while bubbling.
pub trait Handler<H: Host> {
    /// Handles an [`Interaction`] that reached the registration of `listener`.
    fn handle(&mut self, listener: Listener, interaction: &mut Interaction, host: &mut H);
}
