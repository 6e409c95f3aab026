//! Close a menu when the user interacts anywhere else.
use lightmenu_core::{Element, Host, Interaction, Listener, ListenerId, Target};

/// Tracks the single document-wide listener that dismisses an open menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutsideDismiss {
    panel: Element,
    registration: Option<ListenerId>,
}

impl OutsideDismiss {
    /// Creates a new, disarmed [`OutsideDismiss`] for `panel`.
    pub fn new(panel: Element) -> Self {
        Self {
            panel,
            registration: None,
        }
    }

    /// Returns whether the listener is registered.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.registration.is_some()
    }

    /// Registers the listener.
    ///
    /// `opening` is the interaction that opened the menu; its propagation is
    /// stopped so the new listener does not see it. Arming an armed handler
    /// does not register a second listener.
    pub fn arm<H: Host>(&mut self, host: &mut H, opening: &mut Interaction) {
        opening.stop_propagation();

        if self.registration.is_none() {
            self.registration = Some(host.listen(Target::Document, Listener::OutsideDismiss));
        }
    }

    /// Removes the listener, if registered.
    pub fn disarm<H: Host>(&mut self, host: &mut H) {
        if let Some(registration) = self.registration.take() {
            host.unlisten(registration);
        }
    }

    /// Checks an interaction seen by the listener.
    ///
    /// Returns `true`, after removing the listener, if the interaction
    /// originated outside the panel and the menu must be dismissed.
    pub fn check<H: Host>(&mut self, host: &mut H, interaction: &Interaction) -> bool {
        if !self.is_armed() || host.contains(self.panel, interaction.target()) {
            return false;
        }

        self.disarm(host);

        true
    }
}
