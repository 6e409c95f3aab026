//! Dim the page behind an open menu.
use lightmenu_core::overlay::Appearance;
use lightmenu_core::{Element, Host};

/// Creates and removes the dimming layer in lockstep with the menu.
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    container: Element,
    id: String,
    appearance: Appearance,
    live: Option<Element>,
}

impl Overlay {
    /// Creates a new [`Overlay`] inserted into `container` when shown.
    pub fn new(container: Element, id: impl Into<String>, appearance: Appearance) -> Self {
        Self {
            container,
            id: id.into(),
            appearance,
            live: None,
        }
    }

    /// Returns the live layer, if any.
    #[must_use]
    pub fn live(&self) -> Option<Element> {
        self.live
    }

    /// Returns the element the layer is inserted into.
    #[must_use]
    pub fn container(&self) -> Element {
        self.container
    }

    /// Shows the layer if `is_open`, removes it otherwise.
    ///
    /// Removing an absent layer does nothing. Showing it again replaces the
    /// live layer with a fresh one.
    pub fn sync<H: Host>(&mut self, host: &mut H, is_open: bool) {
        if let Some(layer) = self.live.take() {
            log::debug!("Removing overlay `{}`", self.id);
            host.remove(layer);
        }

        if !is_open {
            return;
        }

        self.live = host.create_overlay(self.container, &self.id, &self.appearance);

        if self.live.is_some() {
            log::debug!("Created overlay `{}`", self.id);
        } else {
            log::warn!("Host failed to create overlay `{}`", self.id);
        }
    }
}
