//! Show and hide a navigation panel.
use lightmenu_core::callback::{self, Callback};
use lightmenu_core::{
    Element, Error, Handler, Host, Interaction, Listener, ListenerId, Role, Settings, Target,
};

use crate::dismiss::OutsideDismiss;
use crate::overlay::Overlay;
use crate::submenu;

/// A collapsible navigation menu.
///
/// A [`Menu`] owns the open state of its panel and orchestrates the optional
/// [`Overlay`], the optional submenu [`Controller`](submenu::Controller) and
/// the optional [`OutsideDismiss`] handler.
///
/// Interactions reach it through its [`Handler`] implementation, driven by
/// whatever [`Host`] it was built on.
#[derive(Debug, Clone)]
pub struct Menu {
    panel: Element,
    container: Element,
    toggle: Element,
    close: Option<Element>,
    active_class: String,
    is_open: bool,
    overlay: Option<Overlay>,
    submenus: Option<submenu::Controller>,
    dismiss: Option<OutsideDismiss>,
    on_open: Option<Callback>,
    on_close: Option<Callback>,
    listeners: Vec<ListenerId>,
}

impl Menu {
    /// Builds a closed [`Menu`] on `host` and registers its control handlers.
    ///
    /// Fails if the panel or the toggle control cannot be located, or if
    /// neither a close control nor outside dismissal is configured.
    pub fn new<H: Host>(host: &mut H, settings: Settings) -> Result<Self, Error> {
        let panel = host
            .element_by_id(&settings.menu)
            .ok_or_else(|| Error::MissingElement {
                role: Role::Menu,
                id: settings.menu.clone(),
            })?;

        let toggle = host
            .element_by_id(&settings.toggle)
            .ok_or_else(|| Error::MissingElement {
                role: Role::Toggle,
                id: settings.toggle.clone(),
            })?;

        let close = settings.close.as_deref().and_then(|id| {
            let close = host.element_by_id(id);

            if close.is_none() {
                log::warn!("Close control `{id}` not found; ignoring it");
            }

            close
        });

        if close.is_none() && !settings.close_on_click {
            return Err(Error::MissingCloseOption);
        }

        let container = host.query(&settings.menu_container).unwrap_or_else(|| {
            log::warn!(
                "Menu container `{}` not found; marking the panel instead",
                settings.menu_container
            );

            panel
        });

        let overlay = settings.overlay.as_ref().map(|overlay| {
            let target = match &overlay.container {
                Some(selector) => host.query(selector).unwrap_or_else(|| {
                    log::warn!(
                        "Overlay container `{selector}` not found; using the menu container"
                    );

                    container
                }),
                None => container,
            };

            Overlay::new(target, settings.overlay_id(), overlay.appearance())
        });

        let submenus = settings.submenus.then(|| {
            submenu::Controller::new(
                submenu::Tree::discover(
                    &*host,
                    panel,
                    &settings.branch_selector(),
                    &settings.trail_selector,
                ),
                settings.callbacks.on_submenu_open.clone(),
                settings.callbacks.on_submenu_close.clone(),
            )
        });

        let dismiss = settings
            .close_on_click
            .then(|| OutsideDismiss::new(panel));

        let mut listeners = vec![host.listen(Target::Element(toggle), Listener::Toggle)];

        if let Some(close) = close {
            listeners.push(host.listen(Target::Element(close), Listener::Close));
        }

        log::debug!(
            "Menu `{}` ready (overlay: {}, submenus: {}, close on click: {})",
            settings.menu,
            overlay.is_some(),
            submenus.as_ref().map_or(0, |submenus| submenus.tree().len()),
            dismiss.is_some(),
        );

        Ok(Self {
            panel,
            container,
            toggle,
            close,
            active_class: settings.active_class(),
            is_open: false,
            overlay,
            submenus,
            dismiss,
            on_open: settings.callbacks.on_menu_open,
            on_close: settings.callbacks.on_menu_close,
            listeners,
        })
    }

    /// Returns whether the panel is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Returns the panel element.
    #[must_use]
    pub fn panel(&self) -> Element {
        self.panel
    }

    /// Returns the element carrying the active marker.
    #[must_use]
    pub fn container(&self) -> Element {
        self.container
    }

    /// Returns the toggle control.
    #[must_use]
    pub fn toggle(&self) -> Element {
        self.toggle
    }

    /// Returns the explicit close control, if any.
    #[must_use]
    pub fn close_control(&self) -> Option<Element> {
        self.close
    }

    /// Returns the [`Overlay`], if configured.
    #[must_use]
    pub fn overlay(&self) -> Option<&Overlay> {
        self.overlay.as_ref()
    }

    /// Returns the submenu [`Controller`](submenu::Controller), if enabled.
    #[must_use]
    pub fn submenus(&self) -> Option<&submenu::Controller> {
        self.submenus.as_ref()
    }

    /// Returns the [`OutsideDismiss`] handler, if enabled.
    #[must_use]
    pub fn dismiss(&self) -> Option<&OutsideDismiss> {
        self.dismiss.as_ref()
    }

    /// Opens the panel and runs `on_opened`.
    ///
    /// Only the state and the active marker change; the overlay, submenus and
    /// outside dismissal are driven by the toggle control.
    pub fn open<H: Host>(&mut self, host: &mut H, on_opened: Option<&Callback>) {
        log::debug!("Opening menu");

        host.add_class(self.container, &self.active_class);
        self.is_open = true;

        callback::invoke(on_opened);
    }

    /// Closes the panel and runs `on_closed`.
    pub fn close<H: Host>(&mut self, host: &mut H, on_closed: Option<&Callback>) {
        log::debug!("Closing menu");

        host.remove_class(self.container, &self.active_class);
        self.is_open = false;

        callback::invoke(on_closed);
    }

    /// Closes the panel, then removes every listener and the overlay of the
    /// [`Menu`] from `host`.
    ///
    /// The close hook does not run.
    pub fn detach<H: Host>(&mut self, host: &mut H) {
        if self.is_open {
            self.close(host, None);
        }

        for listener in self.listeners.drain(..) {
            host.unlisten(listener);
        }

        if let Some(submenus) = &mut self.submenus {
            submenus.detach(host);
        }

        if let Some(dismiss) = &mut self.dismiss {
            dismiss.disarm(host);
        }

        if let Some(overlay) = &mut self.overlay {
            overlay.sync(host, false);
        }
    }

    fn sync_overlay<H: Host>(&mut self, host: &mut H) {
        if let Some(overlay) = &mut self.overlay {
            overlay.sync(host, self.is_open);
        }
    }

    fn on_toggle<H: Host>(&mut self, host: &mut H, interaction: &mut Interaction) {
        interaction.prevent_default();

        if self.is_open {
            self.dismiss_with(host);
            return;
        }

        let on_open = self.on_open.clone();
        self.open(host, on_open.as_ref());
        self.sync_overlay(host);

        if let Some(submenus) = &mut self.submenus {
            submenus.seed_trail(host);
            submenus.attach(host);
        }

        if let Some(dismiss) = &mut self.dismiss {
            dismiss.arm(host, interaction);
        }
    }

    fn on_outside<H: Host>(&mut self, host: &mut H, interaction: &Interaction) {
        let dismissed = self
            .dismiss
            .as_mut()
            .is_some_and(|dismiss| dismiss.check(host, interaction));

        if dismissed {
            self.dismiss_with(host);
        }
    }

    /// Closes the panel and removes the overlay and any pending dismissal.
    fn dismiss_with<H: Host>(&mut self, host: &mut H) {
        let on_close = self.on_close.clone();
        self.close(host, on_close.as_ref());
        self.sync_overlay(host);

        if let Some(dismiss) = &mut self.dismiss {
            dismiss.disarm(host);
        }
    }
}

impl<H: Host> Handler<H> for Menu {
    fn handle(&mut self, listener: Listener, interaction: &mut Interaction, host: &mut H) {
        match listener {
            Listener::Toggle => self.on_toggle(host, interaction),
            Listener::Close => self.dismiss_with(host),
            Listener::OutsideDismiss => self.on_outside(host, interaction),
            Listener::Branch(index) => {
                if let Some(submenus) = &mut self.submenus {
                    let _ = submenus.activate(host, index, interaction);
                }
            }
        }
    }
}
