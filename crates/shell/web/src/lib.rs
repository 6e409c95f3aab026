//! Run lightmenu inside a browser.
//!
//! [`WebHost`] implements [`Host`] on top of a [`web_sys::Document`], and
//! [`attach`] builds a [`Menu`] on it whose handlers are driven by the
//! browser's own click events.
//!
//! ```no_run
//! use lightmenu_core::{Settings, overlay};
//!
//! let menu = lightmenu_web::attach(
//!     Settings::new("mainMenu", "burger")
//!         .close_on_click(true)
//!         .submenus(true)
//!         .overlay(overlay::Settings::default().opacity(0.3)),
//! )
//! .expect("menu markup is present");
//!
//! assert!(!menu.is_open());
//! ```
mod host;

pub use host::WebHost;

use std::cell::RefCell;
use std::rc::Rc;

use lightmenu_core::{Callback, Host, Settings};
use lightmenu_widget::Menu;

/// An error produced while attaching a menu to the page.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// There is no browser window or document to attach to.
    #[error("no browser document available")]
    NoDocument,

    /// The menu itself could not be built.
    #[error(transparent)]
    Menu(#[from] lightmenu_core::Error),
}

/// A [`Menu`] living on the page.
///
/// Dropping it removes every listener and overlay it registered.
pub struct Attached {
    menu: Rc<RefCell<Menu>>,
    host: Rc<RefCell<WebHost>>,
}

/// Attaches a [`Menu`] described by `settings` to the current page.
pub fn attach(settings: Settings) -> Result<Attached, Error> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or(Error::NoDocument)?;

    attach_to(document, settings)
}

/// Attaches a [`Menu`] described by `settings` to `document`.
pub fn attach_to(document: web_sys::Document, settings: Settings) -> Result<Attached, Error> {
    let host = Rc::new(RefCell::new(WebHost::new(document)));
    let menu = Rc::new(RefCell::new(Menu::new(&mut *host.borrow_mut(), settings)?));

    host.borrow().route(&menu, &host);

    Ok(Attached { menu, host })
}

impl Attached {
    /// Returns whether the menu is open.
    pub fn is_open(&self) -> bool {
        self.menu.borrow().is_open()
    }

    /// Opens the menu and runs `on_opened`.
    ///
    /// # Panics
    /// Panics if called from one of the menu's own hooks.
    pub fn open(&self, on_opened: Option<&Callback>) {
        self.menu
            .borrow_mut()
            .open(&mut *self.host.borrow_mut(), on_opened);
    }

    /// Closes the menu and runs `on_closed`.
    ///
    /// # Panics
    /// Panics if called from one of the menu's own hooks.
    pub fn close(&self, on_closed: Option<&Callback>) {
        self.menu
            .borrow_mut()
            .close(&mut *self.host.borrow_mut(), on_closed);
    }

    /// Returns the panel element of the menu.
    pub fn panel(&self) -> Option<web_sys::Element> {
        let panel = self.menu.borrow().panel();

        self.host.borrow().element(panel)
    }

    /// Returns whether the panel element carries `class`.
    pub fn panel_has_class(&self, class: &str) -> bool {
        let panel = self.menu.borrow().panel();

        self.host.borrow().has_class(panel, class)
    }
}

impl Drop for Attached {
    fn drop(&mut self) {
        match (self.menu.try_borrow_mut(), self.host.try_borrow_mut()) {
            (Ok(mut menu), Ok(mut host)) => menu.detach(&mut *host),
            _ => log::warn!("Menu dropped while handling an event; listeners were kept"),
        }
    }
}
