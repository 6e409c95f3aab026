//! lightmenu is a collapsible navigation menu.
//!
//! A menu is a panel toggled by a control. It can dim the page behind it,
//! close itself when the user interacts anywhere else, and open nested
//! submenu branches along a single active trail, pre-opening the branches
//! that lead to the current page.
//!
//! The controllers are independent of where they run: they talk to a
//! [`Host`] that locates elements, applies markers and routes interactions.
//! Enable the `web` feature to run them in a browser through the `web` module.
//!
//! # Overview
//! ```
//! use lightmenu::{Menu, Settings, overlay};
//! use lightmenu_test::{Document, Markup};
//!
//! let mut document = Document::new();
//! let body = document.body();
//!
//! let toggle = document.append(body, Markup::new("button").id("burger"));
//! let _ = document.append(
//!     body,
//!     Markup::new("div").id("mainMenu").child(
//!         Markup::new("nav").child(
//!             Markup::new("ul").child(Markup::new("li").id("docs").class("submenu trail")),
//!         ),
//!     ),
//! );
//!
//! let mut menu = Menu::new(
//!     &mut document,
//!     Settings::new("mainMenu", "burger")
//!         .close_on_click(true)
//!         .submenus(true)
//!         .overlay(overlay::Settings::default()),
//! )?;
//!
//! document.click(toggle, &mut menu);
//!
//! assert!(menu.is_open());
//! assert!(menu.overlay().and_then(|overlay| overlay.live()).is_some());
//! # Ok::<(), lightmenu::Error>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
pub use lightmenu_core as core;
pub use lightmenu_widget as widget;

pub use lightmenu_core::{
    Callback, Callbacks, Element, Error, Handler, Host, Interaction, Listener, ListenerId, Role,
    Settings, Status, Target, overlay,
};
pub use lightmenu_widget::{Menu, OutsideDismiss, Overlay, submenu};

#[cfg(feature = "web")]
#[cfg_attr(docsrs, doc(cfg(feature = "web")))]
pub use lightmenu_web as web;
