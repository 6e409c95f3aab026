//! The controllers of a collapsible navigation menu.
//!
//! A [`Menu`] is a panel toggled by a control. It can dim the page behind it
//! with an [`Overlay`], close itself when the user interacts anywhere else
//! with [`OutsideDismiss`], and drive nested submenu branches that open along
//! a single active trail with a [`submenu::Controller`].
//!
//! Every controller talks to the surface it lives on through a
//! [`Host`](lightmenu_core::Host).
//!
//! # Example
//! ```
//! use lightmenu_core::Settings;
//! use lightmenu_test::{Document, Markup};
//! use lightmenu_widget::Menu;
//!
//! let mut document = Document::new();
//! let body = document.body();
//!
//! let _ = document.append(body, Markup::new("div").id("menu"));
//! let toggle = document.append(body, Markup::new("button").id("burger"));
//!
//! let mut menu = Menu::new(
//!     &mut document,
//!     Settings::new("menu", "burger").close_on_click(true),
//! )
//! .unwrap();
//!
//! document.click(toggle, &mut menu);
//! assert!(menu.is_open());
//!
//! document.click(body, &mut menu);
//! assert!(!menu.is_open());
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
pub mod dismiss;
pub mod menu;
pub mod overlay;
pub mod submenu;

pub use dismiss::OutsideDismiss;
pub use menu::Menu;
pub use overlay::Overlay;
