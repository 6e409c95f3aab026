//! Test lightmenu without a browser.
//!
//! This crate provides a headless [`Document`]: an in-memory element tree that
//! implements [`Host`] and dispatches interactions the way a browser does.
//! Listeners on the target run first, then those of every ancestor and,
//! finally, those registered on the document itself.
//!
//! [`Host`]: lightmenu_core::Host
//!
//! ```
//! use lightmenu_core::Host;
//! use lightmenu_test::{Document, Markup};
//!
//! let mut document = Document::new();
//! let body = document.body();
//!
//! let nav = document.append(
//!     body,
//!     Markup::new("nav").id("menu").child(Markup::new("ul")),
//! );
//!
//! assert_eq!(document.element_by_id("menu"), Some(nav));
//! assert_eq!(document.query_all(nav, "ul").len(), 1);
//! ```
mod document;
mod markup;

pub use document::Document;
pub use markup::Markup;
