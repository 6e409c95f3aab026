//! The core library of [lightmenu].
//!
//! This library holds the basic types the menu controllers are built upon:
//! element handles, interaction events, the [`Host`] seam through which the
//! controllers talk to the surface they drive, and the [`Settings`] that
//! describe a menu.
//!
//! It does not know how to locate, style or listen to anything by itself.
//! Hosts like the headless document of `lightmenu_test` or the browser host
//! of `lightmenu_web` implement [`Host`] to provide that.
//!
//! [lightmenu]: https://github.com/lightmenu/lightmenu
#![cfg_attr(docsrs, feature(doc_cfg))]
pub mod callback;
pub mod element;
pub mod error;
pub mod event;
pub mod host;
pub mod overlay;
pub mod settings;

pub use callback::Callback;
pub use element::Element;
pub use error::{Error, Role};
pub use event::{Handler, Interaction, Listener, ListenerId, Status, Target};
pub use host::Host;
pub use settings::{Callbacks, Settings};
