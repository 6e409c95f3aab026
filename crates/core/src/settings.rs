//! Configure a menu.
use crate::overlay;
use crate::Callback;

/// The marker applied to every open submenu branch.
pub const SUBMENU_ACTIVE: &str = "submenuActive";

/// The settings of a menu.
///
/// Only the identifiers of the panel and of its toggle control are required;
/// every other feature is disabled or defaulted.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Settings {
    /// The identifier of the panel.
    pub menu: String,

    /// The selector of the container receiving the active marker.
    #[cfg_attr(feature = "serde", serde(default = "default_menu_container"))]
    pub menu_container: String,

    /// The identifier of the toggle control.
    pub toggle: String,

    /// The identifier of the explicit close control.
    #[cfg_attr(feature = "serde", serde(default))]
    pub close: Option<String>,

    /// Whether interactions outside the panel close it.
    #[cfg_attr(feature = "serde", serde(default))]
    pub close_on_click: bool,

    /// Whether submenu branches are driven by the menu.
    #[cfg_attr(feature = "serde", serde(default))]
    pub submenus: bool,

    /// The class marking submenu branches.
    #[cfg_attr(feature = "serde", serde(default = "default_submenu_selector"))]
    pub submenu_selector: String,

    /// The class marking branches on the trail of the current page.
    #[cfg_attr(feature = "serde", serde(default = "default_trail_selector"))]
    pub trail_selector: String,

    /// The dimming layer, if any.
    #[cfg_attr(feature = "serde", serde(default))]
    pub overlay: Option<overlay::Settings>,

    /// The transition hooks.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub callbacks: Callbacks,
}

fn default_menu_container() -> String {
    String::from("body")
}

fn default_submenu_selector() -> String {
    String::from("submenu")
}

fn default_trail_selector() -> String {
    String::from("trail")
}

impl Settings {
    /// Creates new [`Settings`] for the panel `menu` toggled by `toggle`.
    pub fn new(menu: impl Into<String>, toggle: impl Into<String>) -> Self {
        Self {
            menu: menu.into(),
            menu_container: default_menu_container(),
            toggle: toggle.into(),
            close: None,
            close_on_click: false,
            submenus: false,
            submenu_selector: default_submenu_selector(),
            trail_selector: default_trail_selector(),
            overlay: None,
            callbacks: Callbacks::default(),
        }
    }

    /// Parses [`Settings`] from a RON document.
    ///
    /// Callbacks cannot be expressed in RON and must be attached afterwards.
    #[cfg(feature = "serde")]
    pub fn from_ron(source: &str) -> Result<Self, crate::Error> {
        ron::from_str(source).map_err(|error| crate::Error::Settings(error.to_string()))
    }

    /// Sets the selector of the container receiving the active marker.
    #[must_use]
    pub fn menu_container(mut self, selector: impl Into<String>) -> Self {
        self.menu_container = selector.into();
        self
    }

    /// Sets the identifier of the explicit close control.
    #[must_use]
    pub fn close(mut self, id: impl Into<String>) -> Self {
        self.close = Some(id.into());
        self
    }

    /// Sets whether interactions outside the panel close it.
    #[must_use]
    pub fn close_on_click(mut self, close_on_click: bool) -> Self {
        self.close_on_click = close_on_click;
        self
    }

    /// Sets whether submenu branches are driven by the menu.
    #[must_use]
    pub fn submenus(mut self, submenus: bool) -> Self {
        self.submenus = submenus;
        self
    }

    /// Sets the class marking submenu branches.
    #[must_use]
    pub fn submenu_selector(mut self, class: impl Into<String>) -> Self {
        self.submenu_selector = class.into();
        self
    }

    /// Sets the class marking branches on the trail.
    #[must_use]
    pub fn trail_selector(mut self, class: impl Into<String>) -> Self {
        self.trail_selector = class.into();
        self
    }

    /// Enables the dimming layer.
    #[must_use]
    pub fn overlay(mut self, overlay: overlay::Settings) -> Self {
        self.overlay = Some(overlay);
        self
    }

    /// Sets the hook run when the menu opens.
    #[must_use]
    pub fn on_open(mut self, f: impl Fn() + 'static) -> Self {
        self.callbacks.on_menu_open = Some(Callback::new(f));
        self
    }

    /// Sets the hook run when the menu closes.
    #[must_use]
    pub fn on_close(mut self, f: impl Fn() + 'static) -> Self {
        self.callbacks.on_menu_close = Some(Callback::new(f));
        self
    }

    /// Sets the hook run when a submenu branch opens.
    #[must_use]
    pub fn on_submenu_open(mut self, f: impl Fn() + 'static) -> Self {
        self.callbacks.on_submenu_open = Some(Callback::new(f));
        self
    }

    /// Sets the hook run when a submenu branch closes.
    #[must_use]
    pub fn on_submenu_close(mut self, f: impl Fn() + 'static) -> Self {
        self.callbacks.on_submenu_close = Some(Callback::new(f));
        self
    }

    /// Returns the marker applied to the container while the menu is open.
    #[must_use]
    pub fn active_class(&self) -> String {
        format!("{}Active", self.menu)
    }

    /// Returns the identifier of the dimming layer.
    #[must_use]
    pub fn overlay_id(&self) -> String {
        format!("{}Overlay", self.active_class())
    }

    /// Returns the selector locating submenu branches inside the panel.
    #[must_use]
    pub fn branch_selector(&self) -> String {
        format!("nav>ul li.{}", self.submenu_selector)
    }
}

/// The hooks invoked at menu transitions.
#[derive(Debug, Clone, Default)]
pub struct Callbacks {
    /// Runs after the menu opens.
    pub on_menu_open: Option<Callback>,
    /// Runs after the menu closes.
    pub on_menu_close: Option<Callback>,
    /// Runs after a submenu branch opens.
    pub on_submenu_open: Option<Callback>,
    /// Runs after a submenu branch closes.
    pub on_submenu_close: Option<Callback>,
}
