//! Describe the dimming layer shown behind an open menu.

/// The configuration of the dimming layer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Settings {
    /// The selector of the element the layer is inserted into.
    ///
    /// Falls back to the menu container when `None` or not found.
    pub container: Option<String>,

    /// The background color of the layer.
    pub color: String,

    /// The opacity of the layer, between `0.0` and `1.0`.
    pub opacity: f32,

    /// The stacking order of the layer.
    pub z_index: i32,

    /// Whether the elements underneath stay clickable.
    pub clickable: bool,
}

impl Settings {
    /// Sets the selector of the element the layer is inserted into.
    #[must_use]
    pub fn container(mut self, selector: impl Into<String>) -> Self {
        self.container = Some(selector.into());
        self
    }

    /// Sets the background color of the layer.
    #[must_use]
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Sets the opacity of the layer.
    #[must_use]
    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    /// Sets the stacking order of the layer.
    #[must_use]
    pub fn z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Sets whether the elements underneath stay clickable.
    #[must_use]
    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    /// Resolves the [`Appearance`] of the layer.
    #[must_use]
    pub fn appearance(&self) -> Appearance {
        let opacity = if self.opacity.is_nan() {
            DEFAULT_OPACITY
        } else {
            self.opacity.clamp(0.0, 1.0)
        };

        Appearance {
            color: self.color.clone(),
            opacity,
            z_index: self.z_index,
            pointer_events: if self.clickable {
                PointerEvents::None
            } else {
                PointerEvents::All
            },
        }
    }
}

const DEFAULT_OPACITY: f32 = 0.5;

impl Default for Settings {
    fn default() -> Self {
        Self {
            container: None,
            color: String::from("#000"),
            opacity: DEFAULT_OPACITY,
            z_index: 1,
            clickable: false,
        }
    }
}

/// Whether a layer intercepts interactions meant for the elements below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvents {
    /// The layer receives every interaction, blocking the elements below.
    All,

    /// The layer lets every interaction through.
    None,
}

impl PointerEvents {
    /// Returns the inline style value of the [`PointerEvents`].
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PointerEvents::All => "all",
            PointerEvents::None => "none",
        }
    }
}

/// The resolved visual properties of the dimming layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Appearance {
    /// The background color.
    pub color: String,
    /// The opacity, clamped between `0.0` and `1.0`.
    pub opacity: f32,
    /// The stacking order.
    pub z_index: i32,
    /// Whether interactions reach the elements below.
    pub pointer_events: PointerEvents,
}

impl Appearance {
    /// Returns the inline style declarations of a full-viewport layer with
    /// this [`Appearance`].
    #[must_use]
    pub fn declarations(&self) -> Vec<(&'static str, String)> {
        vec![
            ("position", String::from("fixed")),
            ("top", String::from("0")),
            ("left", String::from("0")),
            ("width", String::from("100vw")),
            ("height", String::from("100vh")),
            ("background", self.color.clone()),
            ("opacity", self.opacity.to_string()),
            ("z-index", self.z_index.to_string()),
            ("pointer-events", String::from(self.pointer_events.as_str())),
        ]
    }
}
