use smol_str::SmolStr;

/// A description of an element subtree to append to a [`Document`].
///
/// [`Document`]: crate::Document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markup {
    pub(crate) tag: SmolStr,
    pub(crate) id: Option<SmolStr>,
    pub(crate) classes: Vec<SmolStr>,
    pub(crate) children: Vec<Markup>,
}

impl Markup {
    /// Creates a new element of the given type.
    pub fn new(tag: &str) -> Self {
        Self {
            tag: SmolStr::new(tag),
            id: None,
            classes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Sets the identifier of the element.
    #[must_use]
    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(SmolStr::new(id));
        self
    }

    /// Adds the whitespace-separated classes to the element.
    #[must_use]
    pub fn class(mut self, classes: &str) -> Self {
        self.classes
            .extend(classes.split_whitespace().map(SmolStr::new));
        self
    }

    /// Appends a child element.
    #[must_use]
    pub fn child(mut self, child: Markup) -> Self {
        self.children.push(child);
        self
    }

    /// Appends every child element.
    #[must_use]
    pub fn children(mut self, children: impl IntoIterator<Item = Markup>) -> Self {
        self.children.extend(children);
        self
    }
}
