//! The branches of a menu and how they nest.
use lightmenu_core::{Element, Host};

/// One collapsible submenu branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    element: Element,
    is_open: bool,
    is_on_trail: bool,
    parent: Option<usize>,
    children: Vec<usize>,
}

impl Node {
    /// Returns the element of the branch.
    #[must_use]
    pub fn element(&self) -> Element {
        self.element
    }

    /// Returns whether the branch is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Returns whether the branch was marked as part of the trail when the
    /// menu was built.
    #[must_use]
    pub fn is_on_trail(&self) -> bool {
        self.is_on_trail
    }

    /// Returns the index of the enclosing branch, if any.
    #[must_use]
    pub fn parent(&self) -> Option<usize> {
        self.parent
    }

    /// Returns the indices of the branches directly nested in this one.
    #[must_use]
    pub fn children(&self) -> &[usize] {
        &self.children
    }
}

/// Every branch discovered under a menu, in document order.
///
/// Nodes are never added or removed after discovery; only their open flag
/// changes. Parents always precede their children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    /// Discovers the branches matching `selector` under `root`.
    ///
    /// A branch is on the trail if it carries `trail_class`. Its parent is the
    /// innermost other branch containing it.
    pub fn discover<H: Host>(host: &H, root: Element, selector: &str, trail_class: &str) -> Self {
        let elements = host.query_all(root, selector);
        let mut tree = Self::default();

        for (index, element) in elements.iter().copied().enumerate() {
            // In document order, the last enclosing branch is the innermost one
            let parent = (0..index)
                .rev()
                .find(|candidate| host.contains(elements[*candidate], element));

            let _ = tree.push(element, parent, host.has_class(element, trail_class));
        }

        tree
    }

    /// Appends a branch nested in `parent` and returns its index.
    ///
    /// Returns `None` if `parent` is not the index of an existing branch.
    fn push(
        &mut self,
        element: Element,
        parent: Option<usize>,
        is_on_trail: bool,
    ) -> Option<usize> {
        let index = self.nodes.len();

        if let Some(parent) = parent {
            self.nodes.get_mut(parent)?.children.push(index);
        }

        self.nodes.push(Node {
            element,
            is_open: false,
            is_on_trail,
            parent,
            children: Vec::new(),
        });

        Some(index)
    }

    /// Returns the number of branches.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns whether there are no branches.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the branch at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    /// Returns the index of the branch owning `element`.
    #[must_use]
    pub fn position(&self, element: Element) -> Option<usize> {
        self.nodes.iter().position(|node| node.element == element)
    }

    /// Iterates over every branch, in document order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Returns whether any branch is open.
    #[must_use]
    pub fn any_open(&self) -> bool {
        self.nodes.iter().any(Node::is_open)
    }

    /// Returns the indices of the open branches, in document order.
    #[must_use]
    pub fn open(&self) -> Vec<usize> {
        (0..self.nodes.len())
            .filter(|index| self.nodes[*index].is_open)
            .collect()
    }

    /// Iterates over the ancestors of the branch at `index`, innermost first.
    pub fn ancestors(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        std::iter::successors(self.nodes.get(index).and_then(|node| node.parent), |current| {
            self.nodes[*current].parent
        })
    }

    /// Returns whether an ancestor of the branch at `index` is open.
    #[must_use]
    pub fn has_open_ancestor(&self, index: usize) -> bool {
        self.ancestors(index)
            .any(|ancestor| self.nodes[ancestor].is_open)
    }

    /// Iterates over the branches sharing the parent of the branch at `index`,
    /// excluding itself.
    pub fn siblings(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        let parent = self.nodes.get(index).map(|node| node.parent);

        (0..self.nodes.len()).filter(move |candidate| {
            *candidate != index && Some(self.nodes[*candidate].parent) == parent
        })
    }

    pub(super) fn set_open(&mut self, index: usize, is_open: bool) -> Option<Element> {
        let node = self.nodes.get_mut(index)?;
        node.is_open = is_open;

        Some(node.element)
    }
}
