//! Open and close submenu branches along a single active trail.
//!
//! Branches open mutually exclusively across the whole tree, with one
//! exemption: opening a branch nested in an open branch keeps its ancestors
//! open, so the user can drill down without collapsing the trail.
mod tree;

pub use tree::{Node, Tree};

use lightmenu_core::callback::{self, Callback};
use lightmenu_core::settings::SUBMENU_ACTIVE;
use lightmenu_core::{Host, Interaction, Listener, ListenerId, Target};

/// The rule a branch activation was resolved with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// No branch was open; the branch was opened.
    First,

    /// The branch was already open; nothing changed, the default
    /// follow-through was suppressed and the interaction was kept from
    /// reaching the ancestors of the branch.
    AlreadyOpen,

    /// An ancestor of the branch was open; the branch was opened next to it.
    Descend,

    /// The branch was unrelated to the open ones; every branch was closed and
    /// the branch was opened.
    Switch,

    /// The index did not name a branch.
    Unknown,
}

/// Drives the open flags of a submenu [`Tree`].
#[derive(Debug, Clone)]
pub struct Controller {
    tree: Tree,
    on_open: Option<Callback>,
    on_close: Option<Callback>,
    listeners: Vec<ListenerId>,
}

impl Controller {
    /// Creates a new [`Controller`] for the given [`Tree`].
    pub fn new(tree: Tree, on_open: Option<Callback>, on_close: Option<Callback>) -> Self {
        Self {
            tree,
            on_open,
            on_close,
            listeners: Vec::new(),
        }
    }

    /// Returns the [`Tree`] of branches.
    #[must_use]
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Returns whether the branch handlers are registered.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        !self.listeners.is_empty()
    }

    /// Opens every branch marked as part of the trail, at any depth.
    ///
    /// Open branches off the trail, left over from an earlier opening, are
    /// closed first.
    pub fn seed_trail<H: Host>(&mut self, host: &mut H) {
        let (trail, stale): (Vec<usize>, Vec<usize>) = (0..self.tree.len())
            .filter(|index| {
                self.tree
                    .get(*index)
                    .is_some_and(|node| node.is_on_trail() || node.is_open())
            })
            .partition(|index| self.tree.get(*index).is_some_and(Node::is_on_trail));

        log::debug!("Seeding submenu trail: {trail:?}");

        for index in stale {
            self.close_node(host, index);
        }

        for index in trail {
            self.open_node(host, index);
        }
    }

    /// Registers one activation handler per branch.
    ///
    /// Handlers are only registered once; later calls do nothing.
    pub fn attach<H: Host>(&mut self, host: &mut H) {
        if self.is_attached() {
            return;
        }

        self.listeners = self
            .tree
            .iter()
            .enumerate()
            .map(|(index, node)| host.listen(Target::Element(node.element()), Listener::Branch(index)))
            .collect();
    }

    /// Removes every branch handler.
    pub fn detach<H: Host>(&mut self, host: &mut H) {
        for listener in self.listeners.drain(..) {
            host.unlisten(listener);
        }
    }

    /// Marks the branch at `index` as open.
    ///
    /// Other branches are left untouched.
    pub fn open_node<H: Host>(&mut self, host: &mut H, index: usize) {
        let Some(element) = self.tree.set_open(index, true) else {
            return;
        };

        host.add_class(element, SUBMENU_ACTIVE);
        callback::invoke(self.on_open.as_ref());
    }

    /// Marks the branch at `index` as closed.
    pub fn close_node<H: Host>(&mut self, host: &mut H, index: usize) {
        let Some(element) = self.tree.set_open(index, false) else {
            return;
        };

        host.remove_class(element, SUBMENU_ACTIVE);
        callback::invoke(self.on_close.as_ref());
    }

    /// Closes every branch, open or not.
    pub fn close_all<H: Host>(&mut self, host: &mut H) {
        for index in 0..self.tree.len() {
            self.close_node(host, index);
        }
    }

    /// Handles the activation of the branch at `index`.
    pub fn activate<H: Host>(
        &mut self,
        host: &mut H,
        index: usize,
        interaction: &mut Interaction,
    ) -> Activation {
        let Some(node) = self.tree.get(index) else {
            return Activation::Unknown;
        };

        let activation = if !self.tree.any_open() {
            Activation::First
        } else if node.is_open() {
            Activation::AlreadyOpen
        } else if self.tree.has_open_ancestor(index) {
            Activation::Descend
        } else {
            Activation::Switch
        };

        log::trace!("Submenu branch {index} activated: {activation:?}");

        match activation {
            Activation::First | Activation::Descend => {
                interaction.prevent_default();
                self.open_node(host, index);
            }
            Activation::AlreadyOpen => {
                interaction.prevent_default();
                interaction.stop_propagation();
            }
            Activation::Switch => {
                interaction.prevent_default();
                self.close_all(host);
                self.open_node(host, index);
            }
            Activation::Unknown => {}
        }

        activation
    }
}
