//! Connect the controllers to the surface they drive.
use crate::overlay;
use crate::{Element, Listener, ListenerId, Target};

/// The surface a menu lives on.
///
/// A [`Host`] owns every element, locates them, toggles their markers and
/// routes interactions to the registered listeners.
pub trait Host {
    /// Finds the element with the given identifier.
    fn element_by_id(&self, id: &str) -> Option<Element>;

    /// Finds the first element of the whole surface matching `selector`.
    fn query(&self, selector: &str) -> Option<Element>;

    /// Finds every descendant of `root` matching `selector`, in document order.
    fn query_all(&self, root: Element, selector: &str) -> Vec<Element>;

    /// Returns whether `node` is `ancestor` or lies inside its subtree.
    fn contains(&self, ancestor: Element, node: Element) -> bool;

    /// Returns whether `element` carries the marker `class`.
    fn has_class(&self, element: Element, class: &str) -> bool;

    /// Applies the marker `class` to `element`.
    fn add_class(&mut self, element: Element, class: &str);

    /// Removes the marker `class` from `element`.
    fn remove_class(&mut self, element: Element, class: &str);

    /// Creates a dimming layer with the given `id` and [`overlay::Appearance`]
    /// as the last child of `container`.
    ///
    /// Returns `None` if the host failed to create it.
    fn create_overlay(
        &mut self,
        container: Element,
        id: &str,
        appearance: &overlay::Appearance,
    ) -> Option<Element>;

    /// Detaches `element` from the surface.
    fn remove(&mut self, element: Element);

    /// Registers `listener` on `target`.
    fn listen(&mut self, target: Target, listener: Listener) -> ListenerId;

    /// Removes a registration. Unknown identifiers are ignored.
    fn unlisten(&mut self, id: ListenerId);
}
