use lightmenu_core::overlay;
use lightmenu_core::{Element, Handler, Host, Interaction, Listener, ListenerId, Target};
use lightmenu_selector::{self as selector, Selector};
use smol_str::SmolStr;

use crate::Markup;

/// A headless element tree implementing [`Host`].
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    registrations: Vec<Registration>,
    next_listener: u64,
    root: Element,
    body: Element,
}

#[derive(Debug, Clone)]
struct Node {
    tag: SmolStr,
    id: Option<SmolStr>,
    classes: Vec<SmolStr>,
    style: Vec<(SmolStr, String)>,
    parent: Option<Element>,
    children: Vec<Element>,
}

#[derive(Debug, Clone, Copy)]
struct Registration {
    id: ListenerId,
    target: Target,
    listener: Listener,
}

impl Document {
    /// Creates a new [`Document`] holding an empty `body`.
    pub fn new() -> Self {
        let mut document = Self {
            nodes: Vec::new(),
            registrations: Vec::new(),
            next_listener: 0,
            root: Element::from_raw(0),
            body: Element::from_raw(0),
        };

        document.root = document.create(SmolStr::new_static("html"), None, Vec::new());
        document.body = document.create(SmolStr::new_static("body"), None, Vec::new());
        document.attach(document.root, document.body);

        document
    }

    /// Returns the `body` of the [`Document`].
    pub fn body(&self) -> Element {
        self.body
    }

    /// Appends the [`Markup`] as the last child of `parent` and returns the
    /// element created for its root.
    pub fn append(&mut self, parent: Element, markup: Markup) -> Element {
        let Markup {
            tag,
            id,
            classes,
            children,
        } = markup;

        let element = self.create(tag, id, classes);
        self.attach(parent, element);

        for child in children {
            let _ = self.append(element, child);
        }

        element
    }

    /// Returns the element with the given identifier.
    ///
    /// # Panics
    /// Panics if no attached element has that identifier.
    pub fn get(&self, id: &str) -> Element {
        self.element_by_id(id)
            .unwrap_or_else(|| panic!("no element with id `{id}`"))
    }

    /// Returns whether `element` is still part of the [`Document`].
    pub fn is_attached(&self, element: Element) -> bool {
        self.contains(self.root, element)
    }

    /// Returns the children of `element`, in order.
    pub fn children(&self, element: Element) -> &[Element] {
        self.node(element)
            .map(|node| node.children.as_slice())
            .unwrap_or_default()
    }

    /// Returns the inline style `property` of `element`.
    pub fn style(&self, element: Element, property: &str) -> Option<&str> {
        self.node(element)?
            .style
            .iter()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value.as_str())
    }

    /// Returns the number of live listener registrations.
    pub fn listener_count(&self) -> usize {
        self.registrations.len()
    }

    /// Returns the listeners registered on `target`, in registration order.
    pub fn listeners_on(&self, target: Target) -> Vec<Listener> {
        self.registrations
            .iter()
            .filter(|registration| registration.target == target)
            .map(|registration| registration.listener)
            .collect()
    }

    /// Clicks `target`, dispatching to `handler`.
    pub fn click<H: Handler<Self>>(&mut self, target: Element, handler: &mut H) {
        let _ = self.dispatch(target, handler);
    }

    /// Dispatches an [`Interaction`] originating at `target` to `handler` and
    /// returns it once propagation ends.
    ///
    /// The listeners of every node along the path are snapshotted when
    /// propagation reaches that node. A listener removed before its turn is
    /// skipped.
    pub fn dispatch<H: Handler<Self>>(&mut self, target: Element, handler: &mut H) -> Interaction {
        let mut interaction = Interaction::new(target);

        let mut path: Vec<Target> = self
            .ancestors(target)
            .map(Target::Element)
            .collect();
        path.push(Target::Document);

        for stop in path {
            let snapshot: Vec<ListenerId> = self
                .registrations
                .iter()
                .filter(|registration| registration.target == stop)
                .map(|registration| registration.id)
                .collect();

            for id in snapshot {
                let Some(listener) = self.registration(id).map(|registration| registration.listener)
                else {
                    continue;
                };

                handler.handle(listener, &mut interaction, self);
            }

            if interaction.is_propagation_stopped() {
                break;
            }
        }

        interaction
    }

    fn create(&mut self, tag: SmolStr, id: Option<SmolStr>, classes: Vec<SmolStr>) -> Element {
        let element = Element::from_raw(self.nodes.len() as u64);

        self.nodes.push(Node {
            tag,
            id,
            classes,
            style: Vec::new(),
            parent: None,
            children: Vec::new(),
        });

        element
    }

    fn attach(&mut self, parent: Element, child: Element) {
        if let Some(node) = self.node_mut(child) {
            node.parent = Some(parent);
        }

        if let Some(node) = self.node_mut(parent) {
            node.children.push(child);
        }
    }

    fn node(&self, element: Element) -> Option<&Node> {
        self.nodes.get(element.as_raw() as usize)
    }

    fn node_mut(&mut self, element: Element) -> Option<&mut Node> {
        self.nodes.get_mut(element.as_raw() as usize)
    }

    fn registration(&self, id: ListenerId) -> Option<&Registration> {
        self.registrations
            .iter()
            .find(|registration| registration.id == id)
    }

    /// `element` itself followed by its ancestors, innermost first.
    fn ancestors(&self, element: Element) -> impl Iterator<Item = Element> + '_ {
        std::iter::successors(Some(element), |current| {
            self.node(*current).and_then(|node| node.parent)
        })
    }

    /// The attached descendants of `root`, in document order.
    fn descendants(&self, root: Element) -> Vec<Element> {
        let mut descendants = Vec::new();
        let mut stack: Vec<Element> = self.children(root).iter().rev().copied().collect();

        while let Some(element) = stack.pop() {
            descendants.push(element);
            stack.extend(self.children(element).iter().rev().copied());
        }

        descendants
    }

    fn parse(selector: &str) -> Option<Selector> {
        match Selector::parse(selector) {
            Ok(selector) => Some(selector),
            Err(error) => {
                log::warn!("{error}");
                None
            }
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl selector::Tree for Document {
    type Node = Element;

    fn parent(&self, node: Element) -> Option<Element> {
        self.node(node)?.parent
    }

    fn tag(&self, node: Element) -> &str {
        self.node(node).map_or("", |node| node.tag.as_str())
    }

    fn id(&self, node: Element) -> Option<&str> {
        self.node(node)?.id.as_deref()
    }

    fn has_class(&self, node: Element, class: &str) -> bool {
        self.node(node)
            .is_some_and(|node| node.classes.iter().any(|candidate| candidate == class))
    }
}

impl Host for Document {
    fn element_by_id(&self, id: &str) -> Option<Element> {
        std::iter::once(self.root)
            .chain(self.descendants(self.root))
            .find(|element| {
                self.node(*element)
                    .is_some_and(|node| node.id.as_deref() == Some(id))
            })
    }

    fn query(&self, selector: &str) -> Option<Element> {
        let selector = Self::parse(selector)?;

        std::iter::once(self.root)
            .chain(self.descendants(self.root))
            .find(|element| selector.matches(self, *element))
    }

    fn query_all(&self, root: Element, selector: &str) -> Vec<Element> {
        let Some(selector) = Self::parse(selector) else {
            return Vec::new();
        };

        self.descendants(root)
            .into_iter()
            .filter(|element| selector.matches(self, *element))
            .collect()
    }

    fn contains(&self, ancestor: Element, node: Element) -> bool {
        self.ancestors(node).any(|current| current == ancestor)
    }

    fn has_class(&self, element: Element, class: &str) -> bool {
        selector::Tree::has_class(self, element, class)
    }

    fn add_class(&mut self, element: Element, class: &str) {
        if let Some(node) = self.node_mut(element)
            && !node.classes.iter().any(|candidate| candidate == class)
        {
            node.classes.push(SmolStr::new(class));
        }
    }

    fn remove_class(&mut self, element: Element, class: &str) {
        if let Some(node) = self.node_mut(element) {
            node.classes.retain(|candidate| candidate != class);
        }
    }

    fn create_overlay(
        &mut self,
        container: Element,
        id: &str,
        appearance: &overlay::Appearance,
    ) -> Option<Element> {
        let _ = self.node(container)?;

        let element = self.create(
            SmolStr::new_static("div"),
            Some(SmolStr::new(id)),
            Vec::new(),
        );

        if let Some(node) = self.node_mut(element) {
            node.style = appearance
                .declarations()
                .into_iter()
                .map(|(property, value)| (SmolStr::new_static(property), value))
                .collect();
        }

        self.attach(container, element);

        Some(element)
    }

    fn remove(&mut self, element: Element) {
        let Some(parent) = self.node_mut(element).and_then(|node| node.parent.take()) else {
            return;
        };

        if let Some(node) = self.node_mut(parent) {
            node.children.retain(|child| *child != element);
        }
    }

    fn listen(&mut self, target: Target, listener: Listener) -> ListenerId {
        let id = ListenerId::from_raw(self.next_listener);
        self.next_listener += 1;

        self.registrations.push(Registration {
            id,
            target,
            listener,
        });

        id
    }

    fn unlisten(&mut self, id: ListenerId) {
        self.registrations
            .retain(|registration| registration.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Listener>,
        stop_on: Option<Listener>,
        remove_on_first: Option<ListenerId>,
    }

    impl Handler<Document> for Recorder {
        fn handle(&mut self, listener: Listener, interaction: &mut Interaction, host: &mut Document) {
            self.calls.push(listener);

            if let Some(id) = self.remove_on_first.take() {
                host.unlisten(id);
            }

            if self.stop_on == Some(listener) {
                interaction.stop_propagation();
            }
        }
    }

    fn tree() -> (Document, Element, Element) {
        let mut document = Document::new();
        let body = document.body();

        let outer = document.append(
            body,
            Markup::new("div")
                .id("outer")
                .child(Markup::new("span").id("inner").class("a b")),
        );
        let inner = document.get("inner");

        (document, outer, inner)
    }

    #[test]
    fn interactions_bubble_from_target_to_document() {
        let (mut document, outer, inner) = tree();

        let _ = document.listen(Target::Document, Listener::OutsideDismiss);
        let _ = document.listen(Target::Element(outer), Listener::Branch(0));
        let _ = document.listen(Target::Element(inner), Listener::Branch(1));

        let mut recorder = Recorder::default();
        document.click(inner, &mut recorder);

        assert_eq!(
            recorder.calls,
            vec![
                Listener::Branch(1),
                Listener::Branch(0),
                Listener::OutsideDismiss
            ]
        );
    }

    #[test]
    fn stopped_interactions_do_not_reach_ancestors() {
        let (mut document, outer, inner) = tree();

        let _ = document.listen(Target::Element(outer), Listener::Branch(0));
        let _ = document.listen(Target::Element(inner), Listener::Branch(1));

        let mut recorder = Recorder {
            stop_on: Some(Listener::Branch(1)),
            ..Recorder::default()
        };
        let interaction = document.dispatch(inner, &mut recorder);

        assert!(interaction.is_propagation_stopped());
        assert_eq!(recorder.calls, vec![Listener::Branch(1)]);
    }

    #[test]
    fn removed_listeners_are_skipped() {
        let (mut document, _outer, inner) = tree();

        let _ = document.listen(Target::Element(inner), Listener::Toggle);
        let second = document.listen(Target::Element(inner), Listener::Close);

        let mut recorder = Recorder {
            remove_on_first: Some(second),
            ..Recorder::default()
        };
        document.click(inner, &mut recorder);

        assert_eq!(recorder.calls, vec![Listener::Toggle]);
        assert_eq!(document.listener_count(), 1);
    }

    #[test]
    fn queries_follow_document_order() {
        let (mut document, outer, inner) = tree();
        let body = document.body();
        let later = document.append(body, Markup::new("span").class("a"));

        assert_eq!(document.query("span.a"), Some(inner));
        assert_eq!(document.query_all(body, ".a"), vec![inner, later]);
        assert_eq!(document.query_all(outer, ".a"), vec![inner]);
        assert_eq!(document.query("body"), Some(body));
        assert_eq!(document.query("li"), None);
        assert_eq!(document.query("li >"), None);
    }

    #[test]
    fn containment_is_inclusive() {
        let (document, outer, inner) = tree();

        assert!(document.contains(outer, inner));
        assert!(document.contains(outer, outer));
        assert!(!document.contains(inner, outer));
    }

    #[test]
    fn classes_are_unique() {
        let (mut document, _outer, inner) = tree();

        document.add_class(inner, "a");
        document.add_class(inner, "c");
        assert!(document.has_class(inner, "c"));

        document.remove_class(inner, "a");
        assert!(!document.has_class(inner, "a"));
        assert!(document.has_class(inner, "b"));
    }

    #[test]
    fn overlays_are_appended_and_removed() {
        let (mut document, outer, _inner) = tree();
        let appearance = overlay::Settings::default().appearance();

        let layer = document
            .create_overlay(outer, "layer", &appearance)
            .expect("overlay is created");

        assert_eq!(document.children(outer).last(), Some(&layer));
        assert_eq!(document.style(layer, "position"), Some("fixed"));
        assert_eq!(document.element_by_id("layer"), Some(layer));

        document.remove(layer);

        assert!(!document.is_attached(layer));
        assert_eq!(document.element_by_id("layer"), None);

        document.remove(layer);
    }
}
