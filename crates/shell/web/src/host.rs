use std::cell::RefCell;
use std::rc::{Rc, Weak};

use lightmenu_core::overlay;
use lightmenu_core::{Element, Handler, Host, Interaction, Listener, ListenerId, Target};
use lightmenu_widget::Menu;
use rustc_hash::FxHashMap;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

type Callback = Closure<dyn FnMut(web_sys::Event)>;

/// The interaction events a menu listens to.
const EVENT: &str = "click";

/// A [`Host`] backed by a browser document.
///
/// Element handles are interned: the same DOM element always maps to the
/// same [`Element`] until it is removed.
pub struct WebHost {
    document: web_sys::Document,
    elements: RefCell<Interner<web_sys::Element>>,
    registrations: FxHashMap<ListenerId, Registration>,
    retired: Vec<Callback>,
    next_listener: u64,
    router: Rc<Router>,
}

struct Registration {
    target: web_sys::EventTarget,
    closure: Callback,
}

/// Stable handles for values, released on removal.
#[derive(Debug)]
struct Interner<T> {
    entries: FxHashMap<u64, T>,
    next: u64,
}

impl<T: Clone + PartialEq> Interner<T> {
    fn intern(&mut self, value: T) -> u64 {
        if let Some(raw) = self
            .entries
            .iter()
            .find_map(|(raw, known)| (*known == value).then_some(*raw))
        {
            return raw;
        }

        let raw = self.next;
        self.next += 1;

        let _ = self.entries.insert(raw, value);

        raw
    }

    fn get(&self, raw: u64) -> Option<T> {
        self.entries.get(&raw).cloned()
    }

    fn release(&mut self, raw: u64) -> Option<T> {
        self.entries.remove(&raw)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<T> Default for Interner<T> {
    fn default() -> Self {
        Self {
            entries: FxHashMap::default(),
            next: 0,
        }
    }
}

/// Routes browser events back to the menu and host that registered them.
#[derive(Default)]
struct Router {
    menu: RefCell<Weak<RefCell<Menu>>>,
    host: RefCell<Weak<RefCell<WebHost>>>,
}

impl WebHost {
    /// Creates a new [`WebHost`] for `document`.
    pub fn new(document: web_sys::Document) -> Self {
        Self {
            document,
            elements: RefCell::new(Interner::default()),
            registrations: FxHashMap::default(),
            retired: Vec::new(),
            next_listener: 0,
            router: Rc::new(Router::default()),
        }
    }

    /// Returns the DOM element behind a handle.
    pub fn element(&self, element: Element) -> Option<web_sys::Element> {
        self.elements.borrow().get(element.as_raw())
    }

    /// Returns the number of DOM elements the host holds handles for.
    pub fn interned(&self) -> usize {
        self.elements.borrow().len()
    }

    pub(crate) fn route(&self, menu: &Rc<RefCell<Menu>>, host: &Rc<RefCell<WebHost>>) {
        *self.router.menu.borrow_mut() = Rc::downgrade(menu);
        *self.router.host.borrow_mut() = Rc::downgrade(host);
    }

    fn intern(&self, element: web_sys::Element) -> Element {
        Element::from_raw(self.elements.borrow_mut().intern(element))
    }
}

impl Router {
    fn dispatch(&self, listener: Listener, event: &web_sys::Event) {
        let menu = self.menu.borrow().upgrade();
        let host = self.host.borrow().upgrade();

        let (Some(menu), Some(host)) = (menu, host) else {
            return;
        };

        let (Ok(mut menu), Ok(mut host)) = (menu.try_borrow_mut(), host.try_borrow_mut()) else {
            log::warn!("Ignoring {listener:?}: the menu is already handling an event");
            return;
        };

        host.retired.clear();

        let target = event
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
            .or_else(|| host.document.document_element());

        let Some(target) = target else {
            return;
        };

        let mut interaction = Interaction::new(host.intern(target));
        menu.handle(listener, &mut interaction, &mut *host);

        if interaction.is_default_prevented() {
            event.prevent_default();
        }

        if interaction.is_propagation_stopped() {
            event.stop_propagation();
        }
    }
}

impl Host for WebHost {
    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document
            .get_element_by_id(id)
            .map(|element| self.intern(element))
    }

    fn query(&self, selector: &str) -> Option<Element> {
        match self.document.query_selector(selector) {
            Ok(element) => element.map(|element| self.intern(element)),
            Err(error) => {
                log::warn!("Invalid selector `{selector}`: {error:?}");
                None
            }
        }
    }

    fn query_all(&self, root: Element, selector: &str) -> Vec<Element> {
        let Some(root) = self.element(root) else {
            return Vec::new();
        };

        match root.query_selector_all(selector) {
            Ok(list) => (0..list.length())
                .filter_map(|index| list.item(index))
                .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
                .map(|element| self.intern(element))
                .collect(),
            Err(error) => {
                log::warn!("Invalid selector `{selector}`: {error:?}");
                Vec::new()
            }
        }
    }

    fn contains(&self, ancestor: Element, node: Element) -> bool {
        let (Some(ancestor), Some(node)) = (self.element(ancestor), self.element(node)) else {
            return false;
        };

        let node: &web_sys::Node = node.as_ref();
        ancestor.contains(Some(node))
    }

    fn has_class(&self, element: Element, class: &str) -> bool {
        self.element(element)
            .is_some_and(|element| element.class_list().contains(class))
    }

    fn add_class(&mut self, element: Element, class: &str) {
        if let Some(element) = self.element(element)
            && let Err(error) = element.class_list().add_1(class)
        {
            log::warn!("Failed to add class `{class}`: {error:?}");
        }
    }

    fn remove_class(&mut self, element: Element, class: &str) {
        if let Some(element) = self.element(element)
            && let Err(error) = element.class_list().remove_1(class)
        {
            log::warn!("Failed to remove class `{class}`: {error:?}");
        }
    }

    fn create_overlay(
        &mut self,
        container: Element,
        id: &str,
        appearance: &overlay::Appearance,
    ) -> Option<Element> {
        let container = self.element(container)?;

        let layer = match self.document.create_element("div") {
            Ok(layer) => layer,
            Err(error) => {
                log::warn!("Failed to create overlay: {error:?}");
                return None;
            }
        };

        layer.set_id(id);

        if let Some(html) = layer.dyn_ref::<web_sys::HtmlElement>() {
            let style = html.style();

            for (property, value) in appearance.declarations() {
                if let Err(error) = style.set_property(property, &value) {
                    log::warn!("Failed to set overlay `{property}`: {error:?}");
                }
            }
        }

        if let Err(error) = container.append_child(&layer) {
            log::warn!("Failed to insert overlay: {error:?}");
            return None;
        }

        Some(self.intern(layer))
    }

    fn remove(&mut self, element: Element) {
        if let Some(element) = self.elements.get_mut().release(element.as_raw()) {
            element.remove();
        }
    }

    fn listen(&mut self, target: Target, listener: Listener) -> ListenerId {
        let id = ListenerId::from_raw(self.next_listener);
        self.next_listener += 1;

        let target: web_sys::EventTarget = match target {
            Target::Document => self.document.clone().into(),
            Target::Element(element) => match self.element(element) {
                Some(element) => element.into(),
                None => {
                    log::warn!("Cannot listen on unknown element {element:?}");
                    return id;
                }
            },
        };

        let router = Rc::clone(&self.router);
        let closure: Callback =
            Closure::new(move |event: web_sys::Event| router.dispatch(listener, &event));

        if let Err(error) =
            target.add_event_listener_with_callback(EVENT, closure.as_ref().unchecked_ref())
        {
            log::warn!("Failed to register {listener:?}: {error:?}");
            return id;
        }

        let _ = self
            .registrations
            .insert(id, Registration { target, closure });

        id
    }

    fn unlisten(&mut self, id: ListenerId) {
        let Some(Registration { target, closure }) = self.registrations.remove(&id) else {
            return;
        };

        if let Err(error) =
            target.remove_event_listener_with_callback(EVENT, closure.as_ref().unchecked_ref())
        {
            log::warn!("Failed to remove listener {id:?}: {error:?}");
        }

        // The closure may be the one running right now
        self.retired.push(closure);
    }
}
