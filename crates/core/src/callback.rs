//! Hook into menu transitions.
use std::fmt;
use std::rc::Rc;

/// A hook invoked with no arguments when a transition happens.
///
/// The return value of the hook is ignored.
#[derive(Clone)]
pub struct Callback(Rc<dyn Fn()>);

impl Callback {
    /// Creates a new [`Callback`] from a closure.
    pub fn new(f: impl Fn() + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// Invokes the [`Callback`].
    pub fn call(&self) {
        (self.0)();
    }
}

impl<F> From<F> for Callback
where
    F: Fn() + 'static,
{
    fn from(f: F) -> Self {
        Self::new(f)
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback(..)")
    }
}

/// Invokes `callback` if present.
pub fn invoke(callback: Option<&Callback>) {
    if let Some(callback) = callback {
        callback.call();
    }
}
