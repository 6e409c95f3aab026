//! Reference elements of a host surface.

/// An opaque handle to an element owned by a [`Host`].
///
/// Handles are only meaningful to the host that produced them.
///
/// [`Host`]: crate::Host
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Element(u64);

impl Element {
    /// Creates an [`Element`] from its raw value.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw value of the [`Element`].
    #[must_use]
    pub const fn as_raw(self) -> u64 {
        self.0
    }
}
