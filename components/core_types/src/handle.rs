//! Opaque references into the engine heap.

use std::fmt;

/// An opaque, non-owning reference to an object living in the engine heap.
///
/// Frames carry the receiver and function of each activation so that
/// later consumers can look them up again. Nothing in this workspace
/// dereferences a handle; it is only compared and passed along.
///
/// # Examples
///
/// ```
/// use core_types::ObjectHandle;
///
/// let handle = ObjectHandle::new(7);
/// assert_eq!(handle.id(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectHandle(u64);

impl ObjectHandle {
    /// Wraps a raw engine identifier.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw engine identifier.
    pub fn id(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ObjectHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
