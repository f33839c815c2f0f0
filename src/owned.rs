//! Scoped bindings for owning resources, keyed by [`OwnedKind`].

use std::fmt;

use crate::kind::OwnedKind;
use crate::slot;

/// A scoped binding for a resource of kind `K`.
///
/// The binding holds at most one resource. Whatever it still holds when
/// the binding goes out of scope is passed to `K`'s release function, on
/// every exit path, exactly once. An empty binding releases nothing.
///
/// Every operation that hands the resource elsewhere ([`steal`]) or
/// releases it early ([`clear`]) resets the binding to empty first, so the
/// scope-exit release can never observe an already-released value.
///
/// [`steal`]: Owned::steal
/// [`clear`]: Owned::clear
///
/// # Example
///
/// ```rust
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use ebb::{owned_kind, Owned};
///
/// static RELEASED: AtomicUsize = AtomicUsize::new(0);
///
/// owned_kind!(Blob: Vec<u8> => |_blob| { RELEASED.fetch_add(1, Ordering::SeqCst); });
///
/// {
///     let blob: Owned<Blob> = Owned::new(vec![0u8; 16]);
///     assert!(!blob.is_empty());
/// } // released here
///
/// assert_eq!(RELEASED.load(Ordering::SeqCst), 1);
/// ```
pub struct Owned<K: OwnedKind> {
    slot: Option<K::Resource>,
}

impl<K: OwnedKind> Owned<K> {
    /// Create a binding owning `resource`.
    pub fn new(resource: K::Resource) -> Self {
        Owned {
            slot: Some(resource),
        }
    }

    /// Create a binding that holds nothing.
    pub fn empty() -> Self {
        Owned { slot: None }
    }

    /// True when the binding holds nothing.
    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }

    /// Borrow the held resource, if any.
    pub fn as_ref(&self) -> Option<&K::Resource> {
        self.slot.as_ref()
    }

    /// Mutably borrow the held resource, if any.
    pub fn as_mut(&mut self) -> Option<&mut K::Resource> {
        self.slot.as_mut()
    }

    /// Take the resource out, leaving the binding empty.
    ///
    /// Ownership transfers to the caller at this moment: the scope-exit
    /// release is suppressed, and whoever received the value is now
    /// responsible for releasing it, often by handing it to another
    /// binding or returning it further up.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::sync::atomic::{AtomicUsize, Ordering};
    /// use ebb::{owned_kind, Owned};
    ///
    /// static RELEASED: AtomicUsize = AtomicUsize::new(0);
    ///
    /// owned_kind!(Blob: Vec<u8> => |_blob| { RELEASED.fetch_add(1, Ordering::SeqCst); });
    ///
    /// let escaped = {
    ///     let mut blob: Owned<Blob> = Owned::new(vec![1, 2, 3]);
    ///     blob.steal()
    /// };
    /// assert_eq!(RELEASED.load(Ordering::SeqCst), 0);
    /// assert_eq!(escaped, Some(vec![1, 2, 3]));
    /// ```
    pub fn steal(&mut self) -> Option<K::Resource> {
        slot::steal(&mut self.slot)
    }

    /// Release the held resource now, if any.
    ///
    /// The binding is left empty, making the scope-exit release a no-op.
    /// Idempotent: a second `clear` observes the empty binding and does
    /// nothing.
    pub fn clear(&mut self) {
        if let Some(resource) = self.slot.take() {
            #[cfg(feature = "tracing")]
            tracing::debug!("releasing {} resource", K::NAME);
            K::release(resource);
        }
    }

    /// Release the held resource through `release` instead of the kind's
    /// registered function.
    ///
    /// Same protocol as [`clear`](Owned::clear): no-op when empty, and the
    /// binding is reset to empty before `release` runs.
    pub fn clear_with<F>(&mut self, release: F)
    where
        F: FnOnce(K::Resource),
    {
        slot::clear(&mut self.slot, release);
    }

    /// Store `resource`, releasing whatever the binding held before.
    pub fn set(&mut self, resource: K::Resource) {
        self.clear();
        self.slot = Some(resource);
    }

    /// Store `resource` and hand back the previous value without
    /// releasing it.
    pub fn replace(&mut self, resource: K::Resource) -> Option<K::Resource> {
        self.slot.replace(resource)
    }

    /// Consume the binding without releasing, returning the held value.
    pub fn into_inner(mut self) -> Option<K::Resource> {
        self.steal()
    }
}

impl<K: OwnedKind> Default for Owned<K> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<K: OwnedKind> Drop for Owned<K> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<K: OwnedKind> fmt::Debug for Owned<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Owned")
            .field("kind", &K::NAME)
            .field("state", &if self.is_empty() { "empty" } else { "held" })
            .finish()
    }
}
