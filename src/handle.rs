//! Scoped bindings for bare handles, keyed by [`HandleKind`].

use std::fmt;
use std::mem;

use crate::kind::HandleKind;
use crate::slot;

/// A scoped binding for a raw handle of kind `K`.
///
/// Unlike [`Owned`](crate::Owned), the binding stores the handle value
/// directly; emptiness is encoded by the kind's [`NIL`](HandleKind::NIL)
/// sentinel rather than by an absent value. At scope exit the handle is
/// passed to `K`'s release function if and only if it differs from the
/// sentinel.
///
/// The sentinel comparison is all that decides liveness: with `NIL = -1`,
/// a binding holding `0` is a live handle and will be released.
///
/// # Example
///
/// ```rust
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use ebb::{handle_kind, Handle};
///
/// static CLOSED: AtomicUsize = AtomicUsize::new(0);
///
/// handle_kind!(Fd: i32 = -1 => |_fd| { CLOSED.fetch_add(1, Ordering::SeqCst); });
///
/// {
///     let stdin_like: Handle<Fd> = Handle::new(0);
///     assert!(!stdin_like.is_nil());
/// } // 0 differs from -1, so it is released
///
/// assert_eq!(CLOSED.load(Ordering::SeqCst), 1);
/// ```
pub struct Handle<K: HandleKind> {
    raw: K::Handle,
}

impl<K: HandleKind> Handle<K> {
    /// Create a binding holding `handle`.
    ///
    /// Passing `K::NIL` is allowed and produces an empty binding.
    pub fn new(handle: K::Handle) -> Self {
        Handle { raw: handle }
    }

    /// Create a binding holding the kind's sentinel.
    pub fn nil() -> Self {
        Handle { raw: K::NIL }
    }

    /// True when the binding holds the sentinel.
    pub fn is_nil(&self) -> bool {
        self.raw == K::NIL
    }

    /// Copy out the raw handle without affecting ownership.
    pub fn get(&self) -> K::Handle {
        self.raw
    }

    /// Take the handle out, leaving the sentinel behind.
    ///
    /// Ownership transfers to the caller; the scope-exit release is
    /// suppressed. The returned handle may be the sentinel if the binding
    /// was already empty.
    pub fn steal(&mut self) -> K::Handle {
        slot::steal_raw(&mut self.raw, K::NIL)
    }

    /// Release the held handle now, if it differs from the sentinel.
    ///
    /// The sentinel is written back before the release function runs, so
    /// the scope-exit release (and any further `clear`) is a no-op.
    pub fn clear(&mut self) {
        if self.raw != K::NIL {
            let handle = mem::replace(&mut self.raw, K::NIL);
            #[cfg(feature = "tracing")]
            tracing::debug!("releasing {} handle", K::NAME);
            K::release(handle);
        }
    }

    /// Release the held handle through `release` instead of the kind's
    /// registered function. Same protocol as [`clear`](Handle::clear).
    pub fn clear_with<F>(&mut self, release: F)
    where
        F: FnOnce(K::Handle),
    {
        slot::clear_raw(&mut self.raw, K::NIL, release);
    }

    /// Store `handle`, releasing whatever the binding held before.
    pub fn set(&mut self, handle: K::Handle) {
        self.clear();
        self.raw = handle;
    }

    /// Store `handle` and hand back the previous one without releasing it.
    pub fn replace(&mut self, handle: K::Handle) -> K::Handle {
        mem::replace(&mut self.raw, handle)
    }

    /// Consume the binding without releasing, returning the raw handle.
    pub fn into_raw(mut self) -> K::Handle {
        self.steal()
    }
}

impl<K: HandleKind> Default for Handle<K> {
    fn default() -> Self {
        Self::nil()
    }
}

impl<K: HandleKind> Drop for Handle<K> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<K: HandleKind> fmt::Debug for Handle<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handle")
            .field("kind", &K::NAME)
            .field("state", &if self.is_nil() { "nil" } else { "held" })
            .finish()
    }
}
