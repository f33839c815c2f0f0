//! # Ebb
//!
//! > *"Acquired at the flood, released at the ebb"*
//!
//! A Rust library for deterministic, scope-bound resource release.
//!
//! ## Philosophy
//!
//! Rust drops what it owns, but plenty of resources live outside the reach
//! of `Drop`: opaque objects handed out by a foreign API, raw file
//! descriptors, mapping ids that are really just integers. **Ebb** gives
//! those resources destructor discipline:
//!
//! - A **kind** registers a resource type together with its release
//!   function (and, for bare handles, the sentinel value that means
//!   "nothing held"). See [`OwnedKind`], [`HandleKind`], and the
//!   [`owned_kind!`] and [`handle_kind!`] macros.
//! - A **scoped binding** ([`Owned`], [`Handle`], [`Guard`]) releases
//!   whatever it still holds when its scope ends, on every exit path,
//!   exactly once. An empty binding releases nothing.
//! - **Ownership operations** compose with the automatic release:
//!   `steal` hands the resource out and suppresses the release, `clear`
//!   releases early and leaves the later automatic release a no-op.
//!
//! Multiple bindings in one scope release in reverse declaration order,
//! exactly as nested scopes unwind.
//!
//! ## Quick Example
//!
//! ```rust
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use ebb::{handle_kind, Handle};
//!
//! static CLOSED: AtomicUsize = AtomicUsize::new(0);
//!
//! fn close_descriptor(fd: i32) {
//!     let _ = fd;
//!     CLOSED.fetch_add(1, Ordering::SeqCst);
//! }
//!
//! // Descriptors are plain integers, so the kind declares which value
//! // means "no descriptor": -1, never 0.
//! handle_kind!(Descriptor: i32 = -1 => close_descriptor);
//!
//! {
//!     let sock: Handle<Descriptor> = Handle::new(3);
//!     let spare: Handle<Descriptor> = Handle::nil();
//!
//!     assert_eq!(sock.get(), 3);
//!     assert!(spare.is_nil());
//! } // `sock` is released here; `spare` held nothing and is skipped
//!
//! assert_eq!(CLOSED.load(Ordering::SeqCst), 1);
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod guard;
pub mod handle;
pub mod kind;
pub mod owned;
pub mod slot;
pub mod testing;

// Re-exports
pub use guard::{guard, Guard};
pub use handle::Handle;
pub use kind::{HandleKind, OwnedKind};
pub use owned::Owned;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::guard::{guard, Guard};
    pub use crate::handle::Handle;
    pub use crate::kind::{HandleKind, OwnedKind};
    pub use crate::owned::Owned;
}
