//! Kind registration: pairing a resource type with its release policy.
//!
//! A *kind* is a zero-sized marker type implementing [`OwnedKind`] or
//! [`HandleKind`]. The marker, not the resource type, selects the release
//! behavior of a scoped binding: one base type may carry several unrelated
//! cleanup policies (an `i32` may be a descriptor to close or a mapping to
//! unmap), and each policy gets its own marker.
//!
//! The [`owned_kind!`](crate::owned_kind) and
//! [`handle_kind!`](crate::handle_kind) macros declare a marker and its
//! impl in one step.
//!
//! Using a type with no registered kind as a scoped binding is a compile
//! error, not a runtime one:
//!
//! ```compile_fail
//! use ebb::Owned;
//!
//! // Vec<u8> is a resource type, not a registered kind.
//! let scratch: Owned<Vec<u8>> = Owned::empty();
//! ```

/// A registered owning kind: a resource type plus the function that
/// releases it.
///
/// The empty state of an [`Owned`](crate::Owned) binding of this kind is
/// universal (the binding simply holds nothing), so `release` is only
/// ever invoked on values the binding actually held.
///
/// Implement by hand or through [`owned_kind!`](crate::owned_kind).
pub trait OwnedKind {
    /// The resource type managed by bindings of this kind.
    type Resource;

    /// Kind name used in debug output and trace events.
    const NAME: &'static str;

    /// Release one resource of this kind.
    ///
    /// Called at most once per held value. The release function must
    /// tolerate values whose construction bailed out early, e.g. by
    /// keeping optional sub-fields unset until they are live.
    fn release(resource: Self::Resource);
}

/// A registered handle kind: a bare value type, the sentinel meaning
/// "no handle", and the function that releases live handles.
///
/// Handles are small copyable values (descriptors, ids) with no universal
/// empty value, so each kind fixes its own [`NIL`](HandleKind::NIL) at
/// registration time. `0` is often a valid live handle; pick the sentinel
/// the releasing API treats as absent (commonly `-1`).
///
/// Implement by hand or through [`handle_kind!`](crate::handle_kind).
pub trait HandleKind {
    /// The raw handle type.
    type Handle: Copy + PartialEq;

    /// Kind name used in debug output and trace events.
    const NAME: &'static str;

    /// The sentinel standing for "no handle held".
    const NIL: Self::Handle;

    /// Release one live handle of this kind.
    ///
    /// Never called with [`NIL`](HandleKind::NIL).
    fn release(handle: Self::Handle);
}

/// Declare a zero-sized marker type implementing [`OwnedKind`].
///
/// The marker name doubles as the kind's `NAME`. The release expression
/// may be a closure or the path of a function taking the resource by
/// value. Declaring two kinds over the same base type gives each its own
/// release policy.
///
/// # Example
///
/// ```rust
/// use ebb::{owned_kind, Owned};
///
/// owned_kind!(Scratch: String => |s| drop(s));
///
/// let mut note: Owned<Scratch> = Owned::new(String::from("draft"));
/// note.clear();
/// assert!(note.is_empty());
/// ```
#[macro_export]
macro_rules! owned_kind {
    ($(#[$meta:meta])* $vis:vis $name:ident: $resource:ty => $release:expr $(;)?) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::OwnedKind for $name {
            type Resource = $resource;

            const NAME: &'static str = stringify!($name);

            fn release(resource: Self::Resource) {
                ($release)(resource)
            }
        }
    };
}

/// Declare a zero-sized marker type implementing [`HandleKind`].
///
/// The sentinel is fixed here, at registration time, and must be a
/// constant expression. The release expression may be a closure or a
/// function path taking the handle by value.
///
/// # Example
///
/// ```rust
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use ebb::{handle_kind, Handle};
///
/// static UNMAPPED: AtomicUsize = AtomicUsize::new(0);
///
/// handle_kind!(MapId: u64 = 0 => |_id| { UNMAPPED.fetch_add(1, Ordering::SeqCst); });
///
/// {
///     let _mapping: Handle<MapId> = Handle::new(41);
/// }
/// assert_eq!(UNMAPPED.load(Ordering::SeqCst), 1);
/// ```
#[macro_export]
macro_rules! handle_kind {
    ($(#[$meta:meta])* $vis:vis $name:ident: $handle:ty = $nil:expr => $release:expr $(;)?) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::HandleKind for $name {
            type Handle = $handle;

            const NAME: &'static str = stringify!($name);

            const NIL: Self::Handle = $nil;

            fn release(handle: Self::Handle) {
                ($release)(handle)
            }
        }
    };
}
