//! Ad-hoc scoped release with a caller-supplied release function.
//!
//! [`Guard`] is the binding to reach for when a resource has no declared
//! kind: the release function travels with the value instead of being
//! registered up front. There is no process-wide default to configure and
//! no initialization-order hazard: each guard names its own cleanup at
//! the point of use.

use std::fmt;

use crate::slot;

/// A scoped binding whose release function is supplied at construction.
///
/// Follows the same ownership protocol as [`Owned`](crate::Owned): the
/// release function runs at scope exit iff the guard still holds a value,
/// [`steal`](Guard::steal) transfers the value out and suppresses the
/// release, and [`clear`](Guard::clear) releases early and idempotently.
///
/// # Example
///
/// ```rust
/// use ebb::guard;
/// use ebb::testing::ReleaseLog;
///
/// let log = ReleaseLog::new();
/// {
///     let buffer = guard(vec![0u8; 64], log.hook("buffer"));
///     assert_eq!(buffer.as_ref().map(|b| b.len()), Some(64));
/// }
/// assert_eq!(log.entries(), ["buffer"]);
/// ```
pub struct Guard<T, F>
where
    F: FnOnce(T),
{
    slot: Option<T>,
    release: Option<F>,
}

/// Create a guard owning `value`, released by `release` at scope exit.
pub fn guard<T, F>(value: T, release: F) -> Guard<T, F>
where
    F: FnOnce(T),
{
    Guard {
        slot: Some(value),
        release: Some(release),
    }
}

impl<T, F> Guard<T, F>
where
    F: FnOnce(T),
{
    /// True when the guard no longer holds a value.
    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }

    /// Borrow the held value, if any.
    pub fn as_ref(&self) -> Option<&T> {
        self.slot.as_ref()
    }

    /// Mutably borrow the held value, if any.
    pub fn as_mut(&mut self) -> Option<&mut T> {
        self.slot.as_mut()
    }

    /// Take the value out, leaving the guard empty.
    ///
    /// The release function will not run for a stolen value.
    pub fn steal(&mut self) -> Option<T> {
        slot::steal(&mut self.slot)
    }

    /// Release the held value now, if any.
    ///
    /// The guard is left empty, so the scope-exit release becomes a no-op.
    /// Idempotent.
    pub fn clear(&mut self) {
        if let Some(value) = self.slot.take() {
            if let Some(release) = self.release.take() {
                release(value);
            }
        }
    }

    /// Consume the guard without releasing, returning the held value.
    pub fn into_inner(mut self) -> Option<T> {
        self.steal()
    }
}

impl<T, F> Drop for Guard<T, F>
where
    F: FnOnce(T),
{
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T, F> fmt::Debug for Guard<T, F>
where
    F: FnOnce(T),
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard")
            .field("state", &if self.is_empty() { "empty" } else { "held" })
            .field("release", &"<function>")
            .finish()
    }
}
