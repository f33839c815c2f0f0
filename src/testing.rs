//! Testing utilities for code built on scoped release.
//!
//! The central helper is [`ReleaseLog`]: a cheap, cloneable recorder of
//! release events. Hand its [`hook`](ReleaseLog::hook) closures to guards
//! or `clear_with` call sites, then assert on the recorded sequence:
//! release order is observable, not inferred.
//!
//! # Examples
//!
//! ```rust
//! use ebb::guard;
//! use ebb::testing::ReleaseLog;
//!
//! let log = ReleaseLog::new();
//! {
//!     let _a = guard((), log.hook("a"));
//!     let _b = guard((), log.hook("b"));
//! }
//! // reverse declaration order
//! assert_eq!(log.entries(), ["b", "a"]);
//! ```
//!
//! The [`assert_released!`](crate::assert_released) macro asserts the
//! exact ordered sequence in one line:
//!
//! ```rust
//! use ebb::{assert_released, guard};
//! use ebb::testing::ReleaseLog;
//!
//! let log = ReleaseLog::new();
//! drop(guard(1u8, log.hook("one")));
//! assert_released!(log, ["one"]);
//! ```

use std::sync::{Arc, Mutex};

/// A shared, ordered record of release events.
///
/// Clones share the same underlying record, so a log can be handed into
/// release closures and inspected afterwards from the test body.
#[derive(Clone, Debug, Default)]
pub struct ReleaseLog {
    entries: Arc<Mutex<Vec<String>>>,
}

impl ReleaseLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one entry.
    pub fn record<S>(&self, label: S)
    where
        S: Into<String>,
    {
        self.lock().push(label.into());
    }

    /// Build a release function that records `label` when invoked.
    ///
    /// The returned closure discards the released value; it only logs
    /// that the release happened.
    pub fn hook<T, S>(&self, label: S) -> impl FnOnce(T)
    where
        S: Into<String>,
    {
        let log = self.clone();
        let label = label.into();
        move |_value: T| log.record(label)
    }

    /// Snapshot of all entries, in release order.
    pub fn entries(&self) -> Vec<String> {
        self.lock().clone()
    }

    /// How many times `label` was recorded.
    pub fn count(&self, label: &str) -> usize {
        self.lock().iter().filter(|e| e.as_str() == label).count()
    }

    /// Total number of recorded releases.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// True when nothing has been released yet.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Assert that a [`ReleaseLog`] recorded exactly the given sequence.
///
/// # Example
///
/// ```rust
/// use ebb::{assert_released, guard};
/// use ebb::testing::ReleaseLog;
///
/// let log = ReleaseLog::new();
/// {
///     let _conn = guard("conn", log.hook("conn"));
///     let _buf = guard(Vec::<u8>::new(), log.hook("buf"));
/// }
/// assert_released!(log, ["buf", "conn"]);
/// ```
#[macro_export]
macro_rules! assert_released {
    ($log:expr, [$($label:expr),* $(,)?]) => {{
        let expected: ::std::vec::Vec<::std::string::String> =
            ::std::vec![$(::std::string::String::from($label)),*];
        assert_eq!($log.entries(), expected);
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hooks_record_labels_in_call_order() {
        let log = ReleaseLog::new();
        let first = log.hook("a");
        let second = log.hook("b");
        second(1u8);
        first(2u8);
        assert_eq!(log.entries(), ["b", "a"]);
        assert_eq!(log.len(), 2);
        assert_eq!(log.count("a"), 1);
        assert_eq!(log.count("missing"), 0);
    }

    #[test]
    fn clones_share_one_record() {
        let log = ReleaseLog::new();
        let alias = log.clone();
        alias.record("x");
        assert_eq!(log.entries(), ["x"]);
    }

    #[test]
    fn assert_released_accepts_the_exact_sequence() {
        let log = ReleaseLog::new();
        log.record("x");
        log.record("y");
        assert_released!(log, ["x", "y"]);
    }

    #[test]
    fn assert_released_accepts_an_empty_log() {
        let log = ReleaseLog::new();
        assert!(log.is_empty());
        assert_released!(log, []);
    }

    #[test]
    #[should_panic(expected = "assertion")]
    fn assert_released_rejects_a_mismatch() {
        let log = ReleaseLog::new();
        log.record("x");
        assert_released!(log, ["y"]);
    }

    #[test]
    #[should_panic(expected = "assertion")]
    fn assert_released_rejects_a_wrong_order() {
        let log = ReleaseLog::new();
        log.record("a");
        log.record("b");
        assert_released!(log, ["b", "a"]);
    }
}
