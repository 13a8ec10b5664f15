/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Boolean
//!
//! Provides an atomic boolean cell that is flipped between known states with
//! compare-and-swap.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;

use crate::atomic::sync::{
    AtomicBool as RawAtomicBool,
    Ordering,
};
use crate::atomic::traits::Atomic;

/// Atomic boolean cell.
///
/// A flag that can only be moved from a known state to the opposite state.
/// There is deliberately no unconditional `store`: every transition is a
/// `compare_and_swap`, so two threads can never both believe they flipped
/// the flag.
///
/// # Memory Ordering Strategy
///
/// - **Read operations** (`load`): Use `Acquire` ordering to ensure that
///   all writes from other threads that happened before a successful
///   transition are visible after this load.
///
/// - **Transitions** (`compare_and_swap`): Use `AcqRel` ordering on success
///   and `Acquire` ordering on failure.
///
/// # Example
///
/// ```rust
/// use prism3_atomic_cell::AtomicBool;
/// use std::sync::Arc;
/// use std::thread;
///
/// let flag = Arc::new(AtomicBool::default());
/// let flag_clone = flag.clone();
///
/// let handle = thread::spawn(move || {
///     flag_clone.compare_and_swap(false, true)
/// });
///
/// assert!(handle.join().unwrap());
/// assert_eq!(flag.load(), true);
/// ```
///
/// # Author
///
/// Haixing Hu
#[repr(transparent)]
pub struct AtomicBool {
    inner: RawAtomicBool,
}

impl AtomicBool {
    /// Creates a new atomic boolean.
    ///
    /// # Parameters
    ///
    /// * `value` - The initial value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_atomic_cell::AtomicBool;
    ///
    /// let flag = AtomicBool::new(true);
    /// assert_eq!(flag.load(), true);
    /// ```
    #[cfg(not(loom))]
    #[inline]
    pub const fn new(value: bool) -> Self {
        Self {
            inner: RawAtomicBool::new(value),
        }
    }

    /// Creates a new atomic boolean backed by a `loom` atomic.
    ///
    /// # Parameters
    ///
    /// * `value` - The initial value.
    #[cfg(loom)]
    #[inline]
    pub fn new(value: bool) -> Self {
        Self {
            inner: RawAtomicBool::new(value),
        }
    }

    /// Loads the current value.
    ///
    /// Uses `Acquire` ordering.
    ///
    /// # Returns
    ///
    /// The current value.
    #[inline]
    pub fn load(&self) -> bool {
        self.inner.load(Ordering::Acquire)
    }

    /// Flips the value from `old` to `new` if it currently equals `old`.
    ///
    /// Only two requests can ever succeed:
    ///
    /// - `compare_and_swap(false, true)` when the flag is `false`;
    /// - `compare_and_swap(true, false)` when the flag is `true`.
    ///
    /// A request with `old == new` could never change the flag and always
    /// returns `false` without touching the cell, whatever its current
    /// value.
    ///
    /// # Memory Ordering
    ///
    /// - **Success**: Uses `AcqRel` ordering.
    /// - **Failure**: Uses `Acquire` ordering.
    ///
    /// # Parameters
    ///
    /// * `old` - The expected current value.
    /// * `new` - The value to store if the current value matches.
    ///
    /// # Returns
    ///
    /// `true` if the flag was flipped, `false` otherwise.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_atomic_cell::AtomicBool;
    ///
    /// let flag = AtomicBool::default();
    /// assert!(flag.compare_and_swap(false, true));
    /// assert_eq!(flag.load(), true);
    ///
    /// // Same state on both sides: never reported as a swap
    /// assert!(!flag.compare_and_swap(true, true));
    /// ```
    #[inline]
    pub fn compare_and_swap(&self, old: bool, new: bool) -> bool {
        if old == new {
            return false;
        }
        self.inner
            .compare_exchange(old, new, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }
}

impl Atomic for AtomicBool {
    type Value = bool;

    #[inline]
    fn load(&self) -> bool {
        self.load()
    }

    #[inline]
    fn compare_and_swap(&self, old: bool, new: bool) -> bool {
        self.compare_and_swap(old, new)
    }
}

impl Default for AtomicBool {
    #[inline]
    fn default() -> Self {
        Self::new(false)
    }
}

impl From<bool> for AtomicBool {
    #[inline]
    fn from(value: bool) -> Self {
        Self::new(value)
    }
}

impl fmt::Debug for AtomicBool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AtomicBool")
            .field("value", &self.load())
            .finish()
    }
}

impl fmt::Display for AtomicBool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.load())
    }
}
