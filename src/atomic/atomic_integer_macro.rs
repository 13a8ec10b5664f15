/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Integer Macro
//!
//! Provides a macro to generate atomic integer cells with consistent
//! implementations.
//!
//! # Author
//!
//! Haixing Hu

/// Macro to generate atomic integer cells.
///
/// This macro generates a complete atomic integer cell with all methods,
/// trait implementations, and documentation.
///
/// # Parameters
///
/// * `$name` - The name of the cell type (e.g., `AtomicI32`)
/// * `$inner_type` - The backing primitive atomic (e.g.,
///   `crate::atomic::sync::AtomicI32`)
/// * `$value_type` - The value type (e.g., `i32`)
/// * `$doc_type` - The type description for documentation (e.g., "32-bit
///   signed integer")
macro_rules! impl_atomic_integer {
    ($name:ident, $inner_type:ty, $value_type:ty, $doc_type:expr) => {
        #[doc = concat!("Atomic ", $doc_type, " cell.")]
        ///
        /// Holds a single word that is only ever changed through atomic
        /// operations. All methods take `&self` and are safe to call from
        /// any number of threads at once.
        ///
        /// # Memory Ordering Strategy
        ///
        /// - **Read operations** (`load`): Use `Acquire` ordering to
        ///   ensure visibility of writes from other threads.
        /// - **Write operations** (`store`): Use `Release` ordering to
        ///   ensure writes are visible to other threads.
        /// - **Read-Modify-Write** (`add`, `compare_and_swap`): Use
        ///   `AcqRel` ordering for both read and write synchronization,
        ///   and `Acquire` when a compare-and-swap fails.
        ///
        /// Every operation on a single cell is linearizable. No ordering is
        /// promised between different cells beyond the acquire/release
        /// edges above.
        ///
        /// # Ownership
        ///
        /// The cell is neither `Clone` nor `Copy`. Share it by reference
        /// (`&`, `Arc`, or a `static`); the borrow checker prevents moving
        /// it while another thread can still reach it.
        ///
        /// # Example
        ///
        /// ```rust
        #[doc = concat!("use prism3_atomic_cell::", stringify!($name), ";")]
        /// use std::sync::Arc;
        /// use std::thread;
        ///
        #[doc = concat!("let counter = Arc::new(", stringify!($name), "::new(0));")]
        /// let mut handles = vec![];
        ///
        /// for _ in 0..10 {
        ///     let counter = counter.clone();
        ///     let handle = thread::spawn(move || {
        ///         for _ in 0..100 {
        ///             counter.add(1);
        ///         }
        ///     });
        ///     handles.push(handle);
        /// }
        ///
        /// for handle in handles {
        ///     handle.join().unwrap();
        /// }
        ///
        /// assert_eq!(counter.load(), 1000);
        /// ```
        ///
        /// # Author
        ///
        /// Haixing Hu
        #[repr(transparent)]
        pub struct $name {
            inner: $inner_type,
        }

        impl $name {
            /// Creates a new atomic cell.
            ///
            /// Being `const`, it can initialize `static` items.
            ///
            /// # Parameters
            ///
            /// * `value` - The initial value.
            ///
            /// # Example
            ///
            /// ```rust
            #[doc = concat!("use prism3_atomic_cell::", stringify!($name), ";")]
            ///
            #[doc = concat!("static HITS: ", stringify!($name), " = ", stringify!($name), "::new(0);")]
            ///
            #[doc = concat!("let atomic = ", stringify!($name), "::new(42);")]
            /// assert_eq!(atomic.load(), 42);
            /// assert_eq!(HITS.load(), 0);
            /// ```
            #[cfg(not(loom))]
            #[inline]
            pub const fn new(value: $value_type) -> Self {
                Self {
                    inner: <$inner_type>::new(value),
                }
            }

            /// Creates a new atomic cell backed by a `loom` atomic.
            ///
            /// # Parameters
            ///
            /// * `value` - The initial value.
            #[cfg(loom)]
            #[inline]
            pub fn new(value: $value_type) -> Self {
                Self {
                    inner: <$inner_type>::new(value),
                }
            }

            /// Loads the current value.
            ///
            /// # Memory Ordering
            ///
            /// Uses `Acquire` ordering to ensure that:
            /// - This load operation happens-before any subsequent memory
            ///   operations in the current thread.
            /// - If another thread performed a `Release` store, all writes
            ///   before that store are visible after this load.
            ///
            /// # Returns
            ///
            /// The current value.
            ///
            /// # Example
            ///
            /// ```rust
            #[doc = concat!("use prism3_atomic_cell::", stringify!($name), ";")]
            ///
            #[doc = concat!("let atomic = ", stringify!($name), "::new(42);")]
            /// assert_eq!(atomic.load(), 42);
            /// ```
            #[inline]
            pub fn load(&self) -> $value_type {
                self.inner.load(Ordering::Acquire)
            }

            /// Stores a new value.
            ///
            /// # Memory Ordering
            ///
            /// Uses `Release` ordering to ensure that:
            /// - All memory operations before this store in the current
            ///   thread happen-before the store.
            /// - When another thread performs an `Acquire` load and sees
            ///   this value, all writes before this store become visible.
            ///
            /// The previous value is not returned.
            ///
            /// # Parameters
            ///
            /// * `value` - The new value to store.
            ///
            /// # Example
            ///
            /// ```rust
            #[doc = concat!("use prism3_atomic_cell::", stringify!($name), ";")]
            ///
            #[doc = concat!("let atomic = ", stringify!($name), "::new(0);")]
            /// atomic.store(42);
            /// assert_eq!(atomic.load(), 42);
            /// ```
            #[inline]
            pub fn store(&self, value: $value_type) {
                self.inner.store(value, Ordering::Release);
            }

            /// Adds a delta to the value, returning the new value.
            ///
            /// The read, the addition and the write happen as one
            /// indivisible step. Overflow wraps around modulo 2^width and
            /// never panics, in debug builds included.
            ///
            /// # Memory Ordering
            ///
            /// Uses `AcqRel` ordering, so a cell used as a sequence or
            /// ticket number also publishes the writes made before the
            /// increment.
            ///
            /// # Parameters
            ///
            /// * `delta` - The value to add.
            ///
            /// # Returns
            ///
            /// The new value after adding.
            ///
            /// # Example
            ///
            /// ```rust
            #[doc = concat!("use prism3_atomic_cell::", stringify!($name), ";")]
            ///
            #[doc = concat!("let atomic = ", stringify!($name), "::new(5);")]
            /// assert_eq!(atomic.add(3), 8);
            /// assert_eq!(atomic.load(), 8);
            ///
            #[doc = concat!("let atomic = ", stringify!($name), "::new(", stringify!($value_type), "::MAX);")]
            #[doc = concat!("assert_eq!(atomic.add(1), ", stringify!($value_type), "::MIN);")]
            /// ```
            #[inline]
            pub fn add(&self, delta: $value_type) -> $value_type {
                self.inner
                    .fetch_add(delta, Ordering::AcqRel)
                    .wrapping_add(delta)
            }

            /// Replaces the value with `new` if it currently equals `old`.
            ///
            /// The comparison and the conditional write are a single
            /// indivisible step; no other operation on this cell can
            /// interleave between them.
            ///
            /// # Memory Ordering
            ///
            /// - **Success**: Uses `AcqRel` ordering (both Acquire and
            ///   Release) to synchronize with other threads.
            /// - **Failure**: Uses `Acquire` ordering to see the latest
            ///   value written by other threads.
            ///
            /// # Parameters
            ///
            /// * `old` - The expected current value.
            /// * `new` - The value to store if the current value matches.
            ///
            /// # Returns
            ///
            /// `true` if the value was replaced, `false` if the cell held
            /// something other than `old` and was left unchanged.
            ///
            /// # Example
            ///
            /// ```rust
            #[doc = concat!("use prism3_atomic_cell::", stringify!($name), ";")]
            ///
            #[doc = concat!("let atomic = ", stringify!($name), "::new(8);")]
            /// assert!(atomic.compare_and_swap(8, 100));
            /// assert_eq!(atomic.load(), 100);
            ///
            /// assert!(!atomic.compare_and_swap(8, 100));
            /// assert_eq!(atomic.load(), 100);
            /// ```
            #[inline]
            pub fn compare_and_swap(
                &self,
                old: $value_type,
                new: $value_type,
            ) -> bool {
                self.inner
                    .compare_exchange(old, new, Ordering::AcqRel, Ordering::Acquire)
                    .is_ok()
            }
        }

        // Trait implementations forward to the inherent methods, so
        // `atomic.load()` and `fn foo<T: Atomic>(atomic: &T)` behave the
        // same.

        impl crate::atomic::traits::Atomic for $name {
            type Value = $value_type;

            #[inline]
            fn load(&self) -> $value_type {
                self.load()
            }

            #[inline]
            fn compare_and_swap(&self, old: $value_type, new: $value_type) -> bool {
                self.compare_and_swap(old, new)
            }
        }

        impl crate::atomic::traits::AtomicInteger for $name {
            #[inline]
            fn store(&self, value: $value_type) {
                self.store(value);
            }

            #[inline]
            fn add(&self, delta: $value_type) -> $value_type {
                self.add(delta)
            }
        }

        impl Default for $name {
            #[inline]
            fn default() -> Self {
                Self::new(0)
            }
        }

        impl From<$value_type> for $name {
            #[inline]
            fn from(value: $value_type) -> Self {
                Self::new(value)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("value", &self.load())
                    .finish()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.load())
            }
        }
    };
}

pub(crate) use impl_atomic_integer;
