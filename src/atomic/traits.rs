/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Traits
//!
//! Defines common traits for atomic cells, providing a unified interface
//! for code that is generic over the cell type.
//!
//! # Author
//!
//! Haixing Hu

/// Common trait for all atomic cells.
///
/// Provides the two operations every cell supports: load and
/// compare-and-swap.
///
/// # Author
///
/// Haixing Hu
pub trait Atomic {
    /// The value type stored in the cell.
    type Value;

    /// Loads the current value.
    ///
    /// Uses `Acquire` ordering.
    ///
    /// # Returns
    ///
    /// The current value.
    fn load(&self) -> Self::Value;

    /// Replaces the value with `new` if it currently equals `old`.
    ///
    /// The comparison and the write form a single indivisible step. Uses
    /// `AcqRel` ordering on success and `Acquire` ordering on failure.
    ///
    /// # Parameters
    ///
    /// * `old` - The expected current value.
    /// * `new` - The value to store if the current value matches.
    ///
    /// # Returns
    ///
    /// `true` if the value was replaced, `false` otherwise.
    fn compare_and_swap(&self, old: Self::Value, new: Self::Value) -> bool;
}

/// Trait for atomic integer cells.
///
/// Adds unconditional store and wrapping addition.
///
/// # Author
///
/// Haixing Hu
pub trait AtomicInteger: Atomic {
    /// Stores a new value.
    ///
    /// Uses `Release` ordering.
    ///
    /// # Parameters
    ///
    /// * `value` - The new value to store.
    fn store(&self, value: Self::Value);

    /// Adds a delta to the value, returning the new value.
    ///
    /// Overflow wraps around modulo 2^width. Uses `AcqRel` ordering.
    ///
    /// # Parameters
    ///
    /// * `delta` - The value to add.
    ///
    /// # Returns
    ///
    /// The new value after adding.
    fn add(&self, delta: Self::Value) -> Self::Value;
}
