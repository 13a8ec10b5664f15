/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic 64-bit Unsigned Integer
//!
//! Provides an atomic 64-bit unsigned integer cell with load, store, wrapping add and
//! compare-and-swap.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;

use crate::atomic::atomic_integer_macro::impl_atomic_integer;
use crate::atomic::sync::Ordering;

impl_atomic_integer!(
    AtomicU64,
    crate::atomic::sync::AtomicU64,
    u64,
    "64-bit unsigned integer"
);
