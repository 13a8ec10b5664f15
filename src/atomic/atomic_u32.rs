/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic 32-bit Unsigned Integer
//!
//! Provides an atomic 32-bit unsigned integer cell with load, store, wrapping add and
//! compare-and-swap.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;

use crate::atomic::atomic_integer_macro::impl_atomic_integer;
use crate::atomic::sync::Ordering;

impl_atomic_integer!(
    AtomicU32,
    crate::atomic::sync::AtomicU32,
    u32,
    "32-bit unsigned integer"
);
