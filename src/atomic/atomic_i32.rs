/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic 32-bit Signed Integer
//!
//! Provides an atomic 32-bit signed integer cell with load, store, wrapping add and
//! compare-and-swap.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;

use crate::atomic::atomic_integer_macro::impl_atomic_integer;
use crate::atomic::sync::Ordering;

impl_atomic_integer!(
    AtomicI32,
    crate::atomic::sync::AtomicI32,
    i32,
    "32-bit signed integer"
);
