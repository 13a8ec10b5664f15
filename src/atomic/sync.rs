/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! Backing primitive atomics.
//!
//! Regular builds use `std::sync::atomic`. Building with `--cfg loom` swaps
//! in the `loom` equivalents so that the cells can be model checked.

#[cfg(not(loom))]
pub(crate) use std::sync::atomic::{
    AtomicBool,
    AtomicI32,
    AtomicI64,
    AtomicU32,
    AtomicU64,
    Ordering,
};

#[cfg(loom)]
pub(crate) use loom::sync::atomic::{
    AtomicBool,
    AtomicI32,
    AtomicI64,
    AtomicU32,
    AtomicU64,
    Ordering,
};
