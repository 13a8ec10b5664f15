/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Cells
//!
//! Provides single-word atomic cells with fixed memory orderings. These
//! types wrap `std::sync::atomic` types and expose only value-level
//! operations; the wrapped atomic is never handed out.
//!
//! # Features
//!
//! - One boolean and four integer cells sharing the same contract
//! - Lock-free operations compiled to single hardware instructions
//! - Zero-cost abstraction with inline methods
//! - Generic access through the `Atomic` and `AtomicInteger` traits
//!
//! # Author
//!
//! Haixing Hu

mod atomic_integer_macro;
mod atomic_bool;
mod atomic_i32;
mod atomic_i64;
mod atomic_u32;
mod atomic_u64;
mod sync;
mod traits;

pub use atomic_bool::AtomicBool;
pub use atomic_i32::AtomicI32;
pub use atomic_i64::AtomicI64;
pub use atomic_u32::AtomicU32;
pub use atomic_u64::AtomicU64;
pub use traits::{
    Atomic,
    AtomicInteger,
};
