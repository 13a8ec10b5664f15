/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # prism3-rust-atomic-cell
//!
//! Typed single-word atomic cells.
//!
//! Each cell wraps exactly one primitive word and exposes a small, uniform
//! set of lock-free operations: `load`, `store`, `add` and
//! `compare_and_swap`. The underlying storage is never handed out, so every
//! transition of the value goes through a hardware atomic instruction.
//!
//! ## Types
//!
//! - Boolean cell: `AtomicBool` (`load`, `compare_and_swap`)
//! - Integer cells: `AtomicI32`, `AtomicI64`, `AtomicU32`, `AtomicU64`
//!   (`load`, `store`, `add`, `compare_and_swap`)
//!
//! ## Embedding
//!
//! Every cell implements `Default`, so it can be placed inside a larger
//! structure without calling a constructor:
//!
//! ```rust
//! use prism3_atomic_cell::{AtomicBool, AtomicU64};
//!
//! #[derive(Default)]
//! struct Service {
//!     healthy: AtomicBool,
//!     requests: AtomicU64,
//! }
//!
//! let service = Service::default();
//! assert!(!service.healthy.load());
//! assert!(service.healthy.compare_and_swap(false, true));
//! assert_eq!(service.requests.add(1), 1);
//! ```
//!
//! ## Concurrent usage
//!
//! ```rust
//! use prism3_atomic_cell::AtomicI32;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let counter = Arc::new(AtomicI32::new(0));
//! let mut handles = vec![];
//!
//! for _ in 0..10 {
//!     let counter = counter.clone();
//!     let handle = thread::spawn(move || {
//!         for _ in 0..100 {
//!             counter.add(1);
//!         }
//!     });
//!     handles.push(handle);
//! }
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//!
//! assert_eq!(counter.load(), 1000);
//! ```
//!
//! ## Author
//!
//! Haixing Hu

#![deny(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod atomic;

// Re-export all atomic types and traits
pub use atomic::{
    Atomic,
    AtomicBool,
    AtomicI32,
    AtomicI64,
    AtomicInteger,
    AtomicU32,
    AtomicU64,
};
