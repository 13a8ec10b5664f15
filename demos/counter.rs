/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # Atomic Counter Example
//!
//! Demonstrates integer cells as thread-safe statistics counters.

use prism3_atomic_cell::{
    AtomicI64,
    AtomicU64,
};
use std::sync::Arc;
use std::thread;

#[derive(Default)]
struct Stats {
    requests: AtomicU64,
    bytes: AtomicU64,
    peak_in_flight: AtomicI64,
    in_flight: AtomicI64,
}

impl Stats {
    fn begin(&self, bytes: u64) {
        self.requests.add(1);
        self.bytes.add(bytes);
        let now = self.in_flight.add(1);

        // High-water mark: retry until our value is stored or beaten
        let mut peak = self.peak_in_flight.load();
        while now > peak && !self.peak_in_flight.compare_and_swap(peak, now) {
            peak = self.peak_in_flight.load();
        }
    }

    fn end(&self) {
        self.in_flight.add(-1);
    }
}

fn main() {
    println!("=== Atomic Counter Example ===\n");

    // Example 1: Basic counter operations
    println!("1. Basic Counter Operations:");
    let counter = AtomicI64::new(5);
    println!("   Initial value: {}", counter.load());
    println!("   After add(3): {}", counter.add(3));
    println!("   CAS(8 -> 100): {}", counter.compare_and_swap(8, 100));
    println!("   CAS(8 -> 100) again: {}", counter.compare_and_swap(8, 100));
    counter.store(0);
    println!("   After store(0): {}", counter.load());

    // Example 2: Wraparound
    println!("\n2. Wraparound:");
    let wrapping = AtomicU64::new(u64::MAX);
    println!("   u64::MAX + 1 = {}", wrapping.add(1));

    // Example 3: Multi-threaded statistics
    println!("\n3. Multi-threaded Statistics:");
    let stats = Arc::new(Stats::default());
    let num_threads = 8;
    let requests_per_thread = 1000;

    let mut handles = vec![];
    for i in 0..num_threads {
        let stats = stats.clone();
        let handle = thread::spawn(move || {
            for _ in 0..requests_per_thread {
                stats.begin(512);
                stats.end();
            }
            println!("   Thread {} completed", i);
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    println!(
        "   Requests: {} (expected: {})",
        stats.requests.load(),
        num_threads * requests_per_thread
    );
    println!("   Bytes: {}", stats.bytes.load());
    println!("   In flight: {}", stats.in_flight.load());
    println!("   Peak in flight: {}", stats.peak_in_flight.load());

    println!("\n=== Example completed ===");
}
