/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # Health Flag Example
//!
//! Demonstrates a boolean cell embedded in a service object.

use prism3_atomic_cell::AtomicBool;
use std::sync::Arc;
use std::thread;

/// A flaky service whose health is probed from many threads.
#[derive(Default)]
struct Service {
    health: AtomicBool,
}

impl Service {
    fn mark_healthy(&self) -> bool {
        self.health.compare_and_swap(false, true)
    }

    fn mark_unhealthy(&self) -> bool {
        self.health.compare_and_swap(true, false)
    }
}

fn main() {
    println!("=== Health Flag Example ===\n");

    // Example 1: Zero value
    println!("1. Zero Value:");
    let service = Service::default();
    println!("   service is healthy? {}", service.health.load());

    // Example 2: Transitions
    println!("\n2. Transitions:");
    println!("   mark_healthy: {}", service.mark_healthy());
    println!("   mark_healthy again: {}", service.mark_healthy());
    println!(
        "   CAS(true, true): {} (never a swap)",
        service.health.compare_and_swap(true, true)
    );
    println!("   mark_unhealthy: {}", service.mark_unhealthy());

    // Example 3: Racing recoveries
    println!("\n3. Racing Recoveries:");
    let service = Arc::new(Service::default());
    let mut handles = vec![];

    for i in 0..5 {
        let service = service.clone();
        let handle = thread::spawn(move || {
            if service.mark_healthy() {
                println!("   Thread {} brought the service up", i);
            } else {
                println!("   Thread {} found it already up", i);
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    println!("   Final state: healthy = {}", service.health.load());

    println!("\n=== Example completed ===");
}
