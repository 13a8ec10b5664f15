/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

/// Macro to generate the shared test suite for atomic integer cells.
macro_rules! test_atomic_integer {
    ($atomic_type:ident, $value_type:ty, $test_mod:ident) => {
        mod $test_mod {
            use prism3_atomic_cell::$atomic_type;
            use std::sync::atomic::{
                AtomicUsize as StdAtomicUsize,
                Ordering,
            };
            use std::sync::{
                Arc,
                Barrier,
            };
            use std::thread;

            #[derive(Default)]
            struct Stats {
                hits: $atomic_type,
            }

            #[test]
            fn test_new() {
                let atomic = <$atomic_type>::new(42);
                assert_eq!(atomic.load(), 42);
            }

            #[test]
            fn test_new_extremes() {
                let atomic = <$atomic_type>::new(<$value_type>::MAX);
                assert_eq!(atomic.load(), <$value_type>::MAX);
                let atomic = <$atomic_type>::new(<$value_type>::MIN);
                assert_eq!(atomic.load(), <$value_type>::MIN);
            }

            #[test]
            fn test_default() {
                let atomic = <$atomic_type>::default();
                assert_eq!(atomic.load(), 0);
            }

            #[test]
            fn test_default_embedded() {
                let stats = Stats::default();
                assert_eq!(stats.hits.load(), 0);
                assert_eq!(stats.hits.add(1), 1);
            }

            #[test]
            fn test_static() {
                static CELL: $atomic_type = <$atomic_type>::new(7);
                assert_eq!(CELL.load(), 7);
            }

            #[test]
            fn test_from() {
                let atomic = <$atomic_type>::from(100);
                assert_eq!(atomic.load(), 100);
            }

            #[test]
            fn test_store_load() {
                let atomic = <$atomic_type>::new(0);
                atomic.store(42);
                assert_eq!(atomic.load(), 42);
                atomic.store(10);
                assert_eq!(atomic.load(), 10);
            }

            #[test]
            fn test_add_returns_new_value() {
                let atomic = <$atomic_type>::new(5);
                assert_eq!(atomic.add(3), 8);
                assert_eq!(atomic.load(), 8);
            }

            #[test]
            fn test_add_zero() {
                let atomic = <$atomic_type>::new(17);
                assert_eq!(atomic.add(0), 17);
                assert_eq!(atomic.load(), 17);
            }

            #[test]
            fn test_add_wraps_at_max() {
                let atomic = <$atomic_type>::new(<$value_type>::MAX);
                assert_eq!(atomic.add(1), <$value_type>::MIN);
                assert_eq!(atomic.load(), <$value_type>::MIN);
            }

            #[test]
            fn test_add_max_twice() {
                let atomic = <$atomic_type>::new(<$value_type>::MAX);
                let expected = <$value_type>::MAX.wrapping_add(<$value_type>::MAX);
                assert_eq!(atomic.add(<$value_type>::MAX), expected);
                assert_eq!(atomic.load(), expected);
            }

            #[test]
            fn test_compare_and_swap_success() {
                let atomic = <$atomic_type>::new(8);
                assert!(atomic.compare_and_swap(8, 100));
                assert_eq!(atomic.load(), 100);
            }

            #[test]
            fn test_compare_and_swap_failure() {
                let atomic = <$atomic_type>::new(100);
                assert!(!atomic.compare_and_swap(8, 100));
                assert_eq!(atomic.load(), 100);
            }

            #[test]
            fn test_compare_and_swap_same_value() {
                let atomic = <$atomic_type>::new(3);
                assert!(atomic.compare_and_swap(3, 3));
                assert_eq!(atomic.load(), 3);
            }

            #[test]
            fn test_scenario() {
                let atomic = <$atomic_type>::new(5);
                assert_eq!(atomic.load(), 5);
                assert_eq!(atomic.add(3), 8);
                assert!(atomic.compare_and_swap(8, 100));
                assert_eq!(atomic.load(), 100);
                assert!(!atomic.compare_and_swap(8, 100));
                assert_eq!(atomic.load(), 100);
            }

            #[test]
            fn test_debug_display() {
                let atomic = <$atomic_type>::new(42);
                assert_eq!(
                    format!("{:?}", atomic),
                    concat!(stringify!($atomic_type), " { value: 42 }")
                );
                assert_eq!(format!("{}", atomic), "42");
            }

            #[test]
            fn test_concurrent_add() {
                const THREADS: usize = 8;
                const ITERATIONS: usize = 1000;

                let counter = Arc::new(<$atomic_type>::new(0));
                let mut handles = vec![];

                for _ in 0..THREADS {
                    let counter = counter.clone();
                    let handle = thread::spawn(move || {
                        for _ in 0..ITERATIONS {
                            counter.add(1);
                        }
                    });
                    handles.push(handle);
                }

                for handle in handles {
                    handle.join().unwrap();
                }

                assert_eq!(counter.load(), (THREADS * ITERATIONS) as $value_type);
            }

            #[test]
            fn test_concurrent_add_returns_distinct_values() {
                const THREADS: usize = 4;
                const ITERATIONS: usize = 250;

                let counter = Arc::new(<$atomic_type>::new(0));
                let mut handles = vec![];

                for _ in 0..THREADS {
                    let counter = counter.clone();
                    let handle = thread::spawn(move || {
                        (0..ITERATIONS).map(|_| counter.add(1)).collect::<Vec<_>>()
                    });
                    handles.push(handle);
                }

                let mut seen: Vec<$value_type> = handles
                    .into_iter()
                    .flat_map(|handle| handle.join().unwrap())
                    .collect();
                seen.sort_unstable();

                let expected: Vec<$value_type> =
                    (1..=(THREADS * ITERATIONS) as $value_type).collect();
                assert_eq!(seen, expected);
            }

            #[test]
            fn test_compare_and_swap_race() {
                const THREADS: usize = 2;

                for _ in 0..100 {
                    let atomic = Arc::new(<$atomic_type>::new(0));
                    let barrier = Arc::new(Barrier::new(THREADS));
                    let winners = Arc::new(StdAtomicUsize::new(0));
                    let mut handles = vec![];

                    for _ in 0..THREADS {
                        let atomic = atomic.clone();
                        let barrier = barrier.clone();
                        let winners = winners.clone();
                        let handle = thread::spawn(move || {
                            barrier.wait();
                            if atomic.compare_and_swap(0, 1) {
                                winners.fetch_add(1, Ordering::Relaxed);
                            }
                        });
                        handles.push(handle);
                    }

                    for handle in handles {
                        handle.join().unwrap();
                    }

                    assert_eq!(winners.load(Ordering::Relaxed), 1);
                    assert_eq!(atomic.load(), 1);
                }
            }
        }
    };
}
