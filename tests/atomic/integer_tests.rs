/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

test_atomic_integer!(AtomicI32, i32, atomic_i32_tests);
test_atomic_integer!(AtomicI64, i64, atomic_i64_tests);
test_atomic_integer!(AtomicU32, u32, atomic_u32_tests);
test_atomic_integer!(AtomicU64, u64, atomic_u64_tests);

mod signed_tests {
    use prism3_atomic_cell::{
        AtomicI32,
        AtomicI64,
    };

    #[test]
    fn test_add_negative_delta() {
        let atomic = AtomicI32::new(10);
        assert_eq!(atomic.add(-15), -5);
        assert_eq!(atomic.load(), -5);
    }

    #[test]
    fn test_add_wraps_at_min() {
        let atomic = AtomicI64::new(i64::MIN);
        assert_eq!(atomic.add(-1), i64::MAX);
        assert_eq!(atomic.load(), i64::MAX);
    }

    #[test]
    fn test_compare_and_swap_negative() {
        let atomic = AtomicI64::new(-1);
        assert!(atomic.compare_and_swap(-1, i64::MIN));
        assert_eq!(atomic.load(), i64::MIN);
    }
}

mod unsigned_tests {
    use prism3_atomic_cell::{
        AtomicU32,
        AtomicU64,
    };

    #[test]
    fn test_add_wraps_modulo_width() {
        let atomic = AtomicU32::new(u32::MAX - 1);
        assert_eq!(atomic.add(5), 3);
        assert_eq!(atomic.load(), 3);
    }

    #[test]
    fn test_add_max_acts_as_decrement() {
        let atomic = AtomicU64::new(10);
        assert_eq!(atomic.add(u64::MAX), 9);
        assert_eq!(atomic.load(), 9);
    }

    #[test]
    fn test_compare_and_swap_bitwise_equality() {
        let atomic = AtomicU64::new(u64::MAX);
        assert!(!atomic.compare_and_swap(u64::MAX - 1, 0));
        assert!(atomic.compare_and_swap(u64::MAX, 0));
        assert_eq!(atomic.load(), 0);
    }
}
