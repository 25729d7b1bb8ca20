//! Buffer-backed container tests.
//!
//! Construction, bounds, growth and resize, plus the invariants around
//! spare cells past `size`.

use linear_containers::{ArrayStack, DynamicArray, Error, List, Stack, CAPACITY_GROWTH, INIT_CAPACITY};

/// Values `1..=n`, distinct so positions can be told apart.
fn distinct(n: usize) -> Vec<i32> {
    (1..=n as i32).collect()
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_default_construction() {
    let stack = ArrayStack::default();
    let array = DynamicArray::default();

    assert!(stack.is_empty());
    assert!(array.is_empty());
    assert_eq!(stack.capacity(), INIT_CAPACITY);
    assert_eq!(array.capacity(), INIT_CAPACITY);
    assert!(stack.cells().iter().all(|&cell| cell == 0));
    assert!(array.cells().iter().all(|&cell| cell == 0));
}

#[test]
fn test_construction_with_capacity() {
    for capacity in 1..=10 {
        let stack = ArrayStack::new(capacity).unwrap();
        assert_eq!(stack.size(), 0);
        assert_eq!(stack.capacity(), capacity);
        assert_eq!(stack.cells(), vec![0; capacity].as_slice());

        let array = DynamicArray::new(capacity).unwrap();
        assert_eq!(array.size(), 0);
        assert_eq!(array.capacity(), capacity);
        assert_eq!(array.cells(), vec![0; capacity].as_slice());
    }
}

#[test]
fn test_zero_capacity_is_invalid_argument() {
    let err = ArrayStack::new(0).unwrap_err();
    assert!(err.is_invalid_argument());
    assert_eq!(err, Error::InvalidCapacity(0));

    let err = DynamicArray::new(0).unwrap_err();
    assert_eq!(err, Error::InvalidCapacity(0));
}

#[test]
fn test_seed_values_must_fit() {
    assert_eq!(
        DynamicArray::from_values(&[1, 2, 3], 2).unwrap_err(),
        Error::TooManyValues {
            len: 3,
            capacity: 2
        }
    );
    assert!(ArrayStack::from_values(&[1, 2, 3], 3).is_ok());
}

// ============================================================================
// ArrayStack
// ============================================================================

/// Stack with capacity 3: three pushes fill it, the fourth grows it by 5.
#[test]
fn test_stack_growth_scenario() {
    let mut stack = ArrayStack::new(3).unwrap();
    stack.push(1);
    stack.push(2);
    stack.push(3);
    assert_eq!(stack.size(), 3);
    assert_eq!(stack.capacity(), 3);

    stack.push(4);
    assert_eq!(stack.size(), 4);
    assert_eq!(stack.capacity(), 8);
    assert_eq!(stack.peek(), Some(4));
    assert_eq!(&stack.cells()[..4], &[1, 2, 3, 4]);
    assert_eq!(&stack.cells()[4..], &[0, 0, 0, 0]);
}

#[test]
fn test_stack_push_onto_full_preserves_order() {
    for capacity in 1..=10 {
        let values = distinct(capacity);
        let mut stack = ArrayStack::from_values(&values, capacity).unwrap();
        stack.push(100);

        assert_eq!(stack.size(), capacity + 1);
        assert_eq!(stack.capacity(), capacity + CAPACITY_GROWTH);
        assert_eq!(&stack.as_slice()[..capacity], values.as_slice());
        assert_eq!(stack.peek(), Some(100));
    }
}

#[test]
fn test_stack_pop_empty_changes_nothing() {
    let mut stack = ArrayStack::new(4).unwrap();
    assert_eq!(stack.pop(), None);
    assert_eq!(stack.size(), 0);
    assert_eq!(stack.capacity(), 4);
    assert_eq!(stack.cells(), &[0, 0, 0, 0]);
}

#[test]
fn test_stack_clear_then_reuse() {
    let mut stack = ArrayStack::from_values(&[1, 2, 3], 3).unwrap();
    stack.clear();
    assert!(stack.is_empty());
    assert_eq!(stack.peek(), None);
    assert_eq!(stack.capacity(), 3);

    stack.push(9);
    assert_eq!(stack.as_slice(), &[9]);
    assert_eq!(stack.cells(), &[9, 2, 3]);
}

#[test]
fn test_stack_resize() {
    for capacity in 1..=6 {
        for size in 0..=capacity {
            let values = distinct(size);
            let mut stack = ArrayStack::from_values(&values, capacity).unwrap();

            for new_capacity in 0..=capacity {
                assert!(stack.resize(new_capacity).is_err());
                assert_eq!(stack.capacity(), capacity);
                assert_eq!(stack.as_slice(), values.as_slice());
            }

            stack.resize(capacity + 3).unwrap();
            assert_eq!(stack.capacity(), capacity + 3);
            assert_eq!(stack.as_slice(), values.as_slice());
        }
    }
}

// ============================================================================
// DynamicArray
// ============================================================================

#[test]
fn test_array_get_out_of_range() {
    for capacity in 1..=5 {
        let array = DynamicArray::new(capacity).unwrap();
        for index in 0..capacity + 10 {
            assert_eq!(array.get(index), None);
        }
    }
}

#[test]
fn test_array_set_out_of_range_changes_nothing() {
    let values = distinct(3);
    let mut array = DynamicArray::from_values(&values, 5).unwrap();
    for index in 3..10 {
        assert!(!array.set(index, -1));
    }
    assert_eq!(array.size(), 3);
    assert_eq!(array.capacity(), 5);
    assert_eq!(array.cells(), &[1, 2, 3, 0, 0]);
}

#[test]
fn test_array_insert_every_position() {
    for capacity in 1..=5 {
        for size in 0..=capacity {
            let values = distinct(size);
            for index in 0..=size {
                let mut array = DynamicArray::from_values(&values, capacity).unwrap();
                assert!(array.insert(index, 0));

                let mut expected = values.clone();
                expected.insert(index, 0);
                assert_eq!(array.as_slice(), expected.as_slice());

                let expected_capacity = if size == capacity {
                    capacity + CAPACITY_GROWTH
                } else {
                    capacity
                };
                assert_eq!(array.capacity(), expected_capacity);
            }
        }
    }
}

#[test]
fn test_array_insert_past_end_changes_nothing() {
    let values = distinct(2);
    let mut array = DynamicArray::from_values(&values, 2).unwrap();
    assert!(!array.insert(3, 7));
    assert_eq!(array.capacity(), 2);
    assert_eq!(array.as_slice(), values.as_slice());
}

#[test]
fn test_array_remove_every_position() {
    let values = distinct(5);
    for index in 0..values.len() {
        let mut array = DynamicArray::from_values(&values, 5).unwrap();
        assert_eq!(array.remove(index), Some(values[index]));

        let mut expected = values.clone();
        expected.remove(index);
        assert_eq!(array.as_slice(), expected.as_slice());
    }
}

#[test]
fn test_array_remove_empty() {
    let mut array = DynamicArray::new(3).unwrap();
    assert_eq!(array.remove(0), None);
    assert!(array.is_empty());
}

#[test]
fn test_array_index_of_agrees_with_contains() {
    let array = DynamicArray::from_values(&[5, 3, 5, 8], 6).unwrap();
    for value in 0..10 {
        assert_eq!(array.contains(value), array.index_of(value).is_some());
    }
    assert_eq!(array.index_of(5), Some(0));
    assert_eq!(array.index_of(8), Some(3));
}

// ============================================================================
// Interfaces
// ============================================================================

/// Fills any list through the trait and reads it back.
fn fill_list(list: &mut dyn List, values: &[i32]) -> Vec<i32> {
    for &value in values {
        list.add(value);
    }
    (0..list.size()).filter_map(|index| list.get(index)).collect()
}

#[test]
fn test_array_as_list() {
    let mut array = DynamicArray::new(1).unwrap();
    assert_eq!(fill_list(&mut array, &[1, 2, 3]), vec![1, 2, 3]);
    assert_eq!(array.capacity(), 1 + CAPACITY_GROWTH);
}

#[test]
fn test_stack_as_trait_object() {
    let mut stack: Box<dyn Stack> = Box::new(ArrayStack::default());
    stack.push(1);
    stack.push(2);
    assert_eq!(stack.peek(), Some(2));
    assert_eq!(stack.pop(), Some(2));
    stack.clear();
    assert!(stack.is_empty());
}
