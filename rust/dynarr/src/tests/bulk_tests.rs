use std::cmp::Ordering;

use crate::{ArrayConfig, DynamicArray, ErrorCategory, ErrorKind};

use super::{b, check_invariants, u32_array, u32_values};

fn cmp_u32(x: &[u8], y: &[u8]) -> Ordering {
    let x = u32::from_ne_bytes(x.try_into().unwrap());
    let y = u32::from_ne_bytes(y.try_into().unwrap());
    x.cmp(&y)
}

#[test]
fn test_search() {
    let arr = u32_array(&[1, 2, 3, 2, 1]);
    assert!(arr.contains(&b(3)).unwrap());
    assert!(!arr.contains(&b(4)).unwrap());

    assert_eq!(arr.index_of(&b(1)).unwrap(), Some(0));
    assert_eq!(arr.index_of(&b(2)).unwrap(), Some(1));
    assert_eq!(arr.last_index_of(&b(2)).unwrap(), Some(3));
    assert_eq!(arr.last_index_of(&b(1)).unwrap(), Some(4));
    assert_eq!(arr.index_of(&b(9)).unwrap(), None);
    assert_eq!(arr.last_index_of(&b(9)).unwrap(), None);

    let empty = DynamicArray::new(4).unwrap();
    assert!(!empty.contains(&b(0)).unwrap());
    assert_eq!(empty.last_index_of(&b(0)).unwrap(), None);
}

#[test]
fn test_search_width_mismatch() {
    let arr = u32_array(&[1, 2]);
    let err = arr.index_of(&[1, 0]).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::InvalidArgument);
    assert!(arr.last_index_of(&[0; 8]).is_err());
    assert!(arr.contains(&[]).is_err());
}

#[test]
fn test_search_is_bytewise() {
    let mut arr = DynamicArray::with_capacity(2, 8).unwrap();
    arr.push(&0.0f64.to_ne_bytes()).unwrap();
    // -0.0 == 0.0 as floats, but the representations differ.
    assert!(!arr.contains(&(-0.0f64).to_ne_bytes()).unwrap());
    assert!(arr.contains(&0.0f64.to_ne_bytes()).unwrap());
}

#[test]
fn test_merge() {
    let mut a = u32_array(&[1, 2]);
    let b_arr = u32_array(&[3, 4]);
    a.extend_from_array(&b_arr).unwrap();
    assert_eq!(u32_values(&a), vec![1, 2, 3, 4]);
    assert_eq!(a.capacity(), 4);
    assert_eq!(u32_values(&b_arr), vec![3, 4]);
    check_invariants(&a);
}

#[test]
fn test_merge_within_capacity() {
    let mut a = DynamicArray::with_capacity(10, 4).unwrap();
    a.push(&b(1)).unwrap();
    a.extend_from_array(&u32_array(&[2, 3, 4])).unwrap();
    assert_eq!(a.capacity(), 10);
    assert_eq!(u32_values(&a), vec![1, 2, 3, 4]);
}

#[test]
fn test_merge_empty_other() {
    let mut a = u32_array(&[1]);
    a.extend_from_array(&DynamicArray::new(4).unwrap()).unwrap();
    assert_eq!(u32_values(&a), vec![1]);
    assert_eq!(a.capacity(), 1);
}

#[test]
fn test_merge_width_mismatch() {
    let mut a = u32_array(&[1]);
    let other = DynamicArray::new(2).unwrap();
    let err = a.extend_from_array(&other).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::WidthMismatch { .. }));
}

#[test]
fn test_merge_overflow_leaves_state() {
    let config = ArrayConfig::new().with_max_bytes(16);
    let mut a = DynamicArray::with_config(3, 4, config).unwrap();
    for v in [1, 2, 3] {
        a.push(&b(v)).unwrap();
    }
    let err = a.extend_from_array(&u32_array(&[4, 5])).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::CapacityOverflow { .. }));
    assert_eq!(a.capacity(), 3);
    assert_eq!(u32_values(&a), vec![1, 2, 3]);

    a.extend_from_array(&u32_array(&[4])).unwrap();
    assert_eq!(a.capacity(), 4);
    assert_eq!(u32_values(&a), vec![1, 2, 3, 4]);
}

#[test]
fn test_extend_from_bytes() {
    let mut a = DynamicArray::new(2).unwrap();
    a.extend_from_bytes(&[1, 0, 2, 0, 3, 0]).unwrap();
    assert_eq!(a.len(), 3);
    assert_eq!(a.get(2).unwrap(), &[3, 0]);

    let err = a.extend_from_bytes(&[1, 2, 3]).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::InvalidArgument);
    assert_eq!(a.len(), 3);
}

#[test]
fn test_sub_list() {
    let arr = u32_array(&[10, 20, 30, 40]);
    let mut sub = arr.sub_list(1, 3).unwrap();
    assert_eq!(u32_values(&sub), vec![20, 30]);
    assert_eq!(sub.capacity(), 2);

    sub.set(0, &b(99)).unwrap();
    sub.push(&b(50)).unwrap();
    assert_eq!(u32_values(&sub), vec![99, 30, 50]);
    assert_eq!(u32_values(&arr), vec![10, 20, 30, 40]);

    let whole = arr.sub_list(0, 4).unwrap();
    assert_eq!(whole, arr);
}

#[test]
fn test_sub_list_invalid_range() {
    let arr = u32_array(&[10, 20, 30, 40]);
    for (start, end) in [(1, 1), (3, 1), (4, 5), (0, 5)] {
        let err = arr.sub_list(start, end).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InvalidRange { .. }));
    }
}

#[test]
fn test_sub_list_inherits_config() {
    let config = ArrayConfig::new().with_auto_shrink(false);
    let mut arr = DynamicArray::with_config(4, 4, config.clone()).unwrap();
    for v in 0..4 {
        arr.push(&b(v)).unwrap();
    }
    assert_eq!(arr.sub_list(0, 2).unwrap().config(), &config);
}

#[test]
fn test_sort() {
    let mut arr = u32_array(&[5, 3, 9, 1, 3]);
    arr.sort_by(cmp_u32).unwrap();
    assert_eq!(u32_values(&arr), vec![1, 3, 3, 5, 9]);

    arr.sort_by(|x, y| cmp_u32(y, x)).unwrap();
    assert_eq!(u32_values(&arr), vec![9, 5, 3, 3, 1]);
    assert_eq!(arr.capacity(), 5);
}

#[test]
fn test_sort_empty_reported() {
    let mut arr = DynamicArray::new(4).unwrap();
    let err = arr.sort_by(cmp_u32).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::InvalidOperation);
}

#[test]
fn test_sort_is_stable() {
    // (key, tag) pairs sorted by key only.
    let pairs = [(3u32, 0u32), (1, 1), (3, 2), (2, 3), (1, 4), (3, 5)];
    let mut arr = DynamicArray::new(8).unwrap();
    for (key, tag) in pairs {
        let mut element = [0u8; 8];
        element[..4].copy_from_slice(&key.to_ne_bytes());
        element[4..].copy_from_slice(&tag.to_ne_bytes());
        arr.push(&element).unwrap();
    }
    arr.sort_by(|x, y| cmp_u32(&x[..4], &y[..4])).unwrap();
    let tags: Vec<u32> = arr
        .iter()
        .map(|e| u32::from_ne_bytes(e[4..].try_into().unwrap()))
        .collect();
    assert_eq!(tags, vec![1, 4, 3, 0, 2, 5]);
}

#[test]
fn test_sort_random() {
    fastrand::seed(917364);
    for len in [1usize, 2, 17, 500] {
        let values: Vec<u32> = (0..len).map(|_| fastrand::u32(..1000)).collect();
        let mut arr = u32_array(&values);
        arr.sort_by(cmp_u32).unwrap();
        let mut expected = values.clone();
        expected.sort();
        assert_eq!(u32_values(&arr), expected);
    }
}
