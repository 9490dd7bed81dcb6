use crate::DynamicArray;

mod bulk_tests;

/// Builds a `u32` array with capacity exactly `values.len()`.
fn u32_array(values: &[u32]) -> DynamicArray {
    let mut arr = DynamicArray::with_capacity(values.len(), 4).unwrap();
    for v in values {
        arr.push(&v.to_ne_bytes()).unwrap();
    }
    arr
}

fn u32_values(arr: &DynamicArray) -> Vec<u32> {
    arr.iter()
        .map(|e| u32::from_ne_bytes(e.try_into().unwrap()))
        .collect()
}

fn b(v: u32) -> [u8; 4] {
    v.to_ne_bytes()
}

fn check_invariants(arr: &DynamicArray) {
    assert!(arr.len() <= arr.capacity());
    assert_eq!(arr.as_bytes().len(), arr.len() * arr.element_width());
    assert!(
        crate::capacity::checked_bytes(
            arr.capacity(),
            arr.element_width(),
            arr.config().max_bytes
        )
        .is_some()
    );
}
