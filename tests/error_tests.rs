use growvec::{growvec, FixedArray, GrowVec, GrowVecError};

#[test]
fn test_error_at_past_end() {
    let v = growvec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
    let result = v.at(20);
    assert_eq!(
        result.unwrap_err(),
        GrowVecError::OutOfRange {
            index: 20,
            size: 10,
            operation: "at",
        }
    );
}

#[test]
fn test_error_at_size_boundary() {
    let v = growvec![4, 5, 6];

    assert_eq!(v.at(v.size() - 1), Ok(&6));
    assert!(v.at(v.size()).is_err());
}

#[test]
fn test_error_at_on_empty() {
    let mut v: GrowVec<i32> = GrowVec::new();
    assert!(v.at(0).is_err());
    assert!(v.at_mut(0).is_err());
}

#[test]
fn test_error_front_back_on_empty() {
    let mut v: GrowVec<String> = GrowVec::new();

    match v.front().unwrap_err() {
        GrowVecError::OutOfRange {
            size, operation, ..
        } => {
            assert_eq!(size, 0);
            assert_eq!(operation, "front");
        }
    }
    assert!(matches!(
        v.back(),
        Err(GrowVecError::OutOfRange {
            operation: "back",
            ..
        })
    ));
    assert!(v.front_mut().is_err());
    assert!(v.back_mut().is_err());
}

#[test]
fn test_error_accessors() {
    let v = growvec![1];
    let err = v.at(7).unwrap_err();
    assert_eq!(err.index(), 7);
    assert_eq!(err.size(), 1);
}

#[test]
fn test_error_display() {
    let v = growvec![1, 2];
    let err = v.at(5).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Index out of range in at(): index 5 is beyond size 2"
    );
}

#[test]
fn test_failed_access_leaves_container_unchanged() {
    let mut v = growvec![1, 2, 3];
    v.reserve(40);

    let _ = v.at(3);
    let _ = v.at_mut(100);

    assert_eq!(v, [1, 2, 3]);
    assert_eq!(v.capacity(), 48);
}

#[test]
fn test_error_after_clear() {
    let mut v = growvec![1, 2, 3];
    v.clear();

    assert!(v.front().is_err());
    assert!(v.at(0).is_err());
}

#[test]
fn test_error_fixed_array() {
    let a: FixedArray<u8, 3> = FixedArray::new();
    assert_eq!(
        a.at(3).unwrap_err(),
        GrowVecError::OutOfRange {
            index: 3,
            size: 3,
            operation: "at",
        }
    );

    let empty: FixedArray<u8, 0> = FixedArray::new();
    assert!(empty.front().is_err());
    assert!(empty.back().is_err());
}

#[test]
#[should_panic(expected = "erase cursor 3 is out of range (size 3)")]
fn test_erase_past_end_panics() {
    let mut v = growvec![1, 2, 3];
    v.erase(v.end());
}

#[test]
#[should_panic(expected = "insertion cursor 4 is past the end (size 3)")]
fn test_insert_past_end_panics() {
    let mut v = growvec![1, 2, 3];
    v.insert(v.end() + 1, 0);
}

#[test]
#[should_panic(expected = "cursor range is inverted")]
fn test_erase_inverted_range_panics() {
    let mut v = growvec![1, 2, 3];
    v.erase_range(v.end(), v.begin());
}
