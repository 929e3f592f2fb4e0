use growvec::{growvec, GrowVec};

#[test]
fn test_iterator_empty_vector() {
    let v: GrowVec<i32> = GrowVec::new();

    let mut iter = v.iter();
    assert_eq!(iter.next(), None);
    assert_eq!(iter.size_hint(), (0, Some(0)));
}

#[test]
fn test_iterator_populated_vector() {
    let v = growvec!["hello", "world", "test"];

    let mut iter = v.iter();
    assert_eq!(iter.size_hint(), (3, Some(3)));

    assert_eq!(iter.next(), Some(&"hello"));
    assert_eq!(iter.size_hint(), (2, Some(2)));

    assert_eq!(iter.next(), Some(&"world"));
    assert_eq!(iter.len(), 1);

    assert_eq!(iter.next(), Some(&"test"));
    assert_eq!(iter.size_hint(), (0, Some(0)));

    assert_eq!(iter.next(), None);
}

#[test]
fn test_iterator_for_loop() {
    let v = growvec![1, 2, 3];
    let mut seen = Vec::new();
    for item in &v {
        seen.push(*item);
    }
    assert_eq!(seen, vec![1, 2, 3]);
}

#[test]
fn test_iterator_clone_restarts_from_same_point() {
    let v = growvec![1, 2, 3, 4];
    let mut iter = v.iter();
    iter.next();

    let copy = iter.clone();
    assert_eq!(iter.collect::<Vec<_>>(), copy.collect::<Vec<_>>());
}

#[test]
fn test_iterator_remaining_slice() {
    let v = growvec![1, 2, 3, 4];
    let mut iter = v.iter();
    iter.next();
    assert_eq!(iter.as_slice(), &[2, 3, 4]);
}

#[test]
fn test_iter_mut_is_live() {
    let mut v = growvec![1, 2, 3];
    for item in v.iter_mut() {
        *item *= 10;
    }
    assert_eq!(v, [10, 20, 30]);

    for item in &mut v {
        *item += 1;
    }
    assert_eq!(v, [11, 21, 31]);
}

#[test]
fn test_fresh_iterator_reflects_mutation() {
    let mut v = growvec![1, 2, 3];
    assert_eq!(v.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);

    v.push_back(4);
    v.erase(v.begin());
    assert_eq!(v.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4]);
}

#[test]
fn test_into_iter_yields_owned_values() {
    let v = growvec![String::from("a"), String::from("b"), String::from("c")];

    let collected: Vec<String> = v.into_iter().collect();
    assert_eq!(collected, vec!["a", "b", "c"]);
}

#[test]
fn test_into_iter_double_ended() {
    let v = growvec![1, 2, 3, 4, 5];
    let mut iter = v.into_iter();

    assert_eq!(iter.next(), Some(1));
    assert_eq!(iter.next_back(), Some(5));
    assert_eq!(iter.as_slice(), &[2, 3, 4]);
    assert_eq!(iter.len(), 3);
}

#[test]
fn test_into_iter_partial_consumption_drops_rest() {
    let v = growvec![String::from("x"), String::from("y"), String::from("z")];
    let mut iter = v.into_iter();
    assert_eq!(iter.next().as_deref(), Some("x"));
    // remaining elements and buffer are released here
    drop(iter);
}

#[test]
fn test_iterator_consumed_completely() {
    let v = growvec!['a', 'b'];
    let collected: Vec<_> = v.iter().collect();
    assert_eq!(collected, vec![&'a', &'b']);
}
