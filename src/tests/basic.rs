use crate::{
    errors::{PopError, PushError},
    HeapRb, StaticRb,
};

#[test]
fn capacity() {
    const CAP: usize = 13;
    let rb = StaticRb::<i32, CAP>::default();
    assert_eq!(rb.capacity().get(), CAP);
}

#[test]
fn fill_drain() {
    let rb = HeapRb::<i32>::new(5);

    assert!(rb.is_empty());
    assert!(!rb.is_full());
    assert_eq!(rb.len(), 0);
    assert_eq!(rb.vacant_len(), 5);

    for v in [10, 20, 30, 40, 50] {
        assert_eq!(rb.try_push(v), Ok(()));
    }
    assert!(rb.is_full());
    assert_eq!(rb.len(), 5);
    assert_eq!(rb.vacant_len(), 0);

    assert_eq!(rb.try_push(60), Err(PushError::Full(60)));
    assert_eq!(rb.len(), 5);

    for v in [10, 20, 30, 40, 50] {
        assert_eq!(rb.try_pop(), Ok(v));
    }
    assert!(rb.is_empty());
    assert_eq!(rb.try_pop(), Err(PopError::Empty));
}

#[test]
fn wraparound() {
    let rb = StaticRb::<i32, 3>::default();

    assert_eq!(rb.try_push(1), Ok(()));
    assert_eq!(rb.try_push(2), Ok(()));
    assert_eq!(rb.try_push(3), Ok(()));
    assert_eq!(rb.try_pop(), Ok(1));

    // Wraps past the physical end of the storage.
    assert_eq!(rb.try_push(4), Ok(()));

    assert_eq!(rb.try_pop(), Ok(2));
    assert_eq!(rb.try_pop(), Ok(3));
    assert_eq!(rb.try_pop(), Ok(4));
    assert_eq!(rb.try_pop(), Err(PopError::Empty));
}

#[test]
fn push_pop_one() {
    let rb = StaticRb::<i32, 2>::default();

    for v in [12, 34, 56, 78, 90] {
        assert_eq!(rb.try_push(v), Ok(()));
        assert_eq!(rb.len(), 1);
        assert_eq!(rb.try_pop(), Ok(v));
        assert_eq!(rb.try_pop(), Err(PopError::Empty));
    }
}

#[test]
fn empty_full() {
    let rb = StaticRb::<i32, 1>::default();

    assert!(rb.is_empty());
    assert!(!rb.is_full());

    assert_eq!(rb.try_push(123), Ok(()));

    assert!(!rb.is_empty());
    assert!(rb.is_full());
}

#[test]
fn len_vacant() {
    let rb = StaticRb::<i32, 2>::default();

    assert_eq!(rb.len(), 0);
    assert_eq!(rb.vacant_len(), 2);

    assert_eq!(rb.try_push(123), Ok(()));
    assert_eq!(rb.len(), 1);
    assert_eq!(rb.vacant_len(), 1);

    assert_eq!(rb.try_push(456), Ok(()));
    assert_eq!(rb.len(), 2);
    assert_eq!(rb.vacant_len(), 0);

    assert_eq!(rb.try_pop(), Ok(123));
    assert_eq!(rb.len(), 1);
    assert_eq!(rb.vacant_len(), 1);

    assert_eq!(rb.try_pop(), Ok(456));
    assert_eq!(rb.len(), 0);
    assert_eq!(rb.vacant_len(), 2);
}

#[test]
fn rejected_push_returns_item() {
    let rb = StaticRb::<String, 1>::default();
    rb.try_push("kept".to_owned()).unwrap();
    let err = rb.try_push("bounced".to_owned()).unwrap_err();
    assert_eq!(err.into_inner(), "bounced");
    assert_eq!(rb.try_pop().unwrap(), "kept");
}
