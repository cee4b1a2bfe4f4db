//! Counter lifecycle and concurrency tests against the public store API.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;
use std::thread;

use counterhub_core::{CounterError, CounterStore};

#[test]
fn absent_names_are_not_found() {
    let store = CounterStore::new();
    assert_eq!(store.get("unknown"), Err(CounterError::NotFound("unknown".into())));
    assert_eq!(store.increment("unknown"), Err(CounterError::NotFound("unknown".into())));
    assert_eq!(store.delete("unknown"), Err(CounterError::NotFound("unknown".into())));
    assert!(store.is_empty());
}

#[test]
fn deleted_counter_is_gone() {
    let store = CounterStore::new();
    store.create("dan").unwrap();
    store.delete("dan").unwrap();

    assert!(matches!(store.get("dan"), Err(CounterError::NotFound(_))));
    assert!(matches!(store.increment("dan"), Err(CounterError::NotFound(_))));
    assert!(matches!(store.delete("dan"), Err(CounterError::NotFound(_))));
    assert!(store.is_empty());
}

#[test]
fn recreate_after_delete_resets_to_zero() {
    let store = CounterStore::new();
    store.create("dan").unwrap();
    store.increment("dan").unwrap();
    store.delete("dan").unwrap();

    assert_eq!(store.create("dan").unwrap(), 0);
    assert_eq!(store.get("dan").unwrap(), 0);
}

#[test]
fn increment_returns_each_new_value() {
    let store = CounterStore::new();
    store.create("test").unwrap();
    for expected in 1..=5 {
        assert_eq!(store.increment("test").unwrap(), expected);
    }
    assert_eq!(store.get("test").unwrap(), 5);
}

#[test]
fn concurrent_increments_do_not_lose_updates() {
    const THREADS: u64 = 8;
    const PER_THREAD: u64 = 1_000;

    let store = Arc::new(CounterStore::new());
    store.create("hot").unwrap();

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for _ in 0..PER_THREAD {
                    store.increment("hot").unwrap();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    assert_eq!(store.get("hot").unwrap(), THREADS * PER_THREAD);
}

#[test]
fn concurrent_creates_admit_exactly_one() {
    let store = Arc::new(CounterStore::new());

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || store.create("race").is_ok())
        })
        .collect();
    let winners = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|ok| *ok)
        .count();

    assert_eq!(winners, 1);
    assert_eq!(store.len(), 1);
}
